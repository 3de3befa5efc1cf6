use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::booth_vote::BoothVoteQuery,
    server::data::query::{fetch_page, Page, PageRequest},
};

pub struct BoothVoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoothVoteRepository<'a, C> {
    /// Creates a new instance of [`BoothVoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booth vote count, the id and timestamps of `vote` are ignored
    pub async fn create(
        &self,
        vote: entity::booth_vote::Model,
    ) -> Result<entity::booth_vote::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let vote = entity::booth_vote::ActiveModel {
            candidate_id: ActiveValue::Set(vote.candidate_id),
            booth_id: ActiveValue::Set(vote.booth_id),
            total_votes: ActiveValue::Set(vote.total_votes),
            created_by: ActiveValue::Set(vote.created_by),
            updated_by: ActiveValue::Set(vote.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::BoothVote::insert(vote)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::booth_vote::Model>, DbErr> {
        entity::prelude::BoothVote::find_by_id(id)
            .one(self.db)
            .await
    }

    /// The vote count of a candidate at a booth, if recorded
    pub async fn find_by_candidate_and_booth(
        &self,
        candidate_id: i32,
        booth_id: i32,
    ) -> Result<Option<entity::booth_vote::Model>, DbErr> {
        entity::prelude::BoothVote::find()
            .filter(entity::booth_vote::Column::CandidateId.eq(candidate_id))
            .filter(entity::booth_vote::Column::BoothId.eq(booth_id))
            .one(self.db)
            .await
    }

    /// Page of booth votes, highest count first
    pub async fn list(
        &self,
        query: &BoothVoteQuery,
        page: PageRequest,
    ) -> Result<Page<entity::booth_vote::Model>, DbErr> {
        let select = entity::prelude::BoothVote::find()
            .apply_if(query.booth, |q, id| {
                q.filter(entity::booth_vote::Column::BoothId.eq(id))
            })
            .apply_if(query.candidate, |q, id| {
                q.filter(entity::booth_vote::Column::CandidateId.eq(id))
            })
            .order_by_desc(entity::booth_vote::Column::TotalVotes)
            .order_by_asc(entity::booth_vote::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `vote` except its creation time
    pub async fn update(
        &self,
        vote: entity::booth_vote::Model,
    ) -> Result<entity::booth_vote::Model, DbErr> {
        let vote = entity::booth_vote::ActiveModel {
            id: ActiveValue::Unchanged(vote.id),
            candidate_id: ActiveValue::Set(vote.candidate_id),
            booth_id: ActiveValue::Set(vote.booth_id),
            total_votes: ActiveValue::Set(vote.total_votes),
            created_by: ActiveValue::Set(vote.created_by),
            updated_by: ActiveValue::Set(vote.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        vote.update(self.db).await
    }

    /// Deletes a booth vote
    ///
    /// Returns OK regardless of the vote existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BoothVote::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
