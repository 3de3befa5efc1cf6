use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::potential_candidate::PotentialCandidateQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct PotentialCandidateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PotentialCandidateRepository<'a, C> {
    /// Creates a new instance of [`PotentialCandidateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a potential candidate, the id and timestamps of `candidate` are ignored
    pub async fn create(
        &self,
        candidate: entity::potential_candidate::Model,
    ) -> Result<entity::potential_candidate::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let candidate = entity::potential_candidate::ActiveModel {
            name: ActiveValue::Set(candidate.name),
            party_id: ActiveValue::Set(candidate.party_id),
            assembly_id: ActiveValue::Set(candidate.assembly_id),
            election_year: ActiveValue::Set(candidate.election_year),
            history: ActiveValue::Set(candidate.history),
            post_name: ActiveValue::Set(candidate.post_name),
            post_from: ActiveValue::Set(candidate.post_from),
            post_to: ActiveValue::Set(candidate.post_to),
            post_place: ActiveValue::Set(candidate.post_place),
            pros: ActiveValue::Set(candidate.pros),
            cons: ActiveValue::Set(candidate.cons),
            image: ActiveValue::Set(candidate.image),
            status: ActiveValue::Set(candidate.status),
            created_by: ActiveValue::Set(candidate.created_by),
            updated_by: ActiveValue::Set(candidate.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::PotentialCandidate::insert(candidate)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::potential_candidate::Model>, DbErr> {
        entity::prelude::PotentialCandidate::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Page of potential candidates sorted by name
    pub async fn list(
        &self,
        query: &PotentialCandidateQuery,
        page: PageRequest,
    ) -> Result<Page<entity::potential_candidate::Model>, DbErr> {
        let select = entity::prelude::PotentialCandidate::find()
            .apply_if(query.party, |q, id| {
                q.filter(entity::potential_candidate::Column::PartyId.eq(id))
            })
            .apply_if(query.assembly, |q, id| {
                q.filter(entity::potential_candidate::Column::AssemblyId.eq(id))
            })
            .apply_if(query.election_year, |q, year| {
                q.filter(entity::potential_candidate::Column::ElectionYear.eq(year))
            })
            .apply_if(query.status, |q, status| {
                q.filter(entity::potential_candidate::Column::Status.eq(status.as_str()))
            })
            .apply_if(
                search_condition(
                    &[
                        entity::potential_candidate::Column::Name,
                        entity::potential_candidate::Column::PostName,
                    ],
                    query.search.as_deref(),
                ),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::potential_candidate::Column::Name)
            .order_by_asc(entity::potential_candidate::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `candidate` except its creation time
    pub async fn update(
        &self,
        candidate: entity::potential_candidate::Model,
    ) -> Result<entity::potential_candidate::Model, DbErr> {
        let candidate = entity::potential_candidate::ActiveModel {
            id: ActiveValue::Unchanged(candidate.id),
            name: ActiveValue::Set(candidate.name),
            party_id: ActiveValue::Set(candidate.party_id),
            assembly_id: ActiveValue::Set(candidate.assembly_id),
            election_year: ActiveValue::Set(candidate.election_year),
            history: ActiveValue::Set(candidate.history),
            post_name: ActiveValue::Set(candidate.post_name),
            post_from: ActiveValue::Set(candidate.post_from),
            post_to: ActiveValue::Set(candidate.post_to),
            post_place: ActiveValue::Set(candidate.post_place),
            pros: ActiveValue::Set(candidate.pros),
            cons: ActiveValue::Set(candidate.cons),
            image: ActiveValue::Set(candidate.image),
            status: ActiveValue::Set(candidate.status),
            created_by: ActiveValue::Set(candidate.created_by),
            updated_by: ActiveValue::Set(candidate.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        candidate.update(self.db).await
    }

    /// Deletes a potential candidate
    ///
    /// Returns OK regardless of the record existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PotentialCandidate::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
