use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::influencer::InfluencerQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct InfluencerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InfluencerRepository<'a, C> {
    /// Creates a new instance of [`InfluencerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an influencer, the id and timestamps of `influencer` are ignored
    pub async fn create(
        &self,
        influencer: entity::influencer::Model,
    ) -> Result<entity::influencer::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let influencer = entity::influencer::ActiveModel {
            name: ActiveValue::Set(influencer.name),
            contact_number: ActiveValue::Set(influencer.contact_number),
            alternate_number: ActiveValue::Set(influencer.alternate_number),
            email: ActiveValue::Set(influencer.email),
            full_address: ActiveValue::Set(influencer.full_address),
            state_id: ActiveValue::Set(influencer.state_id),
            division_id: ActiveValue::Set(influencer.division_id),
            parliament_id: ActiveValue::Set(influencer.parliament_id),
            assembly_id: ActiveValue::Set(influencer.assembly_id),
            block_id: ActiveValue::Set(influencer.block_id),
            booth_id: ActiveValue::Set(influencer.booth_id),
            created_by: ActiveValue::Set(influencer.created_by),
            updated_by: ActiveValue::Set(influencer.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Influencer::insert(influencer)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::influencer::Model>, DbErr> {
        entity::prelude::Influencer::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_contact_number(
        &self,
        contact_number: &str,
    ) -> Result<Option<entity::influencer::Model>, DbErr> {
        entity::prelude::Influencer::find()
            .filter(entity::influencer::Column::ContactNumber.eq(contact_number))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::influencer::Model>, DbErr> {
        entity::prelude::Influencer::find()
            .filter(entity::influencer::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Page of influencers sorted by name
    pub async fn list(
        &self,
        query: &InfluencerQuery,
        page: PageRequest,
    ) -> Result<Page<entity::influencer::Model>, DbErr> {
        let select = entity::prelude::Influencer::find()
            .apply_if(query.state, |q, id| {
                q.filter(entity::influencer::Column::StateId.eq(id))
            })
            .apply_if(query.division, |q, id| {
                q.filter(entity::influencer::Column::DivisionId.eq(id))
            })
            .apply_if(query.parliament, |q, id| {
                q.filter(entity::influencer::Column::ParliamentId.eq(id))
            })
            .apply_if(query.assembly, |q, id| {
                q.filter(entity::influencer::Column::AssemblyId.eq(id))
            })
            .apply_if(query.block, |q, id| {
                q.filter(entity::influencer::Column::BlockId.eq(id))
            })
            .apply_if(query.booth, |q, id| {
                q.filter(entity::influencer::Column::BoothId.eq(id))
            })
            .apply_if(
                search_condition(
                    &[
                        entity::influencer::Column::Name,
                        entity::influencer::Column::ContactNumber,
                        entity::influencer::Column::Email,
                    ],
                    query.search.as_deref(),
                ),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::influencer::Column::Name)
            .order_by_asc(entity::influencer::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `influencer` except its creation time
    pub async fn update(
        &self,
        influencer: entity::influencer::Model,
    ) -> Result<entity::influencer::Model, DbErr> {
        let influencer = entity::influencer::ActiveModel {
            id: ActiveValue::Unchanged(influencer.id),
            name: ActiveValue::Set(influencer.name),
            contact_number: ActiveValue::Set(influencer.contact_number),
            alternate_number: ActiveValue::Set(influencer.alternate_number),
            email: ActiveValue::Set(influencer.email),
            full_address: ActiveValue::Set(influencer.full_address),
            state_id: ActiveValue::Set(influencer.state_id),
            division_id: ActiveValue::Set(influencer.division_id),
            parliament_id: ActiveValue::Set(influencer.parliament_id),
            assembly_id: ActiveValue::Set(influencer.assembly_id),
            block_id: ActiveValue::Set(influencer.block_id),
            booth_id: ActiveValue::Set(influencer.booth_id),
            created_by: ActiveValue::Set(influencer.created_by),
            updated_by: ActiveValue::Set(influencer.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        influencer.update(self.db).await
    }

    /// Deletes an influencer
    ///
    /// Returns OK regardless of the influencer existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Influencer::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
