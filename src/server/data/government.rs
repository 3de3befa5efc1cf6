use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::government::GovernmentQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct GovernmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GovernmentRepository<'a, C> {
    /// Creates a new instance of [`GovernmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a government project, the id and timestamps of `government` are ignored
    pub async fn create(
        &self,
        government: entity::government::Model,
    ) -> Result<entity::government::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let government = entity::government::ActiveModel {
            name: ActiveValue::Set(government.name),
            kind: ActiveValue::Set(government.kind),
            project_complete_date: ActiveValue::Set(government.project_complete_date),
            amount: ActiveValue::Set(government.amount),
            state_id: ActiveValue::Set(government.state_id),
            division_id: ActiveValue::Set(government.division_id),
            parliament_id: ActiveValue::Set(government.parliament_id),
            assembly_id: ActiveValue::Set(government.assembly_id),
            block_id: ActiveValue::Set(government.block_id),
            booth_id: ActiveValue::Set(government.booth_id),
            created_by: ActiveValue::Set(government.created_by),
            updated_by: ActiveValue::Set(government.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Government::insert(government)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::government::Model>, DbErr> {
        entity::prelude::Government::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Page of government projects sorted by name
    pub async fn list(
        &self,
        query: &GovernmentQuery,
        page: PageRequest,
    ) -> Result<Page<entity::government::Model>, DbErr> {
        let select = entity::prelude::Government::find()
            .apply_if(query.kind, |q, kind| {
                q.filter(entity::government::Column::Kind.eq(kind.as_str()))
            })
            .apply_if(query.state, |q, id| {
                q.filter(entity::government::Column::StateId.eq(id))
            })
            .apply_if(query.division, |q, id| {
                q.filter(entity::government::Column::DivisionId.eq(id))
            })
            .apply_if(query.parliament, |q, id| {
                q.filter(entity::government::Column::ParliamentId.eq(id))
            })
            .apply_if(query.assembly, |q, id| {
                q.filter(entity::government::Column::AssemblyId.eq(id))
            })
            .apply_if(query.block, |q, id| {
                q.filter(entity::government::Column::BlockId.eq(id))
            })
            .apply_if(query.booth, |q, id| {
                q.filter(entity::government::Column::BoothId.eq(id))
            })
            .apply_if(
                search_condition(&[entity::government::Column::Name], query.search.as_deref()),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::government::Column::Name)
            .order_by_asc(entity::government::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `government` except its creation time
    pub async fn update(
        &self,
        government: entity::government::Model,
    ) -> Result<entity::government::Model, DbErr> {
        let government = entity::government::ActiveModel {
            id: ActiveValue::Unchanged(government.id),
            name: ActiveValue::Set(government.name),
            kind: ActiveValue::Set(government.kind),
            project_complete_date: ActiveValue::Set(government.project_complete_date),
            amount: ActiveValue::Set(government.amount),
            state_id: ActiveValue::Set(government.state_id),
            division_id: ActiveValue::Set(government.division_id),
            parliament_id: ActiveValue::Set(government.parliament_id),
            assembly_id: ActiveValue::Set(government.assembly_id),
            block_id: ActiveValue::Set(government.block_id),
            booth_id: ActiveValue::Set(government.booth_id),
            created_by: ActiveValue::Set(government.created_by),
            updated_by: ActiveValue::Set(government.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        government.update(self.db).await
    }

    /// Deletes a government project
    ///
    /// Returns OK regardless of the project existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Government::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
