use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::{
    model::status::StatusQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct StatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatusRepository<'a, C> {
    /// Creates a new instance of [`StatusRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a status, the id and timestamps of `status` are ignored
    pub async fn create(
        &self,
        status: entity::status::Model,
    ) -> Result<entity::status::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let status = entity::status::ActiveModel {
            name: ActiveValue::Set(status.name),
            description: ActiveValue::Set(status.description),
            is_active: ActiveValue::Set(status.is_active),
            is_system: ActiveValue::Set(status.is_system),
            color_code: ActiveValue::Set(status.color_code),
            created_by: ActiveValue::Set(status.created_by),
            updated_by: ActiveValue::Set(status.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Status::insert(status)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::status::Model>, DbErr> {
        entity::prelude::Status::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::status::Model>, DbErr> {
        entity::prelude::Status::find()
            .filter(entity::status::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Page of statuses sorted by name
    pub async fn list(
        &self,
        query: &StatusQuery,
        page: PageRequest,
    ) -> Result<Page<entity::status::Model>, DbErr> {
        let select = entity::prelude::Status::find()
            .apply_if(query.active, |q, active| {
                q.filter(entity::status::Column::IsActive.eq(active))
            })
            .apply_if(query.system, |q, system| {
                q.filter(entity::status::Column::IsSystem.eq(system))
            })
            .apply_if(
                search_condition(
                    &[entity::status::Column::Name, entity::status::Column::Description],
                    query.search.as_deref(),
                ),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::status::Column::Name)
            .order_by_asc(entity::status::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Writes every field of `status` except its creation time
    pub async fn update(
        &self,
        status: entity::status::Model,
    ) -> Result<entity::status::Model, DbErr> {
        let status = entity::status::ActiveModel {
            id: ActiveValue::Unchanged(status.id),
            name: ActiveValue::Set(status.name),
            description: ActiveValue::Set(status.description),
            is_active: ActiveValue::Set(status.is_active),
            is_system: ActiveValue::Set(status.is_system),
            color_code: ActiveValue::Set(status.color_code),
            created_by: ActiveValue::Set(status.created_by),
            updated_by: ActiveValue::Set(status.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        status.update(self.db).await
    }

    /// Deletes a status
    ///
    /// Returns OK regardless of the status existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Status::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::status::StatusQuery,
        server::data::{query::PageRequest, status::StatusRepository},
    };

    /// Expect the system filter to return only system statuses
    #[tokio::test]
    async fn filters_system_statuses() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.record().insert_status("Open", true).await?;
        test.record().insert_status("Follow up", false).await?;

        let query = StatusQuery {
            system: Some(true),
            ..Default::default()
        };
        let page = StatusRepository::new(&test.db)
            .list(&query, PageRequest::default())
            .await?;

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Open");

        Ok(())
    }
}
