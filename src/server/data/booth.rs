use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::{
    hierarchy::LevelOption,
    model::hierarchy::BoothQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct BoothRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoothRepository<'a, C> {
    /// Creates a new instance of [`BoothRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booth, the id and timestamps of `booth` are ignored
    pub async fn create(&self, booth: entity::booth::Model) -> Result<entity::booth::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let booth = entity::booth::ActiveModel {
            name: ActiveValue::Set(booth.name),
            booth_number: ActiveValue::Set(booth.booth_number),
            block_id: ActiveValue::Set(booth.block_id),
            full_address: ActiveValue::Set(booth.full_address),
            latitude: ActiveValue::Set(booth.latitude),
            longitude: ActiveValue::Set(booth.longitude),
            created_by: ActiveValue::Set(booth.created_by),
            updated_by: ActiveValue::Set(booth.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Booth::insert(booth)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::booth::Model>, DbErr> {
        entity::prelude::Booth::find_by_id(id).one(self.db).await
    }

    /// Page of booths sorted by name
    ///
    /// The booth number filter is an exact match, the search term also matches booth numbers.
    pub async fn list(
        &self,
        query: &BoothQuery,
        page: PageRequest,
    ) -> Result<Page<entity::booth::Model>, DbErr> {
        let select = entity::prelude::Booth::find()
            .apply_if(query.block, |q, block_id| {
                q.filter(entity::booth::Column::BlockId.eq(block_id))
            })
            .apply_if(query.booth_number.clone(), |q, booth_number| {
                q.filter(entity::booth::Column::BoothNumber.eq(booth_number))
            })
            .apply_if(
                search_condition(
                    &[entity::booth::Column::Name, entity::booth::Column::BoothNumber],
                    query.search.as_deref(),
                ),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::booth::Column::Name)
            .order_by_asc(entity::booth::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Every booth as a selectable option keyed to its block, sorted by name
    pub async fn options(&self) -> Result<Vec<LevelOption>, DbErr> {
        let rows: Vec<(i32, Option<i32>, String)> = entity::prelude::Booth::find()
            .select_only()
            .column(entity::booth::Column::Id)
            .column(entity::booth::Column::BlockId)
            .column(entity::booth::Column::Name)
            .order_by_asc(entity::booth::Column::Name)
            .order_by_asc(entity::booth::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, parent_id, name)| LevelOption {
                id,
                parent_id,
                name,
            })
            .collect())
    }

    /// Writes every field of `booth` except its creation time
    pub async fn update(&self, booth: entity::booth::Model) -> Result<entity::booth::Model, DbErr> {
        let booth = entity::booth::ActiveModel {
            id: ActiveValue::Unchanged(booth.id),
            name: ActiveValue::Set(booth.name),
            booth_number: ActiveValue::Set(booth.booth_number),
            block_id: ActiveValue::Set(booth.block_id),
            full_address: ActiveValue::Set(booth.full_address),
            latitude: ActiveValue::Set(booth.latitude),
            longitude: ActiveValue::Set(booth.longitude),
            created_by: ActiveValue::Set(booth.created_by),
            updated_by: ActiveValue::Set(booth.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        booth.update(self.db).await
    }

    /// Deletes a booth
    ///
    /// Returns OK regardless of the booth existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Booth::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {

    mod list {
        use constituency_test_utils::prelude::*;

        use crate::{
            model::hierarchy::BoothQuery,
            server::data::{booth::BoothRepository, query::PageRequest},
        };

        /// Expect search to match booth numbers as well as names
        #[tokio::test]
        async fn searches_booth_numbers() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let block_id = test.first_chain().block.id;
            test.hierarchy()
                .insert_booth("Primary School", "117", Some(block_id))
                .await?;

            let query = BoothQuery {
                search: Some("117".to_string()),
                ..Default::default()
            };
            let page = BoothRepository::new(&test.db)
                .list(&query, PageRequest::default())
                .await?;

            assert_eq!(page.total, 1);
            assert_eq!(page.items[0].name, "Primary School");

            Ok(())
        }

        /// Expect the block filter and booth number filter to combine
        #[tokio::test]
        async fn combines_filters() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let block_id = test.first_chain().block.id;
            test.hierarchy()
                .insert_booth("Second", "B-2", Some(block_id))
                .await?;
            test.hierarchy().insert_booth("Loose", "B-2", None).await?;

            let query = BoothQuery {
                block: Some(block_id),
                booth_number: Some("B-2".to_string()),
                ..Default::default()
            };
            let page = BoothRepository::new(&test.db)
                .list(&query, PageRequest::default())
                .await?;

            assert_eq!(page.total, 1);
            assert_eq!(page.items[0].name, "Second");

            Ok(())
        }
    }
}
