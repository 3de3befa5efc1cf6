use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::{
    hierarchy::LevelOption,
    model::hierarchy::StateQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct StateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StateRepository<'a, C> {
    /// Creates a new instance of [`StateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a state, the id and timestamps of `state` are ignored
    pub async fn create(&self, state: entity::state::Model) -> Result<entity::state::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let state = entity::state::ActiveModel {
            name: ActiveValue::Set(state.name),
            created_by: ActiveValue::Set(state.created_by),
            updated_by: ActiveValue::Set(state.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::State::insert(state)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::state::Model>, DbErr> {
        entity::prelude::State::find_by_id(id).one(self.db).await
    }

    /// Page of states sorted by name
    pub async fn list(
        &self,
        query: &StateQuery,
        page: PageRequest,
    ) -> Result<Page<entity::state::Model>, DbErr> {
        let select = entity::prelude::State::find()
            .apply_if(
                search_condition(&[entity::state::Column::Name], query.search.as_deref()),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::state::Column::Name)
            .order_by_asc(entity::state::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Every state as a selectable option, sorted by name
    pub async fn options(&self) -> Result<Vec<LevelOption>, DbErr> {
        let rows: Vec<(i32, String)> = entity::prelude::State::find()
            .select_only()
            .column(entity::state::Column::Id)
            .column(entity::state::Column::Name)
            .order_by_asc(entity::state::Column::Name)
            .order_by_asc(entity::state::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| LevelOption {
                id,
                parent_id: None,
                name,
            })
            .collect())
    }

    /// Writes every field of `state` except its creation time
    pub async fn update(&self, state: entity::state::Model) -> Result<entity::state::Model, DbErr> {
        let state = entity::state::ActiveModel {
            id: ActiveValue::Unchanged(state.id),
            name: ActiveValue::Set(state.name),
            created_by: ActiveValue::Set(state.created_by),
            updated_by: ActiveValue::Set(state.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        state.update(self.db).await
    }

    /// Deletes a state
    ///
    /// Returns OK regardless of the state existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::State::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use constituency_test_utils::prelude::*;

        use crate::server::data::state::StateRepository;

        /// Expect the inserted state to get an id and timestamps
        #[tokio::test]
        async fn creates_state() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;

            let state = entity::state::Model {
                id: 0,
                name: "Bihar".to_string(),
                created_by: None,
                updated_by: None,
                created_at: Default::default(),
                updated_at: Default::default(),
            };
            let created = StateRepository::new(&test.db).create(state).await?;

            assert!(created.id > 0);
            assert_eq!(created.name, "Bihar");
            assert_eq!(created.created_at, created.updated_at);

            Ok(())
        }
    }

    mod list {
        use constituency_test_utils::prelude::*;

        use crate::{
            model::hierarchy::StateQuery,
            server::data::{query::PageRequest, state::StateRepository},
        };

        /// Expect pages in name order with the total of the full result set
        #[tokio::test]
        async fn paginates_in_name_order() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            for name in ["Gamma", "Alpha", "Epsilon", "Beta", "Delta"] {
                test.hierarchy().insert_state(name).await?;
            }

            let repo = StateRepository::new(&test.db);
            let page = repo
                .list(&StateQuery::default(), PageRequest::new(Some(2), Some(2)).unwrap())
                .await?;

            let names: Vec<&str> = page.items.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["Delta", "Epsilon"]);
            assert_eq!(page.total, 5);
            assert_eq!(page.meta().pages, 3);
            assert_eq!(page.meta().count, 2);

            Ok(())
        }

        /// Expect search to match case-insensitively
        #[tokio::test]
        async fn searches_case_insensitively() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            test.hierarchy().insert_state("Uttar Pradesh").await?;
            test.hierarchy().insert_state("Madhya Pradesh").await?;
            test.hierarchy().insert_state("Kerala").await?;

            let query = StateQuery {
                search: Some("PRADESH".to_string()),
                ..Default::default()
            };
            let page = StateRepository::new(&test.db)
                .list(&query, PageRequest::default())
                .await?;

            assert_eq!(page.total, 2);

            Ok(())
        }

        /// Expect LIKE wildcards in the search term to match literally
        #[tokio::test]
        async fn treats_wildcards_literally() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            test.hierarchy().insert_state("North_East").await?;
            test.hierarchy().insert_state("NorthXEast").await?;

            let query = StateQuery {
                search: Some("h_e".to_string()),
                ..Default::default()
            };
            let page = StateRepository::new(&test.db)
                .list(&query, PageRequest::default())
                .await?;

            assert_eq!(page.total, 1);
            assert_eq!(page.items[0].name, "North_East");

            Ok(())
        }
    }

    mod delete {
        use constituency_test_utils::prelude::*;

        use crate::server::data::state::StateRepository;

        /// Expect one affected row for an existing state and none afterwards
        #[tokio::test]
        async fn deletes_state() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            let state = test.hierarchy().insert_state("Goa").await?;

            let repo = StateRepository::new(&test.db);

            assert_eq!(repo.delete(state.id).await?.rows_affected, 1);
            assert_eq!(repo.delete(state.id).await?.rows_affected, 0);

            Ok(())
        }
    }
}
