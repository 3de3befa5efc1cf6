use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::{
    hierarchy::LevelOption,
    model::hierarchy::DivisionQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct DivisionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DivisionRepository<'a, C> {
    /// Creates a new instance of [`DivisionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a division, the id and timestamps of `division` are ignored
    pub async fn create(
        &self,
        division: entity::division::Model,
    ) -> Result<entity::division::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let division = entity::division::ActiveModel {
            name: ActiveValue::Set(division.name),
            state_id: ActiveValue::Set(division.state_id),
            created_by: ActiveValue::Set(division.created_by),
            updated_by: ActiveValue::Set(division.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Division::insert(division)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::division::Model>, DbErr> {
        entity::prelude::Division::find_by_id(id).one(self.db).await
    }

    /// Page of divisions sorted by name, optionally narrowed to one state
    pub async fn list(
        &self,
        query: &DivisionQuery,
        page: PageRequest,
    ) -> Result<Page<entity::division::Model>, DbErr> {
        let select = entity::prelude::Division::find()
            .apply_if(query.state, |q, state_id| {
                q.filter(entity::division::Column::StateId.eq(state_id))
            })
            .apply_if(
                search_condition(&[entity::division::Column::Name], query.search.as_deref()),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::division::Column::Name)
            .order_by_asc(entity::division::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Every division as a selectable option keyed to its state, sorted by name
    pub async fn options(&self) -> Result<Vec<LevelOption>, DbErr> {
        let rows: Vec<(i32, Option<i32>, String)> = entity::prelude::Division::find()
            .select_only()
            .column(entity::division::Column::Id)
            .column(entity::division::Column::StateId)
            .column(entity::division::Column::Name)
            .order_by_asc(entity::division::Column::Name)
            .order_by_asc(entity::division::Column::Id)
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

    /// Writes every field of `division` except its creation time
    pub async fn update(
        &self,
        division: entity::division::Model,
    ) -> Result<entity::division::Model, DbErr> {
        let division = entity::division::ActiveModel {
            id: ActiveValue::Unchanged(division.id),
            name: ActiveValue::Set(division.name),
            state_id: ActiveValue::Set(division.state_id),
            created_by: ActiveValue::Set(division.created_by),
            updated_by: ActiveValue::Set(division.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        division.update(self.db).await
    }

    /// Deletes a division
    ///
    /// Returns OK regardless of the division existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Division::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {

    mod list {
        use constituency_test_utils::prelude::*;

        use crate::{
            model::hierarchy::DivisionQuery,
            server::data::{division::DivisionRepository, query::PageRequest},
        };

        /// Expect only divisions of the filtered state
        #[tokio::test]
        async fn filters_by_state() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .with_hierarchy_chain("B")
                .build()
                .await?;
            let state_id = test.chains[1].state.id;

            let query = DivisionQuery {
                state: Some(state_id),
                ..Default::default()
            };
            let page = DivisionRepository::new(&test.db)
                .list(&query, PageRequest::default())
                .await?;

            assert_eq!(page.total, 1);
            assert_eq!(page.items[0].name, "Division B");

            Ok(())
        }
    }

    mod options {
        use constituency_test_utils::prelude::*;

        use crate::server::data::division::DivisionRepository;

        /// Expect options to carry the parent state id, orphans included
        #[tokio::test]
        async fn carries_parent_ids() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let orphan = test.hierarchy().insert_division("Orphan", None).await?;

            let options = DivisionRepository::new(&test.db).options().await?;

            assert_eq!(options.len(), 2);
            assert_eq!(options[0].name, "Division A");
            assert_eq!(options[0].parent_id, Some(test.first_chain().state.id));
            assert_eq!(options[1].id, orphan.id);
            assert_eq!(options[1].parent_id, None);

            Ok(())
        }
    }

    mod update {
        use constituency_test_utils::prelude::*;

        use crate::server::data::division::DivisionRepository;

        /// Expect the new name and parent to be stored and the creation time kept
        #[tokio::test]
        async fn updates_division() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .with_hierarchy_chain("B")
                .build()
                .await?;
            let mut division = test.chains[0].division.clone();
            division.name = "Renamed".to_string();
            division.state_id = Some(test.chains[1].state.id);

            let updated = DivisionRepository::new(&test.db)
                .update(division.clone())
                .await?;

            assert_eq!(updated.name, "Renamed");
            assert_eq!(updated.state_id, Some(test.chains[1].state.id));
            assert_eq!(updated.created_at, division.created_at);

            Ok(())
        }
    }
}
