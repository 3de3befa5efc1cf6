use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::{
    hierarchy::LevelOption,
    model::hierarchy::ParliamentQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct ParliamentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParliamentRepository<'a, C> {
    /// Creates a new instance of [`ParliamentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a parliament, the id and timestamps of `parliament` are ignored
    pub async fn create(
        &self,
        parliament: entity::parliament::Model,
    ) -> Result<entity::parliament::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let parliament = entity::parliament::ActiveModel {
            name: ActiveValue::Set(parliament.name),
            division_id: ActiveValue::Set(parliament.division_id),
            created_by: ActiveValue::Set(parliament.created_by),
            updated_by: ActiveValue::Set(parliament.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Parliament::insert(parliament)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::parliament::Model>, DbErr> {
        entity::prelude::Parliament::find_by_id(id).one(self.db).await
    }

    /// Page of parliaments sorted by name, optionally narrowed to one division
    pub async fn list(
        &self,
        query: &ParliamentQuery,
        page: PageRequest,
    ) -> Result<Page<entity::parliament::Model>, DbErr> {
        let select = entity::prelude::Parliament::find()
            .apply_if(query.division, |q, division_id| {
                q.filter(entity::parliament::Column::DivisionId.eq(division_id))
            })
            .apply_if(
                search_condition(&[entity::parliament::Column::Name], query.search.as_deref()),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::parliament::Column::Name)
            .order_by_asc(entity::parliament::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Every parliament as a selectable option keyed to its division, sorted by name
    pub async fn options(&self) -> Result<Vec<LevelOption>, DbErr> {
        let rows: Vec<(i32, Option<i32>, String)> = entity::prelude::Parliament::find()
            .select_only()
            .column(entity::parliament::Column::Id)
            .column(entity::parliament::Column::DivisionId)
            .column(entity::parliament::Column::Name)
            .order_by_asc(entity::parliament::Column::Name)
            .order_by_asc(entity::parliament::Column::Id)
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

    /// Writes every field of `parliament` except its creation time
    pub async fn update(
        &self,
        parliament: entity::parliament::Model,
    ) -> Result<entity::parliament::Model, DbErr> {
        let parliament = entity::parliament::ActiveModel {
            id: ActiveValue::Unchanged(parliament.id),
            name: ActiveValue::Set(parliament.name),
            division_id: ActiveValue::Set(parliament.division_id),
            created_by: ActiveValue::Set(parliament.created_by),
            updated_by: ActiveValue::Set(parliament.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        parliament.update(self.db).await
    }

    /// Deletes a parliament
    ///
    /// Returns OK regardless of the parliament existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Parliament::delete_by_id(id).exec(self.db).await
    }
}
