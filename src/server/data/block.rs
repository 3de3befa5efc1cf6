use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::{
    hierarchy::LevelOption,
    model::hierarchy::BlockQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct BlockRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlockRepository<'a, C> {
    /// Creates a new instance of [`BlockRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a block, the id and timestamps of `block` are ignored
    pub async fn create(
        &self,
        block: entity::block::Model,
    ) -> Result<entity::block::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let block = entity::block::ActiveModel {
            name: ActiveValue::Set(block.name),
            assembly_id: ActiveValue::Set(block.assembly_id),
            created_by: ActiveValue::Set(block.created_by),
            updated_by: ActiveValue::Set(block.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Block::insert(block)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::block::Model>, DbErr> {
        entity::prelude::Block::find_by_id(id).one(self.db).await
    }

    /// Page of blocks sorted by name, optionally narrowed to one assembly
    pub async fn list(
        &self,
        query: &BlockQuery,
        page: PageRequest,
    ) -> Result<Page<entity::block::Model>, DbErr> {
        let select = entity::prelude::Block::find()
            .apply_if(query.assembly, |q, assembly_id| {
                q.filter(entity::block::Column::AssemblyId.eq(assembly_id))
            })
            .apply_if(
                search_condition(&[entity::block::Column::Name], query.search.as_deref()),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::block::Column::Name)
            .order_by_asc(entity::block::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Every block as a selectable option keyed to its assembly, sorted by name
    pub async fn options(&self) -> Result<Vec<LevelOption>, DbErr> {
        let rows: Vec<(i32, Option<i32>, String)> = entity::prelude::Block::find()
            .select_only()
            .column(entity::block::Column::Id)
            .column(entity::block::Column::AssemblyId)
            .column(entity::block::Column::Name)
            .order_by_asc(entity::block::Column::Name)
            .order_by_asc(entity::block::Column::Id)
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

    /// Writes every field of `block` except its creation time
    pub async fn update(
        &self,
        block: entity::block::Model,
    ) -> Result<entity::block::Model, DbErr> {
        let block = entity::block::ActiveModel {
            id: ActiveValue::Unchanged(block.id),
            name: ActiveValue::Set(block.name),
            assembly_id: ActiveValue::Set(block.assembly_id),
            created_by: ActiveValue::Set(block.created_by),
            updated_by: ActiveValue::Set(block.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        block.update(self.db).await
    }

    /// Deletes a block
    ///
    /// Returns OK regardless of the block existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Block::delete_by_id(id).exec(self.db).await
    }
}
