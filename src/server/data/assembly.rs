use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::{
    hierarchy::LevelOption,
    model::hierarchy::AssemblyQuery,
    server::data::query::{fetch_page, search_condition, Page, PageRequest},
};

pub struct AssemblyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssemblyRepository<'a, C> {
    /// Creates a new instance of [`AssemblyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a assembly, the id and timestamps of `assembly` are ignored
    pub async fn create(
        &self,
        assembly: entity::assembly::Model,
    ) -> Result<entity::assembly::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let assembly = entity::assembly::ActiveModel {
            name: ActiveValue::Set(assembly.name),
            parliament_id: ActiveValue::Set(assembly.parliament_id),
            created_by: ActiveValue::Set(assembly.created_by),
            updated_by: ActiveValue::Set(assembly.updated_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Assembly::insert(assembly)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::assembly::Model>, DbErr> {
        entity::prelude::Assembly::find_by_id(id).one(self.db).await
    }

    /// Page of assemblies sorted by name, optionally narrowed to one parliament
    pub async fn list(
        &self,
        query: &AssemblyQuery,
        page: PageRequest,
    ) -> Result<Page<entity::assembly::Model>, DbErr> {
        let select = entity::prelude::Assembly::find()
            .apply_if(query.parliament, |q, parliament_id| {
                q.filter(entity::assembly::Column::ParliamentId.eq(parliament_id))
            })
            .apply_if(
                search_condition(&[entity::assembly::Column::Name], query.search.as_deref()),
                |q, condition| q.filter(condition),
            )
            .order_by_asc(entity::assembly::Column::Name)
            .order_by_asc(entity::assembly::Column::Id);

        fetch_page(self.db, select, page).await
    }

    /// Every assembly as a selectable option keyed to its parliament, sorted by name
    pub async fn options(&self) -> Result<Vec<LevelOption>, DbErr> {
        let rows: Vec<(i32, Option<i32>, String)> = entity::prelude::Assembly::find()
            .select_only()
            .column(entity::assembly::Column::Id)
            .column(entity::assembly::Column::ParliamentId)
            .column(entity::assembly::Column::Name)
            .order_by_asc(entity::assembly::Column::Name)
            .order_by_asc(entity::assembly::Column::Id)
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

    /// Writes every field of `assembly` except its creation time
    pub async fn update(
        &self,
        assembly: entity::assembly::Model,
    ) -> Result<entity::assembly::Model, DbErr> {
        let assembly = entity::assembly::ActiveModel {
            id: ActiveValue::Unchanged(assembly.id),
            name: ActiveValue::Set(assembly.name),
            parliament_id: ActiveValue::Set(assembly.parliament_id),
            created_by: ActiveValue::Set(assembly.created_by),
            updated_by: ActiveValue::Set(assembly.updated_by),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        assembly.update(self.db).await
    }

    /// Deletes a assembly
    ///
    /// Returns OK regardless of the assembly existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Assembly::delete_by_id(id).exec(self.db).await
    }
}
