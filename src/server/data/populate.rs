//! Batched reference lookups used to populate list and detail responses.
//!
//! Every foreign key of a page of records is resolved with one `IN (...)` query per referenced
//! table. Ids that no longer resolve populate as `None`.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use crate::model::api::{AuditDto, BoothRefDto, RefDto};

/// Display names of referenced records keyed by id.
#[derive(Clone, Debug, Default)]
pub struct NameLookup(HashMap<i32, String>);

impl NameLookup {
    /// Loads `name_column` of every row of `E` whose `id_column` is in `ids`.
    ///
    /// Runs no query when `ids` has no values.
    pub async fn load<C, E, I>(
        db: &C,
        id_column: E::Column,
        name_column: E::Column,
        ids: I,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        E: EntityTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        let ids: BTreeSet<i32> = ids.into_iter().flatten().collect();
        if ids.is_empty() {
            return Ok(Self::default());
        }

        let rows: Vec<(i32, String)> = E::find()
            .select_only()
            .column(id_column)
            .column(name_column)
            .filter(id_column.is_in(ids))
            .into_tuple()
            .all(db)
            .await?;

        Ok(Self(rows.into_iter().collect()))
    }

    /// Users are named by username.
    pub async fn users<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        Self::load::<_, entity::prelude::AppUser, _>(
            db,
            entity::app_user::Column::Id,
            entity::app_user::Column::Username,
            ids,
        )
        .await
    }

    pub async fn states<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        Self::load::<_, entity::prelude::State, _>(
            db,
            entity::state::Column::Id,
            entity::state::Column::Name,
            ids,
        )
        .await
    }

    pub async fn divisions<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        Self::load::<_, entity::prelude::Division, _>(
            db,
            entity::division::Column::Id,
            entity::division::Column::Name,
            ids,
        )
        .await
    }

    pub async fn parliaments<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        Self::load::<_, entity::prelude::Parliament, _>(
            db,
            entity::parliament::Column::Id,
            entity::parliament::Column::Name,
            ids,
        )
        .await
    }

    pub async fn assemblies<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        Self::load::<_, entity::prelude::Assembly, _>(
            db,
            entity::assembly::Column::Id,
            entity::assembly::Column::Name,
            ids,
        )
        .await
    }

    pub async fn blocks<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        Self::load::<_, entity::prelude::Block, _>(
            db,
            entity::block::Column::Id,
            entity::block::Column::Name,
            ids,
        )
        .await
    }

    pub async fn parties<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        Self::load::<_, entity::prelude::Party, _>(
            db,
            entity::party::Column::Id,
            entity::party::Column::Name,
            ids,
        )
        .await
    }

    pub async fn candidates<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        Self::load::<_, entity::prelude::Candidate, _>(
            db,
            entity::candidate::Column::Id,
            entity::candidate::Column::Name,
            ids,
        )
        .await
    }

    pub fn get(&self, id: Option<i32>) -> Option<RefDto> {
        let id = id?;

        self.0.get(&id).map(|name| RefDto {
            id,
            name: name.clone(),
        })
    }

    /// Audit block of a record, with this lookup holding its users.
    pub fn audit(
        &self,
        created_by: Option<i32>,
        updated_by: Option<i32>,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> AuditDto {
        AuditDto {
            created_by: self.get(created_by),
            updated_by: self.get(updated_by),
            created_at,
            updated_at,
        }
    }
}

/// Booth names and numbers keyed by id.
#[derive(Clone, Debug, Default)]
pub struct BoothLookup(HashMap<i32, (String, String)>);

impl BoothLookup {
    pub async fn load<C, I>(db: &C, ids: I) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = Option<i32>>,
    {
        let ids: BTreeSet<i32> = ids.into_iter().flatten().collect();
        if ids.is_empty() {
            return Ok(Self::default());
        }

        let rows: Vec<(i32, String, String)> = entity::prelude::Booth::find()
            .select_only()
            .column(entity::booth::Column::Id)
            .column(entity::booth::Column::Name)
            .column(entity::booth::Column::BoothNumber)
            .filter(entity::booth::Column::Id.is_in(ids))
            .into_tuple()
            .all(db)
            .await?;

        Ok(Self(
            rows.into_iter()
                .map(|(id, name, booth_number)| (id, (name, booth_number)))
                .collect(),
        ))
    }

    pub fn get(&self, id: Option<i32>) -> Option<BoothRefDto> {
        let id = id?;

        self.0.get(&id).map(|(name, booth_number)| BoothRefDto {
            id,
            name: name.clone(),
            booth_number: booth_number.clone(),
        })
    }
}

/// Names of every hierarchy level referenced by a page of records.
#[derive(Clone, Debug, Default)]
pub struct HierarchyLookup {
    pub states: NameLookup,
    pub divisions: NameLookup,
    pub parliaments: NameLookup,
    pub assemblies: NameLookup,
    pub blocks: NameLookup,
    pub booths: BoothLookup,
}

impl HierarchyLookup {
    /// Loads the six levels concurrently. `refs` yields a record's ids root first, in the
    /// order of [`Level::ALL`](crate::hierarchy::Level::ALL).
    pub async fn load<C, T>(
        db: &C,
        records: &[T],
        refs: impl Fn(&T) -> [Option<i32>; 6],
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let ids: Vec<[Option<i32>; 6]> = records.iter().map(refs).collect();
        let column = |i: usize| ids.iter().map(move |r| r[i]);

        let (states, divisions, parliaments, assemblies, blocks, booths) = tokio::try_join!(
            NameLookup::states(db, column(0)),
            NameLookup::divisions(db, column(1)),
            NameLookup::parliaments(db, column(2)),
            NameLookup::assemblies(db, column(3)),
            NameLookup::blocks(db, column(4)),
            BoothLookup::load(db, column(5)),
        )?;

        Ok(Self {
            states,
            divisions,
            parliaments,
            assemblies,
            blocks,
            booths,
        })
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use super::*;

    /// Expect referenced records to resolve to their names and dangling ids to `None`
    #[tokio::test]
    async fn resolves_names_and_skips_dangling_ids() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_hierarchy_tables()
            .with_hierarchy_chain("A")
            .build()
            .await?;
        let chain = test.first_chain();

        let lookup = NameLookup::states(&test.db, [Some(chain.state.id), Some(999), None]).await?;

        assert_eq!(
            lookup.get(Some(chain.state.id)),
            Some(RefDto {
                id: chain.state.id,
                name: "State A".to_string()
            })
        );
        assert_eq!(lookup.get(Some(999)), None);
        assert_eq!(lookup.get(None), None);

        Ok(())
    }

    /// Expect booths to carry their booth number
    #[tokio::test]
    async fn resolves_booth_numbers() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_hierarchy_tables()
            .with_hierarchy_chain("A")
            .build()
            .await?;
        let booth_id = test.first_chain().booth.id;

        let lookup = BoothLookup::load(&test.db, [Some(booth_id)]).await?;
        let booth = lookup.get(Some(booth_id)).unwrap();

        assert_eq!(booth.booth_number, "B-A");

        Ok(())
    }

    /// Expect no query, and so no error, when there are no ids even without tables
    #[tokio::test]
    async fn empty_ids_skip_query() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let lookup = NameLookup::users(&test.db, [None, None]).await?;

        assert_eq!(lookup.get(Some(1)), None);

        Ok(())
    }
}
