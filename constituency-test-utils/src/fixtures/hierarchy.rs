//! Hierarchy fixtures.
//!
//! Inserts state, division, parliament, assembly, block and booth records. Parent ids are
//! written as given, so tests can also build deliberately broken chains.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AssemblyModel, BlockModel, BoothModel, DivisionModel, ParliamentModel, StateModel},
    TestContext,
};

/// One record for every hierarchy level, each the child of the previous one.
#[derive(Clone, Debug)]
pub struct HierarchyChain {
    pub state: StateModel,
    pub division: DivisionModel,
    pub parliament: ParliamentModel,
    pub assembly: AssemblyModel,
    pub block: BlockModel,
    pub booth: BoothModel,
}

impl TestContext {
    pub fn hierarchy<'a>(&'a self) -> HierarchyFixtures<'a> {
        HierarchyFixtures { setup: self }
    }
}

pub struct HierarchyFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> HierarchyFixtures<'a> {
    pub async fn insert_state(&self, name: &str) -> Result<StateModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::State::insert(entity::state::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_division(
        &self,
        name: &str,
        state_id: Option<i32>,
    ) -> Result<DivisionModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Division::insert(entity::division::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                state_id: ActiveValue::Set(state_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_parliament(
        &self,
        name: &str,
        division_id: Option<i32>,
    ) -> Result<ParliamentModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Parliament::insert(entity::parliament::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                division_id: ActiveValue::Set(division_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_assembly(
        &self,
        name: &str,
        parliament_id: Option<i32>,
    ) -> Result<AssemblyModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Assembly::insert(entity::assembly::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                parliament_id: ActiveValue::Set(parliament_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_block(
        &self,
        name: &str,
        assembly_id: Option<i32>,
    ) -> Result<BlockModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Block::insert(entity::block::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                assembly_id: ActiveValue::Set(assembly_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_booth(
        &self,
        name: &str,
        booth_number: &str,
        block_id: Option<i32>,
    ) -> Result<BoothModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Booth::insert(entity::booth::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                booth_number: ActiveValue::Set(booth_number.to_string()),
                block_id: ActiveValue::Set(block_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert one consistent record per level named `"<Level> <suffix>"`.
    ///
    /// The booth number is `"B-<suffix>"`.
    pub async fn insert_chain(&self, suffix: &str) -> Result<HierarchyChain, TestError> {
        let state = self.insert_state(&format!("State {}", suffix)).await?;
        let division = self
            .insert_division(&format!("Division {}", suffix), Some(state.id))
            .await?;
        let parliament = self
            .insert_parliament(&format!("Parliament {}", suffix), Some(division.id))
            .await?;
        let assembly = self
            .insert_assembly(&format!("Assembly {}", suffix), Some(parliament.id))
            .await?;
        let block = self
            .insert_block(&format!("Block {}", suffix), Some(assembly.id))
            .await?;
        let booth = self
            .insert_booth(
                &format!("Booth {}", suffix),
                &format!("B-{}", suffix),
                Some(block.id),
            )
            .await?;

        Ok(HierarchyChain {
            state,
            division,
            parliament,
            assembly,
            block,
            booth,
        })
    }
}
