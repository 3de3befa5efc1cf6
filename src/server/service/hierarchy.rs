//! Option lists for cascading hierarchy selectors.
//!
//! Loads every level's full list so a client can run [`resolve_children`] locally, or resolves
//! a set of selections server-side.

use sea_orm::DatabaseConnection;

use crate::{
    hierarchy::{resolve_children, Level, LevelConfig, Resolution, Selections},
    model::hierarchy::{HierarchyDto, ResolveQuery},
    server::{
        data::{
            assembly::AssemblyRepository, block::BlockRepository, booth::BoothRepository,
            division::DivisionRepository, parliament::ParliamentRepository,
            state::StateRepository,
        },
        error::Error,
    },
};

pub struct HierarchyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HierarchyService<'a> {
    /// Creates a new instance of [`HierarchyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Full option list of every level, root first, loaded concurrently
    pub async fn levels(&self) -> Result<HierarchyDto, Error> {
        let state_repo = StateRepository::new(self.db);
        let division_repo = DivisionRepository::new(self.db);
        let parliament_repo = ParliamentRepository::new(self.db);
        let assembly_repo = AssemblyRepository::new(self.db);
        let block_repo = BlockRepository::new(self.db);
        let booth_repo = BoothRepository::new(self.db);

        let (states, divisions, parliaments, assemblies, blocks, booths) = tokio::try_join!(
            state_repo.options(),
            division_repo.options(),
            parliament_repo.options(),
            assembly_repo.options(),
            block_repo.options(),
            booth_repo.options(),
        )?;

        let levels = Level::ALL
            .into_iter()
            .zip([states, divisions, parliaments, assemblies, blocks, booths])
            .map(|(level, options)| LevelConfig { level, options })
            .collect();

        Ok(HierarchyDto { levels })
    }

    /// Narrows every level to the requested selections, dropping inconsistent ones
    pub async fn resolve(&self, query: ResolveQuery) -> Result<Resolution, Error> {
        let hierarchy = self.levels().await?;

        let selections = Selections::new()
            .with(Level::State, query.state)
            .with(Level::Division, query.division)
            .with(Level::Parliament, query.parliament)
            .with(Level::Assembly, query.assembly)
            .with(Level::Block, query.block)
            .with(Level::Booth, query.booth);

        let resolution = resolve_children(&hierarchy.levels, &selections);

        if !resolution.cleared.is_empty() {
            tracing::debug!(cleared = ?resolution.cleared, "Dropped inconsistent selections");
        }

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        hierarchy::Level, model::hierarchy::ResolveQuery,
        server::service::hierarchy::HierarchyService,
    };

    /// Expect six levels with every record listed
    #[tokio::test]
    async fn lists_every_level() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_hierarchy_tables()
            .with_hierarchy_chain("A")
            .with_hierarchy_chain("B")
            .build()
            .await?;

        let hierarchy = HierarchyService::new(&test.db).levels().await.unwrap();

        assert_eq!(hierarchy.levels.len(), 6);
        assert_eq!(hierarchy.levels[0].level, Level::State);
        assert!(hierarchy.levels.iter().all(|l| l.options.len() == 2));

        Ok(())
    }

    /// Expect a division of another state to be cleared along with everything below it
    #[tokio::test]
    async fn clears_inconsistent_selection() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_hierarchy_tables()
            .with_hierarchy_chain("A")
            .with_hierarchy_chain("B")
            .build()
            .await?;
        let (a, b) = (&test.chains[0], &test.chains[1]);

        let resolution = HierarchyService::new(&test.db)
            .resolve(ResolveQuery {
                state: Some(a.state.id),
                division: Some(b.division.id),
                parliament: Some(b.parliament.id),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(resolution.selected(Level::State), Some(a.state.id));
        assert_eq!(resolution.selected(Level::Division), None);
        assert_eq!(resolution.cleared, vec![Level::Division, Level::Parliament]);
        assert_eq!(resolution.options(Level::Division).len(), 1);
        assert!(!resolution.is_enabled(Level::Parliament));

        Ok(())
    }
}
