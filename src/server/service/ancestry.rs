//! Reference checks applied before every write that holds hierarchy or record references.
//!
//! All referenced rows are fetched concurrently; a write only proceeds when every provided
//! level exists and each provided level belongs to the provided level directly above it.

use sea_orm::ConnectionTrait;

use crate::{
    hierarchy::Level,
    server::{
        data::{
            assembly::AssemblyRepository, block::BlockRepository, booth::BoothRepository,
            candidate::CandidateRepository, division::DivisionRepository,
            parliament::ParliamentRepository, party::PartyRepository, state::StateRepository,
            user::UserRepository,
        },
        error::{ancestry::AncestryError, validation::ValidationError, Error},
    },
};

/// Optional hierarchy reference per level, as carried by a record being written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AncestryChain {
    pub state: Option<i32>,
    pub division: Option<i32>,
    pub parliament: Option<i32>,
    pub assembly: Option<i32>,
    pub block: Option<i32>,
    pub booth: Option<i32>,
}

impl AncestryChain {
    pub fn get(&self, level: Level) -> Option<i32> {
        match level {
            Level::State => self.state,
            Level::Division => self.division,
            Level::Parliament => self.parliament,
            Level::Assembly => self.assembly,
            Level::Block => self.block,
            Level::Booth => self.booth,
        }
    }
}

pub struct AncestryValidator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AncestryValidator<'a, C> {
    /// Creates a new instance of [`AncestryValidator`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks that every provided level exists and that adjacent provided levels agree.
    ///
    /// # Returns
    /// - `Ok(())` - The chain is consistent
    /// - `Err(Error::AncestryError(ReferenceNotFound))` - A provided id has no row, reported
    ///   top-down
    /// - `Err(Error::AncestryError(InconsistentAncestry))` - A provided level's stored parent
    ///   differs from the provided level above it
    /// - `Err(Error::DbErr)` - A lookup failed
    pub async fn validate(&self, chain: &AncestryChain) -> Result<(), Error> {
        let db = self.db;

        let (state, division, parliament, assembly, block, booth) = tokio::try_join!(
            async {
                match chain.state {
                    Some(id) => StateRepository::new(db).find_by_id(id).await,
                    None => Ok(None),
                }
            },
            async {
                match chain.division {
                    Some(id) => DivisionRepository::new(db).find_by_id(id).await,
                    None => Ok(None),
                }
            },
            async {
                match chain.parliament {
                    Some(id) => ParliamentRepository::new(db).find_by_id(id).await,
                    None => Ok(None),
                }
            },
            async {
                match chain.assembly {
                    Some(id) => AssemblyRepository::new(db).find_by_id(id).await,
                    None => Ok(None),
                }
            },
            async {
                match chain.block {
                    Some(id) => BlockRepository::new(db).find_by_id(id).await,
                    None => Ok(None),
                }
            },
            async {
                match chain.booth {
                    Some(id) => BoothRepository::new(db).find_by_id(id).await,
                    None => Ok(None),
                }
            },
        )?;

        // Stored parent id of each found row; the outer `None` means no row was found
        let stored_parents = [
            state.map(|_| None),
            division.map(|d| d.state_id),
            parliament.map(|p| p.division_id),
            assembly.map(|a| a.parliament_id),
            block.map(|b| b.assembly_id),
            booth.map(|b| b.block_id),
        ];

        check_chain(chain, &stored_parents)?;

        Ok(())
    }

    pub async fn party_exists(&self, party_id: i32) -> Result<(), Error> {
        match PartyRepository::new(self.db).find_by_id(party_id).await? {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownReference("Party").into()),
        }
    }

    pub async fn candidate_exists(&self, candidate_id: i32) -> Result<(), Error> {
        match CandidateRepository::new(self.db)
            .find_by_id(candidate_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownReference("Candidate").into()),
        }
    }

    pub async fn user_exists(&self, user_id: i32) -> Result<(), Error> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownReference("User").into()),
        }
    }

    /// Walks up from a booth to the references stored along its chain.
    ///
    /// Stops at the first missing parent, leaving the levels above it empty.
    pub async fn lineage_of_booth(&self, booth_id: i32) -> Result<AncestryChain, Error> {
        let mut chain = AncestryChain {
            booth: Some(booth_id),
            ..Default::default()
        };

        let booth = BoothRepository::new(self.db)
            .find_by_id(booth_id)
            .await?
            .ok_or(AncestryError::ReferenceNotFound(Level::Booth))?;
        chain.block = booth.block_id;

        if let Some(block_id) = chain.block {
            chain.assembly = BlockRepository::new(self.db)
                .find_by_id(block_id)
                .await?
                .and_then(|b| b.assembly_id);
        }
        if let Some(assembly_id) = chain.assembly {
            chain.parliament = AssemblyRepository::new(self.db)
                .find_by_id(assembly_id)
                .await?
                .and_then(|a| a.parliament_id);
        }
        if let Some(parliament_id) = chain.parliament {
            chain.division = ParliamentRepository::new(self.db)
                .find_by_id(parliament_id)
                .await?
                .and_then(|p| p.division_id);
        }
        if let Some(division_id) = chain.division {
            chain.state = DivisionRepository::new(self.db)
                .find_by_id(division_id)
                .await?
                .and_then(|d| d.state_id);
        }

        Ok(chain)
    }
}

/// `stored_parents` holds, per level in [`Level::ALL`] order, the stored parent id of the
/// found row, or `None` when no row was found.
fn check_chain(
    chain: &AncestryChain,
    stored_parents: &[Option<Option<i32>>; 6],
) -> Result<(), AncestryError> {
    for (level, stored) in Level::ALL.iter().zip(stored_parents) {
        if chain.get(*level).is_some() && stored.is_none() {
            return Err(AncestryError::ReferenceNotFound(*level));
        }
    }

    for (level, stored) in Level::ALL.iter().zip(stored_parents).skip(1) {
        let Some(parent) = level.parent() else {
            continue;
        };

        if let (Some(parent_id), Some(stored_parent)) = (chain.get(parent), stored) {
            if chain.get(*level).is_some() && *stored_parent != Some(parent_id) {
                return Err(AncestryError::InconsistentAncestry {
                    child: *level,
                    parent,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use super::*;

    mod validate {
        use super::*;

        /// Expect a consistent full chain to pass
        #[tokio::test]
        async fn accepts_consistent_chain() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let c = test.first_chain();
            let chain = AncestryChain {
                state: Some(c.state.id),
                division: Some(c.division.id),
                parliament: Some(c.parliament.id),
                assembly: Some(c.assembly.id),
                block: Some(c.block.id),
                booth: Some(c.booth.id),
            };

            let result = AncestryValidator::new(&test.db).validate(&chain).await;

            assert!(result.is_ok());

            Ok(())
        }

        /// Expect a missing block to be reported by level
        #[tokio::test]
        async fn reports_missing_reference() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            let chain = AncestryChain {
                block: Some(404),
                ..Default::default()
            };

            let result = AncestryValidator::new(&test.db).validate(&chain).await;

            assert!(matches!(
                result,
                Err(Error::AncestryError(AncestryError::ReferenceNotFound(
                    Level::Block
                )))
            ));

            Ok(())
        }

        /// Expect a division from another state to be reported as inconsistent
        #[tokio::test]
        async fn reports_inconsistent_chain() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .with_hierarchy_chain("B")
                .build()
                .await?;
            let chain = AncestryChain {
                state: Some(test.chains[0].state.id),
                division: Some(test.chains[1].division.id),
                ..Default::default()
            };

            let err = AncestryValidator::new(&test.db)
                .validate(&chain)
                .await
                .unwrap_err();

            assert_eq!(
                err.to_string(),
                "Division does not belong to the selected State"
            );

            Ok(())
        }

        /// Expect non-adjacent levels not to be compared with each other
        #[tokio::test]
        async fn skips_gaps_in_chain() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .with_hierarchy_chain("B")
                .build()
                .await?;
            let chain = AncestryChain {
                state: Some(test.chains[0].state.id),
                parliament: Some(test.chains[1].parliament.id),
                ..Default::default()
            };

            let result = AncestryValidator::new(&test.db).validate(&chain).await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod lineage_of_booth {
        use super::*;

        /// Expect the full chain above a booth
        #[tokio::test]
        async fn walks_up_to_state() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let c = test.first_chain();

            let chain = AncestryValidator::new(&test.db)
                .lineage_of_booth(c.booth.id)
                .await
                .unwrap();

            assert_eq!(chain.block, Some(c.block.id));
            assert_eq!(chain.parliament, Some(c.parliament.id));
            assert_eq!(chain.state, Some(c.state.id));

            Ok(())
        }

        /// Expect an orphaned booth to yield only itself
        #[tokio::test]
        async fn stops_at_orphan() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            let booth = test.hierarchy().insert_booth("Loose", "1", None).await?;

            let chain = AncestryValidator::new(&test.db)
                .lineage_of_booth(booth.id)
                .await
                .unwrap();

            assert_eq!(
                chain,
                AncestryChain {
                    booth: Some(booth.id),
                    ..Default::default()
                }
            );

            Ok(())
        }
    }
}
