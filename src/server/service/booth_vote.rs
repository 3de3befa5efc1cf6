//! Vote counts per candidate and booth, at most one count per pair.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        booth_vote::{BoothVoteDto, BoothVotePayload, BoothVoteQuery},
    },
    server::{
        data::{
            booth_vote::BoothVoteRepository,
            populate::{BoothLookup, NameLookup},
            query::PageRequest,
        },
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation, on_unique_violation},
            validate::{non_negative, required},
        },
    },
};

const DUPLICATE_COUNT: &str = "Votes for this candidate at this booth already exist";

pub struct BoothVoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoothVoteService<'a> {
    /// Creates a new instance of [`BoothVoteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: BoothVoteQuery) -> Result<PageResponse<BoothVoteDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = BoothVoteRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<BoothVoteDto, Error> {
        let vote = BoothVoteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Booth vote"))?;

        self.populate_one(vote).await
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        payload: BoothVotePayload,
    ) -> Result<BoothVoteDto, Error> {
        let vote = entity::booth_vote::Model {
            id: 0,
            candidate_id: required("candidate_id", payload.candidate_id)?,
            booth_id: required("booth_id", payload.booth_id)?,
            total_votes: non_negative(
                "total_votes",
                required("total_votes", payload.total_votes)?,
            )?,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        self.check_references(&vote).await?;

        let vote = BoothVoteRepository::new(self.db)
            .create(vote)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE_COUNT))?;

        tracing::info!(
            booth_vote_id = vote.id,
            candidate_id = vote.candidate_id,
            booth_id = vote.booth_id,
            "Recorded booth votes"
        );

        self.populate_one(vote).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: BoothVotePayload,
    ) -> Result<BoothVoteDto, Error> {
        let repo = BoothVoteRepository::new(self.db);
        let mut vote = repo
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Booth vote"))?;

        if let Some(candidate_id) = payload.candidate_id {
            vote.candidate_id = candidate_id;
        }
        if let Some(booth_id) = payload.booth_id {
            vote.booth_id = booth_id;
        }
        if let Some(total_votes) = payload.total_votes {
            vote.total_votes = non_negative("total_votes", total_votes)?;
        }

        self.check_references(&vote).await?;

        vote.updated_by = Some(user.id);
        let vote = repo
            .update(vote)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE_COUNT))?;

        self.populate_one(vote).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = BoothVoteRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Booth vote"))?;

        ensure_deleted(result, "Booth vote")
    }

    async fn check_references(&self, vote: &entity::booth_vote::Model) -> Result<(), Error> {
        let validator = AncestryValidator::new(self.db);

        let chain = AncestryChain {
            booth: Some(vote.booth_id),
            ..Default::default()
        };

        tokio::try_join!(
            validator.candidate_exists(vote.candidate_id),
            validator.validate(&chain),
        )?;

        let existing = BoothVoteRepository::new(self.db)
            .find_by_candidate_and_booth(vote.candidate_id, vote.booth_id)
            .await?;

        match existing {
            Some(existing) if existing.id != vote.id => {
                Err(Error::Duplicate(DUPLICATE_COUNT.to_string()))
            }
            _ => Ok(()),
        }
    }

    async fn populate(
        &self,
        votes: &[entity::booth_vote::Model],
    ) -> Result<Vec<BoothVoteDto>, Error> {
        let (users, candidates, booths) = tokio::try_join!(
            NameLookup::users(
                self.db,
                votes.iter().flat_map(|v| [v.created_by, v.updated_by]),
            ),
            NameLookup::candidates(self.db, votes.iter().map(|v| Some(v.candidate_id))),
            BoothLookup::load(self.db, votes.iter().map(|v| Some(v.booth_id))),
        )?;

        Ok(votes
            .iter()
            .map(|v| BoothVoteDto {
                id: v.id,
                candidate: candidates.get(Some(v.candidate_id)),
                booth: booths.get(Some(v.booth_id)),
                total_votes: v.total_votes,
                audit: users.audit(v.created_by, v.updated_by, v.created_at, v.updated_at),
            })
            .collect())
    }

    async fn populate_one(&self, vote: entity::booth_vote::Model) -> Result<BoothVoteDto, Error> {
        self.populate(std::slice::from_ref(&vote))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to populate booth vote {}", vote.id))
            })
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::booth_vote::{BoothVotePayload, BoothVoteQuery},
        server::{model::auth::AuthUser, service::booth_vote::BoothVoteService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    /// Expect one count per candidate and booth and results sorted by votes
    #[tokio::test]
    async fn keeps_one_count_per_pair() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await?;
        let chain = test.first_chain();
        let party = test.record().insert_party("Janata Dal", "JD").await?;
        let other = test.record().insert_party("Lok Dal", "LD").await?;
        let first = test
            .record()
            .insert_candidate("Asha Devi", party.id, chain.assembly.id, 2025)
            .await?;
        let second = test
            .record()
            .insert_candidate("Ravi Kumar", other.id, chain.assembly.id, 2025)
            .await?;
        let service = BoothVoteService::new(&test.db);

        for (candidate_id, total_votes) in [(first.id, 120), (second.id, 340)] {
            service
                .create(
                    &admin(&test),
                    BoothVotePayload {
                        candidate_id: Some(candidate_id),
                        booth_id: Some(chain.booth.id),
                        total_votes: Some(total_votes),
                    },
                )
                .await
                .unwrap();
        }
        let duplicate = service
            .create(
                &admin(&test),
                BoothVotePayload {
                    candidate_id: Some(first.id),
                    booth_id: Some(chain.booth.id),
                    total_votes: Some(1),
                },
            )
            .await;

        let page = service
            .list(BoothVoteQuery {
                booth: Some(chain.booth.id),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(duplicate.is_err());
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.data[0].total_votes, 340);
        assert_eq!(page.data[0].candidate.as_ref().unwrap().name, "Ravi Kumar");

        Ok(())
    }

    /// Expect an unknown candidate to be rejected
    #[tokio::test]
    async fn rejects_unknown_candidate() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await?;

        let err = BoothVoteService::new(&test.db)
            .create(
                &admin(&test),
                BoothVotePayload {
                    candidate_id: Some(404),
                    booth_id: Some(test.first_chain().booth.id),
                    total_votes: Some(10),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Candidate not found");

        Ok(())
    }
}
