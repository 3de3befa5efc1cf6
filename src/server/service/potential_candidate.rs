//! Prospective candidates under review by a party for an assembly seat.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        potential_candidate::{
            PotentialCandidateDto, PotentialCandidatePayload, PotentialCandidateQuery,
        },
    },
    server::{
        data::{
            populate::NameLookup, potential_candidate::PotentialCandidateRepository,
            query::PageRequest,
        },
        error::{validation::ValidationError, Error},
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::{optional_text, optional_url, required, required_name, NAME_MAX_LEN},
        },
    },
};

const HISTORY_MAX_LEN: usize = 1000;
const NOTE_MAX_LEN: usize = 500;

pub struct PotentialCandidateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PotentialCandidateService<'a> {
    /// Creates a new instance of [`PotentialCandidateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        query: PotentialCandidateQuery,
    ) -> Result<PageResponse<PotentialCandidateDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = PotentialCandidateRepository::new(self.db)
            .list(&query, page)
            .await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<PotentialCandidateDto, Error> {
        let candidate = PotentialCandidateRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Potential candidate"))?;

        self.populate_one(candidate).await
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        payload: PotentialCandidatePayload,
    ) -> Result<PotentialCandidateDto, Error> {
        let candidate = entity::potential_candidate::Model {
            id: 0,
            name: required_name(payload.name)?,
            party_id: required("party_id", payload.party_id)?,
            assembly_id: required("assembly_id", payload.assembly_id)?,
            election_year: required("election_year", payload.election_year)?,
            history: optional_text("history", payload.history, HISTORY_MAX_LEN)?,
            post_name: optional_text("post_name", payload.post_name, NAME_MAX_LEN)?,
            post_from: payload.post_from,
            post_to: payload.post_to,
            post_place: optional_text("post_place", payload.post_place, NAME_MAX_LEN)?,
            pros: optional_text("pros", payload.pros, NOTE_MAX_LEN)?,
            cons: optional_text("cons", payload.cons, NOTE_MAX_LEN)?,
            image: optional_url("image", payload.image)?,
            status: payload.status.unwrap_or_default().as_str().to_string(),
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        self.check(&candidate).await?;

        let candidate = PotentialCandidateRepository::new(self.db)
            .create(candidate)
            .await?;

        tracing::info!(
            potential_candidate_id = candidate.id,
            user_id = user.id,
            "Created potential candidate"
        );

        self.populate_one(candidate).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: PotentialCandidatePayload,
    ) -> Result<PotentialCandidateDto, Error> {
        let repo = PotentialCandidateRepository::new(self.db);
        let mut candidate = repo
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Potential candidate"))?;

        if payload.name.is_some() {
            candidate.name = required_name(payload.name)?;
        }
        if let Some(party_id) = payload.party_id {
            candidate.party_id = party_id;
        }
        if let Some(assembly_id) = payload.assembly_id {
            candidate.assembly_id = assembly_id;
        }
        if let Some(election_year) = payload.election_year {
            candidate.election_year = election_year;
        }
        if payload.history.is_some() {
            candidate.history = optional_text("history", payload.history, HISTORY_MAX_LEN)?;
        }
        if payload.post_name.is_some() {
            candidate.post_name = optional_text("post_name", payload.post_name, NAME_MAX_LEN)?;
        }
        if payload.post_from.is_some() {
            candidate.post_from = payload.post_from;
        }
        if payload.post_to.is_some() {
            candidate.post_to = payload.post_to;
        }
        if payload.post_place.is_some() {
            candidate.post_place = optional_text("post_place", payload.post_place, NAME_MAX_LEN)?;
        }
        if payload.pros.is_some() {
            candidate.pros = optional_text("pros", payload.pros, NOTE_MAX_LEN)?;
        }
        if payload.cons.is_some() {
            candidate.cons = optional_text("cons", payload.cons, NOTE_MAX_LEN)?;
        }
        if payload.image.is_some() {
            candidate.image = optional_url("image", payload.image)?;
        }
        if let Some(status) = payload.status {
            candidate.status = status.as_str().to_string();
        }

        self.check(&candidate).await?;

        candidate.updated_by = Some(user.id);
        let candidate = repo.update(candidate).await?;

        self.populate_one(candidate).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = PotentialCandidateRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Potential candidate"))?;

        ensure_deleted(result, "Potential candidate")
    }

    /// Post period must not end before it starts; party and assembly must exist
    async fn check(&self, candidate: &entity::potential_candidate::Model) -> Result<(), Error> {
        if let (Some(from), Some(to)) = (candidate.post_from, candidate.post_to) {
            if to < from {
                return Err(ValidationError::field(
                    "post_to",
                    "post_to cannot be before post_from",
                )
                .into());
            }
        }

        let validator = AncestryValidator::new(self.db);

        let chain = AncestryChain {
            assembly: Some(candidate.assembly_id),
            ..Default::default()
        };

        tokio::try_join!(
            validator.party_exists(candidate.party_id),
            validator.validate(&chain),
        )?;

        Ok(())
    }

    async fn populate(
        &self,
        candidates: &[entity::potential_candidate::Model],
    ) -> Result<Vec<PotentialCandidateDto>, Error> {
        let (users, parties, assemblies) = tokio::try_join!(
            NameLookup::users(
                self.db,
                candidates.iter().flat_map(|c| [c.created_by, c.updated_by]),
            ),
            NameLookup::parties(self.db, candidates.iter().map(|c| Some(c.party_id))),
            NameLookup::assemblies(self.db, candidates.iter().map(|c| Some(c.assembly_id))),
        )?;

        Ok(candidates
            .iter()
            .map(|c| PotentialCandidateDto {
                id: c.id,
                name: c.name.clone(),
                party: parties.get(Some(c.party_id)),
                assembly: assemblies.get(Some(c.assembly_id)),
                election_year: c.election_year,
                history: c.history.clone(),
                post_name: c.post_name.clone(),
                post_from: c.post_from,
                post_to: c.post_to,
                post_place: c.post_place.clone(),
                pros: c.pros.clone(),
                cons: c.cons.clone(),
                image: c.image.clone(),
                status: c.status.clone(),
                audit: users.audit(c.created_by, c.updated_by, c.created_at, c.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        candidate: entity::potential_candidate::Model,
    ) -> Result<PotentialCandidateDto, Error> {
        self.populate(std::slice::from_ref(&candidate))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to populate potential candidate {}",
                    candidate.id
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use constituency_test_utils::prelude::*;

    use crate::{
        model::potential_candidate::{PotentialCandidatePayload, PotentialStatus},
        server::{
            model::auth::AuthUser, service::potential_candidate::PotentialCandidateService,
        },
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    /// Expect new potential candidates to start under review
    #[tokio::test]
    async fn starts_under_review() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await?;
        let party = test.record().insert_party("Janata Dal", "JD").await?;

        let candidate = PotentialCandidateService::new(&test.db)
            .create(
                &admin(&test),
                PotentialCandidatePayload {
                    name: Some("Meera".to_string()),
                    party_id: Some(party.id),
                    assembly_id: Some(test.first_chain().assembly.id),
                    election_year: Some(2030),
                    post_name: Some("Ward member".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(candidate.status, PotentialStatus::UnderReview.as_str());
        assert_eq!(candidate.post_name.as_deref(), Some("Ward member"));

        Ok(())
    }

    /// Expect a post period ending before it starts to be rejected
    #[tokio::test]
    async fn rejects_reversed_post_period() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .build()
            .await?;

        let err = PotentialCandidateService::new(&test.db)
            .create(
                &admin(&test),
                PotentialCandidatePayload {
                    name: Some("Meera".to_string()),
                    party_id: Some(1),
                    assembly_id: Some(1),
                    election_year: Some(2030),
                    post_from: NaiveDate::from_ymd_opt(2020, 1, 1),
                    post_to: NaiveDate::from_ymd_opt(2019, 1, 1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "post_to cannot be before post_from");

        Ok(())
    }
}
