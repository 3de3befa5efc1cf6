//! Election candidates, one per party, assembly and election year.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        candidate::{CandidateDto, CandidatePayload, CandidateQuery},
    },
    server::{
        data::{candidate::CandidateRepository, populate::NameLookup, query::PageRequest},
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation, on_unique_violation},
            validate::{non_negative, optional_text, optional_url, required, required_name},
        },
    },
};

const DUPLICATE_CONTEST: &str =
    "Candidate already exists for this party, assembly and election year";
const DETAIL_MAX_LEN: usize = 255;

pub struct CandidateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidateService<'a> {
    /// Creates a new instance of [`CandidateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: CandidateQuery) -> Result<PageResponse<CandidateDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = CandidateRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    /// Candidates contesting one assembly, the `assembly` filter of `query` is replaced
    pub async fn list_by_assembly(
        &self,
        assembly_id: i32,
        query: CandidateQuery,
    ) -> Result<PageResponse<CandidateDto>, Error> {
        self.list(CandidateQuery {
            assembly: Some(assembly_id),
            ..query
        })
        .await
    }

    pub async fn get(&self, id: i32) -> Result<CandidateDto, Error> {
        let candidate = CandidateRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Candidate"))?;

        self.populate_one(candidate).await
    }

    /// Creates a candidate
    ///
    /// # Returns
    /// - `Err(Error::ValidationError)` - A field is missing or invalid, or the party does not
    ///   exist
    /// - `Err(Error::AncestryError)` - The assembly does not exist
    /// - `Err(Error::Duplicate)` - The party already fields a candidate in that contest
    pub async fn create(
        &self,
        user: &AuthUser,
        payload: CandidatePayload,
    ) -> Result<CandidateDto, Error> {
        let candidate = entity::candidate::Model {
            id: 0,
            name: required_name(payload.name)?,
            party_id: required("party_id", payload.party_id)?,
            assembly_id: required("assembly_id", payload.assembly_id)?,
            election_year: required("election_year", payload.election_year)?,
            caste: payload.caste.unwrap_or_default().as_str().to_string(),
            votes: non_negative("votes", payload.votes.unwrap_or(0))?,
            criminal_cases: non_negative("criminal_cases", payload.criminal_cases.unwrap_or(0))?,
            assets: optional_text("assets", payload.assets, DETAIL_MAX_LEN)?,
            liabilities: optional_text("liabilities", payload.liabilities, DETAIL_MAX_LEN)?,
            education: optional_text("education", payload.education, DETAIL_MAX_LEN)?,
            photo: optional_url("photo", payload.photo)?,
            is_active: payload.is_active.unwrap_or(true),
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        self.check_references(&candidate).await?;

        let candidate = CandidateRepository::new(self.db)
            .create(candidate)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE_CONTEST))?;

        tracing::info!(
            candidate_id = candidate.id,
            user_id = user.id,
            "Created candidate"
        );

        self.populate_one(candidate).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: CandidatePayload,
    ) -> Result<CandidateDto, Error> {
        let repo = CandidateRepository::new(self.db);
        let mut candidate = repo
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Candidate"))?;

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
        if let Some(caste) = payload.caste {
            candidate.caste = caste.as_str().to_string();
        }
        if let Some(votes) = payload.votes {
            candidate.votes = non_negative("votes", votes)?;
        }
        if let Some(criminal_cases) = payload.criminal_cases {
            candidate.criminal_cases = non_negative("criminal_cases", criminal_cases)?;
        }
        if payload.assets.is_some() {
            candidate.assets = optional_text("assets", payload.assets, DETAIL_MAX_LEN)?;
        }
        if payload.liabilities.is_some() {
            candidate.liabilities =
                optional_text("liabilities", payload.liabilities, DETAIL_MAX_LEN)?;
        }
        if payload.education.is_some() {
            candidate.education = optional_text("education", payload.education, DETAIL_MAX_LEN)?;
        }
        if payload.photo.is_some() {
            candidate.photo = optional_url("photo", payload.photo)?;
        }
        if let Some(is_active) = payload.is_active {
            candidate.is_active = is_active;
        }

        self.check_references(&candidate).await?;

        candidate.updated_by = Some(user.id);
        let candidate = repo
            .update(candidate)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE_CONTEST))?;

        self.populate_one(candidate).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = CandidateRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Candidate"))?;

        ensure_deleted(result, "Candidate")
    }

    /// Party and assembly must exist and no other candidate may hold the same contest
    async fn check_references(&self, candidate: &entity::candidate::Model) -> Result<(), Error> {
        let validator = AncestryValidator::new(self.db);

        let chain = AncestryChain {
            assembly: Some(candidate.assembly_id),
            ..Default::default()
        };

        tokio::try_join!(
            validator.party_exists(candidate.party_id),
            validator.validate(&chain),
        )?;

        let existing = CandidateRepository::new(self.db)
            .find_by_contest(
                candidate.assembly_id,
                candidate.election_year,
                candidate.party_id,
            )
            .await?;

        match existing {
            Some(existing) if existing.id != candidate.id => {
                Err(Error::Duplicate(DUPLICATE_CONTEST.to_string()))
            }
            _ => Ok(()),
        }
    }

    async fn populate(
        &self,
        candidates: &[entity::candidate::Model],
    ) -> Result<Vec<CandidateDto>, Error> {
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
            .map(|c| CandidateDto {
                id: c.id,
                name: c.name.clone(),
                party: parties.get(Some(c.party_id)),
                assembly: assemblies.get(Some(c.assembly_id)),
                election_year: c.election_year,
                caste: c.caste.clone(),
                votes: c.votes,
                criminal_cases: c.criminal_cases,
                assets: c.assets.clone(),
                liabilities: c.liabilities.clone(),
                education: c.education.clone(),
                photo: c.photo.clone(),
                is_active: c.is_active,
                audit: users.audit(c.created_by, c.updated_by, c.created_at, c.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        candidate: entity::candidate::Model,
    ) -> Result<CandidateDto, Error> {
        self.populate(std::slice::from_ref(&candidate))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to populate candidate {}", candidate.id))
            })
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::candidate::{CandidatePayload, Caste},
        server::{model::auth::AuthUser, service::candidate::CandidateService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    /// Expect references to be populated and defaults applied
    #[tokio::test]
    async fn creates_candidate() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await?;
        let party = test.record().insert_party("Janata Dal", "JD").await?;
        let assembly = &test.first_chain().assembly;

        let candidate = CandidateService::new(&test.db)
            .create(
                &admin(&test),
                CandidatePayload {
                    name: Some("Asha Devi".to_string()),
                    party_id: Some(party.id),
                    assembly_id: Some(assembly.id),
                    election_year: Some(2025),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(candidate.party.unwrap().name, "Janata Dal");
        assert_eq!(candidate.assembly.unwrap().name, "Assembly A");
        assert_eq!(candidate.caste, Caste::General.as_str());
        assert_eq!(candidate.votes, 0);
        assert!(candidate.is_active);

        Ok(())
    }

    /// Expect a missing party to be reported by name
    #[tokio::test]
    async fn rejects_missing_party() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await?;

        let err = CandidateService::new(&test.db)
            .create(
                &admin(&test),
                CandidatePayload {
                    name: Some("Asha Devi".to_string()),
                    party_id: Some(404),
                    assembly_id: Some(test.first_chain().assembly.id),
                    election_year: Some(2025),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Party not found");

        Ok(())
    }

    /// Expect a second candidate of a party in the same contest to be rejected
    #[tokio::test]
    async fn rejects_duplicate_contest() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await?;
        let party = test.record().insert_party("Janata Dal", "JD").await?;
        let assembly = &test.first_chain().assembly;
        test.record()
            .insert_candidate("Asha Devi", party.id, assembly.id, 2025)
            .await?;

        let err = CandidateService::new(&test.db)
            .create(
                &admin(&test),
                CandidatePayload {
                    name: Some("Ravi Kumar".to_string()),
                    party_id: Some(party.id),
                    assembly_id: Some(assembly.id),
                    election_year: Some(2025),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("already exists"));

        Ok(())
    }

    /// Expect negative vote counts to be rejected
    #[tokio::test]
    async fn rejects_negative_votes() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .build()
            .await?;

        let err = CandidateService::new(&test.db)
            .create(
                &admin(&test),
                CandidatePayload {
                    name: Some("Asha Devi".to_string()),
                    party_id: Some(1),
                    assembly_id: Some(1),
                    election_year: Some(2025),
                    votes: Some(-1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "votes cannot be negative");

        Ok(())
    }
}
