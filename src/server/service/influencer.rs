//! Local influencers, placed at a booth with its full chain.
//!
//! Contact numbers are unique, emails are unique when present and stored lower-case.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        influencer::{InfluencerDto, InfluencerPayload, InfluencerQuery},
    },
    server::{
        data::{
            influencer::InfluencerRepository,
            populate::{HierarchyLookup, NameLookup},
            query::PageRequest,
        },
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation, on_unique_violation},
            validate::{optional_email, optional_text, required, required_name, required_text},
        },
    },
};

const DUPLICATE_CONTACT: &str = "Influencer with this contact number already exists";
const DUPLICATE_EMAIL: &str = "Influencer with this email already exists";
const DUPLICATE: &str = "Influencer with this contact number or email already exists";
const PHONE_MAX_LEN: usize = 20;
const ADDRESS_MAX_LEN: usize = 500;

pub struct InfluencerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InfluencerService<'a> {
    /// Creates a new instance of [`InfluencerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        query: InfluencerQuery,
    ) -> Result<PageResponse<InfluencerDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = InfluencerRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn list_by_state(
        &self,
        state_id: i32,
        query: InfluencerQuery,
    ) -> Result<PageResponse<InfluencerDto>, Error> {
        self.list(InfluencerQuery {
            state: Some(state_id),
            ..query
        })
        .await
    }

    pub async fn list_by_assembly(
        &self,
        assembly_id: i32,
        query: InfluencerQuery,
    ) -> Result<PageResponse<InfluencerDto>, Error> {
        self.list(InfluencerQuery {
            assembly: Some(assembly_id),
            ..query
        })
        .await
    }

    pub async fn list_by_booth(
        &self,
        booth_id: i32,
        query: InfluencerQuery,
    ) -> Result<PageResponse<InfluencerDto>, Error> {
        self.list(InfluencerQuery {
            booth: Some(booth_id),
            ..query
        })
        .await
    }

    pub async fn get(&self, id: i32) -> Result<InfluencerDto, Error> {
        let influencer = InfluencerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Influencer"))?;

        self.populate_one(influencer).await
    }

    /// Creates an influencer
    ///
    /// # Returns
    /// - `Err(Error::Duplicate)` - Contact number or email already belongs to an influencer
    /// - `Err(Error::AncestryError)` - The six hierarchy references do not form one chain
    pub async fn create(
        &self,
        user: &AuthUser,
        payload: InfluencerPayload,
    ) -> Result<InfluencerDto, Error> {
        let influencer = entity::influencer::Model {
            id: 0,
            name: required_name(payload.name)?,
            contact_number: required_text("contact_number", payload.contact_number, PHONE_MAX_LEN)?,
            alternate_number: optional_text(
                "alternate_number",
                payload.alternate_number,
                PHONE_MAX_LEN,
            )?,
            email: optional_email("email", payload.email)?,
            full_address: required_text("full_address", payload.full_address, ADDRESS_MAX_LEN)?,
            state_id: required("state_id", payload.state_id)?,
            division_id: required("division_id", payload.division_id)?,
            parliament_id: required("parliament_id", payload.parliament_id)?,
            assembly_id: required("assembly_id", payload.assembly_id)?,
            block_id: required("block_id", payload.block_id)?,
            booth_id: required("booth_id", payload.booth_id)?,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        self.check_unique(&influencer).await?;
        AncestryValidator::new(self.db)
            .validate(&chain_of(&influencer))
            .await?;

        let influencer = InfluencerRepository::new(self.db)
            .create(influencer)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE))?;

        tracing::info!(
            influencer_id = influencer.id,
            user_id = user.id,
            "Created influencer"
        );

        self.populate_one(influencer).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: InfluencerPayload,
    ) -> Result<InfluencerDto, Error> {
        let repo = InfluencerRepository::new(self.db);
        let mut influencer = repo
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Influencer"))?;

        if payload.name.is_some() {
            influencer.name = required_name(payload.name)?;
        }
        if payload.contact_number.is_some() {
            influencer.contact_number =
                required_text("contact_number", payload.contact_number, PHONE_MAX_LEN)?;
        }
        if payload.alternate_number.is_some() {
            influencer.alternate_number =
                optional_text("alternate_number", payload.alternate_number, PHONE_MAX_LEN)?;
        }
        if payload.email.is_some() {
            influencer.email = optional_email("email", payload.email)?;
        }
        if payload.full_address.is_some() {
            influencer.full_address =
                required_text("full_address", payload.full_address, ADDRESS_MAX_LEN)?;
        }
        if let Some(state_id) = payload.state_id {
            influencer.state_id = state_id;
        }
        if let Some(division_id) = payload.division_id {
            influencer.division_id = division_id;
        }
        if let Some(parliament_id) = payload.parliament_id {
            influencer.parliament_id = parliament_id;
        }
        if let Some(assembly_id) = payload.assembly_id {
            influencer.assembly_id = assembly_id;
        }
        if let Some(block_id) = payload.block_id {
            influencer.block_id = block_id;
        }
        if let Some(booth_id) = payload.booth_id {
            influencer.booth_id = booth_id;
        }

        self.check_unique(&influencer).await?;
        AncestryValidator::new(self.db)
            .validate(&chain_of(&influencer))
            .await?;

        influencer.updated_by = Some(user.id);
        let influencer = repo
            .update(influencer)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE))?;

        self.populate_one(influencer).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = InfluencerRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Influencer"))?;

        ensure_deleted(result, "Influencer")
    }

    /// Fails when another influencer holds the contact number or email
    async fn check_unique(&self, influencer: &entity::influencer::Model) -> Result<(), Error> {
        let repo = InfluencerRepository::new(self.db);

        let (by_contact, by_email) = tokio::try_join!(
            repo.find_by_contact_number(&influencer.contact_number),
            async {
                match &influencer.email {
                    Some(email) => repo.find_by_email(email).await,
                    None => Ok(None),
                }
            },
        )?;

        if by_contact.is_some_and(|other| other.id != influencer.id) {
            return Err(Error::Duplicate(DUPLICATE_CONTACT.to_string()));
        }
        if by_email.is_some_and(|other| other.id != influencer.id) {
            return Err(Error::Duplicate(DUPLICATE_EMAIL.to_string()));
        }

        Ok(())
    }

    async fn populate(
        &self,
        influencers: &[entity::influencer::Model],
    ) -> Result<Vec<InfluencerDto>, Error> {
        let (users, levels) = tokio::try_join!(
            NameLookup::users(
                self.db,
                influencers.iter().flat_map(|i| [i.created_by, i.updated_by]),
            ),
            HierarchyLookup::load(self.db, influencers, |i| {
                [
                    Some(i.state_id),
                    Some(i.division_id),
                    Some(i.parliament_id),
                    Some(i.assembly_id),
                    Some(i.block_id),
                    Some(i.booth_id),
                ]
            }),
        )?;

        Ok(influencers
            .iter()
            .map(|i| InfluencerDto {
                id: i.id,
                name: i.name.clone(),
                contact_number: i.contact_number.clone(),
                alternate_number: i.alternate_number.clone(),
                email: i.email.clone(),
                full_address: i.full_address.clone(),
                state: levels.states.get(Some(i.state_id)),
                division: levels.divisions.get(Some(i.division_id)),
                parliament: levels.parliaments.get(Some(i.parliament_id)),
                assembly: levels.assemblies.get(Some(i.assembly_id)),
                block: levels.blocks.get(Some(i.block_id)),
                booth: levels.booths.get(Some(i.booth_id)),
                audit: users.audit(i.created_by, i.updated_by, i.created_at, i.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        influencer: entity::influencer::Model,
    ) -> Result<InfluencerDto, Error> {
        self.populate(std::slice::from_ref(&influencer))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to populate influencer {}", influencer.id))
            })
    }
}

fn chain_of(influencer: &entity::influencer::Model) -> AncestryChain {
    AncestryChain {
        state: Some(influencer.state_id),
        division: Some(influencer.division_id),
        parliament: Some(influencer.parliament_id),
        assembly: Some(influencer.assembly_id),
        block: Some(influencer.block_id),
        booth: Some(influencer.booth_id),
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::influencer::InfluencerPayload,
        server::{model::auth::AuthUser, service::influencer::InfluencerService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    fn payload(chain: &HierarchyChain, contact: &str, email: Option<&str>) -> InfluencerPayload {
        InfluencerPayload {
            name: Some("Mohan Lal".to_string()),
            contact_number: Some(contact.to_string()),
            alternate_number: None,
            email: email.map(str::to_string),
            full_address: Some("Main Road".to_string()),
            state_id: Some(chain.state.id),
            division_id: Some(chain.division.id),
            parliament_id: Some(chain.parliament.id),
            assembly_id: Some(chain.assembly.id),
            block_id: Some(chain.block.id),
            booth_id: Some(chain.booth.id),
        }
    }

    mod create {
        use super::*;

        /// Expect the email to be stored lower-case
        #[tokio::test]
        async fn lowercases_email() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .build()
                .await?;

            let influencer = InfluencerService::new(&test.db)
                .create(
                    &admin(&test),
                    payload(test.first_chain(), "9000000001", Some("Mohan@Example.com")),
                )
                .await
                .unwrap();

            assert_eq!(influencer.email.as_deref(), Some("mohan@example.com"));
            assert_eq!(influencer.booth.unwrap().booth_number, "B-A");

            Ok(())
        }

        /// Expect a repeated contact number to be rejected, leaving one row
        #[tokio::test]
        async fn rejects_duplicate_contact_number() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let service = InfluencerService::new(&test.db);
            let chain = test.first_chain();

            service
                .create(&admin(&test), payload(chain, "9000000001", None))
                .await
                .unwrap();
            let err = service
                .create(&admin(&test), payload(chain, "9000000001", None))
                .await
                .unwrap_err();

            assert!(err.to_string().contains("already exists"));
            assert_eq!(service.list(Default::default()).await.unwrap().meta.total, 1);

            Ok(())
        }

        /// Expect a repeated email to be rejected regardless of case
        #[tokio::test]
        async fn rejects_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let service = InfluencerService::new(&test.db);
            let chain = test.first_chain();

            service
                .create(
                    &admin(&test),
                    payload(chain, "9000000001", Some("mohan@example.com")),
                )
                .await
                .unwrap();
            let err = service
                .create(
                    &admin(&test),
                    payload(chain, "9000000002", Some("MOHAN@example.com")),
                )
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "Influencer with this email already exists");
            assert_eq!(service.list(Default::default()).await.unwrap().meta.total, 1);

            Ok(())
        }
    }

    mod list_by_booth {
        use super::*;

        /// Expect only influencers of the booth
        #[tokio::test]
        async fn filters_by_booth() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .with_hierarchy_chain("B")
                .build()
                .await?;
            let service = InfluencerService::new(&test.db);
            service
                .create(&admin(&test), payload(&test.chains[0], "9000000001", None))
                .await
                .unwrap();
            service
                .create(&admin(&test), payload(&test.chains[1], "9000000002", None))
                .await
                .unwrap();

            let page = service
                .list_by_booth(test.chains[1].booth.id, Default::default())
                .await
                .unwrap();

            assert_eq!(page.meta.total, 1);
            assert_eq!(page.data[0].contact_number, "9000000002");

            Ok(())
        }
    }
}
