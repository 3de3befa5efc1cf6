//! Party volunteers working a booth.
//!
//! A volunteer's block, assembly and parliament default to the chain stored above its booth.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        booth_volunteer::{BoothVolunteerDto, BoothVolunteerPayload, BoothVolunteerQuery},
    },
    server::{
        data::{
            booth_volunteer::BoothVolunteerRepository,
            populate::{BoothLookup, NameLookup},
            query::PageRequest,
        },
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::{
                optional_email, optional_text, required, required_name, required_text,
                NAME_MAX_LEN,
            },
        },
    },
};

const PHONE_MAX_LEN: usize = 20;
const TEXT_MAX_LEN: usize = 500;

pub struct BoothVolunteerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoothVolunteerService<'a> {
    /// Creates a new instance of [`BoothVolunteerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        query: BoothVolunteerQuery,
    ) -> Result<PageResponse<BoothVolunteerDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = BoothVolunteerRepository::new(self.db)
            .list(&query, page)
            .await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<BoothVolunteerDto, Error> {
        let volunteer = BoothVolunteerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Booth volunteer"))?;

        self.populate_one(volunteer).await
    }

    /// Creates a volunteer, filling omitted hierarchy references from the booth
    pub async fn create(
        &self,
        user: &AuthUser,
        payload: BoothVolunteerPayload,
    ) -> Result<BoothVolunteerDto, Error> {
        let mut volunteer = entity::booth_volunteer::Model {
            id: 0,
            name: required_name(payload.name)?,
            role: optional_text("role", payload.role, NAME_MAX_LEN)?,
            phone: required_text("phone", payload.phone, PHONE_MAX_LEN)?,
            email: optional_email("email", payload.email)?,
            area_responsibility: optional_text(
                "area_responsibility",
                payload.area_responsibility,
                TEXT_MAX_LEN,
            )?,
            activity_level: payload.activity_level.unwrap_or_default().as_str().to_string(),
            remarks: optional_text("remarks", payload.remarks, TEXT_MAX_LEN)?,
            booth_id: required("booth_id", payload.booth_id)?,
            party_id: required("party_id", payload.party_id)?,
            block_id: payload.block_id,
            assembly_id: payload.assembly_id,
            parliament_id: payload.parliament_id,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        self.resolve_references(&mut volunteer).await?;

        let volunteer = BoothVolunteerRepository::new(self.db)
            .create(volunteer)
            .await?;

        tracing::info!(
            booth_volunteer_id = volunteer.id,
            booth_id = volunteer.booth_id,
            "Created booth volunteer"
        );

        self.populate_one(volunteer).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: BoothVolunteerPayload,
    ) -> Result<BoothVolunteerDto, Error> {
        let repo = BoothVolunteerRepository::new(self.db);
        let mut volunteer = repo
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Booth volunteer"))?;

        if payload.name.is_some() {
            volunteer.name = required_name(payload.name)?;
        }
        if payload.role.is_some() {
            volunteer.role = optional_text("role", payload.role, NAME_MAX_LEN)?;
        }
        if payload.phone.is_some() {
            volunteer.phone = required_text("phone", payload.phone, PHONE_MAX_LEN)?;
        }
        if payload.email.is_some() {
            volunteer.email = optional_email("email", payload.email)?;
        }
        if payload.area_responsibility.is_some() {
            volunteer.area_responsibility = optional_text(
                "area_responsibility",
                payload.area_responsibility,
                TEXT_MAX_LEN,
            )?;
        }
        if let Some(activity_level) = payload.activity_level {
            volunteer.activity_level = activity_level.as_str().to_string();
        }
        if payload.remarks.is_some() {
            volunteer.remarks = optional_text("remarks", payload.remarks, TEXT_MAX_LEN)?;
        }
        if let Some(booth_id) = payload.booth_id {
            if booth_id != volunteer.booth_id {
                // Moving to another booth re-derives whatever the payload leaves out
                volunteer.block_id = None;
                volunteer.assembly_id = None;
                volunteer.parliament_id = None;
            }
            volunteer.booth_id = booth_id;
        }
        if let Some(party_id) = payload.party_id {
            volunteer.party_id = party_id;
        }
        if payload.block_id.is_some() {
            volunteer.block_id = payload.block_id;
        }
        if payload.assembly_id.is_some() {
            volunteer.assembly_id = payload.assembly_id;
        }
        if payload.parliament_id.is_some() {
            volunteer.parliament_id = payload.parliament_id;
        }

        self.resolve_references(&mut volunteer).await?;

        volunteer.updated_by = Some(user.id);
        let volunteer = repo.update(volunteer).await?;

        self.populate_one(volunteer).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = BoothVolunteerRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Booth volunteer"))?;

        ensure_deleted(result, "Booth volunteer")
    }

    /// Checks the party and booth, fills missing levels from the booth's chain, then checks the
    /// resulting chain is consistent
    async fn resolve_references(
        &self,
        volunteer: &mut entity::booth_volunteer::Model,
    ) -> Result<(), Error> {
        let validator = AncestryValidator::new(self.db);

        let (_, lineage) = tokio::try_join!(
            validator.party_exists(volunteer.party_id),
            validator.lineage_of_booth(volunteer.booth_id),
        )?;

        volunteer.block_id = volunteer.block_id.or(lineage.block);
        volunteer.assembly_id = volunteer.assembly_id.or(lineage.assembly);
        volunteer.parliament_id = volunteer.parliament_id.or(lineage.parliament);

        validator
            .validate(&AncestryChain {
                parliament: volunteer.parliament_id,
                assembly: volunteer.assembly_id,
                block: volunteer.block_id,
                booth: Some(volunteer.booth_id),
                ..Default::default()
            })
            .await
    }

    async fn populate(
        &self,
        volunteers: &[entity::booth_volunteer::Model],
    ) -> Result<Vec<BoothVolunteerDto>, Error> {
        let (users, booths, parties, blocks, assemblies, parliaments) = tokio::try_join!(
            NameLookup::users(
                self.db,
                volunteers.iter().flat_map(|v| [v.created_by, v.updated_by]),
            ),
            BoothLookup::load(self.db, volunteers.iter().map(|v| Some(v.booth_id))),
            NameLookup::parties(self.db, volunteers.iter().map(|v| Some(v.party_id))),
            NameLookup::blocks(self.db, volunteers.iter().map(|v| v.block_id)),
            NameLookup::assemblies(self.db, volunteers.iter().map(|v| v.assembly_id)),
            NameLookup::parliaments(self.db, volunteers.iter().map(|v| v.parliament_id)),
        )?;

        Ok(volunteers
            .iter()
            .map(|v| BoothVolunteerDto {
                id: v.id,
                name: v.name.clone(),
                role: v.role.clone(),
                phone: v.phone.clone(),
                email: v.email.clone(),
                area_responsibility: v.area_responsibility.clone(),
                activity_level: v.activity_level.clone(),
                remarks: v.remarks.clone(),
                booth: booths.get(Some(v.booth_id)),
                party: parties.get(Some(v.party_id)),
                block: blocks.get(v.block_id),
                assembly: assemblies.get(v.assembly_id),
                parliament: parliaments.get(v.parliament_id),
                audit: users.audit(v.created_by, v.updated_by, v.created_at, v.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        volunteer: entity::booth_volunteer::Model,
    ) -> Result<BoothVolunteerDto, Error> {
        self.populate(std::slice::from_ref(&volunteer))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to populate booth volunteer {}",
                    volunteer.id
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::booth_volunteer::BoothVolunteerPayload,
        server::{model::auth::AuthUser, service::booth_volunteer::BoothVolunteerService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    fn payload(booth_id: i32, party_id: i32) -> BoothVolunteerPayload {
        BoothVolunteerPayload {
            name: Some("Sunita".to_string()),
            phone: Some("9000000001".to_string()),
            booth_id: Some(booth_id),
            party_id: Some(party_id),
            ..Default::default()
        }
    }

    /// Expect block, assembly and parliament to be taken from the booth
    #[tokio::test]
    async fn fills_chain_from_booth() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await?;
        let party = test.record().insert_party("Janata Dal", "JD").await?;
        let chain = test.first_chain();

        let volunteer = BoothVolunteerService::new(&test.db)
            .create(&admin(&test), payload(chain.booth.id, party.id))
            .await
            .unwrap();

        assert_eq!(volunteer.block.unwrap().id, chain.block.id);
        assert_eq!(volunteer.assembly.unwrap().id, chain.assembly.id);
        assert_eq!(volunteer.parliament.unwrap().id, chain.parliament.id);
        assert_eq!(volunteer.activity_level, "Medium");

        Ok(())
    }

    /// Expect a provided block that is not the booth's block to be rejected
    #[tokio::test]
    async fn rejects_block_of_other_chain() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .with_hierarchy_chain("B")
            .build()
            .await?;
        let party = test.record().insert_party("Janata Dal", "JD").await?;

        let err = BoothVolunteerService::new(&test.db)
            .create(
                &admin(&test),
                BoothVolunteerPayload {
                    block_id: Some(test.chains[1].block.id),
                    ..payload(test.chains[0].booth.id, party.id)
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Block does not belong to the selected Assembly");

        Ok(())
    }

    /// Expect a missing booth to be reported
    #[tokio::test]
    async fn rejects_missing_booth() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .build()
            .await?;
        let party = test.record().insert_party("Janata Dal", "JD").await?;

        let err = BoothVolunteerService::new(&test.db)
            .create(&admin(&test), payload(404, party.id))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Booth not found");

        Ok(())
    }
}
