//! Political parties.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        party::{PartyDto, PartyPayload, PartyQuery},
    },
    server::{
        data::{party::PartyRepository, populate::NameLookup, query::PageRequest},
        error::{validation::ValidationError, Error},
        model::auth::AuthUser,
        util::{
            db::{ensure_deleted, on_foreign_key_violation, on_unique_violation},
            validate::{optional_text, required_name, required_text},
        },
    },
};

const DUPLICATE_NAME: &str = "Party with this name already exists";

pub struct PartyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyService<'a> {
    /// Creates a new instance of [`PartyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: PartyQuery) -> Result<PageResponse<PartyDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = PartyRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<PartyDto, Error> {
        let party = PartyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Party"))?;

        self.populate_one(party).await
    }

    /// Creates a party, names are unique and abbreviations are stored upper-case
    pub async fn create(&self, user: &AuthUser, payload: PartyPayload) -> Result<PartyDto, Error> {
        let repo = PartyRepository::new(self.db);

        let party = entity::party::Model {
            id: 0,
            name: required_name(payload.name)?,
            abbreviation: abbreviation(payload.abbreviation)?,
            symbol: optional_text("symbol", payload.symbol, 255)?,
            founded_year: payload.founded_year,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        if repo.find_by_name(&party.name).await?.is_some() {
            return Err(Error::Duplicate(DUPLICATE_NAME.to_string()));
        }

        let party = repo
            .create(party)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE_NAME))?;

        tracing::info!(party_id = party.id, user_id = user.id, "Created party");

        self.populate_one(party).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: PartyPayload,
    ) -> Result<PartyDto, Error> {
        let repo = PartyRepository::new(self.db);
        let mut party = repo.find_by_id(id).await?.ok_or(Error::NotFound("Party"))?;

        if payload.name.is_some() {
            let name = required_name(payload.name)?;

            if name != party.name {
                if let Some(existing) = repo.find_by_name(&name).await? {
                    if existing.id != party.id {
                        return Err(Error::Duplicate(DUPLICATE_NAME.to_string()));
                    }
                }
            }
            party.name = name;
        }
        if payload.abbreviation.is_some() {
            party.abbreviation = abbreviation(payload.abbreviation)?;
        }
        if payload.symbol.is_some() {
            party.symbol = optional_text("symbol", payload.symbol, 255)?;
        }
        if payload.founded_year.is_some() {
            party.founded_year = payload.founded_year;
        }
        party.updated_by = Some(user.id);

        let party = repo
            .update(party)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE_NAME))?;

        self.populate_one(party).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = PartyRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Party"))?;

        ensure_deleted(result, "Party")
    }

    async fn populate(&self, parties: &[entity::party::Model]) -> Result<Vec<PartyDto>, Error> {
        let users = NameLookup::users(
            self.db,
            parties.iter().flat_map(|p| [p.created_by, p.updated_by]),
        )
        .await?;

        Ok(parties
            .iter()
            .map(|p| PartyDto {
                id: p.id,
                name: p.name.clone(),
                abbreviation: p.abbreviation.clone(),
                symbol: p.symbol.clone(),
                founded_year: p.founded_year,
                audit: users.audit(p.created_by, p.updated_by, p.created_at, p.updated_at),
            })
            .collect())
    }

    async fn populate_one(&self, party: entity::party::Model) -> Result<PartyDto, Error> {
        self.populate(std::slice::from_ref(&party))
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError(format!("Failed to populate party {}", party.id)))
    }
}

fn abbreviation(value: Option<String>) -> Result<String, ValidationError> {
    Ok(required_text("abbreviation", value, 20)?.to_uppercase())
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::party::PartyPayload,
        server::{model::auth::AuthUser, service::party::PartyService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    fn payload(name: &str, abbreviation: &str) -> PartyPayload {
        PartyPayload {
            name: Some(name.to_string()),
            abbreviation: Some(abbreviation.to_string()),
            ..Default::default()
        }
    }

    /// Expect the abbreviation to be stored upper-case
    #[tokio::test]
    async fn uppercases_abbreviation() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .build()
            .await?;

        let party = PartyService::new(&test.db)
            .create(&admin(&test), payload("Janata Dal", "jd"))
            .await
            .unwrap();

        assert_eq!(party.abbreviation, "JD");

        Ok(())
    }

    /// Expect a second party with the same name to be rejected
    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .build()
            .await?;
        let service = PartyService::new(&test.db);

        service
            .create(&admin(&test), payload("Janata Dal", "JD"))
            .await
            .unwrap();
        let err = service
            .create(&admin(&test), payload("Janata Dal", "JDU"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Party with this name already exists");
        assert_eq!(service.list(Default::default()).await.unwrap().meta.total, 1);

        Ok(())
    }

    /// Expect renaming a party to its own name to succeed
    #[tokio::test]
    async fn allows_keeping_own_name() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_user("admin", "Admin")
            .build()
            .await?;
        let service = PartyService::new(&test.db);
        let party = service
            .create(&admin(&test), payload("Janata Dal", "JD"))
            .await
            .unwrap();

        let updated = service
            .update(&admin(&test), party.id, payload("Janata Dal", "JDS"))
            .await
            .unwrap();

        assert_eq!(updated.abbreviation, "JDS");

        Ok(())
    }
}
