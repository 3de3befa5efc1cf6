//! Parliamentary constituencies, grouped under divisions.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        hierarchy::{ParliamentDto, ParliamentPayload, ParliamentQuery},
    },
    server::{
        data::{parliament::ParliamentRepository, populate::NameLookup, query::PageRequest},
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::required_name,
        },
    },
};

pub struct ParliamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParliamentService<'a> {
    /// Creates a new instance of [`ParliamentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: ParliamentQuery) -> Result<PageResponse<ParliamentDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = ParliamentRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<ParliamentDto, Error> {
        let parliament = ParliamentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Parliament"))?;

        self.populate_one(parliament).await
    }

    /// Creates a parliament after checking its division exists
    pub async fn create(
        &self,
        user: &AuthUser,
        payload: ParliamentPayload,
    ) -> Result<ParliamentDto, Error> {
        let name = required_name(payload.name)?;

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                division: payload.division_id,
                ..Default::default()
            })
            .await?;

        let parliament = entity::parliament::Model {
            id: 0,
            name,
            division_id: payload.division_id,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        let parliament = ParliamentRepository::new(self.db).create(parliament).await?;

        tracing::info!(parliament_id = parliament.id, user_id = user.id, "Created parliament");

        self.populate_one(parliament).await
    }

    /// Applies the provided fields of `payload`, absent fields keep their stored value
    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: ParliamentPayload,
    ) -> Result<ParliamentDto, Error> {
        let repo = ParliamentRepository::new(self.db);
        let mut parliament = repo.find_by_id(id).await?.ok_or(Error::NotFound("Parliament"))?;

        if payload.name.is_some() {
            parliament.name = required_name(payload.name)?;
        }
        if payload.division_id.is_some() {
            parliament.division_id = payload.division_id;
        }

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                division: parliament.division_id,
                ..Default::default()
            })
            .await?;

        parliament.updated_by = Some(user.id);
        let parliament = repo.update(parliament).await?;

        self.populate_one(parliament).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = ParliamentRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Parliament"))?;

        ensure_deleted(result, "Parliament")
    }

    async fn populate(
        &self,
        parliaments: &[entity::parliament::Model],
    ) -> Result<Vec<ParliamentDto>, Error> {
        let (users, parents) = tokio::try_join!(
            NameLookup::users(
                self.db,
                parliaments.iter().flat_map(|r| [r.created_by, r.updated_by]),
            ),
            NameLookup::divisions(self.db, parliaments.iter().map(|r| r.division_id)),
        )?;

        Ok(parliaments
            .iter()
            .map(|r| ParliamentDto {
                id: r.id,
                name: r.name.clone(),
                division: parents.get(r.division_id),
                audit: users.audit(r.created_by, r.updated_by, r.created_at, r.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        parliament: entity::parliament::Model,
    ) -> Result<ParliamentDto, Error> {
        self.populate(std::slice::from_ref(&parliament))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to populate parliament {}", parliament.id))
            })
    }
}
