//! Assembly constituencies, grouped under parliamentary constituencies.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        hierarchy::{AssemblyDto, AssemblyPayload, AssemblyQuery},
    },
    server::{
        data::{assembly::AssemblyRepository, populate::NameLookup, query::PageRequest},
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::required_name,
        },
    },
};

pub struct AssemblyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssemblyService<'a> {
    /// Creates a new instance of [`AssemblyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: AssemblyQuery) -> Result<PageResponse<AssemblyDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = AssemblyRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<AssemblyDto, Error> {
        let assembly = AssemblyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Assembly"))?;

        self.populate_one(assembly).await
    }

    /// Creates a assembly after checking its parliament exists
    pub async fn create(
        &self,
        user: &AuthUser,
        payload: AssemblyPayload,
    ) -> Result<AssemblyDto, Error> {
        let name = required_name(payload.name)?;

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                parliament: payload.parliament_id,
                ..Default::default()
            })
            .await?;

        let assembly = entity::assembly::Model {
            id: 0,
            name,
            parliament_id: payload.parliament_id,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        let assembly = AssemblyRepository::new(self.db).create(assembly).await?;

        tracing::info!(assembly_id = assembly.id, user_id = user.id, "Created assembly");

        self.populate_one(assembly).await
    }

    /// Applies the provided fields of `payload`, absent fields keep their stored value
    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: AssemblyPayload,
    ) -> Result<AssemblyDto, Error> {
        let repo = AssemblyRepository::new(self.db);
        let mut assembly = repo.find_by_id(id).await?.ok_or(Error::NotFound("Assembly"))?;

        if payload.name.is_some() {
            assembly.name = required_name(payload.name)?;
        }
        if payload.parliament_id.is_some() {
            assembly.parliament_id = payload.parliament_id;
        }

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                parliament: assembly.parliament_id,
                ..Default::default()
            })
            .await?;

        assembly.updated_by = Some(user.id);
        let assembly = repo.update(assembly).await?;

        self.populate_one(assembly).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = AssemblyRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Assembly"))?;

        ensure_deleted(result, "Assembly")
    }

    async fn populate(
        &self,
        assemblies: &[entity::assembly::Model],
    ) -> Result<Vec<AssemblyDto>, Error> {
        let (users, parents) = tokio::try_join!(
            NameLookup::users(
                self.db,
                assemblies.iter().flat_map(|r| [r.created_by, r.updated_by]),
            ),
            NameLookup::parliaments(self.db, assemblies.iter().map(|r| r.parliament_id)),
        )?;

        Ok(assemblies
            .iter()
            .map(|r| AssemblyDto {
                id: r.id,
                name: r.name.clone(),
                parliament: parents.get(r.parliament_id),
                audit: users.audit(r.created_by, r.updated_by, r.created_at, r.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        assembly: entity::assembly::Model,
    ) -> Result<AssemblyDto, Error> {
        self.populate(std::slice::from_ref(&assembly))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to populate assembly {}", assembly.id))
            })
    }
}
