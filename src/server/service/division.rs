//! Divisions, the second hierarchy level, each optionally under a state.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        hierarchy::{DivisionDto, DivisionPayload, DivisionQuery},
    },
    server::{
        data::{division::DivisionRepository, populate::NameLookup, query::PageRequest},
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::required_name,
        },
    },
};

pub struct DivisionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DivisionService<'a> {
    /// Creates a new instance of [`DivisionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: DivisionQuery) -> Result<PageResponse<DivisionDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = DivisionRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<DivisionDto, Error> {
        let division = DivisionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Division"))?;

        self.populate_one(division).await
    }

    /// Creates a division after checking its state exists
    pub async fn create(
        &self,
        user: &AuthUser,
        payload: DivisionPayload,
    ) -> Result<DivisionDto, Error> {
        let name = required_name(payload.name)?;

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                state: payload.state_id,
                ..Default::default()
            })
            .await?;

        let division = entity::division::Model {
            id: 0,
            name,
            state_id: payload.state_id,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        let division = DivisionRepository::new(self.db).create(division).await?;

        tracing::info!(division_id = division.id, user_id = user.id, "Created division");

        self.populate_one(division).await
    }

    /// Applies the provided fields of `payload`, absent fields keep their stored value
    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: DivisionPayload,
    ) -> Result<DivisionDto, Error> {
        let repo = DivisionRepository::new(self.db);
        let mut division = repo.find_by_id(id).await?.ok_or(Error::NotFound("Division"))?;

        if payload.name.is_some() {
            division.name = required_name(payload.name)?;
        }
        if payload.state_id.is_some() {
            division.state_id = payload.state_id;
        }

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                state: division.state_id,
                ..Default::default()
            })
            .await?;

        division.updated_by = Some(user.id);
        let division = repo.update(division).await?;

        self.populate_one(division).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = DivisionRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Division"))?;

        ensure_deleted(result, "Division")
    }

    async fn populate(
        &self,
        divisions: &[entity::division::Model],
    ) -> Result<Vec<DivisionDto>, Error> {
        let (users, parents) = tokio::try_join!(
            NameLookup::users(
                self.db,
                divisions.iter().flat_map(|r| [r.created_by, r.updated_by]),
            ),
            NameLookup::states(self.db, divisions.iter().map(|r| r.state_id)),
        )?;

        Ok(divisions
            .iter()
            .map(|r| DivisionDto {
                id: r.id,
                name: r.name.clone(),
                state: parents.get(r.state_id),
                audit: users.audit(r.created_by, r.updated_by, r.created_at, r.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        division: entity::division::Model,
    ) -> Result<DivisionDto, Error> {
        self.populate(std::slice::from_ref(&division))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!("Failed to populate division {}", division.id))
            })
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::hierarchy::DivisionPayload,
        server::{model::auth::AuthUser, service::division::DivisionService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    mod create {
        use super::*;

        /// Expect the parent state to be populated by name
        #[tokio::test]
        async fn populates_state() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;
            let state = test.hierarchy().insert_state("Bihar").await?;

            let division = DivisionService::new(&test.db)
                .create(
                    &admin(&test),
                    DivisionPayload {
                        name: Some("Patna".to_string()),
                        state_id: Some(state.id),
                    },
                )
                .await
                .unwrap();

            let populated = division.state.unwrap();
            assert_eq!(populated.id, state.id);
            assert_eq!(populated.name, "Bihar");

            Ok(())
        }

        /// Expect a missing state to be rejected before anything is written
        #[tokio::test]
        async fn rejects_missing_state() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;
            let service = DivisionService::new(&test.db);

            let err = service
                .create(
                    &admin(&test),
                    DivisionPayload {
                        name: Some("Patna".to_string()),
                        state_id: Some(404),
                    },
                )
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "State not found");
            assert_eq!(service.list(Default::default()).await.unwrap().meta.total, 0);

            Ok(())
        }
    }

    mod update {
        use super::*;

        /// Expect an absent parent in the payload to keep the stored parent
        #[tokio::test]
        async fn keeps_parent_when_absent() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let chain = test.first_chain();

            let division = DivisionService::new(&test.db)
                .update(
                    &admin(&test),
                    chain.division.id,
                    DivisionPayload {
                        name: Some("Renamed".to_string()),
                        state_id: None,
                    },
                )
                .await
                .unwrap();

            assert_eq!(division.name, "Renamed");
            assert_eq!(division.state.unwrap().id, chain.state.id);

            Ok(())
        }
    }
}
