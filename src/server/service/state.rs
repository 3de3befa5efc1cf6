//! State records, the root of the hierarchy.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        hierarchy::{StateDto, StatePayload, StateQuery},
    },
    server::{
        data::{populate::NameLookup, query::PageRequest, state::StateRepository},
        error::Error,
        model::auth::AuthUser,
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::required_name,
        },
    },
};

pub struct StateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StateService<'a> {
    /// Creates a new instance of [`StateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: StateQuery) -> Result<PageResponse<StateDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = StateRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    /// # Returns
    /// - `Err(Error::NotFound)` - No state with `id`
    pub async fn get(&self, id: i32) -> Result<StateDto, Error> {
        let state = StateRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("State"))?;

        self.populate_one(state).await
    }

    pub async fn create(&self, user: &AuthUser, payload: StatePayload) -> Result<StateDto, Error> {
        let state = entity::state::Model {
            id: 0,
            name: required_name(payload.name)?,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        let state = StateRepository::new(self.db).create(state).await?;

        tracing::info!(state_id = state.id, user_id = user.id, "Created state");

        self.populate_one(state).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: StatePayload,
    ) -> Result<StateDto, Error> {
        let repo = StateRepository::new(self.db);
        let mut state = repo.find_by_id(id).await?.ok_or(Error::NotFound("State"))?;

        if payload.name.is_some() {
            state.name = required_name(payload.name)?;
        }
        state.updated_by = Some(user.id);

        let state = repo.update(state).await?;

        self.populate_one(state).await
    }

    /// Deletes a state
    ///
    /// # Returns
    /// - `Err(Error::NotFound)` - No state with `id`
    /// - `Err(Error::StillReferenced)` - Divisions or other records still reference the state
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = StateRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "State"))?;

        ensure_deleted(result, "State")
    }

    async fn populate(&self, states: &[entity::state::Model]) -> Result<Vec<StateDto>, Error> {
        let users = NameLookup::users(
            self.db,
            states.iter().flat_map(|s| [s.created_by, s.updated_by]),
        )
        .await?;

        Ok(states
            .iter()
            .map(|s| StateDto {
                id: s.id,
                name: s.name.clone(),
                audit: users.audit(s.created_by, s.updated_by, s.created_at, s.updated_at),
            })
            .collect())
    }

    async fn populate_one(&self, state: entity::state::Model) -> Result<StateDto, Error> {
        self.populate(std::slice::from_ref(&state))
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError(format!("Failed to populate state {}", state.id)))
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::server::{model::auth::AuthUser, service::state::StateService};

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    mod create {
        use super::*;
        use crate::{model::hierarchy::StatePayload, server::error::Error};

        /// Expect the creator to be stamped and populated by username
        #[tokio::test]
        async fn stamps_creator() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;

            let state = StateService::new(&test.db)
                .create(
                    &admin(&test),
                    StatePayload {
                        name: Some("  Bihar ".to_string()),
                    },
                )
                .await
                .unwrap();

            assert_eq!(state.name, "Bihar");
            assert_eq!(state.audit.created_by.unwrap().name, "admin");
            assert_eq!(state.audit.updated_by.unwrap().name, "admin");

            Ok(())
        }

        /// Expect a blank name to be rejected
        #[tokio::test]
        async fn requires_name() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;

            let result = StateService::new(&test.db)
                .create(
                    &admin(&test),
                    StatePayload {
                        name: Some("   ".to_string()),
                    },
                )
                .await;

            assert!(matches!(result, Err(Error::ValidationError(_))));

            Ok(())
        }
    }

    mod delete {
        use super::*;
        use crate::server::error::Error;

        /// Expect a second delete of the same state to be not found
        #[tokio::test]
        async fn not_found_after_delete() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            let state = test.hierarchy().insert_state("Bihar").await?;
            let service = StateService::new(&test.db);

            service.delete(state.id).await.unwrap();
            let result = service.delete(state.id).await;

            assert!(matches!(result, Err(Error::NotFound("State"))));

            Ok(())
        }
    }
}
