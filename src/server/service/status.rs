//! Workflow statuses.
//!
//! System statuses are seeded records the application relies on: they cannot be
//! deactivated, deleted, or turned into ordinary statuses.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        status::{StatusDto, StatusPayload, StatusQuery},
    },
    server::{
        data::{populate::NameLookup, query::PageRequest, status::StatusRepository},
        error::{validation::ValidationError, Error},
        model::auth::AuthUser,
        util::{
            db::{ensure_deleted, on_foreign_key_violation, on_unique_violation},
            validate::{color_code, optional_text, required_name, DEFAULT_COLOR_CODE},
        },
    },
};

const DUPLICATE_NAME: &str = "Status with this name already exists";
const DESCRIPTION_MAX_LEN: usize = 500;

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    /// Creates a new instance of [`StatusService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: StatusQuery) -> Result<PageResponse<StatusDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = StatusRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<StatusDto, Error> {
        let status = StatusRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Status"))?;

        self.populate_one(status).await
    }

    pub async fn create(
        &self,
        user: &AuthUser,
        payload: StatusPayload,
    ) -> Result<StatusDto, Error> {
        let repo = StatusRepository::new(self.db);

        let status = entity::status::Model {
            id: 0,
            name: required_name(payload.name)?,
            description: optional_text("description", payload.description, DESCRIPTION_MAX_LEN)?,
            is_active: payload.is_active.unwrap_or(true),
            is_system: payload.is_system.unwrap_or(false),
            color_code: match payload.color_code {
                Some(color) => color_code(color)?,
                None => DEFAULT_COLOR_CODE.to_string(),
            },
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        if repo.find_by_name(&status.name).await?.is_some() {
            return Err(Error::Duplicate(DUPLICATE_NAME.to_string()));
        }

        let status = repo
            .create(status)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE_NAME))?;

        tracing::info!(status_id = status.id, user_id = user.id, "Created status");

        self.populate_one(status).await
    }

    /// Applies the provided fields of `payload`
    ///
    /// # Returns
    /// - `Err(Error::ValidationError)` - The update would deactivate a system status or clear
    ///   its system flag
    /// - `Err(Error::Duplicate)` - Another status already has the new name
    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: StatusPayload,
    ) -> Result<StatusDto, Error> {
        let repo = StatusRepository::new(self.db);
        let mut status = repo.find_by_id(id).await?.ok_or(Error::NotFound("Status"))?;

        if status.is_system {
            if payload.is_system == Some(false) {
                return Err(ValidationError::field(
                    "is_system",
                    "System statuses cannot be made non-system",
                )
                .into());
            }
            if payload.is_active == Some(false) {
                return Err(ValidationError::field(
                    "is_active",
                    "System statuses cannot be deactivated",
                )
                .into());
            }
        }

        if payload.name.is_some() {
            let name = required_name(payload.name)?;

            if name != status.name {
                if let Some(existing) = repo.find_by_name(&name).await? {
                    if existing.id != status.id {
                        return Err(Error::Duplicate(DUPLICATE_NAME.to_string()));
                    }
                }
            }
            status.name = name;
        }
        if payload.description.is_some() {
            status.description =
                optional_text("description", payload.description, DESCRIPTION_MAX_LEN)?;
        }
        if let Some(is_active) = payload.is_active {
            status.is_active = is_active;
        }
        if let Some(is_system) = payload.is_system {
            status.is_system = is_system;
        }
        if let Some(color) = payload.color_code {
            status.color_code = color_code(color)?;
        }
        status.updated_by = Some(user.id);

        let status = repo
            .update(status)
            .await
            .map_err(|err| on_unique_violation(err, DUPLICATE_NAME))?;

        self.populate_one(status).await
    }

    /// Flips `is_active` of an ordinary status
    pub async fn toggle_active(&self, user: &AuthUser, id: i32) -> Result<StatusDto, Error> {
        let repo = StatusRepository::new(self.db);
        let mut status = repo.find_by_id(id).await?.ok_or(Error::NotFound("Status"))?;

        if status.is_system {
            return Err(
                ValidationError::Invalid("System statuses cannot be deactivated".to_string())
                    .into(),
            );
        }

        status.is_active = !status.is_active;
        status.updated_by = Some(user.id);

        let status = repo.update(status).await?;

        tracing::info!(
            status_id = status.id,
            is_active = status.is_active,
            "Toggled status"
        );

        self.populate_one(status).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let repo = StatusRepository::new(self.db);
        let status = repo.find_by_id(id).await?.ok_or(Error::NotFound("Status"))?;

        if status.is_system {
            return Err(
                ValidationError::Invalid("System statuses cannot be deleted".to_string()).into(),
            );
        }

        let result = repo
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Status"))?;

        ensure_deleted(result, "Status")
    }

    async fn populate(&self, statuses: &[entity::status::Model]) -> Result<Vec<StatusDto>, Error> {
        let users = NameLookup::users(
            self.db,
            statuses.iter().flat_map(|s| [s.created_by, s.updated_by]),
        )
        .await?;

        Ok(statuses
            .iter()
            .map(|s| StatusDto {
                id: s.id,
                name: s.name.clone(),
                description: s.description.clone(),
                is_active: s.is_active,
                is_system: s.is_system,
                color_code: s.color_code.clone(),
                audit: users.audit(s.created_by, s.updated_by, s.created_at, s.updated_at),
            })
            .collect())
    }

    async fn populate_one(&self, status: entity::status::Model) -> Result<StatusDto, Error> {
        self.populate(std::slice::from_ref(&status))
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError(format!("Failed to populate status {}", status.id)))
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::status::StatusPayload,
        server::{model::auth::AuthUser, service::status::StatusService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    fn named(name: &str) -> StatusPayload {
        StatusPayload {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    mod create {
        use super::*;

        /// Expect defaults for active, system and color
        #[tokio::test]
        async fn applies_defaults() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;

            let status = StatusService::new(&test.db)
                .create(&admin(&test), named("Open"))
                .await
                .unwrap();

            assert!(status.is_active);
            assert!(!status.is_system);
            assert_eq!(status.color_code, "#6c757d");

            Ok(())
        }

        /// Expect a second status with the same name to be rejected, leaving one row
        #[tokio::test]
        async fn rejects_duplicate_name() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;
            let service = StatusService::new(&test.db);

            service.create(&admin(&test), named("Open")).await.unwrap();
            let err = service
                .create(&admin(&test), named("Open"))
                .await
                .unwrap_err();

            assert!(err.to_string().contains("already exists"));
            assert_eq!(service.list(Default::default()).await.unwrap().meta.total, 1);

            Ok(())
        }

        /// Expect an invalid color to be rejected
        #[tokio::test]
        async fn rejects_invalid_color() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;

            let err = StatusService::new(&test.db)
                .create(
                    &admin(&test),
                    StatusPayload {
                        color_code: Some("red".to_string()),
                        ..named("Open")
                    },
                )
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "Color code must be a valid hex color");

            Ok(())
        }
    }

    mod system {
        use super::*;

        /// Expect toggling an ordinary status to flip it
        #[tokio::test]
        async fn toggles_ordinary_status() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;
            let status = test.record().insert_status("Open", false).await?;

            let toggled = StatusService::new(&test.db)
                .toggle_active(&admin(&test), status.id)
                .await
                .unwrap();

            assert!(!toggled.is_active);

            Ok(())
        }

        /// Expect system statuses to refuse deactivation
        #[tokio::test]
        async fn refuses_to_deactivate_system_status() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;
            let status = test.record().insert_status("Closed", true).await?;

            let err = StatusService::new(&test.db)
                .toggle_active(&admin(&test), status.id)
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "System statuses cannot be deactivated");

            Ok(())
        }

        /// Expect system statuses to refuse deletion and clearing the system flag
        #[tokio::test]
        async fn protects_system_status() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;
            let status = test.record().insert_status("Closed", true).await?;
            let service = StatusService::new(&test.db);

            let delete = service.delete(status.id).await.unwrap_err();
            let update = service
                .update(
                    &admin(&test),
                    status.id,
                    StatusPayload {
                        is_system: Some(false),
                        ..Default::default()
                    },
                )
                .await;

            assert_eq!(delete.to_string(), "System statuses cannot be deleted");
            assert!(update.is_err());
            assert!(service.get(status.id).await.unwrap().is_system);

            Ok(())
        }
    }
}
