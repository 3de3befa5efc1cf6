//! Polling booths, the leaves of the hierarchy.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        hierarchy::{BoothDto, BoothPayload, BoothQuery},
    },
    server::{
        data::{booth::BoothRepository, populate::NameLookup, query::PageRequest},
        error::{validation::ValidationError, Error},
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::{optional_text, required_name, required_text, NAME_MAX_LEN},
        },
    },
};

const ADDRESS_MAX_LEN: usize = 500;

pub struct BoothService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoothService<'a> {
    /// Creates a new instance of [`BoothService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: BoothQuery) -> Result<PageResponse<BoothDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = BoothRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    /// Booths of one block, the `block` filter of `query` is replaced by `block_id`
    pub async fn list_by_block(
        &self,
        block_id: i32,
        query: BoothQuery,
    ) -> Result<PageResponse<BoothDto>, Error> {
        self.list(BoothQuery {
            block: Some(block_id),
            ..query
        })
        .await
    }

    pub async fn get(&self, id: i32) -> Result<BoothDto, Error> {
        let booth = BoothRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Booth"))?;

        self.populate_one(booth).await
    }

    /// Creates a booth
    ///
    /// # Returns
    /// - `Err(Error::ValidationError)` - Name or booth number missing, coordinates out of range
    /// - `Err(Error::AncestryError)` - The referenced block does not exist
    pub async fn create(&self, user: &AuthUser, payload: BoothPayload) -> Result<BoothDto, Error> {
        let booth = entity::booth::Model {
            id: 0,
            name: required_name(payload.name)?,
            booth_number: required_text("booth_number", payload.booth_number, NAME_MAX_LEN)?,
            block_id: payload.block_id,
            full_address: optional_text("full_address", payload.full_address, ADDRESS_MAX_LEN)?,
            latitude: coordinate("latitude", payload.latitude, 90.0)?,
            longitude: coordinate("longitude", payload.longitude, 180.0)?,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                block: booth.block_id,
                ..Default::default()
            })
            .await?;

        let booth = BoothRepository::new(self.db).create(booth).await?;

        tracing::info!(booth_id = booth.id, user_id = user.id, "Created booth");

        self.populate_one(booth).await
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: BoothPayload,
    ) -> Result<BoothDto, Error> {
        let repo = BoothRepository::new(self.db);
        let mut booth = repo.find_by_id(id).await?.ok_or(Error::NotFound("Booth"))?;

        if payload.name.is_some() {
            booth.name = required_name(payload.name)?;
        }
        if payload.booth_number.is_some() {
            booth.booth_number =
                required_text("booth_number", payload.booth_number, NAME_MAX_LEN)?;
        }
        if payload.block_id.is_some() {
            booth.block_id = payload.block_id;
        }
        if payload.full_address.is_some() {
            booth.full_address =
                optional_text("full_address", payload.full_address, ADDRESS_MAX_LEN)?;
        }
        if payload.latitude.is_some() {
            booth.latitude = coordinate("latitude", payload.latitude, 90.0)?;
        }
        if payload.longitude.is_some() {
            booth.longitude = coordinate("longitude", payload.longitude, 180.0)?;
        }

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                block: booth.block_id,
                ..Default::default()
            })
            .await?;

        booth.updated_by = Some(user.id);
        let booth = repo.update(booth).await?;

        self.populate_one(booth).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = BoothRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Booth"))?;

        ensure_deleted(result, "Booth")
    }

    async fn populate(&self, booths: &[entity::booth::Model]) -> Result<Vec<BoothDto>, Error> {
        let (users, blocks) = tokio::try_join!(
            NameLookup::users(
                self.db,
                booths.iter().flat_map(|b| [b.created_by, b.updated_by]),
            ),
            NameLookup::blocks(self.db, booths.iter().map(|b| b.block_id)),
        )?;

        Ok(booths
            .iter()
            .map(|b| BoothDto {
                id: b.id,
                name: b.name.clone(),
                booth_number: b.booth_number.clone(),
                full_address: b.full_address.clone(),
                latitude: b.latitude,
                longitude: b.longitude,
                block: blocks.get(b.block_id),
                audit: users.audit(b.created_by, b.updated_by, b.created_at, b.updated_at),
            })
            .collect())
    }

    async fn populate_one(&self, booth: entity::booth::Model) -> Result<BoothDto, Error> {
        self.populate(std::slice::from_ref(&booth))
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError(format!("Failed to populate booth {}", booth.id)))
    }
}

/// A latitude or longitude within `-limit..=limit`.
fn coordinate(
    field: &'static str,
    value: Option<f64>,
    limit: f64,
) -> Result<Option<f64>, ValidationError> {
    match value {
        Some(v) if !v.is_finite() || v.abs() > limit => Err(ValidationError::field(
            field,
            format!("{} must be between -{} and {}", field, limit, limit),
        )),
        value => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::hierarchy::BoothPayload,
        server::{model::auth::AuthUser, service::booth::BoothService},
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    mod create {
        use super::*;

        /// Expect a booth under a missing block to fail with nothing persisted
        #[tokio::test]
        async fn rejects_missing_block() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;
            let service = BoothService::new(&test.db);

            let err = service
                .create(
                    &admin(&test),
                    BoothPayload {
                        name: Some("Primary School".to_string()),
                        booth_number: Some("12".to_string()),
                        block_id: Some(999),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "Block not found");
            assert_eq!(service.list(Default::default()).await.unwrap().meta.total, 0);

            Ok(())
        }

        /// Expect a booth number to be required
        #[tokio::test]
        async fn requires_booth_number() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;

            let err = BoothService::new(&test.db)
                .create(
                    &admin(&test),
                    BoothPayload {
                        name: Some("Primary School".to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "booth_number is required");

            Ok(())
        }

        /// Expect out of range coordinates to be rejected
        #[tokio::test]
        async fn rejects_out_of_range_latitude() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_user("admin", "Admin")
                .build()
                .await?;

            let err = BoothService::new(&test.db)
                .create(
                    &admin(&test),
                    BoothPayload {
                        name: Some("Primary School".to_string()),
                        booth_number: Some("12".to_string()),
                        latitude: Some(91.0),
                        ..Default::default()
                    },
                )
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "latitude must be between -90 and 90");

            Ok(())
        }
    }

    mod list_by_block {
        use super::*;

        /// Expect only the booths of the given block
        #[tokio::test]
        async fn filters_by_block() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_hierarchy_tables()
                .with_hierarchy_chain("A")
                .with_hierarchy_chain("B")
                .build()
                .await?;
            let block = &test.chains[1].block;

            let booths = BoothService::new(&test.db)
                .list_by_block(block.id, Default::default())
                .await
                .unwrap();

            assert_eq!(booths.meta.total, 1);
            assert_eq!(booths.data[0].block.as_ref().unwrap().name, "Block B");

            Ok(())
        }
    }
}
