//! Government projects, each placed at a block (and optionally a booth) of the hierarchy.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        government::{GovernmentDto, GovernmentPayload, GovernmentQuery},
    },
    server::{
        data::{
            assembly::AssemblyRepository,
            government::GovernmentRepository,
            populate::{HierarchyLookup, NameLookup},
            query::PageRequest,
            state::StateRepository,
        },
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::{non_negative_amount, required, required_name},
        },
    },
};

pub struct GovernmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GovernmentService<'a> {
    /// Creates a new instance of [`GovernmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        query: GovernmentQuery,
    ) -> Result<PageResponse<GovernmentDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = GovernmentRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    /// Projects of one state
    ///
    /// # Returns
    /// - `Err(Error::NotFound)` - The state does not exist
    pub async fn list_by_state(
        &self,
        state_id: i32,
        query: GovernmentQuery,
    ) -> Result<PageResponse<GovernmentDto>, Error> {
        StateRepository::new(self.db)
            .find_by_id(state_id)
            .await?
            .ok_or(Error::NotFound("State"))?;

        self.list(GovernmentQuery {
            state: Some(state_id),
            ..query
        })
        .await
    }

    /// Projects of one assembly
    ///
    /// # Returns
    /// - `Err(Error::NotFound)` - The assembly does not exist
    pub async fn list_by_assembly(
        &self,
        assembly_id: i32,
        query: GovernmentQuery,
    ) -> Result<PageResponse<GovernmentDto>, Error> {
        AssemblyRepository::new(self.db)
            .find_by_id(assembly_id)
            .await?
            .ok_or(Error::NotFound("Assembly"))?;

        self.list(GovernmentQuery {
            assembly: Some(assembly_id),
            ..query
        })
        .await
    }

    pub async fn get(&self, id: i32) -> Result<GovernmentDto, Error> {
        let government = GovernmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Government project"))?;

        self.populate_one(government).await
    }

    /// Creates a project after checking its state to booth references form one chain
    pub async fn create(
        &self,
        user: &AuthUser,
        payload: GovernmentPayload,
    ) -> Result<GovernmentDto, Error> {
        let government = entity::government::Model {
            id: 0,
            name: required_name(payload.name)?,
            kind: payload.kind.unwrap_or_default().as_str().to_string(),
            project_complete_date: payload.project_complete_date,
            amount: non_negative_amount("amount", required("amount", payload.amount)?)?,
            state_id: required("state_id", payload.state_id)?,
            division_id: required("division_id", payload.division_id)?,
            parliament_id: required("parliament_id", payload.parliament_id)?,
            assembly_id: required("assembly_id", payload.assembly_id)?,
            block_id: required("block_id", payload.block_id)?,
            booth_id: payload.booth_id.flatten(),
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        AncestryValidator::new(self.db)
            .validate(&chain_of(&government))
            .await?;

        let government = GovernmentRepository::new(self.db).create(government).await?;

        tracing::info!(
            government_id = government.id,
            user_id = user.id,
            "Created government project"
        );

        self.populate_one(government).await
    }

    /// Applies the provided fields of `payload` and validates the merged chain
    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: GovernmentPayload,
    ) -> Result<GovernmentDto, Error> {
        let repo = GovernmentRepository::new(self.db);
        let mut government = repo
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Government project"))?;

        if payload.name.is_some() {
            government.name = required_name(payload.name)?;
        }
        if let Some(kind) = payload.kind {
            government.kind = kind.as_str().to_string();
        }
        if payload.project_complete_date.is_some() {
            government.project_complete_date = payload.project_complete_date;
        }
        if let Some(amount) = payload.amount {
            government.amount = non_negative_amount("amount", amount)?;
        }
        if let Some(state_id) = payload.state_id {
            government.state_id = state_id;
        }
        if let Some(division_id) = payload.division_id {
            government.division_id = division_id;
        }
        if let Some(parliament_id) = payload.parliament_id {
            government.parliament_id = parliament_id;
        }
        if let Some(assembly_id) = payload.assembly_id {
            government.assembly_id = assembly_id;
        }
        if let Some(block_id) = payload.block_id {
            government.block_id = block_id;
        }
        if let Some(booth_id) = payload.booth_id {
            government.booth_id = booth_id;
        }

        AncestryValidator::new(self.db)
            .validate(&chain_of(&government))
            .await?;

        government.updated_by = Some(user.id);
        let government = repo.update(government).await?;

        self.populate_one(government).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = GovernmentRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Government project"))?;

        ensure_deleted(result, "Government project")
    }

    async fn populate(
        &self,
        governments: &[entity::government::Model],
    ) -> Result<Vec<GovernmentDto>, Error> {
        let (users, levels) = tokio::try_join!(
            NameLookup::users(
                self.db,
                governments.iter().flat_map(|g| [g.created_by, g.updated_by]),
            ),
            HierarchyLookup::load(self.db, governments, |g| {
                let chain = chain_of(g);
                [
                    chain.state,
                    chain.division,
                    chain.parliament,
                    chain.assembly,
                    chain.block,
                    chain.booth,
                ]
            }),
        )?;

        Ok(governments
            .iter()
            .map(|g| GovernmentDto {
                id: g.id,
                name: g.name.clone(),
                kind: g.kind.clone(),
                project_complete_date: g.project_complete_date,
                amount: g.amount,
                state: levels.states.get(Some(g.state_id)),
                division: levels.divisions.get(Some(g.division_id)),
                parliament: levels.parliaments.get(Some(g.parliament_id)),
                assembly: levels.assemblies.get(Some(g.assembly_id)),
                block: levels.blocks.get(Some(g.block_id)),
                booth: levels.booths.get(g.booth_id),
                audit: users.audit(g.created_by, g.updated_by, g.created_at, g.updated_at),
            })
            .collect())
    }

    async fn populate_one(
        &self,
        government: entity::government::Model,
    ) -> Result<GovernmentDto, Error> {
        self.populate(std::slice::from_ref(&government))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to populate government project {}",
                    government.id
                ))
            })
    }
}

fn chain_of(government: &entity::government::Model) -> AncestryChain {
    AncestryChain {
        state: Some(government.state_id),
        division: Some(government.division_id),
        parliament: Some(government.parliament_id),
        assembly: Some(government.assembly_id),
        block: Some(government.block_id),
        booth: government.booth_id,
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::*;

    use crate::{
        model::government::{GovernmentPayload, GovernmentType},
        server::{
            error::Error, model::auth::AuthUser, service::government::GovernmentService,
        },
    };

    fn admin(test: &TestContext) -> AuthUser {
        AuthUser::from(test.first_user().clone())
    }

    fn payload(chain: &HierarchyChain) -> GovernmentPayload {
        GovernmentPayload {
            name: Some("Road repair".to_string()),
            kind: None,
            project_complete_date: None,
            amount: Some(1500.0),
            state_id: Some(chain.state.id),
            division_id: Some(chain.division.id),
            parliament_id: Some(chain.parliament.id),
            assembly_id: Some(chain.assembly.id),
            block_id: Some(chain.block.id),
            booth_id: Some(Some(chain.booth.id)),
        }
    }

    mod create {
        use super::*;

        /// Expect every level to be populated and the type to default to new
        #[tokio::test]
        async fn populates_chain() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .build()
                .await?;

            let government = GovernmentService::new(&test.db)
                .create(&admin(&test), payload(test.first_chain()))
                .await
                .unwrap();

            assert_eq!(government.kind, GovernmentType::New.as_str());
            assert_eq!(government.state.unwrap().name, "State A");
            assert_eq!(government.block.unwrap().name, "Block A");
            assert_eq!(government.booth.unwrap().booth_number, "B-A");

            Ok(())
        }

        /// Expect a block from another chain to be rejected with nothing persisted
        #[tokio::test]
        async fn rejects_inconsistent_chain() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .with_hierarchy_chain("B")
                .build()
                .await?;
            let service = GovernmentService::new(&test.db);

            let err = service
                .create(
                    &admin(&test),
                    GovernmentPayload {
                        block_id: Some(test.chains[1].block.id),
                        booth_id: None,
                        ..payload(&test.chains[0])
                    },
                )
                .await
                .unwrap_err();

            assert!(matches!(err, Error::AncestryError(_)));
            assert_eq!(
                err.to_string(),
                "Block does not belong to the selected Assembly"
            );
            assert_eq!(service.list(Default::default()).await.unwrap().meta.total, 0);

            Ok(())
        }

        /// Expect the block to be required
        #[tokio::test]
        async fn requires_block() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .build()
                .await?;

            let err = GovernmentService::new(&test.db)
                .create(
                    &admin(&test),
                    GovernmentPayload {
                        block_id: None,
                        ..payload(test.first_chain())
                    },
                )
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "block_id is required");

            Ok(())
        }
    }

    mod update {
        use super::*;

        /// Expect an absent booth to keep the stored one and an explicit null to clear it
        #[tokio::test]
        async fn clears_booth_only_on_null() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .build()
                .await?;
            let service = GovernmentService::new(&test.db);
            let created = service
                .create(&admin(&test), payload(test.first_chain()))
                .await
                .unwrap();

            let renamed: GovernmentPayload =
                serde_json::from_value(serde_json::json!({ "name": "Bridge" })).unwrap();
            let kept = service
                .update(&admin(&test), created.id, renamed)
                .await
                .unwrap();

            let detach: GovernmentPayload =
                serde_json::from_value(serde_json::json!({ "booth_id": null })).unwrap();
            let cleared = service
                .update(&admin(&test), created.id, detach)
                .await
                .unwrap();

            assert_eq!(kept.name, "Bridge");
            assert_eq!(kept.booth.unwrap().booth_number, "B-A");
            assert!(cleared.booth.is_none());

            Ok(())
        }
    }

    mod list_by_state {
        use super::*;

        /// Expect a missing state to be not found
        #[tokio::test]
        async fn not_found_for_missing_state() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;

            let result = GovernmentService::new(&test.db)
                .list_by_state(404, Default::default())
                .await;

            assert!(matches!(result, Err(Error::NotFound("State"))));

            Ok(())
        }

        /// Expect only the projects of the state
        #[tokio::test]
        async fn filters_by_state() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_user("admin", "Admin")
                .with_hierarchy_chain("A")
                .with_hierarchy_chain("B")
                .build()
                .await?;
            let service = GovernmentService::new(&test.db);
            for chain in &test.chains {
                service.create(&admin(&test), payload(chain)).await.unwrap();
            }

            let page = service
                .list_by_state(test.chains[1].state.id, Default::default())
                .await
                .unwrap();

            assert_eq!(page.meta.total, 1);
            assert_eq!(page.data[0].state.as_ref().unwrap().name, "State B");

            Ok(())
        }
    }
}
