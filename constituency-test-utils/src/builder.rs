//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Builder methods only queue work; tables are created and fixtures inserted
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and fixture
/// records. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_hierarchy_tables: bool,
    include_all_tables: bool,

    users: Vec<(String, String)>, // (username, role)
    chains: Vec<String>,          // name suffix of each chain
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_hierarchy_tables: false,
            include_all_tables: false,
            users: Vec::new(),
            chains: Vec::new(),
        }
    }

    /// Add the user table and the six hierarchy level tables.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_hierarchy_tables(mut self) -> Self {
        self.include_hierarchy_tables = true;
        self
    }

    /// Add every table of the schema.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use constituency_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), constituency_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AppUser)
    ///     .with_table(Status)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables.push(create_statement(entity));
        self
    }

    /// Insert a user with the given role during `build()`.
    ///
    /// Inserted users are available through [`TestContext::users`] in declaration order.
    ///
    /// # Arguments
    /// - `username` - Unique username, also used to derive the email
    /// - `role` - Role string such as `"Admin"` or `"SuperAdmin"`
    pub fn with_user(mut self, username: impl Into<String>, role: impl Into<String>) -> Self {
        self.users.push((username.into(), role.into()));
        self
    }

    /// Insert a complete state to booth chain during `build()`.
    ///
    /// Every record of the chain is named after its level followed by `suffix`, e.g.
    /// `"State A"`, `"Division A"`. Inserted chains are available through
    /// [`TestContext::chains`] in declaration order.
    pub fn with_hierarchy_chain(mut self, suffix: impl Into<String>) -> Self {
        self.chains.push(suffix.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (table groups, then custom tables)
    /// 2. Inserts users
    /// 3. Inserts hierarchy chains
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_hierarchy_tables || self.include_all_tables {
            all_tables.extend(vec![
                create_statement(entity::prelude::AppUser),
                create_statement(entity::prelude::State),
                create_statement(entity::prelude::Division),
                create_statement(entity::prelude::Parliament),
                create_statement(entity::prelude::Assembly),
                create_statement(entity::prelude::Block),
                create_statement(entity::prelude::Booth),
            ]);
        }

        if self.include_all_tables {
            all_tables.extend(vec![
                create_statement(entity::prelude::Party),
                create_statement(entity::prelude::Status),
                create_statement(entity::prelude::Candidate),
                create_statement(entity::prelude::Government),
                create_statement(entity::prelude::Influencer),
                create_statement(entity::prelude::BoothSurvey),
                create_statement(entity::prelude::BoothVolunteer),
                create_statement(entity::prelude::BoothVote),
                create_statement(entity::prelude::PotentialCandidate),
                create_statement(entity::prelude::DistrictPolygon),
                create_statement(entity::prelude::ParliamentPolygon),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert users
        let mut users = Vec::new();
        for (username, role) in self.users {
            users.push(setup.user().insert_user(&username, &role).await?);
        }
        setup.users = users;

        // 3. Insert hierarchy chains
        let mut chains = Vec::new();
        for suffix in self.chains {
            chains.push(setup.hierarchy().insert_chain(&suffix).await?);
        }
        setup.chains = chains;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// CREATE TABLE statement for an entity, tolerant of the table already existing so that
/// table groups and custom tables may overlap.
fn create_statement<E: EntityTrait>(entity: E) -> TableCreateStatement {
    let schema = Schema::new(sea_orm::DbBackend::Sqlite);
    schema
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_hierarchy_tables() {
        let result = TestBuilder::new().with_hierarchy_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_methods() {
        let result = TestBuilder::new()
            .with_all_tables()
            .with_table(entity::prelude::Status)
            .with_user("admin", "Admin")
            .with_hierarchy_chain("A")
            .build()
            .await;
        assert!(result.is_ok());

        let test = result.unwrap();
        assert_eq!(test.users.len(), 1);
        assert_eq!(test.first_chain().booth.block_id, Some(test.first_chain().block.id));
    }
}
