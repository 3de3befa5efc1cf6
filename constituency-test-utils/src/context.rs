//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and the JWT secret that test tokens are signed with.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::TEST_JWT_SECRET,
    error::TestError,
    fixtures::hierarchy::HierarchyChain,
    model::UserModel,
};

/// Test context structure returned by `TestBuilder`
///
/// Most tests should create this via [`TestBuilder`](crate::TestBuilder) rather than
/// constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_all_tables().build().await?;
///
/// let chain = test.hierarchy().insert_chain("A").await?;
/// let admin = test.user().insert_user("admin", "Admin").await?;
/// let token = test.auth().bearer(admin.id)?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Secret the auth fixtures sign tokens with
    pub jwt_secret: String,
    /// Users inserted by `TestBuilder::with_user`, in declaration order
    pub users: Vec<UserModel>,
    /// Hierarchy chains inserted by `TestBuilder::with_hierarchy_chain`, in declaration order
    pub chains: Vec<HierarchyChain>,
}

impl TestContext {
    /// Convert the database connection and JWT secret into any type that can be constructed
    /// from them
    ///
    /// This allows conversion to AppState without creating a circular dependency between the
    /// test-utils crate and the main constituency crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), self.jwt_secret.clone()))
    }
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            users: Vec::new(),
            chains: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// First user inserted by the builder.
    ///
    /// # Panics
    /// Panics when the builder was not given any `with_user` call.
    pub fn first_user(&self) -> &UserModel {
        &self.users[0]
    }

    /// First hierarchy chain inserted by the builder.
    ///
    /// # Panics
    /// Panics when the builder was not given any `with_hierarchy_chain` call.
    pub fn first_chain(&self) -> &HierarchyChain {
        &self.chains[0]
    }
}
