//! Test utilities shared by the constituency crate's unit and integration tests.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, and `build()` returns a [`TestContext`] backed by an in-memory SQLite database that
//! the test then works against.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{geo as geo_factory, hierarchy::HierarchyChain},
        TestBuilder, TestContext, TestError,
    };
}
