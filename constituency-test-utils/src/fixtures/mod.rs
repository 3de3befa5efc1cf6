//! Test fixture modules for database record and token creation.
//!
//! - `auth` - signed JWTs for authenticated requests
//! - `geo` - GeoJSON payload factories
//! - `hierarchy` - state to booth records and complete chains
//! - `record` - parties, candidates and statuses referenced by other records
//! - `user` - application users

pub mod auth;
pub mod geo;
pub mod hierarchy;
pub mod record;
pub mod user;
