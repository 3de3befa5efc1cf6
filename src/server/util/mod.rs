//! Utility functions and helpers for server operations.
//!
//! Field validation shared by the services, database error classification, and GeoJSON
//! parsing and containment for the polygon store.

pub mod db;
pub mod geo;
pub mod validate;
