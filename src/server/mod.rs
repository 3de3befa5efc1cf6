//! Server application core modules.
//!
//! HTTP routing and handlers, bearer token authentication, the services enforcing validation
//! and ancestry rules, and the sea-orm repositories behind them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
