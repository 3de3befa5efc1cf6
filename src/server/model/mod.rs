//! Server application models.
//!
//! Application state shared by handlers, the authenticated user extractor and the request
//! extractors that reject with the error envelope.

pub mod app;
pub mod auth;
pub mod extract;
