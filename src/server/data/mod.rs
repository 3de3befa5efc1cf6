//! Data access layer repositories.
//!
//! One repository per table, generic over `ConnectionTrait` so the same code runs against a
//! pooled connection or inside a transaction. Shared list machinery (pagination, search,
//! reference lookups) lives in [`query`] and [`populate`].

pub mod assembly;
pub mod block;
pub mod booth;
pub mod booth_survey;
pub mod booth_volunteer;
pub mod booth_vote;
pub mod candidate;
pub mod division;
pub mod government;
pub mod influencer;
pub mod parliament;
pub mod party;
pub mod polygon;
pub mod populate;
pub mod potential_candidate;
pub mod query;
pub mod state;
pub mod status;
pub mod user;
