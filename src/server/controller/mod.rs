//! HTTP handlers of the constituency API.
//!
//! One module per resource. Handlers extract the request, check the caller's role for writes
//! and delegate to the matching service; each is annotated with `utoipa::path` for the
//! OpenAPI document.

pub mod assembly;
pub mod block;
pub mod booth;
pub mod booth_survey;
pub mod booth_volunteer;
pub mod booth_vote;
pub mod candidate;
pub mod division;
pub mod government;
pub mod hierarchy;
pub mod influencer;
pub mod parliament;
pub mod party;
pub mod polygon;
pub mod potential_candidate;
pub mod state;
pub mod status;
