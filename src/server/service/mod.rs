//! Business logic between the HTTP handlers and the repositories.
//!
//! Services validate payloads, check references through the [`ancestry`] validator, stamp
//! audit fields and populate referenced records for responses.

pub mod ancestry;
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
