//! Wire types shared by the HTTP handlers and API clients.

pub mod api;
pub mod booth_survey;
pub mod booth_volunteer;
pub mod booth_vote;
pub mod candidate;
pub mod government;
pub mod hierarchy;
pub mod influencer;
pub mod party;
pub mod polygon;
pub mod potential_candidate;
pub mod status;
