//! SeaORM entities for the constituency database.
//!
//! One module per table. Hierarchy levels reference their immediate parent, association
//! records reference any subset of the hierarchy, and polygon tables hold one GeoJSON
//! feature per row.

pub mod prelude;

pub mod app_user;
pub mod assembly;
pub mod block;
pub mod booth;
pub mod booth_survey;
pub mod booth_volunteer;
pub mod booth_vote;
pub mod candidate;
pub mod district_polygon;
pub mod division;
pub mod government;
pub mod influencer;
pub mod parliament;
pub mod parliament_polygon;
pub mod party;
pub mod potential_candidate;
pub mod state;
pub mod status;
