//! Database model type aliases for test utilities.

pub type UserModel = entity::app_user::Model;
pub type StateModel = entity::state::Model;
pub type DivisionModel = entity::division::Model;
pub type ParliamentModel = entity::parliament::Model;
pub type AssemblyModel = entity::assembly::Model;
pub type BlockModel = entity::block::Model;
pub type BoothModel = entity::booth::Model;
pub type PartyModel = entity::party::Model;
pub type CandidateModel = entity::candidate::Model;
pub type StatusModel = entity::status::Model;
