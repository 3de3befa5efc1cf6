pub use super::app_user::Entity as AppUser;
pub use super::assembly::Entity as Assembly;
pub use super::block::Entity as Block;
pub use super::booth::Entity as Booth;
pub use super::booth_survey::Entity as BoothSurvey;
pub use super::booth_volunteer::Entity as BoothVolunteer;
pub use super::booth_vote::Entity as BoothVote;
pub use super::candidate::Entity as Candidate;
pub use super::district_polygon::Entity as DistrictPolygon;
pub use super::division::Entity as Division;
pub use super::government::Entity as Government;
pub use super::influencer::Entity as Influencer;
pub use super::parliament::Entity as Parliament;
pub use super::parliament_polygon::Entity as ParliamentPolygon;
pub use super::party::Entity as Party;
pub use super::potential_candidate::Entity as PotentialCandidate;
pub use super::state::Entity as State;
pub use super::status::Entity as Status;
