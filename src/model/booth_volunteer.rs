use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{AuditDto, BoothRefDto, RefDto};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ActivityLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl ActivityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::High => "High",
            ActivityLevel::Medium => "Medium",
            ActivityLevel::Low => "Low",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BoothVolunteerDto {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub area_responsibility: Option<String>,
    pub activity_level: String,
    pub remarks: Option<String>,
    pub booth: Option<BoothRefDto>,
    pub party: Option<RefDto>,
    pub block: Option<RefDto>,
    pub assembly: Option<RefDto>,
    pub parliament: Option<RefDto>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of booth volunteer create and update requests
///
/// Omitted block, assembly and parliament ids are filled from the booth on create.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BoothVolunteerPayload {
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub area_responsibility: Option<String>,
    pub activity_level: Option<ActivityLevel>,
    pub remarks: Option<String>,
    pub booth_id: Option<i32>,
    pub party_id: Option<i32>,
    pub block_id: Option<i32>,
    pub assembly_id: Option<i32>,
    pub parliament_id: Option<i32>,
}

/// Query parameters of the booth volunteer list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoothVolunteerQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name, phone and email
    pub search: Option<String>,
    pub booth: Option<i32>,
    pub party: Option<i32>,
    pub block: Option<i32>,
    pub assembly: Option<i32>,
    pub parliament: Option<i32>,
    pub activity_level: Option<ActivityLevel>,
}
