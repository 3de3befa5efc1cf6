use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{AuditDto, BoothRefDto, RefDto};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct InfluencerDto {
    pub id: i32,
    pub name: String,
    pub contact_number: String,
    pub alternate_number: Option<String>,
    pub email: Option<String>,
    pub full_address: String,
    pub state: Option<RefDto>,
    pub division: Option<RefDto>,
    pub parliament: Option<RefDto>,
    pub assembly: Option<RefDto>,
    pub block: Option<RefDto>,
    pub booth: Option<BoothRefDto>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of influencer create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct InfluencerPayload {
    pub name: Option<String>,
    pub contact_number: Option<String>,
    pub alternate_number: Option<String>,
    /// Stored lower-case
    pub email: Option<String>,
    pub full_address: Option<String>,
    pub state_id: Option<i32>,
    pub division_id: Option<i32>,
    pub parliament_id: Option<i32>,
    pub assembly_id: Option<i32>,
    pub block_id: Option<i32>,
    pub booth_id: Option<i32>,
}

/// Query parameters of the influencer list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InfluencerQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name, contact number and email
    pub search: Option<String>,
    pub state: Option<i32>,
    pub division: Option<i32>,
    pub parliament: Option<i32>,
    pub assembly: Option<i32>,
    pub block: Option<i32>,
    pub booth: Option<i32>,
}
