use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::AuditDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PartyDto {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub symbol: Option<String>,
    pub founded_year: Option<i32>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of party create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PartyPayload {
    pub name: Option<String>,
    /// Stored upper-case
    pub abbreviation: Option<String>,
    pub symbol: Option<String>,
    pub founded_year: Option<i32>,
}

/// Query parameters of the party list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PartyQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name and abbreviation
    pub search: Option<String>,
}
