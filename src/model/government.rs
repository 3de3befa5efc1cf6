use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{nullable, AuditDto, BoothRefDto, RefDto};

/// Whether a government project is new or a continuation of an older one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GovernmentType {
    #[default]
    New,
    Old,
}

impl GovernmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            GovernmentType::New => "new",
            GovernmentType::Old => "old",
        }
    }
}

/// A government project placed in the hierarchy
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct GovernmentDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub project_complete_date: Option<NaiveDate>,
    pub amount: f64,
    pub state: Option<RefDto>,
    pub division: Option<RefDto>,
    pub parliament: Option<RefDto>,
    pub assembly: Option<RefDto>,
    pub block: Option<RefDto>,
    pub booth: Option<BoothRefDto>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of government project create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GovernmentPayload {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<GovernmentType>,
    pub project_complete_date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub state_id: Option<i32>,
    pub division_id: Option<i32>,
    pub parliament_id: Option<i32>,
    pub assembly_id: Option<i32>,
    pub block_id: Option<i32>,
    /// `null` on update detaches the project from its booth
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub booth_id: Option<Option<i32>>,
}

/// Query parameters of the government project list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GovernmentQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<GovernmentType>,
    pub state: Option<i32>,
    pub division: Option<i32>,
    pub parliament: Option<i32>,
    pub assembly: Option<i32>,
    pub block: Option<i32>,
    pub booth: Option<i32>,
}
