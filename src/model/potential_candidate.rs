use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{AuditDto, RefDto};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PotentialStatus {
    Active,
    Inactive,
    #[default]
    UnderReview,
}

impl PotentialStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PotentialStatus::Active => "active",
            PotentialStatus::Inactive => "inactive",
            PotentialStatus::UnderReview => "under_review",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PotentialCandidateDto {
    pub id: i32,
    pub name: String,
    pub party: Option<RefDto>,
    /// Constituency the candidate may contest
    pub assembly: Option<RefDto>,
    pub election_year: i32,
    pub history: Option<String>,
    pub post_name: Option<String>,
    pub post_from: Option<NaiveDate>,
    pub post_to: Option<NaiveDate>,
    pub post_place: Option<String>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub image: Option<String>,
    pub status: String,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of potential candidate create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PotentialCandidatePayload {
    pub name: Option<String>,
    pub party_id: Option<i32>,
    pub assembly_id: Option<i32>,
    pub election_year: Option<i32>,
    pub history: Option<String>,
    pub post_name: Option<String>,
    pub post_from: Option<NaiveDate>,
    pub post_to: Option<NaiveDate>,
    pub post_place: Option<String>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub image: Option<String>,
    pub status: Option<PotentialStatus>,
}

/// Query parameters of the potential candidate list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PotentialCandidateQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name and post name
    pub search: Option<String>,
    pub party: Option<i32>,
    pub assembly: Option<i32>,
    pub election_year: Option<i32>,
    pub status: Option<PotentialStatus>,
}
