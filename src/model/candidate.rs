use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{AuditDto, RefDto};

/// Reservation category of a candidate
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Caste {
    #[default]
    General,
    OBC,
    SC,
    ST,
    Other,
}

impl Caste {
    pub fn as_str(self) -> &'static str {
        match self {
            Caste::General => "General",
            Caste::OBC => "OBC",
            Caste::SC => "SC",
            Caste::ST => "ST",
            Caste::Other => "Other",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CandidateDto {
    pub id: i32,
    pub name: String,
    pub party: Option<RefDto>,
    pub assembly: Option<RefDto>,
    pub election_year: i32,
    pub caste: String,
    pub votes: i32,
    pub criminal_cases: i32,
    pub assets: Option<String>,
    pub liabilities: Option<String>,
    pub education: Option<String>,
    pub photo: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of candidate create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CandidatePayload {
    pub name: Option<String>,
    pub party_id: Option<i32>,
    pub assembly_id: Option<i32>,
    pub election_year: Option<i32>,
    pub caste: Option<Caste>,
    pub votes: Option<i32>,
    pub criminal_cases: Option<i32>,
    pub assets: Option<String>,
    pub liabilities: Option<String>,
    pub education: Option<String>,
    /// http, https or ftp URL; empty clears the photo
    pub photo: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters of the candidate list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CandidateQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name
    pub search: Option<String>,
    pub party: Option<i32>,
    pub assembly: Option<i32>,
    pub election_year: Option<i32>,
    pub caste: Option<Caste>,
    /// Filters on `is_active`
    pub active: Option<bool>,
}
