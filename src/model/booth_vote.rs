use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{AuditDto, BoothRefDto, RefDto};

/// Votes a candidate received at one booth
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BoothVoteDto {
    pub id: i32,
    pub candidate: Option<RefDto>,
    pub booth: Option<BoothRefDto>,
    pub total_votes: i32,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of booth vote create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BoothVotePayload {
    pub candidate_id: Option<i32>,
    pub booth_id: Option<i32>,
    pub total_votes: Option<i32>,
}

/// Query parameters of the booth vote list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoothVoteQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    pub booth: Option<i32>,
    pub candidate: Option<i32>,
}
