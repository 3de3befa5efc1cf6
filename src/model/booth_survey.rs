use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::{AuditDto, BoothRefDto, RefDto};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SurveyStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Verified,
    Rejected,
}

impl SurveyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SurveyStatus::Pending => "Pending",
            SurveyStatus::InProgress => "In Progress",
            SurveyStatus::Completed => "Completed",
            SurveyStatus::Verified => "Verified",
            SurveyStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BoothSurveyDto {
    pub id: i32,
    pub booth: Option<BoothRefDto>,
    /// The surveying user, named by username
    pub survey_done_by: Option<RefDto>,
    pub survey_date: NaiveDateTime,
    pub status: String,
    pub remark: Option<String>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of booth survey create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BoothSurveyPayload {
    pub booth_id: Option<i32>,
    pub survey_done_by: Option<i32>,
    /// Defaults to the time of creation
    pub survey_date: Option<NaiveDateTime>,
    pub status: Option<SurveyStatus>,
    pub remark: Option<String>,
}

/// Query parameters of the booth survey list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoothSurveyQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the remark
    pub search: Option<String>,
    pub booth: Option<i32>,
    pub status: Option<SurveyStatus>,
    /// Id of the surveying user
    pub surveyor: Option<i32>,
}
