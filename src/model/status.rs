use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::AuditDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// System statuses can be neither deleted nor deactivated
    pub is_system: bool,
    pub color_code: String,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of status create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct StatusPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub is_system: Option<bool>,
    /// `#rgb` or `#rrggbb`
    pub color_code: Option<String>,
}

/// Query parameters of the status list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name and description
    pub search: Option<String>,
    /// Filters on `is_active`
    pub active: Option<bool>,
    /// Filters on `is_system`
    pub system: Option<bool>,
}
