use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    hierarchy::LevelConfig,
    model::api::{AuditDto, RefDto},
};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StateDto {
    pub id: i32,
    pub name: String,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DivisionDto {
    pub id: i32,
    pub name: String,
    pub state: Option<RefDto>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ParliamentDto {
    pub id: i32,
    pub name: String,
    pub division: Option<RefDto>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AssemblyDto {
    pub id: i32,
    pub name: String,
    pub parliament: Option<RefDto>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BlockDto {
    pub id: i32,
    pub name: String,
    pub assembly: Option<RefDto>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BoothDto {
    pub id: i32,
    pub name: String,
    pub booth_number: String,
    pub full_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub block: Option<RefDto>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

/// Body of state create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct StatePayload {
    pub name: Option<String>,
}

/// Body of division create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DivisionPayload {
    pub name: Option<String>,
    pub state_id: Option<i32>,
}

/// Body of parliament create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ParliamentPayload {
    pub name: Option<String>,
    pub division_id: Option<i32>,
}

/// Body of assembly create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AssemblyPayload {
    pub name: Option<String>,
    pub parliament_id: Option<i32>,
}

/// Body of block create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BlockPayload {
    pub name: Option<String>,
    pub assembly_id: Option<i32>,
}

/// Body of booth create and update requests
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BoothPayload {
    pub name: Option<String>,
    pub booth_number: Option<String>,
    pub block_id: Option<i32>,
    pub full_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Full option lists of every level, root first
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HierarchyDto {
    pub levels: Vec<LevelConfig>,
}


/// Query parameters of the state list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StateQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name
    pub search: Option<String>,
}

/// Query parameters of the division list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DivisionQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name
    pub search: Option<String>,
    /// Parent state id
    pub state: Option<i32>,
}

/// Query parameters of the parliament list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParliamentQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name
    pub search: Option<String>,
    /// Parent division id
    pub division: Option<i32>,
}

/// Query parameters of the assembly list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssemblyQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name
    pub search: Option<String>,
    /// Parent parliament id
    pub parliament: Option<i32>,
}

/// Query parameters of the block list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlockQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name
    pub search: Option<String>,
    /// Parent assembly id
    pub assembly: Option<i32>,
}

/// Query parameters of the booth list
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BoothQuery {
    /// Page number, starting at 1
    pub page: Option<u64>,
    /// Page size, 10 by default and at most 100
    pub limit: Option<u64>,
    /// Case-insensitive substring matched against the name and booth number
    pub search: Option<String>,
    /// Parent block id
    pub block: Option<i32>,
    pub booth_number: Option<String>,
}

/// Selections to resolve, one optional id per level
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    pub state: Option<i32>,
    pub division: Option<i32>,
    pub parliament: Option<i32>,
    pub assembly: Option<i32>,
    pub block: Option<i32>,
    pub booth: Option<i32>,
}
