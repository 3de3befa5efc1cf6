use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Deserializes a field whose explicit `null` differs from leaving it out.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`: an absent field is `None`, a
/// `null` is `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Always `false`
    pub success: bool,
    /// The error message
    pub message: String,
    /// Field level messages keyed by field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn with_errors(message: impl Into<String>, errors: BTreeMap<String, String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}

/// Envelope of every single-record response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response of a successful delete, `data` is always `null`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self {
            success: true,
            data: None,
        }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Pagination details of a list response
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    /// Requested page, starting at 1
    pub page: u64,
    /// Requested page size
    pub limit: u64,
    /// Number of pages, `ceil(total / limit)`
    pub pages: u64,
    /// Number of records matching the filter
    pub total: u64,
    /// Number of records in this page
    pub count: u64,
}

/// Envelope of every list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// A referenced record resolved to its display name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RefDto {
    pub id: i32,
    pub name: String,
}

/// A referenced booth, which is displayed with its number
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BoothRefDto {
    pub id: i32,
    pub name: String,
    pub booth_number: String,
}

/// Creator and last editor of a record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuditDto {
    pub created_by: Option<RefDto>,
    pub updated_by: Option<RefDto>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
