use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request data rejected before reaching the database.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or blank, holds the field name.
    #[error("{0} is required")]
    Required(&'static str),
    /// A field is present but invalid.
    #[error("{message}")]
    Field {
        field: &'static str,
        message: String,
    },
    /// A referenced record outside the hierarchy does not exist, holds the entity label.
    #[error("{0} not found")]
    UnknownReference(&'static str),
    /// Malformed input that is not tied to one field, e.g. a GeoJSON parse failure.
    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Field {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let body = match &self {
            Self::Required(field) => ErrorDto::with_errors(
                self.to_string(),
                BTreeMap::from([(field.to_string(), self.to_string())]),
            ),
            Self::Field { field, message } => ErrorDto::with_errors(
                message.clone(),
                BTreeMap::from([(field.to_string(), message.clone())]),
            ),
            Self::UnknownReference(_) | Self::Invalid(_) => ErrorDto::new(self.to_string()),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
