use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{hierarchy::Level, model::api::ErrorDto};

/// Hierarchy references of a write that do not resolve to one consistent chain.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AncestryError {
    #[error("{0} not found")]
    ReferenceNotFound(Level),
    #[error("{child} does not belong to the selected {parent}")]
    InconsistentAncestry { child: Level, parent: Level },
}

impl IntoResponse for AncestryError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected hierarchy references: {}", self);

        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
