//! Error types for the constituency server.
//!
//! Domain errors (authentication, configuration, validation, ancestry) live in submodules and
//! are aggregated into [`Error`]. Every error implements `IntoResponse`; anything without a
//! specific mapping is logged and reported to the client as a generic 500.

pub mod ancestry;
pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        ancestry::AncestryError, auth::AuthError, config::ConfigError,
        validation::ValidationError,
    },
};

/// Main error type for the constituency server.
///
/// Uses `thiserror`'s `#[from]` attribute so domain and library errors convert with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request body, query or path failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Hierarchy references are missing or do not form a chain.
    #[error(transparent)]
    AncestryError(#[from] AncestryError),
    /// Requested record does not exist, holds the entity label.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Write would violate a uniqueness rule, holds the client message.
    #[error("{0}")]
    Duplicate(String),
    /// Delete rejected because other records still reference the row.
    #[error("{0} is still referenced by other records")]
    StillReferenced(&'static str),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - validation, ancestry, duplicate and still-referenced errors
/// - 401 Unauthorized / 403 Forbidden - see [`AuthError`]
/// - 404 Not Found - missing records
/// - 500 Internal Server Error - everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::AncestryError(err) => err.into_response(),
            Self::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            Self::Duplicate(message) => {
                tracing::debug!(%message, "Rejected duplicate write");

                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(message))).into_response()
            }
            Self::StillReferenced(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::Invalid(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::Invalid(rejection.body_text()).into()
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::Invalid(rejection.body_text()).into()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// so implementation details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
