use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request has no bearer token")]
    MissingToken,
    #[error("Bearer token failed validation: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("User ID {0} from a valid token was not found in database")]
    UserNotFound(i32),
    #[error("User ID {0} is deactivated")]
    UserInactive(i32),
    #[error("User role {0} is not authorized to access this route")]
    Forbidden(String),
}

impl AuthError {
    fn not_authorized() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto::new("Not authorized to access this route")),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => Self::not_authorized(),
            Self::InvalidToken(ref err) => {
                tracing::debug!(error = %err, "Rejected bearer token");

                Self::not_authorized()
            }
            Self::UserNotFound(user_id) | Self::UserInactive(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::not_authorized()
            }
            Self::Forbidden(_) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto::new(self.to_string()))).into_response()
            }
        }
    }
}
