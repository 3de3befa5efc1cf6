//! Helpers shared by the controller tests.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, Request},
    response::{IntoResponse, Response},
};
use constituency::server::{
    error::Error,
    model::{app::AppState, auth::AuthUser},
};
use constituency_test_utils::TestContext;
use http_body_util::BodyExt;
use serde_json::Value;

pub fn app_state(test: &TestContext) -> AppState {
    test.to_app_state()
}

/// Runs the `AuthUser` extractor on a request with the given `Authorization` header.
pub async fn extract_user(
    test: &TestContext,
    authorization: Option<&str>,
) -> Result<AuthUser, Error> {
    let mut request = Request::builder();
    if let Some(value) = authorization {
        request = request.header(AUTHORIZATION, value);
    }
    let (mut parts, _) = request.body(()).unwrap().into_parts();

    AuthUser::from_request_parts(&mut parts, &app_state(test)).await
}

/// Extracts the user `user_id` through a freshly signed bearer token.
pub async fn bearer_user(test: &TestContext, user_id: i32) -> AuthUser {
    let bearer = test.auth().bearer(user_id).unwrap();

    extract_user(test, Some(&bearer)).await.unwrap()
}

/// Converts a handler result into its HTTP response.
pub fn respond<T: IntoResponse>(result: Result<T, Error>) -> Response {
    result.into_response()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}
