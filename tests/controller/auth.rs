//! Tests for bearer token authentication and the write role check.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use constituency::{
    model::hierarchy::StatePayload,
    server::{controller::state::create_state, model::extract::JsonBody},
};

use super::*;

fn payload(name: &str) -> JsonBody<StatePayload> {
    JsonBody(StatePayload {
        name: Some(name.to_string()),
    })
}

/// Expect 401 when the request has no bearer token
#[tokio::test]
async fn rejects_missing_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let err = extract_user(&test, None).await.unwrap_err();
    let resp = err.into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await["message"],
        "Not authorized to access this route"
    );

    Ok(())
}

/// Expect 401 for a header without the Bearer scheme
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let token = test.auth().token(test.first_user().id)?;

    let err = extract_user(&test, Some(&format!("Basic {}", token)))
        .await
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for an expired token
#[tokio::test]
async fn rejects_expired_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let token = test.auth().expired_token(test.first_user().id)?;

    let err = extract_user(&test, Some(&format!("Bearer {}", token)))
        .await
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for a token signed with another secret
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let token = test.auth().foreign_token(test.first_user().id)?;

    let err = extract_user(&test, Some(&format!("Bearer {}", token)))
        .await
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 when the token names a user that does not exist
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let bearer = test.auth().bearer(42)?;

    let err = extract_user(&test, Some(&bearer)).await.unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 for a deactivated user
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_inactive_user("former", "Admin").await?;
    let bearer = test.auth().bearer(user.id)?;

    let err = extract_user(&test, Some(&bearer)).await.unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the extractor to load the token's user
#[tokio::test]
async fn loads_user_from_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;

    let user = bearer_user(&test, test.first_user().id).await;

    assert_eq!(user.username, "admin");
    assert_eq!(user.role, "Admin");

    Ok(())
}

/// Expect 403 when a booth operator tries to write, and nothing to be stored
#[tokio::test]
async fn forbids_writes_for_booth_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("operator", "Booth")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;

    let resp = respond(create_state(State(app_state(&test)), auth, payload("North")).await);

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(resp).await["message"],
        "User role Booth is not authorized to access this route"
    );

    Ok(())
}

/// Expect super admins to pass every role check
#[tokio::test]
async fn allows_writes_for_super_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("root", "SuperAdmin")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;

    let resp = respond(create_state(State(app_state(&test)), auth, payload("North")).await);

    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}
