//! Tests for the status endpoints.

use axum::{extract::State, http::StatusCode};
use constituency::server::{
    controller::status::{delete_status, toggle_status_active},
    model::extract::PathParams,
};

use super::*;

/// Expect toggling an ordinary status to flip it off and back on
#[tokio::test]
async fn toggles_ordinary_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let status = test.record().insert_status("Follow up", false).await?;
    let auth = bearer_user(&test, test.first_user().id).await;

    let resp = respond(
        toggle_status_active(State(app_state(&test)), auth.clone(), PathParams(status.id)).await,
    );
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["is_active"], false);

    let resp =
        respond(toggle_status_active(State(app_state(&test)), auth, PathParams(status.id)).await);
    assert_eq!(body_json(resp).await["data"]["is_active"], true);

    Ok(())
}

/// Expect 400 when toggling or deleting a system status
#[tokio::test]
async fn protects_system_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let status = test.record().insert_status("Pending", true).await?;
    let auth = bearer_user(&test, test.first_user().id).await;

    let resp = respond(
        toggle_status_active(State(app_state(&test)), auth.clone(), PathParams(status.id)).await,
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "System statuses cannot be deactivated"
    );

    let resp = respond(delete_status(State(app_state(&test)), auth, PathParams(status.id)).await);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "System statuses cannot be deleted"
    );

    Ok(())
}
