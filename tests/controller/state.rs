//! Tests for the state endpoints and the shared response envelopes.

use axum::{extract::State, http::StatusCode};
use constituency::{
    model::hierarchy::{StatePayload, StateQuery},
    server::{
        controller::state::{create_state, delete_state, get_state, list_states, update_state},
        model::extract::{JsonBody, PathParams, QueryParams},
    },
};

use super::*;

fn payload(name: Option<&str>) -> JsonBody<StatePayload> {
    JsonBody(StatePayload {
        name: name.map(str::to_string),
    })
}

/// Expect 201 with the created state, its creator resolved to a username
#[tokio::test]
async fn create_returns_created_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;

    let resp = respond(create_state(State(app_state(&test)), auth, payload(Some(" Bihar "))).await);

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Bihar");
    assert_eq!(body["data"]["created_by"]["name"], "admin");

    Ok(())
}

/// Expect 400 with a per-field message when the name is missing
#[tokio::test]
async fn create_rejects_missing_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;

    let resp = respond(create_state(State(app_state(&test)), auth, payload(None)).await);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "name is required");
    assert_eq!(body["errors"]["name"], "name is required");

    Ok(())
}

/// Expect the page metadata to describe the whole filtered set
#[tokio::test]
async fn list_returns_page_meta() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_hierarchy_chain("A")
        .with_hierarchy_chain("B")
        .with_hierarchy_chain("C")
        .build()
        .await?;

    let query = StateQuery {
        page: Some(2),
        limit: Some(2),
        ..Default::default()
    };
    let resp = respond(list_states(State(app_state(&test)), QueryParams(query)).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["meta"]["page"], 2);
    assert_eq!(body["meta"]["limit"], 2);
    assert_eq!(body["meta"]["total"], 3);
    assert_eq!(body["meta"]["pages"], 2);
    assert_eq!(body["meta"]["count"], 1);
    assert_eq!(body["data"][0]["name"], "State C");

    Ok(())
}

/// Expect the search term to match case-insensitively
#[tokio::test]
async fn list_filters_by_search() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_hierarchy_chain("A")
        .with_hierarchy_chain("B")
        .build()
        .await?;

    let query = StateQuery {
        search: Some("state b".to_string()),
        ..Default::default()
    };
    let resp = respond(list_states(State(app_state(&test)), QueryParams(query)).await);
    let body = body_json(resp).await;

    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["name"], "State B");

    Ok(())
}

/// Expect 400 for page 0
#[tokio::test]
async fn list_rejects_page_zero() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let query = StateQuery {
        page: Some(0),
        ..Default::default()
    };
    let resp = respond(list_states(State(app_state(&test)), QueryParams(query)).await);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 with the entity label for an unknown id
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = respond(get_state(State(app_state(&test)), PathParams(7)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "State not found");

    Ok(())
}

/// Expect an update without a name to keep the stored one and record the editor
#[tokio::test]
async fn update_keeps_absent_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .with_user("editor", "Admin")
        .with_hierarchy_chain("A")
        .build()
        .await?;
    let auth = bearer_user(&test, test.users[1].id).await;
    let state_id = test.first_chain().state.id;

    let resp = respond(
        update_state(State(app_state(&test)), auth, PathParams(state_id), payload(None)).await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["name"], "State A");
    assert_eq!(body["data"]["updated_by"]["name"], "editor");

    Ok(())
}

/// Expect delete to answer with a null data envelope, then 404 on a second delete
#[tokio::test]
async fn delete_returns_null_data() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let state = test.hierarchy().insert_state("Lonely").await?;
    let auth = bearer_user(&test, test.first_user().id).await;

    let resp = respond(
        delete_state(State(app_state(&test)), auth.clone(), PathParams(state.id)).await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["data"].is_null());

    let resp = respond(delete_state(State(app_state(&test)), auth, PathParams(state.id)).await);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
