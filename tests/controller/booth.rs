//! Tests for the booth endpoints.

use axum::{extract::State, http::StatusCode};
use constituency::{
    model::hierarchy::{BoothPayload, BoothQuery},
    server::{
        controller::booth::{create_booth, list_booths_by_block},
        model::extract::{JsonBody, PathParams, QueryParams},
    },
};

use super::*;

/// Expect the created booth to carry its block reference
#[tokio::test]
async fn create_populates_block() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .with_hierarchy_chain("A")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;
    let block_id = test.first_chain().block.id;

    let payload = BoothPayload {
        name: Some("School".to_string()),
        booth_number: Some("17".to_string()),
        block_id: Some(block_id),
        latitude: Some(25.6),
        longitude: Some(85.1),
        ..Default::default()
    };
    let resp = respond(create_booth(State(app_state(&test)), auth, JsonBody(payload)).await);

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["booth_number"], "17");
    assert_eq!(body["data"]["block"]["id"], block_id);
    assert_eq!(body["data"]["block"]["name"], "Block A");

    Ok(())
}

/// Expect 400 naming the missing block
#[tokio::test]
async fn create_rejects_unknown_block() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;

    let payload = BoothPayload {
        name: Some("School".to_string()),
        booth_number: Some("17".to_string()),
        block_id: Some(404),
        ..Default::default()
    };
    let resp = respond(create_booth(State(app_state(&test)), auth, JsonBody(payload)).await);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "Block not found");

    Ok(())
}

/// Expect only the booths of the requested block
#[tokio::test]
async fn lists_booths_of_block() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_hierarchy_chain("A")
        .with_hierarchy_chain("B")
        .build()
        .await?;
    let block_id = test.chains[1].block.id;

    let resp = respond(
        list_booths_by_block(
            State(app_state(&test)),
            PathParams(block_id),
            QueryParams(BoothQuery::default()),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["booth_number"], "B-B");

    Ok(())
}
