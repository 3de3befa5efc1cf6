//! Tests for the hierarchy filter endpoints.

use axum::{extract::State, http::StatusCode};
use constituency::{
    model::hierarchy::ResolveQuery,
    server::{
        controller::hierarchy::{get_hierarchy, resolve_hierarchy},
        model::extract::QueryParams,
    },
};

use super::*;

/// Expect all six levels root first, every option carrying its parent id
#[tokio::test]
async fn lists_every_level() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_hierarchy_tables()
        .with_hierarchy_chain("A")
        .build()
        .await?;
    let chain = test.first_chain();

    let resp = respond(get_hierarchy(State(app_state(&test))).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let levels = body["data"]["levels"].as_array().unwrap();
    assert_eq!(levels.len(), 6);
    assert_eq!(levels[0]["level"], "state");
    assert_eq!(levels[5]["level"], "booth");
    assert_eq!(levels[1]["options"][0]["parent_id"], chain.state.id);

    Ok(())
}

/// Expect a division outside the selected state to be cleared and reported
#[tokio::test]
async fn clears_selection_outside_parent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_hierarchy_tables()
        .with_hierarchy_chain("A")
        .with_hierarchy_chain("B")
        .build()
        .await?;

    let query = ResolveQuery {
        state: Some(test.chains[0].state.id),
        division: Some(test.chains[1].division.id),
        ..Default::default()
    };
    let resp = respond(resolve_hierarchy(State(app_state(&test)), QueryParams(query)).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["cleared"], serde_json::json!(["division"]));
    assert_eq!(data["levels"][0]["selected"], test.chains[0].state.id);
    assert!(data["levels"][1]["selected"].is_null());
    assert_eq!(data["levels"][1]["options"].as_array().unwrap().len(), 1);
    assert_eq!(data["levels"][2]["enabled"], false);

    Ok(())
}
