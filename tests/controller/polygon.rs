//! Tests for the polygon store endpoints.

use axum::{extract::State, http::StatusCode};
use constituency::server::{
    controller::polygon::{
        create_district_polygons, create_parliament_polygons, find_district_polygons_containing,
        find_parliament_polygons_by_vs_code, get_district_polygon_collection,
    },
    model::extract::{JsonBody, PathParams},
};
use uuid::Uuid;

use super::*;

fn point(lng: &str, lat: &str) -> PathParams<(String, String)> {
    PathParams((lng.to_string(), lat.to_string()))
}

/// Expect 201 with the stored features, then the collection to be retrievable by its id
#[tokio::test]
async fn stores_and_reassembles_collection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;
    let body = geo_factory::feature_collection(vec![
        geo_factory::square_feature("Patna", "Patna", 181, 0.0, 10.0),
        geo_factory::square_feature("Gaya", "Gaya", 226, 20.0, 30.0),
    ]);

    let resp =
        respond(create_district_polygons(State(app_state(&test)), auth, JsonBody(body)).await);

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["type"], "FeatureCollection");
    assert_eq!(created["features"].as_array().unwrap().len(), 2);
    let collection_id: Uuid = created["collection_id"].as_str().unwrap().parse().unwrap();

    let resp = respond(
        get_district_polygon_collection(State(app_state(&test)), PathParams(collection_id)).await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched["features"][1]["properties"]["Name"], "Gaya");

    Ok(())
}

/// Expect 404 for a collection id nothing was stored under
#[tokio::test]
async fn unknown_collection_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = respond(
        get_district_polygon_collection(State(app_state(&test)), PathParams(Uuid::new_v4())).await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await["message"],
        "Polygon collection not found"
    );

    Ok(())
}

/// Expect 400 when a district ring is not closed
#[tokio::test]
async fn rejects_open_district_ring() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;
    let body =
        geo_factory::feature_collection(vec![geo_factory::open_ring_feature("Open", "Patna", 1)]);

    let resp =
        respond(create_district_polygons(State(app_state(&test)), auth, JsonBody(body)).await);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect only the polygon around the point, and 400 for an out of range latitude
#[tokio::test]
async fn finds_polygons_containing_point() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;
    let body = geo_factory::feature_collection(vec![
        geo_factory::square_feature("Patna", "Patna", 181, 0.0, 10.0),
        geo_factory::square_feature("Gaya", "Gaya", 226, 20.0, 30.0),
    ]);
    respond(create_district_polygons(State(app_state(&test)), auth, JsonBody(body)).await);

    let resp = respond(
        find_district_polygons_containing(State(app_state(&test)), point("25", "25")).await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let found = body_json(resp).await;
    assert_eq!(found["data"].as_array().unwrap().len(), 1);
    assert_eq!(found["data"][0]["name"], "Gaya");

    let resp = respond(
        find_district_polygons_containing(State(app_state(&test)), point("25", "95")).await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "lat must be between -90 and 90"
    );

    Ok(())
}

/// Expect parliament polygons to be found by VS code and 400 for a non-numeric code
#[tokio::test]
async fn finds_parliament_polygons_by_vs_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let auth = bearer_user(&test, test.first_user().id).await;
    let body = geo_factory::feature_collection(vec![
        geo_factory::square_feature("Patna Sahib", "Patna", 181, 0.0, 10.0),
        geo_factory::square_feature("Gaya", "Gaya", 226, 20.0, 30.0),
    ]);
    let resp =
        respond(create_parliament_polygons(State(app_state(&test)), auth, JsonBody(body)).await);
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = respond(
        find_parliament_polygons_by_vs_code(State(app_state(&test)), PathParams("181".to_string()))
            .await,
    );

    let found = body_json(resp).await;
    assert_eq!(found["data"].as_array().unwrap().len(), 1);
    assert_eq!(found["data"][0]["name"], "Patna Sahib");

    let resp = respond(
        find_parliament_polygons_by_vs_code(State(app_state(&test)), PathParams("abc".to_string()))
            .await,
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
