//! Requests sent through the full router, covering path registration and the auth extractor.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use constituency::server::router::routes;
use tower::ServiceExt;

use super::*;

fn request(method: Method, uri: &str, bearer: Option<&str>, body: &str) -> Request<Body> {
    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(bearer) = bearer {
        request = request.header(header::AUTHORIZATION, bearer);
    }

    request.body(Body::from(body.to_string())).unwrap()
}

/// Expect reads to be public
#[tokio::test]
async fn serves_public_reads() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_hierarchy_chain("A")
        .build()
        .await?;
    let app = routes().with_state(app_state(&test));

    let resp = app
        .oneshot(request(Method::GET, "/api/booths?search=b-a", None, ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["meta"]["total"], 1);

    Ok(())
}

/// Expect 401 for a write without a token
#[tokio::test]
async fn rejects_anonymous_write() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = routes().with_state(app_state(&test));

    let resp = app
        .oneshot(request(Method::POST, "/api/parties", None, r#"{"name":"Lok Dal"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect an admin write to be stored with 201
#[tokio::test]
async fn accepts_admin_write() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let bearer = test.auth().bearer(test.first_user().id)?;
    let app = routes().with_state(app_state(&test));

    let resp = app
        .oneshot(request(
            Method::POST,
            "/api/parties",
            Some(&bearer),
            r#"{"name":"Lok Dal","abbreviation":"ld"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["abbreviation"], "LD");

    Ok(())
}

/// Expect the status toggle route to be registered under PATCH
#[tokio::test]
async fn routes_status_toggle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let status = test.record().insert_status("Follow up", false).await?;
    let bearer = test.auth().bearer(test.first_user().id)?;
    let app = routes().with_state(app_state(&test));

    let resp = app
        .oneshot(request(
            Method::PATCH,
            &format!("/api/statuses/{}/toggle-active", status.id),
            Some(&bearer),
            "",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(app_state(&test));

    let resp = app
        .oneshot(request(Method::GET, "/api/docs/openapi.json", None, ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], "Constituency");
    assert!(body["paths"]["/api/hierarchy/resolve"].is_object());

    Ok(())
}

/// Expect the containment route to take the point as path segments
#[tokio::test]
async fn routes_point_containment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let bearer = test.auth().bearer(test.first_user().id)?;
    let body = geo_factory::feature_collection(vec![geo_factory::square_feature(
        "Patna", "Patna", 181, 0.0, 10.0,
    )]);
    let app = routes().with_state(app_state(&test));

    let resp = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/district-polygons",
            Some(&bearer),
            &body.to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let inside = app
        .clone()
        .oneshot(request(Method::GET, "/api/district-polygons/contains/5/5", None, ""))
        .await
        .unwrap();
    let outside = app
        .oneshot(request(Method::GET, "/api/district-polygons/contains/50/50", None, ""))
        .await
        .unwrap();

    assert_eq!(inside.status(), StatusCode::OK);
    let inside = body_json(inside).await;
    assert_eq!(inside["data"].as_array().unwrap().len(), 1);
    assert_eq!(inside["data"][0]["name"], "Patna");
    assert_eq!(outside.status(), StatusCode::OK);
    assert!(body_json(outside).await["data"].as_array().unwrap().is_empty());

    Ok(())
}

/// Expect malformed query strings, path segments and bodies to get the JSON error envelope
#[tokio::test]
async fn malformed_requests_use_error_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("admin", "Admin")
        .build()
        .await?;
    let bearer = test.auth().bearer(test.first_user().id)?;
    let app = routes().with_state(app_state(&test));

    let bad_page = app
        .clone()
        .oneshot(request(Method::GET, "/api/states?page=abc", None, ""))
        .await
        .unwrap();
    let bad_id = app
        .clone()
        .oneshot(request(Method::GET, "/api/states/abc", None, ""))
        .await
        .unwrap();
    let bad_body = app
        .oneshot(request(
            Method::POST,
            "/api/states",
            Some(&bearer),
            r#"{"name":5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(bad_page.status(), StatusCode::BAD_REQUEST);
    let bad_page = body_json(bad_page).await;
    assert_eq!(bad_page["success"], false);
    assert!(bad_page["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to deserialize query string"));

    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);
    let bad_id = body_json(bad_id).await;
    assert_eq!(bad_id["success"], false);
    assert!(bad_id["message"].as_str().unwrap().contains("abc"));

    assert_eq!(bad_body.status(), StatusCode::BAD_REQUEST);
    let bad_body = body_json(bad_body).await;
    assert_eq!(bad_body["success"], false);
    assert!(bad_body["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to deserialize the JSON body"));

    Ok(())
}
