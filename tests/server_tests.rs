//! Integration tests for the greeting service.
//!
//! These drive the router directly with `tower::ServiceExt::oneshot`, so no
//! socket is bound and tests can run in parallel.

use axum::body::Body;
use axum::response::Response;
use chrono::{DateTime, Utc};
use http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

use hello_docker::routes::create_router;

/// Issues a single request against a fresh router.
async fn send(method: Method, uri: &str) -> Response {
    create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_root_returns_greeting_payload() {
    let response = send(Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let json = body_json(response).await;
    let object = json.as_object().expect("body should be a JSON object");
    assert_eq!(object.len(), 3);
    assert_eq!(object["message"], "Hello from Docker 101!");
    assert_eq!(object["container"], true);
    assert!(object["time_utc"].is_string());
}

#[tokio::test]
async fn every_get_path_receives_the_same_shape() {
    for uri in ["/health", "/some/nested/path", "/?query=1", "/a/b/c?x=y"] {
        let response = send(Method::GET, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");

        let json = body_json(response).await;
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3, "GET {uri}");
        assert_eq!(object["message"], "Hello from Docker 101!", "GET {uri}");
        assert_eq!(object["container"], true, "GET {uri}");
    }
}

#[tokio::test]
async fn content_length_matches_body_bytes() {
    let response = send(Method::GET, "/").await;

    let declared: usize = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .expect("Content-Length header should be set")
        .to_str()
        .unwrap()
        .parse()
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(declared, bytes.len());
}

#[tokio::test]
async fn timestamp_is_recent_utc_with_z_suffix() {
    let response = send(Method::GET, "/").await;
    let json = body_json(response).await;
    let time_utc = json["time_utc"].as_str().unwrap();

    assert!(time_utc.ends_with('Z'), "got {time_utc}");
    let parsed: DateTime<Utc> = time_utc.parse().expect("time_utc should parse as UTC");
    let age = (Utc::now() - parsed).num_seconds().abs();
    assert!(age < 5, "timestamp drifted {age}s from wall clock");
}

#[tokio::test]
async fn sequential_requests_have_non_decreasing_timestamps() {
    let first = body_json(send(Method::GET, "/").await).await;
    let second = body_json(send(Method::GET, "/").await).await;

    let t1: DateTime<Utc> = first["time_utc"].as_str().unwrap().parse().unwrap();
    let t2: DateTime<Utc> = second["time_utc"].as_str().unwrap().parse().unwrap();
    assert!(t2 >= t1);
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = send(method.clone(), "/").await;
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} /"
        );
    }
}
