//! Contract Test: GET /api/fights/:id

use crate::support::{body_bytes, build_app, sample_fight, send, StubFightService};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// 存在する戦闘は200とJSONボディを返す
#[tokio::test]
async fn test_get_fight_found() {
    let fight = sample_fight(42);
    let service = Arc::new(StubFightService::with_fights(vec![fight.clone()]));
    let app = build_app(service.clone());

    let response = send(app, get("/api/fights/42")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["id"], 42);
    assert_eq!(body["winnerName"], "Wonder Woman");
    assert_eq!(body["loserName"], "Cheetah");
    assert_eq!(body, serde_json::to_value(&fight).unwrap());
    assert_eq!(service.call_count(), 1);
}

/// 存在しない戦闘は204と空ボディを返す
#[tokio::test]
async fn test_get_fight_absent_returns_no_content() {
    let service = Arc::new(StubFightService::with_fights(vec![sample_fight(1)]));
    let app = build_app(service);

    let response = send(app, get("/api/fights/999")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

/// 整数でないIDはサービスを呼ばずに400
#[tokio::test]
async fn test_get_fight_non_integer_id() {
    let service = Arc::new(StubFightService::default());
    let app = build_app(service.clone());

    let response = send(app, get("/api/fights/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(service.call_count(), 0);
}

/// 負のIDもそのままサービスに渡される
#[tokio::test]
async fn test_get_fight_negative_id() {
    let service = Arc::new(StubFightService::default());
    let app = build_app(service.clone());

    let response = send(app, get("/api/fights/-5")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(service.call_count(), 1);
}
