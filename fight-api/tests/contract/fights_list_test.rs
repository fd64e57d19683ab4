//! Contract Test: GET /api/fights

use crate::support::{
    body_bytes, build_app, sample_fight, send, FailingFightService, StubFightService,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use superheroes_fight_common::error::FightError;

fn list_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/fights")
        .body(Body::empty())
        .unwrap()
}

/// 戦闘がない場合も204ではなく200と空配列
#[tokio::test]
async fn test_list_fights_empty_returns_ok() {
    let app = build_app(Arc::new(StubFightService::default()));

    let response = send(app, list_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_list_fights_returns_all() {
    let service = StubFightService::with_fights(vec![sample_fight(1), sample_fight(2)]);
    let app = build_app(Arc::new(service));

    let response = send(app, list_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let fights = body.as_array().unwrap();
    assert_eq!(fights.len(), 2);
    assert_eq!(fights[0]["id"], 1);
    assert_eq!(fights[1]["id"], 2);
    assert_eq!(fights[0]["fightDate"], "2024-05-04T12:00:00Z");
}

/// サービスのエラーは汎用メッセージの500になる
#[tokio::test]
async fn test_list_fights_service_error() {
    let service = FailingFightService(|| FightError::Storage("db locked".to_string()));
    let app = build_app(Arc::new(service));

    let response = send(app, list_request()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "Storage error");
}
