//! Contract Test: GET /api/fights/randomfighters

use crate::support::{
    body_bytes, build_app, sample_fighters, send, FailingFightService, StubFightService,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use superheroes_fight_common::error::FightError;
use superheroes_fight_common::types::Fighters;

fn random_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/fights/randomfighters")
        .body(Body::empty())
        .unwrap()
}

/// `randomfighters` は `:id` ではなく専用ルートで処理される
#[tokio::test]
async fn test_random_fighters_ok() {
    let service = Arc::new(StubFightService::default());
    let app = build_app(service.clone());

    let response = send(app, random_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fighters: Fighters = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(fighters, sample_fighters());
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn test_random_fighters_body_shape() {
    let app = build_app(Arc::new(StubFightService::default()));

    let response = send(app, random_request()).await;
    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["hero"]["name"], "Wonder Woman");
    assert_eq!(body["hero"]["powers"], "Lasso of truth");
    assert_eq!(body["villain"]["level"], 21);
}

#[tokio::test]
async fn test_random_fighters_unavailable() {
    let service =
        FailingFightService(|| FightError::NoFightersAvailable("hero service down".to_string()));
    let app = build_app(Arc::new(service));

    let response = send(app, random_request()).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
