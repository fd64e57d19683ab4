//! REST APIハンドラー
//!
//! 戦闘API（/api/fights）のルーティング

/// エラーレスポンス
pub mod error;
/// 戦闘エンドポイント
pub mod fights;

use crate::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/fights",
            get(fights::get_all_fights).post(fights::create_fight),
        )
        .route("/api/fights/randomfighters", get(fights::get_random_fighters))
        .route("/api/fights/ping", get(fights::ping))
        .route("/api/fights/:id", get(fights::get_fight))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 許可オリジン設定からCORSレイヤーを作成
///
/// `*` は全オリジン許可、それ以外はカンマ区切りのオリジン一覧。
/// 有効なオリジンが一つもない場合は `None`。
pub fn cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() {
        return None;
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]);

    if allowed_origins == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!(
            allowed_origins = %allowed_origins,
            "No valid CORS origins configured, CORS disabled"
        );
        return None;
    }

    Some(cors.allow_origin(origins))
}
