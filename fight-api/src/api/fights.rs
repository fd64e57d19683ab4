//! 戦闘APIハンドラー
//!
//! 各ハンドラーはHTTPリクエストを `FightService` 呼び出しに変換するだけで、
//! 独自の状態を持たない。

use super::error::AppError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use superheroes_fight_common::error::FightError;
use superheroes_fight_common::types::Fighters;

/// GET /api/fights/randomfighters - ランダムな対戦者を取得
pub async fn get_random_fighters(State(state): State<AppState>) -> Result<Response, AppError> {
    let fighters = state.fight_service.get_random_fighters().await?;
    tracing::debug!(
        hero = %fighters.hero.name,
        villain = %fighters.villain.name,
        "Get random fighters"
    );
    Ok(Json(fighters).into_response())
}

/// GET /api/fights - 全戦闘を取得
///
/// 一件もない場合も空配列で200を返す。
pub async fn get_all_fights(State(state): State<AppState>) -> Result<Response, AppError> {
    let fights = state.fight_service.get_all_fights().await?;
    tracing::debug!(total = fights.len(), "Total number of fights");
    Ok(Json(fights).into_response())
}

/// GET /api/fights/:id - IDで戦闘を取得
///
/// 見つからない場合は204 No Contentを返す。
pub async fn get_fight(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.fight_service.find_fight_by_id(id).await? {
        Some(fight) => {
            tracing::debug!(fight_id = id, winner = %fight.winner_name, "Found fight");
            Ok(Json(fight).into_response())
        }
        None => {
            tracing::debug!(fight_id = id, "No fight found");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// POST /api/fights - 戦闘を作成
///
/// 成功時は201と新しいリソースを指す `Location` ヘッダーを返す。
/// ボディが不正な場合はサービスを呼ばずに400を返す。
pub async fn create_fight(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    payload: Result<Json<Fighters>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(fighters) =
        payload.map_err(|rejection| FightError::InvalidFighters(rejection.body_text()))?;

    let fight = state.fight_service.create_fight(fighters).await?;
    let id = fight
        .id
        .ok_or_else(|| FightError::Internal("created fight has no id".to_string()))?;

    let base = request_base(state.public_url.as_deref(), &headers, &uri);
    let location = resource_location(&base, uri.path(), id);
    let location = HeaderValue::from_str(&location)
        .map_err(|e| FightError::Internal(format!("invalid Location header: {e}")))?;

    tracing::debug!(fight_id = id, location = ?location, "New fight created");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

/// GET /api/fights/ping - 疎通確認
pub async fn ping() -> impl IntoResponse {
    tracing::debug!("Invoking ping");
    "ping fights"
}

/// 絶対URIのスキームとホスト部分を決定する
///
/// 公開URLが設定されていればそれを優先する。ホストは `Host` ヘッダー、
/// なければリクエストURIのauthority（HTTP/2）から取る。スキームは
/// `X-Forwarded-Proto`、リクエストURIのスキーム、`http` の順。
/// ホストがどこにもない場合は空文字（相対パス）。
fn request_base(public_url: Option<&str>, headers: &HeaderMap, uri: &Uri) -> String {
    if let Some(url) = public_url {
        return url.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .or_else(|| uri.authority().map(|a| a.as_str()));
    let Some(host) = host else {
        return String::new();
    };

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| uri.scheme_str())
        .unwrap_or("http");

    format!("{}://{}", scheme, host)
}

fn resource_location(base: &str, request_path: &str, id: i64) -> String {
    format!("{}{}/{}", base, request_path.trim_end_matches('/'), id)
}
