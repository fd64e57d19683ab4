//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use superheroes_fight_common::error::FightError;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub FightError);

impl From<FightError> for AppError {
    fn from(err: FightError) -> Self {
        AppError(err)
    }
}

impl AppError {
    /// エラーに対応するHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            FightError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FightError::InvalidFighters(_) => StatusCode::BAD_REQUEST,
            FightError::NoFightersAvailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            FightError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FightError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        // 詳細はログのみに出力し、クライアントには汎用メッセージを返す
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Fight API request failed");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Fight API request rejected");
        }

        let payload = json!({
            "error": self.0.external_message()
        });

        (status, Json(payload)).into_response()
    }
}
