//! Super Heroes Fight API Server
//!
//! ヒーローとヴィランの戦闘を扱うREST APIサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// 戦闘サービス（ハンドラーが委譲する協調コンポーネント）
pub mod service;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 戦闘サービス
    pub fight_service: Arc<dyn service::FightService>,
    /// Locationヘッダー生成に使う公開ベースURL（未設定時はリクエストから導出）
    pub public_url: Option<String>,
}

impl AppState {
    /// サービスを注入してアプリケーション状態を作成
    pub fn new(fight_service: Arc<dyn service::FightService>) -> Self {
        Self {
            fight_service,
            public_url: None,
        }
    }

    /// 公開ベースURLを設定
    pub fn with_public_url(mut self, public_url: Option<String>) -> Self {
        self.public_url = public_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        self
    }
}
