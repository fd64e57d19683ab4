//! ロギング初期化
//!
//! 標準出力へのfmtレイヤーに加え、`FIGHT_LOG_DIR` 指定時は日次ローテーションの
//! ファイル出力を追加する。

use crate::config::{get_env_with_fallback, get_env_with_fallback_or};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "fight-api.log";

/// ログレベル（`RUST_LOG` 未設定時に使用）
pub fn log_level() -> String {
    get_env_with_fallback_or("FIGHT_LOG_LEVEL", "LOG_LEVEL", "info")
}

/// ログファイル出力ディレクトリ（未設定時は `None`）
pub fn log_dir() -> Option<PathBuf> {
    get_env_with_fallback("FIGHT_LOG_DIR", "LOG_DIR")
        .map(|dir| dir.trim().to_string())
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// グローバルsubscriberを初期化
///
/// ファイル出力が有効な場合は `WorkerGuard` を返す。プロセス終了まで保持すること。
pub fn init() -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match log_dir() {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
