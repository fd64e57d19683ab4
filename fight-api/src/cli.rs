//! CLI module for the fight API
//!
//! Without a subcommand the server starts with settings read from the
//! environment.

use clap::{Args, Parser, Subcommand};

/// Super Heroes Fight API - REST endpoints for hero vs villain fights
#[derive(Parser, Debug)]
#[command(name = "fight-api")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    FIGHT_HOST          Bind address (default: 0.0.0.0, fallback: HOST)
    FIGHT_PORT          Listen port (default: 8082, fallback: PORT)
    FIGHT_PUBLIC_URL    Public base URL for Location headers
    FIGHT_ROSTER_PATH   JSON roster of heroes and villains
    FIGHT_CORS_ORIGINS  Allowed CORS origins ("*" or comma separated)
    FIGHT_LOG_LEVEL     Log level when RUST_LOG is unset (default: info)
    FIGHT_LOG_DIR       Directory for daily rolling log files
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the fight API server
    Serve(ServeArgs),
}

/// serve サブコマンドの引数
///
/// 未指定の項目は環境変数（フォールバック名を含む）から解決される。
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port [env: FIGHT_PORT, PORT] [default: 8082]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address [env: FIGHT_HOST, HOST] [default: 0.0.0.0]
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Public base URL used for Location headers [env: FIGHT_PUBLIC_URL]
    #[arg(long)]
    pub public_url: Option<String>,

    /// JSON roster file of heroes and villains [env: FIGHT_ROSTER_PATH]
    #[arg(long)]
    pub roster: Option<String>,

    /// Allowed CORS origins [env: FIGHT_CORS_ORIGINS]
    #[arg(long)]
    pub cors_origins: Option<String>,
}
