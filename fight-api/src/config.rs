//! Configuration management via environment variables
//!
//! Every setting has a preferred `FIGHT_*` name and a generic fallback name
//! (`PORT`, `HOST`, ...) commonly injected by container platforms.

use crate::cli::ServeArgs;

/// Get an environment variable, falling back to a generic name
///
/// The preferred name wins when both are set. A value taken from the
/// fallback name is logged with a warning.
///
/// # Example
/// ```
/// use superheroes_fight_api::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("FIGHT_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(preferred: &str, fallback: &str) -> Option<String> {
    if let Ok(val) = std::env::var(preferred) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(fallback) {
        tracing::warn!(
            "Environment variable '{}' is used as a fallback, prefer '{}'",
            fallback,
            preferred
        );
        return Some(val);
    }
    None
}

/// Same as [`get_env_with_fallback`] with a default value
pub fn get_env_with_fallback_or(preferred: &str, fallback: &str, default: &str) -> String {
    get_env_with_fallback(preferred, fallback).unwrap_or_else(|| default.to_string())
}

/// Same as [`get_env_with_fallback`], parsed into `T`
///
/// Falls back to `default` when unset or unparsable.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    preferred: &str,
    fallback: &str,
    default: T,
) -> T {
    get_env_with_fallback(preferred, fallback)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Default listen port
pub const DEFAULT_PORT: u16 = 8082;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Public base URL used for `Location` headers
    pub public_url: Option<String>,
    /// JSON roster file for the in-memory fight service
    pub roster_path: Option<String>,
    /// Allowed CORS origins (`*` or comma separated list)
    pub cors_allowed_origins: Option<String>,
}

impl ServerConfig {
    /// Load server configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: get_env_with_fallback_or("FIGHT_HOST", "HOST", DEFAULT_HOST),
            port: get_env_with_fallback_parse("FIGHT_PORT", "PORT", DEFAULT_PORT),
            public_url: non_empty(get_env_with_fallback("FIGHT_PUBLIC_URL", "PUBLIC_URL")),
            roster_path: non_empty(get_env_with_fallback("FIGHT_ROSTER_PATH", "ROSTER_PATH")),
            cors_allowed_origins: non_empty(get_env_with_fallback(
                "FIGHT_CORS_ORIGINS",
                "CORS_ALLOWED_ORIGINS",
            )),
        }
    }

    /// Build server configuration from `serve` subcommand arguments.
    ///
    /// Arguments given on the command line override the environment; the
    /// rest is resolved exactly as [`ServerConfig::from_env`] does. An empty
    /// optional argument clears the environment value.
    pub fn from_args(args: ServeArgs) -> Self {
        let env = Self::from_env();
        Self {
            host: args.host.unwrap_or(env.host),
            port: args.port.unwrap_or(env.port),
            public_url: match args.public_url {
                Some(url) => non_empty(Some(url)),
                None => env.public_url,
            },
            roster_path: match args.roster {
                Some(path) => non_empty(Some(path)),
                None => env.roster_path,
            },
            cors_allowed_origins: match args.cors_origins {
                Some(origins) => non_empty(Some(origins)),
                None => env.cors_allowed_origins,
            },
        }
    }

    /// `host:port` bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
