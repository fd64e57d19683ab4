//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (e.g. roster file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Fight service error type
#[derive(Debug, Error)]
pub enum FightError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Request payload could not be accepted
    #[error("Invalid fighters: {0}")]
    InvalidFighters(String),

    /// No hero or villain available to pick from
    #[error("No fighters available: {0}")]
    NoFightersAvailable(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FightError {
    /// Returns a safe error message for external clients.
    ///
    /// The `Display` implementation carries full details and should only
    /// end up in server logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(_) => "Service configuration error",
            Self::InvalidFighters(_) => "Invalid fighters",
            Self::NoFightersAvailable(_) => "No fighters available",
            Self::Storage(_) => "Storage error",
            Self::Internal(_) => "Internal server error",
        }
    }
}

/// Fight service result type
pub type FightResult<T> = Result<T, FightError>;
