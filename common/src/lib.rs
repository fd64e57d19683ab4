//! Super Heroes Fight Common Library
//!
//! Fight APIとその協調サービス間で共有される型定義

#![warn(missing_docs)]

/// 共通型定義（Fighter, Fighters, Fight）
pub mod types;

/// エラー型定義
pub mod error;

/// 設定構造体
pub mod config;
