//! 設定管理
//!
//! 対戦者ロスター等の設定構造体

use crate::error::CommonError;
use crate::types::Fighter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 対戦者ロスター設定
///
/// ランダム選出の候補となるヒーローとヴィランの一覧。
/// JSONファイルから読み込むか、組み込みのデフォルトを使用する。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// ヒーロー候補
    #[serde(default)]
    pub heroes: Vec<Fighter>,

    /// ヴィラン候補
    #[serde(default)]
    pub villains: Vec<Fighter>,
}

impl RosterConfig {
    /// JSONファイルからロスターを読み込む
    ///
    /// どちらかの候補が空の場合は `CommonError::Validation` を返す。
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CommonError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let roster: Self = serde_json::from_str(&raw)?;
        roster.validate()?;
        Ok(roster)
    }

    /// ロスターの妥当性を検証
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.heroes.is_empty() {
            return Err(CommonError::Validation(
                "roster must contain at least one hero".to_string(),
            ));
        }
        if self.villains.is_empty() {
            return Err(CommonError::Validation(
                "roster must contain at least one villain".to_string(),
            ));
        }
        if let Some(unnamed) = self
            .heroes
            .iter()
            .chain(self.villains.iter())
            .find(|f| f.name.trim().is_empty())
        {
            return Err(CommonError::Validation(format!(
                "fighter with level {} has an empty name",
                unnamed.level
            )));
        }
        Ok(())
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            heroes: vec![
                Fighter::new("Luke Skywalker", 30, "luke.png")
                    .with_powers("Force, lightsaber combat"),
                Fighter::new("Yoda", 50, "yoda.png").with_powers("Force, wisdom"),
                Fighter::new("Chewbacca", 18, "chewbacca.png").with_powers("Strength"),
            ],
            villains: vec![
                Fighter::new("Darth Vader", 45, "vader.png")
                    .with_powers("Force choke, lightsaber combat"),
                Fighter::new("Palpatine", 48, "palpatine.png").with_powers("Force lightning"),
                Fighter::new("Boba Fett", 16, "boba.png").with_powers("Jetpack"),
            ],
        }
    }
}
