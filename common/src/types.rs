//! 共通型定義
//!
//! Fighter, Fighters, Fight等のコアデータ型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ヒーロー側チーム名
pub const HEROES_TEAM: &str = "heroes";

/// ヴィラン側チーム名
pub const VILLAINS_TEAM: &str = "villains";

/// 戦闘参加者（ヒーローまたはヴィラン）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fighter {
    /// 名前
    pub name: String,
    /// レベル
    pub level: i32,
    /// 画像URL
    pub picture: String,
    /// 能力一覧（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powers: Option<String>,
}

impl Fighter {
    /// 新しいFighterを作成
    pub fn new(name: impl Into<String>, level: i32, picture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            picture: picture.into(),
            powers: None,
        }
    }

    /// 能力を設定
    pub fn with_powers(mut self, powers: impl Into<String>) -> Self {
        self.powers = Some(powers.into());
        self
    }
}

/// 対戦するヒーローとヴィランの組
///
/// 戦闘作成リクエストのボディであり、ランダム選出APIのレスポンスでもある。
/// `hero` と `villain` はどちらも必須で、欠けたボディはデシリアライズ時点で拒否される。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fighters {
    /// ヒーロー
    pub hero: Fighter,
    /// ヴィラン
    pub villain: Fighter,
}

impl Fighters {
    /// 新しい対戦組を作成
    pub fn new(hero: Fighter, villain: Fighter) -> Self {
        Self { hero, villain }
    }
}

/// 戦闘記録
///
/// `id` は作成が成功した後にのみ `Some` になる。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    /// 一意識別子（作成前は未割り当て）
    #[serde(default)]
    pub id: Option<i64>,
    /// 戦闘日時
    pub fight_date: DateTime<Utc>,
    /// 勝者名
    pub winner_name: String,
    /// 勝者レベル
    pub winner_level: i32,
    /// 勝者画像URL
    pub winner_picture: String,
    /// 敗者名
    pub loser_name: String,
    /// 敗者レベル
    pub loser_level: i32,
    /// 敗者画像URL
    pub loser_picture: String,
    /// 勝者チーム
    pub winner_team: String,
    /// 敗者チーム
    pub loser_team: String,
}

impl Fight {
    /// 勝者と敗者から未保存の戦闘記録を作成
    pub fn between(
        winner: &Fighter,
        winner_team: &str,
        loser: &Fighter,
        loser_team: &str,
        fight_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            fight_date,
            winner_name: winner.name.clone(),
            winner_level: winner.level,
            winner_picture: winner.picture.clone(),
            loser_name: loser.name.clone(),
            loser_level: loser.level,
            loser_picture: loser.picture.clone(),
            winner_team: winner_team.to_string(),
            loser_team: loser_team.to_string(),
        }
    }
}
