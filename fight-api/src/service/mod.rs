//! 戦闘サービス
//!
//! APIハンドラーはこのtraitにのみ依存し、対戦者の選出・勝敗判定・保存は
//! 実装側が担う。

/// インメモリ実装（開発・テスト用）
pub mod memory;

use async_trait::async_trait;
use superheroes_fight_common::error::FightResult;
use superheroes_fight_common::types::{Fight, Fighters};

/// 戦闘操作のサービスtrait
#[async_trait]
pub trait FightService: Send + Sync {
    /// ランダムなヒーローとヴィランの組を取得
    async fn get_random_fighters(&self) -> FightResult<Fighters>;
    /// 全戦闘記録を取得
    async fn get_all_fights(&self) -> FightResult<Vec<Fight>>;
    /// IDで戦闘記録を取得（存在しない場合は `None`）
    async fn find_fight_by_id(&self, id: i64) -> FightResult<Option<Fight>>;
    /// 戦闘を作成し、IDが割り当てられた記録を返す
    async fn create_fight(&self, fighters: Fighters) -> FightResult<Fight>;
}
