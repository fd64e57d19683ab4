//! インメモリ戦闘サービス
//!
//! 戦闘記録をプロセス内に保持する。永続化は行わない。

use super::FightService;
use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use superheroes_fight_common::config::RosterConfig;
use superheroes_fight_common::error::{FightError, FightResult};
use superheroes_fight_common::types::{Fight, Fighter, Fighters, HEROES_TEAM, VILLAINS_TEAM};
use tokio::sync::RwLock;

#[derive(Default)]
struct FightStore {
    fights: BTreeMap<i64, Fight>,
    last_id: i64,
}

/// ロスターから対戦者を選び、戦闘記録をメモリに保存するサービス
#[derive(Clone)]
pub struct InMemoryFightService {
    roster: Arc<RosterConfig>,
    store: Arc<RwLock<FightStore>>,
}

impl InMemoryFightService {
    /// 指定したロスターでサービスを作成
    pub fn new(roster: RosterConfig) -> Self {
        Self {
            roster: Arc::new(roster),
            store: Arc::new(RwLock::new(FightStore::default())),
        }
    }

    /// JSONロスターファイルからサービスを作成
    ///
    /// 読み込み・検証エラーは `FightError::Common` として返す。
    pub fn from_roster_file(path: impl AsRef<Path>) -> FightResult<Self> {
        let roster = RosterConfig::from_file(path)?;
        Ok(Self::new(roster))
    }

    /// 保存済みの戦闘数
    pub async fn len(&self) -> usize {
        self.store.read().await.fights.len()
    }

    /// 戦闘が一件も保存されていないか
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.fights.is_empty()
    }
}

impl Default for InMemoryFightService {
    fn default() -> Self {
        Self::new(RosterConfig::default())
    }
}

fn ensure_named(fighter: &Fighter, side: &str) -> FightResult<()> {
    if fighter.name.trim().is_empty() {
        return Err(FightError::InvalidFighters(format!("{side} name is empty")));
    }
    Ok(())
}

/// レベルの高い方が勝者。同レベルはヒーローの勝ち。
fn resolve(fighters: &Fighters) -> Fight {
    let now = Utc::now();
    if fighters.hero.level >= fighters.villain.level {
        Fight::between(
            &fighters.hero,
            HEROES_TEAM,
            &fighters.villain,
            VILLAINS_TEAM,
            now,
        )
    } else {
        Fight::between(
            &fighters.villain,
            VILLAINS_TEAM,
            &fighters.hero,
            HEROES_TEAM,
            now,
        )
    }
}

#[async_trait]
impl FightService for InMemoryFightService {
    async fn get_random_fighters(&self) -> FightResult<Fighters> {
        let (hero, villain) = {
            let mut rng = rand::thread_rng();
            (
                self.roster.heroes.choose(&mut rng).cloned(),
                self.roster.villains.choose(&mut rng).cloned(),
            )
        };

        let hero = hero.ok_or_else(|| FightError::NoFightersAvailable("no hero".to_string()))?;
        let villain =
            villain.ok_or_else(|| FightError::NoFightersAvailable("no villain".to_string()))?;
        Ok(Fighters::new(hero, villain))
    }

    async fn get_all_fights(&self) -> FightResult<Vec<Fight>> {
        let store = self.store.read().await;
        Ok(store.fights.values().cloned().collect())
    }

    async fn find_fight_by_id(&self, id: i64) -> FightResult<Option<Fight>> {
        let store = self.store.read().await;
        Ok(store.fights.get(&id).cloned())
    }

    async fn create_fight(&self, fighters: Fighters) -> FightResult<Fight> {
        ensure_named(&fighters.hero, "hero")?;
        ensure_named(&fighters.villain, "villain")?;

        let mut fight = resolve(&fighters);

        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| FightError::Storage("fight id space exhausted".to_string()))?;
        store.last_id = id;
        fight.id = Some(id);
        store.fights.insert(id, fight.clone());

        tracing::info!(
            fight_id = id,
            winner = %fight.winner_name,
            loser = %fight.loser_name,
            "Fight stored"
        );
        Ok(fight)
    }
}
