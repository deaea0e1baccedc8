//! Shared core types - player progress and the reward sink

use serde::{Deserialize, Serialize};

/// Sink for reward grants from the mini-games
///
/// Purely additive; display caps are a presentation concern. Callers own
/// the credit-once rule: check the level's solved state before crediting.
pub trait RewardSink {
    fn add_reward(&mut self, amount: u32);
}

/// Player progress shared across all screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Hero name entered on the birth map form
    pub name: String,
    /// Star shard currency earned from the mini-games
    pub shards: u32,
    pub unlocked_worlds: Vec<String>,
    pub badges: Vec<String>,
}

impl PlayerState {
    pub fn new(starting_shards: u32) -> Self {
        Self {
            name: String::new(),
            shards: starting_shards,
            unlocked_worlds: vec!["Earth".to_string()],
            badges: vec!["Explorer".to_string()],
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(150)
    }
}

impl RewardSink for PlayerState {
    fn add_reward(&mut self, amount: u32) {
        self.shards += amount;
        tracing::debug!(amount, total = self.shards, "reward granted");
    }
}
