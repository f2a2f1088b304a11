use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;

use super::OpponentKind;

const MAX_GAMES: u32 = 100_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SelfplayConfig {
    pub games: u32,
    #[serde(default)]
    pub opponent: OpponentKind,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SelfplayConfig {
    /// Command-line values win over the config file.
    pub fn with_overrides(
        &self,
        games: Option<u32>,
        opponent: Option<OpponentKind>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            games: games.unwrap_or(self.games),
            opponent: opponent.unwrap_or(self.opponent),
            seed: seed.or(self.seed),
        }
    }
}

impl Validate for SelfplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!("selfplay games must be between 1 and {}", MAX_GAMES));
        }
        Ok(())
    }
}

impl Default for SelfplayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            opponent: OpponentKind::Random,
            seed: None,
        }
    }
}
