//! Game configuration handed over by the setup screen.
//!
//! The blob is JSON with camelCase keys:
//!
//! ```json
//! { "mode": "501", "players": ["Ann", "Bo"], "startingScore": 501,
//!   "settings": { "inOption": "straight", "outOption": "double" } }
//! ```
//!
//! Match settings the engine does not play (legs, sets, bots, teams) are
//! accepted and ignored.

use serde::{Deserialize, Serialize};

use crate::model::{Action, GameMode, InRule, OutRule, Variant, X01Rules};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed game config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("player #{0} has an empty name")]
    EmptyPlayerName(usize),
    #[error("starting score {0} cannot be played out")]
    InvalidStartingScore(u32),
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    #[serde(default)]
    pub in_option: InRule,
    #[serde(default)]
    pub out_option: OutRule,
    /// Seeds player-id generation.
    #[serde(default)]
    pub seed: u64,
}

impl GameSettings {
    pub fn x01_rules(&self) -> X01Rules {
        X01Rules { in_rule: self.in_option, out_rule: self.out_option }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub mode: GameMode,
    pub players: Vec<String>,
    #[serde(default)]
    pub starting_score: Option<u32>,
    #[serde(default)]
    pub settings: GameSettings,
}

impl GameConfig {
    /// Parses the blob, drops blank player names and validates the rest.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        config.players = config
            .players
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if let Some(i) = self.players.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError::EmptyPlayerName(i));
        }
        let start = self.mode.starting_score(self.starting_score);
        if self.mode.variant() == Variant::X01 && start < 2 {
            return Err(ConfigError::InvalidStartingScore(start));
        }
        Ok(())
    }

    pub fn into_action(self) -> Action {
        Action::NewGame {
            mode: self.mode,
            players: self.players,
            starting_score: self.starting_score,
            rules: self.settings.x01_rules(),
        }
    }
}
