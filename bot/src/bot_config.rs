use serde::{Deserialize, Serialize};
use tictactoe_bot_common::config::Validate;
use tictactoe_bot_common::{
    DEFAULT_AI_NAME, DEFAULT_LEADERBOARD_LIMIT, DEFAULT_OPPONENT_NAME, PlayerName,
    ServiceSettings,
};

const MAX_LEADERBOARD_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub ai_name: String,
    pub opponent_name: String,
    pub leaderboard_limit: usize,
    pub rng_seed: Option<u64>,
    pub log_prefix: Option<String>,
    pub verbose_logging: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            ai_name: DEFAULT_AI_NAME.to_string(),
            opponent_name: DEFAULT_OPPONENT_NAME.to_string(),
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
            rng_seed: None,
            log_prefix: None,
            verbose_logging: false,
        }
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_name.trim().is_empty() {
            return Err("ai_name must not be empty".to_string());
        }
        if self.opponent_name.trim().is_empty() {
            return Err("opponent_name must not be empty".to_string());
        }
        if self.leaderboard_limit == 0 || self.leaderboard_limit > MAX_LEADERBOARD_LIMIT {
            return Err(format!(
                "leaderboard_limit must be between 1 and {}",
                MAX_LEADERBOARD_LIMIT
            ));
        }
        Ok(())
    }
}

impl BotConfig {
    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            ai_name: PlayerName::new(self.ai_name.as_str()),
            opponent_name: PlayerName::new(self.opponent_name.as_str()),
            leaderboard_limit: self.leaderboard_limit,
        }
    }
}
