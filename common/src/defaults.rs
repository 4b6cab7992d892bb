use crate::{PlayerName, ServiceSettings};

pub const DEFAULT_AI_NAME: &str = "🤖 AI";
pub const DEFAULT_OPPONENT_NAME: &str = "Opponent";
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

impl ServiceSettings {
    pub fn default_settings() -> Self {
        Self {
            ai_name: PlayerName::new(DEFAULT_AI_NAME),
            opponent_name: PlayerName::new(DEFAULT_OPPONENT_NAME),
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::default_settings()
    }
}
