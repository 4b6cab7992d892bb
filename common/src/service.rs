use std::sync::Arc;

use crate::games::tictactoe::MoveStrategy;
use crate::{
    MoveError, PlayerName, RenderState, ScoreEntry, Scoreboard, SessionId, SessionRegistry,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub ai_name: PlayerName,
    pub opponent_name: PlayerName,
    pub leaderboard_limit: usize,
}

/// Entry point for transports. Clones share the same registry and scoreboard.
#[derive(Clone)]
pub struct GameService {
    registry: Arc<SessionRegistry>,
    scoreboard: Arc<Scoreboard>,
    settings: ServiceSettings,
}

impl GameService {
    pub fn new(settings: ServiceSettings, strategy: Box<dyn MoveStrategy>) -> Self {
        let scoreboard = Arc::new(Scoreboard::new());
        let registry = Arc::new(SessionRegistry::new(scoreboard.clone(), strategy));
        Self {
            registry,
            scoreboard,
            settings,
        }
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Requester plays ❌. The ⭕ seat goes to the configured opponent or AI name.
    pub fn start_session(
        &self,
        session_id: SessionId,
        requester: PlayerName,
        automated: bool,
    ) -> RenderState {
        let opponent = if automated {
            self.settings.ai_name.clone()
        } else {
            self.settings.opponent_name.clone()
        };

        let session = self
            .registry
            .start_session(session_id, requester, opponent, automated);
        RenderState::game_started(&session)
    }

    pub fn submit_move(
        &self,
        session_id: &SessionId,
        index: usize,
    ) -> Result<RenderState, MoveError> {
        let result = self.registry.submit_move(session_id, index)?;
        Ok(RenderState::after_move(&result))
    }

    pub fn get_score(&self, name: &PlayerName) -> u32 {
        self.scoreboard.get(name)
    }

    /// `None` uses the configured limit.
    pub fn get_leaderboard(&self, limit: Option<usize>) -> Vec<ScoreEntry> {
        self.scoreboard
            .top(limit.unwrap_or(self.settings.leaderboard_limit))
    }
}
