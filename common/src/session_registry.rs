use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::games::tictactoe::{GameSession, MoveOutcome, MoveReport, MoveStrategy};
use crate::{MoveError, PlayerName, Scoreboard, SessionId, log, log_debug};

struct RegistryState {
    sessions: HashMap<SessionId, GameSession>,
    strategy: Box<dyn MoveStrategy>,
}

/// Live games keyed by session. Finished games are removed on the move that ends them.
pub struct SessionRegistry {
    state: Mutex<RegistryState>,
    scoreboard: Arc<Scoreboard>,
}

/// Result of a move that was accepted.
#[derive(Debug, Clone)]
pub struct SessionMoveResult {
    /// Board and players right after the move (and the automated reply, if any).
    pub session: GameSession,
    pub report: MoveReport,
    pub winner: Option<PlayerName>,
}

impl SessionMoveResult {
    pub fn is_terminal(&self) -> bool {
        self.report.outcome.is_terminal()
    }
}

impl SessionRegistry {
    pub fn new(scoreboard: Arc<Scoreboard>, strategy: Box<dyn MoveStrategy>) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                sessions: HashMap::new(),
                strategy,
            }),
            scoreboard,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Always succeeds. A game already running under `session_id` is discarded.
    pub fn start_session(
        &self,
        session_id: SessionId,
        first_player: PlayerName,
        opponent: PlayerName,
        automated_opponent: bool,
    ) -> GameSession {
        let matchup = format!("{} vs {}", first_player, opponent);
        let session = GameSession::new(first_player, opponent, automated_opponent);

        let mut state = self.lock_state();
        if state.sessions.insert(session_id.clone(), session.clone()).is_some() {
            log!("[session:{}] Unfinished game replaced by a new one", session_id);
        }

        log!(
            "[session:{}] Game started: {}{}",
            session_id,
            matchup,
            if automated_opponent { " (automated)" } else { "" }
        );

        session
    }

    pub fn get_session(&self, session_id: &SessionId) -> Result<GameSession, MoveError> {
        self.lock_state()
            .sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| MoveError::NotFound {
                session_id: session_id.clone(),
            })
    }

    /// Applies a move. When it ends the game the session is removed and the
    /// winner credited before the registry lock is released.
    pub fn submit_move(
        &self,
        session_id: &SessionId,
        index: usize,
    ) -> Result<SessionMoveResult, MoveError> {
        let mut guard = self.lock_state();
        let RegistryState { sessions, strategy } = &mut *guard;

        let Some(session) = sessions.get_mut(session_id) else {
            log_debug!("[session:{}] Move {} ignored, no active game", session_id, index);
            return Err(MoveError::NotFound {
                session_id: session_id.clone(),
            });
        };

        let report = session.apply_move(index, strategy.as_mut()).inspect_err(|e| {
            log_debug!("[session:{}] Move ignored: {}", session_id, e);
        })?;

        if let Some(automated) = report.automated_move {
            log_debug!("[session:{}] Automated opponent played {}", session_id, automated);
        }

        let snapshot = session.clone();
        let winner = match report.outcome {
            MoveOutcome::Win(mark) => snapshot.player_name(mark).cloned(),
            _ => None,
        };

        if report.outcome.is_terminal() {
            sessions.remove(session_id);

            match winner {
                Some(ref name) => {
                    let total = self.scoreboard.record_win(name);
                    log!("[session:{}] {} won ({} wins total)", session_id, name, total);
                }
                None => log!("[session:{}] Game ended in a draw", session_id),
            }
        }

        Ok(SessionMoveResult {
            session: snapshot,
            report,
            winner,
        })
    }

    pub fn active_session_count(&self) -> usize {
        self.lock_state().sessions.len()
    }
}
