pub mod config;
pub mod games;
pub mod identifiers;
pub mod logger;
pub mod move_error;
pub mod render_state;
pub mod scoreboard;
pub mod service;
pub mod session_registry;
mod defaults;

pub use defaults::{DEFAULT_AI_NAME, DEFAULT_LEADERBOARD_LIMIT, DEFAULT_OPPONENT_NAME};
pub use identifiers::*;
pub use move_error::MoveError;
pub use render_state::RenderState;
pub use scoreboard::{ScoreEntry, Scoreboard};
pub use service::{GameService, ServiceSettings};
pub use session_registry::{SessionMoveResult, SessionRegistry};
