use crate::games::tictactoe::{CELL_COUNT, GameSession, Mark, MoveOutcome};
use crate::SessionMoveResult;

/// Everything a transport needs to draw the game message: the nine cells
/// (row-major, 0 is top-left), a status line, and whether the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub cells: [Mark; CELL_COUNT],
    pub status_text: String,
    pub is_terminal: bool,
    /// Mark to move next; `None` once the game is over.
    pub turn: Option<Mark>,
    pub winning_line: Option<[usize; 3]>,
}

impl RenderState {
    pub fn game_started(session: &GameSession) -> Self {
        let status_text = if session.is_automated_opponent() {
            format!(
                "🤖 AI Game Started!\n{} {}'s turn",
                session.turn().symbol(),
                session.current_player()
            )
        } else {
            format!(
                "Game started!\n{} {}'s turn",
                session.turn().symbol(),
                session.current_player()
            )
        };

        Self {
            cells: *session.board().cells(),
            status_text,
            is_terminal: false,
            turn: Some(session.turn()),
            winning_line: None,
        }
    }

    pub fn after_move(result: &SessionMoveResult) -> Self {
        let session = &result.session;

        let status_text = match result.report.outcome {
            MoveOutcome::Continue(turn) => {
                format!("Turn: {} ({})", turn.symbol(), session.current_player())
            }
            MoveOutcome::Win(mark) => {
                let name = result
                    .winner
                    .as_ref()
                    .map(|n| n.as_str())
                    .unwrap_or_default();
                if session.automated_mark() == Some(mark) {
                    format!("{} wins!", name)
                } else {
                    format!("🏆 {} wins!", name)
                }
            }
            MoveOutcome::Draw => "🤝 It's a draw!".to_string(),
        };

        let turn = match result.report.outcome {
            MoveOutcome::Continue(turn) => Some(turn),
            _ => None,
        };

        Self {
            cells: *session.board().cells(),
            status_text,
            is_terminal: result.is_terminal(),
            turn,
            winning_line: result.report.winning_line.map(|line| line.cells),
        }
    }
}
