mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{MoveStrategy, RandomMoveStrategy};
pub use game_state::{GameSession, MoveReport};
pub use types::{AUTOMATED_MARK, BOARD_SIZE, CELL_COUNT, GameResult, Mark, MoveOutcome, WinningLine};
pub use win_detector::{WIN_LINES, check_result, check_win, check_win_with_line};
