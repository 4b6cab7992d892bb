use crate::{MoveError, PlayerName, log};
use super::board::Board;
use super::bot_controller::MoveStrategy;
use super::types::{AUTOMATED_MARK, GameResult, Mark, MoveOutcome, WinningLine};
use super::win_detector::check_result;

/// One running game. `turn` is always the mark allowed to move next.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Mark,
    player_x: PlayerName,
    player_o: PlayerName,
    automated_opponent: bool,
}

/// What a single `apply_move` call did, including the automated reply if one was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    pub automated_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl GameSession {
    pub fn new(first_player: PlayerName, opponent: PlayerName, automated_opponent: bool) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            player_x: first_player,
            player_o: opponent,
            automated_opponent,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn is_automated_opponent(&self) -> bool {
        self.automated_opponent
    }

    pub fn automated_mark(&self) -> Option<Mark> {
        self.automated_opponent.then_some(AUTOMATED_MARK)
    }

    pub fn player_name(&self, mark: Mark) -> Option<&PlayerName> {
        match mark {
            Mark::X => Some(&self.player_x),
            Mark::O => Some(&self.player_o),
            Mark::Empty => None,
        }
    }

    pub fn current_player(&self) -> &PlayerName {
        match self.turn {
            Mark::O => &self.player_o,
            _ => &self.player_x,
        }
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.legal_moves()
    }

    /// Places the current mark at `index`. In automated games the opponent's
    /// reply is played within the same call and its outcome is returned.
    pub fn apply_move(
        &mut self,
        index: usize,
        strategy: &mut dyn MoveStrategy,
    ) -> Result<MoveReport, MoveError> {
        if !self.board.is_free(index) {
            return Err(MoveError::IllegalMove { index });
        }

        let outcome = self.place_mark(index);

        if let MoveOutcome::Continue(next) = outcome
            && self.automated_mark() == Some(next)
            && let Some((automated_index, automated_outcome)) = self.play_automated_move(strategy)
        {
            return Ok(self.report(automated_outcome, Some(automated_index)));
        }

        Ok(self.report(outcome, None))
    }

    fn play_automated_move(&mut self, strategy: &mut dyn MoveStrategy) -> Option<(usize, MoveOutcome)> {
        if self.board.is_full() {
            return None;
        }

        let index = strategy.choose_move(&self.board)?;
        if !self.board.is_free(index) {
            log!("Move strategy picked unplayable cell {}, skipping automated move", index);
            return None;
        }

        Some((index, self.place_mark(index)))
    }

    fn place_mark(&mut self, index: usize) -> MoveOutcome {
        self.board.set(index, self.turn);

        match check_result(&self.board) {
            Some(GameResult::Won(line)) => MoveOutcome::Win(line.mark),
            Some(GameResult::Draw) => MoveOutcome::Draw,
            None => {
                self.switch_turn();
                MoveOutcome::Continue(self.turn)
            }
        }
    }

    fn switch_turn(&mut self) {
        self.turn = self.turn.opponent().unwrap_or(Mark::X);
    }

    fn report(&self, outcome: MoveOutcome, automated_move: Option<usize>) -> MoveReport {
        let winning_line = match check_result(&self.board) {
            Some(GameResult::Won(line)) => Some(line),
            _ => None,
        };

        MoveReport {
            outcome,
            automated_move,
            winning_line,
        }
    }
}
