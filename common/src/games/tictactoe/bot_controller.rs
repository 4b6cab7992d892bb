use crate::games::SessionRng;
use super::board::Board;

/// Picks the automated opponent's cell. Implementations may return an occupied
/// index or `None`; the session then skips the automated move.
pub trait MoveStrategy: Send {
    fn choose_move(&mut self, board: &Board) -> Option<usize>;
}

/// Uniform pick among the free cells.
pub struct RandomMoveStrategy {
    rng: SessionRng,
}

impl RandomMoveStrategy {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl MoveStrategy for RandomMoveStrategy {
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let available_moves = board.legal_moves();
        self.rng.choose(&available_moves).copied()
    }
}
