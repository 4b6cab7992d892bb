use super::board::Board;
use super::types::{GameResult, Mark, WinningLine};

/// Rows, then columns, then diagonals. The first complete line wins.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        (mark != Mark::Empty && cells[b] == mark && cells[c] == mark)
            .then(|| WinningLine::new(mark, [a, b, c]))
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// `None` while the game is still open.
pub fn check_result(board: &Board) -> Option<GameResult> {
    if let Some(line) = check_win_with_line(board) {
        return Some(GameResult::Won(line));
    }

    if board.is_full() {
        return Some(GameResult::Draw);
    }

    None
}
