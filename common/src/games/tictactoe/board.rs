use super::types::{CELL_COUNT, Mark};

/// 3x3 grid stored row-major: index 0 is top-left, 8 is bottom-right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_free(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_all_moves() {
        let board = Board::new();

        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_legal_moves_skip_marked_cells() {
        let mut board = Board::new();
        board.set(0, Mark::X);
        board.set(4, Mark::O);

        assert_eq!(board.legal_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_cells([Mark::X; CELL_COUNT]);

        assert!(board.legal_moves().is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_out_of_range_cell_is_not_free() {
        let board = Board::new();

        assert_eq!(board.get(9), None);
        assert!(!board.is_free(9));
        assert!(!board.is_free(usize::MAX));
    }
}
