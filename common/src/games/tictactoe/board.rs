use super::error::TicTacToeError;
use super::types::{CELL_COUNT, GameStatus, Mark};
use super::win_detector::check_win;

/// The 9 cells plus the placements made since construction.
///
/// Whose turn it is, the status and the winner are all derived from the cells.
/// Marker balance of a supplied layout is not checked, so `mover()` on an
/// unbalanced board simply follows occupancy parity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
    history: Vec<usize>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(layout: &[Mark]) -> Result<Self, TicTacToeError> {
        let cells: [Mark; CELL_COUNT] = layout.try_into().map_err(|_| {
            TicTacToeError::InvalidBoard(format!(
                "expected {} cells, got {}",
                CELL_COUNT,
                layout.len()
            ))
        })?;
        Ok(Self {
            cells,
            history: Vec::new(),
        })
    }

    /// Builds a board from raw markers: 0 free, 1 X, 2 O.
    pub fn from_values(values: &[u8]) -> Result<Self, TicTacToeError> {
        let marks = values
            .iter()
            .map(|&value| Mark::from_value(value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_marks(&marks)
    }

    pub fn snapshot(&self) -> [Mark; CELL_COUNT] {
        self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells_with(&self, mark: Mark) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == mark)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn free_cells(&self) -> Vec<usize> {
        self.cells_with(Mark::Free)
    }

    pub fn is_free(&self, index: usize) -> bool {
        self.cell(index) == Some(Mark::Free)
    }

    pub fn current_move_number(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Free).count()
    }

    pub fn mover(&self) -> Mark {
        if self.current_move_number() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(Mark::X) => GameStatus::XWins,
            Some(Mark::O) => GameStatus::OWins,
            _ if self.cells.contains(&Mark::Free) => GameStatus::Playing,
            _ => GameStatus::Tied,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Fails with `InvalidMove` when `cell` is occupied or off the board; the
    /// board is left untouched in that case.
    pub fn place(&mut self, mark: Mark, cell: usize) -> Result<(), TicTacToeError> {
        if mark == Mark::Free || !self.is_free(cell) {
            return Err(TicTacToeError::InvalidMove(cell));
        }
        self.cells[cell] = mark;
        self.history.push(cell);
        Ok(())
    }

    pub fn undo_last(&mut self) -> Result<usize, TicTacToeError> {
        let cell = self.history.pop().ok_or(TicTacToeError::EmptyHistory)?;
        self.cells[cell] = Mark::Free;
        Ok(cell)
    }

    /// Places `mark` at `cell`, runs `explore` on the resulting position and
    /// undoes the placement before returning.
    pub fn with_move<R>(
        &mut self,
        mark: Mark,
        cell: usize,
        explore: impl FnOnce(&mut Board) -> Result<R, TicTacToeError>,
    ) -> Result<R, TicTacToeError> {
        self.place(mark, cell)?;
        let depth = self.history.len();
        let result = explore(self);
        // explore must leave its own placements unwound
        debug_assert_eq!(self.history.len(), depth);
        self.undo_last()?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(board.free_cells(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.current_move_number(), 0);
        assert_eq!(board.mover(), Mark::X);
        assert_eq!(board.status(), GameStatus::Playing);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        assert!(matches!(
            Board::from_values(&[1, 2, 3, 4]),
            Err(TicTacToeError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::from_values(&[0; 10]),
            Err(TicTacToeError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::from_values(&[]),
            Err(TicTacToeError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_from_values_rejects_illegal_marker() {
        assert!(matches!(
            Board::from_values(&[0, 0, 0, 0, 3, 0, 0, 0, 0]),
            Err(TicTacToeError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_unbalanced_layout_is_accepted() {
        let board = Board::from_values(&[1, 1, 1, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(board.mover(), Mark::O);
        assert_eq!(board.status(), GameStatus::XWins);
    }

    #[test]
    fn test_cells_with() {
        let board = Board::from_values(&[1, 2, 0, 1, 2, 0, 0, 0, 0]).unwrap();
        assert_eq!(board.cells_with(Mark::X), vec![0, 3]);
        assert_eq!(board.cells_with(Mark::O), vec![1, 4]);
        assert_eq!(board.free_cells(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_mover_alternates_after_place() {
        let mut board = Board::new();
        let mut expected = Mark::X;
        for cell in [4, 0, 8, 2, 1] {
            assert_eq!(board.mover(), expected);
            board.place(board.mover(), cell).unwrap();
            expected = expected.opponent().unwrap();
        }
        assert_eq!(board.mover(), Mark::O);
    }

    #[test]
    fn test_place_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::from_values(&[1, 0, 0, 0, 2, 0, 0, 0, 0]).unwrap();
        let before = board.clone();

        assert_eq!(board.place(Mark::X, 4), Err(TicTacToeError::InvalidMove(4)));
        assert_eq!(board.place(Mark::X, 42), Err(TicTacToeError::InvalidMove(42)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_restores_cells_and_winner() {
        let mut board = Board::from_values(&[1, 2, 0, 1, 2, 0, 0, 0, 0]).unwrap();
        let before = board.snapshot();

        board.place(Mark::X, 6).unwrap();
        assert_eq!(board.winner(), Some(Mark::X));
        assert_eq!(board.history(), &[6]);

        assert_eq!(board.undo_last(), Ok(6));
        assert_eq!(board.snapshot(), before);
        assert_eq!(board.winner(), None);
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut board = Board::new();
        assert_eq!(board.undo_last(), Err(TicTacToeError::EmptyHistory));
    }

    #[test]
    fn test_undo_never_clears_initial_layout() {
        let mut board = Board::from_values(&[1, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(board.undo_last(), Err(TicTacToeError::EmptyHistory));
        assert_eq!(board.cell(0), Some(Mark::X));
    }

    #[test]
    fn test_with_move_unwinds() {
        let mut board = Board::new();
        let move_number = board
            .with_move(Mark::X, 0, |b| {
                b.with_move(Mark::O, 4, |b| Ok(b.current_move_number()))
            })
            .unwrap();

        assert_eq!(move_number, 2);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_with_move_unwinds_on_error() {
        let mut board = Board::new();
        let result: Result<(), _> = board.with_move(Mark::X, 0, |b| b.place(Mark::O, 0));

        assert_eq!(result, Err(TicTacToeError::InvalidMove(0)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_status_tied() {
        let board = Board::from_values(&[1, 2, 1, 1, 2, 2, 2, 1, 1]).unwrap();
        assert_eq!(board.status(), GameStatus::Tied);
    }
}
