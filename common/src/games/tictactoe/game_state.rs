use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::pick_square;
use super::error::TicTacToeError;
use super::types::{CELL_COUNT, GameStatus, Mark};

/// A game session: one board plus the randomness used by the opening rules.
///
/// Either side can be played by the caller (`play(Some(cell))`) or by the
/// engine (`play(None)`); the marker to move is always derived from the board.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    board: Board,
    rng: SessionRng,
}

impl TicTacToeGame {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            board: Board::new(),
            rng,
        }
    }

    pub fn from_board(board: Board, rng: SessionRng) -> Self {
        Self { board, rng }
    }

    pub fn from_values(values: &[u8], rng: SessionRng) -> Result<Self, TicTacToeError> {
        Ok(Self::from_board(Board::from_values(values)?, rng))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> [Mark; CELL_COUNT] {
        self.board.snapshot()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.board.winner()
    }

    pub fn mover(&self) -> Mark {
        self.board.mover()
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Plays `square` for the current mover, or lets the engine choose when
    /// `square` is `None`. Returns the status after the move.
    pub fn play(&mut self, square: Option<usize>) -> Result<GameStatus, TicTacToeError> {
        let status = self.board.status();
        if status.is_over() {
            return Err(TicTacToeError::GameOver(status));
        }

        let mark = self.board.mover();
        let cell = match square {
            Some(cell) => cell,
            None => pick_square(&mut self.board, mark, &mut self.rng)?,
        };
        self.board.place(mark, cell)?;

        let status = self.board.status();
        log!("{} played {}, game is {}", mark, cell, status);
        Ok(status)
    }

    /// Engine plays both sides until the game ends.
    pub fn play_out(&mut self) -> Result<GameStatus, TicTacToeError> {
        let mut status = self.status();
        while !status.is_over() {
            status = self.play(None)?;
        }
        Ok(status)
    }
}
