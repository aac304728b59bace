/// Failures raised by the board, the search and the game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicTacToeError {
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("invalid move: cell {0} is not free")]
    InvalidMove(usize),

    /// Undo without a matching placement. Points at a bug in the caller.
    #[error("no placement to undo")]
    EmptyHistory,

    #[error("{0:?} is not a player marker")]
    NotAPlayer(super::Mark),

    #[error("game is already over ({0})")]
    GameOver(super::GameStatus),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameStatus;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TicTacToeError::InvalidMove(42).to_string(),
            "invalid move: cell 42 is not free"
        );
        assert_eq!(
            TicTacToeError::GameOver(GameStatus::Tied).to_string(),
            "game is already over (tied)"
        );
    }
}
