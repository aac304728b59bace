use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::error::TicTacToeError;
use super::types::{CENTER, CORNERS, Mark};

/// Chooses a cell for `mark` on a non-terminal board.
///
/// The first two plies use fixed opening rules; everything after runs a full
/// minimax search over the remaining cells. The board is explored in place
/// and handed back unchanged.
pub fn pick_square(
    board: &mut Board,
    mark: Mark,
    rng: &mut SessionRng,
) -> Result<usize, TicTacToeError> {
    let status = board.status();
    if status.is_over() {
        return Err(TicTacToeError::GameOver(status));
    }

    if let Some(cell) = opening_move(board, mark, rng) {
        log!("{} opens at {}", mark, cell);
        return Ok(cell);
    }

    let (cell, score) = maximized_move(board, mark)?;
    log!("{} searched to {} (score {})", mark, cell, score);
    Ok(cell)
}

fn opening_move(board: &Board, mark: Mark, rng: &mut SessionRng) -> Option<usize> {
    match board.current_move_number() {
        0 => rng.choose(&CORNERS),
        1 => {
            let opponent_cells = board.cells_with(mark.opponent()?);
            if opponent_cells.iter().any(|cell| CORNERS.contains(cell)) {
                Some(CENTER)
            } else if opponent_cells.contains(&CENTER) {
                rng.choose(&CORNERS)
            } else {
                // An edge opening has no fixed reply; search handles it.
                None
            }
        }
        _ => None,
    }
}

/// Best cell for `mark` to play, scored from `mark`'s point of view.
/// Ties keep the lowest free cell.
pub fn maximized_move(board: &mut Board, mark: Mark) -> Result<(usize, i32), TicTacToeError> {
    best_move(board, mark, mark, |score, best| score > best)
}

/// Reply by `mark`'s opponent that is worst for `mark`. Ties keep the lowest
/// free cell.
pub fn minimized_move(board: &mut Board, mark: Mark) -> Result<(usize, i32), TicTacToeError> {
    let opponent = mark.opponent().ok_or(TicTacToeError::NotAPlayer(mark))?;
    best_move(board, mark, opponent, |score, best| score < best)
}

fn best_move(
    board: &mut Board,
    mark: Mark,
    placed: Mark,
    improves: fn(i32, i32) -> bool,
) -> Result<(usize, i32), TicTacToeError> {
    if mark.opponent().is_none() {
        return Err(TicTacToeError::NotAPlayer(mark));
    }

    let mut best: Option<(usize, i32)> = None;

    for cell in board.free_cells() {
        let score = board.with_move(placed, cell, |board| {
            if board.is_over() {
                Ok(outcome_score(board, mark))
            } else if placed == mark {
                minimized_move(board, mark).map(|(_, score)| score)
            } else {
                maximized_move(board, mark).map(|(_, score)| score)
            }
        })?;

        if best.is_none_or(|(_, best_score)| improves(score, best_score)) {
            best = Some((cell, score));
        }
    }

    best.ok_or_else(|| TicTacToeError::GameOver(board.status()))
}

/// +1 if `mark` has won, -1 if its opponent has, 0 otherwise.
fn outcome_score(board: &Board, mark: Mark) -> i32 {
    match board.winner() {
        Some(winner) if winner == mark => 1,
        Some(_) => -1,
        None => 0,
    }
}
