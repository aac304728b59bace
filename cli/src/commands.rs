use serde::Serialize;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Board, GameStatus, Mark, TicTacToeGame, TicTacToeError};
use tictactoe_common::log;

use crate::board_codec::{decode_board, render_board};

/// Reply to a single `play` request: the board after the move, whether the
/// game is over and the winning marker value (1 or 2), if any.
#[derive(Debug, PartialEq, Serialize)]
pub struct PlayResponse {
    pub squares: Vec<u8>,
    pub is_over: bool,
    pub winner: Option<u8>,
}

impl PlayResponse {
    fn from_game(game: &TicTacToeGame) -> Self {
        Self {
            squares: game.board_snapshot().iter().map(|m| m.to_value()).collect(),
            is_over: game.is_over(),
            winner: game.winner().map(Mark::to_value),
        }
    }
}

/// Plays one move on `board` unless the game is already finished.
pub fn play_once(
    board: &str,
    square: Option<usize>,
    rng: SessionRng,
) -> Result<PlayResponse, String> {
    let board = decode_board(board)?;
    let mut game = TicTacToeGame::from_board(board, rng);
    if !game.is_over() {
        game.play(square).map_err(|e| e.to_string())?;
    }
    Ok(PlayResponse::from_game(&game))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SelfPlayTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl SelfPlayTally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWins => self.x_wins += 1,
            GameStatus::OWins => self.o_wins += 1,
            GameStatus::Tied => self.ties += 1,
            GameStatus::Playing => {}
        }
    }
}

/// Engine against engine from `start` (empty when `None`), `games` times.
/// `on_move` receives the rendered board after every move.
pub fn self_play(
    start: Option<&str>,
    games: u32,
    rng: &mut SessionRng,
    mut on_move: impl FnMut(&str),
) -> Result<SelfPlayTally, String> {
    let start = match start {
        Some(text) => decode_board(text)?,
        None => Board::new(),
    };

    let mut tally = SelfPlayTally::default();
    for round in 0..games {
        let seed = rng.random_range(0..u64::MAX);
        let mut game = TicTacToeGame::from_board(start.clone(), SessionRng::new(seed));
        log!("Game {} starts with seed {}", round + 1, seed);

        let status = play_round(&mut game, &mut on_move).map_err(|e| e.to_string())?;
        log!("Game {} finished: {}", round + 1, status);
        tally.record(status);
    }
    Ok(tally)
}

fn play_round(
    game: &mut TicTacToeGame,
    on_move: &mut impl FnMut(&str),
) -> Result<GameStatus, TicTacToeError> {
    let mut status = game.status();
    while !status.is_over() {
        status = game.play(None)?;
        on_move(&render_board(&game.board_snapshot()));
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_play_answers_corner_with_center() {
        let response = play_once("100000000", None, SessionRng::new(1)).unwrap();
        assert_eq!(
            response,
            PlayResponse {
                squares: vec![1, 0, 0, 0, 2, 0, 0, 0, 0],
                is_over: false,
                winner: None,
            }
        );
    }

    #[test]
    fn test_winning_play() {
        let response = play_once("201210000", None, SessionRng::new(1)).unwrap();
        assert!(response.is_over);
        assert_eq!(response.winner, Some(1));
        assert_eq!(response.squares, vec![2, 0, 1, 2, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_finished_board_is_returned_as_is() {
        let response = play_once("111220000", None, SessionRng::new(1)).unwrap();
        assert!(response.is_over);
        assert_eq!(response.winner, Some(1));
        assert_eq!(response.squares, vec![1, 1, 1, 2, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_named_square_must_be_free() {
        let err = play_once("100000000", Some(0), SessionRng::new(1)).unwrap_err();
        assert!(err.contains("cell 0 is not free"));
    }

    #[test]
    fn test_bad_board_string() {
        assert!(play_once("00100200", None, SessionRng::new(1)).is_err());
    }

    #[test]
    fn test_response_yaml_shape() {
        let response = play_once("100000000", None, SessionRng::new(1)).unwrap();
        let yaml = serde_yaml_ng::to_string(&response).unwrap();
        assert!(yaml.contains("is_over: false"));
        assert!(yaml.contains("winner: null"));
    }

    #[test]
    fn test_self_play_always_ties() {
        let mut rng = SessionRng::new(21);
        let mut moves = 0;
        let tally = self_play(None, 3, &mut rng, |_| moves += 1).unwrap();

        assert_eq!(tally, SelfPlayTally { x_wins: 0, o_wins: 0, ties: 3 });
        assert_eq!(moves, 27);
    }

    #[test]
    fn test_self_play_from_given_board() {
        let mut rng = SessionRng::new(4);
        let tally = self_play(Some("120120000"), 1, &mut rng, |_| {}).unwrap();
        assert_eq!(tally.x_wins, 1);
    }
}
