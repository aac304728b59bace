mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{maximized_move, minimized_move, pick_square};
pub use error::TicTacToeError;
pub use game_state::TicTacToeGame;
pub use types::{CELL_COUNT, CENTER, CORNERS, GameStatus, Mark};
pub use win_detector::{WIN_PATTERNS, check_win};
