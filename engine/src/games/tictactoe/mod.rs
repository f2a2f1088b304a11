mod board;
mod bot_controller;
mod game_state;
mod score_tally;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{best_move_for, score_moves, select_move, try_select_move};
pub use game_state::TicTacToeGameState;
pub use score_tally::ScoreTally;
pub use types::{BoardError, CELL_COUNT, Cell, CellIndex, LINES, Mark, Outcome, SIDE};
pub use win_detector::{check_win, evaluate, winning_line};
