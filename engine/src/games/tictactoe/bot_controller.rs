use super::board::Board;
use super::types::{BoardError, CellIndex, Mark, Outcome};
use super::win_detector::evaluate;

/// Score of a win found at depth 0. Deeper wins score less, deeper losses
/// cost less, so the search prefers fast wins and slow losses.
const WIN_SCORE: i32 = 10;

/// Picks the computer's (Circle's) move on `board`.
///
/// Panics if the board is full or already decided: asking for a move then is
/// a caller bug, not a recoverable condition. Use [`try_select_move`] when the
/// board comes from untrusted input.
pub fn select_move(board: &Board) -> CellIndex {
    match try_select_move(board) {
        Ok(index) => index,
        Err(err) => panic!("select_move called on {}: {}", board, err),
    }
}

pub fn try_select_move(board: &Board) -> Result<CellIndex, BoardError> {
    if evaluate(board).is_terminal() {
        return Err(BoardError::NoLegalMove);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;
    let mut alpha = i32::MIN;

    for index in board.available_moves() {
        let next = board.with_mark(index, Mark::Circle);
        let score = minimax(&next, 0, false, alpha, i32::MAX);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
        alpha = alpha.max(best_score);
    }

    best_move.ok_or(BoardError::NoLegalMove)
}

/// Optimal move for either side. Cross is searched on the mirrored board so
/// both sides share one scoring convention and tie-break.
pub fn best_move_for(board: &Board, mark: Mark) -> Result<CellIndex, BoardError> {
    match mark {
        Mark::Circle => try_select_move(board),
        Mark::Cross => try_select_move(&board.mirrored()),
    }
}

/// Exact minimax value of every legal Circle move, in index order.
pub fn score_moves(board: &Board) -> Result<Vec<(CellIndex, i32)>, BoardError> {
    if evaluate(board).is_terminal() {
        return Err(BoardError::NoLegalMove);
    }

    Ok(board
        .available_moves()
        .map(|index| {
            let next = board.with_mark(index, Mark::Circle);
            (index, minimax(&next, 0, false, i32::MIN, i32::MAX))
        })
        .collect())
}

fn minimax(board: &Board, depth: usize, is_maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    match evaluate(board) {
        Outcome::Win(Mark::Circle) => return WIN_SCORE - depth as i32,
        Outcome::Win(Mark::Cross) => return depth as i32 - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.available_moves() {
            let next = board.with_mark(index, Mark::Circle);
            let eval = minimax(&next, depth + 1, false, alpha, beta);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.available_moves() {
            let next = board.with_mark(index, Mark::Cross);
            let eval = minimax(&next, depth + 1, true, alpha, beta);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
