use super::board::Board;
use super::types::{CellIndex, LINES, Mark, Outcome};

/// First completed line in declared order, with the mark that owns it.
pub fn winning_line(board: &Board) -> Option<(Mark, [CellIndex; 3])> {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        if let Some(mark) = cells[a].mark()
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some((mark, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Decides whether the game on `board` is over. A completed line wins even
/// on a full board.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::Win(mark);
    }

    if board.is_full() {
        return Outcome::Draw;
    }

    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_no_line_with_empty_cells_in_progress() {
        assert_eq!(evaluate(&board("XOXOXO...")), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOXOXOOXO")), Outcome::Draw);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut b = Board::new();
            for index in line {
                b = b.with_mark(index, Mark::Circle);
            }
            assert_eq!(evaluate(&b), Outcome::Win(Mark::Circle), "line {:?}", line);
            assert_eq!(winning_line(&b), Some((Mark::Circle, line)));
        }
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X completes the left column on the final ply.
        assert_eq!(evaluate(&board("XOOXXOXOX")), Outcome::Win(Mark::Cross));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(evaluate(&board("XXO......")), Outcome::InProgress);
    }

    #[test]
    fn test_first_line_in_declared_order_wins() {
        // Unreachable: both sides hold a completed line.
        assert_eq!(evaluate(&board("OOO/.../XXX")), Outcome::Win(Mark::Circle));
        assert_eq!(evaluate(&board("XXX/.../OOO")), Outcome::Win(Mark::Cross));

        let b = board("O.X/O.X/O.X");
        assert_eq!(winning_line(&b), Some((Mark::Circle, [0, 3, 6])));
    }

    #[test]
    fn test_unreachable_board_does_not_panic() {
        assert_eq!(evaluate(&board("OOOOOOOOO")), Outcome::Win(Mark::Circle));
        assert_eq!(evaluate(&board("XX.......")), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let b = board("XO.XO....");
        assert_eq!(evaluate(&b), evaluate(&b));
    }
}
