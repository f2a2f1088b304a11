use std::error::Error;
use std::io::Write;

use tictactoe_engine::games::tictactoe::{
    Board, Mark, best_move_for, evaluate, score_moves, winning_line,
};

/// Prints the verdict for a board given in notation and, while the game is
/// still open, the engine's move for the side to move.
pub fn run<W: Write>(notation: &str, output: &mut W) -> Result<(), Box<dyn Error>> {
    let board: Board = notation.parse()?;
    let outcome = evaluate(&board);

    writeln!(output, "Board: {}", board)?;
    writeln!(output, "Outcome: {}", outcome)?;

    if !board.is_reachable() {
        writeln!(output, "Warning: this board cannot arise from alternating play")?;
    }

    if let Some((mark, line)) = winning_line(&board) {
        writeln!(output, "Winning line for {}: {:?}", mark, line)?;
    }

    if outcome.is_terminal() {
        return Ok(());
    }

    let mover = board.next_mark();
    let best = best_move_for(&board, mover)?;
    writeln!(output, "{} to move, best move: {}", mover, best)?;

    if mover == Mark::Circle {
        for (index, score) in score_moves(&board)? {
            writeln!(output, "  cell {}: {:+}", index, score)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(notation: &str) -> Result<String, String> {
        let mut output = Vec::new();
        run(notation, &mut output).map_err(|e| e.to_string())?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_analyze_blocking_position() {
        let text = analyze("XX./.O./...").unwrap();
        assert!(text.contains("Outcome: in progress"));
        assert!(text.contains("O to move, best move: 2"));
        assert!(text.contains("  cell 2:"));
    }

    #[test]
    fn test_analyze_finished_game() {
        let text = analyze("XOXOXOOXO").unwrap();
        assert!(text.contains("Outcome: draw"));
        assert!(!text.contains("best move"));

        let text = analyze("OOO/XX./X..").unwrap();
        assert!(text.contains("Outcome: O wins"));
        assert!(text.contains("Winning line for O: [0, 1, 2]"));
    }

    #[test]
    fn test_analyze_cross_to_move_has_no_score_table() {
        let text = analyze("XX./OO./...").unwrap();
        assert!(text.contains("X to move, best move: 2"));
        assert!(!text.contains("  cell"));
    }

    #[test]
    fn test_analyze_warns_about_unreachable_board() {
        let text = analyze("OO./.../...").unwrap();
        assert!(text.contains("Warning"));
    }

    #[test]
    fn test_analyze_rejects_malformed_board() {
        let err = analyze("XX?").unwrap_err();
        assert!(err.contains("Invalid board state"));
    }
}
