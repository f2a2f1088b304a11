use std::io::{self, BufRead, Write};

use tictactoe_engine::games::tictactoe::{Board, Mark, Outcome, SIDE, TicTacToeGameState};
use tictactoe_engine::log;

use crate::config::Config;

enum Input {
    Move(usize),
    Hint,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" => Input::Quit,
        "h" | "hint" => Input::Hint,
        other => match other.parse::<usize>() {
            Ok(index) => Input::Move(index),
            Err(_) => Input::Unknown(trimmed.to_string()),
        },
    }
}

fn render_board<W: Write>(board: &Board, output: &mut W) -> io::Result<()> {
    for (row, chunk) in board.cells().chunks(SIDE).enumerate() {
        if row > 0 {
            writeln!(output, "---+---+---")?;
        }
        let cells: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, cell)| match cell.mark() {
                Some(mark) => format!(" {} ", mark),
                None => format!(" {} ", row * SIDE + col),
            })
            .collect();
        writeln!(output, "{}", cells.join("|"))?;
    }
    Ok(())
}

fn result_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Mark::Cross) => "You win!",
        Outcome::Win(Mark::Circle) => "AI wins!",
        Outcome::Draw => "Tie!",
        Outcome::InProgress => "",
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Interactive game loop: the human is X and moves first, the engine answers
/// as O. Returns on `q` or end of input.
pub fn run<R: BufRead, W: Write>(config: &Config, mut input: R, output: &mut W) -> io::Result<()> {
    let mut state = TicTacToeGameState::new();

    loop {
        render_board(state.board(), output)?;
        write!(output, "Your move (0-8, h for hint, q to quit): ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Hint if config.show_hints => match state.hint() {
                Ok(index) => writeln!(output, "Hint: cell {}", index)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Input::Hint => writeln!(output, "Hints are disabled")?,
            Input::Unknown(text) => writeln!(output, "Unrecognized input: {}", text)?,
            Input::Move(index) => {
                if let Err(e) = state.place_mark(index) {
                    writeln!(output, "{}", e)?;
                    continue;
                }

                if state.status() == Outcome::InProgress {
                    match state.play_computer_turn() {
                        Ok(reply) => writeln!(output, "Computer plays {}", reply)?,
                        Err(e) => writeln!(output, "{}", e)?,
                    }
                }
            }
        }

        let outcome = state.status();
        if !outcome.is_terminal() {
            continue;
        }

        render_board(state.board(), output)?;
        let tally = state.tally();
        writeln!(output, "{}", result_message(outcome))?;
        writeln!(output, "Player: {}  AI: {}", tally.human_wins, tally.computer_wins)?;
        log!("Game finished on {}: {}", state.board(), outcome);

        if outcome == Outcome::Draw && config.auto_reset_on_draw {
            writeln!(output, "The game is a tie! Starting over.")?;
            state.reset();
            continue;
        }

        write!(output, "Play again? (y/n): ")?;
        output.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => state.reset(),
            _ => break,
        }
    }

    let tally = state.tally();
    writeln!(output, "Final score - Player: {}  AI: {}", tally.human_wins, tally.computer_wins)?;
    Ok(())
}
