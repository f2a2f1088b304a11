use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{CellIndex, Outcome, ScoreTally, TicTacToeGameState};
use tictactoe_engine::log;

use crate::config::{OpponentKind, SelfplayConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfplayReport {
    pub games: u32,
    pub draws: u32,
    pub tally: ScoreTally,
}

fn opponent_move(
    state: &TicTacToeGameState,
    opponent: OpponentKind,
    rng: &mut SessionRng,
) -> Result<CellIndex, String> {
    match opponent {
        OpponentKind::Perfect => state.hint(),
        OpponentKind::Random => {
            let moves: Vec<CellIndex> = state.board().available_moves().collect();
            rng.choose(&moves)
                .copied()
                .ok_or_else(|| "No moves left for the opponent".to_string())
        }
    }
}

fn play_game(
    state: &mut TicTacToeGameState,
    opponent: OpponentKind,
    rng: &mut SessionRng,
) -> Result<Outcome, String> {
    state.reset();
    loop {
        let index = opponent_move(state, opponent, rng)?;
        if state.place_mark(index)?.is_terminal() {
            return Ok(state.status());
        }

        state.play_computer_turn()?;
        if state.status().is_terminal() {
            return Ok(state.status());
        }
    }
}

/// Plays `settings.games` games of the configured opponent (as X, moving
/// first) against the engine. Any engine loss is an error.
pub fn run(settings: &SelfplayConfig) -> Result<SelfplayReport, String> {
    let mut rng = match settings.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Self-play: {} games against {:?} opponent, seed {}",
        settings.games,
        settings.opponent,
        rng.seed()
    );

    let mut state = TicTacToeGameState::new();
    let mut draws = 0;

    for game in 1..=settings.games {
        let outcome = play_game(&mut state, settings.opponent, &mut rng)?;
        if outcome == Outcome::Draw {
            draws += 1;
        }
        log!("Game {}: {} ({})", game, outcome, state.board());
    }

    let report = SelfplayReport {
        games: settings.games,
        draws,
        tally: state.tally(),
    };
    log!(
        "Self-play finished: engine {} wins, opponent {} wins, {} draws",
        report.tally.computer_wins,
        report.tally.human_wins,
        report.draws
    );

    if report.tally.human_wins > 0 {
        return Err(format!(
            "Engine lost {} of {} games (seed {})",
            report.tally.human_wins,
            report.games,
            rng.seed()
        ));
    }

    Ok(report)
}
