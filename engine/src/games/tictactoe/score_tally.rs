use super::types::{Mark, Outcome};

/// Wins per side for the current session. Draws leave it unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub human_wins: u32,
    pub computer_wins: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::Cross) => self.human_wins += 1,
            Outcome::Win(Mark::Circle) => self.computer_wins += 1,
            Outcome::Draw | Outcome::InProgress => {}
        }
    }
}
