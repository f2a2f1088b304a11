use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Strategy for the Cross side in self-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
pub enum OpponentKind {
    /// Uniformly random legal moves.
    #[default]
    Random,
    /// The engine's own best move for Cross.
    Perfect,
}
