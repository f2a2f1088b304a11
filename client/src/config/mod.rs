mod config;
mod opponent_kind;
mod selfplay_config;

pub use config::{Config, get_config_manager};
pub use opponent_kind::OpponentKind;
pub use selfplay_config::SelfplayConfig;
