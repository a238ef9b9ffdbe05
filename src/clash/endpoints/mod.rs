mod battle_log;
mod locations;
mod player;
mod rankings;

pub use rankings::{DEFAULT_RANKING_LIMIT, MAX_RANKING_LIMIT, clamp_limit};
