//! Clash Royale statistics client.
//!
//! The library offers a typed client for the public Clash Royale API, per
//! screen fetch state with derived statistics, and a small SQLite store for
//! favorite players and saved matches.

pub mod clash;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod state;

pub use clash::ClashClient;
pub use config::{ApiConfig, Config};
pub use error::AppError;
