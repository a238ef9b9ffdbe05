pub mod client;
pub mod endpoints;
pub mod scope;
pub mod tag;
pub mod types;

pub use client::ClashClient;
pub use endpoints::{DEFAULT_RANKING_LIMIT, MAX_RANKING_LIMIT};
pub use scope::LocationScope;
pub use tag::PlayerTag;
pub use types::*;
