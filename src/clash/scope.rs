use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Which leaderboard to query: the worldwide one or a single location's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LocationScope {
    #[default]
    Global,
    Location(i64),
}

impl LocationScope {
    pub fn rankings_path(&self) -> String {
        match self {
            Self::Global => "locations/global/rankings/players".to_string(),
            Self::Location(id) => format!("locations/{id}/rankings/players"),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }
}

impl fmt::Display for LocationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Location(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for LocationScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("global") {
            return Ok(Self::Global);
        }

        s.parse::<i64>()
            .map(Self::Location)
            .map_err(|_| AppError::InvalidLocation(s.to_string()))
    }
}
