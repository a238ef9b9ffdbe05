use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// A normalized player tag such as `#2PP`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerTag(String);

impl PlayerTag {
    /// Normalize user input: trim, upper-case and make sure the tag starts with `#`.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::InvalidTag(raw.to_string()));
        }

        Ok(Self(format!("#{}", body.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segment form of the tag, `#` included as `%23`.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PlayerTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
