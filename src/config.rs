use std::env;

use crate::error::AppError;
use crate::logging::LogFormat;

pub const DEFAULT_API_BASE_URL: &str = "https://api.clashroyale.com/v1";
const DEFAULT_DATABASE_URL: &str = "sqlite:royale-stats.db";

/// Address and credential of the Clash Royale API.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

// The token never ends up in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub database_url: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let token = lookup("CLASH_API_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Config("CLASH_API_TOKEN must be set".into()))?;

        let base_url =
            lookup("CLASH_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.into());

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            api: ApiConfig::new(base_url, token.trim()),
            database_url,
            log_format,
        })
    }
}
