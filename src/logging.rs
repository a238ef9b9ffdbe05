//! Simple tracing subscriber setup used by the application.

use std::str::FromStr;

use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal},
};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!("Unknown LOG_FORMAT: {other}"))),
        }
    }
}

pub fn init(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Pretty => builder.with_ansi(true).init(),
        LogFormat::Json => builder.json().init(),
    }

    tracing::info!(?format, "logger initialized");
}
