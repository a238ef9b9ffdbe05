use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid player tag: {0}")]
    InvalidTag(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Non-success response carrying the API's `{reason, message}` body.
    #[error("{message}")]
    Server {
        status: u16,
        reason: String,
        message: String,
    },

    #[error("Server returned status code: {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Server { status, .. } => Some(*status),
            AppError::Status(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
