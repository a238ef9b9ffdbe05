use std::fmt;

use reqwest::{Request, Url, header::ACCEPT};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::ApiConfig;
use crate::error::AppError;

use super::types::ApiErrorBody;

/// Authenticated client for the Clash Royale REST API.
///
/// Holds no mutable state: the base address and credential are fixed at
/// construction, so one instance can be shared behind an `Arc`.
#[derive(Clone)]
pub struct ClashClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for ClashClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClashClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ClashClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request for `path` (relative to the base address) with the
    /// bearer credential and JSON accept header attached.
    pub fn build_request(&self, path: &str, query: &[(&str, String)]) -> Result<Request, AppError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| AppError::InvalidUrl(format!("{raw} ({e})")))?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(AppError::InvalidUrl(raw));
        }

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .build()?)
    }

    /// Execute a GET and decode the body into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let request = self.build_request(path, query)?;
        trace!(url = %request.url(), "👑 GET");

        let res = self.http.execute(request).await?;
        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), path, "👑 ⚠️ Request rejected");

            return Err(match serde_json::from_slice::<ApiErrorBody>(&body) {
                Ok(err) => AppError::Server {
                    status: status.as_u16(),
                    reason: err.reason,
                    message: err.message,
                },
                Err(_) => AppError::Status(status.as_u16()),
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            debug!(
                error = %e,
                path,
                body = %String::from_utf8_lossy(&body),
                "👑 ❌ Response did not match the expected shape"
            );
            AppError::Decoding(e)
        })
    }
}
