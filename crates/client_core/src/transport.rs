//! HTTP access to the TMDB `tv/top_rated` listing.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{error::ApiError, protocol::ShowsPage};
use tracing::{info, warn};
use url::Url;

use crate::error::{ClientBuildError, TransportError};

pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org";
pub const DEFAULT_LANGUAGE: &str = "en-US";
const TOP_RATED_PATH: &str = "3/tv/top_rated";

/// Remote source of top rated show pages.
///
/// `Ok(None)` means the server answered 2xx without a body.
#[async_trait]
pub trait ShowsApi: Send + Sync {
    async fn top_rated_shows(&self, page: u32) -> Result<Option<ShowsPage>, TransportError>;
}

#[derive(Debug, Clone)]
pub struct TmdbClientOptions {
    pub api_url: String,
    pub api_key: String,
    pub language: String,
    pub timeout: Option<Duration>,
}

impl TmdbClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(options: TmdbClientOptions) -> Result<Self, ClientBuildError> {
        let endpoint = top_rated_endpoint(&options.api_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
            api_key: options.api_key,
            language: options.language,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ShowsApi for TmdbClient {
    async fn top_rated_shows(&self, page: u32) -> Result<Option<ShowsPage>, TransportError> {
        let started = Instant::now();
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(&[("page", page)])
            .send()
            .await
            .map_err(client_error)?;

        let status = response.status();
        info!(
            method = "GET",
            path = self.endpoint.path(),
            page,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tmdb: request finished"
        );

        let body = response.bytes().await.map_err(client_error)?;
        if !status.is_success() {
            let message = status_message(status, &body);
            warn!(status = status.as_u16(), %message, "tmdb: request rejected");
            return Err(TransportError::status(status.as_u16(), message));
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice::<Option<ShowsPage>>(&body)
            .map_err(|e| TransportError::client(format!("invalid top rated response: {e}")))
    }
}

fn top_rated_endpoint(api_url: &str) -> Result<Url, ClientBuildError> {
    let invalid = |source| ClientBuildError::InvalidApiUrl {
        url: api_url.to_string(),
        source,
    };

    let mut base = Url::parse(api_url.trim()).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(TOP_RATED_PATH).map_err(invalid)
}

/// Prefers TMDB's own `status_message`, falling back to the status line.
fn status_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(api_error) = serde_json::from_slice::<ApiError>(body) {
        if !api_error.status_message.trim().is_empty() {
            return api_error.status_message;
        }
    }

    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => format!("HTTP {}", status.as_u16()),
    }
}

// The request URL carries the api key.
fn client_error(err: reqwest::Error) -> TransportError {
    TransportError::client(err.without_url().to_string())
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
