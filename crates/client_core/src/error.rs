use thiserror::Error;

pub use shared::error::{TransportError, FETCH_ERROR_FALLBACK};

#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid api url '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}
