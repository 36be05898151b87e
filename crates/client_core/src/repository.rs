use std::sync::Arc;

use async_trait::async_trait;
use shared::domain::Show;
use tracing::{debug, warn};

use crate::{error::FETCH_ERROR_FALLBACK, transport::ShowsApi};

/// Only the first page of the listing is ever requested.
pub const TOP_RATED_PAGE: u32 = 1;

/// Outcome of one fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Success(Vec<Show>),
    Failure(String),
}

#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// Performs exactly one remote call and folds every outcome into a
    /// [`FetchResult`]. No retries, no caching.
    async fn fetch_top_rated_shows(&self) -> FetchResult;
}

pub struct TmdbShowRepository {
    api: Arc<dyn ShowsApi>,
}

impl TmdbShowRepository {
    pub fn new(api: Arc<dyn ShowsApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ShowRepository for TmdbShowRepository {
    async fn fetch_top_rated_shows(&self) -> FetchResult {
        match self.api.top_rated_shows(TOP_RATED_PAGE).await {
            Ok(page) => {
                let shows = page.map(|page| page.into_shows()).unwrap_or_default();
                debug!(count = shows.len(), "repository: top rated shows fetched");
                FetchResult::Success(shows)
            }
            Err(err) => {
                let message = err.message().unwrap_or(FETCH_ERROR_FALLBACK).to_string();
                warn!(status = err.status_code(), %message, "repository: fetch failed");
                FetchResult::Failure(message)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/repository_tests.rs"]
mod tests;
