//! UI-facing state for the top rated show list.
//!
//! [`ShowListController`] is the single writer of the list's [`ViewState`] and
//! [`SortMode`]. Presentation code reads both through `watch` receivers or
//! streams and drives the controller with `fetch`, `retry` and `set_sorting`.

use std::sync::Arc;

use shared::domain::{Show, SortMode};
use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, warn};

use crate::repository::{FetchResult, ShowRepository};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Success {
        shows: Vec<Show>,
        applied_sort: SortMode,
    },
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn shows(&self) -> Option<&[Show]> {
        match self {
            Self::Success { shows, .. } => Some(shows),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Default)]
struct ListState {
    /// Last successful fetch, in server order.
    original_shows: Vec<Show>,
    sort_mode: SortMode,
}

pub struct ShowListController {
    repository: Arc<dyn ShowRepository>,
    state: Mutex<ListState>,
    view_state: watch::Sender<ViewState>,
    sort_mode: watch::Sender<SortMode>,
}

impl ShowListController {
    pub fn new(repository: Arc<dyn ShowRepository>) -> Arc<Self> {
        let (view_state, _) = watch::channel(ViewState::Loading);
        let (sort_mode, _) = watch::channel(SortMode::default());
        Arc::new(Self {
            repository,
            state: Mutex::new(ListState::default()),
            view_state,
            sort_mode,
        })
    }

    /// Fetches once and publishes the result.
    ///
    /// The repository call runs without holding the state lock, so
    /// overlapping fetches are allowed and whichever finishes last decides
    /// the visible state.
    pub async fn fetch(&self) {
        debug!("show list: fetch started");
        let result = self.repository.fetch_top_rated_shows().await;

        let mut state = self.state.lock().await;
        match result {
            FetchResult::Success(shows) => {
                info!(count = shows.len(), sort = ?state.sort_mode, "show list: fetch succeeded");
                state.original_shows = shows;
                let applied_sort = state.sort_mode;
                self.view_state.send_replace(ViewState::Success {
                    shows: applied_sort.apply(&state.original_shows),
                    applied_sort,
                });
            }
            FetchResult::Failure(message) => {
                warn!(%message, "show list: fetch failed");
                self.view_state.send_replace(ViewState::Error(message));
            }
        }
    }

    pub async fn retry(&self) {
        self.fetch().await;
    }

    /// Runs [`fetch`](Self::fetch) on the runtime so the caller never waits on
    /// the network.
    pub fn spawn_fetch(self: &Arc<Self>) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.fetch().await })
    }

    pub fn spawn_retry(self: &Arc<Self>) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.retry().await })
    }

    /// Records `mode` and re-sorts the cached list. Only a `Success` view is
    /// rewritten; `Loading` and `Error` stay as they are.
    pub async fn set_sorting(&self, mode: SortMode) {
        let mut state = self.state.lock().await;
        self.apply_sorting(&mut state, mode);
    }

    /// Flips between `Unsorted` and `ByName`, returning the new mode.
    pub async fn toggle_sorting(&self) -> SortMode {
        let mut state = self.state.lock().await;
        let next = state.sort_mode.toggled();
        self.apply_sorting(&mut state, next);
        next
    }

    fn apply_sorting(&self, state: &mut ListState, mode: SortMode) {
        state.sort_mode = mode;
        self.sort_mode.send_replace(mode);

        let shows = mode.apply(&state.original_shows);
        let resorted = self.view_state.send_if_modified(|current| {
            if matches!(current, ViewState::Success { .. }) {
                *current = ViewState::Success {
                    shows,
                    applied_sort: mode,
                };
                true
            } else {
                false
            }
        });
        debug!(sort = ?mode, resorted, "show list: sort mode changed");
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state.borrow().clone()
    }

    pub fn sort_mode(&self) -> SortMode {
        *self.sort_mode.borrow()
    }

    pub fn subscribe_view_state(&self) -> watch::Receiver<ViewState> {
        self.view_state.subscribe()
    }

    pub fn subscribe_sort_mode(&self) -> watch::Receiver<SortMode> {
        self.sort_mode.subscribe()
    }

    /// Yields the current state, then every later one.
    pub fn view_state_stream(&self) -> WatchStream<ViewState> {
        WatchStream::new(self.subscribe_view_state())
    }

    pub fn sort_mode_stream(&self) -> WatchStream<SortMode> {
        WatchStream::new(self.subscribe_sort_mode())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
