//! Client side of the top rated TV show list: TMDB transport, the show
//! repository that normalizes its outcomes, and the list controller that owns
//! what the presentation layer renders.

pub mod controller;
pub mod error;
pub mod repository;
pub mod transport;

pub use controller::{ShowListController, ViewState};
pub use repository::{FetchResult, ShowRepository, TmdbShowRepository, TOP_RATED_PAGE};
pub use shared::domain::{Show, SortMode, IMAGE_BASE_URL};
pub use transport::{ShowsApi, TmdbClient, TmdbClientOptions};
