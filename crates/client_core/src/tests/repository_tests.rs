use super::*;
use crate::error::TransportError;
use shared::protocol::{RemoteShow, ShowsPage};
use tokio::sync::Mutex;

struct StubShowsApi {
    response: Result<Option<ShowsPage>, TransportError>,
    requested_pages: Mutex<Vec<u32>>,
}

impl StubShowsApi {
    fn new(response: Result<Option<ShowsPage>, TransportError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            requested_pages: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ShowsApi for StubShowsApi {
    async fn top_rated_shows(&self, page: u32) -> Result<Option<ShowsPage>, TransportError> {
        self.requested_pages.lock().await.push(page);
        self.response.clone()
    }
}

fn remote_show(id: i64, name: &str, poster_path: &str) -> RemoteShow {
    RemoteShow {
        id,
        name: name.to_string(),
        poster_path: Some(poster_path.to_string()),
        backdrop_path: Some("/test_backdrop_path.jpg".to_string()),
        first_air_date: Some("2023-01-01".to_string()),
        genre_ids: vec![1, 2, 3],
        origin_country: vec!["US".to_string()],
        original_language: Some("en".to_string()),
        original_name: Some(format!("{name} Original")),
        overview: Some("Test overview".to_string()),
        popularity: 888.999,
        vote_average: 1.2,
        vote_count: 12345,
    }
}

fn page(results: Vec<RemoteShow>) -> ShowsPage {
    ShowsPage {
        page: 1,
        total_results: results.len() as u32,
        results: Some(results),
        total_pages: 1,
    }
}

#[tokio::test]
async fn maps_every_record_in_fetch_order() {
    let api = StubShowsApi::new(Ok(Some(page(vec![
        remote_show(1, "Show A", "/a"),
        remote_show(2, "Show F", "/f"),
        remote_show(3, "Show B", "/b"),
    ]))));
    let repository = TmdbShowRepository::new(api.clone());

    let result = repository.fetch_top_rated_shows().await;

    assert_eq!(
        result,
        FetchResult::Success(vec![
            Show::new("Show A", "/a"),
            Show::new("Show F", "/f"),
            Show::new("Show B", "/b"),
        ])
    );
    assert_eq!(*api.requested_pages.lock().await, vec![TOP_RATED_PAGE]);
}

#[tokio::test]
async fn absent_body_is_empty_success() {
    let repository = TmdbShowRepository::new(StubShowsApi::new(Ok(None)));
    assert_eq!(
        repository.fetch_top_rated_shows().await,
        FetchResult::Success(Vec::new())
    );
}

#[tokio::test]
async fn absent_results_are_empty_success() {
    let mut empty = page(Vec::new());
    empty.results = None;
    let repository = TmdbShowRepository::new(StubShowsApi::new(Ok(Some(empty))));
    assert_eq!(
        repository.fetch_top_rated_shows().await,
        FetchResult::Success(Vec::new())
    );
}

#[tokio::test]
async fn status_failure_surfaces_transport_message() {
    let repository = TmdbShowRepository::new(StubShowsApi::new(Err(TransportError::status(
        404,
        "404 Not Found",
    ))));
    assert_eq!(
        repository.fetch_top_rated_shows().await,
        FetchResult::Failure("404 Not Found".to_string())
    );
}

#[tokio::test]
async fn client_failure_surfaces_error_message() {
    let repository = TmdbShowRepository::new(StubShowsApi::new(Err(TransportError::client(
        "error sending request",
    ))));
    assert_eq!(
        repository.fetch_top_rated_shows().await,
        FetchResult::Failure("error sending request".to_string())
    );
}

#[tokio::test]
async fn client_failure_without_message_uses_fallback() {
    let repository = TmdbShowRepository::new(StubShowsApi::new(Err(TransportError::Client {
        message: None,
    })));
    assert_eq!(
        repository.fetch_top_rated_shows().await,
        FetchResult::Failure("Error while fetching data".to_string())
    );
}

#[tokio::test]
async fn each_call_hits_the_transport_once() {
    let api = StubShowsApi::new(Ok(None));
    let repository = TmdbShowRepository::new(api.clone());

    repository.fetch_top_rated_shows().await;
    repository.fetch_top_rated_shows().await;

    assert_eq!(api.requested_pages.lock().await.len(), 2);
}
