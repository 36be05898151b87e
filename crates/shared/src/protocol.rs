use serde::{Deserialize, Serialize};

use crate::domain::Show;

/// One page of the `tv/top_rated` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowsPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Option<Vec<RemoteShow>>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl ShowsPage {
    pub fn into_shows(self) -> Vec<Show> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .map(Show::from)
            .collect()
    }
}

/// A show record as TMDB serves it. Only `name` and `poster_path` reach the
/// domain model; the rest is decoded so the page round-trips intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteShow {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

impl From<RemoteShow> for Show {
    fn from(value: RemoteShow) -> Self {
        Show {
            name: value.name,
            poster_path: value.poster_path.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP_RATED_PAGE: &str = r#"{
        "page": 1,
        "results": [
            {
                "backdrop_path": "/test_backdrop_path.jpg",
                "first_air_date": "2023-01-01",
                "genre_ids": [1, 2, 3],
                "id": 1001,
                "name": "Test Show",
                "origin_country": ["US"],
                "original_language": "en",
                "original_name": "Test Show Original",
                "overview": "Test overview",
                "popularity": 888.999,
                "poster_path": "/test_poster_path.jpg",
                "vote_average": 1.2,
                "vote_count": 12345
            },
            {
                "id": 1002,
                "name": "No Poster",
                "poster_path": null,
                "backdrop_path": null
            }
        ],
        "total_pages": 142,
        "total_results": 2839
    }"#;

    #[test]
    fn decodes_top_rated_page() {
        let page: ShowsPage = serde_json::from_str(TOP_RATED_PAGE).expect("decode");
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 142);
        assert_eq!(page.total_results, 2839);

        let results = page.results.as_ref().expect("results");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 1001);
        assert_eq!(results[0].genre_ids, vec![1, 2, 3]);
        assert_eq!(results[0].vote_count, 12345);
        assert_eq!(results[1].poster_path, None);
    }

    #[test]
    fn maps_records_to_shows_in_order() {
        let page: ShowsPage = serde_json::from_str(TOP_RATED_PAGE).expect("decode");
        assert_eq!(
            page.into_shows(),
            vec![
                Show::new("Test Show", "/test_poster_path.jpg"),
                Show::new("No Poster", ""),
            ]
        );
    }

    #[test]
    fn missing_results_map_to_empty_list() {
        let page: ShowsPage = serde_json::from_str(r#"{"page": 1}"#).expect("decode");
        assert!(page.into_shows().is_empty());

        let page: ShowsPage =
            serde_json::from_str(r#"{"page": 1, "results": null}"#).expect("decode");
        assert!(page.into_shows().is_empty());
    }
}
