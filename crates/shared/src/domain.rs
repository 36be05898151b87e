use serde::{Deserialize, Serialize};

/// Base URL poster paths are resolved against when no other base is configured.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A show as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub name: String,
    pub poster_path: String,
}

impl Show {
    pub fn new(name: impl Into<String>, poster_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            poster_path: poster_path.into(),
        }
    }

    pub fn full_poster_path(&self) -> String {
        self.poster_url(IMAGE_BASE_URL)
    }

    pub fn poster_url(&self, image_base_url: &str) -> String {
        format!("{image_base_url}{}", self.poster_path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Unsorted,
    ByName,
}

impl SortMode {
    /// The mode the sort button switches to from `self`.
    pub fn toggled(self) -> Self {
        match self {
            SortMode::Unsorted => SortMode::ByName,
            SortMode::ByName => SortMode::Unsorted,
        }
    }

    /// Returns `shows` reordered for this mode.
    ///
    /// `ByName` is a stable sort on the raw bytes of `name`, so shows sharing a
    /// name keep their fetch order and re-sorting a sorted list is a no-op.
    pub fn apply(self, shows: &[Show]) -> Vec<Show> {
        let mut ordered = shows.to_vec();
        if self == SortMode::ByName {
            ordered.sort_by(|a, b| a.name.cmp(&b.name));
        }
        ordered
    }
}
