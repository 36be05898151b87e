//! Text rendering of the show list view states.

use client_core::{Show, SortMode, ViewState};
use serde::Serialize;

const GRID_COLUMNS: usize = 2;
const GRID_GUTTER: &str = "    ";

pub const LOADING_TEXT: &str = "Loading top rated shows...";

pub fn sort_label(sort: SortMode) -> &'static str {
    match sort {
        SortMode::Unsorted => "unsorted",
        SortMode::ByName => "by name",
    }
}

pub fn render_header(sort: SortMode) -> String {
    format!("Top Rated TV Shows  [sort: {}]", sort_label(sort))
}

pub fn render_view(state: &ViewState, image_base_url: &str) -> String {
    match state {
        ViewState::Loading => LOADING_TEXT.to_string(),
        ViewState::Error(message) => format!("Error : {message}"),
        ViewState::Success { shows, .. } if shows.is_empty() => "No shows to display.".to_string(),
        ViewState::Success { shows, .. } => render_grid(shows, image_base_url),
    }
}

/// Lays shows out two per row, each cell being the name above its poster URL.
fn render_grid(shows: &[Show], image_base_url: &str) -> String {
    let cells: Vec<[String; 2]> = shows
        .iter()
        .map(|show| [show.name.clone(), poster_text(show, image_base_url)])
        .collect();
    let width = cells
        .iter()
        .step_by(GRID_COLUMNS)
        .flat_map(|cell| cell.iter().map(|line| line.chars().count()))
        .max()
        .unwrap_or(0);

    let mut rows = Vec::new();
    for row in cells.chunks(GRID_COLUMNS) {
        for line in 0..2 {
            let mut text = pad(&row[0][line], width);
            if let Some(right) = row.get(1) {
                text.push_str(GRID_GUTTER);
                text.push_str(&right[line]);
            }
            rows.push(text.trim_end().to_string());
        }
        rows.push(String::new());
    }
    rows.pop();
    rows.join("\n")
}

fn poster_text(show: &Show, image_base_url: &str) -> String {
    if show.poster_path.is_empty() {
        "(no poster)".to_string()
    } else {
        show.poster_url(image_base_url)
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

#[derive(Debug, Serialize)]
struct JsonShow<'a> {
    name: &'a str,
    poster_path: &'a str,
    poster_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
enum JsonView<'a> {
    Loading,
    Success {
        sort: SortMode,
        shows: Vec<JsonShow<'a>>,
    },
    Error {
        message: &'a str,
    },
}

pub fn render_json(state: &ViewState, image_base_url: &str) -> serde_json::Result<String> {
    let view = match state {
        ViewState::Loading => JsonView::Loading,
        ViewState::Error(message) => JsonView::Error { message },
        ViewState::Success {
            shows,
            applied_sort,
        } => JsonView::Success {
            sort: *applied_sort,
            shows: shows
                .iter()
                .map(|show| JsonShow {
                    name: &show.name,
                    poster_path: &show.poster_path,
                    poster_url: (!show.poster_path.is_empty())
                        .then(|| show.poster_url(image_base_url)),
                })
                .collect(),
        },
    };
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://img";

    fn success(shows: Vec<Show>) -> ViewState {
        ViewState::Success {
            shows,
            applied_sort: SortMode::ByName,
        }
    }

    #[test]
    fn renders_loading_and_error() {
        assert_eq!(render_view(&ViewState::Loading, BASE), LOADING_TEXT);
        assert_eq!(
            render_view(&ViewState::Error("404 Not Found".into()), BASE),
            "Error : 404 Not Found"
        );
    }

    #[test]
    fn renders_two_column_grid() {
        let text = render_view(
            &success(vec![
                Show::new("Show A", "/a.jpg"),
                Show::new("Show B", "/b.jpg"),
                Show::new("Show Long Name", ""),
            ]),
            BASE,
        );
        let expected = [
            format!("{:<16}    Show B", "Show A"),
            "http://img/a.jpg    http://img/b.jpg".to_string(),
            String::new(),
            "Show Long Name".to_string(),
            "(no poster)".to_string(),
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn renders_empty_success() {
        assert_eq!(render_view(&success(Vec::new()), BASE), "No shows to display.");
    }

    #[test]
    fn header_names_sort_mode() {
        assert_eq!(
            render_header(SortMode::ByName),
            "Top Rated TV Shows  [sort: by name]"
        );
        assert_eq!(
            render_header(SortMode::Unsorted),
            "Top Rated TV Shows  [sort: unsorted]"
        );
    }

    #[test]
    fn json_view_tags_state() {
        let json = render_json(&success(vec![Show::new("Show A", "/a.jpg")]), BASE)
            .expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["state"], "success");
        assert_eq!(value["sort"], "by_name");
        assert_eq!(value["shows"][0]["name"], "Show A");
        assert_eq!(value["shows"][0]["poster_url"], "http://img/a.jpg");

        let json = render_json(&ViewState::Error("boom".into()), BASE).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["state"], "error");
        assert_eq!(value["message"], "boom");
    }
}
