use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context};
use client_core::{
    transport::{DEFAULT_API_URL, DEFAULT_LANGUAGE},
    TmdbClientOptions, IMAGE_BASE_URL,
};

pub const DEFAULT_CONFIG_FILE: &str = "tvshows.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub language: String,
    pub image_base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            api_key: None,
            language: DEFAULT_LANGUAGE.into(),
            image_base_url: IMAGE_BASE_URL.into(),
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn client_options(&self) -> anyhow::Result<TmdbClientOptions> {
        let Some(api_key) = self.api_key.as_deref().filter(|key| !key.trim().is_empty()) else {
            bail!(
                "missing TMDB api key; set TMDB_API_KEY, api_key in {DEFAULT_CONFIG_FILE}, or pass --api-key"
            );
        };

        Ok(TmdbClientOptions {
            api_url: self.api_url.clone(),
            api_key: api_key.to_string(),
            language: self.language.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Defaults, then `path` if it exists, then the process environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

fn load_settings_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;
    }

    if let Some(v) = env("TMDB_API_URL").or_else(|| env("APP__API_URL")) {
        settings.api_url = v;
    }
    if let Some(v) = env("TMDB_API_KEY").or_else(|| env("APP__API_KEY")) {
        settings.api_key = Some(v);
    }
    if let Some(v) = env("TMDB_LANGUAGE").or_else(|| env("APP__LANGUAGE")) {
        settings.language = v;
    }
    if let Some(v) = env("APP__IMAGE_BASE_URL") {
        settings.image_base_url = v;
    }
    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        let secs = v
            .trim()
            .parse::<u64>()
            .with_context(|| format!("APP__REQUEST_TIMEOUT_SECS must be whole seconds, got '{v}'"))?;
        settings.request_timeout_secs = Some(secs);
    }

    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let table: toml::Table = toml::from_str(raw)?;

    if let Some(v) = string_key(&table, "api_url")? {
        settings.api_url = v;
    }
    if let Some(v) = string_key(&table, "api_key")? {
        settings.api_key = Some(v);
    }
    if let Some(v) = string_key(&table, "language")? {
        settings.language = v;
    }
    if let Some(v) = string_key(&table, "image_base_url")? {
        settings.image_base_url = v;
    }
    match table.get("request_timeout_secs") {
        None => {}
        Some(toml::Value::Integer(secs)) if *secs >= 0 => {
            settings.request_timeout_secs = Some(*secs as u64);
        }
        Some(other) => bail!("request_timeout_secs must be a non-negative integer, got {other}"),
    }

    Ok(())
}

fn string_key(table: &toml::Table, key: &str) -> anyhow::Result<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::String(v)) => Ok(Some(v.clone())),
        Some(other) => bail!("{key} must be a string, got {other}"),
    }
}
