//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first (see `main.rs`), so
//! every variable below can live there during development. Invalid values
//! are logged and replaced by their defaults; only the API key has none.
//!
//! | variable              | default                                               |
//! |-----------------------|-------------------------------------------------------|
//! | `PLACES_API_KEY`      | unset: the places proxy answers `503`                 |
//! | `PLACES_SEARCH_URL`   | `https://places.googleapis.com/v1/places:searchText`  |
//! | `PLACES_DETAILS_URL`  | `https://places.googleapis.com/v1/places`             |
//! | `PLACES_TIMEOUT_SECS` | `10`                                                  |
//! | `HOST`                | `127.0.0.1`                                           |
//! | `PORT`                | `8080`                                                |
//! | `OPEN_BROWSER`        | `true`                                                |

use log::warn;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SEARCH_URL: &str = "https://places.googleapis.com/v1/places:searchText";
pub const DEFAULT_DETAILS_URL: &str = "https://places.googleapis.com/v1/places";

#[derive(Clone, Debug)]
pub struct PlacesConfig {
    pub api_key: Option<String>,
    pub search_url: String,
    pub details_url: String,
    pub timeout: Duration,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            details_url: DEFAULT_DETAILS_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub places: PlacesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            places: PlacesConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let text = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            host: text("HOST").unwrap_or(defaults.host),
            port: parsed(&text, "PORT").unwrap_or(defaults.port),
            open_browser: parsed(&text, "OPEN_BROWSER").unwrap_or(defaults.open_browser),
            places: PlacesConfig {
                api_key: text("PLACES_API_KEY"),
                search_url: text("PLACES_SEARCH_URL").unwrap_or(defaults.places.search_url),
                details_url: text("PLACES_DETAILS_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.places.details_url),
                timeout: parsed(&text, "PLACES_TIMEOUT_SECS")
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.places.timeout),
            },
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parsed<T, F>(text: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = text(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value '{}' for {}, using the default", raw, key);
            None
        }
    }
}
