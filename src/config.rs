//! Endpoint and timing configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_MARINE_URL: &str = "https://marine-api.open-meteo.com";

/// Quiet period before a typed query is sent to the geocoder.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the three Open-Meteo services live.
///
/// Base URLs carry no trailing path; the client appends `/v1/...`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub geocoding_url: String,
    pub weather_url: String,
    pub marine_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            marine_url: DEFAULT_MARINE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Point all three services at one host (used with mock servers).
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            geocoding_url: base_url.clone(),
            weather_url: base_url.clone(),
            marine_url: base_url,
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub(crate) fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_open_meteo() {
        let config = ApiConfig::default();
        assert_eq!(config.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(config.weather_url, DEFAULT_WEATHER_URL);
        assert_eq!(config.marine_url, DEFAULT_MARINE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_single_host() {
        let config = ApiConfig::single_host("http://127.0.0.1:9000/");
        assert_eq!(config.marine_url, "http://127.0.0.1:9000/");
        assert_eq!(trim_base(&config.marine_url), "http://127.0.0.1:9000");
    }
}
