//! Open-Meteo API client (geocoding, forecast, marine)

use chrono::NaiveDateTime;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{trim_base, ApiConfig};
use crate::format::weather_description;
use crate::state::{Location, MarineConditions, MarineSnapshot, WeatherSnapshot, MAX_CANDIDATES};

/// Errors at the HTTP boundary; callers degrade them to empty/unknown states.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("response parse error: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(&'static str),
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
    feature_code: Option<String>,
    elevation: Option<f64>,
    timezone: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            name: result.name,
            latitude: result.latitude,
            longitude: result.longitude,
            country: result.country,
            admin1: result.admin1,
            feature_code: result.feature_code,
            elevation: result.elevation,
            timezone: result.timezone,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: ForecastCurrent,
    daily: ForecastDaily,
}

#[derive(Debug, Deserialize)]
struct ForecastCurrent {
    temperature_2m: f64,
    weather_code: Option<u8>,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastDaily {
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct MarineResponse {
    current: Option<MarineCurrent>,
}

#[derive(Debug, Deserialize)]
struct MarineCurrent {
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    wave_height: Option<f64>,
    #[serde(default)]
    sea_surface_temperature: Option<f64>,
}

fn first_reading(values: &[Option<f64>], what: &'static str) -> Result<f64, ApiError> {
    values
        .first()
        .copied()
        .flatten()
        .ok_or(ApiError::Malformed(what))
}

/// Open-Meteo returns local times as `2024-01-15T12:00`.
fn parse_observed_at(time: &str) -> Option<NaiveDateTime> {
    let parsed = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S"));
    if parsed.is_err() {
        debug!(time, "unrecognized marine observation time");
    }
    parsed.ok()
}

/// Readings are kept even when the observation time is missing or garbled.
fn marine_from_response(data: MarineResponse) -> MarineSnapshot {
    let Some(current) = data.current else {
        return MarineSnapshot::Unavailable;
    };
    if current.wave_height.is_none() && current.sea_surface_temperature.is_none() {
        return MarineSnapshot::Unavailable;
    }
    MarineSnapshot::Ready(MarineConditions {
        wave_height: current.wave_height,
        sea_surface_temperature: current.sea_surface_temperature,
        observed_at: current.time.as_deref().and_then(parse_observed_at),
    })
}

// ============================================================================
// Client
// ============================================================================

/// Shared HTTP client for the three Open-Meteo services
#[derive(Clone, Debug)]
pub struct OpenMeteoClient {
    http: Client,
    config: ApiConfig,
}

impl OpenMeteoClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::Request)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/v1/search?name={}&count={}&language=en&format=json",
            trim_base(&self.config.geocoding_url),
            urlencoding::encode(query),
            MAX_CANDIDATES
        )
    }

    pub fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/v1/forecast?latitude={}&longitude={}&current=temperature_2m,weather_code,wind_speed_10m&daily=temperature_2m_max,temperature_2m_min&timezone=auto",
            trim_base(&self.config.weather_url),
            latitude,
            longitude
        )
    }

    pub fn marine_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/v1/marine?latitude={}&longitude={}&current=wave_height,sea_surface_temperature",
            trim_base(&self.config.marine_url),
            latitude,
            longitude
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await.map_err(ApiError::Request)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        response.json().await.map_err(ApiError::Decode)
    }

    /// Search for places matching a query; blank queries never hit the network.
    pub async fn search_locations(&self, query: &str) -> Result<Vec<Location>, ApiError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let data: GeocodingResponse = self.get_json(&self.search_url(query)).await?;

        Ok(data
            .results
            .unwrap_or_default()
            .into_iter()
            .take(MAX_CANDIDATES)
            .map(Location::from)
            .collect())
    }

    /// Current conditions plus today's high/low.
    pub async fn fetch_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, ApiError> {
        let data: ForecastResponse = self
            .get_json(&self.forecast_url(latitude, longitude))
            .await?;

        Ok(WeatherSnapshot {
            temperature: data.current.temperature_2m,
            wind_speed: data.current.wind_speed_10m,
            weather_code: data.current.weather_code,
            description: weather_description(data.current.weather_code).to_string(),
            today_max: first_reading(&data.daily.temperature_2m_max, "daily maximum")?,
            today_min: first_reading(&data.daily.temperature_2m_min, "daily minimum")?,
        })
    }

    /// Marine conditions; an all-null reading is `Unavailable`, not an error.
    pub async fn fetch_marine(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<MarineSnapshot, ApiError> {
        let data: MarineResponse = self.get_json(&self.marine_url(latitude, longitude)).await?;
        Ok(marine_from_response(data))
    }

    /// Search, logging failures and falling back to no candidates.
    pub async fn search_or_empty(&self, query: &str) -> Vec<Location> {
        match self.search_locations(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, query, "location search failed");
                Vec::new()
            }
        }
    }

    /// Marine lookup where a failed request reads the same as no coverage.
    pub async fn marine_or_unavailable(&self, latitude: f64, longitude: f64) -> MarineSnapshot {
        match self.fetch_marine(latitude, longitude).await {
            Ok(marine) => marine,
            Err(e) => {
                warn!(error = %e, latitude, longitude, "marine fetch failed");
                MarineSnapshot::Unavailable
            }
        }
    }
}
