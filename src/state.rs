//! Application state - single source of truth

use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// Maximum number of candidates kept from one search.
pub const MAX_CANDIDATES: usize = 10;

/// A place returned by the geocoding API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    /// First-level administrative region (state, province, ...)
    pub admin1: Option<String>,
    /// GeoNames feature class, e.g. `PPLC` for a capital
    pub feature_code: Option<String>,
    /// Meters above sea level
    pub elevation: Option<f64>,
    pub timezone: Option<String>,
}

impl Location {
    /// "admin1, country" with the region omitted when unknown.
    pub fn region_line(&self) -> String {
        let country = self.country.as_deref().unwrap_or_default();
        match self.admin1.as_deref() {
            Some(admin1) if !admin1.is_empty() => format!("{admin1}, {country}"),
            _ => country.to_string(),
        }
    }

    pub fn timezone_or_utc(&self) -> &str {
        match self.timezone.as_deref() {
            Some(tz) if !tz.is_empty() => tz,
            _ => "UTC",
        }
    }

    /// Elevation is only worth showing when it is known and non-zero.
    pub fn shown_elevation(&self) -> Option<f64> {
        self.elevation.filter(|meters| *meters != 0.0)
    }
}

/// Current conditions and today's range from the forecast API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    /// °C
    pub temperature: f64,
    /// km/h
    pub wind_speed: f64,
    /// WMO weather code
    pub weather_code: Option<u8>,
    pub description: String,
    pub today_max: f64,
    pub today_min: f64,
}

/// Marine readings for a point that has marine coverage
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarineConditions {
    /// Meters
    pub wave_height: Option<f64>,
    /// °C
    pub sea_surface_temperature: Option<f64>,
    /// Location-local observation time, if the response carried a usable one
    pub observed_at: Option<NaiveDateTime>,
}

/// Marine lookup outcome.
///
/// Inland points, all-null readings and failed requests all end up as
/// `Unavailable`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum MarineSnapshot {
    Ready(MarineConditions),
    Unavailable,
}

impl MarineSnapshot {
    pub fn is_available(&self) -> bool {
        matches!(self, MarineSnapshot::Ready(_))
    }
}

/// Where the current selection is in its fetch lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    Selected,
    WeatherReady,
    MarineReady,
    FullyReady,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Search ---
    /// Text in the search box
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Whether a search for `query` is pending or in flight
    #[debug(section = "Search", label = "Loading")]
    pub search_loading: bool,

    /// Candidates for the current query, in upstream order
    #[debug(section = "Search", label = "Candidates", debug_fmt)]
    pub candidates: Vec<Location>,

    /// Highlighted row in the dropdown
    #[debug(skip)]
    pub highlighted: usize,

    // --- Selection ---
    #[debug(section = "Selection", label = "Location", debug_fmt)]
    pub selection: Option<Location>,

    /// Bumped on every selection; fetch results carry the id they were issued for
    #[debug(section = "Selection", label = "Generation")]
    pub selection_id: u64,

    /// Weather lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherSnapshot>,

    /// Marine lifecycle: Empty → Loading → Loaded(Ready/Unavailable)
    #[debug(section = "Marine", label = "Data", debug_fmt)]
    pub marine: DataResource<MarineSnapshot>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: String::new(),
            search_loading: false,
            candidates: Vec::new(),
            highlighted: 0,
            selection: None,
            selection_id: 0,
            weather: DataResource::Empty,
            marine: DataResource::Empty,
        }
    }
}

impl AppState {
    /// State with the search box pre-filled (no search is issued by this alone)
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// The dropdown shows while a search is loading or there is something to pick.
    pub fn dropdown_visible(&self) -> bool {
        self.search_loading || !self.candidates.is_empty()
    }

    /// Empty-state message: a typed query that found nothing, before any selection.
    pub fn show_no_results(&self) -> bool {
        !self.query.is_empty()
            && !self.search_loading
            && self.candidates.is_empty()
            && self.selection.is_none()
    }

    pub fn highlighted_candidate(&self) -> Option<&Location> {
        self.candidates.get(self.highlighted)
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.selection.is_none() {
            return SelectionPhase::Idle;
        }
        match (self.weather.is_loaded(), self.marine.is_loaded()) {
            (true, true) => SelectionPhase::FullyReady,
            (true, false) => SelectionPhase::WeatherReady,
            (false, true) => SelectionPhase::MarineReady,
            (false, false) => SelectionPhase::Selected,
        }
    }
}
