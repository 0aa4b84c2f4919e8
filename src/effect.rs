//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Debounced geocoding search for the query
    SearchLocations { query: String },
    /// Drop any pending or in-flight search
    CancelSearch,
    /// Fetch the forecast for the selection
    FetchWeather {
        selection_id: u64,
        latitude: f64,
        longitude: f64,
    },
    /// Fetch marine conditions for the selection
    FetchMarine {
        selection_id: u64,
        latitude: f64,
        longitude: f64,
    },
}
