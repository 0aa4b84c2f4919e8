//! Actions: user intents and async results, categorized by prefix

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Location, MarineSnapshot, WeatherSnapshot};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search box text changed (debounced search follows)
    SearchQueryChange(String),

    /// Result: candidates for `query` (empty on failure)
    SearchDidLoad {
        query: String,
        results: Vec<Location>,
    },

    /// Move the dropdown highlight
    SearchHighlight(usize),

    /// Select the highlighted candidate
    SearchConfirm,

    // ===== Location category =====
    /// Commit to the candidate at this index
    LocationSelect(usize),

    // ===== Weather category =====
    /// Result: forecast loaded for selection `selection_id`
    WeatherDidLoad {
        selection_id: u64,
        weather: WeatherSnapshot,
    },

    /// Result: forecast request failed
    WeatherDidError { selection_id: u64, error: String },

    // ===== Marine category =====
    /// Result: marine lookup finished (failures arrive as `Unavailable`)
    MarineDidLoad {
        selection_id: u64,
        marine: MarineSnapshot,
    },

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}
