//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, MAX_CANDIDATES};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            state.query = query;
            state.candidates.clear();
            state.highlighted = 0;
            if state.query.trim().is_empty() {
                state.search_loading = false;
                return DispatchResult::changed_with(Effect::CancelSearch);
            }
            state.search_loading = true;
            DispatchResult::changed_with(Effect::SearchLocations {
                query: state.query.clone(),
            })
        }

        Action::SearchDidLoad { query, results } => {
            // Superseded by a newer keystroke or a selection
            if !state.search_loading || query != state.query {
                return DispatchResult::unchanged();
            }
            state.candidates = results;
            state.candidates.truncate(MAX_CANDIDATES);
            state.search_loading = false;
            state.highlighted = 0;
            DispatchResult::changed()
        }

        Action::SearchHighlight(index) => {
            if index < state.candidates.len() && index != state.highlighted {
                state.highlighted = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::SearchConfirm => {
            let index = state.highlighted;
            select_candidate(state, index)
        }

        // ===== Location actions =====
        Action::LocationSelect(index) => select_candidate(state, index),

        // ===== Weather actions =====
        Action::WeatherDidLoad {
            selection_id,
            weather,
        } => {
            if selection_id != state.selection_id {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(weather);
            DispatchResult::changed()
        }

        Action::WeatherDidError {
            selection_id,
            error,
        } => {
            if selection_id != state.selection_id {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(error);
            DispatchResult::changed()
        }

        // ===== Marine actions =====
        Action::MarineDidLoad {
            selection_id,
            marine,
        } => {
            if selection_id != state.selection_id {
                return DispatchResult::unchanged();
            }
            state.marine = DataResource::Loaded(marine);
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Enter the `selected` phase: both panels reset and fetch independently.
fn select_candidate(state: &mut AppState, index: usize) -> DispatchResult<Effect> {
    let Some(location) = state.candidates.get(index).cloned() else {
        return DispatchResult::unchanged();
    };

    state.selection_id = state.selection_id.wrapping_add(1);
    let selection_id = state.selection_id;
    let (latitude, longitude) = (location.latitude, location.longitude);

    state.candidates.clear();
    state.search_loading = false;
    state.highlighted = 0;
    state.query = location.name.clone();
    state.selection = Some(location);
    state.weather = DataResource::Loading;
    state.marine = DataResource::Loading;

    DispatchResult::changed_with_many(vec![
        Effect::CancelSearch,
        Effect::FetchWeather {
            selection_id,
            latitude,
            longitude,
        },
        Effect::FetchMarine {
            selection_id,
            latitude,
            longitude,
        },
    ])
}
