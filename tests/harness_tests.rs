//! End-to-end flows with EffectStoreTestHarness
//!
//! Keystrokes go through the component, the resulting actions through the
//! reducer, and async completions are simulated with `complete_action`.

use pretty_assertions::assert_eq;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{DataResource, EventKind};
use surfapp::{
    action::Action,
    components::{Component, SearchBox, SearchBoxProps, SurfView, SurfViewProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, Location, MarineConditions, MarineSnapshot, WeatherSnapshot},
};

fn london() -> Location {
    Location {
        name: "London".into(),
        latitude: 51.50853,
        longitude: -0.12574,
        country: Some("United Kingdom".into()),
        admin1: Some("England".into()),
        feature_code: Some("PPLC".into()),
        elevation: Some(25.0),
        timezone: Some("Europe/London".into()),
    }
}

fn london_ontario() -> Location {
    Location {
        name: "London".into(),
        latitude: 42.98339,
        longitude: -81.23304,
        country: Some("Canada".into()),
        admin1: Some("Ontario".into()),
        feature_code: Some("PPL".into()),
        elevation: Some(252.0),
        timezone: Some("America/Toronto".into()),
    }
}

fn mock_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature: 14.6,
        wind_speed: 18.2,
        weather_code: Some(3),
        description: "Overcast".into(),
        today_max: 16.0,
        today_min: 9.4,
    }
}

fn mock_marine() -> MarineSnapshot {
    let observed_at = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    MarineSnapshot::Ready(MarineConditions {
        wave_height: Some(0.8),
        sea_surface_temperature: Some(11.3),
        observed_at: Some(observed_at),
    })
}

type Harness = EffectStoreTestHarness<AppState, Action, Effect>;

/// Type characters one at a time through the search box, dispatching each
/// resulting action so the next keystroke sees the updated query.
///
/// Uses `char_key` rather than key strings so capitals reach the input as typed.
fn type_text(harness: &mut Harness, component: &mut SearchBox, text: &str) -> Vec<Action> {
    let mut typed = Vec::new();
    for c in text.chars() {
        let actions: Vec<_> = {
            let props = SearchBoxProps {
                state: harness.state(),
                is_focused: true,
            };
            component
                .handle_event(&EventKind::Key(char_key(c)), props)
                .into_iter()
                .collect()
        };
        for action in actions {
            harness.dispatch_collect(action.clone());
            typed.push(action);
        }
    }
    typed
}

fn press(harness: &mut Harness, component: &mut SearchBox, code: KeyCode) -> Vec<Action> {
    let actions: Vec<_> = {
        let props = SearchBoxProps {
            state: harness.state(),
            is_focused: true,
        };
        component
            .handle_event(&EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE)), props)
            .into_iter()
            .collect()
    };
    for action in &actions {
        harness.dispatch_collect(action.clone());
    }
    actions
}

// ============================================================================
// Search flow
// ============================================================================

#[test]
fn test_search_select_and_fetch_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = SearchBox::new();

    let typed = type_text(&mut harness, &mut component, "Lon");
    assert_eq!(typed.len(), 3);
    harness.assert_state(|s| s.query == "Lon" && s.search_loading);

    // Every keystroke asks for a (debounced) search with the current text
    let effects = harness.drain_effects();
    effects.effects_count(3);
    effects.effects_all_match(|e| matches!(e, Effect::SearchLocations { .. }));
    assert_eq!(
        effects.last(),
        Some(&Effect::SearchLocations {
            query: "Lon".into()
        })
    );

    // Debounced search completes
    harness.complete_action(Action::SearchDidLoad {
        query: "Lon".into(),
        results: vec![london(), london_ontario()],
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));
    harness.assert_state(|s| s.candidates.len() == 2 && !s.search_loading);

    // Enter on the highlighted (first) row
    let confirmed = press(&mut harness, &mut component, KeyCode::Enter);
    assert_eq!(confirmed, vec![Action::SearchConfirm]);
    harness.assert_state(|s| s.query == "London");
    harness.assert_state(|s| s.candidates.is_empty());
    harness.assert_state(|s| {
        s.selection.as_ref().and_then(|l| l.admin1.as_deref()) == Some("England")
    });
    harness.assert_state(|s| s.weather.is_loading() && s.marine.is_loading());

    let effects = harness.drain_effects();
    effects.effects_count(3);
    effects.effects_first_matches(|e| matches!(e, Effect::CancelSearch));
    effects.effects_none_match(|e| matches!(e, Effect::SearchLocations { .. }));

    // Marine arrives first; weather is still loading
    harness.complete_action(Action::MarineDidLoad {
        selection_id: 1,
        marine: mock_marine(),
    });
    harness.process_emitted();
    harness.assert_state(|s| s.marine.is_loaded() && s.weather.is_loading());

    harness.complete_action(Action::WeatherDidLoad {
        selection_id: 1,
        weather: mock_weather(),
    });
    harness.process_emitted();
    harness.assert_state(|s| s.weather.data().map(|w| w.description.as_str()) == Some("Overcast"));

    // Editing the selected name appends at the end and starts a new search
    type_text(&mut harness, &mut component, "x");
    harness.assert_state(|s| s.query == "Londonx" && s.search_loading);
    press(&mut harness, &mut component, KeyCode::Backspace);
    press(&mut harness, &mut component, KeyCode::Backspace);
    harness.assert_state(|s| s.query == "Londo");
    let effects = harness.drain_effects();
    assert_eq!(
        effects.last(),
        Some(&Effect::SearchLocations {
            query: "Londo".into()
        })
    );
}

#[test]
fn test_startup_query_is_editable_at_end() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = SearchBox::new();

    // As if launched with a query
    harness.dispatch_collect(Action::SearchQueryChange("Honolulu".into()));
    harness.drain_effects();

    type_text(&mut harness, &mut component, ", HI");
    harness.assert_state(|s| s.query == "Honolulu, HI");
}

#[test]
fn test_highlight_then_confirm_picks_second_candidate() {
    let state = AppState {
        candidates: vec![london(), london_ontario()],
        ..AppState::with_query("Lon")
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);

    harness.dispatch_collect(Action::SearchHighlight(1));
    harness.assert_state(|s| s.highlighted == 1);

    harness.dispatch_collect(Action::SearchConfirm);
    harness.assert_state(|s| {
        s.selection.as_ref().and_then(|l| l.country.as_deref()) == Some("Canada")
    });

    let effects = harness.drain_effects();
    assert!(effects
        .iter()
        .any(|e| matches!(e, Effect::FetchMarine { latitude, .. } if *latitude == 42.98339)));
}

#[test]
fn test_whitespace_query_never_searches() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchQueryChange("   ".into()));

    harness.assert_state(|s| !s.search_loading && s.candidates.is_empty());
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_none_match(|e| matches!(e, Effect::SearchLocations { .. }));
}

#[test]
fn test_late_search_after_selection_is_dropped() {
    let state = AppState {
        candidates: vec![london()],
        ..AppState::with_query("Lon")
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);

    harness.dispatch_collect(Action::LocationSelect(0));
    harness.drain_effects();

    harness.complete_action(Action::SearchDidLoad {
        query: "London".into(),
        results: vec![london(), london_ontario()],
    });
    let (changed, _) = harness.process_emitted();

    assert_eq!(changed, 0);
    harness.assert_state(|s| s.candidates.is_empty());
}

#[test]
fn test_reselect_discards_previous_fetches() {
    let state = AppState {
        candidates: vec![london()],
        ..AppState::with_query("Lon")
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);
    harness.dispatch_collect(Action::LocationSelect(0));

    // Search again and pick the Canadian London
    harness.dispatch_collect(Action::SearchQueryChange("London, ON".into()));
    harness.dispatch_collect(Action::SearchDidLoad {
        query: "London, ON".into(),
        results: vec![london_ontario()],
    });
    harness.dispatch_collect(Action::LocationSelect(0));
    harness.assert_state(|s| s.selection_id == 2);

    // First selection's responses land late
    harness.complete_action(Action::WeatherDidLoad {
        selection_id: 1,
        weather: mock_weather(),
    });
    harness.complete_action(Action::MarineDidLoad {
        selection_id: 1,
        marine: mock_marine(),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!((changed, total), (0, 2));
    harness.assert_state(|s| s.weather.is_loading() && s.marine.is_loading());
}

#[test]
fn test_weather_error_keeps_loading_look() {
    let state = AppState {
        selection: Some(london()),
        selection_id: 4,
        weather: DataResource::Loading,
        marine: DataResource::Loaded(MarineSnapshot::Unavailable),
        ..AppState::with_query("London")
    };
    let mut harness = EffectStoreTestHarness::new(state, reducer);

    harness.complete_action(Action::WeatherDidError {
        selection_id: 4,
        error: "request failed".into(),
    });
    harness.process_emitted();
    harness.assert_state(|s| s.weather.error() == Some("request failed"));

    let mut view = SurfView::new();
    let output = harness.render_plain(120, 40, |frame, area, state| {
        let props = SurfViewProps {
            state,
            is_focused: true,
        };
        view.render(frame, area, props);
    });

    assert!(
        !output.contains("°C"),
        "Failed weather should not show a temperature:\n{}",
        output
    );
    assert!(output.contains("Marine data not available"));
}

#[test]
fn test_dispatch_all() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let results = harness.dispatch_all([
        Action::SearchQueryChange("P".into()),
        Action::SearchQueryChange("Pa".into()),
        Action::SearchQueryChange("Par".into()),
        Action::Quit,
    ]);

    assert_eq!(results, vec![true, true, true, false]);
    harness.assert_state(|s| s.query == "Par");
}
