//! Effect runner - turns reducer effects into keyed background tasks

use std::time::Duration;

use tui_dispatch::{TaskKey, TaskManager};

use crate::action::Action;
use crate::api::OpenMeteoClient;
use crate::effect::Effect;

/// Task key shared by every debounced search, so a newer one replaces the last
pub const SEARCH_TASK: &str = "location_search";
pub const WEATHER_TASK: &str = "weather";
pub const MARINE_TASK: &str = "marine";

/// Runs effects against the Open-Meteo client
#[derive(Clone, Debug)]
pub struct EffectRunner {
    client: OpenMeteoClient,
    debounce: Duration,
}

impl EffectRunner {
    pub fn new(client: OpenMeteoClient, debounce: Duration) -> Self {
        Self { client, debounce }
    }

    /// Spawn (or cancel) the task for one effect. Must run inside a tokio runtime.
    pub fn handle(&self, effect: Effect, tasks: &mut TaskManager<Action>) {
        match effect {
            Effect::SearchLocations { query } => {
                let client = self.client.clone();
                tasks.debounce(SEARCH_TASK, self.debounce, async move {
                    tracing::debug!(%query, "searching locations");
                    let results = client.search_or_empty(&query).await;
                    Action::SearchDidLoad { query, results }
                });
            }
            Effect::CancelSearch => {
                tasks.cancel(&TaskKey::new(SEARCH_TASK));
            }
            Effect::FetchWeather {
                selection_id,
                latitude,
                longitude,
            } => {
                let client = self.client.clone();
                tasks.spawn(WEATHER_TASK, async move {
                    match client.fetch_weather(latitude, longitude).await {
                        Ok(weather) => Action::WeatherDidLoad {
                            selection_id,
                            weather,
                        },
                        Err(e) => {
                            tracing::warn!(error = %e, latitude, longitude, "weather fetch failed");
                            Action::WeatherDidError {
                                selection_id,
                                error: e.to_string(),
                            }
                        }
                    }
                });
            }
            Effect::FetchMarine {
                selection_id,
                latitude,
                longitude,
            } => {
                let client = self.client.clone();
                tasks.spawn(MARINE_TASK, async move {
                    let marine = client.marine_or_unavailable(latitude, longitude).await;
                    Action::MarineDidLoad {
                        selection_id,
                        marine,
                    }
                });
            }
        }
    }
}
