//! Search and fetch orchestration
//!
//! Owns the `ViewState` and runs the effects the reducer asks for. Network
//! calls and the debounce timer run as spawned tasks that report back over
//! a tokio channel; the owner of the `Orchestrator` feeds those events back
//! in with [`Orchestrator::dispatch`], so state is only ever touched from
//! one place.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::data::{ApiClients, ApiError};
use crate::debounce::Debouncer;
use crate::state::{Effect, Event, ViewState};

/// Capacity of the event channel
const EVENT_CHANNEL_SIZE: usize = 32;

pub struct Orchestrator {
    state: ViewState,
    clients: ApiClients,
    debouncer: Debouncer,
    debounce: Duration,
    events_tx: mpsc::Sender<Event>,
    events_rx: mpsc::Receiver<Event>,
}

impl Orchestrator {
    pub fn new(clients: ApiClients, debounce: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        Self {
            state: ViewState::new(),
            clients,
            debouncer: Debouncer::new(),
            debounce,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replaces the query text, (re)starting the debounce window
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(Event::QueryChanged(query.into()));
    }

    /// Selects the candidate at `index` in the current result list
    ///
    /// Returns false if there is no such candidate.
    pub fn select_candidate(&mut self, index: usize) -> bool {
        let Some(location) = self.state.candidates().get(index).cloned() else {
            return false;
        };
        self.dispatch(Event::LocationSelected(location));
        true
    }

    /// Applies an event and starts whatever work it requires
    pub fn dispatch(&mut self, event: Event) {
        for effect in self.state.apply(event) {
            self.run(effect);
        }
    }

    /// Waits for the next event produced by a timer or request
    pub async fn next_event(&mut self) -> Option<Event> {
        self.events_rx.recv().await
    }

    /// Waits for one event and applies it
    ///
    /// Returns false if the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.next_event().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleSearch { search_id } => {
                if self.debouncer.is_pending() {
                    debug!(search_id, "restarting debounce window");
                }
                let tx = self.events_tx.clone();
                self.debouncer.schedule(self.debounce, async move {
                    let _ = tx.send(Event::SearchFired { search_id }).await;
                });
            }
            Effect::CancelSearch => self.debouncer.cancel(),
            Effect::Search { search_id, query } => {
                let tx = self.events_tx.clone();
                let client = self.clients.geocoding.clone();
                tokio::spawn(async move {
                    let result = client.search_locations(&query).await;
                    if let Err(e) = &result {
                        log_failure("location search", e);
                    }
                    let result = result.map_err(|e| e.to_string());
                    let _ = tx.send(Event::SearchResolved { search_id, result }).await;
                });
            }
            Effect::FetchWeather {
                generation,
                latitude,
                longitude,
            } => {
                let tx = self.events_tx.clone();
                let client = self.clients.weather.clone();
                tokio::spawn(async move {
                    let result = client.fetch_weather(latitude, longitude).await;
                    if let Err(e) = &result {
                        log_failure("weather fetch", e);
                    }
                    let result = result.map_err(|e| e.to_string());
                    let _ = tx.send(Event::WeatherResolved { generation, result }).await;
                });
            }
            Effect::FetchMarine {
                generation,
                latitude,
                longitude,
            } => {
                let tx = self.events_tx.clone();
                let client = self.clients.marine.clone();
                tokio::spawn(async move {
                    let snapshot = match client.fetch_marine(latitude, longitude).await {
                        Ok(snapshot) => Some(snapshot),
                        Err(e) => {
                            debug!(latitude, longitude, reason = %e, "no marine data");
                            None
                        }
                    };
                    let _ = tx
                        .send(Event::MarineResolved {
                            generation,
                            snapshot,
                        })
                        .await;
                });
            }
        }
    }
}

/// Transport failures log at warn, malformed payloads at error
fn log_failure(operation: &str, e: &ApiError) {
    if e.is_transport() {
        warn!(operation, cause = %e, "request failed");
    } else {
        error!(operation, cause = %e, "unusable response");
    }
}
