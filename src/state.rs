//! View state and the reducer that drives it
//!
//! `ViewState` is everything the renderer needs. It only changes through
//! [`ViewState::apply`], which takes a tagged [`Event`] and returns the
//! [`Effect`]s the runtime has to perform. Search results are tagged with a
//! search id and weather/marine results with a selection generation, so
//! results that arrive after the user moved on are dropped.

use serde::Serialize;
use tracing::{debug, info};

use crate::data::{LocationCandidate, MarineSnapshot, WeatherSnapshot};

/// Queries shorter than this (in characters) never hit the geocoder
pub const MIN_QUERY_LEN: usize = 2;

/// Banner text when a location search fails
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search locations. Please try again.";

/// Banner text when the weather fetch fails
pub const WEATHER_FAILED_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

/// Progress of the location search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SearchStatus {
    /// Nothing to show: query too short, or a location was just picked
    Idle,
    /// Waiting out the quiet period after a keystroke
    Debouncing,
    /// Request in flight
    Searching,
    /// Candidates in API order; may be empty
    Results(Vec<LocationCandidate>),
    /// The last search failed
    Failed,
}

/// Weather half of a selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WeatherStatus {
    Loading,
    Loaded(WeatherSnapshot),
    Failed { message: String },
}

/// Marine half of a selection
///
/// A failed request and a response without sea data both end in
/// `Unavailable`; the UI shows them the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MarineStatus {
    Loading,
    Available(MarineSnapshot),
    Unavailable,
}

/// The chosen location and the state of its two fetches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    /// Generation this selection was made in
    pub generation: u64,
    pub location: LocationCandidate,
    pub weather: WeatherStatus,
    pub marine: MarineStatus,
}

/// Inputs to the reducer
#[derive(Debug, Clone)]
pub enum Event {
    /// The search box text changed
    QueryChanged(String),
    /// The debounce timer for `search_id` expired
    SearchFired { search_id: u64 },
    /// A location search finished
    SearchResolved {
        search_id: u64,
        result: Result<Vec<LocationCandidate>, String>,
    },
    /// The user picked a candidate
    LocationSelected(LocationCandidate),
    /// The weather fetch for `generation` finished
    WeatherResolved {
        generation: u64,
        result: Result<WeatherSnapshot, String>,
    },
    /// The marine fetch for `generation` finished; `None` means no sea data
    MarineResolved {
        generation: u64,
        snapshot: Option<MarineSnapshot>,
    },
}

/// Work the reducer asks the runtime to do
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// (Re)start the debounce timer; any pending timer is cancelled
    ScheduleSearch { search_id: u64 },
    /// Drop the pending debounce timer, if any
    CancelSearch,
    /// Send the geocoding request
    Search { search_id: u64, query: String },
    FetchWeather {
        generation: u64,
        latitude: f64,
        longitude: f64,
    },
    FetchMarine {
        generation: u64,
        latitude: f64,
        longitude: f64,
    },
}

/// Everything the renderer consumes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub query: String,
    pub search: SearchStatus,
    /// Tag of the newest search; bumped on every query change
    pub search_id: u64,
    pub selection: Option<Selection>,
    /// Bumped on every selection
    pub generation: u64,
    /// Top-level error banner
    pub error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            search: SearchStatus::Idle,
            search_id: 0,
            selection: None,
            generation: 0,
            error: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event and returns the effects it requires
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::QueryChanged(query) => self.on_query_changed(query),
            Event::SearchFired { search_id } => self.on_search_fired(search_id),
            Event::SearchResolved { search_id, result } => {
                self.on_search_resolved(search_id, result);
                Vec::new()
            }
            Event::LocationSelected(location) => self.on_location_selected(location),
            Event::WeatherResolved { generation, result } => {
                self.on_weather_resolved(generation, result);
                Vec::new()
            }
            Event::MarineResolved {
                generation,
                snapshot,
            } => {
                self.on_marine_resolved(generation, snapshot);
                Vec::new()
            }
        }
    }

    fn on_query_changed(&mut self, query: String) -> Vec<Effect> {
        if query == self.query {
            return Vec::new();
        }
        self.query = query;
        self.search_id += 1;

        if self.query.chars().count() < MIN_QUERY_LEN {
            self.search = SearchStatus::Idle;
            return vec![Effect::CancelSearch];
        }

        self.search = SearchStatus::Debouncing;
        vec![Effect::ScheduleSearch {
            search_id: self.search_id,
        }]
    }

    fn on_search_fired(&mut self, search_id: u64) -> Vec<Effect> {
        if search_id != self.search_id || self.search != SearchStatus::Debouncing {
            debug!(search_id, current = self.search_id, "ignoring stale debounce timer");
            return Vec::new();
        }
        self.search = SearchStatus::Searching;
        self.error = None;
        vec![Effect::Search {
            search_id,
            query: self.query.clone(),
        }]
    }

    fn on_search_resolved(&mut self, search_id: u64, result: Result<Vec<LocationCandidate>, String>) {
        if search_id != self.search_id || self.search != SearchStatus::Searching {
            debug!(search_id, current = self.search_id, "discarding stale search result");
            return;
        }
        match result {
            Ok(candidates) => {
                debug!(count = candidates.len(), "search resolved");
                self.search = SearchStatus::Results(candidates);
            }
            Err(cause) => {
                info!(%cause, "location search failed");
                self.search = SearchStatus::Failed;
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    fn on_location_selected(&mut self, location: LocationCandidate) -> Vec<Effect> {
        self.generation += 1;
        info!(
            generation = self.generation,
            location = %location.display_name(),
            "location selected"
        );

        let effects = vec![
            Effect::FetchWeather {
                generation: self.generation,
                latitude: location.latitude,
                longitude: location.longitude,
            },
            Effect::FetchMarine {
                generation: self.generation,
                latitude: location.latitude,
                longitude: location.longitude,
            },
        ];

        // Replacing the selection drops the previous weather and marine data
        self.selection = Some(Selection {
            generation: self.generation,
            location,
            weather: WeatherStatus::Loading,
            marine: MarineStatus::Loading,
        });
        self.search = SearchStatus::Idle;
        self.error = None;
        effects
    }

    /// The selection `generation` refers to, if it is still current
    fn current_selection(&mut self, generation: u64) -> Option<&mut Selection> {
        match self.selection.as_mut() {
            Some(selection) if selection.generation == generation => Some(selection),
            _ => {
                debug!(generation, "discarding result for superseded selection");
                None
            }
        }
    }

    fn on_weather_resolved(&mut self, generation: u64, result: Result<WeatherSnapshot, String>) {
        let Some(selection) = self.current_selection(generation) else {
            return;
        };
        match result {
            Ok(snapshot) => selection.weather = WeatherStatus::Loaded(snapshot),
            Err(cause) => {
                info!(%cause, "weather fetch failed");
                selection.weather = WeatherStatus::Failed {
                    message: WEATHER_FAILED_MESSAGE.to_string(),
                };
                self.error = Some(WEATHER_FAILED_MESSAGE.to_string());
            }
        }
    }

    fn on_marine_resolved(&mut self, generation: u64, snapshot: Option<MarineSnapshot>) {
        let Some(selection) = self.current_selection(generation) else {
            return;
        };
        selection.marine = match snapshot {
            Some(snapshot) => MarineStatus::Available(snapshot),
            None => MarineStatus::Unavailable,
        };
    }

    /// Candidates of the last successful search, empty otherwise
    pub fn candidates(&self) -> &[LocationCandidate] {
        match &self.search {
            SearchStatus::Results(candidates) => candidates,
            _ => &[],
        }
    }

    /// Whether the result dropdown should be visible
    pub fn shows_results(&self) -> bool {
        matches!(
            self.search,
            SearchStatus::Searching | SearchStatus::Results(_)
        )
    }

    pub fn is_searching(&self) -> bool {
        self.search == SearchStatus::Searching
    }

    /// True before anything was typed or picked
    pub fn is_pristine(&self) -> bool {
        self.selection.is_none() && self.query.is_empty()
    }
}
