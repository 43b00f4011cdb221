//! Application state management for wxsearch
//!
//! This module contains the main application struct, translating keyboard
//! input into query edits and selections on the orchestrator, and holding
//! the little bit of state that only matters to the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::cli::StartupConfig;
use crate::config::Config;
use crate::data::{ApiClients, ApiError};
use crate::orchestrator::Orchestrator;
use crate::state::ViewState;

/// Cities offered on the start screen; inland ones have no marine data
pub const INLAND_SUGGESTIONS: [&str; 5] = ["New York", "London", "Tokyo", "Paris", "Denver"];
pub const COASTAL_SUGGESTIONS: [&str; 5] = ["Miami", "San Diego", "Barcelona", "Nice", "Honolulu"];

/// Main application struct managing state and input
pub struct App {
    /// Search/fetch state machine
    pub orchestrator: Orchestrator,
    /// Index of the highlighted candidate in the result list
    pub selected_index: usize,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Next suggestion Tab will fill in
    suggestion_index: usize,
}

impl App {
    /// Creates a new App talking to the endpoints in `config`
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let clients = ApiClients::from_config(config)?;
        Ok(Self::with_orchestrator(Orchestrator::new(
            clients,
            config.debounce(),
        )))
    }

    /// Creates a new App around an existing orchestrator
    pub fn with_orchestrator(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            selected_index: 0,
            should_quit: false,
            show_help: false,
            suggestion_index: 0,
        }
    }

    /// Applies the startup configuration, e.g. an initial query from the CLI
    pub fn apply_startup_config(&mut self, config: StartupConfig) {
        if let Some(query) = config.initial_query {
            self.set_query(query);
        }
    }

    pub fn view(&self) -> &ViewState {
        self.orchestrator.state()
    }

    /// Number of candidates currently listed
    pub fn candidate_count(&self) -> usize {
        self.view().candidates().len()
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - Printable characters: Edit the query
    /// - `Backspace`: Delete the last character
    /// - `Ctrl-U`: Clear the query
    /// - `Up`/`Down`: Move the highlight in the result list
    /// - `Enter`: Select the highlighted location
    /// - `Tab`: Fill in a suggested city while the query is empty
    /// - `F1`: Toggle help
    /// - `Esc`: Clear the query, or quit when it is already empty
    /// - `Ctrl-C`: Quit
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            match key_event.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('u') => self.set_query(String::new()),
                _ => {}
            }
            return;
        }

        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        match key_event.code {
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Esc => {
                if self.view().query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.set_query(String::new());
                }
            }
            KeyCode::Char(c) => {
                let mut query = self.view().query.clone();
                query.push(c);
                self.set_query(query);
            }
            KeyCode::Backspace => {
                let mut query = self.view().query.clone();
                query.pop();
                self.set_query(query);
            }
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Enter => {
                if self.orchestrator.select_candidate(self.selected_index) {
                    self.selected_index = 0;
                }
            }
            KeyCode::Tab => self.fill_suggestion(),
            _ => {}
        }
    }

    fn set_query(&mut self, query: String) {
        self.selected_index = 0;
        self.orchestrator.set_query(query);
    }

    /// Cycles through the suggested cities, inland first
    fn fill_suggestion(&mut self) {
        if !self.view().query.is_empty() {
            return;
        }
        let suggestions: Vec<&str> = INLAND_SUGGESTIONS
            .iter()
            .chain(COASTAL_SUGGESTIONS.iter())
            .copied()
            .collect();
        let suggestion = suggestions[self.suggestion_index % suggestions.len()];
        self.suggestion_index = (self.suggestion_index + 1) % suggestions.len();
        self.set_query(suggestion.to_string());
    }

    /// Moves the selection up in the list, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.candidate_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down in the list, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.candidate_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LocationCandidate;
    use crate::state::{Event, SearchStatus};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        let config = Config {
            endpoints: crate::config::Endpoints {
                geocoding: "http://127.0.0.1:9/v1/search".to_string(),
                weather: "http://127.0.0.1:9/v1/forecast".to_string(),
                marine: "http://127.0.0.1:9/v1/marine".to_string(),
            },
            ..Default::default()
        };
        App::new(&config).expect("Failed to build app")
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key_event(KeyCode::Char(c)));
        }
    }

    fn candidate(id: u64, name: &str) -> LocationCandidate {
        LocationCandidate {
            id,
            name: name.to_string(),
            latitude: 10.0,
            longitude: 20.0,
            admin1: None,
            admin2: None,
            country: None,
            country_code: None,
            population: None,
            timezone: None,
            elevation: None,
        }
    }

    /// Puts three candidates in the result list without waiting on the network
    fn with_results(app: &mut App) {
        let search_id = app.view().search_id;
        app.orchestrator.dispatch(Event::SearchFired { search_id });
        app.orchestrator.dispatch(Event::SearchResolved {
            search_id,
            result: Ok(vec![
                candidate(1, "Springfield"),
                candidate(2, "Springfield"),
                candidate(3, "Springfield"),
            ]),
        });
    }

    #[tokio::test]
    async fn test_typing_edits_query() {
        let mut app = test_app();
        type_str(&mut app, "Denver");
        assert_eq!(app.view().query, "Denver");
        assert_eq!(app.view().search, SearchStatus::Debouncing);

        app.handle_key(key_event(KeyCode::Backspace));
        assert_eq!(app.view().query, "Denve");
    }

    #[tokio::test]
    async fn test_single_character_stays_idle() {
        let mut app = test_app();
        type_str(&mut app, "D");
        assert_eq!(app.view().search, SearchStatus::Idle);
    }

    #[tokio::test]
    async fn test_ctrl_u_clears_query() {
        let mut app = test_app();
        type_str(&mut app, "Paris");
        app.handle_key(ctrl('u'));
        assert!(app.view().query.is_empty());
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = test_app();
        type_str(&mut app, "Paris");
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_esc_clears_then_quits() {
        let mut app = test_app();
        type_str(&mut app, "Tokyo");

        app.handle_key(key_event(KeyCode::Esc));
        assert!(app.view().query.is_empty());
        assert!(!app.should_quit);

        app.handle_key(key_event(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_q_is_typed_not_quit() {
        let mut app = test_app();
        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.view().query, "q");
    }

    #[tokio::test]
    async fn test_result_navigation_wraps() {
        let mut app = test_app();
        type_str(&mut app, "Springfield");
        with_results(&mut app);
        assert_eq!(app.candidate_count(), 3);

        app.handle_key(key_event(KeyCode::Up));
        assert_eq!(app.selected_index, 2);
        app.handle_key(key_event(KeyCode::Down));
        assert_eq!(app.selected_index, 0);
        app.handle_key(key_event(KeyCode::Down));
        assert_eq!(app.selected_index, 1);
    }

    #[tokio::test]
    async fn test_navigation_without_results_is_noop() {
        let mut app = test_app();
        app.handle_key(key_event(KeyCode::Down));
        app.handle_key(key_event(KeyCode::Up));
        assert_eq!(app.selected_index, 0);
    }

    #[tokio::test]
    async fn test_enter_selects_highlighted_candidate() {
        let mut app = test_app();
        type_str(&mut app, "Springfield");
        with_results(&mut app);

        app.handle_key(key_event(KeyCode::Down));
        app.handle_key(key_event(KeyCode::Enter));

        let selection = app.view().selection.as_ref().expect("Expected a selection");
        assert_eq!(selection.location.id, 2);
        assert_eq!(app.selected_index, 0);
        assert!(!app.view().shows_results());
    }

    #[tokio::test]
    async fn test_enter_without_results_does_nothing() {
        let mut app = test_app();
        app.handle_key(key_event(KeyCode::Enter));
        assert!(app.view().selection.is_none());
    }

    #[tokio::test]
    async fn test_tab_cycles_suggestions_only_when_empty() {
        let mut app = test_app();
        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.view().query, "New York");

        // Non-empty query: Tab does nothing
        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.view().query, "New York");

        app.handle_key(ctrl('u'));
        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.view().query, "London");
    }

    #[tokio::test]
    async fn test_help_overlay_intercepts_keys() {
        let mut app = test_app();
        app.handle_key(key_event(KeyCode::F(1)));
        assert!(app.show_help);

        app.handle_key(key_event(KeyCode::Char('x')));
        assert!(app.view().query.is_empty());

        app.handle_key(key_event(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_startup_query_is_typed() {
        let mut app = test_app();
        app.apply_startup_config(StartupConfig {
            initial_query: Some("Honolulu".to_string()),
        });
        assert_eq!(app.view().query, "Honolulu");
        assert_eq!(app.view().search, SearchStatus::Debouncing);
    }
}
