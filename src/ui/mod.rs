//! UI rendering module for wxsearch
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components. Everything here reads the
//! `ViewState`; nothing in the UI mutates it.

pub mod help_overlay;
pub mod marine_card;
pub mod search;
pub mod start;
pub mod weather_card;
pub mod widgets;

pub use help_overlay::render as render_help_overlay;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::ViewState;

/// Color scheme shared by all screens
pub(crate) mod colors {
    use ratatui::style::Color;

    /// Title and section headers
    pub const HEADER: Color = Color::Cyan;
    /// Primary text
    pub const PRIMARY: Color = Color::White;
    /// Secondary/dimmed text
    pub const SECONDARY: Color = Color::Gray;
    /// Hints and placeholders
    pub const MUTED: Color = Color::DarkGray;
    /// Error banner
    pub const ERROR: Color = Color::Red;
    /// Highlighted list row
    pub const SELECTED: Color = Color::Yellow;
    /// Marine accents
    pub const SEA: Color = Color::Blue;
    /// Inland badge
    pub const INLAND: Color = Color::Rgb(217, 119, 6);
}

/// Renders the whole screen for the current application state
pub fn render(frame: &mut Frame, app: &App) {
    let view = app.view();
    let area = frame.area();

    let banner_height = if view.error.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, chunks[0]);
    search::render_search_box(frame, chunks[1], view);
    if let Some(message) = &view.error {
        render_error_banner(frame, chunks[2], message);
    }
    render_body(frame, chunks[3], app);
    render_footer(frame, chunks[4]);

    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Picks what goes below the search box
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();

    if view.shows_results() {
        search::render_results(frame, area, view, app.selected_index);
    } else if let Some(selection) = &view.selection {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(12), Constraint::Length(10)])
            .split(area);
        weather_card::render(frame, chunks[0], selection);
        marine_card::render(frame, chunks[1], selection);
    } else if view.is_pristine() {
        start::render(frame, area);
    } else {
        render_typing_hint(frame, area, view);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Weather & Marine Search",
        Style::default()
            .fg(colors::HEADER)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(colors::ERROR),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ERROR)),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(banner, area);
}

/// Shown while a short query is typed or the debounce window is open
fn render_typing_hint(frame: &mut Frame, area: Rect, view: &ViewState) {
    let text = if view.query.chars().count() < crate::state::MIN_QUERY_LEN {
        "Type at least 2 characters to search"
    } else {
        ""
    };
    let hint = Paragraph::new(Span::styled(text, Style::default().fg(colors::MUTED)))
        .alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        "↑↓ move  Enter select  Tab suggest  Esc clear/quit  F1 help",
        Style::default().fg(colors::MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Rounds to the nearest integer, halves up toward +inf, without "-0"
pub(crate) fn round_label(value: f64) -> String {
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{:.0}", rounded)
    }
}

/// Splits `area` into a centered rect of the given size
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Flattens a rendered buffer into one string for assertions
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

/// Flattens lines into one string for assertions
#[cfg(test)]
pub(crate) fn lines_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Endpoints};
    use crate::data::LocationCandidate;
    use crate::state::{Event, SEARCH_FAILED_MESSAGE};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let config = Config {
            endpoints: Endpoints {
                geocoding: "http://127.0.0.1:9/v1/search".to_string(),
                weather: "http://127.0.0.1:9/v1/forecast".to_string(),
                marine: "http://127.0.0.1:9/v1/marine".to_string(),
            },
            ..Default::default()
        };
        App::new(&config).expect("Failed to build app")
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_round_label() {
        assert_eq!(round_label(22.0), "22");
        assert_eq!(round_label(21.5), "22");
        assert_eq!(round_label(2.5), "3");
        assert_eq!(round_label(-0.4), "0");
        assert_eq!(round_label(-0.5), "0");
        assert_eq!(round_label(-2.5), "-2");
        assert_eq!(round_label(-3.6), "-4");
    }

    #[tokio::test]
    async fn test_start_screen_when_pristine() {
        let app = test_app();
        let content = draw(&app);
        assert!(content.contains("Weather & Marine Search"), "Should render title");
        assert!(content.contains("Get Started"), "Should show start panel");
        assert!(content.contains("F1 help"), "Should show footer");
    }

    #[tokio::test]
    async fn test_error_banner_rendered() {
        let mut app = test_app();
        app.orchestrator.set_query("Denver");
        let search_id = app.view().search_id;
        app.orchestrator.dispatch(Event::SearchFired { search_id });
        app.orchestrator.dispatch(Event::SearchResolved {
            search_id,
            result: Err("HTTP 503".to_string()),
        });

        let content = draw(&app);
        assert!(content.contains(SEARCH_FAILED_MESSAGE));
        assert!(!content.contains("Get Started"));
    }

    #[tokio::test]
    async fn test_selection_renders_both_cards() {
        let mut app = test_app();
        app.orchestrator.dispatch(Event::LocationSelected(LocationCandidate {
            id: 1,
            name: "Miami".to_string(),
            latitude: 25.77427,
            longitude: -80.19366,
            admin1: Some("Florida".to_string()),
            admin2: None,
            country: Some("United States".to_string()),
            country_code: Some("US".to_string()),
            population: Some(441003),
            timezone: None,
            elevation: None,
        }));

        let content = draw(&app);
        assert!(content.contains("Miami, Florida, United States"));
        assert!(content.contains("Marine Weather"));
        assert!(content.contains("Checking marine conditions"));
    }

    #[tokio::test]
    async fn test_help_overlay_drawn_on_top() {
        let mut app = test_app();
        app.show_help = true;
        let content = draw(&app);
        assert!(content.contains("Keyboard Shortcuts"));
    }

    #[tokio::test]
    async fn test_short_query_hint() {
        let mut app = test_app();
        app.orchestrator.set_query("D");
        let content = draw(&app);
        assert!(content.contains("Type at least 2 characters"));
    }
}
