//! Search box and result list rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::colors;
use super::widgets::Skeleton;
use crate::data::LocationCandidate;
use crate::state::{SearchStatus, ViewState};

/// Placeholder bar widths while a search is in flight
const LOADING_BARS: [f64; 3] = [0.6, 0.45, 0.55];

/// Renders the query input with a status suffix
pub fn render_search_box(frame: &mut Frame, area: Rect, view: &ViewState) {
    let status = match view.search {
        SearchStatus::Debouncing | SearchStatus::Searching => "Searching...",
        _ => "",
    };

    let content = if view.query.is_empty() {
        Line::from(Span::styled(
            "Search for a city or location...",
            Style::default().fg(colors::MUTED),
        ))
    } else {
        Line::from(vec![
            Span::styled(view.query.clone(), Style::default().fg(colors::PRIMARY)),
            Span::styled("_", Style::default().fg(colors::SELECTED)),
        ])
    };

    let block = Block::default()
        .title(" Search ")
        .title_bottom(Line::from(status).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Renders the dropdown of candidates, a loading skeleton, or "no results"
pub fn render_results(frame: &mut Frame, area: Rect, view: &ViewState, selected_index: usize) {
    let block = Block::default()
        .title(" Locations ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.is_searching() {
        frame.render_widget(
            Skeleton::new(&LOADING_BARS).style(Style::default().fg(colors::MUTED)),
            inner,
        );
        return;
    }

    let lines = build_result_lines(view, selected_index);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Builds two lines per candidate (name, population) or a "no results" note
pub fn build_result_lines(view: &ViewState, selected_index: usize) -> Vec<Line<'static>> {
    let candidates = view.candidates();
    if candidates.is_empty() {
        return vec![Line::from(Span::styled(
            format!("No locations found for \"{}\"", view.query),
            Style::default().fg(colors::SECONDARY),
        ))];
    }

    candidates
        .iter()
        .enumerate()
        .flat_map(|(i, candidate)| candidate_lines(candidate, i == selected_index))
        .collect()
}

fn candidate_lines(candidate: &LocationCandidate, selected: bool) -> Vec<Line<'static>> {
    let (marker, name_style) = if selected {
        (
            "\u{25B6} ", // ▶
            Style::default()
                .fg(colors::SELECTED)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(colors::PRIMARY))
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(colors::SELECTED)),
        Span::raw("\u{1F4CD} "), // 📍
        Span::styled(candidate.display_name(), name_style),
    ])];

    if let Some(population) = candidate.population_label() {
        lines.push(Line::from(Span::styled(
            format!("      Population: {}", population),
            Style::default().fg(colors::MUTED),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Event;
    use crate::ui::{buffer_text, lines_text};
    use ratatui::{backend::TestBackend, Terminal};

    fn candidate(id: u64, name: &str, admin1: Option<&str>, population: Option<u64>) -> LocationCandidate {
        LocationCandidate {
            id,
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            admin1: admin1.map(str::to_string),
            admin2: None,
            country: Some("United States".to_string()),
            country_code: None,
            population,
            timezone: None,
            elevation: None,
        }
    }

    fn view_with(candidates: Vec<LocationCandidate>) -> ViewState {
        let mut view = ViewState::new();
        view.apply(Event::QueryChanged("Portland".to_string()));
        let search_id = view.search_id;
        view.apply(Event::SearchFired { search_id });
        view.apply(Event::SearchResolved {
            search_id,
            result: Ok(candidates),
        });
        view
    }

    #[test]
    fn test_result_lines_in_order_with_population() {
        let view = view_with(vec![
            candidate(1, "Portland", Some("Oregon"), Some(652503)),
            candidate(2, "Portland", Some("Maine"), None),
        ]);
        let text = lines_text(&build_result_lines(&view, 0));

        let oregon = text.find("Portland, Oregon, United States").expect("Oregon listed");
        let maine = text.find("Portland, Maine, United States").expect("Maine listed");
        assert!(oregon < maine, "API order must be kept");
        assert!(text.contains("Population: 652,503"));
        assert_eq!(text.matches("Population").count(), 1);
    }

    #[test]
    fn test_selected_row_has_marker() {
        let view = view_with(vec![
            candidate(1, "Portland", Some("Oregon"), None),
            candidate(2, "Portland", Some("Maine"), None),
        ]);
        let lines = build_result_lines(&view, 1);
        assert!(!lines[0].spans[0].content.contains('\u{25B6}'));
        assert!(lines[1].spans[0].content.contains('\u{25B6}'));
    }

    #[test]
    fn test_no_results_message() {
        let view = view_with(Vec::new());
        let text = lines_text(&build_result_lines(&view, 0));
        assert_eq!(text, "No locations found for \"Portland\"");
    }

    #[test]
    fn test_search_box_shows_placeholder_and_status() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let view = ViewState::new();
        terminal
            .draw(|frame| render_search_box(frame, frame.area(), &view))
            .unwrap();
        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains("Search for a city"));

        let mut view = ViewState::new();
        view.apply(Event::QueryChanged("Nice".to_string()));
        terminal
            .draw(|frame| render_search_box(frame, frame.area(), &view))
            .unwrap();
        let content = buffer_text(terminal.backend().buffer());
        assert!(content.contains("Nice"));
        assert!(content.contains("Searching..."));
    }
}
