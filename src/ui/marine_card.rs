//! Marine conditions card
//!
//! Inland locations are the normal case for a missing marine snapshot, so
//! `Unavailable` gets its own friendly view instead of an error.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{colors, round_label};
use crate::data::MarineSnapshot;
use crate::state::{MarineStatus, Selection};

/// Renders the marine card for the current selection
pub fn render(frame: &mut Frame, area: Rect, selection: &Selection) {
    let block = Block::default()
        .title(" \u{1F30A} Marine Weather ") // 🌊
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SEA));

    let paragraph = Paragraph::new(build_marine_lines(selection))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Builds the card body for whichever marine status the selection is in
pub fn build_marine_lines(selection: &Selection) -> Vec<Line<'static>> {
    match &selection.marine {
        MarineStatus::Loading => vec![Line::from(Span::styled(
            format!(
                "Checking marine conditions for {}...",
                selection.location.name
            ),
            Style::default().fg(colors::SECONDARY),
        ))],
        MarineStatus::Available(snapshot) => available_lines(snapshot),
        MarineStatus::Unavailable => unavailable_lines(&selection.location.name),
    }
}

fn available_lines(snapshot: &MarineSnapshot) -> Vec<Line<'static>> {
    let band = snapshot.wave_band();
    let label = Style::default().fg(colors::SECONDARY);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Wave Height:  ", label),
            Span::raw(format!("{} ", band.icon())),
            Span::styled(
                format!("{:.1}{}", snapshot.wave_height, snapshot.units.wave_height),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("              {}", band.description()),
            Style::default().fg(colors::SEA),
        )),
        Line::from(vec![
            Span::styled("Sea Temp:     ", label),
            Span::raw(format!("{} ", snapshot.sea_temperature_icon())),
            Span::styled(
                format!(
                    "{}{}",
                    round_label(snapshot.sea_surface_temperature),
                    snapshot.units.sea_surface_temperature
                ),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "\u{2713} Marine Data Available", // ✓
            Style::default().fg(colors::SEA),
        )),
    ];

    if let Some(time) = snapshot.time {
        lines.push(Line::from(Span::styled(
            format!("Updated: {}", time.format("%H:%M")),
            Style::default().fg(colors::MUTED),
        )));
    }

    lines
}

fn unavailable_lines(name: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::raw("\u{1F3D4} "), // 🏔
            Span::styled(
                "No Marine Data Available",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{} appears to be an inland location. Marine data is only available for coastal areas and open water.",
                name
            ),
            Style::default().fg(colors::SECONDARY),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Inland Location", Style::default().fg(colors::INLAND)),
            Span::styled(
                "  Try coastal cities for marine data",
                Style::default().fg(colors::MUTED),
            ),
        ]),
    ]
}
