//! "Get Started" panel shown before anything is searched

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::colors;
use crate::app::{COASTAL_SUGGESTIONS, INLAND_SUGGESTIONS};

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Get Started ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SECONDARY));

    let paragraph = Paragraph::new(build_start_lines())
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn build_start_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "Search for any city or location to see current weather conditions",
            Style::default().fg(colors::PRIMARY),
        )),
        Line::from(Span::styled(
            "and marine data for coastal areas.",
            Style::default().fg(colors::PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Try inland cities",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            INLAND_SUGGESTIONS.join("  \u{2022}  "), // •
            Style::default().fg(colors::INLAND),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Or coastal cities for marine data",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            COASTAL_SUGGESTIONS.join("  \u{2022}  "),
            Style::default().fg(colors::SEA),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Tab to fill in a suggestion",
            Style::default().fg(colors::MUTED),
        )),
    ]
}
