//! Current weather card for the selected location

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::widgets::Skeleton;
use super::{colors, round_label};
use crate::data::{LocationCandidate, WeatherSnapshot};
use crate::state::{Selection, WeatherStatus};

const LOADING_BARS: [f64; 4] = [0.3, 0.5, 0.4, 0.6];

/// Renders the weather card: skeleton while loading, details when loaded
pub fn render(frame: &mut Frame, area: Rect, selection: &Selection) {
    let block = Block::default()
        .title(format!(" \u{1F4CD} {} ", selection.location.display_name()))
        .title_bottom(Line::from(coordinates_label(&selection.location)).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &selection.weather {
        WeatherStatus::Loading => {
            frame.render_widget(Skeleton::new(&LOADING_BARS), inner);
        }
        WeatherStatus::Loaded(snapshot) => {
            let paragraph = Paragraph::new(build_weather_lines(snapshot)).wrap(Wrap { trim: false });
            frame.render_widget(paragraph, inner);
        }
        WeatherStatus::Failed { message } => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(colors::ERROR),
            )))
            .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, inner);
        }
    }
}

/// "Coordinates: 39.7392, -104.9847"
pub fn coordinates_label(location: &LocationCandidate) -> String {
    format!(
        "Coordinates: {:.4}, {:.4}",
        location.latitude, location.longitude
    )
}

/// Builds the detail lines for a loaded snapshot
pub fn build_weather_lines(snapshot: &WeatherSnapshot) -> Vec<Line<'static>> {
    let label = Style::default().fg(colors::SECONDARY);
    let value = Style::default().fg(colors::PRIMARY);

    vec![
        Line::from(vec![
            Span::raw(format!("{}  ", snapshot.icon())),
            Span::styled(
                format!(
                    "{}{}",
                    round_label(snapshot.temperature),
                    snapshot.units.temperature
                ),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            snapshot.description(),
            Style::default().fg(colors::HEADER),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{1F4A7} Humidity:   ", label), // 💧
            Span::styled(
                format!("{}{}", round_label(snapshot.humidity), snapshot.units.humidity),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("\u{1F4A8} Wind:       ", label), // 💨
            Span::styled(
                format!("{} {}", round_label(snapshot.wind_speed), snapshot.units.wind_speed),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("\u{1F9ED} Direction:  ", label), // 🧭
            Span::styled(
                format!(
                    "{}{}",
                    round_label(snapshot.wind_direction),
                    snapshot.units.wind_direction
                ),
                value,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Timezone: {}  Elevation: {}m  Updated: {}",
                snapshot.timezone,
                round_label(snapshot.elevation),
                snapshot.time.format("%H:%M")
            ),
            Style::default().fg(colors::MUTED),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WeatherUnits;
    use crate::state::{MarineStatus, WEATHER_FAILED_MESSAGE};
    use crate::ui::{buffer_text, lines_text};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn denver() -> LocationCandidate {
        LocationCandidate {
            id: 5419384,
            name: "Denver".to_string(),
            latitude: 39.7392,
            longitude: -104.9847,
            admin1: Some("Colorado".to_string()),
            admin2: None,
            country: Some("United States".to_string()),
            country_code: Some("US".to_string()),
            population: Some(715522),
            timezone: Some("America/Denver".to_string()),
            elevation: Some(1609.0),
        }
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            time: NaiveDate::from_ymd_opt(2024, 7, 15)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            temperature: 21.6,
            humidity: 35.0,
            weather_code: 1,
            wind_speed: 12.5,
            wind_direction: 270.0,
            units: WeatherUnits {
                temperature: "°C".to_string(),
                humidity: "%".to_string(),
                wind_speed: "km/h".to_string(),
                wind_direction: "°".to_string(),
            },
            timezone: "America/Denver".to_string(),
            elevation: 1611.0,
        }
    }

    fn selection(weather: WeatherStatus) -> Selection {
        Selection {
            generation: 1,
            location: denver(),
            weather,
            marine: MarineStatus::Loading,
        }
    }

    fn draw(selection: &Selection) -> String {
        let backend = TestBackend::new(80, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), selection))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_weather_lines_content() {
        let text = lines_text(&build_weather_lines(&snapshot()));
        assert!(text.contains("22°C"), "temperature rounded with unit: {}", text);
        assert!(text.contains("Mainly clear"));
        assert!(text.contains("35%"));
        assert!(text.contains("13 km/h"), "wind speed rounded: {}", text);
        assert!(text.contains("270°"));
        assert!(text.contains("America/Denver"));
        assert!(text.contains("1611m"));
        assert!(text.contains("Updated: 14:00"));
    }

    #[test]
    fn test_coordinates_four_decimals() {
        assert_eq!(
            coordinates_label(&denver()),
            "Coordinates: 39.7392, -104.9847"
        );
    }

    #[test]
    fn test_loading_renders_skeleton() {
        let content = draw(&selection(WeatherStatus::Loading));
        assert!(content.contains("Denver, Colorado, United States"));
        assert!(content.contains('░'));
    }

    #[test]
    fn test_failed_shows_message() {
        let content = draw(&selection(WeatherStatus::Failed {
            message: WEATHER_FAILED_MESSAGE.to_string(),
        }));
        assert!(content.contains("Failed to fetch weather data"));
        assert!(!content.contains('░'));
    }

    #[test]
    fn test_loaded_renders_details() {
        let content = draw(&selection(WeatherStatus::Loaded(snapshot())));
        assert!(content.contains("Mainly clear"));
        assert!(content.contains("Coordinates: 39.7392, -104.9847"));
    }
}
