//! Placeholder bars shown while data is loading

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Shade used for placeholder cells
const SHADE: char = '░';

/// Horizontal placeholder bars, one per line, with a blank line between them
pub struct Skeleton<'a> {
    /// Width of each bar as a fraction of the area (0.0-1.0)
    bars: &'a [f64],
    style: Style,
}

impl<'a> Skeleton<'a> {
    pub fn new(bars: &'a [f64]) -> Self {
        Self {
            bars,
            style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn bar_width(fraction: f64, available: u16) -> u16 {
        let width = (fraction.clamp(0.0, 1.0) * available as f64).round() as u16;
        width.max(1).min(available)
    }
}

impl<'a> Widget for Skeleton<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for (i, fraction) in self.bars.iter().enumerate() {
            let y = area.y + (i as u16) * 2;
            if y >= area.bottom() {
                break;
            }
            let width = Self::bar_width(*fraction, area.width);
            for x in area.x..area.x + width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(SHADE).set_style(self.style);
                }
            }
        }
    }
}
