//! Stage progress indicator component
//!
//! Renders a proportional fill bar for a lead's position in the fixed
//! pipeline stage enumeration. The percentage itself comes from
//! `model::stage::progress_percent` and may be negative for unrecognized
//! stages; only the drawn fill is clamped.

use crate::action::Action;
use crate::component::Component;
use crate::model::progress_percent;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Progress bar for a lead's current pipeline stage
pub struct StageProgressIndicator {
    /// Stage value being displayed
    stage: String,
}

impl Default for StageProgressIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl StageProgressIndicator {
    pub fn new() -> Self {
        Self {
            stage: String::new(),
        }
    }

    /// Set the stage value to display
    pub fn set_stage(&mut self, stage: &str) {
        self.stage = stage.to_string();
    }
}

impl Component for StageProgressIndicator {
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if area.width == 0 || area.height == 0 {
            return Ok(());
        }

        let mut lines = Vec::new();
        if area.height >= 2 {
            lines.push(Line::from(vec![
                Span::raw("Stage: "),
                Span::styled(
                    self.stage.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        // Leave room for the trailing percentage label
        let bar_width = area.width.saturating_sub(6);
        lines.push(render_bar(&self.stage, bar_width));

        frame.render_widget(Paragraph::new(lines), area);
        Ok(())
    }
}

/// Number of filled cells for a percentage in a bar of the given width
///
/// Clamped to `[0, width]`; negative percentages draw an empty bar.
pub fn fill_width(percent: f64, width: u16) -> u16 {
    if width == 0 || percent <= 0.0 {
        return 0;
    }
    let cells = (percent / 100.0 * f64::from(width)).round() as u16;
    cells.min(width)
}

/// Build the fill bar line for a stage value
pub fn render_bar(stage: &str, width: u16) -> Line<'static> {
    let percent = progress_percent(stage);
    let filled = fill_width(percent, width);
    let empty = width - filled;

    Line::from(vec![
        Span::styled(
            "█".repeat(filled as usize),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            "░".repeat(empty as usize),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!(" {:.0}%", percent), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width_endpoints() {
        assert_eq!(fill_width(0.0, 20), 0);
        assert_eq!(fill_width(100.0, 20), 20);
        assert_eq!(fill_width(50.0, 20), 10);
    }

    #[test]
    fn test_fill_width_clamps() {
        assert_eq!(fill_width(-25.0, 20), 0);
        assert_eq!(fill_width(250.0, 20), 20);
        assert_eq!(fill_width(50.0, 0), 0);
    }

    #[test]
    fn test_render_bar_known_stage() {
        let line = render_bar("Closed Won", 10);
        assert_eq!(line.spans[0].content.chars().count(), 10);
        assert!(line.spans[2].content.contains("100%"));
    }

    #[test]
    fn test_render_bar_unknown_stage_shows_negative_percent() {
        // The computed value is preserved in the label even though the
        // fill is empty
        let line = render_bar("Cold Call", 10);
        assert!(line.spans[0].content.is_empty());
        assert_eq!(line.spans[1].content.chars().count(), 10);
        assert!(line.spans[2].content.contains("-25%"));
    }
}
