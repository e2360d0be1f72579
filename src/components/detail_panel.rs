//! Lead detail slide-over component
//!
//! Shows a lead's identity, a chronological stage-history timeline, and a
//! block of labeled fields. Renders nothing at all when no lead is set.
//! Closing is an explicit `Action::CloseDetail` routed by the App; the
//! panel never reaches for ambient state.

use crate::action::Action;
use crate::component::Component;
use crate::model::{format_date, Lead, StageTransition};
use super::stage_progress;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const PAGE_SIZE: usize = 10;

/// Detail slide-over panel for the selected lead
pub struct DetailPanel {
    /// Current scroll offset
    scroll: usize,
    /// Cached content lines for the current lead
    content: Vec<Line<'static>>,
    /// Whether a lead is currently set
    has_lead: bool,
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailPanel {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            content: Vec::new(),
            has_lead: false,
        }
    }

    /// Update content for the given lead; None clears the panel entirely
    pub fn set_lead(&mut self, lead: Option<&Lead>) {
        self.scroll = 0;
        match lead {
            Some(lead) => {
                self.has_lead = true;
                self.content = build_lead_lines(lead);
            }
            None => {
                self.has_lead = false;
                self.content.clear();
            }
        }
    }
}

impl Component for DetailPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(Action::CloseDetail),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageDown)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::PageUp)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let max_scroll = self.content.len().saturating_sub(1);

        match action {
            Action::ScrollDown => {
                if self.scroll < max_scroll {
                    self.scroll += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::PageDown => {
                self.scroll = (self.scroll + PAGE_SIZE).min(max_scroll);
            }
            Action::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_SIZE);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // No lead, no panel
        if !self.has_lead {
            return Ok(());
        }

        frame.render_widget(Clear, area);

        let visible_height = area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Lead Detail ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, area);

        let total = self.content.len();
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

/// Describe a stage transition for the timeline
///
/// The initial entry (no `from_stage`) reads "Started as X"; later entries
/// read "Moved from A to B".
fn transition_description(transition: &StageTransition) -> String {
    match &transition.from_stage {
        Some(from) => format!("Moved from {} to {}", from, transition.to_stage),
        None => format!("Started as {}", transition.to_stage),
    }
}

/// Render the stage history as a vertical timeline
///
/// Each entry gets a bullet line, optional notes, and its date; a connector
/// line joins consecutive entries, so k entries produce k-1 connectors.
fn render_timeline(history: &[StageTransition]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, transition) in history.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled(
                transition_description(transition),
                Style::default().fg(Color::White),
            ),
        ]));

        if let Some(notes) = &transition.notes {
            lines.push(Line::from(Span::styled(
                format!("    {}", notes),
                Style::default().fg(Color::Gray),
            )));
        }

        lines.push(Line::from(Span::styled(
            format!("    {}", format_date(transition.changed_at.as_deref())),
            Style::default().fg(Color::DarkGray),
        )));

        if index + 1 < history.len() {
            lines.push(Line::from(Span::styled(
                "│",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}

/// Build the full content for a lead
fn build_lead_lines(lead: &Lead) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        lead.name.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        lead.email.clone(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Company: ", Style::default().fg(Color::Yellow)),
        Span::raw(lead.company.clone()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Pipeline Progress",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(stage_progress::render_bar(&lead.current_stage, 30));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Stage History",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "──────────────────────────────────────",
        Style::default().fg(Color::DarkGray),
    )));
    lines.extend(render_timeline(&lead.stage_history));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Yellow)),
        Span::raw(lead.status.clone()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Last Contacted: ", Style::default().fg(Color::Yellow)),
        Span::raw(format_date(lead.last_contacted.as_deref())),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Created: ", Style::default().fg(Color::Yellow)),
        Span::raw(format_date(lead.created_at.as_deref())),
    ]));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::{new_lead, set_stage};

    fn transition(from: Option<&str>, to: &str, at: Option<&str>) -> StageTransition {
        StageTransition {
            from_stage: from.map(str::to_string),
            to_stage: to.to_string(),
            changed_at: at.map(str::to_string),
            notes: None,
        }
    }

    fn connector_count(lines: &[Line<'_>]) -> usize {
        lines
            .iter()
            .filter(|line| {
                line.spans
                    .first()
                    .is_some_and(|span| span.content.trim() == "│")
            })
            .count()
    }

    fn rendered_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.as_ref()))
            .collect::<Vec<&str>>()
            .join("\n")
    }

    #[test]
    fn test_no_lead_renders_nothing() {
        let mut panel = DetailPanel::new();
        panel.set_lead(None);
        assert!(panel.content.is_empty());
        assert!(!panel.has_lead);
    }

    #[test]
    fn test_set_lead_then_clear() {
        let lead = new_lead("1", "a", "a@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        let mut panel = DetailPanel::new();
        panel.set_lead(Some(&lead));
        assert!(!panel.content.is_empty());

        panel.set_lead(None);
        assert!(panel.content.is_empty());
    }

    #[test]
    fn test_initial_transition_wording() {
        let t = transition(None, "New Lead", Some("2024-01-05T00:00:00Z"));
        assert_eq!(transition_description(&t), "Started as New Lead");
    }

    #[test]
    fn test_later_transition_wording() {
        let t = transition(Some("New Lead"), "Engaged", Some("2024-01-05T00:00:00Z"));
        assert_eq!(
            transition_description(&t),
            "Moved from New Lead to Engaged"
        );
    }

    #[test]
    fn test_timeline_connector_count() {
        let history = vec![
            transition(None, "New Lead", Some("2024-01-01T00:00:00Z")),
            transition(Some("New Lead"), "Engaged", Some("2024-02-01T00:00:00Z")),
            transition(Some("Engaged"), "Proposal Sent", Some("2024-03-01T00:00:00Z")),
        ];
        let lines = render_timeline(&history);
        assert_eq!(connector_count(&lines), 2);
    }

    #[test]
    fn test_timeline_single_entry_has_no_connector() {
        let history = vec![transition(None, "New Lead", Some("2024-01-01T00:00:00Z"))];
        let lines = render_timeline(&history);
        assert_eq!(connector_count(&lines), 0);
    }

    #[test]
    fn test_timeline_missing_date_renders_na() {
        let history = vec![transition(None, "New Lead", None)];
        let text = rendered_text(&render_timeline(&history));
        assert!(text.contains("N/A"));
    }

    #[test]
    fn test_timeline_includes_notes() {
        let mut t = transition(Some("New Lead"), "Engaged", Some("2024-02-01T00:00:00Z"));
        t.notes = Some("intro call went well".to_string());
        let text = rendered_text(&render_timeline(&[t]));
        assert!(text.contains("intro call went well"));
    }

    #[test]
    fn test_lead_lines_include_fields_and_dates() {
        let mut lead = new_lead(
            "1",
            "Grace Hopper",
            "grace@navy.example",
            "COBOL Systems",
            "New Lead",
            "2024-01-05T09:30:00Z",
        );
        set_stage(&mut lead, "Engaged", "2024-02-01T00:00:00Z", None);
        lead.status = "Engaged".to_string();

        let text = rendered_text(&build_lead_lines(&lead));
        assert!(text.contains("Grace Hopper"));
        assert!(text.contains("COBOL Systems"));
        assert!(text.contains("Jan 5, 2024"));
        assert!(text.contains("Started as New Lead"));
        assert!(text.contains("Moved from New Lead to Engaged"));
        // last_contacted is unset
        assert!(text.contains("N/A"));
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let lead = new_lead("1", "a", "a@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        let mut panel = DetailPanel::new();
        panel.set_lead(Some(&lead));

        let max = panel.content.len() - 1;
        for _ in 0..500 {
            panel.update(Action::ScrollDown).unwrap();
        }
        assert_eq!(panel.scroll, max);

        panel.update(Action::PageUp).unwrap();
        panel.update(Action::PageUp).unwrap();
        panel.update(Action::PageUp).unwrap();
        assert_eq!(panel.scroll, max.saturating_sub(3 * PAGE_SIZE));
    }
}
