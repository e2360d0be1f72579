//! Help dialog listing all keyboard shortcuts

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    fn shortcut(key: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:<10}", key),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(description),
        ])
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 52, 20);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Navigation",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Self::shortcut("j/k, ↑/↓", "Move through the lead list"),
            Self::shortcut("g/G", "Jump to first/last lead"),
            Self::shortcut("Tab", "Cycle engagement filter"),
            Self::shortcut("Enter", "Open lead detail panel"),
            Self::shortcut("Esc", "Close the detail panel"),
            Line::from(""),
            Line::from(Span::styled(
                "List",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Self::shortcut("/", "Search name, email, company"),
            Self::shortcut("s", "Cycle sort field"),
            Self::shortcut("o", "Toggle sort direction"),
            Self::shortcut("a", "Advance lead to next stage"),
            Self::shortcut("r", "Reload leads from data file"),
            Line::from(""),
            Line::from(Span::styled(
                "Application",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Self::shortcut("?", "Toggle this help"),
            Self::shortcut("q", "Quit (with confirmation)"),
            Self::shortcut("Ctrl+c", "Quit immediately"),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
