//! Home component - Main application screen
//!
//! Displays engagement tabs, the lead list, a summary box, and the help
//! bar. Owns navigation, search, and sort state.

use crate::action::Action;
use crate::components::{calculate_main_layout, StageProgressIndicator};
use crate::component::Component;
use crate::model::{lead_matches_tab, Lead, SortField, Tab};
use crate::services::store::{matches_search, search_matcher, sort_leads};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Everything the home screen needs from the App to render
pub struct HomeRenderContext<'a> {
    pub leads: &'a [Lead],
    pub status_message: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Home component for the main application view
/// Owns navigation state and handles lead list interactions
pub struct HomeComponent {
    /// Current engagement tab
    pub active_tab: Tab,

    /// List selection state (index into the filtered, sorted list)
    pub list_state: ListState,

    /// Search query string
    pub search_query: String,

    /// Whether search mode is active
    pub search_mode: bool,

    /// Current sort field
    pub sort_field: SortField,

    /// Whether the sort is descending
    pub sort_desc: bool,

    /// Progress bar for the selected lead's stage
    pub progress: StageProgressIndicator,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        let sort_field = SortField::default();
        Self {
            active_tab: Tab::All,
            list_state: ListState::default(),
            search_query: String::new(),
            search_mode: false,
            sort_field,
            sort_desc: sort_field.default_descending(),
            progress: StageProgressIndicator::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering & Sorting
    // ─────────────────────────────────────────────────────────────────────────

    /// Leads filtered by the active tab and search query, in sort order
    pub fn get_filtered_leads<'a>(&self, all_leads: &'a [Lead]) -> Vec<&'a Lead> {
        let mut leads: Vec<&Lead> = all_leads
            .iter()
            .filter(|lead| lead_matches_tab(lead, self.active_tab))
            .collect();

        if let Some(matcher) = search_matcher(&self.search_query) {
            leads.retain(|lead| matches_search(lead, &matcher));
        }

        sort_leads(&mut leads, self.sort_field, self.sort_desc);
        leads
    }

    /// The currently selected lead, if any
    pub fn get_selected_lead<'a>(&self, all_leads: &'a [Lead]) -> Option<&'a Lead> {
        let filtered = self.get_filtered_leads(all_leads);
        filtered.get(self.list_state.selected()?).copied()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Switch to the next engagement tab
    pub fn next_tab(&mut self, all_leads: &[Lead]) {
        let tabs = Tab::all();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        self.active_tab = tabs[(current + 1) % tabs.len()];
        self.select_first(all_leads);
    }

    /// Switch to the previous engagement tab
    pub fn previous_tab(&mut self, all_leads: &[Lead]) {
        let tabs = Tab::all();
        let current = tabs.iter().position(|t| *t == self.active_tab).unwrap_or(0);
        let prev = if current == 0 {
            tabs.len() - 1
        } else {
            current - 1
        };
        self.active_tab = tabs[prev];
        self.select_first(all_leads);
    }

    /// Select the next lead, wrapping to the first
    pub fn next(&mut self, all_leads: &[Lead]) {
        let count = self.get_filtered_leads(all_leads).len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if current + 1 >= count { 0 } else { current + 1 };
        self.list_state.select(Some(next));
    }

    /// Select the previous lead, wrapping to the last
    pub fn previous(&mut self, all_leads: &[Lead]) {
        let count = self.get_filtered_leads(all_leads).len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { count - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// Select the first lead, or nothing when the list is empty
    pub fn select_first(&mut self, all_leads: &[Lead]) {
        if self.get_filtered_leads(all_leads).is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Select the last lead
    pub fn select_last(&mut self, all_leads: &[Lead]) {
        let count = self.get_filtered_leads(all_leads).len();
        if count > 0 {
            self.list_state.select(Some(count - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Add character to search query
    pub fn search_input(&mut self, c: char, all_leads: &[Lead]) {
        self.search_query.push(c);
        self.select_first(all_leads);
    }

    /// Remove last character from search query
    pub fn search_backspace(&mut self, all_leads: &[Lead]) {
        self.search_query.pop();
        self.select_first(all_leads);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sorting
    // ─────────────────────────────────────────────────────────────────────────

    /// Cycle to the next sort field, resetting to its default direction
    pub fn cycle_sort_field(&mut self, all_leads: &[Lead]) {
        self.sort_field = self.sort_field.next();
        self.sort_desc = self.sort_field.default_descending();
        self.select_first(all_leads);
    }

    /// Flip the sort direction
    pub fn toggle_sort_order(&mut self, all_leads: &[Lead]) {
        self.sort_desc = !self.sort_desc;
        self.select_first(all_leads);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Convert key events into semantic Actions
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Enter => Some(Action::OpenDetail),
            KeyCode::Char('s') => Some(Action::CycleSortField),
            KeyCode::Char('o') => Some(Action::ToggleSortOrder),
            KeyCode::Char('a') => Some(Action::AdvanceStage),
            KeyCode::Char('r') => Some(Action::ReloadLeads),
            _ => None,
        };
        Ok(action)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Draw the full home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) {
    let has_status = ctx.status_message.is_some() || ctx.error.is_some();
    let layout = calculate_main_layout(area, has_status);

    draw_tabs(frame, layout.tabs, home);
    draw_info_box(frame, layout.info, home, ctx);
    draw_lead_list(frame, layout.list, home, ctx);

    if let Some(status_area) = layout.status {
        draw_status_line(frame, status_area, ctx);
    }
    draw_help_bar(frame, layout.help, home);
}

fn draw_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let titles: Vec<Line> = Tab::all().iter().map(|t| Line::from(t.name().to_string())).collect();
    let selected = Tab::all()
        .iter()
        .position(|t| *t == home.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Leads ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn draw_info_box(frame: &mut Frame, area: Rect, home: &mut HomeComponent, ctx: &HomeRenderContext) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let shown = home.get_filtered_leads(ctx.leads).len();
    let engaged = ctx.leads.iter().filter(|l| l.engaged).count();
    let direction = if home.sort_desc { "↓" } else { "↑" };

    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} of {} leads shown", shown, ctx.leads.len())),
        Span::styled(
            format!("  ({} engaged)", engaged),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!("  sort: {} {}", home.sort_field.name(), direction)),
    ])];

    if home.search_mode || !home.search_query.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::raw(home.search_query.clone()),
            Span::styled(
                if home.search_mode { "▏" } else { "" },
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    // Progress bar for the selected lead
    if let Some(lead) = home.get_selected_lead(ctx.leads) {
        let stage = lead.current_stage.clone();
        home.progress.set_stage(&stage);
        let _ = home.progress.draw(frame, chunks[1]);
    }
}

fn draw_lead_list(frame: &mut Frame, area: Rect, home: &mut HomeComponent, ctx: &HomeRenderContext) {
    let filtered = home.get_filtered_leads(ctx.leads);

    let items: Vec<ListItem> = filtered.iter().map(|lead| lead_row(lead)).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.list_state);
}

fn lead_row(lead: &Lead) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            pad_or_truncate(&lead.name, 24),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            pad_or_truncate(&lead.company, 22),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            pad_or_truncate(&lead.current_stage, 16),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            crate::model::format_date(lead.last_contacted.as_deref()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn draw_status_line(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let line = if let Some(error) = ctx.error {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(Span::styled(
            ctx.status_message.unwrap_or("").to_string(),
            Style::default().fg(Color::Green),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line = if home.search_mode {
        Line::from(vec![
            Span::styled(" Esc/Enter ", key_style),
            Span::raw("Done  "),
            Span::styled(" Backspace ", key_style),
            Span::raw("Delete"),
        ])
    } else {
        Line::from(vec![
            Span::styled(" j/k ", key_style),
            Span::raw("Navigate  "),
            Span::styled(" Enter ", key_style),
            Span::raw("Detail  "),
            Span::styled(" / ", key_style),
            Span::raw("Search  "),
            Span::styled(" s/o ", key_style),
            Span::raw("Sort  "),
            Span::styled(" a ", key_style),
            Span::raw("Advance  "),
            Span::styled(" Tab ", key_style),
            Span::raw("Filter  "),
            Span::styled(" ? ", key_style),
            Span::raw("Help  "),
            Span::styled(" q ", key_style),
            Span::raw("Quit"),
        ])
    };

    let help = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Pad or truncate a string to the given display width, plus a two-space gap
fn pad_or_truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }

    out.push_str(&" ".repeat(width.saturating_sub(used) + 2));
    out
}
