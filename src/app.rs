//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, slide_over, DetailPanel, HelpDialog, HomeComponent, HomeRenderContext,
    QuitDialog,
};
use crate::config::Config;
use crate::model::domain::DomainState;
use crate::model::modal::{Modal, ModalStack};
use crate::services;
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

/// Width of the detail slide-over as a percentage of the screen
const DETAIL_PANEL_PERCENT: u16 = 60;

/// Main application state - coordinates between components
pub struct App {
    /// Domain state (business data)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub detail: DetailPanel,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    /// Current config, if one was found on disk
    pub config: Option<Config>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance, loading config and lead data
    pub fn new() -> App {
        let mut app = Self::create_app();
        app.config = Config::load().or_else(|| {
            // First run: write a default config the user can point at a data file
            let default = Config::default();
            default.save().ok().map(|_| default)
        });
        app.load_data();
        app
    }

    fn create_app() -> App {
        App {
            domain: DomainState::new(),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            home: HomeComponent::new(),
            detail: DetailPanel::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog,
            config: None,
        }
    }

    /// Load leads from the configured data file, falling back to the
    /// built-in sample set
    fn load_data(&mut self) {
        self.error = None;

        match &self.config {
            Some(config) if !config.data_path.is_empty() => {
                let path = PathBuf::from(&config.data_path);
                match services::load_leads(&path) {
                    Ok(leads) => {
                        self.status_message =
                            Some(format!("Loaded {} leads from {}", leads.len(), path.display()));
                        self.domain.all_leads = leads;
                        self.domain.data_path = Some(path);
                    }
                    Err(e) => {
                        self.error = Some(format!("{:#}", e));
                        self.domain.all_leads = services::sample_leads();
                        self.domain.data_path = None;
                    }
                }
            }
            _ => {
                self.domain.all_leads = services::sample_leads();
                self.domain.data_path = None;
                self.status_message =
                    Some("No data file configured; showing sample leads".to_string());
            }
        }

        self.home.select_first(&self.domain.all_leads);
    }

    /// Advance the selected lead to the next pipeline stage
    fn advance_selected_stage(&mut self) {
        let Some(lead) = self.home.get_selected_lead(&self.domain.all_leads) else {
            return;
        };
        let id = lead.id.clone();

        if let Some(lead) = self.domain.all_leads.iter_mut().find(|l| l.id == id) {
            let now = now_timestamp();
            match services::advance_stage(lead, &now) {
                Some(stage) => {
                    self.status_message = Some(format!("{} advanced to {}", lead.name, stage));
                }
                None => {
                    self.status_message =
                        Some(format!("{} cannot advance any further", lead.name));
                }
            }
        }
    }

    /// Key handling while search mode is active
    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    /// Delegate key handling to the top modal's component
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::LeadDetail => self.detail.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }
}

/// Current time as an RFC 3339 timestamp
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if self.home.search_mode {
            self.handle_search_key_event(key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => self.home.next(&self.domain.all_leads),
            Action::PrevItem => self.home.previous(&self.domain.all_leads),
            Action::NextTab => self.home.next_tab(&self.domain.all_leads),
            Action::PrevTab => self.home.previous_tab(&self.domain.all_leads),
            Action::FirstItem => self.home.select_first(&self.domain.all_leads),
            Action::LastItem => self.home.select_last(&self.domain.all_leads),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to DetailPanel while it is open)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                if matches!(self.modals.top(), Some(Modal::LeadDetail)) {
                    self.detail.update(action)?;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Detail Panel
            // ─────────────────────────────────────────────────────────────────
            Action::OpenDetail => {
                if let Some(lead) = self.home.get_selected_lead(&self.domain.all_leads) {
                    self.detail.set_lead(Some(lead));
                    self.modals.push(Modal::LeadDetail);
                }
            }
            Action::CloseDetail => {
                if matches!(self.modals.top(), Some(Modal::LeadDetail)) {
                    self.modals.pop();
                }
                // Clearing the lead drops the panel's cached content, so a
                // reopened panel always reflects the current selection
                self.detail.set_lead(None);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                if self.modals.top() == Some(&Modal::Help) {
                    self.modals.pop();
                } else {
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => {
                if self.modals.pop() == Some(Modal::LeadDetail) {
                    self.detail.set_lead(None);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.home.enter_search_mode(),
            Action::ExitSearchMode => self.home.exit_search_mode(),
            Action::SearchInput(c) => self.home.search_input(c, &self.domain.all_leads),
            Action::SearchBackspace => self.home.search_backspace(&self.domain.all_leads),

            // ─────────────────────────────────────────────────────────────────
            // Sorting
            // ─────────────────────────────────────────────────────────────────
            Action::CycleSortField => {
                self.home.cycle_sort_field(&self.domain.all_leads);
                self.status_message = Some(format!("Sorted by {}", self.home.sort_field.name()));
            }
            Action::ToggleSortOrder => {
                self.home.toggle_sort_order(&self.domain.all_leads);
                let direction = if self.home.sort_desc {
                    "descending"
                } else {
                    "ascending"
                };
                self.status_message = Some(format!(
                    "Sorted by {} {}",
                    self.home.sort_field.name(),
                    direction
                ));
            }

            // ─────────────────────────────────────────────────────────────────
            // Lead Operations
            // ─────────────────────────────────────────────────────────────────
            Action::AdvanceStage => self.advance_selected_stage(),
            Action::ReloadLeads => self.load_data(),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            leads: &self.domain.all_leads,
            status_message: self.status_message.as_deref(),
            error: self.error.as_deref(),
        };
        draw_home_screen(frame, area, &mut self.home, &ctx);

        // Modals render bottom to top; only the top one receives input
        for modal in self.modals.iter() {
            match modal {
                Modal::LeadDetail => {
                    self.detail
                        .draw(frame, slide_over(area, DETAIL_PANEL_PERCENT))?;
                }
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_leads;

    fn app_with_sample_leads() -> App {
        let mut app = App::create_app();
        app.domain.all_leads = sample_leads();
        app.home.select_first(&app.domain.all_leads);
        app
    }

    #[test]
    fn test_open_detail_requires_selection() {
        let mut app = App::create_app();
        app.update(Action::OpenDetail).unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut app = app_with_sample_leads();

        app.update(Action::OpenDetail).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::LeadDetail));

        app.update(Action::CloseDetail).unwrap();
        assert!(app.modals.is_empty());

        // Reopening picks up the current selection again
        app.update(Action::NextItem).unwrap();
        app.update(Action::OpenDetail).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::LeadDetail));
    }

    #[test]
    fn test_help_toggles() {
        let mut app = app_with_sample_leads();

        app.update(Action::OpenHelp).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::Help));

        app.update(Action::OpenHelp).unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_advance_stage_records_history() {
        let mut app = app_with_sample_leads();

        let before = app
            .home
            .get_selected_lead(&app.domain.all_leads)
            .unwrap()
            .clone();

        app.update(Action::AdvanceStage).unwrap();

        let after = app
            .domain
            .all_leads
            .iter()
            .find(|l| l.id == before.id)
            .unwrap();

        if before.current_stage == "Closed Won" {
            assert_eq!(after.stage_history.len(), before.stage_history.len());
        } else {
            assert_eq!(after.stage_history.len(), before.stage_history.len() + 1);
            assert_ne!(after.current_stage, before.current_stage);
        }
    }

    #[test]
    fn test_force_quit() {
        let mut app = app_with_sample_leads();
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_search_actions_filter_leads() {
        let mut app = app_with_sample_leads();

        app.update(Action::EnterSearchMode).unwrap();
        assert!(app.home.search_mode);

        app.update(Action::SearchInput('m')).unwrap();
        app.update(Action::SearchInput('a')).unwrap();
        app.update(Action::SearchInput('r')).unwrap();
        app.update(Action::SearchInput('i')).unwrap();
        app.update(Action::SearchInput('a')).unwrap();

        let filtered = app.home.get_filtered_leads(&app.domain.all_leads);
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|l| l.name.to_lowercase().contains("maria")
                || l.email.to_lowercase().contains("maria")
                || l.company.to_lowercase().contains("maria")));

        app.update(Action::ExitSearchMode).unwrap();
        assert!(!app.home.search_mode);
    }
}
