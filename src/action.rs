//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next lead in the list
    NextItem,
    /// Move to previous lead in the list
    PrevItem,
    /// Move to next engagement tab
    NextTab,
    /// Move to previous engagement tab
    PrevTab,
    /// Jump to first lead
    FirstItem,
    /// Jump to last lead
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling (detail panel)
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll detail panel up one line
    ScrollUp,
    /// Scroll detail panel down one line
    ScrollDown,
    /// Scroll detail panel up one page
    PageUp,
    /// Scroll detail panel down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Detail Panel
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail slide-over for the selected lead
    OpenDetail,
    /// Close the detail slide-over
    CloseDetail,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search query
    SearchInput(char),
    /// Remove last character from search query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Sorting
    // ─────────────────────────────────────────────────────────────────────────
    /// Cycle to the next sort field
    CycleSortField,
    /// Toggle ascending/descending sort order
    ToggleSortOrder,

    // ─────────────────────────────────────────────────────────────────────────
    // Lead Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Advance the selected lead to the next pipeline stage
    AdvanceStage,
    /// Reload leads from the configured data file
    ReloadLeads,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenDetail => write!(f, "OpenDetail"),
            Action::CloseDetail => write!(f, "CloseDetail"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::CycleSortField => write!(f, "CycleSortField"),
            Action::ToggleSortOrder => write!(f, "ToggleSortOrder"),
            Action::AdvanceStage => write!(f, "AdvanceStage"),
            Action::ReloadLeads => write!(f, "ReloadLeads"),
        }
    }
}
