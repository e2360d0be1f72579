//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Lead` / `StageTransition` - the lead records being browsed
//! - `LeadStage` - the fixed ordered pipeline stage enumeration
//! - `DomainState` - business/data state
//! - `Tab` / `SortField` - presentation state helpers
//! - `ModalStack` - modal overlay management

pub mod domain;
pub mod lead;
pub mod modal;
pub mod stage;
pub mod ui;

// Re-export commonly used types
pub use domain::DomainState;
pub use lead::{format_date, Lead, StageTransition};
pub use modal::{Modal, ModalStack};
pub use stage::{progress_percent, stage_index, LeadStage};
pub use ui::{lead_matches_tab, SortField, Tab};
