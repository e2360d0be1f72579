//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod detail_panel;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod stage_progress;

pub use detail_panel::DetailPanel;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup, slide_over};
pub use quit_dialog::QuitDialog;
pub use stage_progress::StageProgressIndicator;
