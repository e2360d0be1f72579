//! Modal stack for managing overlays
//!
//! Replaces scattered boolean flags (detail_open, show_help, ...) with an
//! enum-based modal stack. Opening the detail slide-over is a push; its
//! close action is a pop, so the panel's lifetime is exactly scoped to the
//! stack entry.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Lead detail slide-over panel
    LeadDetail,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterate modals from bottom to top (render order)
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::LeadDetail);
        assert!(stack.top().is_some());

        stack.push(Modal::QuitConfirm);

        let top = stack.pop();
        assert_eq!(top, Some(Modal::QuitConfirm));

        let top = stack.pop();
        assert_eq!(top, Some(Modal::LeadDetail));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_modal_stack_top() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Help));

        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));
    }

    #[test]
    fn test_modal_stack_render_order() {
        let mut stack = ModalStack::new();
        stack.push(Modal::LeadDetail);
        stack.push(Modal::Help);

        let order: Vec<&Modal> = stack.iter().collect();
        assert_eq!(order, vec![&Modal::LeadDetail, &Modal::Help]);
    }
}
