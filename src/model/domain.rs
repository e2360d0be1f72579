//! Domain state - business/data state separate from UI concerns

use super::lead::Lead;
use std::path::PathBuf;

/// Domain state containing all business data
#[derive(Default)]
pub struct DomainState {
    /// All loaded leads
    pub all_leads: Vec<Lead>,

    /// Path the leads were loaded from, if any (None means sample data)
    pub data_path: Option<PathBuf>,
}

impl DomainState {
    /// Create a new domain state with default values
    pub fn new() -> Self {
        Self {
            all_leads: Vec::new(),
            data_path: None,
        }
    }
}
