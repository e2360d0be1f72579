//! UI state - presentation state separate from domain data

use crate::model::lead::Lead;

/// Engagement tab selection in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    Engaged,
    NotEngaged,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::All, Tab::Engaged, Tab::NotEngaged]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::All => "All",
            Tab::Engaged => "Engaged",
            Tab::NotEngaged => "Not Engaged",
        }
    }

    /// Engagement filter for this tab (None means no filter)
    pub fn engaged_filter(&self) -> Option<bool> {
        match self {
            Tab::All => None,
            Tab::Engaged => Some(true),
            Tab::NotEngaged => Some(false),
        }
    }
}

/// Field the lead list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
    Company,
    CreatedAt,
    LastContacted,
    Stage,
}

impl SortField {
    pub fn all() -> Vec<SortField> {
        vec![
            SortField::Name,
            SortField::Email,
            SortField::Company,
            SortField::CreatedAt,
            SortField::LastContacted,
            SortField::Stage,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Company => "company",
            SortField::CreatedAt => "created",
            SortField::LastContacted => "last contacted",
            SortField::Stage => "stage",
        }
    }

    /// The next sort field in cycling order, wrapping around
    pub fn next(&self) -> SortField {
        let fields = SortField::all();
        let index = fields.iter().position(|f| f == self).unwrap_or(0);
        fields[(index + 1) % fields.len()]
    }

    /// Whether this field sorts descending by default (timestamps newest first)
    pub fn default_descending(&self) -> bool {
        matches!(self, SortField::CreatedAt | SortField::LastContacted)
    }
}

impl Default for SortField {
    fn default() -> Self {
        SortField::CreatedAt
    }
}

/// Check whether a lead matches the given engagement tab
pub fn lead_matches_tab(lead: &Lead, tab: Tab) -> bool {
    match tab.engaged_filter() {
        Some(wanted) => lead.engaged == wanted,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_cycle_wraps() {
        let mut field = SortField::Name;
        for _ in 0..SortField::all().len() {
            field = field.next();
        }
        assert_eq!(field, SortField::Name);
    }

    #[test]
    fn test_sort_field_default() {
        assert_eq!(SortField::default(), SortField::CreatedAt);
        assert!(SortField::CreatedAt.default_descending());
        assert!(!SortField::Name.default_descending());
    }

    #[test]
    fn test_tab_filters() {
        assert_eq!(Tab::All.engaged_filter(), None);
        assert_eq!(Tab::Engaged.engaged_filter(), Some(true));
        assert_eq!(Tab::NotEngaged.engaged_filter(), Some(false));
    }
}
