//! Lead records and stage history
//!
//! Leads are loaded from JSON and treated as externally owned data: the
//! display components never validate or reorder what they are given.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A sales/CRM prospect record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    /// Engagement status label ("Engaged", "Not Engaged", ...)
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub engaged: bool,
    pub current_stage: String,
    #[serde(default)]
    pub stage_updated_at: Option<String>,
    /// Chronological stage changes, oldest first (caller-guaranteed order)
    #[serde(default)]
    pub stage_history: Vec<StageTransition>,
    #[serde(default)]
    pub last_contacted: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A historical record of moving (or starting) at a given stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageTransition {
    /// None for the initial entry recorded at lead creation
    #[serde(default)]
    pub from_stage: Option<String>,
    pub to_stage: String,
    #[serde(default)]
    pub changed_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Format a timestamp for display as "Mon D, YYYY" (e.g. "Jan 5, 2024")
///
/// Missing or unparsable input renders as the literal "N/A". Parse failure
/// is never surfaced further.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "N/A".to_string();
    };

    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Parse an ISO-8601 timestamp or bare date down to its calendar date
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // Timestamps without an offset (e.g. "2024-01-05T09:30:00.123")
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date(Some("2024-01-05T09:30:00Z")), "Jan 5, 2024");
        assert_eq!(
            format_date(Some("2023-11-21T17:00:00+02:00")),
            "Nov 21, 2023"
        );
    }

    #[test]
    fn test_format_date_naive_and_bare() {
        assert_eq!(format_date(Some("2024-03-15T08:00:00")), "Mar 15, 2024");
        assert_eq!(format_date(Some("2024-03-15T08:00:00.250")), "Mar 15, 2024");
        assert_eq!(format_date(Some("2024-12-01")), "Dec 1, 2024");
    }

    #[test]
    fn test_format_date_missing_or_invalid() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("")), "N/A");
        assert_eq!(format_date(Some("not-a-date")), "N/A");
        assert_eq!(format_date(Some("2024-13-40")), "N/A");
    }

    #[test]
    fn test_lead_deserialize_minimal() {
        let json = r#"{
            "id": "1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "company": "Analytical Engines",
            "current_stage": "New Lead"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.name, "Ada Lovelace");
        assert!(lead.stage_history.is_empty());
        assert!(lead.last_contacted.is_none());
        assert!(!lead.engaged);
    }

    #[test]
    fn test_stage_transition_deserialize_initial() {
        let json = r#"{"from_stage": null, "to_stage": "New Lead", "changed_at": "2024-01-05T09:30:00Z"}"#;
        let transition: StageTransition = serde_json::from_str(json).unwrap();
        assert!(transition.from_stage.is_none());
        assert_eq!(transition.to_stage, "New Lead");
        assert!(transition.notes.is_none());
    }
}
