//! Lead store - loading, searching, sorting, and stage updates
//!
//! Leads live in a plain JSON file. All mutation here is in-memory; the
//! store never writes lead data back to disk.

use crate::model::stage::{stage_index, LeadStage};
use crate::model::{Lead, SortField, StageTransition};
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// Load leads from a JSON file (an array of lead objects)
pub fn load_leads(path: &Path) -> Result<Vec<Lead>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read leads file: {}", path.display()))?;
    let leads: Vec<Lead> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse leads file: {}", path.display()))?;
    Ok(leads)
}

/// Build a case-insensitive substring matcher for a search query
///
/// Returns None for an empty query (no filtering).
pub fn search_matcher(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Check whether a lead matches the search query (name, email, or company)
pub fn matches_search(lead: &Lead, matcher: &Regex) -> bool {
    matcher.is_match(&lead.name)
        || matcher.is_match(&lead.email)
        || matcher.is_match(&lead.company)
}

/// Sort a slice of lead references by the given field and direction
pub fn sort_leads(leads: &mut [&Lead], field: SortField, descending: bool) {
    leads.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare_by(a: &Lead, b: &Lead, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
        SortField::Company => a.company.to_lowercase().cmp(&b.company.to_lowercase()),
        SortField::CreatedAt => {
            compare_timestamps(a.created_at.as_deref(), b.created_at.as_deref())
        }
        SortField::LastContacted => {
            compare_timestamps(a.last_contacted.as_deref(), b.last_contacted.as_deref())
        }
        SortField::Stage => {
            // Unknown stages sort after all known ones
            let ai = stage_index(&a.current_stage).unwrap_or(usize::MAX);
            let bi = stage_index(&b.current_stage).unwrap_or(usize::MAX);
            ai.cmp(&bi)
        }
    }
}

/// ISO-8601 timestamps compare chronologically as strings; missing sorts last
fn compare_timestamps(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Build a new lead with its initial stage history entry
///
/// The initial entry has no `from_stage`, marking where the lead started.
pub fn new_lead(
    id: &str,
    name: &str,
    email: &str,
    company: &str,
    stage: &str,
    created_at: &str,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
        status: "Not Engaged".to_string(),
        engaged: false,
        current_stage: stage.to_string(),
        stage_updated_at: Some(created_at.to_string()),
        stage_history: vec![StageTransition {
            from_stage: None,
            to_stage: stage.to_string(),
            changed_at: Some(created_at.to_string()),
            notes: None,
        }],
        last_contacted: None,
        created_at: Some(created_at.to_string()),
        updated_at: Some(created_at.to_string()),
    }
}

/// Move a lead to a different stage, recording the transition
///
/// A no-op when the stage is unchanged: no history entry, no timestamp
/// updates.
pub fn set_stage(lead: &mut Lead, new_stage: &str, now: &str, notes: Option<&str>) {
    if lead.current_stage == new_stage {
        return;
    }
    lead.stage_history.push(StageTransition {
        from_stage: Some(lead.current_stage.clone()),
        to_stage: new_stage.to_string(),
        changed_at: Some(now.to_string()),
        notes: notes.map(str::to_string),
    });
    lead.current_stage = new_stage.to_string();
    lead.stage_updated_at = Some(now.to_string());
    lead.updated_at = Some(now.to_string());
}

/// Advance a lead to the next pipeline stage
///
/// Returns the new stage label, or None when the lead is already at the
/// final stage or its current stage is unrecognized.
pub fn advance_stage(lead: &mut Lead, now: &str) -> Option<&'static str> {
    let next = LeadStage::from_label(&lead.current_stage)?.next()?;
    set_stage(lead, next.label(), now, None);
    Some(next.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, email: &str, company: &str, stage: &str, created: &str) -> Lead {
        new_lead("id", name, email, company, stage, created)
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let l = lead(
            "Grace Hopper",
            "grace@navy.example",
            "COBOL Systems",
            "New Lead",
            "2024-01-01T00:00:00Z",
        );
        let matcher = search_matcher("cobol").unwrap();
        assert!(matches_search(&l, &matcher));

        let matcher = search_matcher("HOPPER").unwrap();
        assert!(matches_search(&l, &matcher));

        let matcher = search_matcher("navy").unwrap();
        assert!(matches_search(&l, &matcher));

        let matcher = search_matcher("turing").unwrap();
        assert!(!matches_search(&l, &matcher));
    }

    #[test]
    fn test_search_matcher_empty_query() {
        assert!(search_matcher("").is_none());
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let a = lead("zoe", "z@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        let b = lead("Amy", "a@x.com", "X", "New Lead", "2024-01-02T00:00:00Z");
        let mut refs = vec![&a, &b];
        sort_leads(&mut refs, SortField::Name, false);
        assert_eq!(refs[0].name, "Amy");
    }

    #[test]
    fn test_sort_by_created_descending() {
        let a = lead("a", "a@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        let b = lead("b", "b@x.com", "X", "New Lead", "2024-06-01T00:00:00Z");
        let mut refs = vec![&a, &b];
        sort_leads(&mut refs, SortField::CreatedAt, true);
        assert_eq!(refs[0].name, "b");
    }

    #[test]
    fn test_sort_by_stage_unknown_last() {
        let a = lead("a", "a@x.com", "X", "Mystery", "2024-01-01T00:00:00Z");
        let b = lead("b", "b@x.com", "X", "Closed Won", "2024-01-01T00:00:00Z");
        let c = lead("c", "c@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        let mut refs = vec![&a, &b, &c];
        sort_leads(&mut refs, SortField::Stage, false);
        assert_eq!(refs[0].name, "c");
        assert_eq!(refs[1].name, "b");
        assert_eq!(refs[2].name, "a");
    }

    #[test]
    fn test_new_lead_records_initial_transition() {
        let l = lead("a", "a@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        assert_eq!(l.stage_history.len(), 1);
        assert!(l.stage_history[0].from_stage.is_none());
        assert_eq!(l.stage_history[0].to_stage, "New Lead");
    }

    #[test]
    fn test_set_stage_records_transition() {
        let mut l = lead("a", "a@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        set_stage(&mut l, "Engaged", "2024-02-01T00:00:00Z", Some("intro call"));

        assert_eq!(l.current_stage, "Engaged");
        assert_eq!(l.stage_history.len(), 2);
        let last = l.stage_history.last().unwrap();
        assert_eq!(last.from_stage.as_deref(), Some("New Lead"));
        assert_eq!(last.to_stage, "Engaged");
        assert_eq!(last.notes.as_deref(), Some("intro call"));
        assert_eq!(l.stage_updated_at.as_deref(), Some("2024-02-01T00:00:00Z"));
    }

    #[test]
    fn test_set_stage_same_stage_is_noop() {
        let mut l = lead("a", "a@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        set_stage(&mut l, "New Lead", "2024-02-01T00:00:00Z", None);
        assert_eq!(l.stage_history.len(), 1);
        assert_eq!(l.updated_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_advance_stage_walks_pipeline() {
        let mut l = lead("a", "a@x.com", "X", "New Lead", "2024-01-01T00:00:00Z");
        assert_eq!(advance_stage(&mut l, "2024-02-01T00:00:00Z"), Some("Engaged"));
        assert_eq!(l.stage_history.len(), 2);
    }

    #[test]
    fn test_advance_stage_stops_at_final() {
        let mut l = lead("a", "a@x.com", "X", "Closed Won", "2024-01-01T00:00:00Z");
        assert_eq!(advance_stage(&mut l, "2024-02-01T00:00:00Z"), None);
        assert_eq!(l.stage_history.len(), 1);
    }

    #[test]
    fn test_advance_stage_unknown_stage_is_noop() {
        let mut l = lead("a", "a@x.com", "X", "Mystery", "2024-01-01T00:00:00Z");
        assert_eq!(advance_stage(&mut l, "2024-02-01T00:00:00Z"), None);
        assert_eq!(l.current_stage, "Mystery");
    }
}
