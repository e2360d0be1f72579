//! Built-in sample leads
//!
//! Used when no data file is configured (or the configured file is missing)
//! so the UI is browsable out of the box. Timestamps are fixed so the
//! default view is deterministic.

use crate::model::{Lead, StageTransition};
use crate::services::store::{new_lead, set_stage};

/// A small deterministic set of demo leads covering the pipeline
pub fn sample_leads() -> Vec<Lead> {
    let mut leads = Vec::new();

    let mut lead = new_lead(
        "lead-001",
        "Maria Santos",
        "maria.santos@brightline.example",
        "Brightline Logistics",
        "New Lead",
        "2024-01-08T09:15:00Z",
    );
    set_stage(
        &mut lead,
        "Engaged",
        "2024-01-15T14:30:00Z",
        Some("Replied to cold outreach"),
    );
    set_stage(
        &mut lead,
        "Proposal Sent",
        "2024-02-02T11:00:00Z",
        Some("Sent annual plan proposal"),
    );
    lead.engaged = true;
    lead.status = "Engaged".to_string();
    lead.last_contacted = Some("2024-02-02T11:00:00Z".to_string());
    leads.push(lead);

    let mut lead = new_lead(
        "lead-002",
        "James Okafor",
        "j.okafor@terravolt.example",
        "TerraVolt Energy",
        "New Lead",
        "2024-01-12T16:45:00Z",
    );
    set_stage(&mut lead, "Engaged", "2024-01-20T10:00:00Z", None);
    set_stage(
        &mut lead,
        "Proposal Sent",
        "2024-02-10T09:30:00Z",
        Some("Custom pricing requested"),
    );
    set_stage(
        &mut lead,
        "Negotiation",
        "2024-03-01T15:20:00Z",
        Some("Legal review in progress"),
    );
    lead.engaged = true;
    lead.status = "Engaged".to_string();
    lead.last_contacted = Some("2024-03-05T13:00:00Z".to_string());
    leads.push(lead);

    let mut lead = new_lead(
        "lead-003",
        "Priya Raman",
        "priya@cloudforge.example",
        "Cloudforge Labs",
        "New Lead",
        "2024-02-01T08:00:00Z",
    );
    set_stage(&mut lead, "Engaged", "2024-02-14T12:10:00Z", None);
    set_stage(&mut lead, "Proposal Sent", "2024-02-28T17:45:00Z", None);
    set_stage(&mut lead, "Negotiation", "2024-03-12T10:30:00Z", None);
    set_stage(
        &mut lead,
        "Closed Won",
        "2024-03-25T16:00:00Z",
        Some("Two-year contract signed"),
    );
    lead.engaged = true;
    lead.status = "Engaged".to_string();
    lead.last_contacted = Some("2024-03-25T16:00:00Z".to_string());
    leads.push(lead);

    // Never contacted, still at the top of the funnel
    let lead = new_lead(
        "lead-004",
        "Tomás Herrera",
        "tomas.herrera@andina.example",
        "Andina Foods",
        "New Lead",
        "2024-03-18T11:25:00Z",
    );
    leads.push(lead);

    let mut lead = new_lead(
        "lead-005",
        "Yuki Tanaka",
        "y.tanaka@kitsune.example",
        "Kitsune Robotics",
        "New Lead",
        "2024-02-20T07:40:00Z",
    );
    set_stage(
        &mut lead,
        "Engaged",
        "2024-03-02T09:00:00Z",
        Some("Met at robotics expo"),
    );
    lead.engaged = true;
    lead.status = "Engaged".to_string();
    lead.last_contacted = Some("2024-03-02T09:00:00Z".to_string());
    leads.push(lead);

    // Hand-built record with a missing transition timestamp; the timeline
    // renders "N/A" for it
    leads.push(Lead {
        id: "lead-006".to_string(),
        name: "Elena Petrova".to_string(),
        email: "elena@volkhov.example".to_string(),
        company: "Volkhov Analytics".to_string(),
        status: "Not Engaged".to_string(),
        engaged: false,
        current_stage: "Engaged".to_string(),
        stage_updated_at: None,
        stage_history: vec![
            StageTransition {
                from_stage: None,
                to_stage: "New Lead".to_string(),
                changed_at: Some("2023-12-04T10:00:00Z".to_string()),
                notes: None,
            },
            StageTransition {
                from_stage: Some("New Lead".to_string()),
                to_stage: "Engaged".to_string(),
                changed_at: None,
                notes: Some("Imported from legacy CRM".to_string()),
            },
        ],
        last_contacted: None,
        created_at: Some("2023-12-04T10:00:00Z".to_string()),
        updated_at: None,
    });

    let mut lead = new_lead(
        "lead-007",
        "Derek Holm",
        "dholm@nordsjo.example",
        "Nordsjo Marine",
        "New Lead",
        "2024-01-29T13:50:00Z",
    );
    set_stage(&mut lead, "Engaged", "2024-02-08T15:15:00Z", None);
    set_stage(
        &mut lead,
        "Proposal Sent",
        "2024-02-22T10:05:00Z",
        Some("Waiting on procurement"),
    );
    lead.engaged = true;
    lead.status = "Engaged".to_string();
    lead.last_contacted = Some("2024-02-26T14:40:00Z".to_string());
    leads.push(lead);

    let lead = new_lead(
        "lead-008",
        "Amara Diallo",
        "amara.diallo@sahelia.example",
        "Sahelia Telecom",
        "New Lead",
        "2024-03-22T09:05:00Z",
    );
    leads.push(lead);

    leads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::stage_index;

    #[test]
    fn test_sample_leads_nonempty() {
        let leads = sample_leads();
        assert!(leads.len() >= 5);
    }

    #[test]
    fn test_sample_histories_start_without_from_stage() {
        for lead in sample_leads() {
            let first = lead.stage_history.first().unwrap();
            assert!(first.from_stage.is_none(), "lead {}", lead.id);
        }
    }

    #[test]
    fn test_sample_stages_are_known() {
        for lead in sample_leads() {
            assert!(
                stage_index(&lead.current_stage).is_some(),
                "unknown stage on {}",
                lead.id
            );
        }
    }

    #[test]
    fn test_sample_history_matches_current_stage() {
        for lead in sample_leads() {
            let last = lead.stage_history.last().unwrap();
            assert_eq!(last.to_stage, lead.current_stage, "lead {}", lead.id);
        }
    }
}
