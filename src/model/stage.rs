//! Pipeline stages - the fixed, globally ordered stage enumeration
//!
//! Stage order defines a lead's position in the pipeline and drives the
//! progress bar fill computation.

/// A discrete step in the lead pipeline, in progression order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadStage {
    NewLead,
    Engaged,
    ProposalSent,
    Negotiation,
    ClosedWon,
}

impl LeadStage {
    /// All stages in pipeline order
    pub fn all() -> [LeadStage; 5] {
        [
            LeadStage::NewLead,
            LeadStage::Engaged,
            LeadStage::ProposalSent,
            LeadStage::Negotiation,
            LeadStage::ClosedWon,
        ]
    }

    /// Display label, also the wire value stored on leads
    pub fn label(&self) -> &'static str {
        match self {
            LeadStage::NewLead => "New Lead",
            LeadStage::Engaged => "Engaged",
            LeadStage::ProposalSent => "Proposal Sent",
            LeadStage::Negotiation => "Negotiation",
            LeadStage::ClosedWon => "Closed Won",
        }
    }

    /// Parse a stage from its label
    pub fn from_label(label: &str) -> Option<LeadStage> {
        LeadStage::all().into_iter().find(|s| s.label() == label)
    }

    /// The stage after this one, or None at the end of the pipeline
    pub fn next(&self) -> Option<LeadStage> {
        let stages = LeadStage::all();
        let index = stages.iter().position(|s| s == self)?;
        stages.get(index + 1).copied()
    }
}

/// Position of a stage label in the pipeline, or None if unrecognized
pub fn stage_index(stage: &str) -> Option<usize> {
    LeadStage::all().iter().position(|s| s.label() == stage)
}

/// Progress percentage for a stage: `index / (count - 1) * 100`
///
/// An unrecognized stage takes index -1 and yields a negative percentage.
/// That is the historical lookup-miss behavior; callers clamp at render
/// time, never here.
pub fn progress_percent(stage: &str) -> f64 {
    let index = stage_index(stage).map(|i| i as f64).unwrap_or(-1.0);
    let total = (LeadStage::all().len() - 1) as f64;
    index / total * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let stages = LeadStage::all();
        assert_eq!(stages[0].label(), "New Lead");
        assert_eq!(stages[4].label(), "Closed Won");
    }

    #[test]
    fn test_from_label_round_trip() {
        for stage in LeadStage::all() {
            assert_eq!(LeadStage::from_label(stage.label()), Some(stage));
        }
        assert_eq!(LeadStage::from_label("Cold Call"), None);
    }

    #[test]
    fn test_next_stage() {
        assert_eq!(LeadStage::NewLead.next(), Some(LeadStage::Engaged));
        assert_eq!(LeadStage::Negotiation.next(), Some(LeadStage::ClosedWon));
        assert_eq!(LeadStage::ClosedWon.next(), None);
    }

    #[test]
    fn test_progress_percent_endpoints() {
        assert_eq!(progress_percent("New Lead"), 0.0);
        assert_eq!(progress_percent("Closed Won"), 100.0);
    }

    #[test]
    fn test_progress_percent_middle() {
        assert_eq!(progress_percent("Proposal Sent"), 50.0);
    }

    #[test]
    fn test_progress_percent_unknown_is_negative() {
        // Lookup miss maps to index -1: -100 / (n - 1), not clamped
        assert_eq!(progress_percent("Cold Call"), -25.0);
    }
}
