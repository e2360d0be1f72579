//! Services layer - data access and lead operations

pub mod sample;
pub mod store;

pub use sample::sample_leads;
pub use store::{
    advance_stage, load_leads, matches_search, new_lead, search_matcher, set_stage, sort_leads,
};
