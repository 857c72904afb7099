use serde::{Deserialize, Serialize};

/// Registry-wide counters, projected from the registry object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_sites: u64,
    pub total_pages: u64,
    pub total_templates: u64,
    /// Registry administrator address
    pub admin: String,
}
