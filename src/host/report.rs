//! Serializable snapshot of a host's registrations.

use serde::{Deserialize, Serialize};

/// One registered pair and the operations its mapping supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSummary {
    pub source: String,
    pub destination: String,
    pub create: bool,
    pub populate: bool,
}

/// Every registration of a host, ordered by source then destination name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostReport {
    pub name: String,
    pub mappings: Vec<MappingSummary>,
}

impl HostReport {
    /// Registrations that cannot create new destinations
    pub fn populate_only(&self) -> impl Iterator<Item = &MappingSummary> {
        self.mappings.iter().filter(|summary| !summary.create)
    }

    /// Registrations that cannot populate existing destinations
    pub fn create_only(&self) -> impl Iterator<Item = &MappingSummary> {
        self.mappings.iter().filter(|summary| !summary.populate)
    }
}
