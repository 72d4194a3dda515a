//! JSON report written to stdout

use common::types::BandwidthProfile;
use layers::phy::{PilotMapping, PilotOccupancy, PilotRecord};
use serde::Serialize;

/// Serializable view of a mapping
#[derive(Debug, Serialize)]
pub struct MappingReport<'a> {
    pub profile: &'a BandwidthProfile,
    pub pilot_count: usize,
    pub records: &'a [PilotRecord],
    pub occupancy: &'a PilotOccupancy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<u8>>>,
}

impl<'a> MappingReport<'a> {
    pub fn new(mapping: &'a PilotMapping, include_matrix: bool) -> Self {
        Self {
            profile: &mapping.profile,
            pilot_count: mapping.records.len(),
            records: &mapping.records,
            occupancy: &mapping.occupancy,
            matrix: include_matrix.then(|| mapping.matrix.to_rows()),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
