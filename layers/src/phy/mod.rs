//! Physical Layer (PHY) Submodules
//!
//! This module contains the LTE cell-specific reference signal mapping:
//! bandwidth resolution, pilot placement, pilot values and the ordered
//! pilot list handed to presentation.

pub mod pilot_grid;
pub mod constellation;
pub mod pilot_records;
pub mod occupancy;

// Re-export commonly used types
pub use pilot_grid::{generate_pilot_matrix, GridConfig, PilotMatrix};
pub use constellation::value_at;
pub use pilot_records::{assemble, symbol_rank, PilotRecord};
pub use occupancy::{PilotOccupancy, SymbolWindow};

use crate::LayerError;
use common::types::{AntennaPort, BandwidthProfile, Pci};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Radio configuration for one pilot mapping request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrsConfig {
    /// Carrier center frequency in Hz
    pub center_freq_hz: f64,
    /// Subcarrier spacing in Hz
    pub subcarrier_spacing_hz: f64,
    /// OFDM symbol duration in microseconds
    pub symbol_duration_us: f64,
    /// Physical cell ID
    pub pci: i64,
    /// Antenna port (0-3)
    pub antenna_port: i64,
    /// Channel bandwidth in MHz (1.4, 3, 5, 10, 15, 20)
    pub bandwidth_mhz: f64,
}

impl Default for CrsConfig {
    fn default() -> Self {
        Self {
            center_freq_hz: 2.3e9,
            subcarrier_spacing_hz: 15_000.0,
            symbol_duration_us: 66.67,
            pci: 0,
            antenna_port: 0,
            bandwidth_mhz: 1.4,
        }
    }
}

impl CrsConfig {
    /// Strict checks on top of the lenient mapping.
    ///
    /// [`generate`] never calls this; unknown bandwidths and ports are
    /// absorbed there. Callers that want mistakes reported run it first.
    pub fn validate(&self) -> Result<(), LayerError> {
        for (name, value) in [
            ("center_freq_hz", self.center_freq_hz),
            ("subcarrier_spacing_hz", self.subcarrier_spacing_hz),
            ("symbol_duration_us", self.symbol_duration_us),
        ] {
            if !value.is_finite() {
                return Err(LayerError::InvalidConfiguration(
                    format!("{} must be finite, got {}", name, value)
                ));
            }
        }

        if BandwidthProfile::lookup(self.bandwidth_mhz).is_none() {
            return Err(LayerError::UnknownBandwidth(self.bandwidth_mhz));
        }

        if AntennaPort::from_index(self.antenna_port).is_none() {
            return Err(LayerError::InvalidAntennaPort(self.antenna_port));
        }

        if !Pci::new(self.pci).is_standard() {
            return Err(LayerError::InvalidPci(self.pci));
        }

        Ok(())
    }
}

/// Result of one mapping request
#[derive(Debug, Clone, PartialEq)]
pub struct PilotMapping {
    /// Resolved bandwidth profile
    pub profile: BandwidthProfile,
    /// Placement matrix
    pub matrix: PilotMatrix,
    /// Pilots in display order
    pub records: Vec<PilotRecord>,
    /// Time/frequency summary of the records
    pub occupancy: PilotOccupancy,
}

/// Compute the pilot matrix and ordered records for a configuration.
///
/// Total over its inputs: an unknown bandwidth maps as 1.4 MHz and an
/// antenna port outside 0-3 gives an empty matrix and no records.
pub fn generate(config: &CrsConfig) -> PilotMapping {
    let profile = BandwidthProfile::resolve(config.bandwidth_mhz);
    debug!("Resolved {} MHz to {} subcarriers, FFT size {}",
           config.bandwidth_mhz, profile.subcarrier_count, profile.fft_size);

    let grid_config = GridConfig::new(Pci::new(config.pci), config.antenna_port, profile.subcarrier_count);
    let matrix = generate_pilot_matrix(&grid_config);

    let records = assemble(
        &matrix,
        config.center_freq_hz,
        config.subcarrier_spacing_hz,
        config.symbol_duration_us,
    );

    let occupancy = PilotOccupancy::from_records(
        &records,
        &profile,
        config.center_freq_hz,
        config.subcarrier_spacing_hz,
        config.symbol_duration_us,
    );

    info!("Mapped {} pilots for PCI {} port {} at {} MHz",
          records.len(), config.pci, config.antenna_port, profile.bandwidth_mhz);

    PilotMapping {
        profile,
        matrix,
        records,
        occupancy,
    }
}
