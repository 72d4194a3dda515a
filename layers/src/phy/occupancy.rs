//! Pilot occupancy summary
//! 
//! Numeric facts about where the pilots of one mapping sit in time and
//! frequency, derived from the ordered records and the bandwidth profile.

use super::pilot_records::PilotRecord;
use common::types::BandwidthProfile;
use common::utils::{occupied_bandwidth_hz, sample_rate_hz, time};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Time span of one pilot-bearing OFDM symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolWindow {
    /// OFDM symbol index
    pub col: usize,
    /// Symbol start in microseconds
    pub start_us: f64,
    /// Symbol end in microseconds
    pub end_us: f64,
}

/// Time/frequency occupancy of a pilot mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotOccupancy {
    /// Distinct pilot symbols, ascending by index
    pub symbol_windows: Vec<SymbolWindow>,
    /// Carrier center in Hz
    pub center_freq_hz: f64,
    /// Width of all occupied subcarriers in Hz
    pub occupied_bandwidth_hz: f64,
    /// Distance from the center to either band edge in Hz
    pub half_span_hz: f64,
    /// Sample rate implied by the profile's FFT size in Hz
    pub sample_rate_hz: f64,
}

impl PilotOccupancy {
    /// Summarize an assembled pilot list
    pub fn from_records(
        records: &[PilotRecord],
        profile: &BandwidthProfile,
        center_freq_hz: f64,
        subcarrier_spacing_hz: f64,
        symbol_duration_us: f64,
    ) -> Self {
        let symbols: BTreeSet<usize> = records.iter().map(|r| r.col).collect();
        let symbol_windows = symbols
            .into_iter()
            .map(|col| {
                let (start_us, end_us) = time::symbol_window_us(col, symbol_duration_us);
                SymbolWindow { col, start_us, end_us }
            })
            .collect();

        let occupied = occupied_bandwidth_hz(profile.subcarrier_count, subcarrier_spacing_hz);

        Self {
            symbol_windows,
            center_freq_hz,
            occupied_bandwidth_hz: occupied,
            half_span_hz: occupied / 2.0,
            sample_rate_hz: sample_rate_hz(profile.fft_size, subcarrier_spacing_hz),
        }
    }
}
