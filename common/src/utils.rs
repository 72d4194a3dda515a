//! Common Utilities
//! 
//! Numeric helpers for converting grid positions into physical units

use tracing::trace;

/// Total bandwidth occupied by `subcarrier_count` tones
pub fn occupied_bandwidth_hz(subcarrier_count: usize, subcarrier_spacing_hz: f64) -> f64 {
    subcarrier_count as f64 * subcarrier_spacing_hz
}

/// Baseband sample rate implied by an FFT size and tone spacing
pub fn sample_rate_hz(fft_size: usize, subcarrier_spacing_hz: f64) -> f64 {
    let rate = fft_size as f64 * subcarrier_spacing_hz;
    trace!("Sample rate {} Hz for FFT size {} at {} Hz spacing",
           rate, fft_size, subcarrier_spacing_hz);
    rate
}

/// Frequency of a grid row relative to the carrier.
///
/// Row `subcarrier_count / 2` lands on the center frequency; the half count
/// uses real division so odd counts give a half-tone offset.
pub fn subcarrier_frequency_hz(
    row: usize,
    subcarrier_count: usize,
    center_freq_hz: f64,
    subcarrier_spacing_hz: f64,
) -> f64 {
    center_freq_hz + (row as f64 - subcarrier_count as f64 / 2.0) * subcarrier_spacing_hz
}

/// Time utilities for symbol calculations
pub mod time {
    /// Start time of an OFDM symbol within the slot in microseconds
    pub fn symbol_start_us(symbol: usize, symbol_duration_us: f64) -> f64 {
        symbol as f64 * symbol_duration_us
    }

    /// `(start, end)` of an OFDM symbol in microseconds
    pub fn symbol_window_us(symbol: usize, symbol_duration_us: f64) -> (f64, f64) {
        let start = symbol_start_us(symbol, symbol_duration_us);
        (start, start + symbol_duration_us)
    }
}
