//! Synthetic pilot symbol values
//! 
//! Pilots are drawn as QPSK points picked purely from their grid position.
//! The values carry no sequence meaning; they exist so each pilot has
//! something to plot.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// QPSK points indexed by `(row + col) mod 4`
pub const PILOT_CONSTELLATION: [Complex64; 4] = [
    Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Complex64::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Complex64::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    Complex64::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// Unit-magnitude value shown for the pilot at `(subcarrier, symbol)`
pub fn value_at(subcarrier: usize, symbol: usize) -> Complex64 {
    // Reduce first so huge indices cannot overflow
    PILOT_CONSTELLATION[(subcarrier % 4 + symbol % 4) % 4]
}
