//! Pilot records
//!
//! Turns a placement matrix into per-pilot records in physical units and
//! puts them in display order.

use super::constellation::value_at;
use super::pilot_grid::PilotMatrix;
use common::utils::{subcarrier_frequency_hz, time};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Symbols listed first, in this order
pub const PRIORITY_SYMBOLS: [usize; 4] = [0, 4, 7, 11];

/// Rank given to symbols outside [`PRIORITY_SYMBOLS`]
pub const UNRANKED: usize = 99;

/// One pilot resource element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PilotRecord {
    /// Subcarrier index (grid row)
    pub row: usize,
    /// OFDM symbol index (grid column)
    pub col: usize,
    /// Absolute frequency in Hz
    pub freq_hz: f64,
    /// Symbol start time within the slot pair in microseconds
    pub time_us: f64,
    /// Synthetic pilot value
    pub symbol: Complex64,
}

impl PilotRecord {
    /// Sort key: `(symbol rank, row)`
    pub fn order_key(&self) -> (usize, usize) {
        (symbol_rank(self.col), self.row)
    }
}

/// Position of a symbol in the display order
pub fn symbol_rank(col: usize) -> usize {
    PRIORITY_SYMBOLS
        .iter()
        .position(|&c| c == col)
        .unwrap_or(UNRANKED)
}

/// Build the ordered pilot list for a placement matrix.
///
/// Records are collected row-major and then stably sorted by
/// `(symbol_rank(col), row)`, so unranked symbols sharing a row stay in
/// column order.
pub fn assemble(
    matrix: &PilotMatrix,
    center_freq_hz: f64,
    subcarrier_spacing_hz: f64,
    symbol_duration_us: f64,
) -> Vec<PilotRecord> {
    let subcarrier_count = matrix.subcarrier_count();

    let mut records: Vec<PilotRecord> = matrix
        .pilots()
        .map(|(row, col)| PilotRecord {
            row,
            col,
            freq_hz: subcarrier_frequency_hz(row, subcarrier_count, center_freq_hz, subcarrier_spacing_hz),
            time_us: time::symbol_start_us(col, symbol_duration_us),
            symbol: value_at(row, col),
        })
        .collect();

    records.sort_by_key(PilotRecord::order_key);

    debug!("Assembled {} pilot records from {}x{} grid",
           records.len(), subcarrier_count, matrix.symbols_per_slot());

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phy::pilot_grid::{generate_pilot_matrix, GridConfig};
    use common::types::Pci;
    use ndarray::Array2;
    use quickcheck_macros::quickcheck;

    fn records_for(pci: i64, port: i64, subcarriers: usize) -> Vec<PilotRecord> {
        let matrix = generate_pilot_matrix(&GridConfig::new(Pci::new(pci), port, subcarriers));
        assemble(&matrix, 2.3e9, 15_000.0, 66.67)
    }

    #[test]
    fn test_symbol_rank() {
        assert_eq!(symbol_rank(0), 0);
        assert_eq!(symbol_rank(4), 1);
        assert_eq!(symbol_rank(7), 2);
        assert_eq!(symbol_rank(11), 3);
        assert_eq!(symbol_rank(1), UNRANKED);
        assert_eq!(symbol_rank(8), UNRANKED);
    }

    #[test]
    fn test_first_record_default_config() {
        let records = records_for(0, 0, 72);
        assert_eq!(records.len(), 48);

        let first = records[0];
        assert_eq!((first.row, first.col), (0, 0));
        assert_eq!(first.freq_hz, 2.3e9 + (0.0 - 36.0) * 15_000.0);
        assert_eq!(first.freq_hz, 2_299_460_000.0);
        assert_eq!(first.time_us, 0.0);
        assert!((first.symbol.re - 0.7071).abs() < 1e-4);
        assert!((first.symbol.im - 0.7071).abs() < 1e-4);
    }

    #[test]
    fn test_ordering_groups_by_symbol() {
        let records = records_for(0, 0, 72);
        let cols: Vec<usize> = records.iter().map(|r| r.col).collect();

        // 12 pilots per symbol, symbols in 0, 4, 7, 11 order
        for (group, &col) in PRIORITY_SYMBOLS.iter().enumerate() {
            assert!(cols[group * 12..(group + 1) * 12].iter().all(|&c| c == col));
        }

        let rows_in_first: Vec<usize> = records[..12].iter().map(|r| r.row).collect();
        assert_eq!(rows_in_first, (0..72).step_by(6).collect::<Vec<_>>());
    }

    #[test]
    fn test_unranked_symbols_sorted_by_row() {
        // Port 2 only uses symbols 1 and 8; both unranked, so order is by row
        let records = records_for(0, 2, 72);
        assert_eq!(records.len(), 24);
        assert!(records.windows(2).all(|w| w[0].row < w[1].row));
        assert_eq!((records[0].row, records[0].col), (0, 1));
        assert_eq!((records[1].row, records[1].col), (3, 8));
    }

    #[test]
    fn test_record_units() {
        let records = records_for(0, 1, 72);
        for record in &records {
            let expected_freq = 2.3e9 + (record.row as f64 - 36.0) * 15_000.0;
            assert_eq!(record.freq_hz, expected_freq);
            assert_eq!(record.time_us, record.col as f64 * 66.67);
            assert_eq!(record.symbol, value_at(record.row, record.col));
        }
    }

    #[test]
    fn test_invalid_port_yields_no_records() {
        assert!(records_for(0, 5, 72).is_empty());
        assert!(records_for(321, 5, 1200).is_empty());
    }

    #[test]
    fn test_stable_order_for_same_row_unranked() {
        // Placement never puts two unranked symbols on one row, so build one by hand
        let mut grid = Array2::<u8>::zeros((3, 14));
        grid[(2, 8)] = 1;
        grid[(2, 1)] = 1;
        grid[(2, 0)] = 1;
        grid[(1, 13)] = 1;
        let records = assemble(&PilotMatrix::from_array(grid), 0.0, 1.0, 1.0);
        assert_eq!(
            records.iter().map(|r| (r.row, r.col)).collect::<Vec<_>>(),
            vec![(2, 0), (1, 13), (2, 1), (2, 8)]
        );
    }

    #[quickcheck]
    fn order_keys_non_decreasing(pci: i64, port: u8, rows: u8) -> bool {
        let records = records_for(pci, (port % 4) as i64, rows as usize);
        records.windows(2).all(|w| w[0].order_key() <= w[1].order_key())
    }
}
