//! Cell-Specific Reference Signal Placement
//!
//! Builds the pilot placement matrix for one slot pair from the cell ID and
//! antenna port. Rows are subcarriers, columns are OFDM symbols.

use common::types::{AntennaPort, Pci, SYMBOLS_PER_SLOT};
use ndarray::Array2;
use tracing::{debug, warn};

/// Row selector relative to the cell's vertical shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowOffset {
    /// Rows with `r mod 6 == v_shift`
    VShift,
    /// Rows with `r mod 6 == (v_shift + 3) mod 6`
    VShiftPlus3,
}

impl RowOffset {
    fn first_row(self, v_shift: usize) -> usize {
        match self {
            RowOffset::VShift => v_shift,
            RowOffset::VShiftPlus3 => (v_shift + 3) % 6,
        }
    }
}

/// One pilot-bearing symbol of a port pattern
#[derive(Debug, Clone, Copy)]
struct PilotPlacement {
    /// OFDM symbol carrying the pilots
    symbol: usize,
    /// Which subcarriers carry them
    offset: RowOffset,
    /// Symbol in the second slot that repeats the same rows
    mirror: Option<usize>,
}

impl PilotPlacement {
    const fn new(symbol: usize, offset: RowOffset, mirror: Option<usize>) -> Self {
        Self { symbol, offset, mirror }
    }
}

// Ports 0/1 share symbols {0, 4} mirrored to {7, 11}; ports 2/3 use symbols 1 and 8.
// Within each pair the odd port swaps the row offsets.
const PORT0_PATTERN: [PilotPlacement; 2] = [
    PilotPlacement::new(0, RowOffset::VShift, Some(7)),
    PilotPlacement::new(4, RowOffset::VShiftPlus3, Some(11)),
];
const PORT1_PATTERN: [PilotPlacement; 2] = [
    PilotPlacement::new(0, RowOffset::VShiftPlus3, Some(7)),
    PilotPlacement::new(4, RowOffset::VShift, Some(11)),
];
const PORT2_PATTERN: [PilotPlacement; 2] = [
    PilotPlacement::new(1, RowOffset::VShift, None),
    PilotPlacement::new(8, RowOffset::VShiftPlus3, None),
];
const PORT3_PATTERN: [PilotPlacement; 2] = [
    PilotPlacement::new(1, RowOffset::VShiftPlus3, None),
    PilotPlacement::new(8, RowOffset::VShift, None),
];

fn port_pattern(port: AntennaPort) -> &'static [PilotPlacement] {
    match port {
        AntennaPort::Port0 => &PORT0_PATTERN,
        AntennaPort::Port1 => &PORT1_PATTERN,
        AntennaPort::Port2 => &PORT2_PATTERN,
        AntennaPort::Port3 => &PORT3_PATTERN,
    }
}

/// Inputs to the placement rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Physical cell ID, only used modulo 6
    pub pci: Pci,
    /// Raw antenna port number; anything outside 0-3 places no pilots
    pub antenna_port: i64,
    /// Number of subcarriers (grid rows)
    pub subcarrier_count: usize,
    /// Number of OFDM symbols (grid columns)
    pub symbols_per_slot: usize,
}

impl GridConfig {
    /// Create a grid configuration with the normal-CP symbol count
    pub fn new(pci: Pci, antenna_port: i64, subcarrier_count: usize) -> Self {
        Self {
            pci,
            antenna_port,
            subcarrier_count,
            symbols_per_slot: SYMBOLS_PER_SLOT,
        }
    }
}

/// Binary pilot placement matrix: `[subcarrier, symbol]`, 1 where a pilot sits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PilotMatrix {
    grid: Array2<u8>,
}

impl PilotMatrix {
    /// All-zero matrix
    pub fn empty(subcarrier_count: usize, symbols_per_slot: usize) -> Self {
        Self {
            grid: Array2::zeros((subcarrier_count, symbols_per_slot)),
        }
    }

    /// Wrap an existing `[subcarrier, symbol]` array
    pub fn from_array(grid: Array2<u8>) -> Self {
        Self { grid }
    }

    fn mark(&mut self, subcarrier: usize, symbol: usize) {
        if let Some(cell) = self.grid.get_mut((subcarrier, symbol)) {
            *cell = 1;
        }
    }

    /// Number of rows
    pub fn subcarrier_count(&self) -> usize {
        self.grid.nrows()
    }

    /// Number of columns
    pub fn symbols_per_slot(&self) -> usize {
        self.grid.ncols()
    }

    /// Cell value, `None` when out of bounds
    pub fn get(&self, subcarrier: usize, symbol: usize) -> Option<u8> {
        self.grid.get((subcarrier, symbol)).copied()
    }

    /// Whether a pilot sits at this position
    pub fn is_pilot(&self, subcarrier: usize, symbol: usize) -> bool {
        self.get(subcarrier, symbol) == Some(1)
    }

    /// Number of marked cells
    pub fn pilot_count(&self) -> usize {
        self.grid.iter().filter(|&&v| v == 1).count()
    }

    /// Marked `(subcarrier, symbol)` positions in row-major order
    pub fn pilots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid
            .indexed_iter()
            .filter(|(_, &v)| v == 1)
            .map(|(pos, _)| pos)
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.grid.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Underlying array view
    pub fn as_array(&self) -> &Array2<u8> {
        &self.grid
    }
}

/// Generate the pilot placement matrix for a cell and antenna port
pub fn generate_pilot_matrix(config: &GridConfig) -> PilotMatrix {
    let mut matrix = PilotMatrix::empty(config.subcarrier_count, config.symbols_per_slot);

    let Some(port) = AntennaPort::from_index(config.antenna_port) else {
        warn!("Antenna port {} has no pilot pattern, returning empty grid", config.antenna_port);
        return matrix;
    };

    let v_shift = config.pci.v_shift();
    for placement in port_pattern(port) {
        let first_row = placement.offset.first_row(v_shift);
        for subcarrier in (first_row..config.subcarrier_count).step_by(6) {
            matrix.mark(subcarrier, placement.symbol);
            if let Some(mirror) = placement.mirror {
                matrix.mark(subcarrier, mirror);
            }
        }
    }

    debug!("Generated {} pilots for PCI {} (v_shift={}) on {:?}, {} subcarriers",
           matrix.pilot_count(), config.pci.0, v_shift, port, config.subcarrier_count);

    matrix
}
