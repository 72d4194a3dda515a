//! Common Types for LTE Pilot Mapping
//!
//! Defines the radio configuration primitives shared by the grid engine and the CLI

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Number of OFDM symbols in one slot pair (normal cyclic prefix)
pub const SYMBOLS_PER_SLOT: usize = 14;

/// Physical Cell Identity
///
/// Kept as a signed value: the cell ID is taken verbatim from the caller and
/// only ever consumed modulo 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pci(pub i64);

impl Pci {
    /// Maximum PCI defined for LTE (0-503)
    pub const MAX: i64 = 503;

    /// Create a new PCI (no range check)
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Vertical shift of the reference signal pattern, always in [0, 5]
    pub fn v_shift(&self) -> usize {
        self.0.rem_euclid(6) as usize
    }

    /// Whether the value lies in the standard LTE range
    pub fn is_standard(&self) -> bool {
        (0..=Self::MAX).contains(&self.0)
    }
}

/// Cell-specific reference signal antenna port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize, Deserialize)]
pub enum AntennaPort {
    /// Port 0
    Port0 = 0,
    /// Port 1
    Port1 = 1,
    /// Port 2
    Port2 = 2,
    /// Port 3
    Port3 = 3,
}

impl AntennaPort {
    /// Map a raw port number, `None` outside 0-3
    pub fn from_index(port: i64) -> Option<Self> {
        Self::from_i64(port)
    }
}

/// LTE channel bandwidths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bandwidth {
    /// 1.4 MHz
    Bw1_4,
    /// 3 MHz
    Bw3,
    /// 5 MHz
    Bw5,
    /// 10 MHz
    Bw10,
    /// 15 MHz
    Bw15,
    /// 20 MHz
    Bw20,
}

impl Bandwidth {
    /// All supported bandwidths, narrowest first
    pub const ALL: [Bandwidth; 6] = [
        Bandwidth::Bw1_4,
        Bandwidth::Bw3,
        Bandwidth::Bw5,
        Bandwidth::Bw10,
        Bandwidth::Bw15,
        Bandwidth::Bw20,
    ];

    /// Get bandwidth in MHz
    pub fn as_mhz(&self) -> f64 {
        match self {
            Bandwidth::Bw1_4 => 1.4,
            Bandwidth::Bw3 => 3.0,
            Bandwidth::Bw5 => 5.0,
            Bandwidth::Bw10 => 10.0,
            Bandwidth::Bw15 => 15.0,
            Bandwidth::Bw20 => 20.0,
        }
    }

    /// Exact match on the MHz value
    pub fn from_mhz(mhz: f64) -> Option<Self> {
        Self::ALL.iter().copied().find(|bw| bw.as_mhz() == mhz)
    }

    /// Subcarrier count and FFT size for this bandwidth
    pub fn profile(&self) -> BandwidthProfile {
        let (subcarrier_count, fft_size) = match self {
            Bandwidth::Bw1_4 => (72, 128),
            Bandwidth::Bw3 => (180, 256),
            Bandwidth::Bw5 => (300, 512),
            Bandwidth::Bw10 => (600, 1024),
            Bandwidth::Bw15 => (900, 1536),
            Bandwidth::Bw20 => (1200, 2048),
        };

        BandwidthProfile {
            bandwidth_mhz: self.as_mhz(),
            subcarrier_count,
            fft_size,
        }
    }
}

/// Grid dimensions belonging to one channel bandwidth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandwidthProfile {
    /// Channel bandwidth in MHz
    pub bandwidth_mhz: f64,
    /// Number of occupied subcarriers (grid rows)
    pub subcarrier_count: usize,
    /// FFT size
    pub fft_size: usize,
}

impl BandwidthProfile {
    /// Resolve a bandwidth selector.
    ///
    /// Values outside the LTE table fall back to the 1.4 MHz profile without
    /// signalling anything to the caller.
    pub fn resolve(bandwidth_mhz: f64) -> Self {
        Self::lookup(bandwidth_mhz).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown bandwidth {} MHz, falling back to {} MHz",
                bandwidth_mhz,
                Bandwidth::Bw1_4.as_mhz()
            );
            Bandwidth::Bw1_4.profile()
        })
    }

    /// Strict lookup, `None` for values outside the table
    pub fn lookup(bandwidth_mhz: f64) -> Option<Self> {
        Bandwidth::from_mhz(bandwidth_mhz).map(|bw| bw.profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_bandwidth_profile_table() {
        let expected = [
            (1.4, 72, 128),
            (3.0, 180, 256),
            (5.0, 300, 512),
            (10.0, 600, 1024),
            (15.0, 900, 1536),
            (20.0, 1200, 2048),
        ];

        for (mhz, subcarriers, fft) in expected {
            let profile = BandwidthProfile::resolve(mhz);
            assert_eq!(profile.bandwidth_mhz, mhz);
            assert_eq!(profile.subcarrier_count, subcarriers);
            assert_eq!(profile.fft_size, fft);
        }
    }

    #[test]
    fn test_unknown_bandwidth_falls_back() {
        let narrow = BandwidthProfile::resolve(1.4);
        assert_eq!(BandwidthProfile::resolve(7.0), narrow);
        assert_eq!(BandwidthProfile::resolve(-3.0), narrow);
        assert_eq!(BandwidthProfile::resolve(f64::NAN), narrow);
        // 1.5 is close to 1.4 but still not in the table
        assert_eq!(BandwidthProfile::resolve(1.5), narrow);
    }

    #[test]
    fn test_strict_lookup() {
        assert!(BandwidthProfile::lookup(20.0).is_some());
        assert!(BandwidthProfile::lookup(7.0).is_none());
    }

    #[test]
    fn test_profiles_are_distinct() {
        for (i, a) in Bandwidth::ALL.iter().enumerate() {
            for b in &Bandwidth::ALL[i + 1..] {
                assert_ne!(a.as_mhz(), b.as_mhz());
            }
        }
    }

    #[test]
    fn test_v_shift() {
        assert_eq!(Pci::new(0).v_shift(), 0);
        assert_eq!(Pci::new(5).v_shift(), 5);
        assert_eq!(Pci::new(6).v_shift(), 0);
        assert_eq!(Pci::new(503).v_shift(), 5);
        assert_eq!(Pci::new(-1).v_shift(), 5);
        assert_eq!(Pci::new(-6).v_shift(), 0);
        assert_eq!(Pci::new(i64::MIN).v_shift(), 4);
    }

    #[test]
    fn test_antenna_port_mapping() {
        assert_eq!(AntennaPort::from_index(0), Some(AntennaPort::Port0));
        assert_eq!(AntennaPort::from_index(3), Some(AntennaPort::Port3));
        assert_eq!(AntennaPort::from_index(4), None);
        assert_eq!(AntennaPort::from_index(-1), None);
    }

    #[quickcheck]
    fn v_shift_always_in_range(pci: i64) -> bool {
        let shift = Pci::new(pci).v_shift();
        shift < 6 && shift as i64 == ((pci % 6) + 6) % 6
    }
}
