//! Physical Layer Reference Signal Library
//! 
//! This crate computes where LTE cell-specific reference signals land in the
//! downlink resource grid and describes each pilot in physical units.

pub mod phy;

use thiserror::Error;

/// Errors raised by configuration checks.
///
/// Grid generation itself never fails; these are only produced by
/// [`phy::CrsConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayerError {
    #[error("Unknown channel bandwidth: {0} MHz")]
    UnknownBandwidth(f64),
    
    #[error("Invalid antenna port: {0} (expected 0-3)")]
    InvalidAntennaPort(i64),
    
    #[error("Physical cell ID {0} outside LTE range 0-503")]
    InvalidPci(i64),
    
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
