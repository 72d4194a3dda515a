//! Common Utilities and Types Library
//! 
//! This crate provides the radio configuration types and small numeric helpers
//! shared by the pilot mapping engine and its command-line front end.

pub mod types;
pub mod utils;

// Re-export commonly used items
pub use types::*;
pub use utils::*;
