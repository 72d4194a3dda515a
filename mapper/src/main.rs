//! LTE Pilot Mapper
//!
//! Command-line entry point: reads the radio configuration, computes the
//! cell-specific reference signal positions and prints them as JSON.

mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use config::MapperConfig;
use layers::phy::{self, CrsConfig};
use report::MappingReport;

/// LTE cell-specific reference signal mapper
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML or YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Carrier center frequency in Hz
    #[arg(long)]
    center_freq_hz: Option<f64>,

    /// Subcarrier spacing in Hz
    #[arg(long)]
    subcarrier_spacing_hz: Option<f64>,

    /// OFDM symbol duration in microseconds
    #[arg(long)]
    symbol_duration_us: Option<f64>,

    /// Physical Cell ID
    #[arg(long, allow_negative_numbers = true)]
    pci: Option<i64>,

    /// Antenna port (0-3)
    #[arg(long, allow_negative_numbers = true)]
    antenna_port: Option<i64>,

    /// Bandwidth in MHz (1.4, 3, 5, 10, 15, 20)
    #[arg(long, allow_negative_numbers = true)]
    bandwidth_mhz: Option<f64>,

    /// Reject unknown bandwidths, ports and out-of-range PCIs instead of absorbing them
    #[arg(long)]
    strict: bool,

    /// Include the placement matrix in the output
    #[arg(long)]
    include_matrix: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Args {
    /// Command-line values take precedence over the file
    fn apply_overrides(&self, grid: &mut CrsConfig) {
        if let Some(v) = self.center_freq_hz {
            grid.center_freq_hz = v;
        }
        if let Some(v) = self.subcarrier_spacing_hz {
            grid.subcarrier_spacing_hz = v;
        }
        if let Some(v) = self.symbol_duration_us {
            grid.symbol_duration_us = v;
        }
        if let Some(v) = self.pci {
            grid.pci = v;
        }
        if let Some(v) = self.antenna_port {
            grid.antenna_port = v;
        }
        if let Some(v) = self.bandwidth_mhz {
            grid.bandwidth_mhz = v;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MapperConfig::from_file(path)?,
        None => MapperConfig::default(),
    };
    args.apply_overrides(&mut config.grid);

    // Initialize logging; stdout is reserved for the report
    let log_level = args.log_level.as_deref().unwrap_or(config.log.level.as_str());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &args.config {
        info!("Configuration file: {}", path.display());
    }

    let grid = &config.grid;
    info!("Grid configuration:");
    info!("  Center frequency: {} Hz", grid.center_freq_hz);
    info!("  Subcarrier spacing: {} Hz", grid.subcarrier_spacing_hz);
    info!("  Symbol duration: {} us", grid.symbol_duration_us);
    info!("  PCI: {}", grid.pci);
    info!("  Antenna port: {}", grid.antenna_port);
    info!("  Bandwidth: {} MHz", grid.bandwidth_mhz);

    if args.strict {
        grid.validate().context("Strict validation failed")?;
    }

    let mapping = phy::generate(grid);
    if mapping.records.is_empty() {
        warn!("No pilots mapped for antenna port {}", grid.antenna_port);
    }

    let json = MappingReport::new(&mapping, args.include_matrix)
        .to_json(args.pretty)
        .context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
