//! Mapper Configuration File
//!
//! TOML or YAML file holding the grid parameters and log settings. Every
//! field is optional; missing ones take the mapper defaults.

use anyhow::{Context, Result};
use layers::phy::CrsConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MapperConfig {
    /// Grid parameters
    #[serde(default)]
    pub grid: CrsConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// On-disk format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml` are YAML, anything else is read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Toml,
        }
    }
}

impl MapperConfig {
    /// Load configuration from a TOML or YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents, ConfigFormat::from_path(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration text in the given format
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self> {
        let config: Self = match format {
            ConfigFormat::Toml => toml::from_str(contents)?,
            ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let text = r#"
[grid]
center_freq_hz = 1.8425e9
pci = 137
antenna_port = 2
bandwidth_mhz = 10.0

[log]
level = "debug"
"#;
        let config = MapperConfig::parse(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.grid.center_freq_hz, 1.8425e9);
        assert_eq!(config.grid.pci, 137);
        assert_eq!(config.grid.antenna_port, 2);
        assert_eq!(config.grid.bandwidth_mhz, 10.0);
        // Unset fields keep their defaults
        assert_eq!(config.grid.subcarrier_spacing_hz, 15_000.0);
        assert_eq!(config.grid.symbol_duration_us, 66.67);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_parse_yaml() {
        let text = "grid:\n  pci: -7\n  bandwidth_mhz: 1.4\n";
        let config = MapperConfig::parse(text, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.grid.pci, -7);
        assert_eq!(config.grid.antenna_port, 0);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = MapperConfig::parse("", ConfigFormat::Toml).unwrap();
        assert_eq!(config, MapperConfig::default());
        assert_eq!(config.grid, CrsConfig::default());
    }

    #[test]
    fn test_bad_field_type_fails() {
        let result = MapperConfig::parse("[grid]\npci = \"zero\"\n", ConfigFormat::Toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("mapper.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("mapper.YAML")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("mapper.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("mapper")), ConfigFormat::Toml);
    }

    #[test]
    fn test_missing_file() {
        let err = MapperConfig::from_file(Path::new("/nonexistent/mapper.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
