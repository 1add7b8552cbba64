//! Configuration file handling.
//!
//! This module provides loading of nugetscan configuration from a TOML
//! file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/nugetscan/config.toml`
//! - macOS: `~/Library/Application Support/nugetscan/config.toml`
//! - Windows: `%APPDATA%\nugetscan\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! scan_directories = ["/srv/builds/api", "/srv/builds/web"]
//! exclude_prefixes = ["System.", "Microsoft."]
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration.
///
/// Supplies the scan-directory fallback used when the command line names
/// no directories, and the exclusion list applied by every report writer.
///
/// # Example
///
/// ```no_run
/// use nugetscan::Config;
///
/// let config = Config::load().unwrap_or_default();
/// println!("Default scan roots: {:?}", config.scan_directories);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories scanned when the command line names none.
    ///
    /// Default: the current working directory.
    pub scan_directories: Vec<String>,

    /// Package-name prefixes dropped from every report.
    ///
    /// A group whose name starts with any of these prefixes is excluded
    /// from both the CSV and HTML output (e.g. `"System."`,
    /// `"Microsoft."` to hide framework packages).
    ///
    /// Default: empty (nothing is excluded)
    pub exclude_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_directories: vec![".".to_string()],
            exclude_prefixes: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nugetscan")
            .join("config.toml")
    }
}
