//! Configuration loading.
//!
//! Runtime settings come from `delay-config.toml` in the working directory.
//! A missing or invalid file falls back to complete defaults covering the
//! known RegioJet stations, so both binaries run with zero setup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{StationDirectory, StationId};
use crate::regiojet::RegioJetConfig;

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Upstream API settings.
    pub api: ApiConfig,
    /// Report settings shared by the CLI and the web layer.
    pub report: ReportConfig,
    /// Monitored stations, in report order.
    pub stations: Vec<StationEntry>,
}

/// Upstream API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the RegioJet REST API.
    pub base_url: String,
    /// Language code for the `X-Lang` header.
    pub language: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Report settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// How many services to request and display per board.
    pub limit: usize,
    /// Display name of the station the CLI reports first (arrivals then
    /// departures). Must name an entry in `stations`.
    pub home_station: String,
    /// Connection check printed at the end of the CLI report.
    pub connection: ConnectionConfig,
}

/// Endpoints of the CLI connection check.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Display name of the origin station.
    pub from: String,
    /// Display name of the destination station.
    pub to: String,
    /// How many departures to scan for the connection.
    pub scan_limit: usize,
}

/// One monitored station.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationEntry {
    /// Display name used in reports.
    pub name: String,
    /// Upstream station ID (numeric string).
    pub id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://brn-ybus-pubapi.sa.cz/restapi".to_string(),
            language: "cs".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            home_station: "Karlovy Vary Terminal".to_string(),
            connection: ConnectionConfig::default(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            from: "Karlovy Vary Terminal".to_string(),
            to: "Sokolov Terminal".to_string(),
            scan_limit: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let stations = [
            ("Karlovy Vary Terminal", "17902024"),
            ("Karlovy Vary Tržnice", "17902023"),
            ("Sokolov Terminal", "721181001"),
            ("Praha Florenc", "10204003"),
            ("Cheb", "721181002"),
        ];

        Config {
            api: ApiConfig::default(),
            report: ReportConfig::default(),
            stations: stations
                .iter()
                .map(|(name, id)| StationEntry {
                    name: name.to_string(),
                    id: id.to_string(),
                })
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from `delay-config.toml`.
    /// Falls back to the default configuration if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_from_path("delay-config.toml")
    }

    /// Load configuration from the given path.
    /// Falls back to the default configuration if the file is missing or invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: invalid config file format: {}", e);
                    eprintln!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Build the station directory from the configured station list.
    ///
    /// Entries with invalid IDs are skipped with a warning; the report
    /// proceeds with the rest.
    pub fn station_directory(&self) -> StationDirectory {
        let mut directory = StationDirectory::new();

        for entry in &self.stations {
            match StationId::parse(&entry.id) {
                Ok(id) => directory.insert(entry.name.clone(), id),
                Err(e) => {
                    eprintln!("Warning: skipping station {:?}: {}", entry.name, e);
                }
            }
        }

        directory
    }

    /// Build the client configuration from the API section.
    pub fn regiojet_config(&self) -> RegioJetConfig {
        RegioJetConfig::new()
            .with_base_url(&self.api.base_url)
            .with_language(&self.api.language)
            .with_timeout(self.api.timeout_secs)
    }
}
