//! Screen configuration.
//!
//! Configuration is read from JSON. Every field has a default, so an empty object `{}` is a
//! valid configuration that reproduces the stock behavior.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::types::Coordinate;
use crate::core::error::ConfigError;

/// Where the map opens before the user picks anything.
pub const DEFAULT_MARKER: Coordinate = Coordinate::new(19.8077463, -99.4077038);

/// How a failed long-press parse is reported on the text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputPolicy {
    /// Both fields are flagged when either of them fails to parse.
    #[default]
    MarkBoth,
    /// Only the fields that failed to parse are flagged.
    MarkOffending,
}

/// Configuration of both screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Marker placed when the map surface becomes ready.
    pub default_marker: Coordinate,
    /// Label of the initial marker.
    pub default_marker_title: String,
    /// Label of the marker placed from typed coordinates.
    pub specified_location_title: String,
    /// Initial zoom level of the map.
    pub zoom_level: u32,
    /// Reporting of unparsable coordinate input.
    pub invalid_input: InvalidInputPolicy,
    /// Validation message for the latitude field.
    pub latitude_error: String,
    /// Validation message for the longitude field.
    pub longitude_error: String,
    /// Location screen settings.
    pub location: LocationConfig,
    /// Logger settings.
    pub log: LogConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_marker: DEFAULT_MARKER,
            default_marker_title: "Mexico".to_owned(),
            specified_location_title: "Specified location".to_owned(),
            zoom_level: 10,
            invalid_input: InvalidInputPolicy::default(),
            latitude_error: "Invalid latitude".to_owned(),
            longitude_error: "Invalid longitude".to_owned(),
            location: LocationConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl PickerConfig {
    /// Parses configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Self::from_json_str(&contents)
    }
}

/// Location screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Interval between location updates, in seconds.
    pub update_interval_secs: u64,
    /// Number of decimal places shown for each coordinate component.
    pub label_precision: usize,
}

impl LocationConfig {
    /// Interval between location updates.
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            update_interval_secs: 30,
            label_precision: 6,
        }
    }
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directives used when `RUST_LOG` is not set.
    pub filter: String,
    /// Directory for daily rolling log files. Console only when `None`.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            directory: None,
        }
    }
}
