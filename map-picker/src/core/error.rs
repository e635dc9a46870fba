//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::api::types::CoordinateField;

/// Error from a screen operation.
#[derive(Debug, Error)]
pub enum PickerError {
    /// Text of a coordinate field is not a number.
    #[error("invalid numeric input in {field} field: {input:?}")]
    InvalidNumericInput {
        /// Field that failed to parse.
        field: CoordinateField,
        /// Text of the field.
        input: String,
    },

    /// The operation needs the map surface, which has not been provided yet.
    #[error("map surface is not ready")]
    SurfaceNotReady,

    /// The screen already owns a map surface.
    #[error("map surface is already attached")]
    SurfaceAlreadyAttached,

    /// The host dropped the surface request without providing a surface.
    #[error("map surface request was dropped before the surface became ready")]
    SurfaceRequestDropped,
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Configuration is not valid JSON or has wrong field types.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
