//! Crate-wide error handling
//!
//! Every fallible operation in the crate returns [`GardenResult`]. The
//! simulation core itself never fails; errors come from loading
//! configuration files and decoding texture images at startup.

use std::path::{Path, PathBuf};

/// Result type for garden operations
pub type GardenResult<T> = Result<T, GardenError>;

/// Errors that can occur while setting up or running the garden
#[derive(Debug, thiserror::Error)]
pub enum GardenError {
    #[error("Unable to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Image {} is {bit_depth}bit, {color}, {}interlaced; must be 8bit, RGB, non-interlaced",
        .path.display(),
        interlace_prefix(.interlaced)
    )]
    UnsupportedImageFormat {
        path: PathBuf,
        bit_depth: u8,
        color: &'static str,
        interlaced: bool,
    },

    #[error("Failed to decode image {}: {message}", .path.display())]
    ImageDecode { path: PathBuf, message: String },

    #[error("Failed to parse configuration {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Cannot normalise a zero-length vector")]
    DegenerateVector,
}

fn interlace_prefix(interlaced: &bool) -> &'static str {
    if *interlaced {
        ""
    } else {
        "non-"
    }
}

/// Helper trait for attaching a file path to foreign errors
pub trait GardenErrorContext<T> {
    fn io_context(self, path: &Path) -> GardenResult<T>;
}

impl<T> GardenErrorContext<T> for Result<T, std::io::Error> {
    fn io_context(self, path: &Path) -> GardenResult<T> {
        self.map_err(|source| GardenError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Create an invalid configuration error
pub fn invalid_config(field: &str, reason: impl std::fmt::Display) -> GardenError {
    GardenError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an image decode error
pub fn image_decode_error(path: impl AsRef<Path>, error: impl std::fmt::Display) -> GardenError {
    GardenError::ImageDecode {
        path: path.as_ref().to_path_buf(),
        message: error.to_string(),
    }
}
