use crate::metadata::error::MetadataError;
use crate::time::error::TimeError;
use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the fix-exif-date crate.
#[derive(Error, Debug)]
pub enum FixExifError {
    #[error("Invalid timezone location: {name}")]
    InvalidTimezone {
        name: String,
        #[source]
        source: TimeError,
    },

    #[error("Date/offset value could not be reprojected: {0}")]
    Time(#[from] TimeError),

    #[error("EXIF metadata failure: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Failed to fix EXIF date of {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: Box<FixExifError>,
    },
}

impl FixExifError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidTimezone { .. } => 2,
            _ => 1,
        }
    }

    /// The failure underneath any per-file wrapping.
    pub fn root(&self) -> &Self {
        match self {
            Self::File { source, .. } => source.root(),
            other => other,
        }
    }
}
