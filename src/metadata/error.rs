use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a well-formed JPEG/EXIF container: {0}")]
    Parse(String),

    #[error("Tag 0x{0:04x} not found")]
    TagNotFound(u16),

    #[error("Tag 0x{0:04x} does not hold a text value")]
    TagValueType(u16),

    #[error("Cannot resolve IFD path {path:?}: {reason}")]
    IfdResolution { path: String, reason: String },

    #[error("Failed to encode EXIF data")]
    Encode(#[source] exif::Error),

    #[error("Encoded EXIF data is {0} bytes, more than one APP1 segment holds")]
    SegmentTooLarge(usize),

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
