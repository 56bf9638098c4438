//! Offset codec and timezone reprojection for EXIF date values.
pub mod error;
mod logic;
pub mod parsing;
pub mod zone;
pub use logic::{Reprojection, derive_offset, reproject, to_instant};
pub use parsing::{format_offset, parse_offset};
pub use zone::TargetZone;
