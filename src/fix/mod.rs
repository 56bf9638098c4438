//! Per-file fixing of the capture-date/offset tag pairs.
mod logic;
pub mod output;
pub mod report;
pub mod tag_pairs;
pub use logic::{fix_date, update_pair};
#[cfg(test)]
pub(crate) use logic::tests::{RecordingOutput, write_photo};
