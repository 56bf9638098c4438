//! # Fix EXIF Date
//!
//! Correct the capture dates of JPEG photos taken with a camera clock set to the wrong
//! timezone.
//!
//! Each photo carries three date/offset tag pairs (`DateTime`/`OffsetTime`,
//! `DateTimeOriginal`/`OffsetTimeOriginal`, `DateTimeDigitized`/`OffsetTimeDigitized`).
//! Every pair is read as an absolute instant, reprojected into the target timezone with
//! that zone's DST rules, and written back when the offset differs. All other segments of
//! the file, including the image data, are left untouched.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use fix_exif_date::DateFixer;
//! use fix_exif_date::fix::output::CliOutput;
//!
//! fn main() -> Result<(), fix_exif_date::FixExifError> {
//!     let fixer = DateFixer::builder().timezone("Europe/Helsinki").build()?;
//!     let mut output = CliOutput::new(std::io::stdout());
//!
//!     let reports = fixer.fix_files(&[Path::new("IMG_0001.jpg")], &mut output)?;
//!     println!("{} file(s) changed", reports.iter().filter(|r| r.changed()).count());
//!
//!     Ok(())
//! }
//! ```

pub mod date_fixer;
pub mod error;
pub mod fix;
pub mod logging;
pub mod metadata;
pub mod time;

pub use date_fixer::DateFixer;
pub use error::FixExifError;
