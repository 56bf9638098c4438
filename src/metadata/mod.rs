//! Reading and writing EXIF tags inside JPEG files.
mod document;
pub mod error;
pub mod ifd_path;
pub mod tags;
#[cfg(test)]
pub(crate) mod test_support;
pub use document::MediaDocument;
