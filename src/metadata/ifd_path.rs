//! Container paths such as `IFD0` or `IFD0/Exif0`, naming where a tag lives.

use super::error::MetadataError;
use exif::{Context, In};
use std::fmt;
use std::str::FromStr;

/// A resolved IFD location: the top-level IFD number and the sub-IFD context within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdPath {
    ifd: In,
    context: Context,
}

impl IfdPath {
    pub const ROOT: Self = Self {
        ifd: In::PRIMARY,
        context: Context::Tiff,
    };
    pub const EXIF: Self = Self {
        ifd: In::PRIMARY,
        context: Context::Exif,
    };

    pub fn ifd(&self) -> In {
        self.ifd
    }

    pub fn context(&self) -> Context {
        self.context
    }
}

/// Splits `Exif0` into `("Exif", 0)`. A missing index means 0.
fn split_index(segment: &str) -> Option<(&str, u16)> {
    let digits_at = segment
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(segment.len());
    let (name, index) = segment.split_at(digits_at);
    if name.is_empty() {
        return None;
    }
    let index = if index.is_empty() { 0 } else { index.parse().ok()? };
    Some((name, index))
}

impl FromStr for IfdPath {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| MetadataError::IfdResolution {
            path: s.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = s.split('/').map(split_index);
        let (root, ifd_index) = segments
            .next()
            .flatten()
            .ok_or_else(|| fail("empty path"))?;
        if root != "IFD" {
            return Err(fail("path must start at IFD0 or IFD1"));
        }
        if ifd_index > 1 {
            return Err(fail("only IFD0 and IFD1 exist in a JPEG"));
        }

        let mut context = Context::Tiff;
        for segment in segments {
            let (name, index) = segment.ok_or_else(|| fail("malformed segment"))?;
            if index != 0 {
                return Err(fail("sub-IFDs only have index 0"));
            }
            context = match (context, name) {
                (Context::Tiff, "Exif") => Context::Exif,
                (Context::Tiff, "GPSInfo") => Context::Gps,
                (Context::Exif, "Iop") => Context::Interop,
                _ => return Err(fail("unknown child IFD")),
            };
        }

        Ok(Self {
            ifd: In(ifd_index),
            context,
        })
    }
}

impl fmt::Display for IfdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IFD{}", self.ifd.index())?;
        match self.context {
            Context::Exif => f.write_str("/Exif0"),
            Context::Gps => f.write_str("/GPSInfo0"),
            Context::Interop => f.write_str("/Exif0/Iop0"),
            _ => Ok(()),
        }
    }
}
