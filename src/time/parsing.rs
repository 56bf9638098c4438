//! Codecs for the textual EXIF date and offset values.

use super::error::TimeError;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Date-time layout used by the EXIF `DateTime*` tags.
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

static OFFSET_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+):(\d+)$").expect("offset pattern is valid")
});

/// Parses an offset string such as "+02:00" or "-07:31" into signed seconds.
///
/// Hours and minutes are read as magnitudes and the sign applies to both,
/// so "-00:00" is simply zero.
pub fn parse_offset(text: &str) -> Result<i32, TimeError> {
    let mut chars = text.chars();
    let Some(prefix) = chars.next() else {
        return Err(TimeError::InvalidOffsetFormat(text.to_string()));
    };
    let sign = sign_of_prefix(prefix)
        .ok_or_else(|| TimeError::InvalidOffsetPrefix(text.to_string()))?;

    let invalid = || TimeError::InvalidOffsetFormat(text.to_string());
    let caps = OFFSET_BODY.captures(chars.as_str()).ok_or_else(invalid)?;
    let hours = caps[1].parse::<i32>().map_err(|_| invalid())?;
    let minutes = caps[2].parse::<i32>().map_err(|_| invalid())?;

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .map(|magnitude| sign * magnitude)
        .ok_or_else(invalid)
}

fn sign_of_prefix(prefix: char) -> Option<i32> {
    match prefix {
        '+' => Some(1),
        '-' => Some(-1),
        _ => None,
    }
}

/// Formats signed seconds as `±HH:MM`. Any sub-minute remainder is dropped.
pub fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let magnitude = seconds.unsigned_abs();
    format!("{sign}{:02}:{:02}", magnitude / 3600, magnitude % 3600 / 60)
}

/// Parses an EXIF date-time (`YYYY:MM:DD HH:MM:SS`).
pub fn parse_exif_datetime(text: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(text, EXIF_DATETIME_FORMAT)
        .map_err(|e| TimeError::InvalidTimestamp(format!("{text:?}: {e}")))
}

pub fn format_exif_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(EXIF_DATETIME_FORMAT).to_string()
}
