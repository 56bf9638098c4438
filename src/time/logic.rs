//! Reprojection of EXIF local times into a target timezone.

use super::error::TimeError;
use super::parsing::{format_exif_datetime, format_offset, parse_exif_datetime, parse_offset};
use super::zone::TargetZone;
use chrono::{DateTime, FixedOffset, LocalResult, TimeZone, Utc};
use serde::Serialize;

/// Date and offset strings as they read in the target timezone.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Reprojection {
    pub date: String,
    pub offset: String,
}

/// Combines an EXIF local date-time with its offset string into an absolute instant.
pub fn to_instant(date: &str, offset: &str) -> Result<DateTime<FixedOffset>, TimeError> {
    let naive = parse_exif_datetime(date)?;
    let seconds = parse_offset(offset)
        .map_err(|e| TimeError::InvalidTimestamp(format!("{date:?} with offset: {e}")))?;
    let fixed = FixedOffset::east_opt(seconds).ok_or_else(|| {
        TimeError::InvalidTimestamp(format!("offset {offset:?} is out of range"))
    })?;
    match fixed.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        _ => Err(TimeError::InvalidTimestamp(format!(
            "{date:?} {offset} is not representable"
        ))),
    }
}

/// Recomputes `date` and `offset` as they would have been recorded in `zone`.
///
/// The instant is preserved; only its wall-clock rendering and the offset change.
/// The zone's own rule table picks the offset, so instants on either side of a DST
/// transition get the offset actually in effect at that moment.
pub fn reproject(date: &str, offset: &str, zone: &TargetZone) -> Result<Reprojection, TimeError> {
    let instant = to_instant(date, offset)?.with_timezone(&Utc);
    // EXIF offsets have minute precision; local mean time offsets carry seconds.
    let seconds = zone.offset_at(&instant).local_minus_utc();
    let target_offset = FixedOffset::east_opt(seconds - seconds % 60).ok_or_else(|| {
        TimeError::InvalidTimestamp(format!("offset of {seconds}s is out of range"))
    })?;
    let local = instant.with_timezone(&target_offset).naive_local();

    Ok(Reprojection {
        date: format_exif_datetime(&local),
        offset: format_offset(target_offset.local_minus_utc()),
    })
}

/// Offset in seconds that `zone` uses for the wall-clock time `date`.
///
/// A time repeated by a DST fall-back gets the earlier (daylight) offset.
pub fn derive_offset(date: &str, zone: &TargetZone) -> Result<i32, TimeError> {
    let naive = parse_exif_datetime(date)?;
    zone.localize(&naive)
        .map(|dt| dt.offset().local_minus_utc())
        .ok_or_else(|| {
            TimeError::InvalidTimestamp(format!("{date:?} does not exist in {zone}"))
        })
}
