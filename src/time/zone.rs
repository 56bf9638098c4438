use super::error::TimeError;
use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// Name that selects the platform's local timezone instead of an IANA zone.
pub const LOCAL_ZONE_NAME: &str = "Local";

/// The timezone photos are reprojected into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TargetZone {
    #[default]
    Local,
    Named(Tz),
}

impl TargetZone {
    pub fn name(&self) -> &str {
        match self {
            Self::Local => LOCAL_ZONE_NAME,
            Self::Named(tz) => tz.name(),
        }
    }

    /// Offset in effect in this zone at the given instant.
    pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        let naive_utc = instant.naive_utc();
        match self {
            Self::Local => Local.offset_from_utc_datetime(&naive_utc).fix(),
            Self::Named(tz) => tz.offset_from_utc_datetime(&naive_utc).fix(),
        }
    }

    /// Resolves a wall-clock time in this zone. Times repeated by a DST fall-back resolve to
    /// the earlier instant; times skipped by a spring-forward gap resolve to `None`.
    pub fn localize(&self, local: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Local => earliest_fixed(Local.from_local_datetime(local)),
            Self::Named(tz) => earliest_fixed(tz.from_local_datetime(local)),
        }
    }
}

fn earliest_fixed<Z: TimeZone>(result: LocalResult<DateTime<Z>>) -> Option<DateTime<FixedOffset>> {
    match result {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.fixed_offset()),
        LocalResult::None => None,
    }
}

impl FromStr for TargetZone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LOCAL_ZONE_NAME {
            return Ok(Self::Local);
        }
        Tz::from_str(s)
            .map(Self::Named)
            .map_err(|_| TimeError::UnknownTimezone(s.to_string()))
    }
}

impl fmt::Display for TargetZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_named_and_local_zones() {
        assert_eq!(
            "Europe/Helsinki".parse::<TargetZone>(),
            Ok(TargetZone::Named(chrono_tz::Europe::Helsinki))
        );
        assert_eq!("Local".parse::<TargetZone>(), Ok(TargetZone::Local));
        assert_eq!(TargetZone::default(), TargetZone::Local);
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        assert_eq!(
            "Mars/Olympus_Mons".parse::<TargetZone>(),
            Err(TimeError::UnknownTimezone("Mars/Olympus_Mons".to_string()))
        );
        assert!("".parse::<TargetZone>().is_err());
    }

    #[test]
    fn test_offset_at_follows_dst_rules() {
        let zone: TargetZone = "Europe/Helsinki".parse().unwrap();
        let winter = Utc.with_ymd_and_hms(2023, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2023, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(zone.offset_at(&winter).local_minus_utc(), 2 * 3600);
        assert_eq!(zone.offset_at(&summer).local_minus_utc(), 3 * 3600);
    }

    #[test]
    fn test_localize_gap_and_overlap() {
        let zone: TargetZone = "Europe/Helsinki".parse().unwrap();
        let skipped = NaiveDate::from_ymd_opt(2023, 3, 26)
            .unwrap()
            .and_hms_opt(3, 30, 0)
            .unwrap();
        // 03:30 does not exist on the spring-forward day.
        assert!(zone.localize(&skipped).is_none());

        let repeated = NaiveDate::from_ymd_opt(2023, 10, 29)
            .unwrap()
            .and_hms_opt(3, 30, 0)
            .unwrap();
        let resolved = zone.localize(&repeated).unwrap();
        assert_eq!(resolved.offset().local_minus_utc(), 3 * 3600);
    }

    #[test]
    fn test_display_uses_zone_name() {
        let zone: TargetZone = "America/New_York".parse().unwrap();
        assert_eq!(zone.to_string(), "America/New_York");
        assert_eq!(TargetZone::Local.to_string(), "Local");
    }
}
