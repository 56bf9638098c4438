use crate::metadata::tags::{
    DATE_TIME, DATE_TIME_DIGITIZED, DATE_TIME_ORIGINAL, OFFSET_TIME, OFFSET_TIME_DIGITIZED,
    OFFSET_TIME_ORIGINAL,
};

/// A capture-date tag and the UTC-offset tag that qualifies it, with the IFD each lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPair {
    pub date_tag: u16,
    pub date_ifd: &'static str,
    pub offset_tag: u16,
    pub offset_ifd: &'static str,
}

/// The three date/offset pairs that get reprojected, in processing order.
pub const TAG_PAIRS: [TagPair; 3] = [
    TagPair {
        date_tag: DATE_TIME,
        date_ifd: "IFD0",
        offset_tag: OFFSET_TIME,
        offset_ifd: "IFD0/Exif0",
    },
    TagPair {
        date_tag: DATE_TIME_ORIGINAL,
        date_ifd: "IFD0/Exif0",
        offset_tag: OFFSET_TIME_ORIGINAL,
        offset_ifd: "IFD0/Exif0",
    },
    TagPair {
        date_tag: DATE_TIME_DIGITIZED,
        date_ifd: "IFD0/Exif0",
        offset_tag: OFFSET_TIME_DIGITIZED,
        offset_ifd: "IFD0/Exif0",
    },
];
