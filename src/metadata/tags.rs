//! EXIF tag identifiers used by the date fixer and their standard containers.

use exif::Context;

pub const MAKE: u16 = 0x010f;
pub const DATE_TIME: u16 = 0x0132;
pub const DATE_TIME_ORIGINAL: u16 = 0x9003;
pub const DATE_TIME_DIGITIZED: u16 = 0x9004;
pub const OFFSET_TIME: u16 = 0x9010;
pub const OFFSET_TIME_ORIGINAL: u16 = 0x9011;
pub const OFFSET_TIME_DIGITIZED: u16 = 0x9012;

/// ASCII tags that can be written, with the IFD context the EXIF standard puts them in.
const TEXT_TAGS: &[(u16, Context)] = &[
    (0x010e, Context::Tiff), // ImageDescription
    (MAKE, Context::Tiff),
    (0x0110, Context::Tiff), // Model
    (0x0131, Context::Tiff), // Software
    (DATE_TIME, Context::Tiff),
    (0x013b, Context::Tiff), // Artist
    (0x8298, Context::Tiff), // Copyright
    (DATE_TIME_ORIGINAL, Context::Exif),
    (DATE_TIME_DIGITIZED, Context::Exif),
    (OFFSET_TIME, Context::Exif),
    (OFFSET_TIME_ORIGINAL, Context::Exif),
    (OFFSET_TIME_DIGITIZED, Context::Exif),
    (0x9290, Context::Exif), // SubSecTime
    (0x9291, Context::Exif), // SubSecTimeOriginal
    (0x9292, Context::Exif), // SubSecTimeDigitized
];

/// Standard IFD context of a writable text tag, `None` for tags without a known text type.
pub fn text_tag_context(tag: u16) -> Option<Context> {
    TEXT_TAGS
        .iter()
        .find(|(id, _)| *id == tag)
        .map(|(_, context)| *context)
}
