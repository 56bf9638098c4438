//! In-memory JPEG fixtures for the tests.

use super::tags::{
    DATE_TIME, DATE_TIME_DIGITIZED, DATE_TIME_ORIGINAL, MAKE, OFFSET_TIME,
    OFFSET_TIME_DIGITIZED, OFFSET_TIME_ORIGINAL,
};
use exif::experimental::Writer;
use exif::{Context, Field, In, Tag, Value};
use std::io::Cursor;

/// Smallest segment sequence the JPEG parser accepts: APP0 (JFIF), DQT, SOF0, DHT,
/// SOS with a few bytes of scan data, EOI.
pub fn bare_jpeg() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8];
    bytes.extend_from_slice(&[
        0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00, 0x01,
        0x00, 0x01, 0x00, 0x00,
    ]);
    bytes.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x43, 0x00]);
    bytes.extend_from_slice(&[0x01; 64]);
    bytes.extend_from_slice(&[
        0xFF, 0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00,
    ]);
    bytes.extend_from_slice(&[0xFF, 0xC4, 0x00, 0x14, 0x00, 0x01]);
    bytes.extend_from_slice(&[0x00; 15]);
    bytes.push(0x00);
    bytes.extend_from_slice(&[
        0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xD2, 0xCF, 0x20,
    ]);
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes
}

pub fn text_field(context: Context, tag: u16, text: &str) -> Field {
    Field {
        tag: Tag(context, tag),
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

/// Make plus all three date/offset pairs, every pair holding `date` and `offset`.
pub fn sample_fields(date: &str, offset: &str) -> Vec<Field> {
    vec![
        text_field(Context::Tiff, MAKE, "Canon"),
        text_field(Context::Tiff, DATE_TIME, date),
        text_field(Context::Exif, DATE_TIME_ORIGINAL, date),
        text_field(Context::Exif, DATE_TIME_DIGITIZED, date),
        text_field(Context::Exif, OFFSET_TIME, offset),
        text_field(Context::Exif, OFFSET_TIME_ORIGINAL, offset),
        text_field(Context::Exif, OFFSET_TIME_DIGITIZED, offset),
    ]
}

/// `bare_jpeg` with an EXIF APP1 segment holding `fields`, placed after APP0.
pub fn jpeg_with_fields(fields: &[Field], little_endian: bool, thumbnail: Option<&[u8]>) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    if let Some(thumbnail) = thumbnail {
        writer.set_jpeg(thumbnail, In::THUMBNAIL);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, little_endian).unwrap();
    let tiff = tiff.into_inner();

    let length = u16::try_from(2 + 6 + tiff.len()).unwrap();
    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&length.to_be_bytes());
    segment.extend_from_slice(b"Exif\0\0");
    segment.extend_from_slice(&tiff);

    let mut bytes = bare_jpeg();
    // SOI (2 bytes) + APP0 (18 bytes)
    bytes.splice(20..20, segment);
    bytes
}
