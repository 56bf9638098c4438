use super::error::MetadataError;
use super::ifd_path::IfdPath;
use super::tags::text_tag_context;
use exif::experimental::Writer;
use exif::{Exif, Field, In, Tag, Value};
use img_parts::jpeg::{Jpeg, JpegSegment};
use img_parts::{Bytes, ImageEXIF};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

const APP0: u8 = 0xE0;
const APP1: u8 = 0xE1;
const EXIF_PREFIX: &[u8] = b"Exif\0\0";
/// Segment payload limit: the 16-bit length field counts its own two bytes.
const MAX_SEGMENT_CONTENTS: usize = u16::MAX as usize - 2;

/// One JPEG file held in memory: its segment list plus the decoded EXIF fields.
///
/// Only the EXIF APP1 segment is ever rebuilt; every other segment, including the
/// entropy-coded image data, is written back exactly as it was read.
pub struct MediaDocument {
    jpeg: Jpeg,
    fields: Vec<Field>,
    thumbnail: Option<Vec<u8>>,
    little_endian: bool,
    modified: bool,
}

impl MediaDocument {
    pub fn open(path: &Path) -> Result<Self, MetadataError> {
        let bytes = fs::read(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, MetadataError> {
        let jpeg = Jpeg::from_bytes(Bytes::from(bytes))
            .map_err(|e| MetadataError::Parse(e.to_string()))?;

        let Some(raw_exif) = jpeg.exif() else {
            debug!("No EXIF segment present.");
            return Ok(Self {
                jpeg,
                fields: Vec::new(),
                thumbnail: None,
                little_endian: false,
                modified: false,
            });
        };

        let exif = exif::Reader::new()
            .read_raw(raw_exif.to_vec())
            .map_err(|e| MetadataError::Parse(e.to_string()))?;
        debug!(fields = exif.fields().count(), "Decoded EXIF segment.");

        Ok(Self {
            thumbnail: thumbnail_of(&exif),
            fields: exif.fields().cloned().collect(),
            little_endian: exif.little_endian(),
            jpeg,
            modified: false,
        })
    }

    /// Every `(tag id, value)` in depth-first IFD order: IFD0 with its Exif, GPS and
    /// Interop sub-IFDs expanded where their pointers sit, then IFD1.
    pub fn entries(&self) -> impl Iterator<Item = (u16, &Value)> {
        self.fields
            .iter()
            .map(|field| (field.tag.number(), &field.value))
    }

    /// Text of the first entry carrying `tag`, wherever it sits in the IFD tree.
    pub fn find_tag_value(&self, tag: u16) -> Result<String, MetadataError> {
        let (_, value) = self
            .entries()
            .find(|(id, _)| *id == tag)
            .ok_or(MetadataError::TagNotFound(tag))?;
        let text = text_of(value).ok_or(MetadataError::TagValueType(tag))?;
        info!(tag, value = %text, "Found value.");
        Ok(text)
    }

    /// Sets `tag` in the IFD named by `ifd_path`, creating the entry (and the sub-IFD)
    /// when the document does not have it yet.
    ///
    /// A copy of the same tag number filed under another sub-IFD of that IFD is dropped,
    /// so the image keeps a single value for the tag.
    pub fn set_tag_value(
        &mut self,
        ifd_path: &str,
        tag: u16,
        value: &str,
    ) -> Result<(), MetadataError> {
        let path: IfdPath = ifd_path.parse()?;
        let context = text_tag_context(tag).ok_or(MetadataError::TagValueType(tag))?;
        if context != path.context() {
            return Err(MetadataError::IfdResolution {
                path: ifd_path.to_string(),
                reason: format!("tag 0x{tag:04x} does not belong to {path}"),
            });
        }

        let field = Field {
            tag: Tag(context, tag),
            ifd_num: path.ifd(),
            value: Value::Ascii(vec![value.as_bytes().to_vec()]),
        };
        let before = self.fields.len();
        self.fields.retain(|existing| {
            existing.tag.number() != tag
                || existing.ifd_num != field.ifd_num
                || existing.tag == field.tag
        });
        if self.fields.len() != before {
            debug!(tag, ifd = %path, "Dropped misplaced copies of tag.");
        }
        match self
            .fields
            .iter_mut()
            .find(|existing| existing.tag == field.tag && existing.ifd_num == field.ifd_num)
        {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self.modified = true;
        debug!(tag, ifd = %path, value, "Set tag value.");
        Ok(())
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Re-encodes the EXIF fields as a TIFF structure in the original byte order.
    fn encode_exif(&self) -> Result<Vec<u8>, MetadataError> {
        let mut writer = Writer::new();
        for field in self.fields.iter().filter(|f| !is_structural(f.tag)) {
            writer.push_field(field);
        }
        if let Some(thumbnail) = &self.thumbnail {
            writer.set_jpeg(thumbnail, In::THUMBNAIL);
        }

        let mut buffer = Cursor::new(Vec::new());
        writer
            .write(&mut buffer, self.little_endian)
            .map_err(MetadataError::Encode)?;
        Ok(buffer.into_inner())
    }

    /// The complete JPEG file. An unmodified document comes back byte for byte.
    pub fn into_bytes(mut self) -> Result<Bytes, MetadataError> {
        if self.modified {
            let tiff = self.encode_exif()?;
            let mut contents = Vec::with_capacity(EXIF_PREFIX.len() + tiff.len());
            contents.extend_from_slice(EXIF_PREFIX);
            contents.extend_from_slice(&tiff);
            if contents.len() > MAX_SEGMENT_CONTENTS {
                return Err(MetadataError::SegmentTooLarge(contents.len()));
            }
            let segment = JpegSegment::new_with_contents(APP1, Bytes::from(contents));

            let segments = self.jpeg.segments_mut();
            match segments.iter().position(is_exif_segment) {
                Some(position) => segments[position] = segment,
                None => {
                    let after_jfif = segments
                        .first()
                        .map_or(0, |first| usize::from(first.marker() == APP0));
                    segments.insert(after_jfif, segment);
                }
            }
        }
        Ok(self.jpeg.encoder().bytes())
    }

    /// Writes the whole file to `destination`, replacing anything already there.
    pub fn serialize(self, destination: &Path) -> Result<(), MetadataError> {
        let bytes = self.into_bytes()?;
        fs::write(destination, &bytes).map_err(|source| MetadataError::Write {
            path: destination.to_path_buf(),
            source,
        })?;
        debug!(path = %destination.display(), size = bytes.len(), "Wrote JPEG.");
        Ok(())
    }
}

fn is_exif_segment(segment: &JpegSegment) -> bool {
    segment.marker() == APP1 && segment.contents().starts_with(EXIF_PREFIX)
}

/// Pointer and offset tags describe the old layout; the writer derives fresh ones.
fn is_structural(tag: Tag) -> bool {
    matches!(
        tag,
        Tag::ExifIFDPointer
            | Tag::GPSInfoIFDPointer
            | Tag::InteropIFDPointer
            | Tag::JPEGInterchangeFormat
            | Tag::JPEGInterchangeFormatLength
            | Tag::StripOffsets
            | Tag::StripByteCounts
    )
}

fn thumbnail_of(exif: &Exif) -> Option<Vec<u8>> {
    let offset = exif
        .get_field(Tag::JPEGInterchangeFormat, In::THUMBNAIL)?
        .value
        .get_uint(0)? as usize;
    let length = exif
        .get_field(Tag::JPEGInterchangeFormatLength, In::THUMBNAIL)?
        .value
        .get_uint(0)? as usize;
    exif.buf()
        .get(offset..offset.checked_add(length)?)
        .map(<[u8]>::to_vec)
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .and_then(|part| String::from_utf8(part.clone()).ok()),
        _ => None,
    }
}
