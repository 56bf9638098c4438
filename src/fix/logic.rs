//! Deciding, per date/offset pair, whether a file's EXIF needs rewriting.

use super::output::Output;
use super::report::{FileReport, PairOutcome};
use super::tag_pairs::{TAG_PAIRS, TagPair};
use crate::error::FixExifError;
use crate::metadata::MediaDocument;
use crate::time::{TargetZone, parse_offset, reproject};
use std::path::Path;
use tracing::{error, info};

/// Reprojects one date/offset pair of `document` into `zone`, writing the new values back
/// when the offset changes.
///
/// Offsets are compared as seconds, so "-00:00" and "+00:00" count as the same offset.
pub fn update_pair(
    document: &mut MediaDocument,
    pair: &TagPair,
    zone: &TargetZone,
    output: &mut dyn Output,
) -> Result<PairOutcome, FixExifError> {
    let date = document.find_tag_value(pair.date_tag)?;
    let offset = document.find_tag_value(pair.offset_tag)?;
    let target = reproject(&date, &offset, zone)?;

    if parse_offset(&offset)? == parse_offset(&target.offset)? {
        output.skip_pair();
        info!("Timezone offset is correct, nothing to do.");
        return Ok(PairOutcome::Unchanged {
            date_tag: pair.date_tag,
            offset_tag: pair.offset_tag,
            offset,
        });
    }

    info!(date = %date, offset = %offset, "Old values.");
    info!(date = %target.date, offset = %target.offset, "New values.");
    output.print_dates(pair.date_tag, &date, &target.date);
    output.print_offsets(pair.offset_tag, &offset, &target.offset);

    document.set_tag_value(pair.date_ifd, pair.date_tag, &target.date)?;
    document.set_tag_value(pair.offset_ifd, pair.offset_tag, &target.offset)?;

    Ok(PairOutcome::Updated {
        date_tag: pair.date_tag,
        offset_tag: pair.offset_tag,
        old_date: date,
        new_date: target.date,
        old_offset: offset,
        new_offset: target.offset,
    })
}

/// Reprojects every tag pair of the JPEG at `path` into `zone` and writes the file back.
pub fn fix_date(
    path: &Path,
    zone: &TargetZone,
    output: &mut dyn Output,
) -> Result<FileReport, FixExifError> {
    output.print_file(path);
    let result = fix_document(path, zone, output);
    output.done(result.is_ok());

    result.map_err(|e| {
        error!(filepath = %path.display(), error = %e, "Failed to fix EXIF date.");
        FixExifError::File {
            path: path.to_path_buf(),
            source: Box::new(e),
        }
    })
}

fn fix_document(
    path: &Path,
    zone: &TargetZone,
    output: &mut dyn Output,
) -> Result<FileReport, FixExifError> {
    let mut document = MediaDocument::open(path)?;
    let pairs = TAG_PAIRS
        .iter()
        .map(|pair| update_pair(&mut document, pair, zone, output))
        .collect::<Result<Vec<_>, _>>()?;
    document.serialize(path)?;

    Ok(FileReport {
        path: path.to_path_buf(),
        pairs,
    })
}
