use crate::error::FixExifError;
use crate::fix::output::Output;
use crate::fix::report::FileReport;
use crate::fix::fix_date;
use crate::time::TargetZone;
use crate::time::zone::LOCAL_ZONE_NAME;
use bon::bon;
use std::path::Path;
use tracing::{debug, error, info};

/// Reprojects the EXIF dates of JPEG files into one target timezone.
pub struct DateFixer {
    zone: TargetZone,
}

#[bon]
impl DateFixer {
    /// `timezone` is an IANA name such as "Europe/Helsinki"; it defaults to the platform's
    /// local timezone ("Local").
    #[builder]
    pub fn new(#[builder(into)] timezone: Option<String>) -> Result<Self, FixExifError> {
        let name = timezone.unwrap_or_else(|| LOCAL_ZONE_NAME.to_string());
        let zone = name.parse::<TargetZone>().map_err(|source| {
            error!(timezone = %name, error = %source, "Failed to load timezone.");
            FixExifError::InvalidTimezone { name, source }
        })?;
        Ok(Self { zone })
    }

    pub fn zone(&self) -> &TargetZone {
        &self.zone
    }

    pub fn fix_file(&self, path: &Path, output: &mut dyn Output) -> Result<FileReport, FixExifError> {
        let report = fix_date(path, &self.zone, output)?;
        match serde_json::to_string(&report) {
            Ok(json) => info!(report = %json, "File fixed."),
            Err(e) => debug!(error = %e, "Could not serialize file report."),
        }
        Ok(report)
    }

    /// Fixes `paths` in order. The first failure stops the batch: later files are never
    /// opened, earlier ones stay written.
    pub fn fix_files<P: AsRef<Path>>(
        &self,
        paths: &[P],
        output: &mut dyn Output,
    ) -> Result<Vec<FileReport>, FixExifError> {
        paths
            .iter()
            .map(|path| self.fix_file(path.as_ref(), output))
            .collect()
    }
}
