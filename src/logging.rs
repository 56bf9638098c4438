//! Diagnostic log file for a run.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::filter::LevelFilter;

/// Log file written next to where the tool is run.
pub const LOG_FILE: &str = "fix-exif-date.log";

/// Environment variable selecting the log level: `info` (default) or `debug`.
pub const LEVEL_ENV: &str = "fix_exif_date_logging_level";

/// Maps the raw level setting to a filter; anything unrecognised means `info`.
pub fn parse_level(raw: Option<&str>) -> LevelFilter {
    match raw.map(str::to_lowercase).as_deref() {
        Some("debug") => LevelFilter::DEBUG,
        _ => LevelFilter::INFO,
    }
}

/// Keeps the JSON log subscriber installed while it is alive.
///
/// Created once at startup and held for the whole run.
pub struct Logging {
    _guard: DefaultGuard,
}

impl Logging {
    /// Appends to the log file at `path`, creating it if needed. The level comes from
    /// [`LEVEL_ENV`].
    pub fn init(path: &Path) -> io::Result<Self> {
        let level = parse_level(std::env::var(LEVEL_ENV).ok().as_deref());
        Ok(Self::with_file(open_log_file(path)?, level))
    }

    pub fn with_file(file: File, level: LevelFilter) -> Self {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_ansi(false)
            .with_max_level(level)
            .with_writer(Mutex::new(file))
            .finish();
        Self {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o640);
    }
    options.open(path)
}
