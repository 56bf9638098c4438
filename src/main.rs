use clap::Parser;
use fix_exif_date::DateFixer;
use fix_exif_date::fix::output::CliOutput;
use fix_exif_date::logging::{LOG_FILE, Logging};
use fix_exif_date::time::zone::LOCAL_ZONE_NAME;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// Reproject the EXIF capture dates and UTC offsets of JPEG photos into another timezone.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Override local timezone.
    #[arg(long, default_value = LOCAL_ZONE_NAME)]
    timezone: String,

    /// Photos to fix.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let _logging = match Logging::init(Path::new(LOG_FILE)) {
        Ok(logging) => logging,
        Err(e) => {
            eprintln!("Failed to open log file {LOG_FILE}: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(" ------ Start ----- ");
    let cli = Cli::parse();

    let fixer = match DateFixer::builder().timezone(cli.timezone).build() {
        Ok(fixer) => fixer,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let mut output = CliOutput::new(std::io::stdout().lock());
    if let Err(e) = fixer.fix_files(&cli.files, &mut output) {
        error!(error = %e, "Failed to fix EXIF date. Quitting.");
        eprintln!("{e}");
        return ExitCode::from(e.exit_code());
    }

    info!(" ----- Done ----- ");
    ExitCode::SUCCESS
}
