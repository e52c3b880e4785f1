//! Course Catalog CLI
//!
//! Scans a directory tree of recorded course videos and writes an ordered
//! JSON catalog.

use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

use course_catalog::{scan, write_catalog, CatalogError, FfprobeProber, ScanConfig};

/// Extract ordered video metadata from a course folder
#[derive(Parser)]
#[command(name = "course_catalog")]
#[command(author, version, about)]
struct Cli {
    /// Path to the folder containing videos
    folder: PathBuf,

    /// Output JSON file name
    #[arg(short, long, default_value = "video_metadata.json")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Scanning: {}", cli.folder.display());

    let config = ScanConfig::default();
    let prober = FfprobeProber::new();

    let report = match scan(&cli.folder, &config, &prober) {
        Ok(report) => report,
        Err(e @ CatalogError::InvalidInput { .. }) => {
            eprintln!("Invalid folder path: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Scan failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Scan complete: {} record(s)", report.record_count());
    if !report.is_clean() {
        warn!("{} file(s) failed duration probing", report.failures.len());
    }

    match write_catalog(&report.records, &cli.output) {
        Ok(count) => {
            println!("Metadata saved to {}", cli.output.display());
            println!("Videos found: {}", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write {}: {}", cli.output.display(), e);
            ExitCode::FAILURE
        }
    }
}
