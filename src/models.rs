//! Core data models for the video catalog

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::keys::{self, OrderKey};

/// Recognized video file extensions (lowercase, without dot)
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "avi", "mov"];

/// One catalog entry per discovered video file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// File name including extension, as found on disk
    pub title: String,
    /// Name of the grandparent directory, trimmed
    pub course: String,
    /// Short section identifier derived from the containing folder name
    pub section: String,
    /// Full containing folder name, trimmed, delimiter preserved
    pub section_full: String,
    /// Probed duration truncated to whole seconds; 0 if the probe failed
    pub duration_seconds: u64,
    /// `H:MM:SS` rendering of `duration_seconds`
    pub duration_formatted: String,
}

impl VideoRecord {
    /// Build a record from a file title, its containing folder names and a
    /// probed duration. A failed probe passes `0.0` here.
    pub fn new(
        title: String,
        course: String,
        section_full: String,
        duration: f64,
    ) -> Self {
        let section = keys::section_of(&section_full);
        let duration_seconds = truncate_seconds(duration);
        Self {
            title,
            course,
            section,
            section_full: section_full.trim().to_string(),
            duration_seconds,
            duration_formatted: format_duration(duration_seconds),
        }
    }

    /// Primary sort key: the section identifier parsed as an integer
    pub fn section_key(&self) -> OrderKey {
        keys::parse_int_or_last(&self.section)
    }

    /// Secondary sort key: the leading numeric prefix of the title
    pub fn title_key(&self) -> OrderKey {
        keys::leading_number(&self.title)
    }
}

/// Truncate a probed floating-point duration to whole seconds.
/// Negative or non-finite values degrade to 0.
pub fn truncate_seconds(duration: f64) -> u64 {
    if duration.is_finite() && duration > 0.0 {
        duration as u64
    } else {
        0
    }
}

/// Render seconds as `H:MM:SS`. Hours are unpadded and keep growing past
/// two digits for durations of a day or more.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

/// A single file whose duration probe failed during a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeFailure {
    /// The file that failed probing
    pub path: PathBuf,
    /// Prober output or error text
    pub message: String,
}

/// Result of one scan pass: the sorted records plus any per-file probe
/// diagnostics. Rebuilt from scratch on every run.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Fully populated records in catalog order
    pub records: Vec<VideoRecord>,
    /// Files whose duration defaulted to 0 because the probe failed
    pub failures: Vec<ProbeFailure>,
}

impl ScanReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the catalog
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether every probe succeeded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
