//! Media duration probing
//!
//! The scanner only needs one number per file, so probing is a narrow trait
//! with a single method. The production implementation shells out to
//! `ffprobe`; tests substitute a stub.

use std::path::Path;
use std::process::Command;

use crate::error::CatalogError;

/// Obtains the duration of a media file in seconds.
pub trait MediaProber {
    /// Probe one file. Returns the duration in seconds or a
    /// [`CatalogError::Probe`] if it cannot be determined.
    fn probe_duration(&self, path: &Path) -> Result<f64, CatalogError>;
}

/// Prober backed by the `ffprobe` binary.
///
/// Each probe spawns a short-lived subprocess whose handles are dropped
/// before the next file is processed, so a large scan never accumulates
/// open media containers.
#[derive(Debug, Clone, Default)]
pub struct FfprobeProber;

impl FfprobeProber {
    /// Create a prober that invokes `ffprobe` from `PATH`
    pub fn new() -> Self {
        Self
    }
}

impl MediaProber for FfprobeProber {
    fn probe_duration(&self, path: &Path) -> Result<f64, CatalogError> {
        log::debug!("probing {}", path.display());
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .map_err(|e| CatalogError::probe(path.to_path_buf(), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CatalogError::probe(
                path.to_path_buf(),
                stderr.trim().to_string(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .parse::<f64>()
            .map_err(|e| CatalogError::probe(path.to_path_buf(), e.to_string()))
    }
}
