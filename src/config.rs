//! Configuration for the catalog scanner

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::VIDEO_EXTENSIONS;

/// Configuration for a scan pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions to include (lowercase, without dot)
    pub extensions: HashSet<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: Self::default_extensions(),
        }
    }
}

impl ScanConfig {
    /// Create a config with the default video extension whitelist
    pub fn new() -> Self {
        Self::default()
    }

    /// The recognized video extensions
    pub fn default_extensions() -> HashSet<String> {
        VIDEO_EXTENSIONS.iter().map(|s| s.to_string()).collect()
    }

    /// Check whether a file name ends in a recognized video extension,
    /// case-insensitively
    pub fn matches_file_name(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| lower.ends_with(&format!(".{}", ext)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let config = ScanConfig::default();
        assert!(config.extensions.contains("mp4"));
        assert!(config.extensions.contains("mkv"));
        assert!(config.extensions.contains("avi"));
        assert!(config.extensions.contains("mov"));
        assert_eq!(config.extensions.len(), 4);
    }

    #[test]
    fn test_matches_file_name_case_insensitive() {
        let config = ScanConfig::default();
        assert!(config.matches_file_name("lesson.mp4"));
        assert!(config.matches_file_name("LESSON.MP4"));
        assert!(config.matches_file_name("clip.MkV"));
        assert!(!config.matches_file_name("readme.txt"));
        assert!(!config.matches_file_name("notes.mp3"));
        assert!(!config.matches_file_name("mp4"));
    }
}
