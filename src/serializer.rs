//! Catalog serialization
//!
//! Writes the finished record collection as pretty-printed JSON. Runs only
//! after the scan has completed in memory, so a write failure never costs
//! collected records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CatalogError;
use crate::models::VideoRecord;

/// Write the catalog to `destination` as JSON and return the number of
/// records written.
pub fn write_catalog(records: &[VideoRecord], destination: &Path) -> Result<usize, CatalogError> {
    let file = File::create(destination)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<VideoRecord> {
        vec![VideoRecord::new(
            "2 - B.mkv".to_string(),
            "CourseX".to_string(),
            "2 - Advanced".to_string(),
            5.0,
        )]
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("catalog.json");

        let written = write_catalog(&sample(), &dest).unwrap();
        assert_eq!(written, 1);

        let text = std::fs::read_to_string(&dest).unwrap();
        let parsed: Vec<VideoRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample());

        // Field names are part of the output contract
        assert!(text.contains("\"title\""));
        assert!(text.contains("\"course\""));
        assert!(text.contains("\"section\""));
        assert!(text.contains("\"section_full\""));
        assert!(text.contains("\"duration_seconds\""));
        assert!(text.contains("\"duration_formatted\""));
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing").join("catalog.json");

        let err = write_catalog(&sample(), &dest);
        assert!(matches!(err, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_empty_catalog_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("catalog.json");

        let written = write_catalog(&[], &dest).unwrap();
        assert_eq!(written, 0);
        let text = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(text.trim(), "[]");
    }
}
