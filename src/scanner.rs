//! Scanner module - walks a course directory tree and builds the catalog
//!
//! Traversal is strictly sequential and entries within each directory are
//! visited in lexicographic name order, so ties in the final sort resolve
//! the same way on every run. Symlinks are not followed; there is no
//! symlink-loop protection beyond that.

use std::path::Path;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::CatalogError;
use crate::keys;
use crate::models::{ProbeFailure, ScanReport, VideoRecord};
use crate::prober::MediaProber;

/// Scan a directory tree for video files and return the sorted catalog.
///
/// The root must exist and be a directory; otherwise the scan fails with
/// [`CatalogError::InvalidInput`] before any file is touched. A probe
/// failure for one file never aborts the run: the record is kept with a
/// zero duration and the failure lands in [`ScanReport::failures`].
pub fn scan(
    root: &Path,
    config: &ScanConfig,
    prober: &dyn MediaProber,
) -> Result<ScanReport, CatalogError> {
    if !root.exists() {
        return Err(CatalogError::not_found(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CatalogError::not_a_directory(root.to_path_buf()));
    }

    let mut report = ScanReport::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };

        if !config.matches_file_name(name) {
            continue;
        }

        let duration = match prober.probe_duration(path) {
            Ok(seconds) => seconds,
            Err(e) => {
                log::warn!("{}", e);
                report.failures.push(ProbeFailure {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
                0.0
            }
        };

        let course = keys::course_of(path);
        let section_full = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        report.records.push(VideoRecord::new(
            name.to_string(),
            course,
            section_full,
            duration,
        ));
    }

    sort_records(&mut report.records);
    Ok(report)
}

/// Sort records into viewing order: numeric section first, then numeric
/// title prefix; anything non-numeric sorts after every number. The sort is
/// stable, so records with equal keys keep their discovery order.
pub fn sort_records(records: &mut [VideoRecord]) {
    records.sort_by_key(|r| (r.section_key(), r.title_key()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::OrderKey;

    fn record(title: &str, section_full: &str) -> VideoRecord {
        VideoRecord::new(
            title.to_string(),
            "Course".to_string(),
            section_full.to_string(),
            0.0,
        )
    }

    #[test]
    fn test_sort_by_section_then_title_number() {
        let mut records = vec![
            record("1 - Z.mp4", "10 - Last"),
            record("10 - A.mp4", "2 - Advanced"),
            record("2 - B.mkv", "2 - Advanced"),
            record("5 - C.avi", "1 - Intro"),
        ];
        sort_records(&mut records);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["5 - C.avi", "2 - B.mkv", "10 - A.mp4", "1 - Z.mp4"]
        );
    }

    #[test]
    fn test_unnumbered_sorts_last() {
        let mut records = vec![
            record("Outro.mp4", "Appendix"),
            record("1 - A.mp4", "3 - Basics"),
        ];
        sort_records(&mut records);
        assert_eq!(records[0].title, "1 - A.mp4");
        assert_eq!(records[1].title, "Outro.mp4");
        assert_eq!(records[1].section_key(), OrderKey::Unnumbered);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut once = vec![
            record("B.mp4", "2 - A"),
            record("3 - C.mp4", "2 - A"),
            record("A.mp4", "1 - B"),
        ];
        sort_records(&mut once);
        let mut twice = once.clone();
        sort_records(&mut twice);
        assert_eq!(once, twice);
    }

    proptest::proptest! {
        #[test]
        fn sort_idempotent_on_arbitrary_names(
            names in proptest::collection::vec((".{0,20}", ".{0,20}"), 0..12)
        ) {
            let mut once: Vec<VideoRecord> = names
                .iter()
                .map(|(title, section)| record(title, section))
                .collect();
            sort_records(&mut once);
            let mut twice = once.clone();
            sort_records(&mut twice);
            proptest::prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_sort_stability_on_equal_keys() {
        // Same section key, no title number: discovery order must survive
        let mut records = vec![
            record("Alpha.mp4", "2 - A"),
            record("Beta.mp4", "2 - A"),
            record("Gamma.mp4", "2 - A"),
        ];
        sort_records(&mut records);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha.mp4", "Beta.mp4", "Gamma.mp4"]);
    }
}
