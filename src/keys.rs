//! Grouping-key derivation for course video libraries
//!
//! Course libraries are laid out as `Course/Section - Description/NN - Lesson.ext`.
//! The functions here turn folder and file names into comparable keys so the
//! scanner can reconstruct the intended viewing order without an external
//! index. All of them are total: any input, including the empty string,
//! produces a key, and absence of structure degrades to the sorts-last
//! sentinel rather than an error.

use std::path::Path;

/// Ordering key for sections and lesson titles.
///
/// `Unnumbered` compares greater than every `Number`, so entries without a
/// numeric prefix always sort after numbered ones. The derived `Ord` gives
/// exactly that: variants compare in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderKey {
    /// A parsed decimal value
    Number(u64),
    /// No usable number; sorts after all numbered keys
    Unnumbered,
}

impl OrderKey {
    /// Whether this key carries a real number
    pub fn is_number(&self) -> bool {
        matches!(self, OrderKey::Number(_))
    }
}

/// Course name for a video file: the trimmed name of its grandparent
/// directory. Empty when the file sits too close to the filesystem root.
pub fn course_of(file_path: &Path) -> String {
    file_path
        .parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .map(|n| n.trim().to_string())
        .unwrap_or_default()
}

/// Short section identifier from a folder name: the segment before a
/// `" - "` delimiter if one is present, else the whole name, trimmed.
///
/// `"3 - Basics"` becomes `"3"`; `"Basics"` stays `"Basics"`. A first
/// segment that trims away entirely falls back to the whole name, so the
/// section is never empty for a non-empty folder name.
pub fn section_of(folder_name: &str) -> String {
    if let Some((head, _)) = folder_name.split_once(" - ") {
        let head = head.trim();
        if !head.is_empty() {
            return head.to_string();
        }
    }
    folder_name.trim().to_string()
}

/// Longest run of decimal digits at the very start of the trimmed name,
/// parsed as an integer. Names without a leading number get the
/// sorts-last sentinel.
pub fn leading_number(name: &str) -> OrderKey {
    let trimmed = name.trim();
    let digits: &str = {
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };
    parse_int_or_last(digits)
}

/// Integer parse with the "unparseable sorts last" sentinel policy.
pub fn parse_int_or_last(text: &str) -> OrderKey {
    text.trim()
        .parse::<u64>()
        .map_or(OrderKey::Unnumbered, OrderKey::Number)
}
