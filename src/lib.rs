//! Course video cataloger
//!
//! Walks a directory tree of recorded course videos, probes each file for
//! its duration, and produces a deterministically ordered metadata
//! collection ready for JSON serialization.
//!
//! Known limitations: symlinks are not followed and there is no cycle
//! protection, and a hung duration probe blocks the whole scan.

pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod prober;
pub mod scanner;
pub mod serializer;
pub mod upload;

pub use config::ScanConfig;
pub use error::CatalogError;
pub use keys::{course_of, leading_number, parse_int_or_last, section_of, OrderKey};
pub use models::{ProbeFailure, ScanReport, VideoRecord, VIDEO_EXTENSIONS};
pub use prober::{FfprobeProber, MediaProber};
pub use scanner::{scan, sort_records};
pub use serializer::write_catalog;
pub use upload::{BlobStore, UploadError, Uploader};
