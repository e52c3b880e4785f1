//! Cloud upload handler
//!
//! Standalone artifact, not part of the scan pipeline: takes a binary
//! payload and stores it in a destination bucket, creating the bucket on
//! first use. The storage backend is injected as an explicitly constructed
//! handle rather than reached through module-level state.

use chrono::Utc;
use thiserror::Error;

/// Default bucket for uploaded videos
pub const DEFAULT_BUCKET: &str = "course-catalog-input";

/// Errors from the blob-storage backend
#[derive(Debug, Error)]
pub enum UploadError {
    /// Bucket lookup or creation failed
    #[error("bucket {bucket}: {message}")]
    Bucket {
        /// Target bucket name
        bucket: String,
        /// Backend error text
        message: String,
    },
    /// Object write failed
    #[error("put {key}: {message}")]
    Put {
        /// Object key that failed
        key: String,
        /// Backend error text
        message: String,
    },
}

/// Minimal blob-storage capability: head, create, put.
pub trait BlobStore {
    /// Whether the bucket already exists
    fn bucket_exists(&self, bucket: &str) -> Result<bool, UploadError>;
    /// Create the bucket
    fn create_bucket(&mut self, bucket: &str) -> Result<(), UploadError>;
    /// Store `payload` under `key` in `bucket`
    fn put_object(&mut self, bucket: &str, key: &str, payload: &[u8]) -> Result<(), UploadError>;
}

/// Upload handler owning its store handle and target bucket.
///
/// Constructed once at startup; the store is never reinitialized behind
/// the caller's back.
pub struct Uploader<S: BlobStore> {
    store: S,
    bucket: String,
}

impl<S: BlobStore> Uploader<S> {
    /// Create an uploader targeting `bucket`
    pub fn new(store: S, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }

    /// Store `payload` under `filename`, creating the bucket if needed.
    /// Returns the object key. A missing filename gets a timestamped
    /// default.
    pub fn upload(&mut self, payload: &[u8], filename: Option<String>) -> Result<String, UploadError> {
        let key = filename.unwrap_or_else(default_object_name);

        if !self.store.bucket_exists(&self.bucket)? {
            self.store.create_bucket(&self.bucket)?;
        }

        self.store.put_object(&self.bucket, &key, payload)?;
        log::info!("uploaded {} bytes to {}/{}", payload.len(), self.bucket, key);
        Ok(key)
    }
}

/// `video-<UTC timestamp>.mp4`, used when the caller provides no filename
fn default_object_name() -> String {
    format!("video-{}.mp4", Utc::now().format("%Y%m%dT%H%M%S%3f"))
}
