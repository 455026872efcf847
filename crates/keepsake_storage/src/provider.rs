//! Upload provider trait definition.

use crate::{FileUpload, UploadedFile, UrlUpload};
use keepsake_error::KeepsakeResult;

/// Trait for pluggable upload backends.
///
/// The two store operations deliberately differ in how they fail: pulling a
/// remote asset degrades to the original URL, while an explicit upload
/// reports its error to the caller.
#[async_trait::async_trait]
pub trait UploadProvider: Send + Sync {
    /// Download `url` and store a local copy.
    ///
    /// # Returns
    ///
    /// [`UrlUpload::Stored`] with the public URL of the copy, or
    /// [`UrlUpload::Fallback`] carrying `url` unchanged if any step failed.
    async fn upload_simple(&self, url: &str) -> UrlUpload;

    /// Store an uploaded buffer.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the partition cannot be created or the file
    /// cannot be written.
    async fn upload_file(&self, file: &FileUpload) -> KeepsakeResult<UploadedFile>;

    /// Delete a previously stored file by its on-disk path.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing exists at `file_path`, or another storage
    /// error if the filesystem refuses the delete.
    async fn remove_file(&self, file_path: &str) -> KeepsakeResult<()>;
}
