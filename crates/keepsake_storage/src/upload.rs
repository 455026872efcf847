//! Upload requests and their results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An in-memory file handed over by an upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File contents
    pub buffer: Vec<u8>,
    /// Name the client uploaded the file under; only its extension is used
    pub original_name: String,
    /// Declared MIME type, passed through unvalidated
    pub mimetype: String,
}

impl FileUpload {
    /// Bundle an uploaded buffer with its metadata.
    pub fn new(
        buffer: impl Into<Vec<u8>>,
        original_name: impl Into<String>,
        mimetype: impl Into<String>,
    ) -> Self {
        Self {
            buffer: buffer.into(),
            original_name: original_name.into(),
            mimetype: mimetype.into(),
        }
    }
}

/// Descriptor of a stored upload.
///
/// Serialises with the field names upload endpoints return to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Generated file name, `{id}{.ext}`
    pub filename: String,
    /// Public URL of the stored file
    pub path: String,
    /// MIME type as declared by the uploader
    pub mimetype: String,
    /// Name the file was uploaded under
    #[serde(rename = "originalname")]
    pub original_name: String,
    /// Location on disk, suitable for removal
    #[serde(rename = "filePath")]
    pub file_path: PathBuf,
}

/// Outcome of storing a remote URL.
///
/// Remote fetches never fail outright: when anything goes wrong the caller
/// gets the input URL back so the surrounding workflow can proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlUpload {
    /// The asset was downloaded and written to disk.
    Stored {
        /// Public URL of the stored copy
        url: String,
        /// Location on disk
        path: PathBuf,
        /// Content type reported by the origin
        content_type: Option<String>,
    },
    /// Storing failed; `url` is the original input, unchanged.
    Fallback {
        /// The URL that was passed in
        url: String,
        /// Best-effort description of the failure
        reason: String,
    },
}

impl UrlUpload {
    /// URL to hand to clients: the stored copy, or the original on fallback.
    pub fn url(&self) -> &str {
        match self {
            UrlUpload::Stored { url, .. } | UrlUpload::Fallback { url, .. } => url,
        }
    }

    /// Consume into the client-facing URL.
    pub fn into_url(self) -> String {
        match self {
            UrlUpload::Stored { url, .. } | UrlUpload::Fallback { url, .. } => url,
        }
    }

    /// Whether the asset now lives on local disk.
    pub fn is_stored(&self) -> bool {
        matches!(self, UrlUpload::Stored { .. })
    }
}
