//! Local disk upload provider.
//!
//! Stores assets in a date-partitioned tree under a configured root and hands
//! back URLs under the configured public base.

use crate::{
    Clock, FileUpload, PartitionedPath, RemoteFetcher, StorageConfig, SystemClock, UploadProvider,
    UploadedFile, UrlUpload, extension_for_content_type, extension_of_filename, generate_id,
};
use keepsake_error::{KeepsakeError, KeepsakeErrorKind, KeepsakeResult, StorageError, StorageErrorKind};
use std::path::PathBuf;
use std::sync::Arc;

/// Local filesystem upload provider.
///
/// Layout on disk:
///
/// ```text
/// {root_directory}/
/// └── 2024/
///     └── 05/
///         └── 03/
///             ├── 3f2a9c...e1.png
///             └── 81bd04...7c.JPG
/// ```
///
/// Each file is served at `{public_base_url}/uploads/2024/05/03/{name}`.
/// Partitions are created on demand and never pruned.
#[derive(Debug)]
pub struct LocalStorage {
    config: StorageConfig,
    fetcher: RemoteFetcher,
    clock: Arc<dyn Clock>,
}

impl LocalStorage {
    /// Create a provider that partitions by wall-clock date.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    #[tracing::instrument(skip(config), fields(root = %config.root_directory.display()))]
    pub fn new(config: StorageConfig) -> KeepsakeResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a provider with an explicit time source.
    pub fn with_clock(config: StorageConfig, clock: Arc<dyn Clock>) -> KeepsakeResult<Self> {
        config.validate()?;
        let fetcher = RemoteFetcher::new(&config.fetch)?;

        tracing::info!(
            root = %config.root_directory.display(),
            public_base_url = %config.public_base_url,
            "Created local storage"
        );
        Ok(Self {
            config,
            fetcher,
            clock,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Pick a fresh name in today's partition.
    fn place(&self, extension: Option<&str>) -> PartitionedPath {
        PartitionedPath::new(self.clock.now(), &generate_id(), extension)
    }

    /// Create the partition if needed and write `data` into it.
    async fn persist(&self, placement: &PartitionedPath, data: &[u8]) -> KeepsakeResult<PathBuf> {
        let root = &self.config.root_directory;
        let dir = placement.directory(root);

        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;
        tracing::debug!(dir = %dir.display(), "Ensured partition directory");

        let path = placement.file_path(root);
        tokio::fs::write(&path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        Ok(path)
    }

    async fn store_remote(&self, url: &str) -> KeepsakeResult<UrlUpload> {
        let asset = self.fetcher.fetch(url).await?;

        let extension = extension_for_content_type(asset.content_type.as_deref())
            .unwrap_or(self.config.fetch.default_extension.as_str());
        let placement = self.place(Some(extension));
        let path = self.persist(&placement, &asset.bytes).await?;
        let public_url = placement.public_url(&self.config.public_base_url);

        tracing::info!(
            source = url,
            path = %path.display(),
            size = asset.bytes.len(),
            "Stored remote asset"
        );

        Ok(UrlUpload::Stored {
            url: public_url,
            path,
            content_type: asset.content_type,
        })
    }
}

/// Diagnostic text for a fallback warning.
fn fallback_reason(err: &KeepsakeError) -> String {
    match err.kind() {
        KeepsakeErrorKind::Http(http) => http.describe(),
        KeepsakeErrorKind::Storage(storage) => storage.kind.to_string(),
        KeepsakeErrorKind::Config(config) => config.kind.to_string(),
        KeepsakeErrorKind::Serialization(err) => err.message.clone(),
    }
}

#[async_trait::async_trait]
impl UploadProvider for LocalStorage {
    #[tracing::instrument(skip(self))]
    async fn upload_simple(&self, url: &str) -> UrlUpload {
        match self.store_remote(url).await {
            Ok(stored) => stored,
            Err(e) => {
                let reason = fallback_reason(&e);
                tracing::warn!(url, reason = %reason, "Failed to fetch remote asset, keeping original URL");
                UrlUpload::Fallback {
                    url: url.to_string(),
                    reason,
                }
            }
        }
    }

    #[tracing::instrument(
        skip(self, file),
        fields(original_name = %file.original_name, mimetype = %file.mimetype, size = file.buffer.len())
    )]
    async fn upload_file(&self, file: &FileUpload) -> KeepsakeResult<UploadedFile> {
        let placement = self.place(extension_of_filename(&file.original_name));

        let file_path = self.persist(&placement, &file.buffer).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to store uploaded file");
        })?;

        tracing::info!(path = %file_path.display(), "Stored uploaded file");

        Ok(UploadedFile {
            filename: placement.file_name().to_string(),
            path: placement.public_url(&self.config.public_base_url),
            mimetype: file.mimetype.clone(),
            original_name: file.original_name.clone(),
            file_path,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn remove_file(&self, file_path: &str) -> KeepsakeResult<()> {
        tokio::fs::remove_file(file_path)
            .await
            .map_err(|e| StorageError::from_delete(file_path, &e))?;

        tracing::info!(path = file_path, "Removed stored file");
        Ok(())
    }
}
