//! Command handlers.

use keepsake_error::{KeepsakeResult, SerializationError, StorageError, StorageErrorKind};
use keepsake_storage::{
    FileUpload, LocalStorage, StorageConfig, UploadProvider, UploadedFile, UrlUpload,
};
use std::path::Path;

/// Load configuration from an explicit file, or the layered defaults.
pub fn load_config(path: Option<&Path>) -> KeepsakeResult<StorageConfig> {
    match path {
        Some(path) => StorageConfig::from_file(path),
        None => StorageConfig::load(),
    }
}

/// Store a remote URL and print the URL clients should use.
pub async fn handle_fetch(storage: &LocalStorage, url: &str) -> KeepsakeResult<()> {
    match storage.upload_simple(url).await {
        UrlUpload::Stored { url, path, .. } => {
            tracing::debug!(path = %path.display(), "Stored");
            println!("{}", url);
        }
        UrlUpload::Fallback { url, .. } => println!("{}", url),
    }
    Ok(())
}

/// Store a local file, print its descriptor and return it.
pub async fn handle_upload(
    storage: &LocalStorage,
    file: &Path,
    mimetype: Option<String>,
) -> KeepsakeResult<UploadedFile> {
    let buffer = tokio::fs::read(file).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", file.display(), e)))
    })?;

    let original_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mimetype = mimetype.unwrap_or_else(|| resolve_mimetype(file));

    let stored = storage
        .upload_file(&FileUpload::new(buffer, original_name, mimetype))
        .await?;

    let json = serde_json::to_string_pretty(&stored)
        .map_err(|e| SerializationError::new("json", e))?;
    println!("{}", json);
    Ok(stored)
}

/// Delete a stored file.
pub async fn handle_remove(storage: &LocalStorage, path: &str) -> KeepsakeResult<()> {
    storage.remove_file(path).await?;
    println!("Removed {}", path);
    Ok(())
}

/// Print the effective configuration.
pub fn handle_config(config: &StorageConfig) -> KeepsakeResult<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| SerializationError::new("toml", e))?;
    print!("{}", rendered);
    Ok(())
}

/// Guess a MIME type from a file name, defaulting to octet-stream.
fn resolve_mimetype(file: &Path) -> String {
    mime_guess::from_path(file)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
