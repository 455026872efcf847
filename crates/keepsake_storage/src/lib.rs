//! Date-partitioned local disk storage for Keepsake.
//!
//! This crate persists uploaded buffers and remotely fetched media under a
//! `{root}/{YYYY}/{MM}/{DD}/{id}.{ext}` tree and hands back public URLs under
//! a configured base.
//!
//! # Features
//!
//! - **Pluggable backends**: [`UploadProvider`] abstracts the store/remove contract
//! - **Graceful remote fetches**: a failed download degrades to the original URL
//! - **Explicit uploads fail loudly**: buffer upload errors reach the caller
//! - **Layered configuration**: bundled defaults, user files and environment
//!
//! # Example
//!
//! ```rust,no_run
//! use keepsake_storage::{FileUpload, LocalStorage, StorageConfig, UploadProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = LocalStorage::new(StorageConfig::new("/srv/uploads", "https://app.example.com"))?;
//!
//! // Remote fetches never error; on failure the input URL comes back.
//! let avatar = storage.upload_simple("https://cdn.example.com/avatar.png").await;
//! println!("avatar at {}", avatar.url());
//!
//! // Buffer uploads report failures.
//! let file = FileUpload::new(vec![0u8; 128], "photo.JPG", "image/jpeg");
//! let stored = storage.upload_file(&file).await?;
//! storage.remove_file(&stored.file_path.to_string_lossy()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod config;
mod extension;
mod fetch;
mod local;
mod partition;
mod provider;
mod upload;

pub use crate::config::{FetchConfig, StorageConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use extension::{extension_for_content_type, extension_of_filename};
pub use fetch::{FetchedAsset, RemoteFetcher};
pub use keepsake_error::{KeepsakeError, KeepsakeErrorKind, KeepsakeResult, StorageError, StorageErrorKind};
pub use local::LocalStorage;
pub use partition::{PUBLIC_PREFIX, PartitionedPath, generate_id};
pub use provider::UploadProvider;
pub use upload::{FileUpload, UploadedFile, UrlUpload};
