//! Error types for the Keepsake asset store.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use keepsake_error::{KeepsakeResult, StorageError, StorageErrorKind};
//!
//! fn remove() -> KeepsakeResult<()> {
//!     Err(StorageError::new(StorageErrorKind::NotFound("/tmp/a.png".to_string())))?
//! }
//!
//! match remove() {
//!     Ok(()) => println!("Removed"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod serialization;
mod storage;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{KeepsakeError, KeepsakeErrorKind, KeepsakeResult};
pub use http::{HttpError, HttpErrorKind};
pub use serialization::SerializationError;
pub use storage::{StorageError, StorageErrorKind};
