//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, SerializationError, StorageError};

/// Every failure the asset store can report.
///
/// # Examples
///
/// ```
/// use keepsake_error::{KeepsakeError, HttpError, HttpErrorKind};
///
/// let http_err = HttpError::new(HttpErrorKind::Request("timed out".into()));
/// let err: KeepsakeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum KeepsakeErrorKind {
    /// HTTP error while fetching a remote asset
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Filesystem storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Rendering output failed
    #[from(SerializationError)]
    Serialization(SerializationError),
}

/// Keepsake error with kind discrimination.
///
/// # Examples
///
/// ```
/// use keepsake_error::{ConfigError, KeepsakeErrorKind, KeepsakeResult};
///
/// fn might_fail() -> KeepsakeResult<()> {
///     Err(ConfigError::invalid("public_base_url", "missing"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), KeepsakeErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Keepsake Error: {}", _0)]
pub struct KeepsakeError(Box<KeepsakeErrorKind>);

impl KeepsakeError {
    /// Create a new error from a kind.
    pub fn new(kind: KeepsakeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &KeepsakeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to KeepsakeErrorKind
impl<T> From<T> for KeepsakeError
where
    T: Into<KeepsakeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Keepsake operations.
pub type KeepsakeResult<T> = std::result::Result<T, KeepsakeError>;
