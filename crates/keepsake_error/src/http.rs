//! HTTP error types for remote asset fetching.

/// Kinds of HTTP failures while fetching a remote asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// The HTTP client could not be constructed
    #[display("Failed to build HTTP client: {}", _0)]
    Client(String),
    /// Transport failure, timeout or redirect limit
    #[display("Request failed: {}", _0)]
    Request(String),
    /// The origin answered with a non-success status
    #[display("Unexpected status: {} {}", status, reason)]
    Status {
        /// Numeric status code
        status: u16,
        /// Canonical reason phrase, empty when unknown
        reason: String,
    },
    /// The response body could not be read
    #[display("Failed to read response body: {}", _0)]
    Body(String),
}

/// HTTP error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// The kind of error that occurred
    pub kind: HttpErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use keepsake_error::{HttpError, HttpErrorKind};
    ///
    /// let err = HttpError::new(HttpErrorKind::Request("connection refused".into()));
    /// assert_eq!(err.describe(), "connection refused");
    /// ```
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Best-effort diagnostic without location noise.
    ///
    /// Status failures render as `"{status} {reason}"` (trimmed), everything
    /// else as the underlying message.
    ///
    /// ```
    /// use keepsake_error::{HttpError, HttpErrorKind};
    ///
    /// let err = HttpError::new(HttpErrorKind::Status { status: 403, reason: "Forbidden".into() });
    /// assert_eq!(err.describe(), "403 Forbidden");
    /// ```
    pub fn describe(&self) -> String {
        match &self.kind {
            HttpErrorKind::Status { status, reason } => {
                format!("{} {}", status, reason).trim().to_string()
            }
            HttpErrorKind::Client(msg) | HttpErrorKind::Request(msg) | HttpErrorKind::Body(msg) => {
                msg.clone()
            }
        }
    }
}
