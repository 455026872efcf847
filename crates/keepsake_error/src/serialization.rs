//! Output rendering error types.

/// Failure to render a value as JSON, TOML or another text format.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Serialization Error ({}): {} at line {} in {}", format, message, line, file)]
pub struct SerializationError {
    /// Target format, e.g. "json"
    pub format: &'static str,
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl SerializationError {
    /// Wrap a serializer failure for `format`.
    ///
    /// ```
    /// use keepsake_error::SerializationError;
    ///
    /// let err = SerializationError::new("json", "key must be a string");
    /// assert_eq!(err.format, "json");
    /// ```
    #[track_caller]
    pub fn new(format: &'static str, message: impl std::fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self {
            format,
            message: message.to_string(),
            line: location.line(),
            file: location.file(),
        }
    }
}
