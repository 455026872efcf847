//! Configuration error types.

/// What went wrong while assembling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A source could not be read or merged
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// The merged sources did not match the expected shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A field parsed but holds an unusable value
    #[display("Invalid {}: {}", field, reason)]
    Invalid {
        /// Offending key
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use keepsake_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::invalid("root_directory", "must not be empty");
/// assert!(matches!(err.kind, ConfigErrorKind::Invalid { field: "root_directory", .. }));
/// assert!(err.to_string().contains("Invalid root_directory"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a rejected field value.
    #[track_caller]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            field,
            reason: reason.into(),
        })
    }
}
