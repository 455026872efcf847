//! Configuration for the local asset store.
//!
//! Configuration is layered with the `config` crate:
//! - Bundled defaults (include_str! from keepsake.toml)
//! - User overrides (~/.config/keepsake/keepsake.toml, then ./keepsake.toml)
//! - Environment (`KEEPSAKE_*`, plus `FRONTEND_URL` / `UPLOAD_DIRECTORY`)

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use keepsake_error::{ConfigError, ConfigErrorKind, KeepsakeError, KeepsakeResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("keepsake.toml");

/// Settings for fetching remote assets.
///
/// # Example
///
/// ```toml
/// [fetch]
/// timeout_secs = 15
/// max_redirects = 5
/// user_agent = "Mozilla/5.0"
/// accept = "image/*,*/*;q=0.8"
/// referer = "https://www.linkedin.com/"
/// default_extension = "jpg"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of redirects to follow
    pub max_redirects: usize,
    /// `User-Agent` presented to origins
    pub user_agent: String,
    /// `Accept` header value
    pub accept: String,
    /// `Referer` header value
    pub referer: String,
    /// Extension used when the response content type is absent or unknown
    pub default_extension: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_redirects: 5,
            user_agent: "Mozilla/5.0".to_string(),
            accept: "image/*,*/*;q=0.8".to_string(),
            referer: "https://www.linkedin.com/".to_string(),
            default_extension: "jpg".to_string(),
        }
    }
}

impl FetchConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Local asset store configuration.
///
/// # Example
///
/// ```no_run
/// use keepsake_storage::StorageConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Bundled defaults + user files + environment
/// let config = StorageConfig::load()?;
/// println!("Storing under {}", config.root_directory.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Root of the date-partitioned upload tree
    pub root_directory: PathBuf,
    /// Base URL the `/uploads` tree is served under
    pub public_base_url: String,
    /// Remote fetch settings
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl StorageConfig {
    /// Create a configuration with default fetch settings.
    pub fn new(root_directory: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root_directory: root_directory.into(),
            public_base_url: public_base_url.into(),
            fetch: FetchConfig::default(),
        }
    }

    /// Replace the fetch settings.
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Load bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> KeepsakeResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> KeepsakeResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/keepsake/keepsake.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("keepsake").required(false));
        builder = Self::with_environment(builder)?;

        Self::finish(builder)
    }

    /// Check that the required fields are usable.
    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.root_directory.as_os_str().is_empty() {
            return Err(ConfigError::invalid("root_directory", "must not be empty").into());
        }
        if self.public_base_url.trim().is_empty() {
            return Err(ConfigError::invalid("public_base_url", "must not be empty").into());
        }
        Ok(())
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn with_environment(
        builder: ConfigBuilder<DefaultState>,
    ) -> KeepsakeResult<ConfigBuilder<DefaultState>> {
        let mut builder = builder.add_source(
            Environment::with_prefix("KEEPSAKE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Conventional deployment variables, used only when not set explicitly.
        let legacy = [
            ("public_base_url", "KEEPSAKE_PUBLIC_BASE_URL", "FRONTEND_URL"),
            ("root_directory", "KEEPSAKE_ROOT_DIRECTORY", "UPLOAD_DIRECTORY"),
        ];
        for (key, explicit, conventional) in legacy {
            if std::env::var_os(explicit).is_some() {
                continue;
            }
            builder = builder
                .set_override_option(key, std::env::var(conventional).ok())
                .map_err(|e| {
                    KeepsakeError::from(ConfigError::new(ConfigErrorKind::Load(format!(
                        "{}: {}",
                        conventional, e
                    ))))
                })?;
        }

        Ok(builder)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> KeepsakeResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                KeepsakeError::from(ConfigError::new(ConfigErrorKind::Load(e.to_string())))
            })?
            .try_deserialize()
            .map_err(|e| {
                KeepsakeError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
            })?;

        config.validate()?;
        Ok(config)
    }
}
