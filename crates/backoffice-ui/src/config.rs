//! Application configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) yields a working configuration against a local API.
//! Unknown keys are rejected. Display formatting is fixed to pt-BR and BRL.
//!
//! ```toml
//! api_base_url = "https://api.example.com"
//! stale_time_secs = 60
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use backoffice_query::CacheConfig;
use serde::{Deserialize, Serialize};
use url::Url;

/// Backoffice configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminConfig {
    /// Root of the REST API
    pub api_base_url: String,
    /// Maximum number of cached queries
    pub cache_capacity: u64,
    /// Seconds fetched data counts as fresh
    pub stale_time_secs: u64,
    /// Seconds an unread cache entry survives
    pub gc_time_secs: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl AdminConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Read`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), api = %config.api_base_url, "configuration loaded");
        Ok(config)
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on malformed TOML, wrong field types or unknown
    /// keys, [`ConfigError::OutOfRange`] for durations the cache cannot hold
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// [`ConfigError::OutOfRange`] if `gc_time_secs` exceeds
    /// [`CacheConfig::MAX_GC_TIME`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = CacheConfig::MAX_GC_TIME.as_secs();
        if self.gc_time_secs > max {
            return Err(ConfigError::OutOfRange {
                field: "gc_time_secs",
                value: self.gc_time_secs,
                max,
            });
        }
        Ok(())
    }

    /// With API base URL
    #[inline]
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// With stale time
    #[inline]
    #[must_use]
    pub fn with_stale_time_secs(mut self, secs: u64) -> Self {
        self.stale_time_secs = secs;
        self
    }

    /// With cache capacity
    #[inline]
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Parsed API base URL
    ///
    /// # Errors
    /// [`ConfigError::InvalidUrl`] if `api_base_url` is not an absolute URL
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_base_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.api_base_url.clone(),
            source,
        })
    }

    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Query cache settings, with `gc_time` capped for values set in code
    #[must_use]
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            capacity: self.cache_capacity,
            stale_time: Duration::from_secs(self.stale_time_secs),
            gc_time: Duration::from_secs(self.gc_time_secs),
        }
        .clamped()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        let cache = CacheConfig::default();
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            cache_capacity: cache.capacity,
            stale_time_secs: cache.stale_time.as_secs(),
            gc_time_secs: cache.gc_time.as_secs(),
            request_timeout_secs: 30,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} = {value} is out of range (max {max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("invalid api_base_url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
