//! Engine and component configuration.
//!
//! Both configs come with sensible defaults via [`Default`] and a fluent
//! builder that validates the values on `build()`.
//!
//! # Examples
//!
//! ```rust
//! use restprobe::engine::config::{FetcherConfig, DEFAULT_URL};
//! let cfg = FetcherConfig::default();
//! assert_eq!(cfg.url.as_str(), DEFAULT_URL);
//! ```
//!
//! ```rust
//! use restprobe::engine::config::FetcherConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FetcherConfig::builder()
//!     .url("http://localhost:8000/todos/2")
//!     .user_agent("my-game/0.3")
//!     .build()?;
//! assert_eq!(cfg.url.path(), "/todos/2");
//! # Ok(()) }
//! ```

use crate::engine::errors::ConfigError;
use crate::engine::DEFAULT_CHANNEL_CAPACITY;
use url::Url;

/// Endpoint the fetcher talks to when nothing else is configured
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Configuration of a single fetcher component
#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    /// Target of the GET request
    pub url: Url,
    /// User agent header. When `None` the request carries no user agent at all
    pub user_agent: Option<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("default url is valid"),
            user_agent: None,
        }
    }
}

impl FetcherConfig {
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::default()
    }
}

#[derive(Debug, Clone)]
pub struct FetcherConfigBuilder {
    url: String,
    user_agent: Option<String>,
}

impl Default for FetcherConfigBuilder {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: None,
        }
    }
}

impl FetcherConfigBuilder {
    pub fn url<S: Into<String>>(mut self, url: S) -> Self {
        self.url = url.into();
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, ua: S) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FetcherConfig, ConfigError> {
        let url = Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        if self.user_agent.as_deref().is_some_and(|ua| ua.trim().is_empty()) {
            return Err(ConfigError::EmptyUserAgent);
        }

        Ok(FetcherConfig {
            url,
            user_agent: self.user_agent,
        })
    }
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Maximum number of components that can be registered
    pub max_components: usize,
    /// Capacity of the broadcast event channel
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_components: 16,
            event_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    inner: EngineConfig,
}

impl EngineConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut EngineConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn max_components(self, n: usize) -> Self { self.map(|c| c.max_components = n) }
    pub fn event_capacity(self, n: usize) -> Self { self.map(|c| c.event_capacity = n) }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        if self.inner.max_components == 0 {
            return Err(ConfigError::ZeroComponents);
        }
        if self.inner.event_capacity == 0 {
            return Err(ConfigError::ZeroEventCapacity);
        }
        Ok(self.inner)
    }
}
