//! # Storefront Configuration
//!
//! Where the remote JSON store lives and how the client talks to it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MEALCART_BASE_URL=https://my-store.firebaseio.com                  │
//! │     MEALCART_TIMEOUT_SECS=10                                           │
//! │     MEALCART_CHECK_STATUS=false                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/mealcart/storefront.toml (Linux)                         │
//! │     ~/Library/Application Support/com.mealcart.mealcart/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [endpoint]
//! base_url = "https://example.firebaseio.com"
//! meals_path = "meals.json"
//! orders_path = "orders.json"
//! timeout_secs = 10
//!
//! [orders]
//! check_status = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ConfigError, ConfigResult};

/// Data store the storefront talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://react-http-1b7e7-default-rtdb.firebaseio.com";

const ENV_BASE_URL: &str = "MEALCART_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "MEALCART_TIMEOUT_SECS";
const ENV_CHECK_STATUS: &str = "MEALCART_CHECK_STATUS";

// =============================================================================
// Endpoint Settings
// =============================================================================

/// Location of the remote store and its two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// Root of the store, e.g. `https://example.firebaseio.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Menu document, relative to `base_url`.
    #[serde(default = "default_meals_path")]
    pub meals_path: String,

    /// Orders collection, relative to `base_url`.
    #[serde(default = "default_orders_path")]
    pub orders_path: String,

    /// Per-request timeout. `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_meals_path() -> String {
    "meals.json".to_string()
}

fn default_orders_path() -> String {
    "orders.json".to_string()
}

impl Default for EndpointSettings {
    fn default() -> Self {
        EndpointSettings {
            base_url: default_base_url(),
            meals_path: default_meals_path(),
            orders_path: default_orders_path(),
            timeout_secs: None,
        }
    }
}

// =============================================================================
// Order Settings
// =============================================================================

/// How order submissions are judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSettings {
    /// Treat a non-2xx response as a failed submission.
    ///
    /// With `false`, any response that arrives counts as success.
    #[serde(default = "default_true")]
    pub check_status: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OrderSettings {
    fn default() -> Self {
        OrderSettings {
            check_status: default_true(),
        }
    }
}

// =============================================================================
// Main Storefront Configuration
// =============================================================================

/// Complete storefront client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub endpoint: EndpointSettings,

    #[serde(default)]
    pub orders: OrderSettings,
}

impl StorefrontConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default config pointing at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.endpoint.base_url = base_url.into();
        config
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns the defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::SaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let base = Url::parse(&self.endpoint.base_url)?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "Store URL must start with http:// or https://, got: {}",
                self.endpoint.base_url
            )));
        }

        if self.endpoint.meals_path.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "meals_path must not be empty".into(),
            ));
        }
        if self.endpoint.orders_path.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "orders_path must not be empty".into(),
            ));
        }

        if self.endpoint.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `MEALCART_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable values are ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            debug!(url = %url, "Overriding store URL from environment");
            self.endpoint.base_url = url;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            match secs.parse::<u64>() {
                Ok(secs) => {
                    debug!(timeout_secs = secs, "Overriding timeout from environment");
                    self.endpoint.timeout_secs = Some(secs);
                }
                Err(_) => warn!(value = %secs, "Ignoring unparseable {}", ENV_TIMEOUT_SECS),
            }
        }

        if let Some(flag) = lookup(ENV_CHECK_STATUS) {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.orders.check_status = true,
                "0" | "false" | "no" => self.orders.check_status = false,
                _ => warn!(value = %flag, "Ignoring unparseable {}", ENV_CHECK_STATUS),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "mealcart", "mealcart")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Resolves `path` against the store base URL.
    ///
    /// The base is treated as a directory, so `https://host/db` + `meals.json`
    /// gives `https://host/db/meals.json`.
    pub fn endpoint_url(&self, path: &str) -> ConfigResult<Url> {
        let mut base = Url::parse(&self.endpoint.base_url)?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }

        Ok(base.join(path.trim_start_matches('/'))?)
    }

    /// URL of the menu document.
    pub fn meals_url(&self) -> ConfigResult<Url> {
        self.endpoint_url(&self.endpoint.meals_path)
    }

    /// URL of the orders collection.
    pub fn orders_url(&self) -> ConfigResult<Url> {
        self.endpoint_url(&self.endpoint.orders_path)
    }

    /// Per-request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.endpoint.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the HTTP client shared by the catalog and the order submitter.
    pub fn http_client(&self) -> ConfigResult<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))
    }
}
