//! # Client Error Types
//!
//! Error types for the storefront's I/O paths.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Client Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  ConfigError    │  │   LoadError     │  │     SubmitError         │ │
//! │  │                 │  │   (menu GET)    │  │     (order POST)        │ │
//! │  │  InvalidConfig  │  │  Transport      │  │  Transport              │ │
//! │  │  InvalidUrl     │  │  Status         │  │  Status                 │ │
//! │  │  LoadFailed     │  │  Decode         │  │  Serialization          │ │
//! │  │  SaveFailed     │  │                 │  │                         │ │
//! │  │  HttpClient     │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate retries. `is_retryable()` lets the caller decide
//! whether offering the user a "try again" makes sense.

use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration load, save, and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has an unusable value.
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    /// The store base URL does not parse or has the wrong scheme.
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    SaveFailed(String),

    /// The HTTP client could not be built from the settings.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SaveFailed(err.to_string())
    }
}

impl From<url::ParseError> for ConfigError {
    fn from(err: url::ParseError) -> Self {
        ConfigError::InvalidUrl(err.to_string())
    }
}

// =============================================================================
// Load Error
// =============================================================================

/// Menu fetch failures.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never completed (DNS, refused, reset, timed out).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The store answered with a non-success status.
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// The body is not a valid catalog document.
    #[error("Invalid menu data: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LoadError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            LoadError::Status {
                status: status.as_u16(),
            }
        } else {
            LoadError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err.to_string())
    }
}

impl LoadError {
    /// Returns true if trying the same request again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::Transport(_) => true,
            LoadError::Status { status } => *status >= 500,
            LoadError::Decode(_) => false,
        }
    }
}

// =============================================================================
// Submit Error
// =============================================================================

/// Order submission failures.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never completed (DNS, refused, reset, timed out).
    #[error("Order could not be sent: {0}")]
    Transport(String),

    /// The store rejected the order.
    #[error("Order store responded with status {status}")]
    Status { status: u16 },

    /// The order could not be encoded as JSON.
    #[error("Order serialization failed: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            SubmitError::Status {
                status: status.as_u16(),
            }
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Serialization(err.to_string())
    }
}

impl SubmitError {
    /// Returns true if sending the same order again could succeed.
    ///
    /// A transport failure after the body was sent may still have stored
    /// the order, so a retry can create a duplicate.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmitError::Transport(_) => true,
            SubmitError::Status { status } => *status >= 500,
            SubmitError::Serialization(_) => false,
        }
    }
}
