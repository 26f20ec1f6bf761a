//! # Meal Catalog
//!
//! Fetches the menu from the remote store.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Loading                                    │
//! │                                                                         │
//! │  spawn_load()                                                           │
//! │     │                                                                   │
//! │     ├── watch<LoadState> starts at Loading ──► UI shows "Loading..."   │
//! │     │                                                                   │
//! │     └── task: GET <base>/meals.json                                     │
//! │              │                                                          │
//! │              ├── 2xx + { "m1": {...}, "m2": {...} }                     │
//! │              │      └── flatten by id ──► Ready(records)               │
//! │              ├── 2xx + null ────────────► Ready([])                    │
//! │              └── anything else ─────────► Error("...")                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call issues exactly one request. There is no caching and no
//! cancellation.

use mealcart_core::types::{flatten_catalog, CatalogDocument};
use mealcart_core::MealRecord;
use reqwest::Client;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::StorefrontConfig;
use crate::error::{ConfigResult, LoadError};

/// Where a menu load currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The request is in flight.
    Loading,
    /// The menu arrived.
    Ready(Vec<MealRecord>),
    /// The load failed; the message is meant for display.
    Error(String),
}

impl LoadState {
    /// True once the load has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

/// Reads the menu document.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    client: Client,
    meals_url: Url,
}

impl MealCatalog {
    /// Creates a catalog reading from the configured meals URL with `client`.
    pub fn new(client: Client, config: &StorefrontConfig) -> ConfigResult<Self> {
        Ok(MealCatalog {
            client,
            meals_url: config.meals_url()?,
        })
    }

    /// Creates a catalog with its own HTTP client built from `config`.
    pub fn from_config(config: &StorefrontConfig) -> ConfigResult<Self> {
        Self::new(config.http_client()?, config)
    }

    /// The URL the menu is read from.
    pub fn meals_url(&self) -> &Url {
        &self.meals_url
    }

    /// Fetches and flattens the menu.
    ///
    /// ## Errors
    /// - `LoadError::Transport` if the store cannot be reached
    /// - `LoadError::Status` for a non-2xx response
    /// - `LoadError::Decode` if the body is not a catalog document
    #[instrument(skip(self), fields(url = %self.meals_url))]
    pub async fn load_meals(&self) -> Result<Vec<MealRecord>, LoadError> {
        let response = self.client.get(self.meals_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Menu request rejected");
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let document: CatalogDocument = serde_json::from_slice(&body)?;
        let meals = flatten_catalog(document);

        debug!(count = meals.len(), "Menu loaded");
        Ok(meals)
    }

    /// Starts a load in the background and returns its status channel.
    ///
    /// The receiver starts at `LoadState::Loading` and sees exactly one
    /// terminal state. Must be called from within a tokio runtime.
    pub fn spawn_load(&self) -> watch::Receiver<LoadState> {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let catalog = self.clone();

        tokio::spawn(async move {
            let state = match catalog.load_meals().await {
                Ok(meals) => LoadState::Ready(meals),
                Err(e) => {
                    warn!(error = %e, "Menu load failed");
                    LoadState::Error(e.to_string())
                }
            };
            // Nobody listening any more is fine.
            let _ = tx.send(state);
        });

        rx
    }
}
