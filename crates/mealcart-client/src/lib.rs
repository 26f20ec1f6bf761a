//! # mealcart-client: Storefront I/O Layer
//!
//! Connects the pure cart logic in `mealcart-core` to the remote JSON store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        mealcart-client                                  │
//! │                                                                         │
//! │   Presentation                                                          │
//! │   ────────────                                                          │
//! │   menu list ──────► MealCatalog::spawn_load() ──► watch<LoadState>      │
//! │        │                    │                                           │
//! │        │                    └── GET <base>/meals.json                   │
//! │        ▼                                                                │
//! │   "+ Add" ────────► CartStore::add_item()  (Arc<Mutex<Cart>>)           │
//! │   cart +/− ───────► CartStore::add_item() / remove_item()               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   checkout form ──► Checkout::confirm()                                 │
//! │                         ├── validate_contact()   (no I/O on failure)    │
//! │                         ├── OrderSubmitter ──► POST <base>/orders.json  │
//! │                         └── CartStore::clear_cart()  (after completion) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Components never reach for a global cart: each one is handed the
//! `CartStore` it should use.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mealcart_client::{CartStore, Checkout, MealCatalog, OrderSubmitter, StorefrontConfig};
//! use mealcart_core::{ContactForm, LineItem};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StorefrontConfig::load_or_default(None);
//! let catalog = MealCatalog::from_config(&config)?;
//! let meals = catalog.load_meals().await?;
//!
//! let store = CartStore::new();
//! store.add_item(LineItem::from_meal(&meals[0], 2))?;
//!
//! let checkout = Checkout::new(store.clone(), OrderSubmitter::from_config(&config)?);
//! let form = ContactForm::new("Ada", "1 Main St", "Springfield", "12345");
//! let outcome = checkout.confirm(form).await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod orders;
pub mod store;
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{LoadState, MealCatalog};
pub use checkout::{Checkout, CheckoutOutcome, SubmissionStatus};
pub use config::{EndpointSettings, OrderSettings, StorefrontConfig};
pub use error::{ConfigError, ConfigResult, LoadError, SubmitError};
pub use orders::OrderSubmitter;
pub use store::CartStore;
pub use telemetry::init_tracing;
