//! # mealcart-core: Pure Business Logic for the Meal Storefront
//!
//! Cart math and form rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (external)                      │   │
//! │  │    Menu list ──► Cart modal ──► Checkout form                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    mealcart-client                              │   │
//! │  │    CartStore, MealCatalog, OrderSubmitter, Checkout             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mealcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │   Cart    │  │  contact  │  │   │
//! │  │   │   Order   │  │  (cents)  │  │CartAction │  │  amount   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire and domain types (LineItem, MealRecord, Order, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart state and its reducer
//! - [`error`] - Domain error types
//! - [`validation`] - Checkout and quantity form rules
//!
//! ## Example Usage
//!
//! ```rust
//! use mealcart_core::{Cart, CartAction, LineItem, Money};
//!
//! let cart = Cart::new()
//!     .apply(CartAction::Add(LineItem::new("m1", "Sushi", Money::from_cents(250), 1)))
//!     .unwrap()
//!     .apply(CartAction::Add(LineItem::new("m1", "Sushi", Money::from_cents(250), 2)))
//!     .unwrap();
//!
//! assert_eq!(cart.items()[0].amount, 3);
//! assert_eq!(cart.total_amount(), Money::from_cents(750));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart::{Cart, CartAction};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::{ContactForm, ContactValidity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity the add-to-cart form accepts.
pub const MIN_ORDER_AMOUNT: i64 = 1;

/// Largest quantity the add-to-cart form accepts in one submission.
///
/// Repeated adds of the same meal can push a line item past this; the limit
/// applies to the form input, not to the cart line.
pub const MAX_ORDER_AMOUNT: i64 = 5;

/// Largest unit price accepted for a meal, in cents ($1,000,000).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Required length of a postal code, in characters, after trimming.
pub const POSTAL_CODE_LENGTH: usize = 5;
