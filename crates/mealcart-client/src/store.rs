//! # Cart Store
//!
//! The shared handle every storefront component uses to read and change the
//! cart.
//!
//! ## Thread Safety
//! The cart lives behind `Arc<Mutex<Cart>>`. Each mutation computes the next
//! state with the pure reducer in `mealcart-core` and swaps it in while the
//! lock is held, so no reader ever sees a half-applied change.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action                CartStore                Cart Change          │
//! │  ─────────                ─────────                ───────────          │
//! │                                                                         │
//! │  "+ Add" (menu) ────────► add_item() ────────────► merge or append     │
//! │                                                                         │
//! │  "+" (cart modal) ──────► add_item(single_unit) ─► amount += 1         │
//! │                                                                         │
//! │  "−" (cart modal) ──────► remove_item() ─────────► amount -= 1 / drop  │
//! │                                                                         │
//! │  Order submitted ───────► clear_cart() ──────────► empty               │
//! │                                                                         │
//! │  Render ────────────────► snapshot() / with_cart() (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A poisoned lock is recovered rather than propagated: every stored state
//! was produced whole by the reducer, so it is still consistent.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mealcart_core::{Cart, CartAction, CoreResult, LineItem};
use tracing::{debug, warn};

/// Cloneable handle to one shared cart.
///
/// Clones share the same cart; `CartStore::new()` starts an independent one.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `action` and returns the new cart.
    ///
    /// On error the stored cart is left as it was.
    pub fn dispatch(&self, action: CartAction) -> CoreResult<Cart> {
        let mut cart = self.lock();
        let next = cart.apply(action)?;
        *cart = next.clone();
        Ok(next)
    }

    /// Adds `item`, merging with an existing line of the same id.
    ///
    /// A rejected add leaves the stored cart as it was.
    pub fn add_item(&self, item: LineItem) -> CoreResult<Cart> {
        let mut cart = self.lock();
        debug!(id = %item.id, amount = item.amount, "Adding item to cart");

        match cart.with_added(item) {
            Ok(next) => {
                *cart = next.clone();
                debug!(total = %next.total_amount(), "Cart updated");
                Ok(next)
            }
            Err(e) => {
                warn!(error = %e, "Add rejected");
                Err(e)
            }
        }
    }

    /// Removes one unit of the line with `id`.
    pub fn remove_item(&self, id: &str) -> CoreResult<Cart> {
        let mut cart = self.lock();

        match cart.with_removed(id) {
            Ok(next) => {
                debug!(id = %id, total = %next.total_amount(), "Removed one unit from cart");
                *cart = next.clone();
                Ok(next)
            }
            Err(e) => {
                debug!(id = %id, "Remove ignored: item not in cart");
                Err(e)
            }
        }
    }

    /// Empties the cart.
    pub fn clear_cart(&self) -> Cart {
        let mut cart = self.lock();
        debug!(items = cart.item_count(), "Clearing cart");
        *cart = Cart::new();
        Cart::new()
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }

    /// Runs `f` with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use mealcart_client::CartStore;
    ///
    /// let store = CartStore::new();
    /// let badge = store.with_cart(|cart| cart.total_quantity());
    /// assert_eq!(badge, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }
}
