//! # Cart
//!
//! The cart state and its transition function.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Transitions                                     │
//! │                                                                         │
//! │  UI Action              CartAction               State Change           │
//! │  ─────────              ──────────               ────────────           │
//! │                                                                         │
//! │  "+ Add" on a meal ───► Add(item) ─────────────► merge or append        │
//! │                                                  total += price × amt   │
//! │                                                                         │
//! │  "+" in cart ─────────► Add(item × 1) ─────────► amount += 1            │
//! │                                                                         │
//! │  "−" in cart ─────────► Remove { id } ─────────► amount -= 1, or drop   │
//! │                                                  total -= price         │
//! │                                                                         │
//! │  Order submitted ─────► Clear ─────────────────► empty, total = 0       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Cart::apply` is pure: it never mutates `self` and either returns the
//! next state or an error, so a failed transition leaves the caller's state
//! exactly as it was.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::LineItem;
use crate::MAX_PRICE_CENTS;

// =============================================================================
// Cart Action
// =============================================================================

/// A cart operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add `item.amount` units of a meal.
    Add(LineItem),
    /// Remove one unit of the meal with this id.
    Remove { id: String },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    /// Shorthand for `CartAction::Remove`.
    pub fn remove(id: impl Into<String>) -> Self {
        CartAction::Remove { id: id.into() }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same meal increases its amount)
/// - Every item has `amount >= 1`
/// - `total_amount` equals the sum of `price × amount` over all items
/// - Items keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
    #[ts(type = "number")]
    total_amount: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the state that follows `action`.
    ///
    /// ## Errors
    /// - `CoreError::ItemNotFound` when removing an id that is not in the cart
    /// - `CoreError::Validation` / `CoreError::Overflow` when an add is rejected
    pub fn apply(&self, action: CartAction) -> CoreResult<Cart> {
        match action {
            CartAction::Add(item) => self.with_added(item),
            CartAction::Remove { id } => self.with_removed(&id),
            CartAction::Clear => Ok(Cart::new()),
        }
    }

    /// Adds an item, merging with an existing line of the same id.
    ///
    /// A merged line keeps the unit price it was first added with, and the
    /// total grows by that price, so the total stays equal to the sum of the
    /// lines even if the caller passes a different price.
    ///
    /// ## Errors
    /// - `CoreError::Validation` for a zero amount or a price outside
    ///   `0..=MAX_PRICE_CENTS`
    /// - `CoreError::Overflow` if the amount or the total would overflow
    pub fn with_added(&self, item: LineItem) -> CoreResult<Cart> {
        check_line(&item)?;

        let mut next = self.clone();
        match next.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                let added = existing
                    .price
                    .checked_mul_quantity(item.amount)
                    .ok_or(CoreError::Overflow)?;
                existing.amount = existing
                    .amount
                    .checked_add(item.amount)
                    .ok_or(CoreError::Overflow)?;
                next.total_amount = next
                    .total_amount
                    .checked_add(added)
                    .ok_or(CoreError::Overflow)?;
            }
            None => {
                let added = item.checked_line_total().ok_or(CoreError::Overflow)?;
                next.total_amount = next
                    .total_amount
                    .checked_add(added)
                    .ok_or(CoreError::Overflow)?;
                next.items.push(item);
            }
        }
        Ok(next)
    }

    /// Removes one unit of the item with `id`.
    ///
    /// ## Errors
    /// `CoreError::ItemNotFound` if no line has this id.
    pub fn with_removed(&self, id: &str) -> CoreResult<Cart> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;

        let mut next = self.clone();
        let unit_price = next.items[index].price;
        if next.items[index].amount == 1 {
            next.items.remove(index);
        } else {
            next.items[index].amount -= 1;
        }
        next.total_amount -= unit_price;

        Ok(next)
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Running total of the cart.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Looks up a line by meal id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct meals.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of units (the header badge count).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the cart and returns its items.
    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}

/// Rejects line items no cart line may hold.
fn check_line(item: &LineItem) -> Result<(), ValidationError> {
    if item.amount == 0 {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }

    let cents = item.price.cents();
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::InvalidPrice {
            reason: format!("{} is outside the accepted range", item.price),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
