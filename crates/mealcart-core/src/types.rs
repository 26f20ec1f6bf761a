//! # Domain Types
//!
//! Types shared by the cart, the menu loader, and the order payload.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   MealRecord    │   │    LineItem     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id             │──►│  user           │       │
//! │  │  name           │   │  name           │   │  orderedItems   │       │
//! │  │  description    │   │  amount         │   └────────┬────────┘       │
//! │  │  price          │   │  price          │            │                │
//! │  └─────────────────┘   └─────────────────┘   ┌────────▼────────┐       │
//! │                                              │   ContactInfo   │       │
//! │                                              │  name, street,  │       │
//! │                                              │  city, postal   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names follow the remote store's JSON (`orderedItems`, `postalCode`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Meal Catalog
// =============================================================================

/// One value of the catalog document (`meals.json`), keyed by meal id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Money,
}

/// The catalog document as the remote store returns it.
///
/// An empty node comes back as JSON `null`, hence the `Option`.
pub type CatalogDocument = Option<BTreeMap<String, MealEntry>>;

/// A meal on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealRecord {
    /// Opaque id assigned by the remote store.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price.
    #[ts(type = "number")]
    pub price: Money,
}

impl MealRecord {
    /// Builds a record from a catalog key and its value.
    pub fn from_entry(id: impl Into<String>, entry: MealEntry) -> Self {
        MealRecord {
            id: id.into(),
            name: entry.name,
            description: entry.description,
            price: entry.price,
        }
    }
}

/// Flattens the id-keyed catalog document into a list of records.
///
/// Records come out ordered by id, which is the order the remote store
/// lists its keys in.
pub fn flatten_catalog(document: CatalogDocument) -> Vec<MealRecord> {
    document
        .unwrap_or_default()
        .into_iter()
        .map(|(id, entry)| MealRecord::from_entry(id, entry))
        .collect()
}

// =============================================================================
// Line Item
// =============================================================================

/// One cart entry: a meal, its unit price, and the selected quantity.
///
/// ## Invariants
/// - `amount >= 1` while the item is in a cart
/// - `price` is frozen when the meal is first added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    /// Quantity in the cart.
    pub amount: u32,
    /// Unit price.
    #[ts(type = "number")]
    pub price: Money,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money, amount: u32) -> Self {
        LineItem {
            id: id.into(),
            name: name.into(),
            amount,
            price,
        }
    }

    /// Creates a line item for `amount` units of a menu meal.
    pub fn from_meal(meal: &MealRecord, amount: u32) -> Self {
        LineItem::new(meal.id.clone(), meal.name.clone(), meal.price, amount)
    }

    /// Returns a copy of this item with a quantity of one.
    ///
    /// This is what the cart's "+" button adds.
    pub fn single_unit(&self) -> Self {
        LineItem {
            amount: 1,
            ..self.clone()
        }
    }

    /// Calculates the line total (unit price × amount).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.amount
    }

    /// Line total, or `None` if it does not fit in `Money`.
    #[inline]
    pub fn checked_line_total(&self) -> Option<Money> {
        self.price.checked_mul_quantity(self.amount)
    }
}

// =============================================================================
// Contact Info
// =============================================================================

/// Validated delivery contact details, as sent in the order payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

// =============================================================================
// Order
// =============================================================================

/// The order document POSTed to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub user: ContactInfo,
    pub ordered_items: Vec<LineItem>,
}

impl Order {
    /// Creates an order from contact details and the cart's items.
    pub fn new(user: ContactInfo, ordered_items: Vec<LineItem>) -> Self {
        Order {
            user,
            ordered_items,
        }
    }

    /// Sum of all line totals.
    pub fn total(&self) -> Money {
        self.ordered_items.iter().map(LineItem::line_total).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
