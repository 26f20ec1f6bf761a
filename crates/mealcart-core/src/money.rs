//! # Money Module
//!
//! Provides the `Money` type for handling prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A running cart total kept as a float drifts:                           │
//! │    add $2.50, add $5.00, remove $2.50 ... → 4.999999999999999           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    The remote store speaks JSON numbers (22.99). We convert to cents    │
//! │    ONCE at the serde boundary and every later add/subtract is exact.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! `Money` serializes as a JSON number in major units (`7.5` for 750 cents)
//! so the order payload matches what the remote store already holds.
//!
//! ## Usage
//! ```rust
//! use mealcart_core::money::Money;
//!
//! let price = Money::from_cents(250); // $2.50
//! let line_total = price * 3u32;      // $7.50
//! assert_eq!(line_total.to_string(), "$7.50");
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;
use crate::MAX_PRICE_CENTS;

/// Cents per major currency unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// MealRecord.price ──► LineItem.price ──► LineItem.line_total ──► Cart.total_amount
///                                                                    │
///                                            Displayed as "$7.50" ◄──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a price expressed in major units (as the remote store sends
    /// it) into cents, rounding to the nearest cent.
    ///
    /// ## Errors
    /// Rejects negative, NaN, and infinite values, and anything above
    /// `MAX_PRICE_CENTS`.
    ///
    /// ## Example
    /// ```rust
    /// use mealcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_units(22.99).unwrap().cents(), 2299);
    /// assert!(Money::from_major_units(-1.0).is_err());
    /// ```
    pub fn from_major_units(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidPrice {
                reason: format!("{value} is not a finite number"),
            });
        }

        if value < 0.0 {
            return Err(ValidationError::InvalidPrice {
                reason: format!("{value} is negative"),
            });
        }

        let cents = (value * CENTS_PER_UNIT as f64).round();
        if cents > MAX_PRICE_CENTS as f64 {
            return Err(ValidationError::InvalidPrice {
                reason: format!("{value} exceeds the maximum price"),
            });
        }

        Ok(Money(cents as i64))
    }

    /// Returns the value in major units. Only for the wire and for display.
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use mealcart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1699); // $16.99
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 3398);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    // =========================================================================
    // Checked Arithmetic
    // =========================================================================

    /// Adds, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtracts, returning `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    #[inline]
    pub const fn checked_mul_quantity(self, qty: u32) -> Option<Money> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$7.50`, the format of the cart's "Total Amount" label.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// The operators saturate instead of wrapping. Code that has to keep an
// exact total uses the checked_* methods.

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a line item quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_major_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_major_units(value).map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
