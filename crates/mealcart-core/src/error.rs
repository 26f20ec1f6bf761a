//! # Error Types
//!
//! Domain-specific error types for mealcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mealcart-core errors (this file)                                       │
//! │  ├── CoreError        - Rejected cart transitions                       │
//! │  └── ValidationError  - Form and wire value failures                    │
//! │                                                                         │
//! │  mealcart-client errors (separate crate)                                │
//! │  ├── LoadError        - Menu fetch failures                             │
//! │  ├── SubmitError      - Order POST failures                             │
//! │  └── ConfigError      - Configuration load/save failures                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A removal named an id that is not in the cart.
    ///
    /// ## When This Occurs
    /// - The UI issued a remove for a stale line (e.g. after a clear)
    /// - Two removes raced for the last unit of the same item
    ///
    /// The cart is left unchanged.
    #[error("Cart item not found: {0}")]
    ItemNotFound(String),

    /// An added line item is not acceptable (zero amount, price out of
    /// range). The cart is left unchanged.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A quantity or the running total no longer fits its integer type.
    #[error("Cart total overflow")]
    Overflow,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are recoverable and shown next to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value does not have the exact required length.
    #[error("{field} must be exactly {expected} characters")]
    InvalidLength { field: String, expected: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. "2.5" for a whole-number quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A price coming off the wire cannot be represented as money.
    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },
}

impl ValidationError {
    /// Returns the name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
            ValidationError::InvalidPrice { .. } => "price",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
