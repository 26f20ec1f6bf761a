//! # Validation Module
//!
//! Rules for the two forms the storefront has: the per-meal quantity form
//! and the checkout contact form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Meal quantity form                                                     │
//! │  └── parse_order_amount("3") ──► Ok(3) ──► CartStore::add_item         │
//! │                              └─► Err ───► "Please enter a valid        │
//! │                                            amount (1-5)."              │
//! │                                                                         │
//! │  Checkout form                                                          │
//! │  └── validate_contact(form) ──► ContactValidity                        │
//! │          ├── is_valid()  ──► OrderSubmitter                            │
//! │          └── !is_valid() ──► per-field error markers, NO submission    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures are values, never panics: the user fixes the field
//! and tries again.
//!
//! ## Usage
//! ```rust
//! use mealcart_core::validation::{is_postal_code, is_valid_amount, parse_order_amount};
//!
//! assert!(is_postal_code("12345"));
//! assert!(!is_valid_amount(6));
//! assert_eq!(parse_order_amount(" 2 ").unwrap(), 2);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::ContactInfo;
use crate::{MAX_ORDER_AMOUNT, MIN_ORDER_AMOUNT, POSTAL_CODE_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Predicates
// =============================================================================

/// True iff `value` has something other than whitespace.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True iff `value`, trimmed, is exactly five characters long.
///
/// Characters are not checked: `"12 45"` and `"abcde"` both pass.
pub fn is_postal_code(value: &str) -> bool {
    value.trim().chars().count() == POSTAL_CODE_LENGTH
}

/// True iff `amount` is within the quantity form's `[1, 5]` range.
pub fn is_valid_amount(amount: i64) -> bool {
    (MIN_ORDER_AMOUNT..=MAX_ORDER_AMOUNT).contains(&amount)
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Example
/// ```rust
/// use mealcart_core::validation::validate_required;
///
/// assert!(validate_required("street", "1 Main St").is_ok());
/// assert!(validate_required("street", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if !is_non_empty(value) {
        return Err(required(field));
    }

    Ok(())
}

/// Validates a postal code.
pub fn validate_postal_code(value: &str) -> ValidationResult<()> {
    if !is_postal_code(value) {
        return Err(postal_code_length());
    }

    Ok(())
}

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

fn postal_code_length() -> ValidationError {
    ValidationError::InvalidLength {
        field: "postal code".to_string(),
        expected: POSTAL_CODE_LENGTH,
    }
}

/// Parses the text of the quantity input.
///
/// ## Rules
/// - Must not be blank
/// - Must be a whole number
/// - Must be between 1 and 5
///
/// ## User Workflow
/// ```text
/// User types "3" and clicks "+ Add"
///      │
///      ▼
/// parse_order_amount("3") ← THIS FUNCTION
///      │
///      ├── ""    → Required
///      ├── "2.5" → InvalidFormat
///      ├── "9"   → OutOfRange (1..5)
///      └── "3"   → Ok(3) → add 3 units to the cart
/// ```
pub fn parse_order_amount(input: &str) -> ValidationResult<u32> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "amount".to_string(),
        });
    }

    let amount: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    if !is_valid_amount(amount) {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: MIN_ORDER_AMOUNT,
            max: MAX_ORDER_AMOUNT,
        });
    }

    // Checked against 1..=5 above.
    Ok(amount as u32)
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Raw checkout form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

impl ContactForm {
    /// Creates a form from its four fields.
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        ContactForm {
            name: name.into(),
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}

/// Per-field validity of a checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactValidity {
    pub name: bool,
    pub street: bool,
    pub city: bool,
    pub postal_code: bool,
}

impl Default for ContactValidity {
    /// An untouched form shows no error markers.
    fn default() -> Self {
        ContactValidity {
            name: true,
            street: true,
            city: true,
            postal_code: true,
        }
    }
}

impl ContactValidity {
    /// True iff every field is valid.
    pub fn is_valid(&self) -> bool {
        self.name && self.street && self.city && self.postal_code
    }

    /// Errors for the invalid fields, in the order the form lays them out.
    pub fn errors(&self) -> Vec<ValidationError> {
        [
            (self.name, required("name")),
            (self.street, required("street")),
            (self.postal_code, postal_code_length()),
            (self.city, required("city")),
        ]
        .into_iter()
        .filter(|(valid, _)| !valid)
        .map(|(_, error)| error)
        .collect()
    }
}

/// Checks every field of the checkout form.
pub fn validate_contact(form: &ContactForm) -> ContactValidity {
    ContactValidity {
        name: validate_required("name", &form.name).is_ok(),
        street: validate_required("street", &form.street).is_ok(),
        city: validate_required("city", &form.city).is_ok(),
        postal_code: validate_postal_code(&form.postal_code).is_ok(),
    }
}

impl ContactForm {
    /// Validates the form and, if valid, converts it into contact details.
    ///
    /// Values are passed through as typed; trimming is only used for the
    /// checks.
    pub fn into_contact(self) -> Result<ContactInfo, ContactValidity> {
        let validity = validate_contact(&self);
        if !validity.is_valid() {
            return Err(validity);
        }

        Ok(ContactInfo {
            name: self.name,
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_non_empty() {
        assert!(is_non_empty("Ada"));
        assert!(is_non_empty("  x "));
        assert!(!is_non_empty(""));
        assert!(!is_non_empty(" \t\n"));
    }

    #[test]
    fn test_is_postal_code() {
        assert!(!is_postal_code("1234"));
        assert!(is_postal_code("12345"));
        assert!(is_postal_code("12 45"));
        assert!(is_postal_code("  12345  "));
        assert!(is_postal_code("abcde"));
        assert!(!is_postal_code("123456"));
        assert!(!is_postal_code(""));
    }

    #[test]
    fn test_is_valid_amount() {
        assert!(!is_valid_amount(0));
        assert!(is_valid_amount(1));
        assert!(is_valid_amount(5));
        assert!(!is_valid_amount(6));
        assert!(!is_valid_amount(-1));
    }

    #[test]
    fn test_parse_order_amount() {
        assert_eq!(parse_order_amount("1").unwrap(), 1);
        assert_eq!(parse_order_amount(" 5 ").unwrap(), 5);

        assert!(matches!(
            parse_order_amount("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_order_amount("2.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_order_amount("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_order_amount("0"),
            Err(ValidationError::OutOfRange { min: 1, max: 5, .. })
        ));
        assert!(matches!(
            parse_order_amount("6"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "Ada").is_ok());
        assert_eq!(
            validate_required("name", " ").unwrap_err(),
            ValidationError::Required {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn test_validate_postal_code() {
        assert!(validate_postal_code("12345").is_ok());
        assert!(validate_postal_code("1234").is_err());
    }

    #[test]
    fn test_validate_contact_all_valid() {
        let form = ContactForm::new("Ada", "1 Main St", "Springfield", "12345");
        let validity = validate_contact(&form);
        assert!(validity.is_valid());
        assert!(validity.errors().is_empty());
    }

    #[test]
    fn test_validate_contact_reports_each_field() {
        let form = ContactForm::new(" ", "1 Main St", "", "123");
        let validity = validate_contact(&form);

        assert!(!validity.is_valid());
        assert!(!validity.name);
        assert!(validity.street);
        assert!(!validity.city);
        assert!(!validity.postal_code);

        let fields: Vec<String> = validity
            .errors()
            .iter()
            .map(|e| e.field().to_string())
            .collect();
        assert_eq!(fields, vec!["name", "postal code", "city"]);
    }

    #[test]
    fn test_errors_match_field_validators() {
        let form = ContactForm::new("", "", "", "1");
        let errors = validate_contact(&form).errors();

        assert_eq!(
            errors,
            vec![
                validate_required("name", &form.name).unwrap_err(),
                validate_required("street", &form.street).unwrap_err(),
                validate_postal_code(&form.postal_code).unwrap_err(),
                validate_required("city", &form.city).unwrap_err(),
            ]
        );
        assert_eq!(errors[2].to_string(), "postal code must be exactly 5 characters");
    }

    #[test]
    fn test_default_validity_shows_no_errors() {
        assert!(ContactValidity::default().is_valid());
    }

    #[test]
    fn test_into_contact() {
        let contact = ContactForm::new("Ada", "1 Main St", "Springfield", "12345")
            .into_contact()
            .unwrap();
        assert_eq!(contact.postal_code, "12345");

        let validity = ContactForm::new("Ada", "", "Springfield", "12345")
            .into_contact()
            .unwrap_err();
        assert!(!validity.street);
    }
}
