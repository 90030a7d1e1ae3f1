//! # Validation Module
//!
//! Input validation for the customize and checkout screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell / front end                                             │
//! │  ├── Parses commands and field names                                    │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Flavor index range                                                 │
//! │  ├── Topping picker counts                                              │
//! │  └── Delivery address completeness (gates Place Order)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Address fields are free text. A field is missing only when it is the
//! empty string; whitespace counts as content.

use crate::error::ValidationError;
use crate::types::{AddressField, DeliveryAddress, Flavor};
use crate::MAX_TOPPING_COUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the delivery address.
///
/// ## Rules
/// - name, street, city and zip must all be non-empty
/// - The first missing field (in form order) is reported
///
/// ## Example
/// ```rust
/// use cupcake_core::validation::validate_address;
/// use cupcake_core::DeliveryAddress;
///
/// let mut address = DeliveryAddress::default();
/// assert!(validate_address(&address).is_err());
///
/// address.name = "Ada".into();
/// address.street = "1 Main St".into();
/// address.city = "Paris".into();
/// address.zip = "75001".into();
/// assert!(validate_address(&address).is_ok());
/// ```
pub fn validate_address(address: &DeliveryAddress) -> ValidationResult<()> {
    match AddressField::ALL
        .into_iter()
        .find(|field| address.get(*field).is_empty())
    {
        Some(field) => Err(ValidationError::Required {
            field: field.name().to_string(),
        }),
        None => Ok(()),
    }
}

/// Validates a flavor index typed by the user.
pub fn validate_flavor_index(index: i64) -> ValidationResult<Flavor> {
    let max = Flavor::ALL.len() as i64 - 1;
    usize::try_from(index)
        .ok()
        .and_then(|i| Flavor::from_index(i).ok())
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "flavor".to_string(),
            min: 0,
            max,
        })
}

/// Validates a topping picker count.
///
/// ## Rules
/// - Must be between 0 and MAX_TOPPING_COUNT (3)
pub fn validate_topping_count(count: i64) -> ValidationResult<u8> {
    u8::try_from(count)
        .ok()
        .filter(|c| *c <= MAX_TOPPING_COUNT)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "topping count".to_string(),
            min: 0,
            max: MAX_TOPPING_COUNT as i64,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
