//! # Error Types
//!
//! Domain-specific error types for cupcake-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cupcake-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                           │
//! │  ├── ValidationError  - Input validation failures                       │
//! │  └── CheckoutError    - Place-order gating                              │
//! │                                                                         │
//! │  storefront errors (in app)                                             │
//! │  └── AppError         - What the shell reports                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Shell                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations on unknown ids or positions are silent no-ops and never
//! produce an error.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Flavor index outside the fixed flavor list.
    #[error("Flavor index {index} is out of range (0..{count})")]
    FlavorOutOfRange { index: usize, count: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., unknown topping name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors from the checkout flow.
///
/// ## User Workflow
/// ```text
/// Place Order (address: name="Ada", street="", ...)
///      │
///      ▼
/// request_confirmation()
///      │
///      ▼
/// AddressIncomplete { field: "street" }
///      │
///      ▼
/// Button stays disabled, no prompt is shown
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Delivery address is incomplete: {field} is required")]
    AddressIncomplete { field: String },
}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Required { field } => CheckoutError::AddressIncomplete { field },
            other => CheckoutError::AddressIncomplete {
                field: other.to_string(),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
