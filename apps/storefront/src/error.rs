//! # Application Error Type
//!
//! Unified error type for storefront commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  shell line ──► Command::parse ── unknown word ──► AppError::Command    │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │              Storefront::execute                                        │
//! │                      │                                                  │
//! │        ┌─────────────┼──────────────────────┐                           │
//! │        ▼             ▼                      ▼                           │
//! │   CoreError     CheckoutError          ConfigError                      │
//! │        │             │                      │                           │
//! │        └─────────────┴──────► AppError ◄────┘                           │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                    printed, loop continues                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cupcake_core::{CheckoutError, CoreError, ValidationError};
use thiserror::Error;

use crate::state::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Unknown command, missing argument, or a command issued on the wrong
    /// screen.
    #[error("{0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn command(message: impl Into<String>) -> Self {
        AppError::Command(message.into())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AppError::command("Unknown command: bake");
        assert_eq!(err.to_string(), "Unknown command: bake");

        let err: AppError = CheckoutError::AddressIncomplete {
            field: "city".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Checkout(_)));

        let err: AppError = ValidationError::Required {
            field: "zip".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Core(CoreError::Validation(_))));
    }
}
