//! # cupcake-core: Pure Business Logic for the Cupcake Storefront
//!
//! This crate holds the cart, pricing and checkout rules as plain data and
//! pure functions. Nothing in here touches a terminal, a file or a clock
//! other than `chrono::Utc::now()` for line timestamps.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cupcake Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Screens (apps/storefront)                       │   │
//! │  │    Home ──► Customize ──► Cart ──► Checkout                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartStore (shared handle)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cupcake-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Flavor   │  │ unit_price│  │   Cart    │  │  prompt   │  │   │
//! │  │   │  Config   │  │  Money    │  │ CartLine  │  │ validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Flavors, toppings, delivery address, product configuration
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Unit price and line totals
//! - [`cart`] - Ordered line items and their mutations
//! - [`checkout`] - Address gating and the order confirmation flow
//! - [`validation`] - Field-level rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cupcake_core::{Cart, Flavor, ProductConfig};
//!
//! let mut cart = Cart::new();
//! let id = cart.add(ProductConfig::new(Flavor::Vanilla));
//! cart.increment(id);
//!
//! assert_eq!(cart.total().to_string(), "$6.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, LineId};
pub use checkout::{CheckoutCallbacks, CheckoutStatus, ConfirmationPrompt, OrderCart, OrderReceipt};
pub use error::{CheckoutError, CoreError, ValidationError};
pub use money::Money;
pub use pricing::{line_total, unit_price, PriceBreakdown};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest quantity a single cart line can reach through `increment`.
///
/// Further increments are ignored rather than rejected.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Highest count a topping picker on the customize screen can reach.
pub const MAX_TOPPING_COUNT: u8 = 3;
