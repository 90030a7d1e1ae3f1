//! # Checkout
//!
//! Address gating and the order confirmation flow.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  all four fields non-empty   ┌──────────┐                │
//! │   │ Editing  │ ───────────────────────────► │  Valid   │                │
//! │   │          │ ◄─────────────────────────── │          │                │
//! │   └──────────┘  any field emptied           └────┬─────┘                │
//! │                                                  │ request_confirmation │
//! │                                                  ▼                      │
//! │                                        ┌───────────────────┐            │
//! │                                        │ ConfirmationPrompt│            │
//! │                                        └───┬───────────┬───┘            │
//! │                                   confirm  │           │ cancel         │
//! │                                            ▼           ▼                │
//! │                          clear cart, on_confirm,     nothing            │
//! │                          on_go_home                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The status is a pure function of the field contents and is re-derived on
//! every read; there are no transition events. A [`ConfirmationPrompt`] can
//! only be built from a complete address, and confirming or cancelling
//! consumes it, so each callback fires at most once per prompt.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartLine};
use crate::error::CheckoutError;
use crate::money::Money;
use crate::types::DeliveryAddress;
use crate::validation::validate_address;

// =============================================================================
// Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CheckoutStatus {
    /// At least one address field is empty. Place Order is disabled.
    Editing,
    /// All four fields are filled. Place Order is enabled.
    Valid,
}

impl CheckoutStatus {
    pub fn of(address: &DeliveryAddress) -> Self {
        if address.is_valid() {
            CheckoutStatus::Valid
        } else {
            CheckoutStatus::Editing
        }
    }

    #[inline]
    pub fn can_place_order(self) -> bool {
        self == CheckoutStatus::Valid
    }
}

// =============================================================================
// Cart Seam
// =============================================================================

/// Anything the confirmation flow can empty when an order is placed.
///
/// Implemented by [`Cart`] directly and by the storefront's shared store,
/// which also publishes the emptied state to its subscribers.
pub trait OrderCart {
    /// Removes every line and returns them in display order.
    fn take_lines(&mut self) -> Vec<CartLine>;
}

impl OrderCart for Cart {
    fn take_lines(&mut self) -> Vec<CartLine> {
        self.drain()
    }
}

// =============================================================================
// Callbacks
// =============================================================================

/// Optional hooks the checkout caller hands in.
///
/// `on_confirm` fires after the cart has been cleared; `on_go_home` fires
/// after `on_confirm`. Neither fires on cancel.
#[derive(Default)]
pub struct CheckoutCallbacks<'a> {
    on_confirm: Option<Box<dyn FnOnce() + 'a>>,
    on_go_home: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a> CheckoutCallbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_confirm(mut self, f: impl FnOnce() + 'a) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    pub fn on_go_home(mut self, f: impl FnOnce() + 'a) -> Self {
        self.on_go_home = Some(Box::new(f));
        self
    }

    fn fire(self) {
        if let Some(f) = self.on_confirm {
            f();
        }
        if let Some(f) = self.on_go_home {
            f();
        }
    }
}

impl fmt::Debug for CheckoutCallbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutCallbacks")
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_go_home", &self.on_go_home.is_some())
            .finish()
    }
}

// =============================================================================
// Confirmation Prompt
// =============================================================================

/// "Place this order?" dialog, summarizing where it will be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    address: DeliveryAddress,
}

impl ConfirmationPrompt {
    /// Builds the prompt, or reports the first missing address field.
    ///
    /// ## Example
    /// ```rust
    /// use cupcake_core::{ConfirmationPrompt, DeliveryAddress};
    ///
    /// let incomplete = DeliveryAddress { name: "Ada".into(), ..Default::default() };
    /// assert!(ConfirmationPrompt::request(&incomplete).is_err());
    /// ```
    pub fn request(address: &DeliveryAddress) -> Result<Self, CheckoutError> {
        validate_address(address)?;
        Ok(ConfirmationPrompt {
            address: address.clone(),
        })
    }

    pub fn address(&self) -> &DeliveryAddress {
        &self.address
    }

    /// Name, street, city and zip as shown in the dialog.
    pub fn summary(&self) -> String {
        self.address.summary()
    }

    /// The user affirmed: empty the cart, then notify the caller.
    pub fn confirm<C>(self, cart: &mut C, callbacks: CheckoutCallbacks<'_>) -> OrderReceipt
    where
        C: OrderCart + ?Sized,
    {
        let lines = cart.take_lines();
        let receipt = OrderReceipt::new(self.address, lines);
        callbacks.fire();
        receipt
    }

    /// The user declined. Nothing changes.
    pub fn cancel(self) {}
}

// =============================================================================
// Receipt
// =============================================================================

/// What was ordered. Nothing is submitted anywhere; this is the local record
/// shown in the success acknowledgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderReceipt {
    pub address: DeliveryAddress,
    pub lines: Vec<CartLine>,
    pub total_quantity: u32,
    pub total: Money,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderReceipt {
    fn new(address: DeliveryAddress, lines: Vec<CartLine>) -> Self {
        OrderReceipt {
            address,
            total_quantity: lines.iter().map(|l| l.quantity).sum(),
            total: lines.iter().map(CartLine::line_total).sum(),
            lines,
            placed_at: Utc::now(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
