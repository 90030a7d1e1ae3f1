//! # Checkout Screen
//!
//! Delivery details form and the Place Order button.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Delivery details                                          [Cancel]     │
//! │                                                                         │
//! │  Name            ─┐                                                     │
//! │  Street Address   │ write-through to the first cart line                │
//! │  City       Zip  ─┘ (or a detached address if the cart is empty)        │
//! │                                                                         │
//! │  [ Place Order ]   enabled iff CheckoutStatus::Valid                    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ConfirmationPrompt ── yes ──► cart cleared, on_confirm, on_go_home     │
//! │                     ── no ───► nothing                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cupcake_core::{
    AddressField, CheckoutCallbacks, CheckoutError, CheckoutStatus, ConfirmationPrompt,
    DeliveryAddress, LineId, OrderReceipt,
};
use tracing::info;

use crate::state::CartStore;

#[derive(Debug, Clone)]
pub struct CheckoutForm {
    store: CartStore,
    line: Option<LineId>,
    detached: DeliveryAddress,
}

impl CheckoutForm {
    /// Opens the form on the first cart line, if there is one.
    pub fn open(store: CartStore) -> Self {
        let (line, detached) = store.with_cart(|cart| match cart.line_at(0) {
            Some(l) => (Some(l.id), l.config.address().clone()),
            None => (None, DeliveryAddress::default()),
        });
        CheckoutForm {
            store,
            line,
            detached,
        }
    }

    /// The cart line whose address the form edits.
    pub fn line(&self) -> Option<LineId> {
        self.line
    }

    /// Current field contents.
    pub fn address(&self) -> DeliveryAddress {
        self.line
            .and_then(|id| {
                self.store
                    .with_cart(|cart| cart.line(id).map(|l| l.config.address().clone()))
            })
            .unwrap_or_else(|| self.detached.clone())
    }

    /// Edits one field. `detached` mirrors every write so typed text survives
    /// the line leaving the cart while the form is open.
    pub fn set_field(&mut self, field: AddressField, value: impl Into<String>) {
        let value = value.into();
        if let Some(id) = self.line {
            let written = self
                .store
                .edit(id, |config| config.address_mut().set(field, value.clone()));
            if written.is_none() {
                self.line = None;
            }
        }
        self.detached.set(field, value);
    }

    pub fn status(&self) -> CheckoutStatus {
        CheckoutStatus::of(&self.address())
    }

    /// Place Order. Fails while any field is empty.
    pub fn request_confirmation(&self) -> Result<ConfirmationPrompt, CheckoutError> {
        ConfirmationPrompt::request(&self.address())
    }

    /// The user confirmed the prompt.
    pub fn place(&self, prompt: ConfirmationPrompt, callbacks: CheckoutCallbacks<'_>) -> OrderReceipt {
        let mut store = self.store.clone();
        let receipt = prompt.confirm(&mut store, callbacks);
        info!(
            lines = receipt.lines.len(),
            quantity = receipt.total_quantity,
            total_cents = receipt.total.cents(),
            "order placed"
        );
        receipt
    }
}
