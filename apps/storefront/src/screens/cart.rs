//! # Cart Screen
//!
//! Lists cart lines with `-` / `+` buttons, swipe-to-delete and a checkout
//! button. Rows are 0-based here; the shell converts from the 1-based numbers
//! it prints.

use cupcake_core::LineId;

use super::checkout::CheckoutForm;
use crate::state::{CartSnapshot, CartStore};

#[derive(Debug, Clone)]
pub struct CartScreen {
    store: CartStore,
}

impl CartScreen {
    pub fn new(store: CartStore) -> Self {
        CartScreen { store }
    }

    /// What the list currently renders.
    pub fn snapshot(&self) -> CartSnapshot {
        self.store.snapshot()
    }

    pub fn line_at(&self, row: usize) -> Option<LineId> {
        self.store.with_cart(|cart| cart.line_at(row).map(|l| l.id))
    }

    pub fn increment_row(&self, row: usize) -> bool {
        self.line_at(row)
            .map(|id| self.store.increment(id))
            .unwrap_or(false)
    }

    pub fn decrement_row(&self, row: usize) -> bool {
        self.line_at(row)
            .map(|id| self.store.decrement(id))
            .unwrap_or(false)
    }

    pub fn remove_rows(&self, rows: &[usize]) -> usize {
        self.store.remove_at(rows)
    }

    /// "Proceed to Checkout": the form edits the first line's address.
    pub fn proceed_to_checkout(&self) -> CheckoutForm {
        CheckoutForm::open(self.store.clone())
    }
}
