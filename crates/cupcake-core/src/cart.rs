//! # Cart
//!
//! Ordered line items and their mutations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Operation               Cart Change           │
//! │  ─────────────            ─────────               ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add(config) ─────────► lines.push(qty 1)     │
//! │                                                                         │
//! │  Tap + ──────────────────► increment(id) ───────► qty += 1              │
//! │                                                                         │
//! │  Tap − ──────────────────► decrement(id) ───────► qty -= 1, 0 ⇒ remove  │
//! │                                                                         │
//! │  Swipe to delete ────────► remove_at([i]) ──────► lines.remove(i)       │
//! │                                                                         │
//! │  Order confirmed ────────► clear() ─────────────► lines.clear()         │
//! │                                                                         │
//! │  NOTE: unknown ids and out-of-range positions are silent no-ops.        │
//! │        Every mutator returns whether the cart actually changed.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::pricing;
use crate::types::ProductConfig;
use crate::MAX_LINE_QUANTITY;

// =============================================================================
// Line Identity
// =============================================================================

/// Stable identity of a cart line, independent of its display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    pub fn new() -> Self {
        LineId(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a configuration it exclusively owns plus a quantity.
///
/// ## Invariants
/// - `quantity >= 1`; a line that would drop to 0 is removed instead
/// - `quantity <= MAX_LINE_QUANTITY`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    #[ts(as = "String")]
    pub id: LineId,

    pub config: ProductConfig,

    pub quantity: u32,

    /// When this line was added to the cart
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(config: ProductConfig) -> Self {
        CartLine {
            id: LineId::new(),
            config,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Price of one cupcake on this line.
    #[inline]
    pub fn unit_price(&self) -> Money {
        pricing::unit_price(&self.config)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        pricing::line_total(&self.config, self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a new line with quantity 1.
    ///
    /// An identical configuration already in the cart is NOT merged; each
    /// add is its own line.
    pub fn add(&mut self, config: ProductConfig) -> LineId {
        let line = CartLine::new(config);
        let id = line.id;
        self.lines.push(line);
        id
    }

    /// Quantity += 1. Ignored for unknown ids and at `MAX_LINE_QUANTITY`.
    pub fn increment(&mut self, id: LineId) -> bool {
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) if line.quantity < MAX_LINE_QUANTITY => {
                line.quantity += 1;
                true
            }
            _ => false,
        }
    }

    /// Quantity −= 1; the line is removed when it reaches 0.
    /// Ignored for unknown ids.
    pub fn decrement(&mut self, id: LineId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let line = &mut self.lines[pos];
        line.quantity = line.quantity.saturating_sub(1);
        if line.quantity == 0 {
            self.lines.remove(pos);
        }
        true
    }

    /// Removes lines by display position. Out-of-range and repeated
    /// positions are ignored. Returns how many lines were removed.
    pub fn remove_at(&mut self, positions: &[usize]) -> usize {
        let targets: BTreeSet<usize> = positions
            .iter()
            .copied()
            .filter(|p| *p < self.lines.len())
            .collect();

        // Highest first so earlier positions stay valid.
        for pos in targets.iter().rev() {
            self.lines.remove(*pos);
        }
        targets.len()
    }

    /// Removes one line by id.
    pub fn remove(&mut self, id: LineId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.lines.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Re-opens a line's configuration for editing.
    ///
    /// Returns `None` when the id is unknown.
    pub fn edit<R>(&mut self, id: LineId, f: impl FnOnce(&mut ProductConfig) -> R) -> Option<R> {
        self.lines
            .iter_mut()
            .find(|l| l.id == id)
            .map(|line| f(&mut line.config))
    }

    /// Removes all lines. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_lines = !self.lines.is_empty();
        self.lines.clear();
        had_lines
    }

    /// Empties the cart, handing back what it held.
    pub fn drain(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn line_at(&self, position: usize) -> Option<&CartLine> {
        self.lines.get(position)
    }

    pub fn position(&self, id: LineId) -> Option<usize> {
        self.lines.iter().position(|l| l.id == id)
    }

    /// Number of lines (not cupcakes).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of cupcakes across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Σ unit price × quantity, recomputed on every call.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
