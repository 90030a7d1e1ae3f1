//! # Cart State
//!
//! The single canonical cart, shared by every screen.
//!
//! ## Ownership
//! The application root creates one [`CartStore`] and hands clones of the
//! handle to each screen. A clone is another reference to the same cart,
//! never a copy of it.
//!
//! ## Publish on Mutate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Screen                Store call              Effect                   │
//! │  ──────                ──────────              ──────                   │
//! │                                                                         │
//! │  Customize ──────────► add(config) ──────────► lock, push               │
//! │  Cart row + ─────────► increment(id) ────────► lock, qty += 1           │
//! │  Cart row − ─────────► decrement(id) ────────► lock, qty -= 1           │
//! │  Swipe ──────────────► remove_at([i]) ───────► lock, remove             │
//! │  Checkout field ─────► edit(id, f) ──────────► lock, f(config)          │
//! │  Place order ────────► take_lines() ─────────► lock, drain              │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │            revision += 1, snapshot published on the watch channel       │
//! │            under the lock, BEFORE the call returns                      │
//! │                                                                         │
//! │  NOTE: no-ops (unknown id, out-of-range row) publish nothing.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cupcake_core::{Cart, CartLine, LineId, Money, OrderCart, ProductConfig};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;
use ts_rs::TS;

// =============================================================================
// Snapshot
// =============================================================================

/// One cart row as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    #[ts(as = "String")]
    pub id: LineId,
    pub flavor: String,
    pub config: ProductConfig,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&CartLine> for LineView {
    fn from(line: &CartLine) -> Self {
        LineView {
            id: line.id,
            flavor: line.config.flavor().name().to_string(),
            config: line.config.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price(),
            line_total: line.line_total(),
        }
    }
}

/// Immutable picture of the cart after a mutation.
///
/// `revision` starts at 0 and increases by exactly one per effective
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub revision: u64,
    pub lines: Vec<LineView>,
    pub line_count: usize,
    pub total_quantity: u32,
    pub total: Money,
    pub is_empty: bool,
}

impl CartSnapshot {
    fn capture(cart: &Cart, revision: u64) -> Self {
        CartSnapshot {
            revision,
            lines: cart.lines().iter().map(LineView::from).collect(),
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
            is_empty: cart.is_empty(),
        }
    }

    /// Line id shown at a 0-based display position.
    pub fn line_id_at(&self, position: usize) -> Option<LineId> {
        self.lines.get(position).map(|l| l.id)
    }
}

// =============================================================================
// Store
// =============================================================================

#[derive(Debug, Default)]
struct Guarded {
    cart: Cart,
    revision: u64,
}

#[derive(Debug)]
struct Inner {
    state: Mutex<Guarded>,
    publisher: watch::Sender<CartSnapshot>,
}

/// Shared handle to the canonical cart.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<_>>` so the handle is `Send + Sync`; in practice a single
/// event thread drives it. Snapshots are published under the lock, so the
/// latest published snapshot always matches the cart and revisions never go
/// backwards.
#[derive(Debug, Clone)]
pub struct CartStore {
    inner: Arc<Inner>,
}

impl CartStore {
    /// Creates a new empty cart store. Call once, at the application root.
    pub fn new() -> Self {
        let guarded = Guarded::default();
        let (publisher, _) = watch::channel(CartSnapshot::capture(&guarded.cart, 0));
        CartStore {
            inner: Arc::new(Inner {
                state: Mutex::new(guarded),
                publisher,
            }),
        }
    }

    /// Receives every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.inner.publisher.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.inner.publisher.borrow().clone()
    }

    /// Whether two handles point at the same cart.
    pub fn same_cart(&self, other: &CartStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use cupcake_storefront::state::CartStore;
    ///
    /// let store = CartStore::new();
    /// let total = store.with_cart(|cart| cart.total());
    /// assert!(total.is_zero());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock().cart)
    }

    /// Appends a new line with quantity 1.
    pub fn add(&self, config: ProductConfig) -> LineId {
        self.mutate("add", |cart| {
            let id = cart.add(config);
            (id, true)
        })
    }

    pub fn increment(&self, id: LineId) -> bool {
        self.mutate("increment", |cart| {
            let changed = cart.increment(id);
            (changed, changed)
        })
    }

    pub fn decrement(&self, id: LineId) -> bool {
        self.mutate("decrement", |cart| {
            let changed = cart.decrement(id);
            (changed, changed)
        })
    }

    /// Swipe-to-delete by 0-based display position.
    pub fn remove_at(&self, positions: &[usize]) -> usize {
        self.mutate("remove_at", |cart| {
            let removed = cart.remove_at(positions);
            (removed, removed > 0)
        })
    }

    pub fn remove(&self, id: LineId) -> bool {
        self.mutate("remove", |cart| {
            let changed = cart.remove(id);
            (changed, changed)
        })
    }

    /// Edits a line's configuration in place.
    pub fn edit<R>(&self, id: LineId, f: impl FnOnce(&mut ProductConfig) -> R) -> Option<R> {
        self.mutate("edit", |cart| {
            let result = cart.edit(id, f);
            let changed = result.is_some();
            (result, changed)
        })
    }

    pub fn clear(&self) -> bool {
        self.mutate("clear", |cart| {
            let changed = cart.clear();
            (changed, changed)
        })
    }

    fn lock(&self) -> MutexGuard<'_, Guarded> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `op` and, if it reported a change, publishes a snapshot while
    /// the lock is still held so snapshots go out in revision order.
    fn mutate<R>(&self, op: &'static str, f: impl FnOnce(&mut Cart) -> (R, bool)) -> R {
        let mut guarded = self.lock();
        let (result, changed) = f(&mut guarded.cart);
        if !changed {
            debug!(op, "cart unchanged");
            return result;
        }
        guarded.revision += 1;
        let snapshot = CartSnapshot::capture(&guarded.cart, guarded.revision);

        debug!(
            op,
            revision = snapshot.revision,
            lines = snapshot.line_count,
            total_cents = snapshot.total.cents(),
            "cart mutated"
        );
        self.inner.publisher.send_replace(snapshot);
        result
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderCart for CartStore {
    fn take_lines(&mut self) -> Vec<CartLine> {
        self.mutate("take_lines", |cart| {
            let lines = cart.drain();
            let changed = !lines.is_empty();
            (lines, changed)
        })
    }
}
