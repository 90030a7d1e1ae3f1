//! # Customize Screen
//!
//! Builds one [`ProductConfig`] before it goes into the cart.
//!
//! ## Topping Pickers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   sprinkles        frosting         coulis                              │
//! │   [-] 0 [+]        [-] 2 [+]        [-] 0 [+]        counts 0..=3       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │   add_sprinkles=false  extra_frosting=true  add_coulis=false            │
//! │                                                                         │
//! │   $4.00                                   [ Add to Cart ]               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The count is local to the picker; only `count > 0` reaches the
//! configuration, so two frostings cost the same as one.

use cupcake_core::{
    validation, Flavor, LineId, Money, PriceBreakdown, ProductConfig, Topping, ValidationError,
    MAX_TOPPING_COUNT,
};
use tracing::debug;

use crate::state::CartStore;

/// Local state of the customize screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizeSession {
    config: ProductConfig,
    /// Picker counts, indexed like [`Topping::ALL`].
    counts: [u8; 3],
    /// Set when the session re-opened an existing cart line.
    editing: Option<LineId>,
}

impl Default for CustomizeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomizeSession {
    /// Fresh session: first flavor, no special requests, all pickers at 0.
    pub fn new() -> Self {
        CustomizeSession {
            config: ProductConfig::new(Flavor::Vanilla),
            counts: [0; 3],
            editing: None,
        }
    }

    /// Re-opens a cart line. Pickers of enabled toppings start at 1.
    ///
    /// Returns `None` when the line is no longer in the cart.
    pub fn edit(store: &CartStore, id: LineId) -> Option<Self> {
        let config = store.with_cart(|cart| cart.line(id).map(|l| l.config.clone()))?;
        let mut counts = [0; 3];
        for (count, topping) in counts.iter_mut().zip(Topping::ALL) {
            *count = u8::from(config.toppings().has(topping));
        }
        Some(CustomizeSession {
            config,
            counts,
            editing: Some(id),
        })
    }

    pub fn config(&self) -> &ProductConfig {
        &self.config
    }

    pub fn editing(&self) -> Option<LineId> {
        self.editing
    }

    pub fn set_flavor(&mut self, flavor: Flavor) {
        self.config.set_flavor(flavor);
    }

    /// Picks a flavor by list position.
    pub fn set_flavor_index(&mut self, index: i64) -> Result<(), ValidationError> {
        let flavor = validation::validate_flavor_index(index)?;
        self.set_flavor(flavor);
        Ok(())
    }

    /// Toggles special requests. Turning them off resets every picker.
    pub fn set_special_requests(&mut self, enabled: bool) {
        self.config.set_special_request_enabled(enabled);
        if !enabled {
            self.counts = [0; 3];
        }
    }

    pub fn topping_count(&self, topping: Topping) -> u8 {
        self.counts[slot(topping)]
    }

    /// Sets a picker, clamped to `0..=MAX_TOPPING_COUNT`. A non-zero count
    /// switches special requests on.
    pub fn set_topping_count(&mut self, topping: Topping, count: u8) {
        let count = count.min(MAX_TOPPING_COUNT);
        if count > 0 && !self.config.special_request_enabled() {
            self.config.set_special_request_enabled(true);
        }
        self.counts[slot(topping)] = count;
        self.config.set_topping(topping, count > 0);
    }

    /// The `+` / `-` buttons under a picker.
    pub fn adjust_topping(&mut self, topping: Topping, delta: i8) {
        let current = self.topping_count(topping);
        let next = current.saturating_add_signed(delta);
        self.set_topping_count(topping, next);
    }

    /// Live price shown next to the Add to Cart button.
    pub fn price_preview(&self) -> Money {
        cupcake_core::unit_price(&self.config)
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::of(&self.config)
    }

    /// Appends the configuration to the cart as a new line.
    pub fn add_to_cart(&self, store: &CartStore) -> LineId {
        let id = store.add(self.config.clone());
        debug!(%id, flavor = %self.config.flavor(), "added to cart");
        id
    }

    /// Writes flavor and toppings back to the line being edited. The line's
    /// quantity and address are left alone.
    ///
    /// Returns `None` if this session is not editing or the line is gone.
    pub fn save(&self, store: &CartStore) -> Option<LineId> {
        let id = self.editing?;
        let source = &self.config;
        store.edit(id, |config| {
            config.set_flavor(source.flavor());
            config.set_special_request_enabled(source.special_request_enabled());
            for topping in Topping::ALL {
                config.set_topping(topping, source.toppings().has(topping));
            }
        })?;
        debug!(%id, "saved cart line");
        Some(id)
    }

    /// Saves when editing a line that still exists, otherwise adds a new one.
    pub fn commit(&self, store: &CartStore) -> LineId {
        match self.save(store) {
            Some(id) => id,
            None => self.add_to_cart(store),
        }
    }
}

fn slot(topping: Topping) -> usize {
    match topping {
        Topping::Frosting => 0,
        Topping::Sprinkles => 1,
        Topping::Coulis => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_costs_base_price() {
        let session = CustomizeSession::new();
        assert_eq!(session.price_preview(), Money::from_cents(300));
        assert!(!session.config().special_request_enabled());
    }

    #[test]
    fn test_picker_counts_are_clamped() {
        let mut session = CustomizeSession::new();

        for _ in 0..5 {
            session.adjust_topping(Topping::Sprinkles, 1);
        }
        assert_eq!(session.topping_count(Topping::Sprinkles), 3);

        for _ in 0..5 {
            session.adjust_topping(Topping::Sprinkles, -1);
        }
        assert_eq!(session.topping_count(Topping::Sprinkles), 0);
        assert!(!session.config().toppings().add_sprinkles);
    }

    #[test]
    fn test_positive_count_enables_topping_and_special_requests() {
        let mut session = CustomizeSession::new();
        session.set_topping_count(Topping::Frosting, 2);

        assert!(session.config().special_request_enabled());
        assert!(session.config().toppings().extra_frosting);
        // Count is not a multiplier.
        assert_eq!(session.price_preview(), Money::from_cents(400));
    }

    #[test]
    fn test_disabling_special_requests_resets_pickers() {
        let mut session = CustomizeSession::new();
        session.set_topping_count(Topping::Coulis, 3);
        session.set_special_requests(false);

        assert_eq!(session.topping_count(Topping::Coulis), 0);
        assert!(!session.config().toppings().any());
        assert_eq!(session.price_preview(), Money::from_cents(300));
    }

    #[test]
    fn test_flavor_index_is_validated() {
        let mut session = CustomizeSession::new();
        session.set_flavor_index(3).unwrap();
        assert_eq!(session.config().flavor(), Flavor::Rainbow);
        assert_eq!(session.price_preview(), Money::from_cents(450));

        assert!(session.set_flavor_index(4).is_err());
        assert!(session.set_flavor_index(-1).is_err());
        assert_eq!(session.config().flavor(), Flavor::Rainbow);
    }

    #[test]
    fn test_add_to_cart_appends_new_lines() {
        let store = CartStore::new();
        let session = CustomizeSession::new();

        let first = session.add_to_cart(&store);
        let second = session.add_to_cart(&store);

        assert_ne!(first, second);
        assert_eq!(store.snapshot().line_count, 2);
    }

    #[test]
    fn test_edit_and_save_write_back_in_place() {
        let store = CartStore::new();
        let id = store.add(ProductConfig::new(Flavor::Vanilla).with_toppings(&[Topping::Coulis]));
        store.increment(id);

        let mut session = CustomizeSession::edit(&store, id).unwrap();
        assert_eq!(session.topping_count(Topping::Coulis), 1);
        assert_eq!(session.editing(), Some(id));

        session.set_flavor(Flavor::Chocolate);
        session.adjust_topping(Topping::Coulis, -1);
        assert_eq!(session.commit(&store), id);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.line_count, 1);
        let line = &snapshot.lines[0];
        assert_eq!(line.config.flavor(), Flavor::Chocolate);
        assert!(!line.config.toppings().add_coulis);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_commit_adds_when_edited_line_was_removed() {
        let store = CartStore::new();
        let id = store.add(ProductConfig::new(Flavor::Vanilla));
        let session = CustomizeSession::edit(&store, id).unwrap();

        store.remove(id);
        assert_eq!(session.save(&store), None);

        let new_id = session.commit(&store);
        assert_ne!(new_id, id);
        assert_eq!(store.snapshot().line_count, 1);
    }

    #[test]
    fn test_edit_unknown_line() {
        let store = CartStore::new();
        assert!(CustomizeSession::edit(&store, LineId::new()).is_none());
    }
}
