//! # Pricing
//!
//! Turns a [`ProductConfig`] into a price. Pure, no side effects.
//!
//! ## Price List
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Unit price                                                             │
//! │                                                                         │
//! │    base                                  $3.00                          │
//! │  + flavor index × $0.50                  Vanilla +0, Rainbow +1.50      │
//! │  + extra frosting                        $1.00                          │
//! │  + sprinkles                             $0.50                          │
//! │  + coulis                                $0.50                          │
//! │                                                                         │
//! │  Line total = unit price × line quantity                                │
//! │  Cart total = Σ line totals                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity is a property of the cart line, never of the configuration, so
//! every surcharge (flavor included) is charged once per cupcake.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::ProductConfig;

pub const BASE_PRICE: Money = Money::from_cents(300);
pub const FLAVOR_STEP: Money = Money::from_cents(50);
pub const FROSTING_PRICE: Money = Money::from_cents(100);
pub const SPRINKLES_PRICE: Money = Money::from_cents(50);
pub const COULIS_PRICE: Money = Money::from_cents(50);

/// Price of a single cupcake with this configuration.
///
/// ## Example
/// ```rust
/// use cupcake_core::{unit_price, Flavor, ProductConfig, Topping};
///
/// let config = ProductConfig::new(Flavor::Vanilla)
///     .with_toppings(&[Topping::Frosting, Topping::Sprinkles]);
/// assert_eq!(unit_price(&config).cents(), 450);
/// ```
pub fn unit_price(config: &ProductConfig) -> Money {
    PriceBreakdown::of(config).unit_price
}

/// Unit price × quantity.
#[inline]
pub fn line_total(config: &ProductConfig, quantity: u32) -> Money {
    unit_price(config) * quantity
}

/// Itemized unit price, for the live preview on the customize screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceBreakdown {
    pub base: Money,
    pub flavor_surcharge: Money,
    pub frosting: Money,
    pub sprinkles: Money,
    pub coulis: Money,
    pub unit_price: Money,
}

impl PriceBreakdown {
    pub fn of(config: &ProductConfig) -> Self {
        let toppings = config.toppings();
        let pick = |on: bool, price: Money| if on { price } else { Money::zero() };

        let flavor_surcharge = FLAVOR_STEP.multiply_quantity(config.flavor().index() as u32);
        let frosting = pick(toppings.extra_frosting, FROSTING_PRICE);
        let sprinkles = pick(toppings.add_sprinkles, SPRINKLES_PRICE);
        let coulis = pick(toppings.add_coulis, COULIS_PRICE);

        PriceBreakdown {
            base: BASE_PRICE,
            flavor_surcharge,
            frosting,
            sprinkles,
            coulis,
            unit_price: BASE_PRICE + flavor_surcharge + frosting + sprinkles + coulis,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Flavor, Topping};

    fn all_configs() -> Vec<ProductConfig> {
        let mut configs = Vec::new();
        for flavor in Flavor::ALL {
            for mask in 0u8..8 {
                let toppings: Vec<Topping> = Topping::ALL
                    .into_iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, t)| t)
                    .collect();
                configs.push(ProductConfig::new(flavor).with_toppings(&toppings));
            }
        }
        configs
    }

    #[test]
    fn test_plain_vanilla_is_base_price() {
        let config = ProductConfig::new(Flavor::Vanilla);
        assert_eq!(unit_price(&config), Money::from_major_minor(3, 0));
    }

    #[test]
    fn test_base_price_is_a_floor() {
        for config in all_configs() {
            assert!(unit_price(&config) >= BASE_PRICE, "{:?}", config);
        }
    }

    #[test]
    fn test_flavor_surcharge_steps_by_half_dollar() {
        let prices: Vec<i64> = Flavor::ALL
            .iter()
            .map(|f| unit_price(&ProductConfig::new(*f)).cents())
            .collect();
        assert_eq!(prices, [300, 350, 400, 450]);
    }

    #[test]
    fn test_frosting_and_sprinkles_line_of_two() {
        let config = ProductConfig::new(Flavor::Vanilla)
            .with_toppings(&[Topping::Frosting, Topping::Sprinkles]);

        assert_eq!(unit_price(&config), Money::from_cents(450));
        assert_eq!(line_total(&config, 2), Money::from_cents(900));
    }

    #[test]
    fn test_every_topping_on_rainbow() {
        let config = ProductConfig::new(Flavor::Rainbow).with_toppings(&Topping::ALL);
        let breakdown = PriceBreakdown::of(&config);

        assert_eq!(breakdown.flavor_surcharge.cents(), 150);
        assert_eq!(breakdown.coulis.cents(), 50);
        assert_eq!(breakdown.unit_price.cents(), 300 + 150 + 100 + 50 + 50);
    }

    /// Two pricing rules have existed for this product: a per-unit price
    /// multiplied by the line quantity (used here), and an older per-order
    /// cost where the flavor surcharge was added once regardless of quantity.
    /// They disagree whenever flavor > 0 and quantity > 1. This pins the
    /// per-unit behavior so a switch is a deliberate, visible change.
    #[test]
    fn test_flavor_surcharge_is_charged_per_cupcake() {
        let config = ProductConfig::new(Flavor::Chocolate);

        let per_unit = line_total(&config, 3);
        let per_order = Money::from_cents(300 * 3 + 100);

        assert_eq!(per_unit, Money::from_cents(1200));
        assert_ne!(per_unit, per_order);
    }

    #[test]
    fn test_breakdown_sums_to_unit_price() {
        for config in all_configs() {
            let b = PriceBreakdown::of(&config);
            assert_eq!(
                b.base + b.flavor_surcharge + b.frosting + b.sprinkles + b.coulis,
                unit_price(&config)
            );
        }
    }
}
