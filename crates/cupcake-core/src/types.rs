//! # Domain Types
//!
//! Core domain types for a cupcake order.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────┐      │
//! │  │                     ProductConfig                            │      │
//! │  │  ──────────────────────────────────────────────────────────  │      │
//! │  │  flavor                   Vanilla | Strawberry | ...         │      │
//! │  │  special_request_enabled  gates the toppings below           │      │
//! │  │  toppings                 ┌────────────────────┐             │      │
//! │  │                           │ extra_frosting     │             │      │
//! │  │                           │ add_sprinkles      │             │      │
//! │  │                           │ add_coulis         │             │      │
//! │  │                           └────────────────────┘             │      │
//! │  │  address                  ┌────────────────────┐             │      │
//! │  │                           │ name, street,      │             │      │
//! │  │                           │ city, zip          │             │      │
//! │  │                           └────────────────────┘             │      │
//! │  └──────────────────────────────────────────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! `ProductConfig` serializes flat, with the field names the order record has
//! always used on the wire:
//! ```json
//! { "type": 2, "specialRequestEnabled": true, "extraFrosting": true,
//!   "addSprinkles": false, "addCoulis": false,
//!   "name": "Ada", "streetAddress": "1 Main St", "city": "Paris", "zip": "75001" }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, ValidationError};
use crate::validation;

// =============================================================================
// Flavor
// =============================================================================

/// The fixed, ordered flavor list. The index doubles as the pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Flavor {
    #[default]
    Vanilla,
    Strawberry,
    Chocolate,
    Rainbow,
}

impl Flavor {
    /// All flavors in display order.
    pub const ALL: [Flavor; 4] = [
        Flavor::Vanilla,
        Flavor::Strawberry,
        Flavor::Chocolate,
        Flavor::Rainbow,
    ];

    /// Position in [`Flavor::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Flavor::Vanilla => 0,
            Flavor::Strawberry => 1,
            Flavor::Chocolate => 2,
            Flavor::Rainbow => 3,
        }
    }

    /// Looks up a flavor by its position.
    ///
    /// ## Example
    /// ```rust
    /// use cupcake_core::Flavor;
    ///
    /// assert_eq!(Flavor::from_index(2).unwrap(), Flavor::Chocolate);
    /// assert!(Flavor::from_index(4).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        Flavor::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::FlavorOutOfRange {
                index,
                count: Flavor::ALL.len(),
            })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Flavor::Vanilla => "Vanilla",
            Flavor::Strawberry => "Strawberry",
            Flavor::Chocolate => "Chocolate",
            Flavor::Rainbow => "Rainbow",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for Flavor {
    type Error = CoreError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Flavor::from_index(index)
    }
}

impl From<Flavor> for usize {
    fn from(flavor: Flavor) -> Self {
        flavor.index()
    }
}

// =============================================================================
// Toppings
// =============================================================================

/// A single optional add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topping {
    Frosting,
    Sprinkles,
    Coulis,
}

impl Topping {
    pub const ALL: [Topping; 3] = [Topping::Frosting, Topping::Sprinkles, Topping::Coulis];

    pub const fn name(self) -> &'static str {
        match self {
            Topping::Frosting => "frosting",
            Topping::Sprinkles => "sprinkles",
            Topping::Coulis => "coulis",
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topping {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topping::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "topping".to_string(),
                reason: "must be one of: frosting, sprinkles, coulis".to_string(),
            })
    }
}

/// Topping flags of one configuration.
///
/// Read-only from the outside: flags change through [`ProductConfig::set_topping`]
/// so the special-request gate is always enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Toppings {
    pub extra_frosting: bool,
    pub add_sprinkles: bool,
    pub add_coulis: bool,
}

impl Toppings {
    pub const fn none() -> Self {
        Toppings {
            extra_frosting: false,
            add_sprinkles: false,
            add_coulis: false,
        }
    }

    pub const fn has(&self, topping: Topping) -> bool {
        match topping {
            Topping::Frosting => self.extra_frosting,
            Topping::Sprinkles => self.add_sprinkles,
            Topping::Coulis => self.add_coulis,
        }
    }

    pub const fn any(&self) -> bool {
        self.extra_frosting || self.add_sprinkles || self.add_coulis
    }

    fn set(&mut self, topping: Topping, on: bool) {
        match topping {
            Topping::Frosting => self.extra_frosting = on,
            Topping::Sprinkles => self.add_sprinkles = on,
            Topping::Coulis => self.add_coulis = on,
        }
    }
}

// =============================================================================
// Delivery Address
// =============================================================================

/// One of the four address inputs on the checkout screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Name,
    Street,
    City,
    Zip,
}

impl AddressField {
    /// Form order, which is also the order validation reports missing fields in.
    pub const ALL: [AddressField; 4] = [
        AddressField::Name,
        AddressField::Street,
        AddressField::City,
        AddressField::Zip,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            AddressField::Name => "name",
            AddressField::Street => "street",
            AddressField::City => "city",
            AddressField::Zip => "zip",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AddressField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressField::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "address field".to_string(),
                reason: "must be one of: name, street, city, zip".to_string(),
            })
    }
}

/// Free-text delivery details. Only non-emptiness is checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DeliveryAddress {
    pub name: String,
    #[serde(rename = "streetAddress")]
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl DeliveryAddress {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Name => &self.name,
            AddressField::Street => &self.street,
            AddressField::City => &self.city,
            AddressField::Zip => &self.zip,
        }
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AddressField::Name => self.name = value,
            AddressField::Street => self.street = value,
            AddressField::City => self.city = value,
            AddressField::Zip => self.zip = value,
        }
    }

    /// True iff none of the four fields is empty.
    pub fn is_valid(&self) -> bool {
        validation::validate_address(self).is_ok()
    }

    /// Single-line summary shown in the confirmation prompt.
    pub fn summary(&self) -> String {
        format!("{}, {}, {} {}", self.name, self.street, self.city, self.zip)
    }
}

// =============================================================================
// Product Configuration
// =============================================================================

/// One configured cupcake order.
///
/// ## Special Requests
/// ```text
/// special_request_enabled = false
///      │
///      ▼
/// toppings reset to none, set_topping(_, true) ignored
///      │
/// special_request_enabled = true
///      │
///      ▼
/// toppings editable
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", from = "ProductConfigRecord")]
#[ts(export)]
pub struct ProductConfig {
    #[serde(rename = "type")]
    #[ts(as = "u8")]
    flavor: Flavor,

    special_request_enabled: bool,

    #[serde(flatten)]
    toppings: Toppings,

    #[serde(flatten)]
    address: DeliveryAddress,
}

impl ProductConfig {
    /// Fresh configuration: no special requests, no toppings, empty address.
    pub fn new(flavor: Flavor) -> Self {
        ProductConfig {
            flavor,
            ..ProductConfig::default()
        }
    }

    /// Builder used by tests and seed data: enables special requests and
    /// switches the given toppings on.
    pub fn with_toppings(mut self, toppings: &[Topping]) -> Self {
        if !toppings.is_empty() {
            self.set_special_request_enabled(true);
        }
        for topping in toppings {
            self.set_topping(*topping, true);
        }
        self
    }

    #[inline]
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn set_flavor(&mut self, flavor: Flavor) {
        self.flavor = flavor;
    }

    #[inline]
    pub fn toppings(&self) -> Toppings {
        self.toppings
    }

    #[inline]
    pub fn special_request_enabled(&self) -> bool {
        self.special_request_enabled
    }

    /// Toggles special requests. Turning them off clears every topping in the
    /// same call.
    pub fn set_special_request_enabled(&mut self, enabled: bool) {
        self.special_request_enabled = enabled;
        if !enabled {
            self.toppings = Toppings::none();
        }
    }

    /// Sets one topping flag. Returns `false` and leaves the flag untouched
    /// when special requests are disabled and `on` is true.
    pub fn set_topping(&mut self, topping: Topping, on: bool) -> bool {
        if on && !self.special_request_enabled {
            return false;
        }
        self.toppings.set(topping, on);
        true
    }

    #[inline]
    pub fn address(&self) -> &DeliveryAddress {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut DeliveryAddress {
        &mut self.address
    }

    #[inline]
    pub fn is_address_valid(&self) -> bool {
        self.address.is_valid()
    }
}

/// Raw decoded record. Converted into [`ProductConfig`] so a record that
/// carries toppings with special requests off still lands in a valid state.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductConfigRecord {
    #[serde(rename = "type", default)]
    flavor: Flavor,
    #[serde(default)]
    special_request_enabled: bool,
    #[serde(flatten)]
    toppings: Toppings,
    #[serde(flatten)]
    address: DeliveryAddress,
}

impl From<ProductConfigRecord> for ProductConfig {
    fn from(record: ProductConfigRecord) -> Self {
        let mut config = ProductConfig {
            flavor: record.flavor,
            special_request_enabled: record.special_request_enabled,
            toppings: record.toppings,
            address: record.address,
        };
        config.set_special_request_enabled(record.special_request_enabled);
        config
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_order_and_names() {
        let names: Vec<_> = Flavor::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Vanilla", "Strawberry", "Chocolate", "Rainbow"]);

        for (i, flavor) in Flavor::ALL.iter().enumerate() {
            assert_eq!(flavor.index(), i);
            assert_eq!(Flavor::from_index(i).unwrap(), *flavor);
        }
    }

    #[test]
    fn test_flavor_out_of_range() {
        let err = Flavor::from_index(4).unwrap_err();
        assert!(matches!(err, CoreError::FlavorOutOfRange { index: 4, count: 4 }));
    }

    #[test]
    fn test_disabling_special_requests_clears_toppings() {
        let mut config = ProductConfig::new(Flavor::Chocolate)
            .with_toppings(&[Topping::Frosting, Topping::Sprinkles, Topping::Coulis]);
        assert!(config.toppings().extra_frosting);
        assert!(config.toppings().add_coulis);

        config.set_special_request_enabled(false);

        assert_eq!(config.toppings(), Toppings::none());
        assert!(!config.special_request_enabled());
    }

    #[test]
    fn test_topping_cannot_be_enabled_while_special_requests_off() {
        let mut config = ProductConfig::new(Flavor::Vanilla);

        assert!(!config.set_topping(Topping::Sprinkles, true));
        assert!(!config.toppings().add_sprinkles);

        // Turning a topping off is always allowed.
        assert!(config.set_topping(Topping::Sprinkles, false));

        config.set_special_request_enabled(true);
        assert!(config.set_topping(Topping::Sprinkles, true));
        assert!(config.toppings().add_sprinkles);
    }

    #[test]
    fn test_address_field_round_trip_through_setter() {
        let mut address = DeliveryAddress::default();
        for field in AddressField::ALL {
            address.set(field, format!("{}-value", field));
        }
        assert_eq!(address.get(AddressField::Street), "street-value");
        assert_eq!(address.get(AddressField::Zip), "zip-value");
    }

    #[test]
    fn test_parse_topping_and_field_names() {
        assert_eq!("Frosting".parse::<Topping>().unwrap(), Topping::Frosting);
        assert_eq!(" coulis ".parse::<Topping>().unwrap(), Topping::Coulis);
        assert!("caramel".parse::<Topping>().is_err());

        assert_eq!("ZIP".parse::<AddressField>().unwrap(), AddressField::Zip);
        assert!("country".parse::<AddressField>().is_err());
    }

    #[test]
    fn test_serializes_with_order_record_names() {
        let mut config = ProductConfig::new(Flavor::Chocolate).with_toppings(&[Topping::Frosting]);
        config.address_mut().set(AddressField::Street, "1 Main St");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], 2);
        assert_eq!(json["specialRequestEnabled"], true);
        assert_eq!(json["extraFrosting"], true);
        assert_eq!(json["addSprinkles"], false);
        assert_eq!(json["addCoulis"], false);
        assert_eq!(json["streetAddress"], "1 Main St");
        assert_eq!(json["name"], "");
    }

    #[test]
    fn test_decoding_enforces_special_request_gate() {
        let json = r#"{
            "type": 1, "specialRequestEnabled": false,
            "extraFrosting": true, "addSprinkles": true, "addCoulis": false,
            "name": "Ada", "streetAddress": "1 Main St", "city": "Paris", "zip": "75001"
        }"#;
        let config: ProductConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.flavor(), Flavor::Strawberry);
        assert_eq!(config.toppings(), Toppings::none());
        assert!(config.is_address_valid());
    }

    #[test]
    fn test_decoding_rejects_unknown_flavor() {
        let json = r#"{
            "type": 9, "specialRequestEnabled": false,
            "extraFrosting": false, "addSprinkles": false, "addCoulis": false,
            "name": "", "streetAddress": "", "city": "", "zip": ""
        }"#;
        assert!(serde_json::from_str::<ProductConfig>(json).is_err());
    }
}
