//! End-to-end flows through the screens, sharing one cart store the way the
//! application root wires them.

use std::cell::RefCell;

use cupcake_core::{AddressField, CheckoutCallbacks, Flavor, Money, Topping};
use cupcake_storefront::screens::{CartScreen, CheckoutForm, CustomizeSession};
use cupcake_storefront::state::CartStore;

fn fill_address(form: &mut CheckoutForm) {
    form.set_field(AddressField::Name, "Ada");
    form.set_field(AddressField::Street, "1 Main St");
    form.set_field(AddressField::City, "Paris");
    form.set_field(AddressField::Zip, "75001");
}

#[test]
fn test_plain_vanilla_lands_in_cart_at_base_price() {
    let store = CartStore::new();

    CustomizeSession::new().add_to_cart(&store);

    let snapshot = CartScreen::new(store.clone()).snapshot();
    assert_eq!(snapshot.line_count, 1);
    assert_eq!(snapshot.lines[0].quantity, 1);
    assert_eq!(snapshot.total, Money::from_cents(300));
}

#[test]
fn test_frosting_and_sprinkles_two_cupcakes() {
    let store = CartStore::new();
    let mut session = CustomizeSession::new();
    session.set_flavor(Flavor::Vanilla);
    session.adjust_topping(Topping::Frosting, 1);
    session.adjust_topping(Topping::Sprinkles, 1);
    assert_eq!(session.price_preview(), Money::from_cents(450));

    session.add_to_cart(&store);
    let cart = CartScreen::new(store.clone());
    cart.increment_row(0);

    let snapshot = cart.snapshot();
    assert_eq!(snapshot.lines[0].unit_price, Money::from_cents(450));
    assert_eq!(snapshot.lines[0].line_total, Money::from_cents(900));
    assert_eq!(snapshot.total, Money::from_cents(900));
}

#[test]
fn test_three_up_four_down_empties_cart() {
    let store = CartStore::new();
    CustomizeSession::new().add_to_cart(&store);
    let cart = CartScreen::new(store.clone());

    for _ in 0..3 {
        cart.increment_row(0);
    }
    assert_eq!(cart.snapshot().lines[0].quantity, 4);

    for _ in 0..4 {
        cart.decrement_row(0);
    }

    let snapshot = cart.snapshot();
    assert!(snapshot.is_empty);
    assert_eq!(snapshot.total, Money::zero());
}

#[test]
fn test_every_screen_sees_every_mutation() {
    let store = CartStore::new();
    let mut updates = store.subscribe();
    let cart = CartScreen::new(store.clone());

    CustomizeSession::new().add_to_cart(&store);
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().line_count, 1);
    assert_eq!(cart.snapshot().line_count, 1);

    cart.increment_row(0);
    assert_eq!(updates.borrow_and_update().total_quantity, 2);
}

#[test]
fn test_confirm_clears_cart_then_calls_back_in_order() {
    let store = CartStore::new();
    let mut session = CustomizeSession::new();
    session.set_topping_count(Topping::Coulis, 2);
    session.add_to_cart(&store);
    CustomizeSession::new().add_to_cart(&store);

    let mut form = CartScreen::new(store.clone()).proceed_to_checkout();
    fill_address(&mut form);

    let events = RefCell::new(Vec::new());
    let prompt = form.request_confirmation().unwrap();
    assert_eq!(prompt.summary(), "Ada, 1 Main St, Paris 75001");

    let receipt = form.place(
        prompt,
        CheckoutCallbacks::new()
            .on_confirm(|| {
                let empty = store.snapshot().is_empty;
                events.borrow_mut().push(format!("confirm(empty={})", empty));
            })
            .on_go_home(|| events.borrow_mut().push("home".to_string())),
    );

    assert_eq!(*events.borrow(), ["confirm(empty=true)", "home"]);
    assert_eq!(receipt.lines.len(), 2);
    assert_eq!(receipt.total, Money::from_cents(350 + 300));
    assert!(store.snapshot().is_empty);
}

#[test]
fn test_cancel_leaves_everything_alone() {
    let store = CartStore::new();
    CustomizeSession::new().add_to_cart(&store);
    let mut form = CartScreen::new(store.clone()).proceed_to_checkout();
    fill_address(&mut form);
    let before = store.snapshot();

    let prompt = form.request_confirmation().unwrap();
    prompt.cancel();

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_place_order_unavailable_until_address_complete() {
    let store = CartStore::new();
    CustomizeSession::new().add_to_cart(&store);
    let mut form = CartScreen::new(store.clone()).proceed_to_checkout();

    for field in AddressField::ALL {
        assert!(form.request_confirmation().is_err());
        form.set_field(field, "x");
    }
    assert!(form.request_confirmation().is_ok());
}
