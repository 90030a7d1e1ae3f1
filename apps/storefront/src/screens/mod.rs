//! # Screens
//!
//! Screen state and the navigation stack.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌────────┐ Order Now ┌───────────┐ Add to Cart ┌────────┐ Checkout    │
//! │  │  Home  │ ────────► │ Customize │ ──────────► │  Cart  │ ─────────┐  │
//! │  └────────┘           └───────────┘             └────────┘          │  │
//! │      ▲                      ▲   edit row            │               ▼  │
//! │      │                      └───────────────────────┘        ┌──────────┐
//! │      │                                                       │ Checkout │
//! │      └──────────────── on_go_home (after confirm) ◄───────── └──────────┘
//! │                                                                         │
//! │  Every screen holds a clone of the same CartStore.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod checkout;
mod customize;

pub use cart::CartScreen;
pub use checkout::CheckoutForm;
pub use customize::CustomizeSession;

use tracing::debug;

/// One entry on the navigation stack.
#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    Customize(CustomizeSession),
    Cart(CartScreen),
    Checkout(CheckoutForm),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Customize(_) => "Customize",
            Screen::Cart(_) => "Your Cart",
            Screen::Checkout(_) => "Delivery details",
        }
    }
}

/// Navigation stack rooted at [`Screen::Home`].
#[derive(Debug)]
pub struct Navigator {
    /// Never empty: index 0 is always Home.
    stack: Vec<Screen>,
    order_placed: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            stack: vec![Screen::Home],
            order_placed: false,
        }
    }

    pub fn current(&self) -> &Screen {
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, screen: Screen) {
        debug!(screen = screen.title(), "push");
        self.stack.push(screen);
    }

    /// Back button. Home is never popped.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop()
    }

    /// Pops to the root.
    pub fn go_home(&mut self) {
        self.stack.truncate(1);
    }

    /// Raises the "order placed" acknowledgment.
    pub fn acknowledge_order(&mut self) {
        self.order_placed = true;
    }

    /// Whether the acknowledgment is showing. Reading it dismisses it.
    pub fn take_order_acknowledgment(&mut self) -> bool {
        std::mem::take(&mut self.order_placed)
    }
}
