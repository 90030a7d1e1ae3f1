//! # Terminal Shell
//!
//! Line-oriented front end. Each input line is one [`Command`]; the
//! [`Storefront`] applies it to the current screen and returns the text to
//! print.
//!
//! ## Session
//! ```text
//! > order
//! > flavor 0
//! > topping frosting +
//! > topping sprinkles +
//! > add                     ◄── pushes the cart screen
//! > inc 1                   ◄── rows are 1-based as printed
//! > checkout
//! > set name Ada
//! > ...
//! > place                   ◄── "Place this order?" prompt
//! > yes                     ◄── cart cleared, acknowledgment, back to Home
//! ```

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::str::FromStr;

use cupcake_core::{
    validation, AddressField, CheckoutCallbacks, ConfirmationPrompt, Flavor, OrderReceipt,
    Topping, MAX_TOPPING_COUNT,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::screens::{CartScreen, CheckoutForm, CustomizeSession, Navigator, Screen};
use crate::state::{CartSnapshot, CartStore, StoreConfig};

pub const HELP: &str = "\
Commands:
  home                              back to the home screen
  back                              previous screen
  order                             Order Now: customize a cupcake
  flavor <0-3|name>                 pick a flavor
  special on|off                    enable or disable special requests
  topping <name> <+|-|0-3>          frosting, sprinkles or coulis picker
  add                               add to cart (or save the line being edited)
  save                              save the line being edited
  cart                              show the cart
  inc <row> | dec <row>             change a line's quantity
  remove <row>...                   delete lines
  edit <row>                        re-open a line on the customize screen
  checkout                          proceed to delivery details
  set <name|street|city|zip> <text> fill an address field
  place                             Place Order
  yes | no                          answer the confirmation prompt
  json                              print the cart snapshot as JSON
  help                              this text
  quit                              exit";

// =============================================================================
// Commands
// =============================================================================

/// What a topping picker button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerInput {
    Plus,
    Minus,
    Set(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    Back,
    Order,
    Flavor(Flavor),
    Special(bool),
    Topping(Topping, PickerInput),
    Add,
    Save,
    Cart,
    /// 0-based row.
    Inc(usize),
    Dec(usize),
    Remove(Vec<usize>),
    Edit(usize),
    Checkout,
    Set(AddressField, String),
    Place,
    Yes,
    No,
    Json,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "home" => Command::Home,
            "back" => Command::Back,
            "order" => Command::Order,
            "flavor" => Command::Flavor(parse_flavor(rest)?),
            "special" => Command::Special(parse_switch(rest)?),
            "topping" => {
                let (name, input) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| AppError::command("Usage: topping <name> <+|-|0-3>"))?;
                Command::Topping(name.parse()?, parse_picker(input.trim())?)
            }
            "add" => Command::Add,
            "save" => Command::Save,
            "cart" => Command::Cart,
            "inc" => Command::Inc(parse_row(rest)?),
            "dec" => Command::Dec(parse_row(rest)?),
            "remove" => {
                let rows = rest
                    .split_whitespace()
                    .map(parse_row)
                    .collect::<AppResult<Vec<_>>>()?;
                if rows.is_empty() {
                    return Err(AppError::command("Usage: remove <row>..."));
                }
                Command::Remove(rows)
            }
            "edit" => Command::Edit(parse_row(rest)?),
            "checkout" => Command::Checkout,
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                Command::Set(field.parse()?, value.to_string())
            }
            "place" => Command::Place,
            "yes" | "y" => Command::Yes,
            "no" | "n" => Command::No,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(AppError::command(format!("Unknown command: {}", other))),
        };
        Ok(command)
    }
}

fn parse_flavor(arg: &str) -> AppResult<Flavor> {
    if let Ok(index) = arg.parse::<i64>() {
        return Ok(validation::validate_flavor_index(index)?);
    }
    Flavor::ALL
        .into_iter()
        .find(|f| f.name().eq_ignore_ascii_case(arg))
        .ok_or_else(|| AppError::command(format!("Unknown flavor: {}", arg)))
}

fn parse_switch(arg: &str) -> AppResult<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(true),
        "off" | "no" | "false" => Ok(false),
        _ => Err(AppError::command("Usage: special on|off")),
    }
}

fn parse_picker(arg: &str) -> AppResult<PickerInput> {
    match arg {
        "+" => Ok(PickerInput::Plus),
        "-" => Ok(PickerInput::Minus),
        n => {
            let count = n
                .parse::<i64>()
                .map_err(|_| AppError::command("Usage: topping <name> <+|-|0-3>"))?;
            Ok(PickerInput::Set(validation::validate_topping_count(count)?))
        }
    }
}

/// Converts a printed 1-based row number to a position.
fn parse_row(arg: &str) -> AppResult<usize> {
    match arg.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row - 1),
        _ => Err(AppError::command(format!("Invalid row: '{}' (rows start at 1)", arg))),
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// Application root: owns the one cart store and the navigation stack.
pub struct Storefront {
    config: StoreConfig,
    store: CartStore,
    nav: Navigator,
    prompt: Option<ConfirmationPrompt>,
    last_receipt: Option<OrderReceipt>,
    updates: watch::Receiver<CartSnapshot>,
}

impl Storefront {
    pub fn new(config: StoreConfig) -> Self {
        let store = CartStore::new();
        let updates = store.subscribe();
        Storefront {
            config,
            store,
            nav: Navigator::new(),
            prompt: None,
            last_receipt: None,
            updates,
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmationPrompt> {
        self.prompt.as_ref()
    }

    pub fn last_receipt(&self) -> Option<&OrderReceipt> {
        self.last_receipt.as_ref()
    }

    /// Latest snapshot if the cart changed since the previous call.
    pub fn take_cart_update(&mut self) -> Option<CartSnapshot> {
        match self.updates.has_changed() {
            Ok(true) => Some(self.updates.borrow_and_update().clone()),
            _ => None,
        }
    }

    pub fn execute(&mut self, command: Command) -> AppResult<String> {
        debug!(?command, screen = self.nav.current().title(), "execute");

        // Any other input dismisses an open confirmation prompt.
        if !matches!(command, Command::Yes | Command::No | Command::Help | Command::Json) {
            if let Some(prompt) = self.prompt.take() {
                prompt.cancel();
            }
        }

        match command {
            Command::Home => {
                self.nav.go_home();
                Ok(self.render())
            }
            Command::Back => {
                self.nav.pop();
                Ok(self.render())
            }
            Command::Order => {
                let session = Screen::Customize(CustomizeSession::new());
                if matches!(self.nav.current(), Screen::Customize(_)) {
                    *self.nav.current_mut() = session;
                } else {
                    self.nav.push(session);
                }
                Ok(self.render())
            }
            Command::Flavor(flavor) => {
                self.session()?.set_flavor(flavor);
                Ok(self.render())
            }
            Command::Special(enabled) => {
                self.session()?.set_special_requests(enabled);
                Ok(self.render())
            }
            Command::Topping(topping, input) => {
                let session = self.session()?;
                match input {
                    PickerInput::Plus => session.adjust_topping(topping, 1),
                    PickerInput::Minus => session.adjust_topping(topping, -1),
                    PickerInput::Set(count) => session.set_topping_count(topping, count),
                }
                Ok(self.render())
            }
            Command::Add => self.add_to_cart(),
            Command::Save => self.save_line(),
            Command::Cart => {
                if !matches!(self.nav.current(), Screen::Cart(_)) {
                    self.nav.push(Screen::Cart(CartScreen::new(self.store.clone())));
                }
                Ok(self.render())
            }
            Command::Inc(row) => {
                self.cart_screen()?.increment_row(row);
                Ok(self.render())
            }
            Command::Dec(row) => {
                self.cart_screen()?.decrement_row(row);
                Ok(self.render())
            }
            Command::Remove(rows) => {
                self.cart_screen()?.remove_rows(&rows);
                Ok(self.render())
            }
            Command::Edit(row) => {
                let id = self
                    .cart_screen()?
                    .line_at(row)
                    .ok_or_else(|| AppError::command(format!("No row {}", row + 1)))?;
                let session = CustomizeSession::edit(&self.store, id)
                    .ok_or_else(|| AppError::command(format!("No row {}", row + 1)))?;
                self.nav.push(Screen::Customize(session));
                Ok(self.render())
            }
            Command::Checkout => {
                let screen = self.cart_screen()?;
                if screen.snapshot().is_empty {
                    return Err(AppError::command("Your cart is empty"));
                }
                let form = screen.proceed_to_checkout();
                self.nav.push(Screen::Checkout(form));
                Ok(self.render())
            }
            Command::Set(field, value) => {
                self.checkout_form()?.set_field(field, value);
                Ok(self.render())
            }
            Command::Place => {
                let prompt = self.checkout_form()?.request_confirmation()?;
                let text = format!(
                    "Place this order?\n  Deliver to: {}\n  Total: {}\n(yes/no)",
                    prompt.summary(),
                    self.config.format_currency(self.store.snapshot().total)
                );
                self.prompt = Some(prompt);
                Ok(text)
            }
            Command::Yes => self.confirm_order(),
            Command::No => {
                let prompt = self
                    .prompt
                    .take()
                    .ok_or_else(|| AppError::command("Nothing to confirm"))?;
                prompt.cancel();
                Ok(format!("Order not placed.\n{}", self.render()))
            }
            Command::Json => Ok(serde_json::to_string_pretty(&self.store.snapshot())?),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok("Bye!".to_string()),
        }
    }

    fn add_to_cart(&mut self) -> AppResult<String> {
        let store = self.store.clone();
        let session = self.session()?;
        let editing = session.editing().is_some();
        session.commit(&store);

        if editing {
            self.nav.pop();
        }
        if !matches!(self.nav.current(), Screen::Cart(_)) {
            self.nav.push(Screen::Cart(CartScreen::new(self.store.clone())));
        }
        Ok(self.render())
    }

    fn save_line(&mut self) -> AppResult<String> {
        let store = self.store.clone();
        let session = self.session()?;
        if session.editing().is_none() {
            return Err(AppError::command("Not editing a cart line; use 'add'"));
        }
        session
            .save(&store)
            .ok_or_else(|| AppError::command("That line is no longer in the cart"))?;
        self.nav.pop();
        Ok(self.render())
    }

    fn confirm_order(&mut self) -> AppResult<String> {
        let prompt = self
            .prompt
            .take()
            .ok_or_else(|| AppError::command("Nothing to confirm"))?;
        let form = self.checkout_form()?.clone();

        let confirmed = Cell::new(false);
        let go_home = Cell::new(false);
        let receipt = form.place(
            prompt,
            CheckoutCallbacks::new()
                .on_confirm(|| confirmed.set(true))
                .on_go_home(|| go_home.set(true)),
        );

        if confirmed.get() {
            self.nav.acknowledge_order();
        }
        if go_home.get() {
            self.nav.go_home();
        }
        info!(total = %self.config.format_currency(receipt.total), "order confirmed");
        self.last_receipt = Some(receipt);
        Ok(self.render())
    }

    fn session(&mut self) -> AppResult<&mut CustomizeSession> {
        let title = self.nav.current().title();
        match self.nav.current_mut() {
            Screen::Customize(session) => Ok(session),
            _ => Err(wrong_screen("customize", title)),
        }
    }

    fn cart_screen(&mut self) -> AppResult<&mut CartScreen> {
        let title = self.nav.current().title();
        match self.nav.current_mut() {
            Screen::Cart(screen) => Ok(screen),
            _ => Err(wrong_screen("cart", title)),
        }
    }

    fn checkout_form(&mut self) -> AppResult<&mut CheckoutForm> {
        let title = self.nav.current().title();
        match self.nav.current_mut() {
            Screen::Checkout(form) => Ok(form),
            _ => Err(wrong_screen("checkout", title)),
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Text for the current screen.
    ///
    /// Shows the order acknowledgment once after an order is placed.
    pub fn render(&mut self) -> String {
        let mut out = String::new();
        if self.nav.take_order_acknowledgment() {
            out.push_str("Order placed! Thank you, we're preparing your cupcakes.\n\n");
        }
        let body = match self.nav.current() {
            Screen::Home => self.render_home(),
            Screen::Customize(session) => self.render_customize(session),
            Screen::Cart(screen) => self.render_cart(&screen.snapshot()),
            Screen::Checkout(form) => self.render_checkout(form),
        };
        out.push_str(&body);
        out
    }

    fn render_home(&self) -> String {
        format!(
            "== {} ==\nSweet Moments, Freshly Baked.\n\nType 'order' to Order Now, 'cart' to see your cart.",
            self.config.store_name
        )
    }

    fn render_customize(&self, session: &CustomizeSession) -> String {
        let config = session.config();
        let mut out = String::from("== Customize ==\n");
        if session.editing().is_some() {
            out.push_str("(editing a cart line; 'save' to keep changes)\n");
        }

        out.push_str("Flavor:");
        for (i, flavor) in Flavor::ALL.iter().enumerate() {
            let mark = if *flavor == config.flavor() { "*" } else { " " };
            out.push_str(&format!("  {}{} {}", mark, i, flavor));
        }
        out.push('\n');

        let special = if config.special_request_enabled() { "on" } else { "off" };
        out.push_str(&format!("Special requests: {}\n", special));
        for topping in Topping::ALL {
            out.push_str(&format!(
                "  {:<10} [-] {} [+]  (max {})\n",
                topping.name(),
                session.topping_count(topping),
                MAX_TOPPING_COUNT
            ));
        }
        let breakdown = session.breakdown();
        out.push_str(&format!("  Base       {}\n", self.config.format_currency(breakdown.base)));
        let extras = [
            ("Flavor", breakdown.flavor_surcharge),
            ("Frosting", breakdown.frosting),
            ("Sprinkles", breakdown.sprinkles),
            ("Coulis", breakdown.coulis),
        ];
        for (label, amount) in extras {
            if !amount.is_zero() {
                out.push_str(&format!("  {:<10} +{}\n", label, self.config.format_currency(amount)));
            }
        }
        out.push_str(&format!(
            "Price: {}    'add' to Add to Cart",
            self.config.format_currency(breakdown.unit_price)
        ));
        out
    }

    fn render_cart(&self, snapshot: &CartSnapshot) -> String {
        if snapshot.is_empty {
            return "== Your Cart ==\nYour cart is empty. Add a cupcake from the menu.".to_string();
        }
        let mut out = String::from("== Your Cart ==\n");
        for (row, line) in snapshot.lines.iter().enumerate() {
            let toppings: Vec<&str> = Topping::ALL
                .into_iter()
                .filter(|t| line.config.toppings().has(*t))
                .map(Topping::name)
                .collect();
            let extras = if toppings.is_empty() {
                String::new()
            } else {
                format!(" ({})", toppings.join(", "))
            };
            out.push_str(&format!(
                "{:>3}. {}{}  x{}  {} each  {}\n",
                row + 1,
                line.flavor,
                extras,
                line.quantity,
                self.config.format_currency(line.unit_price),
                self.config.format_currency(line.line_total)
            ));
        }
        out.push_str(&format!(
            "Total: {}    'checkout' to Proceed to Checkout",
            self.config.format_currency(snapshot.total)
        ));
        out
    }

    fn render_checkout(&self, form: &CheckoutForm) -> String {
        let address = form.address();
        let mut out = String::from("== Delivery details ==\n");
        for field in AddressField::ALL {
            out.push_str(&format!("  {:<7} {}\n", field.name(), address.get(field)));
        }
        let button = if form.status().can_place_order() {
            "enabled"
        } else {
            "disabled"
        };
        out.push_str(&format!("Place Order: {}", button));
        out
    }
}

fn wrong_screen(expected: &str, current: &str) -> AppError {
    AppError::command(format!(
        "Not on the {} screen (current: {})",
        expected, current
    ))
}

/// Reads commands from `input` until EOF or `quit`, writing screens to `output`.
///
/// Command errors are printed and the loop keeps going.
pub fn run_shell<R, W>(app: &mut Storefront, input: R, mut output: W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", app.render())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = line.parse::<Command>().and_then(|command| {
            let quit = command == Command::Quit;
            app.execute(command).map(|text| (text, quit))
        });

        match result {
            Ok((text, quit)) => {
                writeln!(output, "{}", text)?;
                if quit {
                    break;
                }
            }
            Err(err) => {
                warn!(error = %err, input = %line.trim(), "command failed");
                writeln!(output, "error: {}", err)?;
            }
        }

        if let Some(snapshot) = app.take_cart_update() {
            writeln!(
                output,
                "[cart: {} item(s), {}]",
                snapshot.total_quantity,
                app.config.format_currency(snapshot.total)
            )?;
        }
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(app: &mut Storefront, line: &str) -> String {
        let command = line.parse::<Command>().unwrap();
        app.execute(command).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("order".parse::<Command>().unwrap(), Command::Order);
        assert_eq!("flavor 2".parse::<Command>().unwrap(), Command::Flavor(Flavor::Chocolate));
        assert_eq!("flavor rainbow".parse::<Command>().unwrap(), Command::Flavor(Flavor::Rainbow));
        assert_eq!("special off".parse::<Command>().unwrap(), Command::Special(false));
        assert_eq!(
            "topping frosting +".parse::<Command>().unwrap(),
            Command::Topping(Topping::Frosting, PickerInput::Plus)
        );
        assert_eq!(
            "topping coulis 3".parse::<Command>().unwrap(),
            Command::Topping(Topping::Coulis, PickerInput::Set(3))
        );
        assert_eq!("inc 1".parse::<Command>().unwrap(), Command::Inc(0));
        assert_eq!("remove 3 1".parse::<Command>().unwrap(), Command::Remove(vec![2, 0]));
        assert_eq!(
            "set street 1 Main St".parse::<Command>().unwrap(),
            Command::Set(AddressField::Street, "1 Main St".to_string())
        );
        assert_eq!("set zip".parse::<Command>().unwrap(), Command::Set(AddressField::Zip, String::new()));
        assert_eq!("QUIT".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!("bake".parse::<Command>().is_err());
        assert!("flavor 4".parse::<Command>().is_err());
        assert!("flavor mint".parse::<Command>().is_err());
        assert!("topping frosting 4".parse::<Command>().is_err());
        assert!("topping caramel +".parse::<Command>().is_err());
        assert!("inc 0".parse::<Command>().is_err());
        assert!("remove".parse::<Command>().is_err());
        assert!("set country France".parse::<Command>().is_err());
    }

    #[test]
    fn test_commands_require_their_screen() {
        let mut app = Storefront::new(StoreConfig::default());

        let err = app.execute(Command::Add).unwrap_err();
        assert_eq!(err.to_string(), "Not on the customize screen (current: Home)");
        assert!(app.execute(Command::Inc(0)).is_err());
        assert!(app.execute(Command::Place).is_err());
    }

    #[test]
    fn test_add_opens_cart_screen() {
        let mut app = Storefront::new(StoreConfig::default());
        exec(&mut app, "order");
        exec(&mut app, "topping frosting +");
        let text = exec(&mut app, "add");

        assert!(matches!(app.navigator().current(), Screen::Cart(_)));
        assert!(text.contains("Vanilla (frosting)"));
        assert!(text.contains("Total: $4.00"));
    }

    #[test]
    fn test_customize_shows_price_breakdown() {
        let mut app = Storefront::new(StoreConfig::default());
        let plain = exec(&mut app, "order");
        assert!(plain.contains("  Base       $3.00\n"));
        assert!(!plain.contains("Frosting   +"));
        assert!(plain.contains("Price: $3.00"));

        exec(&mut app, "flavor 3");
        let text = exec(&mut app, "topping frosting +");
        assert!(text.contains("  Flavor     +$1.50\n"));
        assert!(text.contains("  Frosting   +$1.00\n"));
        assert!(!text.contains("Sprinkles  +"));
        assert!(text.contains("Price: $5.50"));
    }

    #[test]
    fn test_repeated_order_replaces_customize_screen() {
        let mut app = Storefront::new(StoreConfig::default());
        exec(&mut app, "order");
        exec(&mut app, "topping coulis +");
        assert_eq!(app.navigator().depth(), 2);

        let text = exec(&mut app, "order");
        assert_eq!(app.navigator().depth(), 2);
        assert!(text.contains("Price: $3.00"));

        exec(&mut app, "order");
        exec(&mut app, "back");
        assert!(matches!(app.navigator().current(), Screen::Home));
    }

    #[test]
    fn test_place_requires_valid_address() {
        let mut app = Storefront::new(StoreConfig::default());
        for line in ["order", "add", "checkout", "set name Ada", "set street 1 Main St", "set city Paris"] {
            exec(&mut app, line);
        }

        let err = app.execute(Command::Place).unwrap_err();
        assert_eq!(err.to_string(), "Delivery address is incomplete: zip is required");
        assert!(app.pending_confirmation().is_none());
    }

    #[test]
    fn test_yes_places_order_and_goes_home() {
        let mut app = Storefront::new(StoreConfig::default());
        for line in [
            "order", "add", "checkout", "set name Ada", "set street 1 Main St", "set city Paris",
            "set zip 75001",
        ] {
            exec(&mut app, line);
        }

        let prompt = exec(&mut app, "place");
        assert!(prompt.contains("Ada, 1 Main St, Paris 75001"));
        assert!(prompt.contains("$3.00"));

        let text = exec(&mut app, "yes");
        assert!(text.starts_with("Order placed!"));
        assert!(matches!(app.navigator().current(), Screen::Home));
        assert!(app.store().snapshot().is_empty);
        assert_eq!(app.last_receipt().map(|r| r.total_quantity), Some(1));
    }

    #[test]
    fn test_no_keeps_cart() {
        let mut app = Storefront::new(StoreConfig::default());
        for line in [
            "order", "add", "checkout", "set name Ada", "set street 1 Main St", "set city Paris",
            "set zip 75001", "place",
        ] {
            exec(&mut app, line);
        }

        let text = exec(&mut app, "no");
        assert!(text.starts_with("Order not placed."));
        assert!(matches!(app.navigator().current(), Screen::Checkout(_)));
        assert_eq!(app.store().snapshot().line_count, 1);
        assert!(app.execute(Command::Yes).is_err());
    }

    #[test]
    fn test_other_input_dismisses_prompt() {
        let mut app = Storefront::new(StoreConfig::default());
        for line in [
            "order", "add", "checkout", "set name Ada", "set street 1 Main St", "set city Paris",
            "set zip 75001", "place",
        ] {
            exec(&mut app, line);
        }
        exec(&mut app, "set zip 75002");

        assert!(app.pending_confirmation().is_none());
        assert!(app.execute(Command::Yes).is_err());
    }

    #[test]
    fn test_edit_row_then_save() {
        let mut app = Storefront::new(StoreConfig::default());
        for line in ["order", "add", "edit 1", "flavor 3"] {
            exec(&mut app, line);
        }
        let text = exec(&mut app, "save");

        assert!(matches!(app.navigator().current(), Screen::Cart(_)));
        assert!(text.contains("Rainbow"));
        assert_eq!(app.store().snapshot().line_count, 1);
    }

    #[test]
    fn test_cart_updates_are_reported_once() {
        let mut app = Storefront::new(StoreConfig::default());
        assert!(app.take_cart_update().is_none());

        exec(&mut app, "order");
        exec(&mut app, "add");

        let snapshot = app.take_cart_update().unwrap();
        assert_eq!(snapshot.revision, 1);
        assert!(app.take_cart_update().is_none());
    }

    #[test]
    fn test_run_shell_keeps_going_after_errors() {
        let mut app = Storefront::new(StoreConfig::default());
        let input = "order\nbake\nadd\ninc 1\nquit\norder\n";
        let mut output = Vec::new();

        run_shell(&mut app, input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("error: Unknown command: bake"));
        assert!(text.contains("[cart: 2 item(s), $6.00]"));
        assert!(text.trim_end().ends_with("Bye!"));
        assert!(matches!(app.navigator().current(), Screen::Cart(_)));
    }
}
