//! # Cupcake Storefront Library
//!
//! Screen wiring and the terminal front end for the cupcake storefront.
//!
//! ## Module Organization
//! ```text
//! cupcake_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Shared cart store + snapshots
//! │   └── config.rs   ◄─── Store configuration
//! ├── screens/
//! │   ├── mod.rs      ◄─── Screen enum + navigation stack
//! │   ├── customize.rs◄─── Flavor / topping pickers
//! │   ├── cart.rs     ◄─── Cart list rows
//! │   └── checkout.rs ◄─── Delivery details + Place Order
//! ├── shell.rs        ◄─── Command parsing and rendering
//! └── error.rs        ◄─── App error type
//! ```
//!
//! ## One Cart, Many Screens
//! The root creates exactly one [`state::CartStore`] and passes clones of the
//! handle to every screen it opens. There is no global cart.

pub mod error;
pub mod screens;
pub mod shell;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppResult;
use shell::Storefront;
use state::StoreConfig;

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn, info for this crate; override with RUST_LOG        │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • StoreConfig defaults + CUPCAKE_* environment overrides            │
/// │                                                                         │
/// │  3. Create the Cart Store ────────────────────────────────────────────► │
/// │     • One CartStore, shared by every screen                             │
/// │                                                                         │
/// │  4. Run the Shell ────────────────────────────────────────────────────► │
/// │     • One command per line until EOF or `quit`                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = StoreConfig::from_env()?;
    info!(
        store = %config.store_name,
        currency = %config.currency_code,
        "Starting cupcake storefront"
    );

    let mut app = Storefront::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_shell(&mut app, stdin.lock(), stdout.lock())?;

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (every cart mutation)
/// - `RUST_LOG=cupcake_storefront=trace` - Trace this crate only
/// - Default: `warn,cupcake_storefront=info`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,cupcake_storefront=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
