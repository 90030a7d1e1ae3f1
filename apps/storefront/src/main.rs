//! # Cupcake Storefront Entry Point
//!
//! Terminal front end for the cupcake storefront.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load store configuration from the environment
//! 3. Create the shared cart store
//! 4. Read commands from stdin until `quit`

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match cupcake_storefront::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
