//! # State Module
//!
//! Application state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront (root)                          │   │
//! │  │  let store = CartStore::new();                                  │   │
//! │  │  let config = StoreConfig::from_env()?;                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  Customize   │  │  Cart screen │  │  Checkout form   │              │
//! │  │  store.clone │  │  store.clone │  │  store.clone     │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: Arc<Mutex<Cart>>, snapshots on a tokio watch channel     │
//! │  • StoreConfig: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartSnapshot, CartStore, LineView};
pub use config::{ConfigError, StoreConfig};
