//! # cart-store: Store Layer
//!
//! Holds the cart snapshot for UI code and routes every change through the
//! `cart-core` reducer.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐            │
//! │  │  CartStore   │   │  SharedCart  │   │   StoreConfig    │            │
//! │  │              │   │              │   │                  │            │
//! │  │  snapshot    │◄──│  Arc<Mutex<  │   │  initial items   │            │
//! │  │  revision    │   │   CartStore  │   │  strict / merge  │            │
//! │  │  dispatch    │   │  >>          │   │                  │            │
//! │  └──────┬───────┘   └──────────────┘   └──────────────────┘            │
//! │         │ reduce(&state, &action)                                      │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    cart-core (pure)                              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global cart: construct a [`CartStore`] (or a [`SharedCart`]
//! around one) and pass it to whatever renders the cart.
//!
//! ## Example
//! ```rust
//! use cart_store::CartStore;
//!
//! let mut store = CartStore::new();
//! store.add_item("COKE-330");
//! store.add_item_quantity("CHIPS-LAYS", 3);
//!
//! assert_eq!(store.line_items_count(), 2);
//! assert_eq!(store.items_count(), 4);
//! ```

mod config;
mod error;
mod shared;
mod store;

pub use config::{parse_initial_items, InitialMode, StoreConfig};
pub use error::{ConfigError, StoreError, StoreResult};
pub use shared::SharedCart;
pub use store::{CartStore, CartView};
