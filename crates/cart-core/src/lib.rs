//! # cart-core: Pure Cart Logic
//!
//! This crate is the **heart** of the cart. It contains the cart state, the
//! actions that describe state transitions, and the reducer that applies
//! them, all as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Cart Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI rendering code                            │   │
//! │  │    Product list ──► Cart badge ──► Cart page                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartStore / SharedCart (injected)      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cart-store                                   │   │
//! │  │    add_item, remove_item, clear_cart, snapshot, view            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartAction                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  action   │  │  reducer  │  │ validation│  │   │
//! │  │   │ LineItem  │  │ AddItem   │  │  reduce   │  │   rules   │  │   │
//! │  │   │ CartState │  │ ClearCart │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO GLOBALS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, CartState)
//! - [`action`] - Cart actions and their JSON wire shape
//! - [`reducer`] - The `(state, action) -> state` transition function
//! - [`error`] - Domain error types
//! - [`validation`] - Invariant checks for caller-supplied item lists
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same state + same action = equal next state
//! 2. **Immutable Snapshots**: the reducer never edits its input
//! 3. **Permissive Reducer**: unknown SKUs and over-removal are not errors
//! 4. **Explicit Errors**: construction errors are typed, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{reduce, CartAction, CartState};
//!
//! let state = CartState::new();
//! let state = reduce(&state, &CartAction::add_item("COKE-330", 2));
//! let state = reduce(&state, &CartAction::remove_item("COKE-330", 1));
//!
//! assert_eq!(state.items_count(), 1);
//! assert_eq!(state.line_items_count(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod error;
pub mod reducer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::CartAction;
pub use error::{CoreError, CoreResult, ValidationError};
pub use reducer::reduce;
pub use types::{CartState, LineItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity used when a caller adds or removes an item without saying how many.
pub const DEFAULT_QUANTITY: u32 = 1;
