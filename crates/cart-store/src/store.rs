//! # Cart Store
//!
//! Owns the current cart snapshot and turns method calls into reducer actions.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action                Store Method              Reducer Action      │
//! │  ─────────                ────────────              ──────────────      │
//! │                                                                         │
//! │  Click "Add" ───────────► add_item(sku) ──────────► ADD_ITEM           │
//! │                                                                         │
//! │  Click "−" ─────────────► remove_item(sku) ───────► REMOVE_ITEM        │
//! │                                                                         │
//! │  Click "Remove" ────────► remove_line_item(sku) ──► REMOVE_LINE_ITEM   │
//! │                                                                         │
//! │  Click "Clear" ─────────► clear_cart() ───────────► CLEAR_CART         │
//! │                                                                         │
//! │  Render ────────────────► view() / snapshot() ────► (read only)        │
//! │                                                                         │
//! │  Every dispatch swaps in a new Arc<CartState>; old snapshots held by   │
//! │  rendering code stay valid and unchanged.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use cart_core::{reduce, CartAction, CartState, CoreResult, LineItem, DEFAULT_QUANTITY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

/// The cart store.
///
/// ## Invariants
/// - `state` is only ever replaced, never mutated
/// - `revision` advances exactly when a dispatch changes the state
#[derive(Debug, Clone)]
pub struct CartStore {
    /// Current snapshot
    state: Arc<CartState>,

    /// Number of state-changing dispatches so far
    revision: u64,

    /// When the store was created/last cleared
    created_at: DateTime<Utc>,
}

impl CartStore {
    /// Creates a store with an empty cart.
    pub fn new() -> Self {
        Self::with_state(CartState::new())
    }

    /// Creates a store starting from an existing cart state.
    pub fn with_state(state: CartState) -> Self {
        CartStore {
            state: Arc::new(state),
            revision: 0,
            created_at: Utc::now(),
        }
    }

    /// Creates a store from a caller-supplied item list.
    ///
    /// ## Returns
    /// - `Err(CoreError::Validation)` if the list repeats a SKU or holds a zero quantity
    pub fn with_items(items: Vec<LineItem>) -> CoreResult<Self> {
        Ok(Self::with_state(CartState::try_from_items(items)?))
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Applies an action through the reducer and adopts the result.
    ///
    /// ## Returns
    /// `true` if the cart changed.
    pub fn dispatch(&mut self, action: CartAction) -> bool {
        let next = reduce(&self.state, &action);

        if next == *self.state {
            trace!(action = action.kind(), sku = ?action.sku(), "Cart action had no effect");
            return false;
        }

        if matches!(action, CartAction::ClearCart) {
            self.created_at = Utc::now();
        }

        self.state = Arc::new(next);
        self.revision += 1;

        debug!(
            action = action.kind(),
            sku = ?action.sku(),
            revision = self.revision,
            line_items = self.state.line_items_count(),
            items = self.state.items_count(),
            "Cart updated"
        );
        true
    }

    /// Adds one unit of `sku`.
    pub fn add_item(&mut self, sku: impl Into<String>) -> bool {
        self.add_item_quantity(sku, DEFAULT_QUANTITY)
    }

    /// Adds `quantity` units of `sku`.
    pub fn add_item_quantity(&mut self, sku: impl Into<String>, quantity: u32) -> bool {
        self.dispatch(CartAction::add_item(sku, quantity))
    }

    /// Removes one unit of `sku`.
    pub fn remove_item(&mut self, sku: impl Into<String>) -> bool {
        self.remove_item_quantity(sku, DEFAULT_QUANTITY)
    }

    /// Removes `quantity` units of `sku`, dropping the line item at zero.
    pub fn remove_item_quantity(&mut self, sku: impl Into<String>, quantity: u32) -> bool {
        self.dispatch(CartAction::remove_item(sku, quantity))
    }

    /// Removes the whole line item for `sku`.
    pub fn remove_line_item(&mut self, sku: impl Into<String>) -> bool {
        self.dispatch(CartAction::remove_line_item(sku))
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) -> bool {
        self.dispatch(CartAction::ClearCart)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Returns the number of distinct line items.
    pub fn line_items_count(&self) -> usize {
        self.state.line_items_count()
    }

    /// Returns the total quantity of all items.
    pub fn items_count(&self) -> u64 {
        self.state.items_count()
    }

    /// Checks if `sku` has a line item in the cart.
    pub fn is_in_cart(&self, sku: &str) -> bool {
        self.state.contains(sku)
    }

    /// Looks up the line item for `sku`.
    pub fn get_item(&self, sku: &str) -> Option<&LineItem> {
        self.state.get(sku)
    }

    /// Returns the current immutable snapshot.
    pub fn snapshot(&self) -> Arc<CartState> {
        Arc::clone(&self.state)
    }

    /// Returns the number of state-changing dispatches.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns when the store was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Builds the read model handed to rendering code.
    pub fn view(&self) -> CartView {
        CartView::from(self)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart read model for UI code.
///
/// ## Serialization
/// ```json
/// {
///   "items": [{ "sku": "COKE-330", "quantity": 2 }],
///   "lineItemsCount": 1,
///   "itemsCount": 2,
///   "revision": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub line_items_count: usize,
    #[ts(type = "number")]
    pub items_count: u64,
    #[ts(type = "number")]
    pub revision: u64,
}

impl From<&CartStore> for CartView {
    fn from(store: &CartStore) -> Self {
        CartView {
            items: store.items().to_vec(),
            line_items_count: store.line_items_count(),
            items_count: store.items_count(),
            revision: store.revision(),
        }
    }
}
