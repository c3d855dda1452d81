//! # Domain Types
//!
//! Core domain types of the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────┐      ┌─────────────────────────┐      │
//! │  │         CartState           │      │        LineItem         │      │
//! │  │  ─────────────────────────  │ 0..n │  ─────────────────────  │      │
//! │  │  items: Vec<LineItem>       │─────►│  sku (unique key)       │      │
//! │  │  (insertion order kept)     │      │  quantity (>= 1)        │      │
//! │  └─────────────────────────────┘      └─────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one `LineItem` per SKU
//! - Every stored quantity is >= 1
//! - Items keep their insertion order
//!
//! `CartState` keeps its item list private so the only ways to build one are
//! the checked constructors here and the reducer.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::action::CartAction;
use crate::error::CoreResult;
use crate::reducer::reduce;
use crate::validation::validate_line_items;

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product in the cart and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Stock Keeping Unit - unique key within a cart.
    pub sku: String,

    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(sku: impl Into<String>, quantity: u32) -> Self {
        LineItem {
            sku: sku.into(),
            quantity,
        }
    }

    /// Returns a copy of this item with a different quantity.
    #[inline]
    pub fn with_quantity(&self, quantity: u32) -> Self {
        LineItem {
            sku: self.sku.clone(),
            quantity,
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// An immutable snapshot of the cart contents.
///
/// ## Construction
/// ```text
/// CartState::new()                 → empty cart
/// CartState::try_from_items(items) → checked, rejects duplicates / zero qty
/// CartState::from_items_merged(..) → lenient, sums duplicates, drops zero qty
/// state.apply(&action)             → next snapshot (input untouched)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartState { items: Vec::new() }
    }

    /// Creates a cart from a caller-supplied list, rejecting any list that
    /// breaks the cart invariants.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{CartState, LineItem};
    ///
    /// let ok = CartState::try_from_items(vec![LineItem::new("A", 1), LineItem::new("B", 2)]);
    /// assert!(ok.is_ok());
    ///
    /// let dup = CartState::try_from_items(vec![LineItem::new("A", 1), LineItem::new("A", 2)]);
    /// assert!(dup.is_err());
    /// ```
    pub fn try_from_items(items: Vec<LineItem>) -> CoreResult<Self> {
        validate_line_items(&items)?;
        Ok(CartState { items })
    }

    /// Creates a cart by adding every listed item in order.
    ///
    /// Repeated SKUs are summed into the first occurrence and zero
    /// quantities are dropped, so this never fails.
    pub fn from_items_merged<I>(items: I) -> Self
    where
        I: IntoIterator<Item = LineItem>,
    {
        items.into_iter().fold(CartState::new(), |state, item| {
            reduce(&state, &CartAction::add_item(item.sku, item.quantity))
        })
    }

    /// Builds a state from items the caller already knows to be valid.
    pub(crate) fn from_items_unchecked(items: Vec<LineItem>) -> Self {
        CartState { items }
    }

    /// Returns the next state after applying `action`.
    ///
    /// Shorthand for [`reduce`](crate::reducer::reduce).
    #[inline]
    pub fn apply(&self, action: &CartAction) -> CartState {
        reduce(self, action)
    }

    /// Returns the line items in insertion order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of distinct line items.
    #[inline]
    pub fn line_items_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn items_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks if a line item with this SKU is present.
    pub fn contains(&self, sku: &str) -> bool {
        self.items.iter().any(|i| i.sku == sku)
    }

    /// Looks up the line item for a SKU.
    pub fn get(&self, sku: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.sku == sku)
    }

    /// Returns the position of a SKU in the cart.
    pub fn position(&self, sku: &str) -> Option<usize> {
        self.items.iter().position(|i| i.sku == sku)
    }
}

/// Wire shape of a cart snapshot: `{"items": [...]}`.
#[derive(Deserialize)]
struct RawCartState {
    #[serde(default)]
    items: Vec<LineItem>,
}

/// Deserialization runs the same checks as [`CartState::try_from_items`].
impl<'de> Deserialize<'de> for CartState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCartState::deserialize(deserializer)?;
        CartState::try_from_items(raw.items).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
