//! # Cart Reducer
//!
//! The one place where cart state changes.
//!
//! ## Transition Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action            SKU present?    Result                               │
//! │  ──────            ────────────    ──────                               │
//! │  AddItem(n)        yes             quantity += n, same position         │
//! │                    no              append {sku, n} at the end           │
//! │  RemoveItem(n)     yes, qty > n    quantity -= n, same position         │
//! │                    yes, qty <= n   line item dropped                    │
//! │                    no              unchanged                            │
//! │  RemoveLineItem    any             every item with that SKU dropped     │
//! │  ClearCart         -               empty                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The input state is borrowed and never modified: every call builds a new
//! item list, replacing the matched element instead of editing it.

use crate::action::CartAction;
use crate::types::{CartState, LineItem};

/// Applies `action` to `state`, returning the next state.
///
/// Never fails: unknown SKUs are ignored and over-removal drops the item.
///
/// ## Example
/// ```rust
/// use cart_core::{reduce, CartAction, CartState, LineItem};
///
/// let state = reduce(&CartState::new(), &CartAction::add_item("A", 2));
/// let next = reduce(&state, &CartAction::remove_item("A", 5));
///
/// assert_eq!(state.items(), &[LineItem::new("A", 2)]);
/// assert!(next.is_empty());
/// ```
pub fn reduce(state: &CartState, action: &CartAction) -> CartState {
    match action {
        CartAction::AddItem { sku, quantity } => add_item(state, sku, *quantity),
        CartAction::RemoveItem { sku, quantity } => remove_item(state, sku, *quantity),
        CartAction::RemoveLineItem { sku } => remove_line_item(state, sku),
        CartAction::ClearCart => CartState::new(),
    }
}

fn add_item(state: &CartState, sku: &str, quantity: u32) -> CartState {
    // A zero-quantity line item would break the positive-quantity invariant.
    if quantity == 0 {
        return state.clone();
    }

    let items = state.items();
    if !state.contains(sku) {
        let mut next = Vec::with_capacity(items.len() + 1);
        next.extend_from_slice(items);
        next.push(LineItem::new(sku, quantity));
        return CartState::from_items_unchecked(next);
    }

    let next = items
        .iter()
        .map(|item| {
            if item.sku == sku {
                item.with_quantity(item.quantity.saturating_add(quantity))
            } else {
                item.clone()
            }
        })
        .collect();
    CartState::from_items_unchecked(next)
}

fn remove_item(state: &CartState, sku: &str, quantity: u32) -> CartState {
    let next = state
        .items()
        .iter()
        .filter_map(|item| {
            if item.sku != sku {
                return Some(item.clone());
            }
            match item.quantity.checked_sub(quantity) {
                Some(remaining) if remaining > 0 => Some(item.with_quantity(remaining)),
                _ => None,
            }
        })
        .collect();
    CartState::from_items_unchecked(next)
}

fn remove_line_item(state: &CartState, sku: &str) -> CartState {
    let next = state
        .items()
        .iter()
        .filter(|item| item.sku != sku)
        .cloned()
        .collect();
    CartState::from_items_unchecked(next)
}

// =============================================================================
// Unit Tests
// =============================================================================
