//! # Cart Actions
//!
//! Descriptions of intended state transitions, consumed by the reducer.
//!
//! ## Wire Format
//! Actions serialize the way UI code dispatches them:
//! ```text
//! {"type":"ADD_ITEM","payload":{"sku":"COKE-330","quantity":2}}
//! {"type":"REMOVE_ITEM","payload":{"sku":"COKE-330"}}        ← quantity defaults to 1
//! {"type":"REMOVE_LINE_ITEM","payload":{"sku":"COKE-330"}}
//! {"type":"CLEAR_CART"}
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::DEFAULT_QUANTITY;

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

/// A cart state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add `quantity` units of `sku`, appending a new line item if needed.
    AddItem {
        sku: String,
        #[serde(default = "default_quantity")]
        #[ts(optional, as = "Option<u32>")]
        quantity: u32,
    },

    /// Take `quantity` units of `sku` away; the line item goes when it hits zero.
    RemoveItem {
        sku: String,
        #[serde(default = "default_quantity")]
        #[ts(optional, as = "Option<u32>")]
        quantity: u32,
    },

    /// Drop the whole line item for `sku`.
    RemoveLineItem { sku: String },

    /// Empty the cart.
    ClearCart,
}

impl CartAction {
    /// Creates an `AddItem` action.
    pub fn add_item(sku: impl Into<String>, quantity: u32) -> Self {
        CartAction::AddItem {
            sku: sku.into(),
            quantity,
        }
    }

    /// Creates a `RemoveItem` action.
    pub fn remove_item(sku: impl Into<String>, quantity: u32) -> Self {
        CartAction::RemoveItem {
            sku: sku.into(),
            quantity,
        }
    }

    /// Creates a `RemoveLineItem` action.
    pub fn remove_line_item(sku: impl Into<String>) -> Self {
        CartAction::RemoveLineItem { sku: sku.into() }
    }

    /// Creates a `ClearCart` action.
    pub fn clear_cart() -> Self {
        CartAction::ClearCart
    }

    /// Parses an action from its JSON wire form.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::CartAction;
    ///
    /// let action = CartAction::from_json(r#"{"type":"ADD_ITEM","payload":{"sku":"A"}}"#).unwrap();
    /// assert_eq!(action, CartAction::add_item("A", 1));
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(CoreError::InvalidAction)
    }

    /// Returns the wire tag of this action, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "ADD_ITEM",
            CartAction::RemoveItem { .. } => "REMOVE_ITEM",
            CartAction::RemoveLineItem { .. } => "REMOVE_LINE_ITEM",
            CartAction::ClearCart => "CLEAR_CART",
        }
    }

    /// Returns the SKU this action targets, if any.
    pub fn sku(&self) -> Option<&str> {
        match self {
            CartAction::AddItem { sku, .. }
            | CartAction::RemoveItem { sku, .. }
            | CartAction::RemoveLineItem { sku } => Some(sku),
            CartAction::ClearCart => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::TS;

    #[test]
    fn test_parse_add_item_with_quantity() {
        let action =
            CartAction::from_json(r#"{"type":"ADD_ITEM","payload":{"sku":"A","quantity":20}}"#)
                .unwrap();
        assert_eq!(action, CartAction::add_item("A", 20));
    }

    #[test]
    fn test_parse_defaults_quantity_to_one() {
        let add = CartAction::from_json(r#"{"type":"ADD_ITEM","payload":{"sku":"A"}}"#).unwrap();
        assert_eq!(add, CartAction::add_item("A", 1));

        let remove =
            CartAction::from_json(r#"{"type":"REMOVE_ITEM","payload":{"sku":"A"}}"#).unwrap();
        assert_eq!(remove, CartAction::remove_item("A", 1));
    }

    #[test]
    fn test_parse_remove_line_item_and_clear() {
        let action =
            CartAction::from_json(r#"{"type":"REMOVE_LINE_ITEM","payload":{"sku":"A"}}"#).unwrap();
        assert_eq!(action, CartAction::remove_line_item("A"));

        let action = CartAction::from_json(r#"{"type":"CLEAR_CART"}"#).unwrap();
        assert_eq!(action, CartAction::ClearCart);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let unknown = CartAction::from_json(r#"{"type":"ADD_ITEMS","payload":{"sku":"A"}}"#);
        assert!(matches!(unknown, Err(CoreError::InvalidAction(_))));

        let missing_sku = CartAction::from_json(r#"{"type":"ADD_ITEM","payload":{}}"#);
        assert!(missing_sku.is_err());

        let negative =
            CartAction::from_json(r#"{"type":"ADD_ITEM","payload":{"sku":"A","quantity":-1}}"#);
        assert!(negative.is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_string(&CartAction::add_item("A", 2)).unwrap();
        assert_eq!(json, r#"{"type":"ADD_ITEM","payload":{"sku":"A","quantity":2}}"#);
    }

    #[test]
    fn test_binding_marks_quantity_optional() {
        let decl = CartAction::decl();
        assert_eq!(decl.matches("quantity?: number").count(), 2, "{decl}");
        assert!(!decl.contains("quantity: number"), "{decl}");
    }

    #[test]
    fn test_kind_and_sku() {
        assert_eq!(CartAction::remove_item("A", 1).kind(), "REMOVE_ITEM");
        assert_eq!(CartAction::remove_line_item("B").sku(), Some("B"));
        assert_eq!(CartAction::clear_cart().sku(), None);
        assert_eq!(CartAction::clear_cart().kind(), "CLEAR_CART");
    }
}
