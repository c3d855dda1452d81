//! # Validation Module
//!
//! Invariant checks for item lists that come from outside the reducer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Items Come From                              │
//! │                                                                         │
//! │  Reducer output                                                         │
//! │  └── Invariants hold by construction, never re-checked                 │
//! │                                                                         │
//! │  Caller-supplied initial list / JSON snapshot                          │
//! │  └── THIS MODULE: quantity > 0, SKU unique                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::validation::{validate_line_items, validate_quantity};
//! use cart_core::LineItem;
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_line_items(&[LineItem::new("A", 1), LineItem::new("A", 1)]).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::LineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stored quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates a whole line item list.
///
/// ## Rules
/// - Every quantity passes [`validate_quantity`]
/// - No SKU appears twice
///
/// The first offending item (in list order) is reported.
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        validate_quantity(item.quantity).map_err(|_| ValidationError::MustBePositive {
            field: format!("quantity of {}", item.sku),
        })?;

        if !seen.insert(item.sku.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "sku".to_string(),
                value: item.sku.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(u32::MAX).is_ok());

        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_line_items() {
        assert!(validate_line_items(&[]).is_ok());
        assert!(validate_line_items(&[LineItem::new("A", 1), LineItem::new("B", 3)]).is_ok());
    }

    #[test]
    fn test_validate_line_items_reports_sku_of_zero_quantity() {
        let err = validate_line_items(&[LineItem::new("A", 1), LineItem::new("B", 0)]).unwrap_err();
        assert_eq!(err.to_string(), "quantity of B must be positive");
    }

    #[test]
    fn test_validate_line_items_reports_first_duplicate() {
        let err = validate_line_items(&[
            LineItem::new("A", 1),
            LineItem::new("B", 1),
            LineItem::new("B", 2),
            LineItem::new("A", 2),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "sku 'B' already exists");
    }
}
