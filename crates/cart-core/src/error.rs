//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  ├── CoreError        - Action parsing / construction failures         │
//! │  └── ValidationError  - Initial item list violates an invariant        │
//! │                                                                         │
//! │  cart-store errors (separate crate)                                    │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── StoreError       - What the replay binary reports                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reducer itself has no error type: every action is applied
//! permissively. Errors only appear where outside data enters the cart.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised when outside data is turned into cart values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The action JSON could not be parsed.
    ///
    /// ## When This Occurs
    /// - Unknown `type` tag (e.g. `"ADD_ITEMS"`)
    /// - Missing `sku` in the payload
    /// - Negative or fractional quantity
    #[error("Invalid cart action: {0}")]
    InvalidAction(#[source] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Invariant violations found in a caller-supplied item list.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., the same SKU listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
