//! # Store Error Types
//!
//! Errors raised while loading configuration or an initial cart.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CART_INITIAL_MODE=bogus ──► ConfigError::InvalidValue ──┐              │
//! │                                                          │              │
//! │  initial file unreadable ──► StoreError::Io ─────────────┤              │
//! │                                                          │              │
//! │  malformed JSON ───────────► StoreError::Json ───────────┼──► replay   │
//! │                                                          │    exits 1   │
//! │  duplicate SKU in file ────► CoreError::Validation ──────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store operations themselves never fail.

use std::path::PathBuf;

use cart_core::CoreError;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Errors from the store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Cart data failed to parse or validate.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Cart JSON is malformed.
    #[error("Invalid cart JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A file could not be read.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: StoreError = ConfigError::InvalidValue("CART_INITIAL_MODE".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for CART_INITIAL_MODE"
        );

        let err = StoreError::Io {
            path: PathBuf::from("cart.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read cart.json: not found");
    }
}
