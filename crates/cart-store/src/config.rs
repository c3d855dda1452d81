//! # Store Configuration
//!
//! Decides what a fresh store starts with.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CART_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! - `CART_INITIAL_ITEMS`: path to a JSON array of line items
//!   (`[{"sku":"A","quantity":2}]`); unset means an empty cart
//! - `CART_INITIAL_MODE`: `strict` (default) rejects duplicate SKUs and zero
//!   quantities, `merge` sums duplicates and drops zero quantities

use std::env;
use std::fs;
use std::path::PathBuf;

use cart_core::{CartState, LineItem};
use tracing::info;

use crate::error::{ConfigError, StoreError, StoreResult};
use crate::store::CartStore;

/// How a caller-supplied initial list is turned into a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialMode {
    /// Reject lists that break the cart invariants.
    #[default]
    Strict,

    /// Fold the list through the reducer.
    Merge,
}

impl InitialMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(InitialMode::Strict),
            "merge" => Some(InitialMode::Merge),
            _ => None,
        }
    }

    /// Builds a cart from `items` according to this mode.
    pub fn build(self, items: Vec<LineItem>) -> StoreResult<CartState> {
        match self {
            InitialMode::Strict => Ok(CartState::try_from_items(items)?),
            InitialMode::Merge => Ok(CartState::from_items_merged(items)),
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON file holding the initial line items
    pub initial_items_path: Option<PathBuf>,

    /// How the initial list is validated
    pub initial_mode: InitialMode,
}

impl StoreConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let initial_items_path = lookup("CART_INITIAL_ITEMS")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let initial_mode = match lookup("CART_INITIAL_MODE") {
            Some(value) => InitialMode::parse(&value)
                .ok_or_else(|| ConfigError::InvalidValue("CART_INITIAL_MODE".to_string()))?,
            None => InitialMode::default(),
        };

        Ok(StoreConfig {
            initial_items_path,
            initial_mode,
        })
    }

    /// Reads the configured initial cart, or an empty one if none is set.
    pub fn initial_state(&self) -> StoreResult<CartState> {
        let Some(path) = &self.initial_items_path else {
            return Ok(CartState::new());
        };

        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let state = parse_initial_items(&json, self.initial_mode)?;

        info!(
            path = %path.display(),
            mode = ?self.initial_mode,
            line_items = state.line_items_count(),
            "Loaded initial cart"
        );
        Ok(state)
    }

    /// Creates a store holding the configured initial cart.
    pub fn build_store(&self) -> StoreResult<CartStore> {
        Ok(CartStore::with_state(self.initial_state()?))
    }
}

/// Parses a JSON array of line items into a cart.
pub fn parse_initial_items(json: &str, mode: InitialMode) -> StoreResult<CartState> {
    let items: Vec<LineItem> = serde_json::from_str(json)?;
    mode.build(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{CoreError, ValidationError};
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(config.initial_state().unwrap().is_empty());
    }

    #[test]
    fn test_reads_variables() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("CART_INITIAL_ITEMS", "./cart.json"),
            ("CART_INITIAL_MODE", "Merge"),
        ]))
        .unwrap();

        assert_eq!(config.initial_items_path, Some(PathBuf::from("./cart.json")));
        assert_eq!(config.initial_mode, InitialMode::Merge);
    }

    #[test]
    fn test_blank_path_means_no_file() {
        let config = StoreConfig::from_lookup(lookup_from(&[("CART_INITIAL_ITEMS", "  ")])).unwrap();
        assert_eq!(config.initial_items_path, None);
    }

    #[test]
    fn test_invalid_mode() {
        let err = StoreConfig::from_lookup(lookup_from(&[("CART_INITIAL_MODE", "lenient")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CART_INITIAL_MODE");
    }

    #[test]
    fn test_parse_strict() {
        let state = parse_initial_items(
            r#"[{"sku":"A","quantity":2},{"sku":"B","quantity":1}]"#,
            InitialMode::Strict,
        )
        .unwrap();
        assert_eq!(state.items_count(), 3);

        let err = parse_initial_items(
            r#"[{"sku":"A","quantity":2},{"sku":"A","quantity":1}]"#,
            InitialMode::Strict,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_parse_merge() {
        let state = parse_initial_items(
            r#"[{"sku":"A","quantity":2},{"sku":"B","quantity":0},{"sku":"A","quantity":1}]"#,
            InitialMode::Merge,
        )
        .unwrap();
        assert_eq!(state.items(), &[LineItem::new("A", 3)]);
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_initial_items("not json", InitialMode::Strict).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    fn write_items(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_build_store_from_file() {
        let file = write_items(
            r#"[{"sku":"A","quantity":2},{"sku":"B","quantity":0},{"sku":"A","quantity":1}]"#,
        );

        let merge = StoreConfig::from_lookup(lookup_from(&[
            ("CART_INITIAL_ITEMS", file.path().to_str().unwrap()),
            ("CART_INITIAL_MODE", "merge"),
        ]))
        .unwrap();
        let store = merge.build_store().unwrap();
        assert_eq!(store.items(), &[LineItem::new("A", 3)]);
        assert_eq!(store.revision(), 0);

        let strict = StoreConfig {
            initial_mode: InitialMode::Strict,
            ..merge
        };
        assert!(matches!(
            strict.build_store(),
            Err(StoreError::Core(CoreError::Validation(_)))
        ));
    }

    #[test]
    fn test_build_store_from_file_strict() {
        let file = write_items(r#"[{"sku":"A","quantity":2},{"sku":"B","quantity":5}]"#);
        let config = StoreConfig {
            initial_items_path: Some(file.path().to_path_buf()),
            initial_mode: InitialMode::Strict,
        };

        let store = config.build_store().unwrap();
        assert_eq!(store.items(), &[LineItem::new("A", 2), LineItem::new("B", 5)]);
        assert_eq!(store.items_count(), 7);
    }

    #[test]
    fn test_missing_file() {
        let config = StoreConfig {
            initial_items_path: Some(PathBuf::from("/nonexistent/cart-initial-items.json")),
            initial_mode: InitialMode::Strict,
        };
        assert!(matches!(config.initial_state(), Err(StoreError::Io { .. })));
    }
}
