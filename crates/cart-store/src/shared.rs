//! # Shared Cart Handle
//!
//! A cloneable handle to one [`CartStore`], handed explicitly to every
//! component that needs the cart.
//!
//! ## Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   let cart = SharedCart::new(CartStore::new());                        │
//! │                                                                         │
//! │   ProductList::new(cart.clone())   CartBadge::new(cart.clone())         │
//! │          │                                │                             │
//! │          │ dispatch(ADD_ITEM)             │ view().items_count          │
//! │          ▼                                ▼                             │
//! │   ┌──────────────────────────────────────────────────────────────┐     │
//! │   │            Arc<Mutex<CartStore>>  (one store)                │     │
//! │   └──────────────────────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Uses `Arc<Mutex<CartStore>>` so the handle can cross threads. Dispatches
//! are applied one at a time in lock order. A poisoned lock is recovered:
//! the store only ever swaps whole snapshots, so it is never half-updated.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cart_core::{CartAction, CartState};

use crate::store::{CartStore, CartView};

/// Cloneable handle to a single cart store.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    store: Arc<Mutex<CartStore>>,
}

impl SharedCart {
    /// Wraps a store in a shareable handle.
    pub fn new(store: CartStore) -> Self {
        SharedCart {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use cart_store::{CartStore, SharedCart};
    ///
    /// let cart = SharedCart::new(CartStore::new());
    /// let count = cart.with_cart(|store| store.items_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use cart_store::{CartStore, SharedCart};
    ///
    /// let cart = SharedCart::new(CartStore::new());
    /// cart.with_cart_mut(|store| store.add_item_quantity("COKE-330", 2));
    /// assert!(cart.with_cart(|store| store.is_in_cart("COKE-330")));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }

    /// Dispatches an action and returns the resulting view.
    pub fn dispatch(&self, action: CartAction) -> CartView {
        self.with_cart_mut(|store| {
            store.dispatch(action);
            store.view()
        })
    }

    /// Returns the current immutable snapshot.
    pub fn snapshot(&self) -> Arc<CartState> {
        self.with_cart(CartStore::snapshot)
    }

    /// Returns the current read model.
    pub fn view(&self) -> CartView {
        self.with_cart(CartStore::view)
    }
}

impl From<CartStore> for SharedCart {
    fn from(store: CartStore) -> Self {
        SharedCart::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::LineItem;
    use std::thread;

    #[test]
    fn test_clones_share_one_store() {
        let cart = SharedCart::new(CartStore::new());
        let badge = cart.clone();

        cart.dispatch(CartAction::add_item("A", 2));

        assert_eq!(badge.view().items_count, 2);
        assert_eq!(badge.snapshot().items(), &[LineItem::new("A", 2)]);
    }

    #[test]
    fn test_dispatch_returns_view() {
        let cart = SharedCart::default();
        cart.dispatch(CartAction::add_item("A", 1));
        let view = cart.dispatch(CartAction::add_item("B", 3));

        assert_eq!(view.line_items_count, 2);
        assert_eq!(view.items_count, 4);
        assert_eq!(view.revision, 2);
    }

    #[test]
    fn test_handle_crosses_threads() {
        let cart = SharedCart::new(CartStore::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cart = cart.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        cart.dispatch(CartAction::add_item("A", 1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let view = cart.view();
        assert_eq!(view.items, vec![LineItem::new("A", 100)]);
        assert_eq!(view.revision, 100);
    }
}
