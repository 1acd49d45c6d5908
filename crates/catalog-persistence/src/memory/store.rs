//! Shared in-memory backing store

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Ordered, thread-safe item store.
///
/// Cloning the handle shares the underlying items, so a test can seed or
/// inspect the same store a repository works on.
#[derive(Debug)]
pub struct InMemoryStore<E> {
    items: Arc<RwLock<Vec<E>>>,
}

impl<E> InMemoryStore<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Vec<E>> {
        self.items.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Vec<E>> {
        self.items.write()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }
}

impl<E: Clone> InMemoryStore<E> {
    /// Copy of the current items
    pub fn snapshot(&self) -> Vec<E> {
        self.items.read().clone()
    }
}

impl<E> Clone for InMemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
