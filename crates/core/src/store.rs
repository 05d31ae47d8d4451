//! In-memory cat storage.
//!
//! [`CatStore`] is a cloneable handle onto one shared map from identifier to [`Cat`]. Clones
//! see the same data, so the handle can be passed to every request handler. Each operation
//! holds the lock only for its own duration; there are no multi-operation transactions.
//!
//! Nothing is persisted: the contents live as long as the last handle.

use crate::Cat;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Debug, Default)]
pub struct CatStore {
    cats: Arc<RwLock<HashMap<String, Cat>>>,
}

impl CatStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `cats`, each keyed by its own `id`.
    ///
    /// Later records replace earlier ones with the same `id`.
    pub fn from_cats(cats: impl IntoIterator<Item = Cat>) -> Self {
        let map = cats
            .into_iter()
            .map(|cat| (cat.id.clone(), cat))
            .collect::<HashMap<_, _>>();
        Self {
            cats: Arc::new(RwLock::new(map)),
        }
    }

    /// Inserts `cat` under its own `id`, returning any record it replaced.
    pub fn insert(&self, cat: Cat) -> Option<Cat> {
        tracing::debug!("store insert: {}", cat.id);
        self.write().insert(cat.id.clone(), cat)
    }

    /// Returns a copy of the record stored under `id`.
    pub fn get(&self, id: &str) -> Option<Cat> {
        self.read().get(id).cloned()
    }

    /// Removes and returns the record stored under `id`.
    pub fn remove(&self, id: &str) -> Option<Cat> {
        tracing::debug!("store remove: {}", id);
        self.write().remove(id)
    }

    /// Returns every stored identifier, in no particular order.
    pub fn ids(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every mutation is a single HashMap call, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Cat>> {
        self.cats.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Cat>> {
        self.cats.write().unwrap_or_else(PoisonError::into_inner)
    }
}
