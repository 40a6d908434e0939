//! Multi-key ordering over heterogeneous scan results.
//!
//! Commands register named comparators once at process start on a
//! [`KeyRegistry`], then resolve a caller-supplied priority list into a
//! [`SortChain`] per invocation. The registry is an explicit value
//! passed by reference into commands; it is never global state.

use std::cmp::Ordering;

use tracing::warn;

use crate::error::RenderError;

/// Total pairwise ordering over two items of a fixed type.
pub type KeyFn<T> = fn(&T, &T) -> Ordering;

/// Mapping from symbolic sort-key name to comparator.
///
/// Populated during initialization and read-only once commands begin
/// executing.
pub struct KeyRegistry<T> {
    keys: Vec<(&'static str, KeyFn<T>)>,
}

impl<T> std::fmt::Debug for KeyRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyRegistry")
            .field("keys", &self.keys.iter().map(|(name, _)| *name).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl<T> Default for KeyRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyRegistry<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Register a comparator under a symbolic name.
    ///
    /// Re-registering a name replaces the previous comparator.
    pub fn register(&mut self, name: &'static str, key: KeyFn<T>) {
        if let Some(slot) = self.keys.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = key;
        } else {
            self.keys.push((name, key));
        }
    }

    /// Look up a comparator by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<KeyFn<T>> {
        self.keys
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, key)| *key)
    }

    /// Registered key names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keys.iter().map(|(name, _)| *name)
    }

    /// Resolve a priority list of key names into a sort chain.
    ///
    /// Unknown names are skipped so existing caller flag strings keep
    /// working; each skip is logged. A chain where nothing resolved is
    /// rejected by [`SortChain::sort`].
    #[must_use]
    pub fn order_by(&self, names: &[&str]) -> SortChain<T> {
        let mut chain = Vec::with_capacity(names.len());
        for name in names {
            match self.get(name) {
                Some(key) => chain.push(key),
                None => warn!(key = %name, "skipping unregistered sort key"),
            }
        }
        SortChain { chain }
    }
}

/// Ordered chain of comparators forming one lexicographic total order.
pub struct SortChain<T> {
    chain: Vec<KeyFn<T>>,
}

impl<T> std::fmt::Debug for SortChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortChain")
            .field("len", &self.chain.len())
            .finish_non_exhaustive()
    }
}

impl<T> SortChain<T> {
    /// Number of resolved comparators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Whether no requested key resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Stable in-place sort under the composite order.
    ///
    /// Comparators are evaluated in priority order; the first decisive
    /// result wins. Items equal under every key keep their input order
    /// (the underlying sort is stable), so output is deterministic for
    /// a fixed input order and key list.
    ///
    /// An empty chain is a caller error, not an allowed state.
    pub fn sort(&self, items: &mut [T]) -> Result<(), RenderError> {
        if self.chain.is_empty() {
            return Err(RenderError::EmptySortChain);
        }
        items.sort_by(|a, b| {
            for key in &self.chain {
                match key(a, b) {
                    Ordering::Equal => {}
                    decisive => return decisive,
                }
            }
            Ordering::Equal
        });
        Ok(())
    }
}
