//! Processed sub-schema registry and declaration ordering.
//!
//! The [`ProcessedRegistry`] binds a node signature to the name of an
//! already-emitted declaration. It only grows: the emitter registers each
//! sub-schema after translating it, and every later translation that meets
//! the same signature refers to the name instead of expanding the node.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::schema::Signature;
use crate::walker::SubSchema;

/// Append-only map from signature to declaration name.
#[derive(Debug, Clone, Default)]
pub struct ProcessedRegistry {
    bindings: HashMap<Signature, String>,
    /// Registration order.
    order: Vec<Signature>,
}

impl ProcessedRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `signature` to `name`.
    ///
    /// Returns `false` and leaves the registry unchanged if the signature is
    /// already bound.
    pub fn register(&mut self, signature: Signature, name: impl Into<String>) -> bool {
        if self.bindings.contains_key(&signature) {
            return false;
        }
        self.order.push(signature.clone());
        self.bindings.insert(signature, name.into());
        true
    }

    /// Look up the declaration name bound to a signature.
    pub fn lookup(&self, signature: &Signature) -> Option<&str> {
        self.bindings.get(signature).map(String::as_str)
    }

    /// Check if a signature is registered.
    pub fn contains(&self, signature: &Signature) -> bool {
        self.bindings.contains_key(signature)
    }

    /// Get the number of registered declarations.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Declaration names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter_map(|sig| self.bindings.get(sig).map(String::as_str))
    }
}

/// Order sub-schemas by their deepest occurrence, deepest first.
///
/// Every occurrence of a shape nested in another extracted shape lies
/// strictly deeper than that occurrence of its container, so sorting on
/// the deepest occurrence registers a shape before anything containing it.
/// The sort is stable: entries at equal depth keep discovery order.
pub fn order_by_depth(mut entries: Vec<SubSchema<'_>>) -> Vec<SubSchema<'_>> {
    entries.sort_by_key(|entry| Reverse(entry.depth));
    entries
}
