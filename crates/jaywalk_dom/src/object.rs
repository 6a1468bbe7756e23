//! Insertion-ordered JSON object.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::value::JsonValue;

/// A JSON object: an insertion-ordered map from member name to value.
///
/// `JsonObject` is a cheap handle; clones share the same storage, so a
/// document can reference one object from several places (including
/// cyclically) and a write through any handle is visible through all of
/// them. The lock is held only for the duration of a single call, which
/// keeps every method safe to use while other threads mutate the same
/// object.
#[derive(Clone, Default)]
pub struct JsonObject {
    members: Arc<RwLock<IndexMap<String, JsonValue>>>,
}

impl JsonObject {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    /// Returns `true` if the object has no members.
    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    /// Returns `true` if a member named `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.members.read().contains_key(key)
    }

    /// Looks up the member named `key`.
    ///
    /// Containers come back as aliasing handles, primitives as copies.
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        self.members.read().get(key).cloned()
    }

    /// Inserts or overwrites the member named `key`, returning the
    /// displaced value. An overwritten key keeps its original position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
        // Convert before locking; `Into` impls are arbitrary caller code.
        let key = key.into();
        let value = value.into();
        self.members.write().insert(key, value)
    }

    /// Removes the member named `key`, preserving the order of the
    /// remaining members.
    pub fn remove(&self, key: &str) -> Option<JsonValue> {
        self.members.write().shift_remove(key)
    }

    /// Snapshot of the member names in insertion order.
    ///
    /// The snapshot is detached: mutating the object afterwards does not
    /// change it. Traversal iterates a snapshot and refetches each member
    /// live, so a concurrent writer can at worst make individual entries
    /// unreadable, never corrupt the iteration itself.
    pub fn keys(&self) -> Vec<String> {
        self.members.read().keys().cloned().collect()
    }

    /// Returns `true` if both handles share the same storage.
    pub fn ptr_eq(&self, other: &JsonObject) -> bool {
        Arc::ptr_eq(&self.members, &other.members)
    }

    /// Identity of the underlying storage, stable for as long as any
    /// handle to it lives. Keys the identity-based visited set used for
    /// cycle detection.
    pub fn address(&self) -> usize {
        Arc::as_ptr(&self.members) as usize
    }
}

impl<K, V> FromIterator<(K, V)> for JsonObject
where
    K: Into<String>,
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let object = JsonObject::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl fmt::Debug for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&JsonValue::Object(self.clone()), f)
    }
}
