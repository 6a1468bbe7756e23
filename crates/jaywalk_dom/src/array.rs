//! JSON array.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::value::JsonValue;

/// A JSON array with the same shared-handle semantics as
/// [`JsonObject`](crate::JsonObject): clones alias the same storage and
/// the lock is scoped to a single call.
#[derive(Clone, Default)]
pub struct JsonArray {
    elements: Arc<RwLock<Vec<JsonValue>>>,
}

impl JsonArray {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    /// Returns `true` if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Looks up the element at `index`.
    ///
    /// Containers come back as aliasing handles, primitives as copies.
    pub fn get(&self, index: usize) -> Option<JsonValue> {
        self.elements.read().get(index).cloned()
    }

    /// Appends `value`.
    pub fn push(&self, value: impl Into<JsonValue>) {
        // Convert before locking; `Into` impls are arbitrary caller code.
        let value = value.into();
        self.elements.write().push(value);
    }

    /// Replaces the element at `index`, returning `false` if the index is
    /// out of bounds.
    pub fn set(&self, index: usize, value: impl Into<JsonValue>) -> bool {
        let value = value.into();
        let mut elements = self.elements.write();
        match elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the element at `index`, shifting the elements
    /// after it, or `None` if the index is out of bounds.
    pub fn remove(&self, index: usize) -> Option<JsonValue> {
        let mut elements = self.elements.write();
        if index < elements.len() {
            Some(elements.remove(index))
        } else {
            None
        }
    }

    /// Returns `true` if both handles share the same storage.
    pub fn ptr_eq(&self, other: &JsonArray) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements)
    }

    /// Identity of the underlying storage. See
    /// [`JsonObject::address`](crate::JsonObject::address).
    pub fn address(&self) -> usize {
        Arc::as_ptr(&self.elements) as usize
    }
}

impl<V: Into<JsonValue>> FromIterator<V> for JsonArray {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let array = JsonArray::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl fmt::Debug for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&JsonValue::Array(self.clone()), f)
    }
}
