//! The traversal node.

use std::fmt;

use jaywalk_dom::{JsonObject, JsonValue, ValueKind};

use crate::error::WalkError;

/// One visited position in a document.
///
/// A node pairs the value found at a position with enough addressing
/// context to name it ([`path`](JsonNode::path)) and to write back to it
/// ([`update_value`](JsonNode::update_value)). The value is captured when
/// the position is discovered; a container value is an aliasing handle,
/// so reading through it always observes the container's current state,
/// while a primitive is a copy frozen at discovery time.
///
/// Nodes are only produced by walks; see [`Walk`](crate::Walk).
#[derive(Clone)]
pub struct JsonNode {
    path: String,
    key: String,
    value: JsonValue,
    parent: Option<JsonObject>,
}

impl JsonNode {
    pub(crate) fn new(
        path: String,
        key: String,
        value: JsonValue,
        parent: Option<JsonObject>,
    ) -> Self {
        Self {
            path,
            key,
            value,
            parent,
        }
    }

    /// Full path of this node from the traversal root, e.g.
    /// `book[0]/title`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment: the member name, or the decimal index for an
    /// array element.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value captured at discovery.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// The object this node is a member of. Array elements carry no
    /// parent and are not writable through the node.
    pub fn parent(&self) -> Option<&JsonObject> {
        self.parent.as_ref()
    }

    /// Kind of the captured value.
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Returns `true` when the captured value is a primitive.
    pub fn is_leaf(&self) -> bool {
        !self.value.is_container()
    }

    /// Returns `true` when the captured value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self.value, JsonValue::Object(_))
    }

    /// Returns `true` when the captured value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self.value, JsonValue::Array(_))
    }

    /// Borrows the string payload.
    pub fn string_value(&self) -> Result<&str, WalkError> {
        self.value
            .as_str()
            .ok_or_else(|| self.mismatch(ValueKind::String))
    }

    /// Reads a numeric payload as `i64`, truncating a float toward zero.
    pub fn int_value(&self) -> Result<i64, WalkError> {
        self.value
            .as_i64()
            .ok_or_else(|| self.mismatch(ValueKind::Number))
    }

    /// Reads a numeric payload as `f64`, widening an integer.
    pub fn float_value(&self) -> Result<f64, WalkError> {
        self.value
            .as_f64()
            .ok_or_else(|| self.mismatch(ValueKind::Number))
    }

    /// Reads a boolean payload.
    pub fn bool_value(&self) -> Result<bool, WalkError> {
        self.value
            .as_bool()
            .ok_or_else(|| self.mismatch(ValueKind::Bool))
    }

    /// Writes `new_value` into the parent object under this node's key.
    ///
    /// Returns `false` without writing when the node has no parent (array
    /// elements, and any node whose container is not an object). The
    /// write goes to the live parent: if the member was removed after
    /// discovery, it is re-added.
    pub fn update_value(&self, new_value: impl Into<JsonValue>) -> bool {
        match &self.parent {
            Some(parent) => {
                parent.insert(self.key.as_str(), new_value);
                true
            }
            None => false,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> WalkError {
        WalkError::TypeMismatch {
            expected,
            actual: self.value.kind(),
        }
    }
}

impl fmt::Debug for JsonNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonNode")
            .field("path", &self.path)
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
