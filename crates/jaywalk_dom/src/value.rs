//! The JSON value enum and the `serde_json` bridge.

use std::fmt;

use crate::array::JsonArray;
use crate::error::DomError;
use crate::number::Number;
use crate::object::JsonObject;

/// Kind of a [`JsonValue`], used for dispatch and for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Lowercase name as it appears in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON value.
///
/// Primitives are stored inline; arrays and objects are shared handles,
/// so cloning a `JsonValue` never deep-copies a subtree. That is what
/// lets one container appear under several parents, or under itself,
/// which a pure tree representation cannot express.
///
/// Equality is structural for primitives and identity-based for
/// containers: two objects are equal only if they are the same object.
/// Identity equality keeps `==` total even on cyclic documents.
#[derive(Clone)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

impl JsonValue {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            JsonValue::Null => ValueKind::Null,
            JsonValue::Bool(_) => ValueKind::Bool,
            JsonValue::Number(_) => ValueKind::Number,
            JsonValue::String(_) => ValueKind::String,
            JsonValue::Array(_) => ValueKind::Array,
            JsonValue::Object(_) => ValueKind::Object,
        }
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` for arrays and objects.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// Borrows the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Copies out the boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Copies out the numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            JsonValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Reads a number as `i64`, truncating floats. See [`Number::as_i64`].
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().map(Number::as_i64)
    }

    /// Reads a number as `f64`, widening integers. See [`Number::as_f64`].
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// Borrows the array handle, if this is an array.
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Borrows the object handle, if this is an object.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(value) => Some(value),
            _ => None,
        }
    }

    /// Builds a document from a `serde_json` tree.
    ///
    /// Member order is preserved. Numbers that fit `i64` become
    /// [`Number::Int`]; everything else becomes [`Number::Float`].
    pub fn from_serde(value: serde_json::Value) -> JsonValue {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(value) => JsonValue::Bool(value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => JsonValue::Number(Number::Int(int)),
                None => number
                    .as_f64()
                    .map(Number::Float)
                    .map_or(JsonValue::Null, JsonValue::Number),
            },
            serde_json::Value::String(value) => JsonValue::String(value),
            serde_json::Value::Array(elements) => {
                let array = JsonArray::new();
                for element in elements {
                    array.push(JsonValue::from_serde(element));
                }
                JsonValue::Array(array)
            }
            serde_json::Value::Object(members) => {
                let object = JsonObject::new();
                for (key, member) in members {
                    object.insert(key, JsonValue::from_serde(member));
                }
                JsonValue::Object(object)
            }
        }
    }

    /// Renders this document as a `serde_json` tree.
    ///
    /// Fails with [`DomError::Cycle`] if a container contains itself at
    /// any depth. Acyclic sharing is fine: an object reachable through
    /// two paths is serialized once per path. Non-finite floats render as
    /// `null`.
    pub fn to_serde(&self) -> Result<serde_json::Value, DomError> {
        self.to_serde_inner("", &mut Vec::new())
    }

    /// `ancestors` holds the identities of the containers currently being
    /// rendered, entry on descent and exit on return, so only true
    /// back-references trip the cycle check.
    fn to_serde_inner(
        &self,
        path: &str,
        ancestors: &mut Vec<usize>,
    ) -> Result<serde_json::Value, DomError> {
        match self {
            JsonValue::Null => Ok(serde_json::Value::Null),
            JsonValue::Bool(value) => Ok(serde_json::Value::Bool(*value)),
            JsonValue::Number(Number::Int(value)) => Ok(serde_json::Value::from(*value)),
            JsonValue::Number(Number::Float(value)) => Ok(serde_json::Number::from_f64(*value)
                .map_or(serde_json::Value::Null, serde_json::Value::Number)),
            JsonValue::String(value) => Ok(serde_json::Value::String(value.clone())),
            JsonValue::Array(array) => {
                if ancestors.contains(&array.address()) {
                    return Err(DomError::Cycle {
                        path: path.to_string(),
                    });
                }
                ancestors.push(array.address());
                let mut elements = Vec::with_capacity(array.len());
                for index in 0..array.len() {
                    let Some(element) = array.get(index) else {
                        continue;
                    };
                    let child_path = format!("{path}[{index}]");
                    elements.push(element.to_serde_inner(&child_path, ancestors)?);
                }
                ancestors.pop();
                Ok(serde_json::Value::Array(elements))
            }
            JsonValue::Object(object) => {
                if ancestors.contains(&object.address()) {
                    return Err(DomError::Cycle {
                        path: path.to_string(),
                    });
                }
                ancestors.push(object.address());
                let mut members = serde_json::Map::new();
                for key in object.keys() {
                    let Some(member) = object.get(&key) else {
                        continue;
                    };
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}/{key}")
                    };
                    members.insert(key, member.to_serde_inner(&child_path, ancestors)?);
                }
                ancestors.pop();
                Ok(serde_json::Value::Object(members))
            }
        }
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::Number(a), JsonValue::Number(b)) => a == b,
            (JsonValue::String(a), JsonValue::String(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => a.ptr_eq(b),
            (JsonValue::Object(a), JsonValue::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for JsonValue {
    /// Compact JSON rendering, or a `<cyclic document>` marker when the
    /// value cannot be rendered as a tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_serde() {
            Ok(tree) => write!(f, "{tree}"),
            Err(DomError::Cycle { .. }) => f.write_str("<cyclic document>"),
        }
    }
}

impl fmt::Debug for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<()> for JsonValue {
    fn from(_: ()) -> Self {
        JsonValue::Null
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(Number::Int(i64::from(value)))
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(Number::Int(value))
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Number(Number::Int(i64::from(value)))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(Number::Float(value))
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        JsonValue::from_serde(value)
    }
}
