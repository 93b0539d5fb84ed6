//! The generic value tree.
//!
//! Every document a renderer ever sees is built from exactly five node
//! kinds: null, boolean, string, array, and ordered object. Renderers
//! (JSON, YAML, ...) consume this tree with no knowledge of the source
//! grammar; the casting layer guarantees it never produces anything else.
//!
//! Trees are finite and acyclic by construction: nodes are only ever built
//! bottom-up and a parent exclusively owns its children. Discarding the
//! root discards the whole tree.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

pub mod builder;
pub mod object;

pub use builder::ObjectBuilder;
pub use object::Object;

/// A single node in the generic value tree.
///
/// # Examples
///
/// ```rust
/// use treecast::value::Value;
/// let v = Value::String("widget".to_string());
/// assert_eq!(v.kind_name(), "String");
/// assert_eq!(v.as_str(), Some("widget"));
/// assert!(Value::default().is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Returns the kind of the node as a string, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Returns true if the node is Null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the contained bool if this is a Bool node.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the contained text if this is a String node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained elements if this is an Array node.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the contained object if this is an Object node.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

// ============================================================================
// CONVERSIONS - everything the builder accepts
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

// ============================================================================
// RENDERING - transparent serde view for downstream text renderers
// ============================================================================

/// Nodes serialize structurally: objects as maps in insertion order, arrays
/// as sequences, null as a unit. `serde_json` and `serde_yaml` therefore act
/// as renderers without any treecast-specific code.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
