//! Fluent construction of object nodes.

use crate::value::{Object, Value};

/// Builds an [`Object`] one field at a time.
///
/// `set` accepts anything convertible into a [`Value`] and returns the
/// builder for chaining. Construction ends with an explicit [`build`],
/// which makes every construction site auditable; the builder never
/// converts implicitly and no partial state is observable outside it.
///
/// # Examples
///
/// ```rust
/// use treecast::value::ObjectBuilder;
/// let node = ObjectBuilder::new()
///     .set("name", "Widgets")
///     .set("deprecated", false)
///     .build();
/// let object = node.as_object().unwrap();
/// assert_eq!(object.keys().collect::<Vec<_>>(), ["name", "deprecated"]);
/// ```
///
/// [`build`]: ObjectBuilder::build
#[derive(Debug, Clone, Default)]
pub struct ObjectBuilder {
    object: Object,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, or overwrites it in place if the key was already set.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.object.set(key, value);
        self
    }

    /// Finishes the builder, returning the object as a value node.
    pub fn build(self) -> Value {
        Value::Object(self.object)
    }

    /// Finishes the builder, returning the bare object.
    pub fn build_object(self) -> Object {
        self.object
    }
}
