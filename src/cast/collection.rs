//! Ordered sequence to array-node mapping.
//!
//! Empty input always yields an empty array node, never null and never an
//! omission; whether to drop the whole field is the caller's decision.

use crate::cast::ToValue;
use crate::value::Value;

/// Maps every element through `convert`, preserving order.
pub fn map<T>(items: &[T], convert: impl Fn(&T) -> Value) -> Value {
    Value::Array(items.iter().map(convert).collect())
}

/// Maps elements satisfying `keep` through `convert`; skipped elements
/// contribute nothing, not even a placeholder.
pub fn map_filtered<T>(
    items: &[T],
    convert: impl Fn(&T) -> Value,
    keep: impl Fn(&T) -> bool,
) -> Value {
    Value::Array(
        items
            .iter()
            .filter(|item| keep(item))
            .map(|item| convert(item))
            .collect(),
    )
}

/// Maps a sequence through the element type's own casting rule.
pub fn map_values<T: ToValue>(items: &[T]) -> Value {
    map(items, T::to_value)
}
