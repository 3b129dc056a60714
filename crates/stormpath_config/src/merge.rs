//! Deep merge of configuration trees.
//!
//! This is the single merge primitive of the crate. Every loading and
//! extending strategy goes through [`deep_merge`] (usually via
//! [`crate::Configuration::merge`]), so precedence is always "later source
//! wins on conflicting leaves, nested mappings combine key by key".

use serde_json::{Map, Value};

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;

/// Merges `overlay` into `base`.
///
/// For every key of `overlay`:
/// - when `base` holds a mapping under the same key and the overlay value is a
///   mapping too, the two mappings are merged recursively;
/// - otherwise the overlay value replaces whatever `base` held. Scalars,
///   sequences and type mismatches are full replacements; sequences are never
///   concatenated.
///
/// `overlay` is only borrowed; replaced values are cloned out of it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use stormpath_config::merge::deep_merge;
///
/// let mut base = json!({"a": 1, "b": {"x": 1, "y": 2}});
/// let overlay = json!({"b": {"y": 3, "z": 4}, "c": [1, 2]});
///
/// deep_merge(base.as_object_mut().unwrap(), overlay.as_object().unwrap());
///
/// assert_eq!(base, json!({"a": 1, "b": {"x": 1, "y": 3, "z": 4}, "c": [1, 2]}));
/// ```
pub fn deep_merge(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, overlay_value) in overlay {
        match (base.get_mut(key), overlay_value) {
            (Some(Value::Object(base_map)), Value::Object(overlay_map)) => {
                deep_merge(base_map, overlay_map);
            }
            _ => {
                base.insert(key.clone(), overlay_value.clone());
            }
        }
    }
}
