//! JSON merge helpers for layered configuration.

use serde_json::Value;

/// Keys under `dataset` that select the resource location.
const LOCATION_KEYS: &[&str] = &["path", "url"];

/// Merge one layer into the accumulated config.
///
/// A layer naming `dataset.path` or `dataset.url` replaces whichever location
/// the lower layers chose, so the two never coexist after a merge.
pub(super) fn merge_layer(base: &mut Value, overlay: &Value) {
    let overrides_location = overlay
        .get("dataset")
        .and_then(Value::as_object)
        .is_some_and(|dataset| LOCATION_KEYS.iter().any(|key| dataset.contains_key(*key)));
    if overrides_location && let Some(Value::Object(dataset)) = base.get_mut("dataset") {
        for key in LOCATION_KEYS {
            dataset.remove(*key);
        }
    }
    merge_json_values(base, overlay);
}

/// Merge overlay values into the base, recursively overriding objects.
///
/// Scalars and arrays from the overlay replace the base value outright.
pub(super) fn merge_json_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_json_values(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}
