//! Layering of YAML configuration values.
//!
//! Local overrides are layered over the project config; later layers win.
//!
//! - mappings merge key by key, recursively
//! - sequences and scalars in the overlay replace the base value
//! - `null` in the overlay deletes the key

use serde_yaml::{Mapping, Value};

/// Layer `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let layered = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), layered);
    }
    Value::Mapping(merged)
}

/// Merge `configs` in order, first is the base and last wins.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, config| {
            deep_merge(&acc, config)
        })
}
