use serde_json::Value;

/// Returns a structurally independent copy of `value`.
///
/// `Value` owns its whole tree, so the copy never shares a mapping or a
/// sequence with the source. Static fragment tables go through this before
/// any merge touches them.
#[must_use]
pub fn deep_clone(value: &Value) -> Value {
    value.clone()
}

/// Deep-merges `source` into `target` and returns `target`.
///
/// - sequence + sequence: `source` items are appended after `target` items
/// - mapping + mapping: merged key by key, keys only in `source` are moved in
/// - anything else: `source` replaces `target`
///
/// Keys present only in `target` are left untouched. Merge order matters:
/// later calls win scalar conflicts and sequences accumulate in call order.
pub fn merge_objects(target: &mut Value, source: Value) -> &mut Value {
    match (&mut *target, source) {
        (Value::Array(items), Value::Array(incoming)) => items.extend(incoming),
        (Value::Object(entries), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match entries.get_mut(&key) {
                    Some(existing) => {
                        merge_objects(existing, value);
                    }
                    None => {
                        entries.insert(key, value);
                    }
                }
            }
        }
        (slot, replacement) => *slot = replacement,
    }
    target
}
