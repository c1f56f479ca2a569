use serde_json::Value;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Derives a short deterministic identifier from `value`.
///
/// Strings are returned unchanged and other scalars use their JSON text.
/// Mappings and sequences are reduced to an 8-digit hex digest of their
/// compact JSON form; sequences are order-sensitive.
#[must_use]
pub fn key_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => format!("{:08x}", fnv1a(value.to_string().as_bytes())),
    }
}

fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalars_keep_their_text() {
        assert_eq!(key_of(&json!("light")), "light");
        assert_eq!(key_of(&json!(3)), "3");
        assert_eq!(key_of(&json!(true)), "true");
    }

    #[test]
    fn sequences_are_order_sensitive() {
        let forward = key_of(&json!(["#FF0000", "red"]));
        let backward = key_of(&json!(["red", "#FF0000"]));
        assert_eq!(forward.len(), 8);
        assert_ne!(forward, backward);
        assert_eq!(forward, key_of(&json!(["#FF0000", "red"])));
    }
}
