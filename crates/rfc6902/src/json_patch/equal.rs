use serde_json::{Number, Value};

/// Deep equality for the `test` operation.
///
/// Structural like `==`, except that numbers compare by value: `1` and
/// `1.0` are equal. Object member order is ignored.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rfc6902::json_patch::json_equal;
///
/// assert!(json_equal(&json!({"a": [1, 2.0]}), &json!({"a": [1.0, 2]})));
/// assert!(!json_equal(&json!([1]), &json!(["1"])));
/// ```
pub fn json_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(a, b)| json_equal(a, b))
        }
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            obj_a.len() == obj_b.len()
                && obj_a
                    .iter()
                    .all(|(key, val_a)| obj_b.get(key).is_some_and(|val_b| json_equal(val_a, val_b)))
        }
        _ => false,
    }
}

/// Integers compare exactly; anything involving a float goes through `f64`.
fn number_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    if a.is_f64() || b.is_f64() {
        return matches!((a.as_f64(), b.as_f64()), (Some(a), Some(b)) if a == b);
    }
    // One side negative, the other above i64::MAX.
    false
}
