//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 object
//! form: `{"op": "...", "path": "...", "value": ..., "from": "..."}`.

use serde_json::{json, Map, Value};

use rfc6902_pointer::{format_json_pointer, parse_json_pointer, validate_json_pointer};

use crate::json_patch::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(field: &str, v: &Value) -> Result<Vec<String>, PatchError> {
    let s = v
        .as_str()
        .ok_or_else(|| PatchError::InvalidOp(format!("'{field}' must be a string")))?;
    validate_json_pointer(s)
        .map_err(|err| PatchError::InvalidOp(format!("'{field}' is not a JSON Pointer: {err}")))?;
    Ok(parse_json_pointer(s))
}

fn required<'a>(obj: &'a Map<String, Value>, op: &str, field: &str) -> Result<&'a Value, PatchError> {
    obj.get(field)
        .ok_or_else(|| PatchError::InvalidOp(format!("{op} requires '{field}'")))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": encode_path(path),
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": encode_path(path)
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": encode_path(path),
            "value": value
        }),
        Op::Copy { path, from } => json!({
            "op": "copy",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Move { path, from } => json!({
            "op": "move",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": encode_path(path),
            "value": value
        }),
    }
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a `serde_json::Value` into an `Op`.
///
/// Members other than `op`, `path`, `value` and `from` are ignored.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_str = obj
        .get("op")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PatchError::InvalidOp("missing 'op' field".into()))?;
    let path = decode_path("path", required(obj, op_str, "path")?)?;

    match op_str {
        "add" => Ok(Op::Add {
            path,
            value: required(obj, op_str, "value")?.clone(),
        }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace {
            path,
            value: required(obj, op_str, "value")?.clone(),
        }),
        "copy" => Ok(Op::Copy {
            path,
            from: decode_path("from", required(obj, op_str, "from")?)?,
        }),
        "move" => Ok(Op::Move {
            path,
            from: decode_path("from", required(obj, op_str, "from")?)?,
        }),
        "test" => Ok(Op::Test {
            path,
            value: required(obj, op_str, "value")?.clone(),
        }),
        other => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    }
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
