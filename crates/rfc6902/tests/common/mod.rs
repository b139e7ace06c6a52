#![allow(dead_code)]

use proptest::prelude::*;
use rfc6902::json_patch::{apply_patch, ApplyPatchOptions, Op, PatchError};
use serde_json::{Map, Value};

pub fn ptr(pointer: &str) -> Vec<String> {
    rfc6902_pointer::parse_json_pointer(pointer)
}

pub fn apply(doc: &Value, ops: &[Op]) -> Result<Value, PatchError> {
    apply_patch(doc.clone(), ops, &ApplyPatchOptions::default())
}

pub fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

pub fn arb_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,3}", arb_json(), 1..5)
        .prop_map(|m| m.into_iter().collect())
}

/// A document nested under `"root"` paired with the pointer of one of its
/// nodes, so every pointer has at least one step to walk.
pub fn arb_json_with_path() -> impl Strategy<Value = (Value, Vec<String>)> {
    arb_json().prop_flat_map(|inner| {
        let mut paths = Vec::new();
        collect_paths(&inner, &mut vec!["root".to_string()], &mut paths);
        let doc = Value::Object([("root".to_string(), inner)].into_iter().collect());
        (Just(doc), prop::sample::select(paths))
    })
}

fn collect_paths(value: &Value, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    out.push(prefix.clone());
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                prefix.push(index.to_string());
                collect_paths(item, prefix, out);
                prefix.pop();
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                prefix.push(key.clone());
                collect_paths(item, prefix, out);
                prefix.pop();
            }
        }
        _ => {}
    }
}
