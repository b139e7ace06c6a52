//! JSON Patch apply logic.
//!
//! Every mutating operation goes through [`apply_operation`]: the pointer is
//! peeled one step per level, the child is moved out of its slot, the
//! recursion rebuilds it, and the result is written back into the same slot.
//! Only the container that owns the final step is handed to the operation's
//! effect. Siblings are never touched, and because documents are taken by
//! value a failed operation never leaks a half-applied tree to the caller.

use serde_json::Value;
use tracing::{debug, trace};

use rfc6902_pointer::{
    format_json_pointer, is_child, is_root, parse_index, resolve, split_first,
    validate_path_depth, ArrayIndex, JsonPointerError,
};

use super::equal::json_equal;
use super::types::{ApplyPatchOptions, Op, OpResult, PatchError, PatchResult};

// ── Traversal ─────────────────────────────────────────────────────────────

/// Borrow the slot `step` addresses inside `value`.
///
/// `None` means the step does not fit the shape of `value`; `Some(None)`
/// means it fits but nothing is stored there.
fn child_slot<'v>(value: &'v mut Value, step: &str) -> Option<Option<&'v mut Value>> {
    match value {
        Value::Array(arr) => match parse_index(step) {
            ArrayIndex::Invalid => None,
            index => Some(index.position(arr.len()).and_then(|idx| arr.get_mut(idx))),
        },
        Value::Object(map) => Some(map.get_mut(step)),
        _ => None,
    }
}

/// Walk `path` through `value` and run `effect` on the container owning the
/// final step, rebuilding every ancestor on the way back up.
///
/// `path` must be non-empty; root-level operations are handled by callers.
fn apply_operation<F>(
    value: Option<Value>,
    path: &[String],
    strict: bool,
    effect: &mut F,
) -> Result<Value, PatchError>
where
    F: FnMut(Value, &str) -> Result<Value, PatchError>,
{
    let mut value = value.ok_or(PatchError::InvalidJson)?;
    let (step, rest) = split_first(path)?;
    if rest.is_empty() {
        return effect(value, step);
    }
    match child_slot(&mut value, step) {
        Some(Some(slot)) => {
            let child = std::mem::take(slot);
            *slot = apply_operation(Some(child), rest, strict, effect)?;
        }
        Some(None) => {
            trace!(step, "no value to descend into");
            return Err(PatchError::InvalidJson);
        }
        None if strict => return Err(PatchError::InvalidJson),
        None => trace!(step, "step does not fit value shape, leaving subtree unchanged"),
    }
    Ok(value)
}

// ── Terminal effects ──────────────────────────────────────────────────────

fn out_of_bounds(step: &str, len: usize) -> PatchError {
    PatchError::ArrayIndexOutOfBounds {
        index: step.to_string(),
        len,
    }
}

/// Insert (array) or set (object) `value` at `step`. Returns the overwritten
/// object member, if any.
fn add_at(container: &mut Value, step: &str, value: Value) -> Result<Option<Value>, PatchError> {
    match container {
        Value::Object(map) => Ok(map.insert(step.to_string(), value)),
        Value::Array(arr) => match parse_index(step).position(arr.len()) {
            Some(idx) if idx <= arr.len() => {
                arr.insert(idx, value);
                Ok(None)
            }
            _ => Err(out_of_bounds(step, arr.len())),
        },
        _ => Err(PatchError::InvalidJson),
    }
}

/// Detach and return the value at `step`.
fn remove_at(container: &mut Value, step: &str) -> Result<Value, PatchError> {
    match container {
        Value::Object(map) => map
            .shift_remove(step)
            .ok_or_else(|| PatchError::InvalidDictionaryKey(step.to_string())),
        Value::Array(arr) => match parse_index(step) {
            ArrayIndex::Index(idx) if idx < arr.len() => Ok(arr.remove(idx)),
            _ => Err(out_of_bounds(step, arr.len())),
        },
        _ => Err(PatchError::InvalidJson),
    }
}

/// Overwrite an existing value at `step`, returning the previous one.
fn replace_at(container: &mut Value, step: &str, value: Value) -> Result<Value, PatchError> {
    let slot = match container {
        Value::Object(map) => map
            .get_mut(step)
            .ok_or_else(|| PatchError::InvalidDictionaryKey(step.to_string()))?,
        Value::Array(arr) => {
            let len = arr.len();
            match parse_index(step) {
                ArrayIndex::Index(idx) if idx < len => &mut arr[idx],
                _ => return Err(out_of_bounds(step, len)),
            }
        }
        _ => return Err(PatchError::InvalidJson),
    };
    Ok(std::mem::replace(slot, value))
}

/// Borrow the value stored at `step` inside `container`.
fn read_at<'v>(container: &'v Value, step: &str) -> Result<&'v Value, JsonPointerError> {
    resolve(container, std::slice::from_ref(&step.to_string()))
}

fn no_value(path: &[String]) -> PatchError {
    PatchError::ValidationError(Some(format!(
        "no value at \"{}\"",
        format_json_pointer(path)
    )))
}

/// Compare `actual` against `expected` for a `test` operation.
fn check_equal(actual: &Value, expected: &Value, path: &[String]) -> Result<(), PatchError> {
    if json_equal(actual, expected) {
        return Ok(());
    }
    Err(PatchError::ValidationError(Some(format!(
        "expected {expected} at \"{}\", found {actual}",
        format_json_pointer(path)
    ))))
}

/// Look up `step` in `container` for a `test` operation.
///
/// A missing member is a failed comparison rather than a lookup error; an
/// array position past the end is still reported as out of bounds.
fn test_at(
    container: &Value,
    step: &str,
    expected: &Value,
    path: &[String],
) -> Result<(), PatchError> {
    match read_at(container, step) {
        Ok(actual) => check_equal(actual, expected, path),
        Err(JsonPointerError::IndexOutOfBounds { index, len }) => {
            Err(PatchError::ArrayIndexOutOfBounds { index, len })
        }
        Err(_) => Err(no_value(path)),
    }
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(
    doc: Value,
    path: &[String],
    value: Value,
    options: &ApplyPatchOptions,
) -> Result<OpResult, PatchError> {
    if is_root(path) {
        return Ok(OpResult {
            doc: value,
            old: Some(doc),
        });
    }
    let mut value = Some(value);
    let mut old = None;
    let doc = apply_operation(Some(doc), path, options.strict, &mut |mut container, step| {
        let value = value.take().ok_or(PatchError::InvalidJson)?;
        old = add_at(&mut container, step, value)?;
        Ok(container)
    })?;
    Ok(OpResult { doc, old })
}

fn apply_remove(
    doc: Value,
    path: &[String],
    options: &ApplyPatchOptions,
) -> Result<OpResult, PatchError> {
    if is_root(path) {
        return Err(PatchError::InvalidJson);
    }
    let mut old = None;
    let doc = apply_operation(Some(doc), path, options.strict, &mut |mut container, step| {
        old = Some(remove_at(&mut container, step)?);
        Ok(container)
    })?;
    Ok(OpResult { doc, old })
}

fn apply_replace(
    doc: Value,
    path: &[String],
    value: Value,
    options: &ApplyPatchOptions,
) -> Result<OpResult, PatchError> {
    if is_root(path) {
        return Ok(OpResult {
            doc: value,
            old: Some(doc),
        });
    }
    let mut value = Some(value);
    let mut old = None;
    let doc = apply_operation(Some(doc), path, options.strict, &mut |mut container, step| {
        let value = value.take().ok_or(PatchError::InvalidJson)?;
        old = Some(replace_at(&mut container, step, value)?);
        Ok(container)
    })?;
    Ok(OpResult { doc, old })
}

/// `from` is read through [`apply_operation`], so a skipped source leaves
/// the document unchanged, as it does for `move`.
fn apply_copy(
    doc: Value,
    path: &[String],
    from: &[String],
    options: &ApplyPatchOptions,
) -> Result<OpResult, PatchError> {
    if is_root(from) {
        let value = doc.clone();
        return apply_add(doc, path, value, options);
    }
    let mut found = None;
    let doc = apply_operation(Some(doc), from, options.strict, &mut |container, step| {
        found = Some(read_at(&container, step)?.clone());
        Ok(container)
    })?;
    match found {
        Some(value) => apply_add(doc, path, value, options),
        None => Ok(OpResult { doc, old: None }),
    }
}

fn apply_move(
    doc: Value,
    path: &[String],
    from: &[String],
    options: &ApplyPatchOptions,
) -> Result<OpResult, PatchError> {
    if is_child(from, path) {
        trace!(from = %format_json_pointer(from), "cannot move a value into its own child");
        return Err(PatchError::InvalidJson);
    }
    let removed = apply_remove(doc, from, options)?;
    match removed.old {
        Some(value) => apply_add(removed.doc, path, value, options),
        // Permissive traversal skipped the removal; nothing to re-insert.
        None => Ok(OpResult {
            doc: removed.doc,
            old: None,
        }),
    }
}

fn apply_test(
    doc: Value,
    path: &[String],
    expected: &Value,
    options: &ApplyPatchOptions,
) -> Result<OpResult, PatchError> {
    if is_root(path) {
        check_equal(&doc, expected, path)?;
        return Ok(OpResult { doc, old: None });
    }
    let mut checked = false;
    let doc = apply_operation(Some(doc), path, options.strict, &mut |container, step| {
        test_at(&container, step, expected, path)?;
        checked = true;
        Ok(container)
    })?;
    // A skipped target is a failed test, even when permissive.
    if !checked {
        return Err(no_value(path));
    }
    Ok(OpResult { doc, old: None })
}

fn check_depth(op: &Op, options: &ApplyPatchOptions) -> Result<(), PatchError> {
    validate_path_depth(op.path(), options.max_depth)?;
    if let Some(from) = op.from_path() {
        validate_path_depth(from, options.max_depth)?;
    }
    Ok(())
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single operation, consuming the document.
///
/// Returns the new document and the value the operation displaced.
pub fn apply_op(doc: Value, op: &Op, options: &ApplyPatchOptions) -> Result<OpResult, PatchError> {
    check_depth(op, options)?;
    debug!(
        op = op.op_name(),
        path = %format_json_pointer(op.path()),
        "applying operation"
    );
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone(), options),
        Op::Remove { path } => apply_remove(doc, path, options),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone(), options),
        Op::Copy { path, from } => apply_copy(doc, path, from, options),
        Op::Move { path, from } => apply_move(doc, path, from, options),
        Op::Test { path, value } => apply_test(doc, path, value, options),
    }
}

/// Apply a sequence of operations, returning the final document and the
/// value each operation displaced.
///
/// The first failing operation aborts the whole patch.
pub fn apply_ops(
    doc: Value,
    ops: &[Op],
    options: &ApplyPatchOptions,
) -> Result<PatchResult, PatchError> {
    let mut doc = doc;
    let mut old = Vec::with_capacity(ops.len());
    for (index, op) in ops.iter().enumerate() {
        let res = apply_op(doc, op, options).inspect_err(|err| {
            debug!(index, op = op.op_name(), error = %err, "patch rejected");
        })?;
        doc = res.doc;
        old.push(res.old);
    }
    Ok(PatchResult { doc, old })
}

/// Apply a patch, returning only the resulting document.
///
/// # Example
///
/// ```
/// use rfc6902::json_patch::{apply_patch, ApplyPatchOptions, Op};
/// use serde_json::json;
///
/// let ops = vec![Op::Add { path: vec!["b".into()], value: json!(2) }];
/// let doc = apply_patch(json!({"a": 1}), &ops, &ApplyPatchOptions::default()).unwrap();
/// assert_eq!(doc, json!({"a": 1, "b": 2}));
/// ```
pub fn apply_patch(
    doc: Value,
    ops: &[Op],
    options: &ApplyPatchOptions,
) -> Result<Value, PatchError> {
    apply_ops(doc, ops, options).map(|res| res.doc)
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(s: &str) -> Vec<String> {
        rfc6902_pointer::parse_json_pointer(s)
    }

    fn apply(doc: Value, op: Op) -> Result<Value, PatchError> {
        apply_op(doc, &op, &ApplyPatchOptions::default()).map(|res| res.doc)
    }

    fn strict() -> ApplyPatchOptions {
        ApplyPatchOptions {
            strict: true,
            ..ApplyPatchOptions::default()
        }
    }

    #[test]
    fn add_to_object() {
        let doc = apply(json!({"a": 1}), Op::Add { path: path("/b"), value: json!(2) }).unwrap();
        assert_eq!(doc, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn add_overwrites_existing_member() {
        let res = apply_op(
            json!({"a": 1}),
            &Op::Add { path: path("/a"), value: json!(5) },
            &ApplyPatchOptions::default(),
        )
        .unwrap();
        assert_eq!(res.doc, json!({"a": 5}));
        assert_eq!(res.old, Some(json!(1)));
    }

    #[test]
    fn add_inserts_into_nested_array() {
        let doc = apply(json!({"a": [1, 2, 3]}), Op::Add { path: path("/a/1"), value: json!(9) }).unwrap();
        assert_eq!(doc, json!({"a": [1, 9, 2, 3]}));
    }

    #[test]
    fn add_at_array_end() {
        let doc = apply(json!([1, 2]), Op::Add { path: path("/2"), value: json!(3) }).unwrap();
        assert_eq!(doc, json!([1, 2, 3]));
        let doc = apply(doc, Op::Add { path: path("/-"), value: json!(4) }).unwrap();
        assert_eq!(doc, json!([1, 2, 3, 4]));
    }

    #[test]
    fn add_past_array_end_fails() {
        let err = apply(json!([1, 2]), Op::Add { path: path("/3"), value: json!(3) }).unwrap_err();
        assert_eq!(err, PatchError::ArrayIndexOutOfBounds { index: "3".into(), len: 2 });
        let err = apply(json!([1, 2]), Op::Add { path: path("/-1"), value: json!(3) }).unwrap_err();
        assert!(matches!(err, PatchError::ArrayIndexOutOfBounds { .. }));
    }

    #[test]
    fn add_root_replaces_document() {
        let res = apply_op(
            json!({"a": 1}),
            &Op::Add { path: vec![], value: json!([true]) },
            &ApplyPatchOptions::default(),
        )
        .unwrap();
        assert_eq!(res.doc, json!([true]));
        assert_eq!(res.old, Some(json!({"a": 1})));
    }

    #[test]
    fn add_through_missing_branch_fails() {
        let err = apply(json!({"a": {}}), Op::Add { path: path("/x/y"), value: json!(1) }).unwrap_err();
        assert_eq!(err, PatchError::InvalidJson);
        let err = apply(json!({"a": [1]}), Op::Add { path: path("/a/4/y"), value: json!(1) }).unwrap_err();
        assert_eq!(err, PatchError::InvalidJson);
    }

    #[test]
    fn add_into_scalar_fails() {
        let err = apply(json!({"a": 1}), Op::Add { path: path("/a/b"), value: json!(1) }).unwrap_err();
        assert_eq!(err, PatchError::InvalidJson);
    }

    #[test]
    fn remove_from_object_keeps_order() {
        let res = apply_op(
            json!({"a": 1, "b": 2, "c": 3}),
            &Op::Remove { path: path("/a") },
            &ApplyPatchOptions::default(),
        )
        .unwrap();
        assert_eq!(res.old, Some(json!(1)));
        let keys: Vec<_> = res.doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn remove_array_element() {
        let doc = apply(json!([1, 2, 3]), Op::Remove { path: path("/0") }).unwrap();
        assert_eq!(doc, json!([2, 3]));
    }

    #[test]
    fn remove_out_of_bounds() {
        let err = apply(json!({"a": [1, 2, 3]}), Op::Remove { path: path("/a/5") }).unwrap_err();
        assert_eq!(err, PatchError::ArrayIndexOutOfBounds { index: "5".into(), len: 3 });
        let err = apply(json!([1]), Op::Remove { path: path("/1") }).unwrap_err();
        assert!(matches!(err, PatchError::ArrayIndexOutOfBounds { .. }));
    }

    #[test]
    fn remove_missing_key() {
        let err = apply(json!({"a": {"b": 1}}), Op::Remove { path: path("/a/c") }).unwrap_err();
        assert_eq!(err, PatchError::InvalidDictionaryKey("c".into()));
    }

    #[test]
    fn remove_root_fails() {
        let err = apply(json!({"a": 1}), Op::Remove { path: vec![] }).unwrap_err();
        assert_eq!(err, PatchError::InvalidJson);
    }

    #[test]
    fn shape_mismatch_is_noop_unless_strict() {
        let doc = json!({"a": [1, 2]});
        let op = Op::Remove { path: path("/a/x/y") };
        assert_eq!(apply(doc.clone(), op.clone()).unwrap(), doc);
        assert_eq!(
            apply_op(doc, &op, &strict()).unwrap_err(),
            PatchError::InvalidJson
        );
    }

    #[test]
    fn replace_value() {
        let res = apply_op(
            json!({"a": 1, "b": 2}),
            &Op::Replace { path: path("/a"), value: json!(99) },
            &ApplyPatchOptions::default(),
        )
        .unwrap();
        assert_eq!(res.doc, json!({"a": 99, "b": 2}));
        assert_eq!(res.old, Some(json!(1)));
    }

    #[test]
    fn replace_array_element() {
        let doc = apply(json!([1, 2, 3]), Op::Replace { path: path("/1"), value: json!("x") }).unwrap();
        assert_eq!(doc, json!([1, "x", 3]));
    }

    #[test]
    fn replace_requires_existing_target() {
        let err = apply(json!({"a": 1}), Op::Replace { path: path("/b"), value: json!(1) }).unwrap_err();
        assert_eq!(err, PatchError::InvalidDictionaryKey("b".into()));
        let err = apply(json!([1]), Op::Replace { path: path("/1"), value: json!(1) }).unwrap_err();
        assert!(matches!(err, PatchError::ArrayIndexOutOfBounds { .. }));
    }

    #[test]
    fn copy_op() {
        let doc = apply(
            json!({"a": {"x": 1}, "b": {}}),
            Op::Copy { path: path("/b/x"), from: path("/a/x") },
        )
        .unwrap();
        assert_eq!(doc, json!({"a": {"x": 1}, "b": {"x": 1}}));
    }

    #[test]
    fn copy_from_array_out_of_bounds() {
        let err = apply(json!({"a": [1]}), Op::Copy { path: path("/b"), from: path("/a/1") }).unwrap_err();
        assert_eq!(err, PatchError::ArrayIndexOutOfBounds { index: "1".into(), len: 1 });
    }

    #[test]
    fn copy_from_missing_key() {
        let err = apply(json!({"a": 1}), Op::Copy { path: path("/b"), from: path("/z") }).unwrap_err();
        assert_eq!(err, PatchError::InvalidDictionaryKey("z".into()));
    }

    #[test]
    fn move_op() {
        let doc = apply(json!({"a": 1, "b": 2}), Op::Move { path: path("/c"), from: path("/a") }).unwrap();
        assert_eq!(doc, json!({"b": 2, "c": 1}));
    }

    #[test]
    fn move_within_array() {
        let doc = apply(json!([1, 2, 3]), Op::Move { path: path("/2"), from: path("/0") }).unwrap();
        assert_eq!(doc, json!([2, 3, 1]));
    }

    #[test]
    fn move_into_own_child_fails() {
        let err = apply(json!({"a": {"b": {}}}), Op::Move { path: path("/a/b/c"), from: path("/a") }).unwrap_err();
        assert_eq!(err, PatchError::InvalidJson);
        let err = apply(json!({"a": [1]}), Op::Move { path: path("/a/x"), from: path("/a") }).unwrap_err();
        assert_eq!(err, PatchError::InvalidJson);
        let err = apply(json!({"a": 1}), Op::Move { path: path("/a"), from: vec![] }).unwrap_err();
        assert_eq!(err, PatchError::InvalidJson);
    }

    #[test]
    fn move_to_same_location_is_identity() {
        let doc = json!({"a": [1, 2]});
        let out = apply(doc.clone(), Op::Move { path: path("/a/1"), from: path("/a/1") }).unwrap();
        assert_eq!(out, doc);
    }

    #[test]
    fn test_pass() {
        let doc = json!({"a": 5});
        let out = apply(doc.clone(), Op::Test { path: path("/a"), value: json!(5) }).unwrap();
        assert_eq!(out, doc);
    }

    #[test]
    fn test_fail() {
        let err = apply(json!({"a": 5}), Op::Test { path: path("/a"), value: json!(6) }).unwrap_err();
        assert!(matches!(err, PatchError::ValidationError(Some(_))));
    }

    #[test]
    fn test_missing_member_fails_validation() {
        let err = apply(json!({"a": 5}), Op::Test { path: path("/b"), value: json!(null) }).unwrap_err();
        assert!(matches!(err, PatchError::ValidationError(_)));
    }

    #[test]
    fn test_root() {
        let doc = json!({"a": [1]});
        assert!(apply(doc.clone(), Op::Test { path: vec![], value: doc.clone() }).is_ok());
        assert!(apply(doc, Op::Test { path: vec![], value: json!({}) }).is_err());
    }

    #[test]
    fn test_compares_numbers_by_value() {
        let doc = json!({"a": 1, "b": [2.0, {"c": 3}]});
        let ops = [
            Op::Test { path: path("/a"), value: json!(1.0) },
            Op::Test { path: path("/b"), value: json!([2, {"c": 3.0}]) },
        ];
        for op in ops {
            assert_eq!(apply(doc.clone(), op).unwrap(), doc);
        }
        let err = apply(doc, Op::Test { path: path("/a"), value: json!(1.5) }).unwrap_err();
        assert!(matches!(err, PatchError::ValidationError(Some(_))));
    }

    #[test]
    fn test_through_shape_mismatch_fails() {
        let doc = json!({"a": [1]});
        let op = Op::Test { path: path("/a/x/y"), value: json!("anything") };
        assert_eq!(
            apply(doc.clone(), op.clone()).unwrap_err(),
            PatchError::ValidationError(Some("no value at \"/a/x/y\"".into()))
        );
        assert_eq!(apply_op(doc, &op, &strict()).unwrap_err(), PatchError::InvalidJson);
    }

    #[test]
    fn copy_and_move_skip_unreachable_source_alike() {
        let doc = json!({"a": [1]});
        let copy = Op::Copy { path: path("/b"), from: path("/a/x/y") };
        let mv = Op::Move { path: path("/b"), from: path("/a/x/y") };
        for op in [&copy, &mv] {
            let res = apply_op(doc.clone(), op, &ApplyPatchOptions::default()).unwrap();
            assert_eq!(res.doc, doc);
            assert_eq!(res.old, None);
            assert_eq!(apply_op(doc.clone(), op, &strict()).unwrap_err(), PatchError::InvalidJson);
        }
    }

    #[test]
    fn copy_root_into_member() {
        let doc = apply(json!({"a": 1}), Op::Copy { path: path("/b"), from: vec![] }).unwrap();
        assert_eq!(doc, json!({"a": 1, "b": {"a": 1}}));
    }

    #[test]
    fn depth_limit() {
        let options = ApplyPatchOptions { max_depth: 2, ..ApplyPatchOptions::default() };
        let err = apply_op(
            json!({}),
            &Op::Add { path: path("/a/b/c"), value: json!(1) },
            &options,
        )
        .unwrap_err();
        assert_eq!(err, PatchError::PointerTooDeep { depth: 3, max: 2 });
        let err = apply_op(
            json!({}),
            &Op::Copy { path: path("/a"), from: path("/a/b/c") },
            &options,
        )
        .unwrap_err();
        assert_eq!(err, PatchError::PointerTooDeep { depth: 3, max: 2 });
    }

    #[test]
    fn apply_ops_sequence() {
        let ops = vec![
            Op::Add { path: path("/b"), value: json!(2) },
            Op::Replace { path: path("/a"), value: json!(10) },
        ];
        let result = apply_ops(json!({"a": 1}), &ops, &ApplyPatchOptions::default()).unwrap();
        assert_eq!(result.doc, json!({"a": 10, "b": 2}));
        assert_eq!(result.old, vec![None, Some(json!(1))]);
    }

    #[test]
    fn apply_patch_stops_at_first_error() {
        let ops = vec![
            Op::Add { path: path("/b"), value: json!(2) },
            Op::Remove { path: path("/zzz") },
            Op::Add { path: path("/c"), value: json!(3) },
        ];
        let err = apply_patch(json!({"a": 1}), &ops, &ApplyPatchOptions::default()).unwrap_err();
        assert_eq!(err, PatchError::InvalidDictionaryKey("zzz".into()));
    }
}
