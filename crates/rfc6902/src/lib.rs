//! rfc6902 — JSON Patch (RFC 6902) application engine.
//!
//! Applies an ordered list of `add`, `remove`, `replace`, `move`, `copy` and
//! `test` operations to a `serde_json::Value`, producing a new document or
//! the first error encountered. Pointer handling lives in the
//! `rfc6902-pointer` crate.
//!
//! ```
//! use rfc6902::json_patch::{apply_patch, from_json_patch, ApplyPatchOptions};
//! use serde_json::json;
//!
//! let ops = from_json_patch(&json!([
//!     {"op": "move", "from": "/a", "path": "/c"},
//!     {"op": "test", "path": "/c", "value": 1},
//! ]))
//! .unwrap();
//! let doc = apply_patch(json!({"a": 1, "b": 2}), &ops, &ApplyPatchOptions::default()).unwrap();
//! assert_eq!(doc, json!({"b": 2, "c": 1}));
//! ```

pub mod json_patch;
pub mod json_cli;
