//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! `copy` and `move` are not separate tree mutations: `move` is a `remove`
//! at `from` followed by an `add` at `path`, and `copy` resolves `from` and
//! then `add`s a clone, so array and object edge cases are decided in one
//! place.
//!
//! `test` compares with [`json_equal`], where numbers are equal by value.

pub mod types;
pub mod apply;
pub mod equal;
pub mod codec;

pub use types::{ApplyPatchOptions, Op, OpResult, Path, PatchError, PatchResult};
pub use apply::{apply_op, apply_ops, apply_patch};
pub use equal::json_equal;
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
