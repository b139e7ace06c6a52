//! Core types for the JSON Patch module.

use serde_json::Value;
use thiserror::Error;

use rfc6902_pointer::{JsonPointerError, ValidationError, MAX_PATH_LENGTH};

pub use rfc6902_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    /// An absent branch was reached with pointer steps still to resolve, or a
    /// mutation targeted something that is not a container.
    #[error("INVALID_JSON")]
    InvalidJson,
    #[error("ARRAY_INDEX_OUT_OF_BOUNDS: {index} (len {len})")]
    ArrayIndexOutOfBounds { index: String, len: usize },
    #[error("INVALID_DICTIONARY_KEY: {0}")]
    InvalidDictionaryKey(String),
    #[error("VALIDATION_ERROR{}", detail(.0))]
    ValidationError(Option<String>),
    #[error("POINTER_TOO_DEEP: {depth} > {max}")]
    PointerTooDeep { depth: usize, max: usize },
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl From<JsonPointerError> for PatchError {
    fn from(err: JsonPointerError) -> Self {
        match err {
            JsonPointerError::IndexOutOfBounds { index, len } => {
                PatchError::ArrayIndexOutOfBounds { index, len }
            }
            JsonPointerError::MissingKey(key) => PatchError::InvalidDictionaryKey(key),
            JsonPointerError::NotFound | JsonPointerError::EmptyPointer => PatchError::InvalidJson,
        }
    }
}

impl From<ValidationError> for PatchError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::PathTooLong { depth, max } => PatchError::PointerTooDeep { depth, max },
            other => PatchError::InvalidOp(other.to_string()),
        }
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation (RFC 6902).
///
/// `from` is a required field of `Copy` and `Move`, so an operation without a
/// source pointer cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Copy { path: Path, from: Path },
    Move { path: Path, from: Path },
    Test { path: Path, value: Value },
}

impl Op {
    /// Returns the operation name as it appears in a patch document.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    /// Returns the target path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// Returns the source path for `copy` and `move`.
    pub fn from_path(&self) -> Option<&Path> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OpResult {
    /// The document after applying the operation.
    pub doc: Value,
    /// The value displaced at the target path, if any: the removed or
    /// overwritten value, or the previous document for a root replacement.
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchResult {
    pub doc: Value,
    /// Displaced value of each operation, in patch order.
    pub old: Vec<Option<Value>>,
}

/// Options for `apply_patch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyPatchOptions {
    /// Fail with `InvalidJson` when an intermediate step does not fit the
    /// value it is applied to (e.g. a key against an array). When false,
    /// such an operation leaves the document unchanged.
    pub strict: bool,
    /// Maximum number of steps in any `path` or `from` pointer.
    pub max_depth: usize,
}

impl Default for ApplyPatchOptions {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: MAX_PATH_LENGTH,
        }
    }
}
