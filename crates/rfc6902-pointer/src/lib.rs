//! JSON Pointer (RFC 6901) resolution for the `rfc6902` patch engine.
//!
//! A pointer is handled in its decoded form: an ordered list of path steps.
//! The patch engine peels one step at a time with [`split_first`] / [`tail`],
//! and reads source locations with [`resolve`].
//!
//! # Example
//!
//! ```
//! use rfc6902_pointer::{resolve, JsonPointer};
//! use serde_json::json;
//!
//! let ptr = JsonPointer::parse("/foo/bar");
//! assert_eq!(ptr.segments(), &["foo", "bar"]);
//! assert_eq!(ptr.tail().unwrap().segments(), &["bar"]);
//!
//! let doc = json!({"foo": {"bar": 42}});
//! assert_eq!(resolve(&doc, ptr.segments()), Ok(&json!(42)));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{ArrayIndex, JsonPointer, Path, PathStep};

pub mod util;
pub use util::{
    escape_component, format_json_pointer, is_child, is_root, is_valid_index, parse_index,
    parse_json_pointer, split_first, tail, unescape_component,
};

pub mod resolve;
pub use resolve::resolve;

pub mod validate;
pub use validate::{
    validate_json_pointer, validate_path, validate_path_depth, ValidationError,
    MAX_PATH_LENGTH, MAX_POINTER_LENGTH,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INDEX_OUT_OF_BOUNDS: {index} (len {len})")]
    IndexOutOfBounds { index: String, len: usize },
    #[error("MISSING_KEY: {0}")]
    MissingKey(String),
    #[error("EMPTY_POINTER")]
    EmptyPointer,
}
