//! Type definitions for JSON Pointer.

use std::fmt;

use crate::util::{format_json_pointer, parse_json_pointer, tail};
use crate::JsonPointerError;

/// A step in a JSON Pointer path.
///
/// Object keys and array indices share one representation; which one a step
/// denotes is decided by the shape of the value it is applied to.
pub type PathStep = String;

/// A JSON Pointer path.
pub type Path = Vec<PathStep>;

/// A decoded JSON Pointer: an ordered sequence of path steps.
///
/// The empty pointer addresses the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    path: Path,
}

impl JsonPointer {
    /// The root pointer (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a pointer from already-decoded segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Decodes RFC 6901 pointer text (`/a/b~1c/0`).
    pub fn parse(pointer: &str) -> Self {
        Self {
            path: parse_json_pointer(pointer),
        }
    }

    /// The ordered path segments. Empty for the root pointer.
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// The pointer with its first segment removed.
    ///
    /// # Errors
    ///
    /// `JsonPointerError::EmptyPointer` when called on the root pointer.
    ///
    /// # Example
    ///
    /// ```
    /// use rfc6902_pointer::JsonPointer;
    ///
    /// let ptr = JsonPointer::new(["a", "b", "0"]);
    /// assert_eq!(ptr.tail().unwrap(), JsonPointer::new(["b", "0"]));
    /// assert!(JsonPointer::root().tail().is_err());
    /// ```
    pub fn tail(&self) -> Result<JsonPointer, JsonPointerError> {
        tail(&self.path).map(|rest| Self {
            path: rest.to_vec(),
        })
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl From<Path> for JsonPointer {
    fn from(path: Path) -> Self {
        Self { path }
    }
}

impl From<&[&str]> for JsonPointer {
    fn from(segments: &[&str]) -> Self {
        Self::new(segments.iter().copied())
    }
}

impl AsRef<[String]> for JsonPointer {
    fn as_ref(&self) -> &[String] {
        &self.path
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_json_pointer(&self.path))
    }
}

/// Classification of a path step against an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayIndex {
    /// A canonical non-negative integer.
    Index(usize),
    /// The `-` step: the position one past the last element.
    End,
    /// Anything else (negative, non-numeric, leading zeros, overflow).
    Invalid,
}

impl ArrayIndex {
    /// Resolves the step to a concrete position for an array of `len`
    /// elements. `End` maps to `len`.
    pub fn position(self, len: usize) -> Option<usize> {
        match self {
            ArrayIndex::Index(idx) => Some(idx),
            ArrayIndex::End => Some(len),
            ArrayIndex::Invalid => None,
        }
    }
}
