//! Path-step helpers: RFC 6901 text codec, tail peeling, index parsing.

use crate::types::ArrayIndex;
use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use rfc6902_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so "~01" decodes to "~1" and not "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// # Example
///
/// ```
/// use rfc6902_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components.
///
/// - Empty string returns empty vec (root)
/// - The leading `/` is stripped
/// - Each component is unescaped
///
/// # Example
///
/// ```
/// use rfc6902_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/foo/0"), vec!["foo", "0"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    match pointer.strip_prefix('/') {
        Some(rest) => rest.split('/').map(unescape_component).collect(),
        None if pointer.is_empty() => Vec::new(),
        None => pointer.split('/').map(unescape_component).collect(),
    }
}

/// Format path components into a JSON Pointer string.
///
/// Returns an empty string for the root path.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a proper prefix of `child`.
///
/// # Example
///
/// ```
/// use rfc6902_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// The path with its first step removed.
///
/// # Errors
///
/// `JsonPointerError::EmptyPointer` for the root path.
///
/// # Example
///
/// ```
/// use rfc6902_pointer::tail;
///
/// let path = vec!["a".to_string(), "b".to_string()];
/// assert_eq!(tail(&path).unwrap(), &["b".to_string()]);
/// assert!(tail(&[]).is_err());
/// ```
pub fn tail(path: &[String]) -> Result<&[String], JsonPointerError> {
    split_first(path).map(|(_, rest)| rest)
}

/// The first step of the path and the remaining tail.
///
/// # Errors
///
/// `JsonPointerError::EmptyPointer` for the root path.
pub fn split_first(path: &[String]) -> Result<(&str, &[String]), JsonPointerError> {
    match path.split_first() {
        Some((head, rest)) => Ok((head.as_str(), rest)),
        None => Err(JsonPointerError::EmptyPointer),
    }
}

/// Check if a string represents a canonical non-negative array index
/// (no sign, no leading zeros).
///
/// # Example
///
/// ```
/// use rfc6902_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}

/// Classify a path step as an array position.
pub fn parse_index(step: &str) -> ArrayIndex {
    if step == "-" {
        return ArrayIndex::End;
    }
    if !is_valid_index(step) {
        return ArrayIndex::Invalid;
    }
    step.parse().map_or(ArrayIndex::Invalid, ArrayIndex::Index)
}
