use serde_json::Value;

use crate::types::ArrayIndex;
use crate::util::parse_index;
use crate::JsonPointerError;

/// Resolve the value at `path`, distinguishing why a lookup failed.
///
/// - a missing branch with steps still left to walk is `NotFound`;
/// - a final step past the end of an array (or not an index) is
///   `IndexOutOfBounds`;
/// - a final step naming an absent object key is `MissingKey`.
///
/// # Example
///
/// ```
/// use rfc6902_pointer::{resolve, JsonPointerError};
/// use serde_json::json;
///
/// let doc = json!({"a": [1, 2]});
/// let path = |s: &[&str]| s.iter().map(|x| x.to_string()).collect::<Vec<_>>();
///
/// assert_eq!(resolve(&doc, &path(&["a", "1"])), Ok(&json!(2)));
/// assert!(matches!(
///     resolve(&doc, &path(&["a", "2"])),
///     Err(JsonPointerError::IndexOutOfBounds { .. })
/// ));
/// assert_eq!(
///     resolve(&doc, &path(&["b"])),
///     Err(JsonPointerError::MissingKey("b".into()))
/// );
/// assert_eq!(resolve(&doc, &path(&["b", "c"])), Err(JsonPointerError::NotFound));
/// ```
pub fn resolve<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, JsonPointerError> {
    let mut current = val;
    let last = path.len().saturating_sub(1);
    for (depth, step) in path.iter().enumerate() {
        let is_last = depth == last;
        current = match current {
            Value::Array(arr) => match parse_index(step) {
                ArrayIndex::Index(idx) if idx < arr.len() => &arr[idx],
                _ if is_last => {
                    return Err(JsonPointerError::IndexOutOfBounds {
                        index: step.clone(),
                        len: arr.len(),
                    })
                }
                _ => return Err(JsonPointerError::NotFound),
            },
            Value::Object(map) => match map.get(step) {
                Some(child) => child,
                None if is_last => return Err(JsonPointerError::MissingKey(step.clone())),
                None => return Err(JsonPointerError::NotFound),
            },
            _ => return Err(JsonPointerError::NotFound),
        };
    }
    Ok(current)
}
