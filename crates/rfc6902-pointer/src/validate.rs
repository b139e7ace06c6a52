//! Validation functions for JSON Pointer.

use thiserror::Error;

/// Maximum allowed pointer string length.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("PATH_TOO_LONG: {depth} > {max}")]
    PathTooLong { depth: usize, max: usize },
}

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns an error if:
/// - The pointer is non-empty but doesn't start with `/`
/// - The pointer exceeds the maximum length (1024 characters)
///
/// # Example
///
/// ```
/// use rfc6902_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(ValidationError::PointerInvalid);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(ValidationError::PointerTooLong);
    }
    Ok(())
}

/// Validate a path against the default depth limit (256 steps).
pub fn validate_path(path: &[String]) -> Result<(), ValidationError> {
    validate_path_depth(path, MAX_PATH_LENGTH)
}

/// Validate a path against a caller-chosen depth limit.
///
/// # Example
///
/// ```
/// use rfc6902_pointer::validate_path_depth;
///
/// let path: Vec<String> = (0..4).map(|i| i.to_string()).collect();
/// validate_path_depth(&path, 4).unwrap();
/// validate_path_depth(&path, 3).unwrap_err();
/// ```
pub fn validate_path_depth(path: &[String], max: usize) -> Result<(), ValidationError> {
    if path.len() > max {
        return Err(ValidationError::PathTooLong {
            depth: path.len(),
            max,
        });
    }
    Ok(())
}
