//! `json-cli` — glue behind the `json-patch` binary.
//!
//! Parses the document and the patch text, decodes the patch into
//! operations, runs the engine, and serializes the result.

use std::path::PathBuf;

use clap::Parser;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::json_patch::codec::json::from_json_patch;
use crate::json_patch::{apply_patch, ApplyPatchOptions, PatchError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Patch(#[from] PatchError),
}

// ── Arguments ─────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a JSON document.
#[derive(Debug, Clone, Parser)]
#[command(name = "json-patch", version)]
pub struct PatchArgs {
    /// The patch: a JSON array of operation objects.
    pub patch: String,

    /// Read the document from this file instead of stdin.
    #[arg(long, value_name = "FILE")]
    pub doc: Option<PathBuf>,

    /// Fail when a pointer step does not fit the value it is applied to,
    /// instead of leaving that subtree unchanged.
    #[arg(long, env = "JSON_PATCH_STRICT")]
    pub strict: bool,

    /// Maximum number of steps accepted in a pointer.
    #[arg(long, env = "JSON_PATCH_MAX_DEPTH", default_value_t = rfc6902_pointer::MAX_PATH_LENGTH)]
    pub max_depth: usize,

    /// Pretty-print the resulting document.
    #[arg(long)]
    pub pretty: bool,
}

impl PatchArgs {
    pub fn options(&self) -> ApplyPatchOptions {
        ApplyPatchOptions {
            strict: self.strict,
            max_depth: self.max_depth,
        }
    }
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply `patch` (JSON array text) to `doc` (JSON text) and return the
/// serialized result.
pub fn apply_json_patch(
    doc: &str,
    patch: &str,
    options: &ApplyPatchOptions,
    pretty: bool,
) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc)?;
    let patch: Value = serde_json::from_str(patch)?;
    let ops = from_json_patch(&patch)?;
    debug!(ops = ops.len(), strict = options.strict, "decoded patch");
    let result = apply_patch(doc, &ops, options)?;
    let out = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(out)
}
