use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::case::{SegmentCase, to_camel_case_with};
use crate::error::RewriteError;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "openapi.json";

/// Output file written when no path is given.
pub const DEFAULT_OUTPUT: &str = "openapi_modified.json";

/// Counts collected during a rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Operations visited under `paths.*.*`.
    pub operations: usize,
    /// Operations whose `operationId` actually changed.
    pub renamed: usize,
}

/// Rewrite every `paths.*.*.operationId` in place.
///
/// Every value under a path item is treated as an operation, so a path item
/// carrying `summary` or `parameters` fails with [`RewriteError::WrongType`].
/// The document may be partially rewritten when an error is returned.
pub fn rewrite_operation_ids(
    doc: &mut Value,
    mode: SegmentCase,
) -> Result<RewriteSummary, RewriteError> {
    let root = doc
        .as_object_mut()
        .ok_or_else(|| wrong_type(String::new(), "an object"))?;

    let paths = root
        .get_mut("paths")
        .ok_or_else(|| missing_key("/paths".to_string()))?
        .as_object_mut()
        .ok_or_else(|| wrong_type("/paths".to_string(), "an object"))?;

    let mut summary = RewriteSummary::default();

    for (path, item) in paths.iter_mut() {
        let item_ptr = format!("/paths/{}", escape_token(path));
        let item = item
            .as_object_mut()
            .ok_or_else(|| wrong_type(item_ptr.clone(), "an object"))?;

        for (method, operation) in item.iter_mut() {
            let op_ptr = format!("{item_ptr}/{}", escape_token(method));
            let operation = operation
                .as_object_mut()
                .ok_or_else(|| wrong_type(op_ptr.clone(), "an object"))?;

            let id_ptr = format!("{op_ptr}/operationId");
            let id = operation
                .get_mut("operationId")
                .ok_or_else(|| missing_key(id_ptr.clone()))?;
            let Value::String(current) = id else {
                return Err(wrong_type(id_ptr, "a string"));
            };

            summary.operations += 1;
            let renamed = to_camel_case_with(current, mode);
            if renamed != *current {
                log::debug!("{id_ptr}: {current} -> {renamed}");
                *current = renamed;
                summary.renamed += 1;
            }
        }
    }

    Ok(summary)
}

/// Parse a JSON document, rewrite it, and pretty-print it with 2-space indentation.
pub fn rewrite_str(
    input: &str,
    mode: SegmentCase,
) -> Result<(String, RewriteSummary), RewriteError> {
    let mut doc: Value = serde_json::from_str(input)?;
    let summary = rewrite_operation_ids(&mut doc, mode)?;
    let output = serde_json::to_string_pretty(&doc)?;
    Ok((output, summary))
}

/// Read `input`, rewrite it, and write the result to `output`.
///
/// `output` is created or truncated only after the whole document has been
/// rewritten; on any earlier error it is left untouched.
pub fn rewrite_file(
    input: &Path,
    output: &Path,
    mode: SegmentCase,
) -> Result<RewriteSummary, RewriteError> {
    let content = fs::read_to_string(input).map_err(|source| RewriteError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    log::info!("read {} ({} bytes)", input.display(), content.len());

    let (rendered, summary) = rewrite_str(&content, mode)?;

    fs::write(output, rendered).map_err(|source| RewriteError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!(
        "wrote {} ({} of {} operationIds renamed)",
        output.display(),
        summary.renamed,
        summary.operations
    );

    Ok(summary)
}

/// Escape a key for use as a JSON Pointer reference token.
fn escape_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn missing_key(pointer: String) -> RewriteError {
    RewriteError::MissingKey { pointer }
}

fn wrong_type(pointer: String, expected: &'static str) -> RewriteError {
    RewriteError::WrongType { pointer, expected }
}
