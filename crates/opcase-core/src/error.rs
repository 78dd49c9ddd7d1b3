use std::path::PathBuf;

use thiserror::Error;

/// Failures while rewriting operationIds. Location-bearing variants carry an
/// RFC 6901 JSON Pointer into the input document.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required key: {pointer}")]
    MissingKey { pointer: String },

    #[error("expected {expected} at {}", display_pointer(pointer))]
    WrongType {
        pointer: String,
        expected: &'static str,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_pointer(pointer: &str) -> &str {
    if pointer.is_empty() {
        "document root"
    } else {
        pointer
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}
