use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::case::SegmentCase;
use crate::error::ConfigError;
use crate::rewrite::{DEFAULT_INPUT, DEFAULT_OUTPUT};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".opcase.yaml";

/// Project configuration loaded from `.opcase.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpcaseConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub segment_case: SegmentCase,
}

impl Default for OpcaseConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            segment_case: SegmentCase::default(),
        }
    }
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OpcaseConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

fn parse_config(content: &str) -> Result<OpcaseConfig, serde_yaml_ng::Error> {
    // An empty file deserializes to unit, not to a mapping.
    if content.trim().is_empty() {
        return Ok(OpcaseConfig::default());
    }
    serde_yaml_ng::from_str(content)
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# opcase configuration
input: openapi.json
output: openapi_modified.json

# How the rest of each segment after the first letter is cased:
#   preserve  - get_userID  -> getUserID
#   lowercase - get_userID  -> getUserid
segment_case: preserve
"#
}
