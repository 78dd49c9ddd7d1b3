pub mod case;
pub mod config;
pub mod error;
pub mod rewrite;

pub use case::{SegmentCase, to_camel_case, to_camel_case_with};
pub use error::{ConfigError, RewriteError};
pub use rewrite::{
    DEFAULT_INPUT, DEFAULT_OUTPUT, RewriteSummary, rewrite_file, rewrite_operation_ids,
    rewrite_str,
};
