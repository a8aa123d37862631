pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use crate::cli::{Args, run};
pub use crate::config::{CONFIG_FILE_NAME, FileConfig, Settings};
pub use crate::core::ignore::{
    DEFAULT_IGNORE_MARKER, IGNORE_FILE_NAME, IgnorePatterns, IgnoreRules, load_ignore_patterns,
};
pub use crate::core::links::{extract_links, is_external, local_links};
pub use crate::core::normalize::{is_normalized, normalize};
pub use crate::core::rename::rename_tree;
pub use crate::core::rewrite::{
    RewriteOptions, RewrittenDocument, rewrite_document, rewrite_file, rewrite_tree,
};
pub use crate::error::{SlugError, SlugResult};
pub use crate::models::{LinkMode, LinkSpan, RenameReport, RenameStrategy, RewriteReport};
