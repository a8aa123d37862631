// src/models/rename_report.rs

use std::path::PathBuf;

/// Outcome of a tree rename run.
#[derive(Debug, Default)]
pub struct RenameReport {
    /// Every rename performed, in order, as (old path, new path).
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Number of traversals started, including the final clean one.
    pub passes: u64,
}

impl RenameReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            renamed: Vec::new(),
            passes: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.renamed.len()
    }

    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.renamed.is_empty()
    }
}
