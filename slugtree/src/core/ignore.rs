// src/core/ignore.rs
mod loader;
mod patterns;

pub use loader::{IGNORE_FILE_NAME, load_ignore_patterns};
pub use patterns::IgnorePatterns;

use crate::utils::{is_hidden_name, relative_slash_path};
use anyhow::Result;
use log::debug;
use std::path::Path;

pub const DEFAULT_IGNORE_MARKER: &str = "node_modules";

/// Decides which entries of a tree are left alone.
///
/// An entry is skipped when any component of its root-relative path
/// * starts with a dot,
/// * equals one of the ignore markers, or
/// * is matched by the `.slugtreeignore` patterns.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    markers: Vec<String>,
    patterns: IgnorePatterns,
}

impl IgnoreRules {
    #[inline]
    #[must_use]
    pub const fn new(markers: Vec<String>, patterns: IgnorePatterns) -> Self {
        Self { markers, patterns }
    }

    /// Builds the rules for `root`, reading the nearest ignore file.
    ///
    /// # Errors
    ///
    /// Fails if an ignore file exists but cannot be read or parsed.
    #[inline]
    pub fn load(root: &Path, markers: Vec<String>) -> Result<Self> {
        Ok(Self::new(markers, load_ignore_patterns(root)?))
    }

    #[inline]
    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Checks a root-relative, `/`-separated path.
    #[must_use]
    pub fn is_ignored(&self, relative: &str, is_dir: bool) -> bool {
        let skipped_component = relative
            .split('/')
            .filter(|component| !component.is_empty())
            .any(|component| is_hidden_name(component) || self.is_marker(component));

        skipped_component || self.patterns.matches(relative, is_dir)
    }

    /// Predicate for `WalkDir::filter_entry`: `true` keeps the entry.
    ///
    /// The root itself is always kept.
    #[must_use]
    pub fn allows(&self, root: &Path, entry: &walkdir::DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let Some(relative) = relative_slash_path(root, entry.path()) else {
            return true;
        };
        let ignored = self.is_ignored(&relative, entry.file_type().is_dir());
        if ignored {
            debug!("skipping {}", entry.path().display());
        }
        !ignored
    }

    fn is_marker(&self, component: &str) -> bool {
        self.markers.iter().any(|marker| marker == component)
    }
}
