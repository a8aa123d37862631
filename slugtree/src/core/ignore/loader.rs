// src/core/ignore/loader.rs
use crate::core::ignore::IgnorePatterns;
use anyhow::{Context as _, Result};
use std::env;
use std::fs;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".slugtreeignore";

/// Loads ignore patterns from the nearest `.slugtreeignore`, looking in `dir`
/// first and then in each parent directory. Only the first file found is
/// used.
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined for a relative `dir`
/// * The ignore file exists but cannot be read
/// * The file contains invalid pattern syntax
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<IgnorePatterns> {
    let absolute_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    let mut patterns = IgnorePatterns::new();

    let Some(ignore_file) = absolute_dir
        .ancestors()
        .map(|ancestor| ancestor.join(IGNORE_FILE_NAME))
        .find(|candidate| candidate.is_file())
    else {
        return Ok(patterns);
    };

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read ignore file: {}", ignore_file.display()))?;
    for line in content.lines() {
        patterns
            .add_line(line)
            .with_context(|| format!("In ignore file: {}", ignore_file.display()))?;
    }

    Ok(patterns)
}
