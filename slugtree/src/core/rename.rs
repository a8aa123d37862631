// src/core/rename.rs
use crate::core::ignore::IgnoreRules;
use crate::core::normalize::normalize;
use crate::error::{SlugError, SlugResult};
use crate::models::{RenameReport, RenameStrategy};
use crate::utils::relative_slash_path;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Renames every entry below `root` whose name is not in cleaned form.
///
/// The root directory itself is never renamed. Hidden entries, ignore
/// markers and `.slugtreeignore` matches are skipped together with their
/// contents. Each rename is printed as `renaming <old> <new>`.
///
/// # Arguments
///
/// * `root` - The directory to clean up
/// * `rules` - Which entries to leave alone
/// * `strategy` - Restart the walk after each rename, or one bottom-up walk
///
/// # Returns
///
/// * `Ok(RenameReport)` - The renames performed and the number of walks
///
/// # Errors
///
/// The first failure stops the run:
/// * `TargetExists` if a cleaned name is already taken
/// * `EmptyName` if nothing is left of a name after cleaning
/// * `RenameFailed` if the filesystem refuses the rename
/// * `Walk` if a directory cannot be read
pub fn rename_tree(
    root: &Path,
    rules: &IgnoreRules,
    strategy: RenameStrategy,
) -> SlugResult<RenameReport> {
    let report = match strategy {
        RenameStrategy::Restart => rename_until_clean(root, rules)?,
        RenameStrategy::BottomUp => rename_bottom_up(root, rules)?,
    };
    info!(
        "renamed {} entries in {} pass(es) under {}",
        report.count(),
        report.passes,
        root.display()
    );
    Ok(report)
}

fn rename_until_clean(root: &Path, rules: &IgnoreRules) -> SlugResult<RenameReport> {
    let mut report = RenameReport::new();

    loop {
        report.passes = report.passes.saturating_add(1);
        debug!("rename pass {} over {}", report.passes, root.display());

        // The walker is dropped before the rename happens.
        let Some((from, to)) = next_rename(root, rules)? else {
            return Ok(report);
        };
        apply_rename(&from, &to)?;
        report.renamed.push((from, to));
    }
}

/// Walks from the root and returns the first entry whose relative path
/// changes when cleaned, with its destination.
fn next_rename(root: &Path, rules: &IgnoreRules) -> SlugResult<Option<(PathBuf, PathBuf)>> {
    for entry in WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| rules.allows(root, e))
    {
        let entry = entry.map_err(|source| walk_error(root, source))?;
        let Some(relative) = relative_slash_path(root, entry.path()) else {
            continue;
        };

        let cleaned = normalize(&relative);
        if cleaned != relative {
            let to = destination(root, entry.path(), &cleaned)?;
            return Ok(Some((entry.into_path(), to)));
        }
    }
    Ok(None)
}

/// Single walk over the allowed entries, renaming a directory's contents
/// before the directory itself, so no path is used after one of its
/// ancestors was renamed.
fn rename_bottom_up(root: &Path, rules: &IgnoreRules) -> SlugResult<RenameReport> {
    let mut report = RenameReport::new();
    report.passes = 1;

    // Pre-order so ignored directories are pruned; reversed, every entry
    // comes before its parent.
    let mut entries = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| rules.allows(root, e))
    {
        entries.push(entry.map_err(|source| walk_error(root, source))?);
    }

    for entry in entries.into_iter().rev() {
        let Some(relative) = relative_slash_path(root, entry.path()) else {
            continue;
        };
        let cleaned = normalize(&relative);
        if cleaned == relative {
            continue;
        }
        let name = cleaned_name(entry.path(), &cleaned)?;
        if entry.file_name().to_str() == Some(name) {
            continue;
        }

        let to = entry.path().with_file_name(name);
        apply_rename(entry.path(), &to)?;
        report.renamed.push((entry.into_path(), to));
    }

    Ok(report)
}

/// Last component of a cleaned relative path.
fn cleaned_name<'a>(path: &Path, cleaned: &'a str) -> SlugResult<&'a str> {
    match cleaned.rsplit('/').next() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(SlugError::EmptyName {
            path: path.to_path_buf(),
        }),
    }
}

fn destination(root: &Path, path: &Path, cleaned: &str) -> SlugResult<PathBuf> {
    if cleaned.is_empty() || cleaned.starts_with('/') || cleaned.ends_with('/') {
        return Err(SlugError::EmptyName {
            path: path.to_path_buf(),
        });
    }
    Ok(root.join(cleaned))
}

/// Renames `from` to `to`, refusing to replace an existing entry.
fn apply_rename(from: &Path, to: &Path) -> SlugResult<()> {
    if fs::symlink_metadata(to).is_ok() {
        return Err(SlugError::TargetExists {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }

    fs::rename(from, to).map_err(|source| SlugError::RenameFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    println!("renaming {} {}", from.display(), to.display());
    Ok(())
}

fn walk_error(root: &Path, source: walkdir::Error) -> SlugError {
    SlugError::Walk {
        path: source.path().unwrap_or(root).to_path_buf(),
        source,
    }
}
