// src/utils.rs
use std::path::{Component, Path};

/// Returns `true` for dot-prefixed names such as `.git` or `.obsidian`.
#[inline]
#[must_use]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Renders `path` relative to `root` with `/` between components, the form
/// names are cleaned and matched in. Returns `None` if `path` is not inside
/// `root` or is `root` itself.
#[must_use]
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Returns `true` if the file name ends in `.<ext>` for one of `extensions`.
#[must_use]
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    extensions.iter().any(|ext| {
        name.len() > ext.len()
            && name.ends_with(ext.as_str())
            && name
                .get(..name.len().saturating_sub(ext.len()))
                .is_some_and(|stem| stem.ends_with('.'))
    })
}
