// src/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// A small export-like tree with messy names, a hidden folder and an
/// ignored `node_modules` folder.
pub fn setup_messy_tree() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "Read Me!.md", "[guide](My Guide/Getting Started.md)")?;
    create_test_file(&dir, "My Guide/Getting Started.md", "Welcome")?;
    create_test_file(
        &dir,
        "My Guide/Page 0123456789abcdef0123456789abcdef.md",
        "Exported page",
    )?;
    create_test_file(&dir, ".obsidian/app config.json", "{}")?;
    create_test_file(&dir, "node_modules/left pad/index.md", "vendored")?;

    Ok(dir)
}

/// Every path below `dir`, relative and `/`-separated, sorted.
pub fn tree_listing(dir: &TempDir) -> Vec<String> {
    let mut paths: Vec<String> = WalkDir::new(dir.path())
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter_map(|entry| crate::utils::relative_slash_path(dir.path(), entry.path()))
        .collect();
    paths.sort();
    paths
}

/// Sets `mode` on `path` and reports whether the restriction holds for the
/// current user. It does not for root, so callers skip their checks then.
#[cfg(unix)]
pub fn restrict_permissions(path: &Path, mode: u32) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt as _;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    if path.is_dir() {
        let check = path.join(".write-check");
        let enforced = fs::read_dir(path).is_err() || File::create(&check).is_err();
        if !enforced {
            fs::remove_file(&check)?;
        }
        Ok(enforced)
    } else {
        Ok(fs::OpenOptions::new().write(true).open(path).is_err())
    }
}

/// Gives `path` back its usual permissions so the temp dir can be removed.
#[cfg(unix)]
pub fn restore_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt as _;

    let mode = if path.is_dir() { 0o755 } else { 0o644 };
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}
