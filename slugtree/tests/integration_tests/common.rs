// tests/integration_tests/common.rs
use anyhow::Result;
use slugtree::{DEFAULT_IGNORE_MARKER, IGNORE_FILE_NAME, IgnorePatterns, IgnoreRules};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, IGNORE_FILE_NAME, &content)
}

pub fn default_rules() -> IgnoreRules {
    IgnoreRules::new(
        vec![String::from(DEFAULT_IGNORE_MARKER)],
        IgnorePatterns::new(),
    )
}

/// A notes export with spaces, punctuation, content hashes and escaped
/// links, plus entries that must never be touched.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "Home.md",
        "# Home\n\n- [Projects](Projects%20abcdef0123456789abcdef0123456789.md)\n- [Ideas](Ideas/Big Ideas!.md)\n- [Web](https://example.com/some page)\n",
    )?;
    create_test_file(
        temp_dir.path(),
        "Projects abcdef0123456789abcdef0123456789.md",
        "# Projects\n\nBack to [home](Home.md).\n",
    )?;
    create_test_file(
        temp_dir.path(),
        "Ideas/Big Ideas!.md",
        "# Big ideas\n\n```\n[not a link](Some File.md)\n```\n",
    )?;
    create_test_file(temp_dir.path(), "Ideas/Draft (old)/notes  v2.md", "draft")?;
    create_test_file(temp_dir.path(), ".obsidian/work space.json", "{}")?;
    create_test_file(
        temp_dir.path(),
        "node_modules/some pkg/README.md",
        "[x](other file.md)",
    )?;

    Ok(temp_dir)
}

/// Every path below `dir`, relative and `/`-separated, sorted.
pub fn tree_listing(dir: &Path) -> Vec<String> {
    let mut paths: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .ok()
                .map(|relative| relative.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    paths.sort();
    paths
}
