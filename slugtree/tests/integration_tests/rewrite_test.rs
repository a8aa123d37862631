// tests/integration_tests/rewrite_test.rs
use super::common::{create_test_file, default_rules, setup_test_directory};
use anyhow::Result;
use slugtree::{LinkMode, RewriteOptions, extract_links, rewrite_document, rewrite_tree};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_links_are_cleaned() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let report = rewrite_tree(temp_dir.path(), &RewriteOptions::default(), &default_rules());

    assert_eq!(report.processed, 5);
    assert_eq!(report.failed, 0);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Home.md"))?,
        "# Home\n\n- [Projects](Projects.md)\n- [Ideas](Ideas/Big-Ideas.md)\n- [Web](https://example.com/some page)\n"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Ideas/Big Ideas!.md"))?,
        "# Big ideas\n\n```\n[not a link](Some File.md)\n```\n",
        "links in fenced code stay as written"
    );
    Ok(())
}

#[test]
fn test_external_link_is_unchanged() {
    let text = "[x](https://example.com/a b)";
    assert_eq!(rewrite_document(text, LinkMode::Blind).content, text);
    assert_eq!(rewrite_document(text, LinkMode::Strict).content, text);
}

#[test]
fn test_fenced_code_links_are_not_extracted() {
    let text = "~~~md\n[a](b c.md)\n~~~\n[d](e f.md)\n";
    let targets: Vec<String> = extract_links(text).into_iter().map(|l| l.target).collect();
    assert_eq!(targets, ["e f.md"]);
}

#[test]
fn test_strict_mode_keeps_prose() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(
        temp_dir.path(),
        "index.md",
        "Open my notes.md or click [here](my notes.md).",
    )?;

    let options = RewriteOptions {
        mode: LinkMode::Strict,
        ..RewriteOptions::default()
    };
    let report = rewrite_tree(temp_dir.path(), &options, &default_rules());

    assert_eq!(report.links_rewritten, 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("index.md"))?,
        "Open my notes.md or click [here](my-notes.md)."
    );
    Ok(())
}

#[test]
fn test_other_extensions() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a.markdown", "[x](a b.md)")?;
    create_test_file(temp_dir.path(), "b.md", "[x](a b.md)")?;

    let options = RewriteOptions {
        extensions: vec![String::from("markdown")],
        ..RewriteOptions::default()
    };
    let report = rewrite_tree(temp_dir.path(), &options, &default_rules());

    assert_eq!(report.processed, 1);
    assert_eq!(fs::read_to_string(temp_dir.path().join("a.markdown"))?, "[x](a-b.md)");
    assert_eq!(fs::read_to_string(temp_dir.path().join("b.md"))?, "[x](a b.md)");
    Ok(())
}
