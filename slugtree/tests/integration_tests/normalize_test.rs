// tests/integration_tests/normalize_test.rs
use proptest::prelude::*;
use regex::Regex;
use slugtree::{is_normalized, normalize};

#[test]
fn test_documented_examples() {
    assert_eq!(normalize("a%20b"), "a-b");
    assert_eq!(normalize("Hello World!.md"), "Hello-World.md");
    assert_eq!(normalize("foo-/bar-.md"), "foo/bar.md");
    assert_eq!(
        normalize("abc-d41d8cd98f00b204e9800998ecf8427e-title.md"),
        "abc-title.md"
    );
}

#[test]
fn test_export_style_paths() {
    assert_eq!(
        normalize("Team Wiki 0123456789abcdef0123456789abcdef/On-call (2024).md"),
        "Team-Wiki/On-call-2024.md"
    );
    assert_eq!(normalize("../Other%20Notes/Page.md"), "../Other-Notes/Page.md");
    assert!(is_normalized("already-clean/page.md"));
    assert!(!is_normalized("not clean.md"));
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(input in "\\PC{0,64}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn prop_output_uses_allowed_characters(input in "\\PC{0,64}") {
        let cleaned = normalize(&input);
        prop_assert!(cleaned.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '/')));
        prop_assert!(!cleaned.starts_with('-') && !cleaned.ends_with('-'));
        prop_assert!(!cleaned.contains("--"));
    }

    #[test]
    fn prop_no_hash_survives(prefix in "[a-z ]{0,8}", hash in "[0-9a-f]{32}", suffix in "[g-z .]{0,8}") {
        let hex_run = Regex::new("[a-fA-F0-9]{32}").map_err(|e| TestCaseError::fail(e.to_string()))?;
        let cleaned = normalize(&format!("{prefix}{hash}{suffix}"));
        prop_assert!(!hex_run.is_match(&cleaned));
    }
}
