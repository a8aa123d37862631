// src/core/normalize.rs
use regex::Regex;
use std::sync::LazyLock;

static CONTENT_HASH: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-fA-F0-9]{32}"));
static PERCENT_ESCAPE: LazyLock<Regex> = LazyLock::new(|| compile(r"%[0-9a-fA-F]{2}"));
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| compile(r"[^a-zA-Z0-9./-]"));
static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"-{2,}"));

#[allow(clippy::expect_used, reason = "patterns are literals covered by tests")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid built-in pattern")
}

/// Cleans a file name, relative path or link target.
///
/// The steps run in a fixed order:
/// 1. drop 32-digit hex runs (content hashes appended by note exporters)
/// 2. turn `%xx` escapes into a dash
/// 3. turn anything outside `[a-zA-Z0-9./-]` into a dash
/// 4. squeeze dash runs
/// 5. trim dashes at both ends
/// 6. fold `-/` into `/` and `-.` into `.`
///
/// The result is a fixed point: cleaning it again returns it unchanged.
///
/// # Examples
///
/// ```
/// use slugtree::normalize;
///
/// assert_eq!(normalize("Hello World!.md"), "Hello-World.md");
/// assert_eq!(normalize("a%20b"), "a-b");
/// ```
#[inline]
#[must_use]
pub fn normalize(input: &str) -> String {
    let cleaned = CONTENT_HASH.replace_all(input, "");
    let cleaned = PERCENT_ESCAPE.replace_all(&cleaned, "-");
    let cleaned = DISALLOWED.replace_all(&cleaned, "-");
    let cleaned = DASH_RUN.replace_all(&cleaned, "-");

    cleaned
        .trim_matches('-')
        .replace("-/", "/")
        .replace("-.", ".")
}

/// Returns `true` when `input` is already in cleaned form.
#[inline]
#[must_use]
pub fn is_normalized(input: &str) -> bool {
    normalize(input) == input
}
