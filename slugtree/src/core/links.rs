// src/core/links.rs
use crate::models::LinkSpan;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// `[text](dest)` and `![alt](dest)`, allowing one level of nested brackets in
/// the text and one level of balanced parentheses in the destination.
static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"!?\[(?:[^\[\]\n]|\[[^\[\]\n]*\])*\]\(([^()\n]*(?:\([^()\n]*\)[^()\n]*)*)\)")
});

/// `[label]: dest` definitions. Footnote labels (`[^1]:`) are not links.
static REFERENCE_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?m)^[ ]{0,3}\[[^\^\]\n][^\]\n]*\]:[ \t]*(<[^>\n]*>|\S+)")
});

static TRAILING_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"^(.*?)\s+(?:"[^"]*"|'[^']*'|\([^)]*\))$"#)
});

#[allow(clippy::expect_used, reason = "patterns are literals covered by tests")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid built-in pattern")
}

/// Returns `true` for targets carrying a URL scheme, which are never rewritten.
#[inline]
#[must_use]
pub fn is_external(target: &str) -> bool {
    target.contains("://")
}

/// Extracts every link target from a Markdown document, in document order.
///
/// Inline links, images and reference definitions are recognised. Matches
/// that start inside fenced code blocks or inline code spans are skipped.
#[must_use]
pub fn extract_links(text: &str) -> Vec<LinkSpan> {
    let code = code_ranges(text);
    let in_code = |at: usize| code.iter().any(|range| range.contains(&at));

    let mut links = Vec::new();

    for caps in INLINE_LINK.captures_iter(text) {
        let (Some(whole), Some(dest)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if in_code(whole.start()) {
            continue;
        }
        if let Some((offset, target)) = split_destination(dest.as_str()) {
            links.push(span(target, dest.start().saturating_add(offset)));
        }
    }

    for caps in REFERENCE_DEFINITION.captures_iter(text) {
        let (Some(whole), Some(dest)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if in_code(whole.start()) {
            continue;
        }
        let raw = dest.as_str();
        let (offset, target) = raw
            .strip_prefix('<')
            .and_then(|inner| inner.strip_suffix('>'))
            .map_or((0, raw), |inner| (1, inner));
        links.push(span(target, dest.start().saturating_add(offset)));
    }

    links.retain(|link| !link.target.is_empty());
    links.sort_by_key(|link| link.range.start);
    links.dedup_by(|a, b| a.range == b.range);
    links
}

/// Extracts the link targets that point inside the tree (no `://`).
#[must_use]
pub fn local_links(text: &str) -> Vec<LinkSpan> {
    let mut links = extract_links(text);
    links.retain(|link| !is_external(&link.target));
    links
}

fn span(target: &str, start: usize) -> LinkSpan {
    LinkSpan {
        target: target.to_owned(),
        range: start..start.saturating_add(target.len()),
    }
}

/// Splits the raw text between the parentheses of an inline link into the
/// target and its byte offset, dropping an optional title.
fn split_destination(raw: &str) -> Option<(usize, &str)> {
    let leading = raw.len().saturating_sub(raw.trim_start().len());
    let rest = raw.trim();

    if let Some(inner) = rest.strip_prefix('<') {
        let end = inner.find('>')?;
        return inner
            .get(..end)
            .map(|target| (leading.saturating_add(1), target));
    }

    let target = TRAILING_TITLE
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .map_or(rest, |m| m.as_str());
    Some((leading, target))
}

fn code_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = fenced_blocks(text);
    let spans = inline_code_spans(text, &ranges);
    ranges.extend(spans);
    ranges
}

fn fenced_blocks(text: &str) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    // (block start, fence character, fence length)
    let mut open: Option<(usize, char, usize)> = None;
    let mut offset: usize = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset = offset.saturating_add(line.len());

        let body = line.trim_start_matches(' ');
        if line.len().saturating_sub(body.len()) > 3 {
            continue;
        }
        let Some(fence_char) = body.chars().next().filter(|c| *c == '`' || *c == '~') else {
            continue;
        };
        let fence_len = body.chars().take_while(|c| *c == fence_char).count();
        if fence_len < 3 {
            continue;
        }

        match open {
            None => open = Some((line_start, fence_char, fence_len)),
            Some((start, ch, len))
                if ch == fence_char
                    && fence_len >= len
                    && body.get(fence_len..).is_some_and(|tail| tail.trim().is_empty()) =>
            {
                blocks.push(start..offset);
                open = None;
            }
            Some(_) => {}
        }
    }

    // An unclosed fence runs to the end of the document.
    if let Some((start, _, _)) = open {
        blocks.push(start..text.len());
    }
    blocks
}

fn inline_code_spans(text: &str, fenced: &[Range<usize>]) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i: usize = 0;

    while i < bytes.len() {
        if let Some(block) = fenced.iter().find(|range| range.contains(&i)) {
            i = block.end;
            continue;
        }
        if bytes.get(i) != Some(&b'`') {
            i = i.saturating_add(1);
            continue;
        }
        let run = backtick_run(bytes, i);
        let after = i.saturating_add(run);
        match closing_run(bytes, after, run) {
            Some(end) => {
                spans.push(i..end);
                i = end;
            }
            None => i = after,
        }
    }
    spans
}

fn backtick_run(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| **b == b'`').count())
}

fn closing_run(bytes: &[u8], from: usize, len: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes.get(j) == Some(&b'`') {
            let run = backtick_run(bytes, j);
            if run == len {
                return Some(j.saturating_add(run));
            }
            j = j.saturating_add(run);
        } else {
            j = j.saturating_add(1);
        }
    }
    None
}
