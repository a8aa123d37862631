// src/core/rewrite.rs
use crate::core::ignore::IgnoreRules;
use crate::core::links::local_links;
use crate::core::normalize::normalize;
use crate::models::{LinkMode, RewriteReport};
use crate::utils::has_extension;
use anyhow::{Context as _, Result};
use log::{debug, error, info};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Settings for a link rewriting run.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    pub mode: LinkMode,
    /// File extensions treated as Markdown, without the dot.
    pub extensions: Vec<String>,
    /// Apply the renamer's ignore rules to the documents as well.
    pub respect_ignore: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            mode: LinkMode::Blind,
            extensions: vec![String::from("md")],
            respect_ignore: false,
        }
    }
}

/// A document after its local links were cleaned.
#[derive(Debug, PartialEq, Eq)]
pub struct RewrittenDocument {
    pub content: String,
    pub links_rewritten: u64,
}

/// Cleans the local link targets of one document.
///
/// External targets (containing `://`) and targets that clean to nothing are
/// kept as they are. In [`LinkMode::Blind`] each distinct target is replaced
/// everywhere it occurs in the text; in [`LinkMode::Strict`] only the link
/// spans themselves are rewritten.
#[must_use]
pub fn rewrite_document(text: &str, mode: LinkMode) -> RewrittenDocument {
    match mode {
        LinkMode::Blind => rewrite_everywhere(text),
        LinkMode::Strict => rewrite_spans(text),
    }
}

fn rewrite_everywhere(text: &str) -> RewrittenDocument {
    let mut content = text.to_owned();
    let mut seen = HashSet::new();
    let mut links_rewritten: u64 = 0;

    for link in local_links(text) {
        if !seen.insert(link.target.clone()) {
            continue;
        }
        let cleaned = normalize(&link.target);
        if cleaned.is_empty() || cleaned == link.target {
            continue;
        }
        content = content.replace(&link.target, &cleaned);
        links_rewritten = links_rewritten.saturating_add(1);
    }

    RewrittenDocument {
        content,
        links_rewritten,
    }
}

fn rewrite_spans(text: &str) -> RewrittenDocument {
    let mut content = String::with_capacity(text.len());
    let mut copied_to: usize = 0;
    let mut links_rewritten: u64 = 0;

    for link in local_links(text) {
        // A reference definition can swallow an inline link on the same line.
        if link.range.start < copied_to {
            continue;
        }
        let cleaned = normalize(&link.target);
        if cleaned.is_empty() || cleaned == link.target {
            continue;
        }
        let Some(before) = text.get(copied_to..link.range.start) else {
            continue;
        };
        content.push_str(before);
        content.push_str(&cleaned);
        copied_to = link.range.end;
        links_rewritten = links_rewritten.saturating_add(1);
    }
    content.push_str(text.get(copied_to..).unwrap_or_default());

    RewrittenDocument {
        content,
        links_rewritten,
    }
}

/// Rewrites the links of one Markdown file in place and prints
/// `Processed: <path>`. Files whose links are already clean are not written.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text or cannot be
/// written back.
pub fn rewrite_file(path: &Path, mode: LinkMode) -> Result<RewriteReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Error reading file: {}", path.display()))?;

    let rewritten = rewrite_document(&text, mode);
    let changed = rewritten.content != text;
    if changed {
        fs::write(path, &rewritten.content)
            .with_context(|| format!("Error writing file: {}", path.display()))?;
    }

    println!("Processed: {}", path.display());
    Ok(RewriteReport {
        processed: 1,
        changed: u64::from(changed),
        failed: 0,
        links_rewritten: rewritten.links_rewritten,
    })
}

/// Rewrites the links of every Markdown file below `root`.
///
/// Files are collected first and then processed in parallel; the call
/// returns once every file has been handled. A file that cannot be read or
/// written is logged and counted as failed without stopping the others.
#[must_use]
pub fn rewrite_tree(root: &Path, options: &RewriteOptions, rules: &IgnoreRules) -> RewriteReport {
    let (documents, walk_failures) = collect_documents(root, options, rules);
    debug!("rewriting links in {} documents", documents.len());

    let report = documents
        .par_iter()
        .map(|path| {
            rewrite_file(path, options.mode).unwrap_or_else(|err| {
                error!("{err:#}");
                RewriteReport {
                    failed: 1,
                    ..RewriteReport::new()
                }
            })
        })
        .reduce(RewriteReport::new, RewriteReport::merge);

    let report = report.merge(RewriteReport {
        failed: walk_failures,
        ..RewriteReport::new()
    });
    info!(
        "processed {} documents, {} changed, {} failed",
        report.processed, report.changed, report.failed
    );
    report
}

fn collect_documents(
    root: &Path,
    options: &RewriteOptions,
    rules: &IgnoreRules,
) -> (Vec<PathBuf>, u64) {
    let mut documents = Vec::new();
    let mut failures: u64 = 0;

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !options.respect_ignore || rules.allows(root, e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).display().to_string();
                error!("Error checking file stats: {path}: {err}");
                failures = failures.saturating_add(1);
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), &options.extensions) {
            documents.push(entry.into_path());
        }
    }

    (documents, failures)
}
