// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use log::warn;
use std::path::PathBuf;

use crate::config::{FileConfig, Settings};
use crate::core::ignore::IgnoreRules;
use crate::core::rename::rename_tree;
use crate::core::rewrite::rewrite_tree;
use crate::error::SlugError;
use crate::models::RenameStrategy;

/// Clean up file names in a notes tree and fix the Markdown links to them
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to clean up
    pub directory: PathBuf,

    /// Directory name to leave untouched; repeat for several (default: node_modules)
    #[arg(short, long, value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Rewrite link targets only inside link syntax, not everywhere in the text
    #[arg(short, long)]
    pub strict_links: bool,

    /// How renaming walks the tree
    #[arg(long, value_enum)]
    pub strategy: Option<RenameStrategy>,

    /// Only rename files and folders
    #[arg(long, conflicts_with = "links_only")]
    pub names_only: bool,

    /// Only rewrite links
    #[arg(long)]
    pub links_only: bool,

    /// Config file (defaults to slugtree.toml inside DIRECTORY)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Renames every entry to its cleaned form, then rewrites the links in the
/// Markdown documents to match.
///
/// # Errors
///
/// Fails if the directory does not exist, the configuration or ignore file
/// is invalid, or a rename fails. Per-document failures while rewriting
/// links are logged and do not fail the run.
pub fn run(args: Args) -> Result<()> {
    if !args.directory.is_dir() {
        return Err(SlugError::NotADirectory {
            path: args.directory,
        }
        .into());
    }

    let file_config = FileConfig::discover(&args.directory, args.config.as_deref())?;
    let settings = Settings::resolve(&args, file_config);
    let rules = IgnoreRules::load(&args.directory, settings.ignore_markers.clone())?;

    if settings.rename_names {
        rename_tree(&args.directory, &rules, settings.strategy).with_context(|| {
            format!("Failed to rename entries in: {}", args.directory.display())
        })?;
    }

    if settings.rewrite_links {
        let report = rewrite_tree(&args.directory, &settings.rewrite_options(), &rules);
        if report.failed > 0 {
            warn!(
                "{} of {} documents could not be rewritten",
                report.failed,
                report.failed.saturating_add(report.processed)
            );
        }
    }

    Ok(())
}
