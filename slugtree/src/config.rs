// src/config.rs
use crate::cli::Args;
use crate::core::ignore::DEFAULT_IGNORE_MARKER;
use crate::core::rewrite::RewriteOptions;
use crate::models::{LinkMode, RenameStrategy};
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "slugtree.toml";

/// Contents of a `slugtree.toml` file. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub ignore: Option<Vec<String>>,
    pub strict_links: Option<bool>,
    pub strategy: Option<RenameStrategy>,
    pub extensions: Option<Vec<String>>,
    pub rewrite_respects_ignore: Option<bool>,
}

impl FileConfig {
    /// Parses a configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads `explicit` if given, otherwise `slugtree.toml` in `root` when it
    /// exists, otherwise the empty configuration.
    ///
    /// # Errors
    ///
    /// Fails if the selected file cannot be read or parsed.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = root.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Effective settings for one run: command line over config file over
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ignore_markers: Vec<String>,
    pub link_mode: LinkMode,
    pub strategy: RenameStrategy,
    pub extensions: Vec<String>,
    pub rewrite_respects_ignore: bool,
    pub rename_names: bool,
    pub rewrite_links: bool,
}

impl Settings {
    #[must_use]
    pub fn resolve(args: &Args, file: FileConfig) -> Self {
        let ignore_markers = if args.ignore.is_empty() {
            file.ignore
                .unwrap_or_else(|| vec![String::from(DEFAULT_IGNORE_MARKER)])
        } else {
            args.ignore.clone()
        };
        let extensions = file
            .extensions
            .map(|exts| {
                exts.into_iter()
                    .map(|ext| ext.trim_start_matches('.').to_owned())
                    .collect()
            })
            .unwrap_or_else(|| vec![String::from("md")]);

        Self {
            ignore_markers,
            link_mode: LinkMode::from_strict(
                args.strict_links || file.strict_links.unwrap_or(false),
            ),
            strategy: args.strategy.or(file.strategy).unwrap_or_default(),
            extensions,
            rewrite_respects_ignore: file.rewrite_respects_ignore.unwrap_or(false),
            rename_names: !args.links_only,
            rewrite_links: !args.names_only,
        }
    }

    #[must_use]
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            mode: self.link_mode,
            extensions: self.extensions.clone(),
            respect_ignore: self.rewrite_respects_ignore,
        }
    }
}
