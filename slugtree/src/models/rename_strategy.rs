// src/models/rename_strategy.rs
use serde::Deserialize;

/// How the renamer walks the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RenameStrategy {
    /// Rename one entry, then walk again from the root until nothing changes.
    #[default]
    Restart,
    /// One walk, children before their parent directory.
    BottomUp,
}
