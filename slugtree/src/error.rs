// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a rename pass.
///
/// Per-file problems in the link rewriter are logged and counted instead of
/// being raised, so only the renamer and the driver produce these.
#[derive(Debug, Error)]
pub enum SlugError {
    #[error("failed to rename '{}' to '{}'", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot rename '{}': '{}' already exists", from.display(), to.display())]
    TargetExists { from: PathBuf, to: PathBuf },
    #[error("'{}' has no characters left after cleaning", path.display())]
    EmptyName { path: PathBuf },
    #[error("failed to walk '{}'", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Directory '{}' not found.", path.display())]
    NotADirectory { path: PathBuf },
}

pub type SlugResult<T> = Result<T, SlugError>;
