// src/models/link_mode.rs

/// How a cleaned link target is written back into its document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkMode {
    /// Replace every occurrence of the old target anywhere in the document.
    #[default]
    Blind,
    /// Replace only the target inside the link syntax it was found in.
    Strict,
}

impl LinkMode {
    #[inline]
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Blind }
    }
}
