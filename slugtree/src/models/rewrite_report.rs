// src/models/rewrite_report.rs

/// Outcome of a link rewriting run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteReport {
    /// Markdown files read and handled, changed or not.
    pub processed: u64,
    /// Files whose content was written back.
    pub changed: u64,
    /// Files abandoned because of an I/O error.
    pub failed: u64,
    /// Link targets replaced across all files.
    pub links_rewritten: u64,
}

impl RewriteReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            processed: 0,
            changed: 0,
            failed: 0,
            links_rewritten: 0,
        }
    }

    /// Adds the counters of `other` to this report.
    #[inline]
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            processed: self.processed.saturating_add(other.processed),
            changed: self.changed.saturating_add(other.changed),
            failed: self.failed.saturating_add(other.failed),
            links_rewritten: self.links_rewritten.saturating_add(other.links_rewritten),
        }
    }
}
