// src/models/link_span.rs

use std::ops::Range;

/// A link target found in a document, with the byte range it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    pub target: String,
    pub range: Range<usize>,
}
