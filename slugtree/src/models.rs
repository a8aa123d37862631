// src/models.rs
mod link_mode;
mod link_span;
mod rename_report;
mod rename_strategy;
mod rewrite_report;

pub use link_mode::LinkMode;
pub use link_span::LinkSpan;
pub use rename_report::RenameReport;
pub use rename_strategy::RenameStrategy;
pub use rewrite_report::RewriteReport;
