// src/core.rs
pub mod ignore;
pub mod links;
pub mod normalize;
pub mod rename;
pub mod rewrite;
