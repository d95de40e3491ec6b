//! Core primitives for textdelta.
//!
//! Computes a minimal ordered edit script between two texts with the Myers
//! bidirectional search, sped up by common-affix trimming, a speculative
//! half-match split and an optional line-granularity pre-pass, then reshaped
//! by merge, semantic and efficiency cleanup passes. All indexing is in
//! Unicode scalar values; segment texts are always well-formed strings.

pub mod affix;
mod bisect;
pub mod config;
pub mod efficiency;
pub mod engine;
mod half_match;
pub mod html;
pub mod lines;
pub mod merge;
pub mod script;
pub mod semantic;

pub use affix::{common_overlap, common_prefix, common_suffix};
pub use config::DiffConfig;
pub use efficiency::cleanup_efficiency;
pub use engine::Differ;
pub use html::pretty_html;
pub use lines::{lines_to_symbols, symbols_to_lines};
pub use merge::cleanup_merge;
pub use script::{apply, invert, text_source, text_target, EditScript, Op, Segment};
pub use semantic::{cleanup_semantic, cleanup_semantic_lossless};

use thiserror::Error;

/// Failures surfaced by the diff entry points. A deadline running out is
/// not an error; it degrades the result to a coarser but still valid
/// script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("merge invariant violated: {0}")]
    InvariantViolation(&'static str),
    #[error("line index {0} exceeds the symbol code-point space")]
    SymbolOutOfRange(usize),
}

/// Returns the crate version at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
