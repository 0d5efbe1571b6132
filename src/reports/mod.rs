//! Report rendering.
//!
//! Two renderers over the same batch entries: the persisted JSON artifact
//! and a per-document console summary.

mod json;
mod summary;

pub use json::render_artifact;
pub use summary::render_summary;
