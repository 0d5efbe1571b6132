//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; the binary only parses arguments
//! and maps the returned exit code.

mod assess;

pub use assess::{run_assess, AssessConfig};
