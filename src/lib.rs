//! **Quality assessment for Software Bills of Materials (SBOMs).**
//!
//! `sbom-quality` grades CycloneDX-style SBOM documents against a set of
//! quality heuristics and produces a normalized score in [0, 1] plus a
//! structured report. It powers a small CLI and is usable as a library.
//!
//! ## Heuristics
//!
//! - **Purl validity**: every library component's package URL is parsed,
//!   normalized, and required to carry a version.
//! - **License validity**: declared licenses are classified against the
//!   SPDX identifier set (expression strings are treated as opaque).
//! - **Dependency graph, OS, and tooling metadata**: presence probes.
//! - **Schema conformance**: delegated to a JSON-schema engine and
//!   collapsed to a single boolean.
//!
//! The weighted grader combines these signals through bucketed scoring
//! curves; see [`assess::grade`].
//!
//! ## Modules
//!
//! - [`model`]: the typed document model and purl normalization.
//! - [`assess`]: validators, probes, grader, and per-document reports.
//! - [`config`]: the load-once license index and schema validator.
//! - [`pipeline`]: input discovery, batch driver, output handling.
//! - [`reports`]: JSON artifact and console summary rendering.
//! - [`cli`]: command handlers for the binary.

pub mod assess;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

pub use assess::{assess_document, QualityReport};
pub use config::{AssessmentContext, LicenseIndex};
pub use error::{Result, SbomQualityError};
pub use model::SbomDocument;
