//! Typed data model for assessed SBOM documents.
//!
//! The model is deliberately loose: it captures only the fields the quality
//! heuristics read, and every field beyond `component.type` is optional.
//! Anything else in the input document is ignored by deserialization and
//! seen only by the schema conformance check, which works on the raw JSON.

mod document;
mod purl;

pub use document::{Component, LicenseEntry, LicenseObject, Metadata, SbomDocument, Tool};
pub use purl::{normalize_purl, CanonicalPurl};
