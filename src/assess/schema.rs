//! Schema conformance check.
//!
//! Delegates entirely to the `jsonschema` engine: the validator is compiled
//! once per run from the CycloneDX 1.4 schema document, and every failure,
//! of any kind at any depth, collapses to a single `false`. No error detail
//! is retained.

use crate::error::{Result, SbomQualityError};
use serde_json::Value;

/// A compiled schema validator, shared read-only across the batch.
#[derive(Debug)]
pub struct SchemaConformance {
    validator: jsonschema::Validator,
}

impl SchemaConformance {
    /// Compile the schema document. A schema that fails to compile aborts
    /// the run before any document is assessed.
    pub fn new(schema: &Value) -> Result<Self> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SbomQualityError::config(format!("schema failed to compile: {e}")))?;
        Ok(Self { validator })
    }

    /// Boolean verdict for a raw document.
    pub fn is_conformant(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }
}
