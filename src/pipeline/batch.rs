//! Batch assessment driver.
//!
//! Documents are independent, so the batch runs on a rayon thread pool;
//! the indexed collect keeps the aggregate in input order regardless of
//! completion order.

use crate::assess::{assess_document, QualityReport};
use crate::config::AssessmentContext;
use crate::error::Result;
use crate::model::SbomDocument;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One entry of the batch report artifact, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchEntry {
    /// A completed assessment.
    Assessed {
        filename: String,
        #[serde(flatten)]
        report: QualityReport,
    },
    /// A document that could not be read or parsed. The rest of the batch
    /// is unaffected.
    Failed { filename: String, error: String },
}

impl BatchEntry {
    pub fn filename(&self) -> &str {
        match self {
            Self::Assessed { filename, .. } | Self::Failed { filename, .. } => filename,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Read, parse, and assess a single SBOM file.
pub fn assess_file(path: &Path, ctx: &AssessmentContext) -> Result<QualityReport> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::SbomQualityError::io(path, e))?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    let doc: SbomDocument = serde_json::from_value(raw.clone())?;

    Ok(assess_document(&doc, &raw, ctx))
}

/// Assess every file in the batch, preserving input order.
pub fn assess_batch(paths: &[PathBuf], ctx: &AssessmentContext) -> Vec<BatchEntry> {
    paths
        .par_iter()
        .map(|path| {
            let filename = path.display().to_string();
            match assess_file(path, ctx) {
                Ok(report) => {
                    tracing::debug!("assessed {filename}");
                    BatchEntry::Assessed { filename, report }
                }
                Err(err) => {
                    tracing::warn!("skipping {filename}: {err}");
                    BatchEntry::Failed {
                        filename,
                        error: err.to_string(),
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::SchemaConformance;
    use crate::config::LicenseIndex;
    use serde_json::json;
    use std::fs;

    fn ctx() -> AssessmentContext {
        AssessmentContext::new(
            LicenseIndex::from_identifiers(["MIT"]),
            SchemaConformance::new(&json!({"type": "object"})).unwrap(),
        )
    }

    #[test]
    fn test_batch_records_failures_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(
            &good,
            r#"{"components": [{"type": "library", "purl": "pkg:npm/a@1.0.0"}]}"#,
        )
        .unwrap();
        fs::write(&bad, "{not json").unwrap();

        let paths = vec![bad.clone(), good.clone()];
        let entries = assess_batch(&paths, &ctx());

        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_failed());
        assert_eq!(entries[0].filename(), bad.display().to_string());
        assert!(!entries[1].is_failed());
        assert_eq!(entries[1].filename(), good.display().to_string());
    }

    #[test]
    fn test_assess_file_missing_path() {
        assert!(assess_file(Path::new("/no/such/file.json"), &ctx()).is_err());
    }

    #[test]
    fn test_batch_entry_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sbom.json");
        fs::write(
            &path,
            r#"{"components": [{"type": "library", "purl": "pkg:npm/a@1.0.0",
                "licenses": [{"license": {"id": "MIT"}}]}],
                "dependencies": []}"#,
        )
        .unwrap();

        let entries = assess_batch(&[path], &ctx());
        let serialized = serde_json::to_string_pretty(&entries).unwrap();
        let reparsed: Vec<BatchEntry> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(entries, reparsed);
    }
}
