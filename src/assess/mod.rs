//! SBOM quality assessment.
//!
//! The per-document pipeline: purl validation and license classification
//! run over the parsed component list, the metadata probes and the schema
//! check run independently over the document, and the grader folds all of
//! it into one weighted score. Each assessment is a pure function of the
//! document plus the shared read-only [`AssessmentContext`].
//!
//! # Usage
//!
//! ```no_run
//! use sbom_quality::assess::assess_document;
//! use sbom_quality::config::{AssessmentContext, LicenseIndex};
//! use sbom_quality::assess::SchemaConformance;
//! use sbom_quality::model::SbomDocument;
//!
//! let schema = serde_json::json!({"type": "object"});
//! let ctx = AssessmentContext::new(
//!     LicenseIndex::builtin(),
//!     SchemaConformance::new(&schema).unwrap(),
//! );
//!
//! let raw: serde_json::Value = serde_json::from_str("{}").unwrap();
//! let doc = SbomDocument::from_json("{}").unwrap();
//! let report = assess_document(&doc, &raw, &ctx);
//! println!("score: {:?}", report.quality_score);
//! ```

mod grader;
mod licenses;
mod probes;
mod purls;
mod report;
mod schema;

pub use grader::{grade, license_band_score, purl_band_score, weights, GradeInputs};
pub use licenses::{
    summarize, validate_licenses, ComponentLicenseCheck, LicenseSummary, UNSPECIFIED_LICENSE,
};
pub use probes::{
    dependency_tree_present, extraction_tools, operating_systems, OperatingSystemInfo, ToolInfo,
};
pub use purls::{validate_purls, PurlCheck};
pub use report::{LicenseReport, OperatingSystemReport, QualityReport, SbomToolReport};
pub use schema::SchemaConformance;

use crate::config::AssessmentContext;
use crate::model::SbomDocument;
use serde_json::Value;

/// Round to 2 decimal places. All percentages are rounded here before
/// band lookup so no value can straddle a band boundary.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Assess one document against the shared context.
///
/// `raw` is the unparsed JSON of the same document; the schema check works
/// on it because conformance covers fields the typed model drops. Never
/// fails: every per-document problem is folded into the report.
pub fn assess_document(doc: &SbomDocument, raw: &Value, ctx: &AssessmentContext) -> QualityReport {
    let is_schema_compliant = ctx.schema().is_conformant(raw);
    let purl_check = validate_purls(doc);

    let os_found = operating_systems(doc);
    let tools = extraction_tools(doc);
    let has_dependency_tree = dependency_tree_present(doc);

    if !purl_check.has_purls {
        tracing::debug!("document has no library purls; skipping grading");
        return QualityReport::degraded(is_schema_compliant, os_found, tools, has_dependency_tree);
    }

    let license_checks = validate_licenses(doc, ctx.licenses());
    let summary = summarize(&license_checks);

    let pct_valid_purls = purl_check.percentage_valid().unwrap_or(0.0);
    let pct_valid_licenses = summary
        .percentage_valid(purl_check.total())
        .unwrap_or(0.0);

    let score = grade(&GradeInputs {
        has_dependency_tree,
        is_schema_valid: is_schema_compliant,
        has_operating_system: !os_found.is_empty(),
        pct_valid_purls,
        pct_valid_licenses,
    });

    QualityReport::assembled(
        &purl_check,
        &summary,
        is_schema_compliant,
        os_found,
        tools,
        has_dependency_tree,
        pct_valid_licenses,
        score,
    )
}
