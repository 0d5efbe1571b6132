//! Per-document quality report assembly.
//!
//! The serialized field names here are the wire format of the report
//! artifact; renaming any of them is a breaking change for consumers.

use serde::{Deserialize, Serialize};

use super::licenses::LicenseSummary;
use super::probes::{OperatingSystemInfo, ToolInfo};
use super::purls::PurlCheck;

/// Everything the assessment derived from one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Total library purls examined (valid + invalid).
    pub purls: usize,
    pub has_purls: bool,
    pub percentage_valid_purl: f64,
    pub licenses: LicenseReport,
    pub is_schema_compliant: bool,
    pub operating_system: OperatingSystemReport,
    pub sbom_tool: SbomToolReport,
    pub has_dependency_tree: bool,
    /// Weighted score in [0, 1], or `None` for documents with no library
    /// components, which cannot be graded.
    pub quality_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseReport {
    pub has_license: bool,
    /// Library components with at least one valid SPDX identifier.
    pub valid_licenses: Option<usize>,
    pub percentage_valid_license_id: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingSystemReport {
    pub has_os: bool,
    pub os_found: Option<Vec<OperatingSystemInfo>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SbomToolReport {
    pub has_tool: bool,
    pub tools: Option<Vec<ToolInfo>>,
}

impl QualityReport {
    /// Assemble the full report for a gradable document.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn assembled(
        purl_check: &PurlCheck,
        summary: &LicenseSummary,
        is_schema_compliant: bool,
        os_found: Vec<OperatingSystemInfo>,
        tools: Vec<ToolInfo>,
        has_dependency_tree: bool,
        pct_valid_licenses: f64,
        quality_score: f64,
    ) -> Self {
        Self {
            purls: purl_check.total(),
            has_purls: true,
            percentage_valid_purl: purl_check.percentage_valid().unwrap_or(0.0),
            licenses: LicenseReport {
                has_license: summary.any_licensed(),
                valid_licenses: Some(summary.with_valid_id),
                percentage_valid_license_id: Some(pct_valid_licenses),
            },
            is_schema_compliant,
            operating_system: OperatingSystemReport {
                has_os: !os_found.is_empty(),
                os_found: (!os_found.is_empty()).then_some(os_found),
            },
            sbom_tool: SbomToolReport {
                has_tool: !tools.is_empty(),
                tools: (!tools.is_empty()).then_some(tools),
            },
            has_dependency_tree,
            quality_score: Some(quality_score),
        }
    }

    /// Degraded report for documents with no library purls: counts stay,
    /// ratios and score are absent.
    pub(super) fn degraded(
        is_schema_compliant: bool,
        os_found: Vec<OperatingSystemInfo>,
        tools: Vec<ToolInfo>,
        has_dependency_tree: bool,
    ) -> Self {
        Self {
            purls: 0,
            has_purls: false,
            percentage_valid_purl: 0.0,
            licenses: LicenseReport {
                has_license: false,
                valid_licenses: None,
                percentage_valid_license_id: None,
            },
            is_schema_compliant,
            operating_system: OperatingSystemReport {
                has_os: !os_found.is_empty(),
                os_found: (!os_found.is_empty()).then_some(os_found),
            },
            sbom_tool: SbomToolReport {
                has_tool: !tools.is_empty(),
                tools: (!tools.is_empty()).then_some(tools),
            },
            has_dependency_tree,
            quality_score: None,
        }
    }
}
