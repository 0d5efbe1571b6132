//! Human-readable per-document summary.

use crate::assess::QualityReport;

/// Render the console summary for one assessed document.
#[must_use]
pub fn render_summary(filename: &str, report: &QualityReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Results for {filename}"));
    lines.push(String::new());

    if !report.has_purls {
        lines.push("SBOM has no purls.".to_string());
        return lines.join("\n");
    }

    lines.push(format!("Found {} purls.", report.purls));
    lines.push(format!(
        "{:.0}% of purls are valid.",
        report.percentage_valid_purl * 100.0
    ));
    if let Some(pct) = report.licenses.percentage_valid_license_id {
        lines.push(format!(
            "{:.0}% contain SPDX-compliant license ids.",
            pct * 100.0
        ));
    }

    if report.is_schema_compliant {
        lines.push("SBOM is schema compliant.".to_string());
    } else {
        lines.push("SBOM is not CycloneDX schema (v1.4) compliant.".to_string());
    }

    match &report.operating_system.os_found {
        Some(os_found) => {
            let names: Vec<String> = os_found
                .iter()
                .map(|os| {
                    format!(
                        "{} {}",
                        os.name.as_deref().unwrap_or("<unknown>"),
                        os.version.as_deref().unwrap_or("")
                    )
                    .trim_end()
                    .to_string()
                })
                .collect();
            lines.push(format!("SBOM contains OS information: {}", names.join(", ")));
        }
        None => lines.push("SBOM does not contain OS information.".to_string()),
    }

    match &report.sbom_tool.tools {
        Some(tools) => {
            let names: Vec<String> = tools
                .iter()
                .map(|t| t.name.clone().unwrap_or_else(|| "<unnamed>".to_string()))
                .collect();
            lines.push(format!(
                "SBOM generation tools are present: {}",
                names.join(", ")
            ));
        }
        None => lines.push("No SBOM generation tool was found.".to_string()),
    }

    if report.has_dependency_tree {
        lines.push("The SBOM contains a dependency tree.".to_string());
    } else {
        lines.push("The SBOM does not contain a dependency tree.".to_string());
    }

    if let Some(score) = report.quality_score {
        lines.push(format!("The overall SBOM quality score is: {score}/1."));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::{assess_document, SchemaConformance};
    use crate::config::{AssessmentContext, LicenseIndex};
    use crate::model::SbomDocument;
    use serde_json::json;

    fn report_for(raw: serde_json::Value) -> QualityReport {
        let ctx = AssessmentContext::new(
            LicenseIndex::from_identifiers(["MIT"]),
            SchemaConformance::new(&json!({"type": "object"})).unwrap(),
        );
        let doc: SbomDocument = serde_json::from_value(raw.clone()).unwrap();
        assess_document(&doc, &raw, &ctx)
    }

    #[test]
    fn test_summary_for_degraded_document() {
        let report = report_for(json!({}));
        let text = render_summary("empty.json", &report);
        assert!(text.contains("SBOM has no purls."));
        assert!(!text.contains("quality score"));
    }

    #[test]
    fn test_summary_mentions_score_and_counts() {
        let report = report_for(json!({
            "components": [
                {"type": "library", "purl": "pkg:npm/a@1.0.0",
                 "licenses": [{"license": {"id": "MIT"}}]},
                {"type": "operating-system", "name": "alpine", "version": "3.19"}
            ],
            "dependencies": []
        }));

        let text = render_summary("full.json", &report);
        assert!(text.contains("Found 1 purls."));
        assert!(text.contains("100% of purls are valid."));
        assert!(text.contains("alpine 3.19"));
        assert!(text.contains("contains a dependency tree"));
        assert!(text.contains("quality score"));
    }
}
