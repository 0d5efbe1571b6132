//! Metadata probes: pure reads over the document.
//!
//! Three independent presence scans feeding the grader and the report:
//! dependency graph, operating-system components, extraction tooling.

use crate::model::SbomDocument;
use serde::{Deserialize, Serialize};

/// An operating-system component found in the inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingSystemInfo {
    #[serde(rename = "os_name")]
    pub name: Option<String>,
    #[serde(rename = "os_version")]
    pub version: Option<String>,
}

/// An extraction tool recorded under `metadata.tools`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    #[serde(rename = "tool_vendor")]
    pub vendor: Option<String>,
    #[serde(rename = "tool_name")]
    pub name: Option<String>,
    #[serde(rename = "tool_version")]
    pub version: Option<String>,
}

/// True iff the document carries a `dependencies` field.
///
/// Presence only: an empty array still counts, because the field existing
/// at all signals the producer attempted a dependency graph.
pub fn dependency_tree_present(doc: &SbomDocument) -> bool {
    doc.dependencies.is_some()
}

/// Collect `operating-system` components; empty means none were declared.
pub fn operating_systems(doc: &SbomDocument) -> Vec<OperatingSystemInfo> {
    doc.all_components()
        .iter()
        .filter(|c| c.is_operating_system())
        .map(|c| OperatingSystemInfo {
            name: c.name.clone(),
            version: c.version.clone(),
        })
        .collect()
}

/// Collect declared extraction tools; empty when `metadata.tools` is
/// absent or empty.
pub fn extraction_tools(doc: &SbomDocument) -> Vec<ToolInfo> {
    doc.metadata
        .as_ref()
        .and_then(|m| m.tools.as_deref())
        .unwrap_or_default()
        .iter()
        .map(|t| ToolInfo {
            vendor: t.vendor.clone(),
            name: t.name.clone(),
            version: t.version.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SbomDocument;

    fn doc(json: &str) -> SbomDocument {
        SbomDocument::from_json(json).unwrap()
    }

    #[test]
    fn test_dependency_presence_not_emptiness() {
        assert!(!dependency_tree_present(&doc("{}")));
        assert!(dependency_tree_present(&doc(r#"{"dependencies": []}"#)));
        assert!(dependency_tree_present(&doc(
            r#"{"dependencies": [{"ref": "a", "dependsOn": ["b"]}]}"#
        )));
    }

    #[test]
    fn test_operating_system_probe() {
        let found = operating_systems(&doc(
            r#"{"components": [
                {"type": "library", "name": "lodash"},
                {"type": "operating-system", "name": "alpine", "version": "3.19"},
                {"type": "operating-system"}
            ]}"#,
        ));

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name.as_deref(), Some("alpine"));
        assert_eq!(found[0].version.as_deref(), Some("3.19"));
        assert!(found[1].name.is_none() && found[1].version.is_none());
    }

    #[test]
    fn test_os_probe_without_components() {
        assert!(operating_systems(&doc("{}")).is_empty());
    }

    #[test]
    fn test_tool_probe() {
        let tools = extraction_tools(&doc(
            r#"{"metadata": {"tools": [{"vendor": "anchore", "name": "syft"}]}}"#,
        ));
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].vendor.as_deref(), Some("anchore"));
        assert_eq!(tools[0].name.as_deref(), Some("syft"));
        assert!(tools[0].version.is_none());

        assert!(extraction_tools(&doc("{}")).is_empty());
        assert!(extraction_tools(&doc(r#"{"metadata": {"tools": []}}"#)).is_empty());
    }
}
