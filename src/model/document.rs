//! CycloneDX-shaped document model.
//!
//! Field presence is significant for several quality heuristics (dependency
//! graph, tools metadata, per-component licenses), so the optional fields
//! here distinguish "absent" from "present but empty".

use serde::{Deserialize, Serialize};

/// A parsed SBOM document.
///
/// Immutable during assessment; created fresh per input file and discarded
/// once its report has been built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SbomDocument {
    /// Component inventory. `None` means the document has no `components`
    /// field at all, which downgrades the whole assessment.
    pub components: Option<Vec<Component>>,

    /// Dependency graph. Only presence matters to the probes; the entries
    /// themselves are never interpreted.
    pub dependencies: Option<Vec<serde_json::Value>>,

    pub metadata: Option<Metadata>,
}

impl SbomDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Iterate over library components, the only component class the purl
    /// and license validators look at.
    pub fn library_components(&self) -> impl Iterator<Item = &Component> {
        self.components
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|c| c.is_library())
    }

    /// All components, empty when the `components` field is absent.
    pub fn all_components(&self) -> &[Component] {
        self.components.as_deref().unwrap_or_default()
    }
}

/// One component entry.
///
/// `component_type` is an unconstrained string in practice; the CycloneDX
/// enum is not enforced here because only two values are ever matched on.
#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: String,

    pub name: Option<String>,
    pub version: Option<String>,
    pub purl: Option<String>,

    /// Declared licenses. `None` means the component has no `licenses`
    /// field; an empty vector still counts as "has licenses".
    pub licenses: Option<Vec<LicenseEntry>>,
}

impl Component {
    pub fn is_library(&self) -> bool {
        self.component_type == "library"
    }

    pub fn is_operating_system(&self) -> bool {
        self.component_type == "operating-system"
    }
}

/// One declared license, in one of the two CycloneDX shapes.
///
/// The `Other` arm absorbs entries that carry neither an `expression` nor a
/// `license` object so a single junk entry cannot fail the whole document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LicenseEntry {
    /// SPDX expression form, e.g. `{"expression": "MIT OR Apache-2.0"}`.
    /// The expression is treated as one opaque identifier downstream.
    Expression { expression: String },

    /// License-object form, e.g. `{"license": {"id": "MIT"}}`.
    Object { license: LicenseObject },

    /// Anything else.
    Other(serde_json::Value),
}

/// Inner object of the license-object form. Carries either a proper SPDX
/// `id` or a free-text `name`; the distinction decides identifier validity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseObject {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Document metadata; only the tools list is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    pub tools: Option<Vec<Tool>>,
}

/// An SBOM extraction/generation tool declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub vendor: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}
