//! License classification against the SPDX identifier set.
//!
//! No expression parsing is performed: a compound expression such as
//! `MIT OR Apache-2.0` is one opaque candidate and classifies as invalid
//! unless the identifier set contains it verbatim.

use crate::config::LicenseIndex;
use crate::model::{LicenseEntry, SbomDocument};

/// Placeholder identifier recorded when a license-object carries neither
/// an `id` nor a `name`. Classified invalid rather than failing the
/// document.
pub const UNSPECIFIED_LICENSE: &str = "(unspecified)";

/// Per-library-component license classification.
#[derive(Debug, Clone)]
pub struct ComponentLicenseCheck {
    pub purl: Option<String>,
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
    /// False only when the component has no `licenses` field at all; an
    /// empty array still counts as true.
    pub has_licenses: bool,
}

/// Reduction of the per-component records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseSummary {
    /// Library components examined.
    pub total: usize,
    pub with_licenses: usize,
    pub without_licenses: usize,
    /// Components with at least one valid identifier; mixed valid/invalid
    /// still counts.
    pub with_valid_id: usize,
}

impl LicenseSummary {
    /// Document-level flag for the report: did any library component
    /// declare licenses at all?
    pub fn any_licensed(&self) -> bool {
        self.with_licenses > 0
    }

    /// Share of library purls backed by at least one valid identifier,
    /// rounded to 2 decimals. The denominator is the library purl count,
    /// not the licensed-component count.
    pub fn percentage_valid(&self, total_purls: usize) -> Option<f64> {
        if total_purls == 0 {
            return None;
        }
        Some(super::round2(self.with_valid_id as f64 / total_purls as f64))
    }
}

/// Classify every library component's declared licenses.
pub fn validate_licenses(doc: &SbomDocument, index: &LicenseIndex) -> Vec<ComponentLicenseCheck> {
    doc.library_components()
        .map(|component| {
            let mut check = ComponentLicenseCheck {
                purl: component.purl.clone(),
                valid: Vec::new(),
                invalid: Vec::new(),
                has_licenses: component.licenses.is_some(),
            };

            for entry in component.licenses.as_deref().unwrap_or_default() {
                classify(entry, index, &mut check);
            }

            check
        })
        .collect()
}

fn classify(entry: &LicenseEntry, index: &LicenseIndex, check: &mut ComponentLicenseCheck) {
    match entry {
        LicenseEntry::Expression { expression } => {
            if index.contains(expression) {
                check.valid.push(expression.clone());
            } else {
                check.invalid.push(expression.clone());
            }
        }
        LicenseEntry::Object { license } => match (&license.id, &license.name) {
            (Some(id), _) => {
                if index.contains(id) {
                    check.valid.push(id.clone());
                } else {
                    check.invalid.push(id.clone());
                }
            }
            // name-only carries no SPDX identifier, so it can never be valid
            (None, Some(name)) => check.invalid.push(name.clone()),
            (None, None) => check.invalid.push(UNSPECIFIED_LICENSE.to_string()),
        },
        LicenseEntry::Other(_) => check.invalid.push(UNSPECIFIED_LICENSE.to_string()),
    }
}

/// Reduce per-component records into the counts the grader consumes.
pub fn summarize(checks: &[ComponentLicenseCheck]) -> LicenseSummary {
    let mut summary = LicenseSummary {
        total: checks.len(),
        ..LicenseSummary::default()
    };

    for check in checks {
        if check.has_licenses {
            summary.with_licenses += 1;
            if !check.valid.is_empty() {
                summary.with_valid_id += 1;
            }
        } else {
            summary.without_licenses += 1;
        }
    }

    summary
}
