//! Purl validation across library components.

use crate::model::{normalize_purl, SbomDocument};

/// Outcome of scanning every library component's purl.
#[derive(Debug, Clone, Default)]
pub struct PurlCheck {
    /// Normalized purls that parsed and carried a version.
    pub valid: Vec<String>,
    /// Raw values that failed normalization; an empty string stands in for
    /// a library component with no purl field at all.
    pub invalid: Vec<String>,
    /// False when the document has no `components` field or no library
    /// components. Callers must branch on this before reading percentages.
    pub has_purls: bool,
}

impl PurlCheck {
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Share of valid purls, rounded to 2 decimals. `None` when the
    /// document carries no library purls and the ratio is undefined.
    pub fn percentage_valid(&self) -> Option<f64> {
        if !self.has_purls {
            return None;
        }
        Some(super::round2(self.valid.len() as f64 / self.total() as f64))
    }
}

/// Validate the purl of every library component.
///
/// Missing fields and malformed values are recovered locally into the
/// invalid set; this function never fails.
pub fn validate_purls(doc: &SbomDocument) -> PurlCheck {
    let Some(components) = &doc.components else {
        return PurlCheck::default();
    };

    let mut check = PurlCheck::default();
    for component in components.iter().filter(|c| c.is_library()) {
        match &component.purl {
            Some(raw) => match normalize_purl(raw) {
                Ok(normalized) => check.valid.push(normalized),
                Err(err) => {
                    tracing::debug!("invalid purl: {err}");
                    check.invalid.push(raw.clone());
                }
            },
            None => {
                tracing::debug!(
                    "library component {:?} has no purl field",
                    component.name.as_deref().unwrap_or("<unnamed>")
                );
                check.invalid.push(String::new());
            }
        }
    }

    check.has_purls = check.total() > 0;
    check
}
