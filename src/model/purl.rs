//! Package URL normalization.
//!
//! Parsing is delegated to the `packageurl` crate (the generic purl
//! grammar); this module layers the stricter local rule on top: a purl
//! without a version is unusable for quality scoring, and qualifiers and
//! subpath never survive normalization.

use crate::error::PurlError;
use packageurl::PackageUrl;
use std::fmt;
use std::str::FromStr;

/// A purl reduced to its canonical `type/namespace/name@version` core.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPurl {
    pub ty: String,
    pub namespace: Option<String>,
    pub name: String,
    pub version: String,
}

impl CanonicalPurl {
    /// Parse a raw purl string.
    ///
    /// Fails when the string does not match the purl grammar or when the
    /// version is absent or empty.
    pub fn parse(raw: &str) -> Result<Self, PurlError> {
        let parsed = PackageUrl::from_str(raw).map_err(|e| PurlError::Malformed {
            purl: raw.to_string(),
            reason: e.to_string(),
        })?;

        let version = match parsed.version() {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => {
                return Err(PurlError::MissingVersion {
                    purl: raw.to_string(),
                })
            }
        };

        Ok(Self {
            ty: parsed.ty().to_string(),
            namespace: parsed.namespace().map(str::to_string),
            name: parsed.name().to_string(),
            version,
        })
    }
}

impl fmt::Display for CanonicalPurl {
    /// Deterministic re-serialization; qualifiers and subpath are gone.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "pkg:{}/{}/{}@{}", self.ty, ns, self.name, self.version),
            None => write!(f, "pkg:{}/{}@{}", self.ty, self.name, self.version),
        }
    }
}

/// Normalize a purl string to its canonical form.
pub fn normalize_purl(raw: &str) -> Result<String, PurlError> {
    CanonicalPurl::parse(raw).map(|p| p.to_string())
}
