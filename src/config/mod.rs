//! Run configuration: the shared read-only inputs.
//!
//! The license-identifier set and the compiled schema are loaded once per
//! process invocation, before any document is assessed, and never refreshed.
//! Failure to load either aborts the run; every later failure is scoped to
//! a single document.

use crate::assess::SchemaConformance;
use crate::error::{Result, SbomQualityError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Endpoint of the machine-readable SPDX license list.
#[cfg(feature = "remote-licenses")]
pub const SPDX_LICENSE_LIST_URL: &str =
    "https://raw.githubusercontent.com/spdx/license-list-data/main/json/licenses.json";

/// Membership set of known SPDX license identifiers.
///
/// Either an explicit set (from a license-list file or the remote SPDX
/// endpoint) or the identifier table compiled into the `spdx` crate.
#[derive(Debug, Clone)]
pub struct LicenseIndex {
    ids: Option<HashSet<String>>,
}

/// Wire shape of the SPDX license-list-data JSON document.
#[derive(Deserialize)]
struct SpdxLicenseList {
    licenses: Vec<SpdxLicenseEntry>,
}

#[derive(Deserialize)]
struct SpdxLicenseEntry {
    #[serde(rename = "licenseId")]
    license_id: String,
}

impl LicenseIndex {
    /// Build from an explicit identifier collection.
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Some(identifiers.into_iter().map(Into::into).collect()),
        }
    }

    /// Use the identifier table compiled into the `spdx` crate. Offline
    /// fallback; may lag the published license list.
    #[must_use]
    pub fn builtin() -> Self {
        Self { ids: None }
    }

    /// Load a license-list-data JSON file (`{"licenses": [{"licenseId": ...}]}`).
    pub fn from_license_list_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SbomQualityError::io(path, e))?;
        let list: SpdxLicenseList = serde_json::from_str(&content).map_err(|e| {
            SbomQualityError::config(format!(
                "license list {} is not valid license-list-data JSON: {e}",
                path.display()
            ))
        })?;
        Ok(Self::from_identifiers(
            list.licenses.into_iter().map(|l| l.license_id),
        ))
    }

    /// Fetch the license list from the SPDX license-list-data endpoint.
    #[cfg(feature = "remote-licenses")]
    pub fn fetch_remote() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| SbomQualityError::config(format!("http client: {e}")))?;

        tracing::info!("fetching SPDX license list from {SPDX_LICENSE_LIST_URL}");
        let list: SpdxLicenseList = client
            .get(SPDX_LICENSE_LIST_URL)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|r| r.json())
            .map_err(|e| {
                SbomQualityError::config(format!("failed to fetch SPDX license list: {e}"))
            })?;

        tracing::debug!("loaded {} license identifiers", list.licenses.len());
        Ok(Self::from_identifiers(
            list.licenses.into_iter().map(|l| l.license_id),
        ))
    }

    /// Membership test for a candidate identifier. Exact match only; no
    /// expression decomposition.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        match &self.ids {
            Some(ids) => ids.contains(identifier),
            None => spdx::license_id(identifier).is_some(),
        }
    }
}

/// Immutable configuration for one assessment run.
pub struct AssessmentContext {
    licenses: LicenseIndex,
    schema: SchemaConformance,
}

impl AssessmentContext {
    pub fn new(licenses: LicenseIndex, schema: SchemaConformance) -> Self {
        Self { licenses, schema }
    }

    pub fn licenses(&self) -> &LicenseIndex {
        &self.licenses
    }

    pub fn schema(&self) -> &SchemaConformance {
        &self.schema
    }
}

/// Read a JSON-schema document from disk.
pub fn load_schema_file(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SbomQualityError::config(format!("cannot read schema {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        SbomQualityError::config(format!("schema {} is not valid JSON: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_index_membership() {
        let index = LicenseIndex::from_identifiers(["MIT", "Apache-2.0"]);
        assert!(index.contains("MIT"));
        assert!(!index.contains("GPL-2.0-only"));
        assert!(!index.contains("mit"), "membership is case-sensitive");
    }

    #[test]
    fn test_builtin_index_knows_common_ids() {
        let index = LicenseIndex::builtin();
        assert!(index.contains("MIT"));
        assert!(index.contains("Apache-2.0"));
        assert!(!index.contains("Definitely-Not-A-License"));
    }

    #[test]
    fn test_license_list_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"licenses": [{{"licenseId": "MIT"}}, {{"licenseId": "ISC"}}]}}"#
        )
        .unwrap();

        let index = LicenseIndex::from_license_list_file(file.path()).unwrap();
        assert!(index.contains("MIT"));
        assert!(index.contains("ISC"));
        assert!(!index.contains("Apache-2.0"));
    }

    #[test]
    fn test_malformed_license_list_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"not-licenses": []}}"#).unwrap();

        let err = LicenseIndex::from_license_list_file(file.path()).unwrap_err();
        assert!(matches!(err, SbomQualityError::Config(_)));
    }

    #[test]
    fn test_missing_schema_file_is_config_error() {
        let err = load_schema_file(Path::new("/no/such/schema.json")).unwrap_err();
        assert!(matches!(err, SbomQualityError::Config(_)));
    }
}
