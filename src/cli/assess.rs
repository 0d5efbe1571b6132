//! Assess command handler.

use crate::assess::SchemaConformance;
use crate::config::{load_schema_file, AssessmentContext, LicenseIndex};
use crate::pipeline::{
    assess_batch, discover_inputs, exit_codes, write_output, BatchEntry, OutputTarget,
};
use crate::reports::{render_artifact, render_summary};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Assess command configuration
pub struct AssessConfig {
    /// SBOM file, or directory scanned for `.json` files
    pub input_path: PathBuf,
    /// CycloneDX 1.4 JSON-schema document
    pub schema_path: PathBuf,
    /// Explicit SPDX license-list-data file; overrides remote/builtin
    pub license_file: Option<PathBuf>,
    /// Skip the remote license-list fetch and use the builtin table
    pub offline_licenses: bool,
    /// Emit the JSON report artifact
    pub generate_report: bool,
    /// Report artifact path
    pub output_file: PathBuf,
    pub quiet: bool,
}

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(config: AssessConfig) -> Result<i32> {
    let ctx = build_context(&config)?;

    let files = discover_inputs(&config.input_path)
        .with_context(|| format!("resolving input path {}", config.input_path.display()))?;
    if files.is_empty() {
        tracing::warn!(
            "no .json files found under {}",
            config.input_path.display()
        );
        return Ok(exit_codes::SUCCESS);
    }

    tracing::info!("assessing {} document(s)", files.len());
    let entries = assess_batch(&files, &ctx);

    if !config.quiet {
        for entry in &entries {
            match entry {
                BatchEntry::Assessed { filename, report } => {
                    println!("{}\n", render_summary(filename, report));
                }
                BatchEntry::Failed { filename, error } => {
                    println!("Could not assess {filename}: {error}\n");
                }
            }
        }
    }

    if config.generate_report {
        let artifact = render_artifact(&entries)?;
        write_output(
            &artifact,
            &OutputTarget::File(config.output_file.clone()),
            config.quiet,
        )?;
    }

    if entries.iter().any(BatchEntry::is_failed) {
        return Ok(exit_codes::DOCUMENT_FAILURES);
    }
    Ok(exit_codes::SUCCESS)
}

/// Load the two shared read-only inputs. Any failure here aborts the run
/// before a single document is touched.
fn build_context(config: &AssessConfig) -> Result<AssessmentContext> {
    let schema_value = load_schema_file(&config.schema_path)
        .with_context(|| format!("loading schema {}", config.schema_path.display()))?;
    let schema = SchemaConformance::new(&schema_value)?;

    let licenses = match &config.license_file {
        Some(path) => LicenseIndex::from_license_list_file(path)
            .with_context(|| format!("loading license list {}", path.display()))?,
        None => load_default_licenses(config.offline_licenses)?,
    };

    Ok(AssessmentContext::new(licenses, schema))
}

#[cfg(feature = "remote-licenses")]
fn load_default_licenses(offline: bool) -> Result<LicenseIndex> {
    if offline {
        tracing::debug!("using builtin SPDX identifier table");
        return Ok(LicenseIndex::builtin());
    }
    Ok(LicenseIndex::fetch_remote()?)
}

#[cfg(not(feature = "remote-licenses"))]
fn load_default_licenses(_offline: bool) -> Result<LicenseIndex> {
    tracing::debug!("using builtin SPDX identifier table");
    Ok(LicenseIndex::builtin())
}
