//! sbom-quality: SBOM quality assessment tool
//!
//! Grades CycloneDX SBOM documents against purl, license, metadata, and
//! schema heuristics.

use clap::Parser;
use sbom_quality::cli::{self, AssessConfig};
use sbom_quality::pipeline::exit_codes;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-quality")]
#[command(version)]
#[command(about = "Assess the quality of CycloneDX SBOM documents", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All documents assessed
    1  One or more documents could not be assessed
    3  Error occurred (bad path, schema or license list unavailable)

EXAMPLES:
    # Assess one SBOM
    sbom-quality sbom.json

    # Assess a directory and persist the report artifact
    sbom-quality ./sboms --report -O fleet-report.json

    # Fully offline run
    sbom-quality sbom.json --offline-licenses --schema bom-1.4.schema.json")]
struct Cli {
    /// SBOM file or directory containing .json SBOM documents
    path: PathBuf,

    /// Generate the JSON report artifact
    #[arg(long)]
    report: bool,

    /// Report artifact path
    #[arg(short = 'O', long, default_value = "report.json")]
    output_file: PathBuf,

    /// CycloneDX 1.4 JSON-schema document
    #[arg(long, env = "SBOM_QUALITY_SCHEMA", default_value = "bom-1.4.schema.json")]
    schema: PathBuf,

    /// SPDX license-list-data JSON file (skips the remote fetch)
    #[arg(long, env = "SBOM_QUALITY_LICENSES")]
    licenses: Option<PathBuf>,

    /// Use the builtin SPDX identifier table instead of fetching the list
    #[arg(long)]
    offline_licenses: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress per-document summaries
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = AssessConfig {
        input_path: cli.path,
        schema_path: cli.schema,
        license_file: cli.licenses,
        offline_licenses: cli.offline_licenses,
        generate_report: cli.report,
        output_file: cli.output_file,
        quiet: cli.quiet,
    };

    match cli::run_assess(config) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
