//! Weighted quality grading.
//!
//! Combines the boolean signals and the two percentages into one score in
//! [0, 1]. Percentages pass through bucketed curves first; the curves are
//! deliberately non-linear so that "almost all purls valid" is rewarded
//! far more than "most purls valid". Band bounds are inclusive and
//! evaluated on whole percent points, so every input falls in exactly one
//! band.

/// Fixed signal weights; they sum to 1.0.
pub mod weights {
    pub const DEPENDENCY_TREE: f64 = 0.20;
    pub const SCHEMA_VALID: f64 = 0.10;
    pub const OPERATING_SYSTEM: f64 = 0.10;
    pub const VALID_LICENSES: f64 = 0.10;
    pub const VALID_PURLS: f64 = 0.50;
}

/// Inputs to the grading function.
///
/// Percentages are fractions in [0, 1], already rounded to 2 decimals by
/// the validators that produce them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeInputs {
    pub has_dependency_tree: bool,
    pub is_schema_valid: bool,
    pub has_operating_system: bool,
    pub pct_valid_purls: f64,
    pub pct_valid_licenses: f64,
}

/// Map a fraction to whole percent points for band lookup.
fn percent_points(pct: f64) -> u32 {
    (pct.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Bucketed curve for the valid-purl percentage.
#[must_use]
pub fn purl_band_score(pct_valid_purls: f64) -> f64 {
    match percent_points(pct_valid_purls) {
        0..=80 => 0.20,
        81..=90 => 0.90,
        91..=99 => 0.95,
        _ => 1.0,
    }
}

/// Bucketed curve for the valid-license percentage.
#[must_use]
pub fn license_band_score(pct_valid_licenses: f64) -> f64 {
    match percent_points(pct_valid_licenses) {
        0..=50 => 0.50,
        51..=75 => 0.80,
        76..=90 => 0.90,
        91..=99 => 0.95,
        _ => 1.0,
    }
}

/// Compute the weighted quality score, rounded to 3 decimal places.
///
/// Pure and deterministic: identical inputs always yield the identical
/// rounded score. Callers must skip grading entirely for documents without
/// library components; that case has no defined score.
#[must_use]
pub fn grade(inputs: &GradeInputs) -> f64 {
    let bool_score = |signal: bool| if signal { 1.0 } else { 0.0 };

    let score = bool_score(inputs.has_dependency_tree) * weights::DEPENDENCY_TREE
        + bool_score(inputs.is_schema_valid) * weights::SCHEMA_VALID
        + bool_score(inputs.has_operating_system) * weights::OPERATING_SYSTEM
        + license_band_score(inputs.pct_valid_licenses) * weights::VALID_LICENSES
        + purl_band_score(inputs.pct_valid_purls) * weights::VALID_PURLS;

    round3(score)
}

/// Round to 3 decimal places.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
