//! Property-based tests for purl normalization and grading.
//!
//! Ensures normalization is idempotent and never panics, and that the
//! grading function is pure, bounded, and total over its input domain.

use proptest::prelude::*;
use sbom_quality::assess::{grade, license_band_score, purl_band_score, GradeInputs};
use sbom_quality::model::normalize_purl;

proptest! {
    #[test]
    fn normalize_never_panics(s in "\\PC{0,200}") {
        let _ = normalize_purl(&s);
    }

    #[test]
    fn normalize_is_idempotent(
        ty in "[a-z]{2,8}",
        namespace in proptest::option::of("[a-z][a-z0-9]{0,12}"),
        name in "[a-z][a-z0-9]{0,16}",
        version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
    ) {
        let raw = match &namespace {
            Some(ns) => format!("pkg:{ty}/{ns}/{name}@{version}"),
            None => format!("pkg:{ty}/{name}@{version}"),
        };

        let once = normalize_purl(&raw).expect("grammar-conforming purl should normalize");
        let twice = normalize_purl(&once).expect("normalized purl should re-normalize");
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn qualifiers_never_survive_normalization(
        name in "[a-z][a-z0-9]{0,16}",
        version in "[0-9]{1,2}\\.[0-9]{1,2}",
        qualifier in "[a-z]{1,8}=[a-z0-9]{1,8}",
    ) {
        let raw = format!("pkg:npm/{name}@{version}?{qualifier}");
        let normalized = normalize_purl(&raw).unwrap();
        prop_assert!(!normalized.contains('?'));
        prop_assert!(!normalized.contains('#'));
    }

    #[test]
    fn grade_is_pure_and_bounded(
        dep in any::<bool>(),
        schema in any::<bool>(),
        os in any::<bool>(),
        pct_purls in 0.0f64..=1.0,
        pct_licenses in 0.0f64..=1.0,
    ) {
        let inputs = GradeInputs {
            has_dependency_tree: dep,
            is_schema_valid: schema,
            has_operating_system: os,
            pct_valid_purls: pct_purls,
            pct_valid_licenses: pct_licenses,
        };

        let first = grade(&inputs);
        let second = grade(&inputs);
        prop_assert_eq!(first, second, "grade must be deterministic");
        prop_assert!((0.0..=1.0).contains(&first), "score {} out of range", first);

        // rounded to 3 decimal places
        prop_assert_eq!((first * 1000.0).round() / 1000.0, first);
    }

    #[test]
    fn every_percentage_falls_in_exactly_one_band(pct in 0.0f64..=1.0) {
        prop_assert!([0.20, 0.90, 0.95, 1.0].contains(&purl_band_score(pct)));
        prop_assert!([0.50, 0.80, 0.90, 0.95, 1.0].contains(&license_band_score(pct)));
    }

    #[test]
    fn monotone_boolean_signals_never_lower_the_score(
        pct_purls in 0.0f64..=1.0,
        pct_licenses in 0.0f64..=1.0,
    ) {
        let base = GradeInputs {
            has_dependency_tree: false,
            is_schema_valid: false,
            has_operating_system: false,
            pct_valid_purls: pct_purls,
            pct_valid_licenses: pct_licenses,
        };
        let all = GradeInputs {
            has_dependency_tree: true,
            is_schema_valid: true,
            has_operating_system: true,
            ..base
        };
        prop_assert!(grade(&all) >= grade(&base));
    }
}
