//! JSON report artifact.

use crate::error::{Result, SbomQualityError};
use crate::pipeline::BatchEntry;

/// Serialize the batch to the report artifact: a JSON array with one
/// object per assessed document, in input order.
pub fn render_artifact(entries: &[BatchEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| SbomQualityError::report(format!("serializing report artifact: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_is_ordered_array() {
        let entries = vec![
            BatchEntry::Failed {
                filename: "first.json".to_string(),
                error: "boom".to_string(),
            },
            BatchEntry::Failed {
                filename: "second.json".to_string(),
                error: "boom".to_string(),
            },
        ];

        let artifact = render_artifact(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&artifact).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array[0]["filename"], "first.json");
        assert_eq!(array[1]["filename"], "second.json");
    }
}
