//! JSON serialization for analysis results.

use crate::evalue::MultiEvalue;

/// Serialize a MultiEvalue to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// MultiEvalue).
pub fn to_json(result: &MultiEvalue) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a MultiEvalue to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// MultiEvalue).
pub fn to_json_pretty(result: &MultiEvalue) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let result = MultiEvalue {
            point: 7.46,
            lower: Some(4.2),
            upper: None,
        };
        let json = to_json(&result).expect("should serialize");
        assert!(json.contains("point"));
        let back: MultiEvalue = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(back, result);
    }

    #[test]
    fn pretty_output_is_multiline() {
        let result = MultiEvalue {
            point: 1.0,
            lower: None,
            upper: Some(1.0),
        };
        assert!(to_json_pretty(&result)
            .expect("should serialize")
            .contains('\n'));
    }
}
