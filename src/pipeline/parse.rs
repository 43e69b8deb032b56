use serde_json::Value;
use tracing::warn;

use crate::models::RawActionItem;

/// Parse the model's raw completion into action item candidates.
///
/// Two shapes are recognized: a bare JSON array, or an object carrying an
/// `actionItems` array property (models wrap their output in one or the other
/// depending on mood). Anything else — including text that is not JSON at all —
/// is logged and mapped to an empty sequence. This fail-soft policy is the
/// pipeline contract: parse trouble never propagates past this boundary, and
/// downstream code treats an empty result as a legitimate outcome.
///
/// Field values are trusted as-is, including the "N/A" sentinel; elements that
/// are not objects are skipped rather than failing the batch.
pub fn parse_model_response(raw: &str) -> Vec<RawActionItem> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("Model output is not valid JSON: {}", e);
            return Vec::new();
        }
    };

    let candidates = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("actionItems") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("Model output is an object without an actionItems array");
                return Vec::new();
            }
        },
        _ => {
            warn!("Model output is not a JSON array or object");
            return Vec::new();
        }
    };

    candidates
        .into_iter()
        .filter_map(|candidate| match serde_json::from_value(candidate) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping malformed action item candidate: {}", e);
                None
            }
        })
        .collect()
}
