//! Best-effort extraction of a JSON object from free-form model text.

use serde_json::{json, Value};

/// Slice from the first `{` to the last `}` and strict-parse the result.
///
/// This is a heuristic, not a grammar-aware parser: it mis-slices when the
/// text holds several top-level objects, or unbalanced braces inside string
/// literals. Failures never propagate; they come back as an error-shaped
/// object carrying the untouched input under `raw`.
pub fn extract_json(raw: &str) -> Value {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return json!({ "error": "No valid JSON detected", "raw": raw });
    };
    if start > end {
        return json!({ "error": "No valid JSON detected", "raw": raw });
    }

    match serde_json::from_str(&raw[start..=end]) {
        Ok(value) => value,
        Err(err) => json!({ "error": format!("Invalid JSON: {err}"), "raw": raw }),
    }
}
