//! Newline-delimited JSON (NDJSON) log lines.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ParsedRecord;

static RE_JSON_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{.*\}$").unwrap());

/// Check if a line looks like a JSON object (after trimming).
pub fn looks_like_json(line: &str) -> bool {
    RE_JSON_SHAPE.is_match(line.trim())
}

/// Decode a JSON line. Anything that is not a JSON object becomes a
/// `json_parse_error` fallback.
pub fn parse(line: &str) -> ParsedRecord {
    let trimmed = line.trim();
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => ParsedRecord::Json(map),
        Ok(_) | Err(_) => ParsedRecord::fallback(trimmed, "json_parse_error"),
    }
}
