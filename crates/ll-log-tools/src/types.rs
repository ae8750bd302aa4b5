//! Core log analysis types: formats, lines, parsed records and samples.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

// ── Log Format ────────────────────────────────────────────────

/// Line formats recognised by the detector.
///
/// Detected per line; a stream may freely mix formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// A single JSON object per line.
    Json,
    /// BSD-style syslog without a `<PRI>` prefix (`Feb  4 08:15:30 host svc: msg`).
    Syslog,
    /// Nginx combined access log (referrer and user agent present).
    Nginx,
    /// Apache common/combined access log (referrer and user agent optional).
    Apache,
    /// Anything else.
    Unknown,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Syslog => "syslog",
            Self::Nginx => "nginx",
            Self::Apache => "apache",
            Self::Unknown => "unknown",
        }
    }

    /// Web-server access log formats carry status/path/ip fields.
    pub fn is_web_server(&self) -> bool {
        matches!(self, Self::Nginx | Self::Apache)
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Log Line ──────────────────────────────────────────────────

/// One line of input with its trailing newline already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// 1-based position in the stream, counting empty lines.
    pub line_number: usize,
    pub text: String,
}

impl LogLine {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

// ── Parsed Record ─────────────────────────────────────────────

/// Structured fields extracted from a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRecord {
    /// Decoded JSON object, kept verbatim.
    Json(serde_json::Map<String, serde_json::Value>),
    /// Named captures from a syslog or access-log pattern.
    Fields(BTreeMap<String, String>),
    /// The line could not be parsed in its format. `format` is the tag
    /// (`unknown`, `json_parse_error`, `nginx_parse_error`, ...).
    Fallback { raw: String, format: String },
}

impl ParsedRecord {
    pub fn fallback(raw: &str, format: impl Into<String>) -> Self {
        Self::Fallback {
            raw: raw.to_string(),
            format: format.into(),
        }
    }

    /// Look up a field by name. Non-string JSON values are rendered as JSON text.
    pub fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        match self {
            Self::Json(map) => map.get(key).map(|v| match v {
                serde_json::Value::String(s) => Cow::Borrowed(s.as_str()),
                other => Cow::Owned(other.to_string()),
            }),
            Self::Fields(fields) => fields.get(key).map(|s| Cow::Borrowed(s.as_str())),
            Self::Fallback { raw, format } => match key {
                "raw" => Some(Cow::Borrowed(raw.as_str())),
                "format" => Some(Cow::Borrowed(format.as_str())),
                _ => None,
            },
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Fallback tag, if this record is a parse failure.
    pub fn fallback_tag(&self) -> Option<&str> {
        match self {
            Self::Fallback { format, .. } => Some(format),
            _ => None,
        }
    }

    /// JSON view of the record.
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Self::Json(map) => serde_json::Value::Object(map.clone()),
            Self::Fields(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            ),
            Self::Fallback { raw, format } => serde_json::json!({
                "raw": raw,
                "format": format,
            }),
        }
    }
}

// ── Sample ────────────────────────────────────────────────────

/// A retained example of an error or warning line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub line_number: usize,
    /// Message text, truncated to the configured number of characters.
    pub content: String,
    pub format: LogFormat,
}

impl Sample {
    pub fn new(line_number: usize, text: &str, max_chars: usize, format: LogFormat) -> Self {
        Self {
            line_number,
            content: text.chars().take(max_chars).collect(),
            format,
        }
    }
}
