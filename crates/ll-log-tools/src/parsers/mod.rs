//! Per-line format detection and field extraction.
//!
//! Supports newline-delimited JSON, BSD syslog, and nginx/apache combined
//! access logs. Detection runs independently on every line; a stream may mix
//! formats freely. Neither detection nor parsing ever fails: lines that do not
//! fit degrade to a `{raw, format}` fallback record.

pub mod access_log;
pub mod json_lines;
pub mod syslog;

use regex::Regex;
use std::collections::BTreeMap;

use crate::types::{LogFormat, ParsedRecord};

/// Order in which the line patterns are tried after the JSON shape check.
/// The first match wins, so a combined access log line is always `Nginx`.
pub const DETECTION_ORDER: [LogFormat; 3] =
    [LogFormat::Syslog, LogFormat::Nginx, LogFormat::Apache];

fn pattern(format: LogFormat) -> Option<&'static Regex> {
    match format {
        LogFormat::Syslog => Some(&*syslog::RE_SYSLOG),
        LogFormat::Nginx => Some(&*access_log::RE_NGINX),
        LogFormat::Apache => Some(&*access_log::RE_APACHE),
        LogFormat::Json | LogFormat::Unknown => None,
    }
}

/// Classify a single line.
///
/// JSON is checked first against the trimmed text; the remaining patterns are
/// matched against the untrimmed line in `DETECTION_ORDER`.
pub fn detect_format(line: &str) -> LogFormat {
    if json_lines::looks_like_json(line) {
        return LogFormat::Json;
    }
    DETECTION_ORDER
        .iter()
        .copied()
        .find(|fmt| looks_like(*fmt, line))
        .unwrap_or(LogFormat::Unknown)
}

fn looks_like(format: LogFormat, line: &str) -> bool {
    match format {
        LogFormat::Syslog => syslog::looks_like_syslog(line),
        LogFormat::Nginx => access_log::looks_like_nginx(line),
        LogFormat::Apache => access_log::looks_like_apache(line),
        LogFormat::Json => json_lines::looks_like_json(line),
        LogFormat::Unknown => false,
    }
}

/// Parse a line in the given format.
pub fn parse_line(line: &str, format: LogFormat) -> ParsedRecord {
    match format {
        LogFormat::Json => json_lines::parse(line),
        LogFormat::Unknown => ParsedRecord::fallback(line.trim(), "unknown"),
        fmt => pattern(fmt)
            .and_then(|re| capture_fields(re, line))
            .map(ParsedRecord::Fields)
            .unwrap_or_else(|| ParsedRecord::fallback(line.trim(), format!("{fmt}_parse_error"))),
    }
}

/// Best-effort hour-of-day bucket (`"00"`..`"23"`) from a record's timestamp.
///
/// Only syslog and access-log records are considered; JSON timestamps are
/// free-form and ignored. The extraction is positional, so timestamps laid
/// out differently yield `None` or a meaningless key rather than an error.
pub fn extract_hour(record: &ParsedRecord, format: LogFormat) -> Option<String> {
    let timestamp = record.get("timestamp")?;
    match format {
        LogFormat::Nginx | LogFormat::Apache => access_log::extract_hour(&timestamp),
        LogFormat::Syslog => syslog::extract_hour(&timestamp),
        LogFormat::Json | LogFormat::Unknown => None,
    }
}

/// Collect every named group that participated in the match.
fn capture_fields(re: &Regex, line: &str) -> Option<BTreeMap<String, String>> {
    let caps = re.captures(line)?;
    Some(
        re.capture_names()
            .flatten()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (name.to_string(), m.as_str().to_string()))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const NGINX: &str = r#"192.168.1.5 - - [04/Feb/2026:08:15:30 +0800] "GET /api HTTP/1.1" 500 512 "-" "curl/8.0""#;
    const APACHE: &str = r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326"#;
    const SYSLOG: &str = "Feb  4 08:15:30 web01 sshd[1042]: Connection closed by 10.0.0.9";

    #[test]
    fn detect_json_before_anything_else() {
        assert_eq!(detect_format(r#"{"level":"error","msg":"boom"}"#), LogFormat::Json);
        assert_eq!(detect_format(r#"   {"padded":true}   "#), LogFormat::Json);
    }

    #[test]
    fn detect_each_format() {
        assert_eq!(detect_format(SYSLOG), LogFormat::Syslog);
        assert_eq!(detect_format(NGINX), LogFormat::Nginx);
        assert_eq!(detect_format(APACHE), LogFormat::Apache);
        assert_eq!(detect_format("just some text"), LogFormat::Unknown);
        assert_eq!(detect_format(""), LogFormat::Unknown);
    }

    #[test]
    fn detect_uses_untrimmed_line_for_patterns() {
        let indented = format!("  {SYSLOG}");
        assert_eq!(detect_format(&indented), LogFormat::Unknown);
    }

    #[test]
    fn parse_nginx_fields() {
        let rec = parse_line(NGINX, LogFormat::Nginx);
        assert_eq!(rec.get("ip").as_deref(), Some("192.168.1.5"));
        assert_eq!(rec.get("method").as_deref(), Some("GET"));
        assert_eq!(rec.get("path").as_deref(), Some("/api"));
        assert_eq!(rec.get("status").as_deref(), Some("500"));
        assert_eq!(rec.get("size").as_deref(), Some("512"));
        assert_eq!(rec.get("referrer").as_deref(), Some("-"));
        assert_eq!(rec.get("user_agent").as_deref(), Some("curl/8.0"));
        assert_eq!(extract_hour(&rec, LogFormat::Nginx).as_deref(), Some("08"));
    }

    #[test]
    fn parse_apache_without_trailing_fields() {
        let rec = parse_line(APACHE, LogFormat::Apache);
        assert_eq!(rec.get("status").as_deref(), Some("200"));
        assert!(!rec.contains("referrer"));
        assert!(!rec.contains("user_agent"));
        assert_eq!(extract_hour(&rec, LogFormat::Apache).as_deref(), Some("13"));
    }

    #[test]
    fn parse_syslog_fields() {
        let rec = parse_line(SYSLOG, LogFormat::Syslog);
        assert_eq!(rec.get("timestamp").as_deref(), Some("Feb  4 08:15:30"));
        assert_eq!(rec.get("host").as_deref(), Some("web01"));
        assert_eq!(rec.get("service").as_deref(), Some("sshd[1042]"));
        assert_eq!(
            rec.get("message").as_deref(),
            Some("Connection closed by 10.0.0.9")
        );
        assert_eq!(extract_hour(&rec, LogFormat::Syslog).as_deref(), Some("08"));
    }

    #[test]
    fn parse_unknown_is_fallback() {
        let rec = parse_line("  no structure here  ", LogFormat::Unknown);
        assert_eq!(
            rec,
            ParsedRecord::fallback("no structure here", "unknown")
        );
    }

    #[test]
    fn forced_format_mismatch_tags_parse_error() {
        let rec = parse_line("definitely not an access log", LogFormat::Nginx);
        assert_eq!(rec.fallback_tag(), Some("nginx_parse_error"));
        let rec = parse_line("nope", LogFormat::Syslog);
        assert_eq!(rec.fallback_tag(), Some("syslog_parse_error"));
        let rec = parse_line("nope", LogFormat::Json);
        assert_eq!(rec.fallback_tag(), Some("json_parse_error"));
    }

    #[test]
    fn json_timestamp_is_not_bucketed() {
        let rec = parse_line(r#"{"timestamp":"2026-02-04T08:15:30Z"}"#, LogFormat::Json);
        assert_eq!(extract_hour(&rec, LogFormat::Json), None);
    }
}
