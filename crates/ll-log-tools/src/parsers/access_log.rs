//! Nginx and Apache combined access log lines.
//!
//! `host ident user [timestamp] "METHOD path proto" status size "referrer" "agent"`
//!
//! Nginx requires the trailing referrer and user-agent; Apache accepts the
//! common log format without them.

use regex::Regex;
use std::sync::LazyLock;

pub(crate) static RE_NGINX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<ip>\S+)\s+\S+\s+\S+\s+\[(?P<timestamp>[^\]]+)\]\s+"(?P<method>\S+)\s+(?P<path>\S+)\s+\S+"\s+(?P<status>\d+)\s+(?P<size>\S+)\s+"(?P<referrer>[^"]*)"\s+"(?P<user_agent>[^"]*)"$"#,
    )
    .unwrap()
});

pub(crate) static RE_APACHE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?P<ip>\S+)\s+\S+\s+\S+\s+\[(?P<timestamp>[^\]]+)\]\s+"(?P<method>\S+)\s+(?P<path>\S+)\s+\S+"\s+(?P<status>\d+)\s+(?P<size>\S+)(?:\s+"(?P<referrer>[^"]*)"\s+"(?P<user_agent>[^"]*)")?$"#,
    )
    .unwrap()
});

pub fn looks_like_nginx(line: &str) -> bool {
    RE_NGINX.is_match(line)
}

pub fn looks_like_apache(line: &str) -> bool {
    RE_APACHE.is_match(line)
}

/// Hour of day from a CLF timestamp (`04/Feb/2026:08:15:30 +0800` → `08`).
///
/// Positional: the token after the first colon.
pub fn extract_hour(timestamp: &str) -> Option<String> {
    timestamp.split(':').nth(1).map(str::to_string)
}
