//! BSD-style syslog lines as written by rsyslog to `/var/log/syslog`.

use regex::Regex;
use std::sync::LazyLock;

// Mmm dd HH:MM:SS HOSTNAME SERVICE: MESSAGE
pub(crate) static RE_SYSLOG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<timestamp>\w+\s+\d+\s+\d+:\d+:\d+)\s+(?P<host>\S+)\s+(?P<service>\S+):\s+(?P<message>.*)$",
    )
    .unwrap()
});

/// Check if a line matches the syslog layout.
pub fn looks_like_syslog(line: &str) -> bool {
    RE_SYSLOG.is_match(line)
}

/// Hour of day from a syslog timestamp (`Feb  4 08:15:30` → `08`).
///
/// Positional: third whitespace token, text before its first colon.
pub fn extract_hour(timestamp: &str) -> Option<String> {
    let clock = timestamp.split_whitespace().nth(2)?;
    clock.split(':').next().map(str::to_string)
}
