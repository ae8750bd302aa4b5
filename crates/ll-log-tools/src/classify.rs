//! Error/warning heuristics over message text.
//!
//! Both tables are ordered and first-match-wins; a line is tested against
//! each table independently, so it can count as an error and a warning.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Sample;

// ── Severity patterns ─────────────────────────────────────────

struct SeverityPattern {
    name: &'static str,
    regex: Regex,
}

impl SeverityPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(&format!("(?i){pattern}")).unwrap(),
        }
    }
}

static ERROR_PATTERNS: LazyLock<Vec<SeverityPattern>> = LazyLock::new(|| {
    vec![
        SeverityPattern::new("error", "error"),
        SeverityPattern::new("exception", "exception"),
        SeverityPattern::new("fail", "fail"),
        SeverityPattern::new("critical", "critical"),
        SeverityPattern::new("fatal", "fatal"),
        SeverityPattern::new("panic", "panic"),
        SeverityPattern::new("segfault", "segfault"),
        SeverityPattern::new("timeout", "timeout"),
        SeverityPattern::new("connection_refused", "connection refused"),
        // Status code followed by a space, as in access log lines.
        SeverityPattern::new("http_5xx", "50[0-9] "),
        SeverityPattern::new("http_4xx", "40[0-9] "),
    ]
});

static WARNING_PATTERNS: LazyLock<Vec<SeverityPattern>> = LazyLock::new(|| {
    vec![
        SeverityPattern::new("warn", "warn"),
        SeverityPattern::new("warning", "warning"),
        SeverityPattern::new("deprecated", "deprecated"),
        SeverityPattern::new("slow", "slow"),
        SeverityPattern::new("high_latency", "high latency"),
        SeverityPattern::new("memory_usage", "memory usage"),
        SeverityPattern::new("disk_full", "disk full"),
        SeverityPattern::new("cpu_usage", "cpu usage"),
    ]
});

fn first_match(patterns: &[SeverityPattern], text: &str) -> Option<&'static str> {
    patterns
        .iter()
        .find(|p| p.regex.is_match(text))
        .map(|p| p.name)
}

/// Which error and warning pattern (if any) a message matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub error: Option<&'static str>,
    pub warning: Option<&'static str>,
}

impl Classification {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_warning(&self) -> bool {
        self.warning.is_some()
    }
}

/// Classify message text against the error and warning tables.
pub fn classify(text: &str) -> Classification {
    Classification {
        error: first_match(&ERROR_PATTERNS, text),
        warning: first_match(&WARNING_PATTERNS, text),
    }
}

// ── Sample labels ─────────────────────────────────────────────

struct Label {
    keywords: &'static [&'static str],
    label: &'static str,
}

// Checked in order against lowercased content; first hit labels the sample.
const LABELS: &[Label] = &[
    Label { keywords: &["timeout"], label: "Timeout issues" },
    Label { keywords: &["connection"], label: "Connection problems" },
    Label { keywords: &["memory", "ram"], label: "Memory pressure" },
    Label { keywords: &["disk", "storage"], label: "Storage issues" },
    Label { keywords: &["cpu"], label: "High CPU usage" },
];

fn label_for(content: &str) -> Option<&'static str> {
    let lower = content.to_lowercase();
    LABELS
        .iter()
        .find(|l| l.keywords.iter().any(|k| lower.contains(k)))
        .map(|l| l.label)
}

/// Summarise recurring themes across the first `inspect` samples.
///
/// Labels are deduplicated in first-seen order and capped at `max_labels`.
pub fn common_patterns(samples: &[Sample], inspect: usize, max_labels: usize) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in samples.iter().take(inspect).filter_map(|s| label_for(&s.content)) {
        if !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }
    labels.truncate(max_labels);
    labels
}
