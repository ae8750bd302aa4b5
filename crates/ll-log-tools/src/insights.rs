//! The end-of-stream report and the heuristics that derive it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::aggregate::RunningStats;
use crate::classify;
use crate::types::Sample;

pub const REC_ERRORS: &str =
    "Investigate error patterns - consider implementing better error handling";
pub const REC_WARNINGS: &str = "Address warning messages to prevent potential issues";
pub const REC_HIGH_ERROR_RATE: &str =
    "High error rate detected (>5%) - immediate investigation recommended";
pub const REC_HTTP_ERRORS: &str = "HTTP 4xx/5xx errors detected - check application health";
pub const REC_HEALTHY: &str = "No critical issues detected - system appears healthy";

// ── Report ────────────────────────────────────────────────────

/// Analysis report for one complete input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub summary: Summary,
    /// Lines per detected format, in first-seen order.
    pub format_analysis: IndexMap<String, u64>,
    pub error_analysis: ErrorAnalysis,
    pub warning_analysis: WarningAnalysis,
    pub web_server_metrics: WebServerMetrics,
    pub temporal_analysis: TemporalAnalysis,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_lines_processed: u64,
    pub error_count: u64,
    pub warning_count: u64,
    /// Percentage of processed lines, two decimals.
    pub error_rate: f64,
    pub warning_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorAnalysis {
    pub samples: Vec<Sample>,
    pub most_common_errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningAnalysis {
    pub samples: Vec<Sample>,
    pub most_common_warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebServerMetrics {
    pub status_code_distribution: IndexMap<String, u64>,
    /// Most requested paths, descending by count.
    pub top_requested_paths: IndexMap<String, u64>,
    pub top_client_ips: IndexMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    /// Lines per two-digit hour of day, in first-seen order.
    pub hourly_activity: IndexMap<String, u64>,
}

// ── Derivation ────────────────────────────────────────────────

/// Build the report from finished stats. Pure; the stats are not modified.
pub fn derive(stats: &RunningStats) -> Insights {
    let config = stats.config();
    let total = stats.total_lines;

    Insights {
        summary: Summary {
            total_lines_processed: total,
            error_count: stats.errors,
            warning_count: stats.warnings,
            error_rate: percentage(stats.errors, total),
            warning_rate: percentage(stats.warnings, total),
        },
        format_analysis: stats
            .formats
            .iter()
            .map(|(fmt, count)| (fmt.as_str().to_string(), *count))
            .collect(),
        error_analysis: ErrorAnalysis {
            samples: stats.error_samples.clone(),
            most_common_errors: classify::common_patterns(
                &stats.error_samples,
                config.pattern_sample_limit,
                config.max_pattern_labels,
            ),
        },
        warning_analysis: WarningAnalysis {
            samples: stats.warning_samples.clone(),
            most_common_warnings: classify::common_patterns(
                &stats.warning_samples,
                config.pattern_sample_limit,
                config.max_pattern_labels,
            ),
        },
        web_server_metrics: WebServerMetrics {
            status_code_distribution: stats.status_codes.clone(),
            top_requested_paths: most_common(&stats.paths, config.top_n),
            top_client_ips: most_common(&stats.ips, config.top_n),
        },
        temporal_analysis: TemporalAnalysis {
            hourly_activity: stats.hourly.clone(),
        },
        recommendations: recommendations(stats),
    }
}

/// `count / max(total, 1) * 100`, rounded to two decimals.
pub fn percentage(count: u64, total: u64) -> f64 {
    let pct = count as f64 / total.max(1) as f64 * 100.0;
    // Exact halves go to the even neighbour: 1/32 is 3.125% and reports 3.12.
    (pct * 100.0).round_ties_even() / 100.0
}

/// Top `n` entries by count, descending. Ties keep first-seen order.
pub fn most_common(counter: &IndexMap<String, u64>, n: usize) -> IndexMap<String, u64> {
    let mut entries: Vec<(&String, &u64)> = counter.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
        .into_iter()
        .take(n)
        .map(|(k, v)| (k.clone(), *v))
        .collect()
}

/// Independent advisory checks, appended in a fixed order.
pub fn recommendations(stats: &RunningStats) -> Vec<String> {
    let config = stats.config();
    let total = stats.total_lines;
    let mut recs = Vec::new();

    if stats.errors > 0 {
        recs.push(REC_ERRORS.to_string());
    }

    if stats.warnings > 0 {
        recs.push(REC_WARNINGS.to_string());
    }

    let error_ratio = stats.errors as f64 / total.max(1) as f64;
    if error_ratio > config.high_error_rate {
        recs.push(REC_HIGH_ERROR_RATE.to_string());
    }

    if stats
        .status_codes
        .keys()
        .any(|code| code.starts_with('4') || code.starts_with('5'))
    {
        recs.push(REC_HTTP_ERRORS.to_string());
    }

    if let Some((ip, count)) = dominant(&stats.ips)
        && count as f64 > total as f64 * config.dominant_ip_share
    {
        recs.push(format!(
            "Suspicious activity from IP {ip} ({count} requests) - possible bot or attack"
        ));
    }

    if recs.is_empty() {
        recs.push(REC_HEALTHY.to_string());
    }
    recs
}

/// Highest-count key; the earliest seen wins a tie.
fn dominant(counter: &IndexMap<String, u64>) -> Option<(&str, u64)> {
    counter.iter().fold(None, |best, (key, &count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ => Some((key.as_str(), count)),
    })
}
