//! Analyzer tunables. Every field has a default, so an empty TOML table is a
//! valid configuration.

use serde::Deserialize;

use crate::error::{LogError, LogResult};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Error/warning samples kept per category.
    pub sample_capacity: usize,
    /// Characters of message text kept per sample.
    pub sample_content_chars: usize,
    /// Leading samples inspected when labelling common patterns.
    pub pattern_sample_limit: usize,
    /// Maximum number of pattern labels reported.
    pub max_pattern_labels: usize,
    /// Entries kept in the top paths / top IPs tables.
    pub top_n: usize,
    /// Emit a progress event every N processed lines. 0 disables.
    pub progress_interval: usize,
    /// Error ratio above which the high-error-rate alert fires.
    pub high_error_rate: f64,
    /// Share of all lines from a single IP above which it is flagged.
    pub dominant_ip_share: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_capacity: 10,
            sample_content_chars: 200,
            pattern_sample_limit: 5,
            max_pattern_labels: 3,
            top_n: 10,
            progress_interval: 10_000,
            high_error_rate: 0.05,
            dominant_ip_share: 0.10,
        }
    }
}

impl AnalyzerConfig {
    /// Reject ratios outside `0.0..=1.0`.
    pub fn validate(&self) -> LogResult<()> {
        for (name, value) in [
            ("high_error_rate", self.high_error_rate),
            ("dominant_ip_share", self.dominant_ip_share),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(LogError::Config(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }
        Ok(())
    }
}
