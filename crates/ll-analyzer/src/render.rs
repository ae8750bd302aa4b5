//! Report rendering for stdout.

use std::fmt::Write;

use ll_log_tools::Insights;

use crate::cli::OutputStyle;

pub fn render(insights: &Insights, style: OutputStyle) -> anyhow::Result<String> {
    match style {
        OutputStyle::Json => to_json(insights),
        OutputStyle::Text => Ok(to_text(insights)),
    }
}

/// Pretty-printed JSON, two-space indent.
pub fn to_json(insights: &Insights) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(insights)?)
}

/// Short human-readable digest: summary, recommendations, error samples.
pub fn to_text(insights: &Insights) -> String {
    let summary = &insights.summary;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "=== SMART LOG ANALYSIS ===");
    let _ = writeln!(out, "Total lines processed: {}", summary.total_lines_processed);
    // `{:?}` keeps the shortest float form with a trailing `.0` (50.0, 3.12).
    let _ = writeln!(
        out,
        "Errors: {} ({:?}%)",
        summary.error_count, summary.error_rate
    );
    let _ = writeln!(
        out,
        "Warnings: {} ({:?}%)",
        summary.warning_count, summary.warning_rate
    );

    let _ = writeln!(out, "\n=== RECOMMENDATIONS ===");
    for rec in &insights.recommendations {
        let _ = writeln!(out, "- {rec}");
    }

    let samples = &insights.error_analysis.samples;
    if !samples.is_empty() {
        let _ = writeln!(out, "\n=== ERROR SAMPLES (showing {}) ===", samples.len());
        for sample in samples {
            let _ = writeln!(out, "Line {}: {}", sample.line_number, sample.content);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_log_tools::LogAnalyzer;

    #[test]
    fn text_lists_summary_and_samples() {
        let insights = LogAnalyzer::default().analyze_lines(["all good", "fatal: out of cheese"]);
        let text = to_text(&insights);
        assert!(text.starts_with("=== SMART LOG ANALYSIS ===\n"));
        assert!(text.contains("Total lines processed: 2\n"));
        assert!(text.contains("Errors: 1 (50.0%)\n"));
        assert!(text.contains("Warnings: 0 (0.0%)\n"));
        assert!(text.contains("=== ERROR SAMPLES (showing 1) ===\nLine 2: fatal: out of cheese\n"));
    }

    #[test]
    fn text_prints_rates_unpadded() {
        let mut lines = vec!["all good"; 31];
        lines.push("error: disk gone");
        let text = to_text(&LogAnalyzer::default().analyze_lines(lines));
        assert!(text.contains("Errors: 1 (3.12%)\n"));
        assert!(text.contains("Warnings: 0 (0.0%)\n"));
    }

    #[test]
    fn text_omits_sample_section_when_clean() {
        let insights = LogAnalyzer::default().analyze_lines(["all good"]);
        let text = to_text(&insights);
        assert!(text.contains("- No critical issues detected - system appears healthy\n"));
        assert!(!text.contains("ERROR SAMPLES"));
    }

    #[test]
    fn json_has_report_sections_in_order() {
        let insights = LogAnalyzer::default().analyze_lines(["hello"]);
        let json = to_json(&insights).unwrap();
        let keys = [
            "\"summary\"",
            "\"format_analysis\"",
            "\"error_analysis\"",
            "\"warning_analysis\"",
            "\"web_server_metrics\"",
            "\"temporal_analysis\"",
            "\"recommendations\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\n  \"summary\": {"));
    }
}
