//! Single-pass streaming aggregation.
//!
//! Each line is detected, parsed, classified and folded into `RunningStats`
//! before the next one is read. Memory is bounded by the sample capacity and
//! by the number of distinct status codes, paths, IPs and hours observed.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::io::BufRead;

use crate::classify;
use crate::config::AnalyzerConfig;
use crate::error::{LogError, LogResult};
use crate::insights::{self, Insights};
use crate::parsers;
use crate::source::LineSource;
use crate::types::{LogFormat, LogLine, ParsedRecord, Sample};

// ── Running stats ─────────────────────────────────────────────

/// Accumulator for one analysis run.
#[derive(Debug, Clone)]
pub struct RunningStats {
    config: AnalyzerConfig,
    pub(crate) total_lines: u64,
    pub(crate) errors: u64,
    pub(crate) warnings: u64,
    pub(crate) error_samples: Vec<Sample>,
    pub(crate) warning_samples: Vec<Sample>,
    pub(crate) status_codes: IndexMap<String, u64>,
    pub(crate) paths: IndexMap<String, u64>,
    pub(crate) ips: IndexMap<String, u64>,
    pub(crate) formats: IndexMap<LogFormat, u64>,
    pub(crate) hourly: IndexMap<String, u64>,
}

impl RunningStats {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            total_lines: 0,
            errors: 0,
            warnings: 0,
            error_samples: Vec::new(),
            warning_samples: Vec::new(),
            status_codes: IndexMap::new(),
            paths: IndexMap::new(),
            ips: IndexMap::new(),
            formats: IndexMap::new(),
            hourly: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    pub fn error_count(&self) -> u64 {
        self.errors
    }

    pub fn warning_count(&self) -> u64 {
        self.warnings
    }

    /// Fold one line into the stats.
    ///
    /// `forced` bypasses detection and parses the line as that format.
    /// Returns `false` if the line was empty and skipped.
    pub fn observe(&mut self, line: &LogLine, forced: Option<LogFormat>) -> bool {
        let text = line.text.trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            return false;
        }
        self.total_lines += 1;

        let format = forced.unwrap_or_else(|| parsers::detect_format(text));
        *self.formats.entry(format).or_insert(0) += 1;

        let record = parsers::parse_line(text, format);

        if let Some(hour) = parsers::extract_hour(&record, format) {
            bump(&mut self.hourly, hour);
        }

        let message = message_text(&record, format, text);
        let verdict = classify::classify(&message);

        if verdict.is_error() {
            self.errors += 1;
            self.keep_sample(SampleKind::Error, line.line_number, &message, format);
        }

        if verdict.is_warning() {
            self.warnings += 1;
            self.keep_sample(SampleKind::Warning, line.line_number, &message, format);
        }

        if format.is_web_server() {
            if let Some(status) = record.get("status") {
                bump(&mut self.status_codes, status.into_owned());
            }
            if let Some(path) = record.get("path") {
                bump(&mut self.paths, path.into_owned());
            }
            if let Some(ip) = record.get("ip") {
                bump(&mut self.ips, ip.into_owned());
            }
        }

        true
    }

    fn keep_sample(&mut self, kind: SampleKind, line_number: usize, text: &str, format: LogFormat) {
        let capacity = self.config.sample_capacity;
        let max_chars = self.config.sample_content_chars;
        let samples = match kind {
            SampleKind::Error => &mut self.error_samples,
            SampleKind::Warning => &mut self.warning_samples,
        };
        if samples.len() < capacity {
            samples.push(Sample::new(line_number, text, max_chars, format));
        }
    }

    /// Derive the report. The stats are consumed; a run produces one report.
    pub fn finish(self) -> Insights {
        insights::derive(&self)
    }
}

#[derive(Debug, Clone, Copy)]
enum SampleKind {
    Error,
    Warning,
}

fn bump(counter: &mut IndexMap<String, u64>, key: String) {
    *counter.entry(key).or_insert(0) += 1;
}

/// Text the severity heuristics run against.
///
/// JSON records are re-serialized whole. Other records use their `message`
/// field, then `raw`, then the line itself (access log captures carry
/// neither, and their status code is what marks them as errors).
fn message_text<'a>(record: &'a ParsedRecord, format: LogFormat, line: &'a str) -> Cow<'a, str> {
    if format == LogFormat::Json {
        return Cow::Owned(record.to_value().to_string());
    }
    record
        .get("message")
        .or_else(|| record.get("raw"))
        .unwrap_or(Cow::Borrowed(line))
}

// ── Analyzer ──────────────────────────────────────────────────

/// Drives a full analysis run over a line stream.
#[derive(Debug, Clone, Default)]
pub struct LogAnalyzer {
    config: AnalyzerConfig,
    forced_format: Option<LogFormat>,
}

impl LogAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            forced_format: None,
        }
    }

    /// Parse every line as `format` instead of detecting it.
    pub fn with_forced_format(mut self, format: Option<LogFormat>) -> Self {
        self.forced_format = format;
        self
    }

    /// Open `path` through `source` and analyze it. The reader is dropped
    /// before returning on every path.
    pub fn analyze_source(&self, source: &dyn LineSource, path: &str) -> LogResult<Insights> {
        let reader = source.open(path)?;
        tracing::debug!(path, "input opened");
        self.analyze(reader)
    }

    /// Analyze a byte stream line by line. Invalid UTF-8 is replaced, never
    /// fatal; a read error aborts the run without a report.
    pub fn analyze<R: BufRead>(&self, mut reader: R) -> LogResult<Insights> {
        let mut stats = RunningStats::new(self.config);
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
                LogError::Io(format!("read failed after line {line_number}: {e}"))
            })?;
            if read == 0 {
                break;
            }
            line_number += 1;
            let line = LogLine::new(line_number, String::from_utf8_lossy(&buf));
            self.fold(&mut stats, &line);
        }

        Ok(self.complete(stats))
    }

    /// Analyze an in-memory sequence of lines.
    pub fn analyze_lines<I, S>(&self, lines: I) -> Insights
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = RunningStats::new(self.config);
        for (i, text) in lines.into_iter().enumerate() {
            self.fold(&mut stats, &LogLine::new(i + 1, text.as_ref()));
        }
        self.complete(stats)
    }

    fn fold(&self, stats: &mut RunningStats, line: &LogLine) {
        if !stats.observe(line, self.forced_format) {
            return;
        }
        let interval = self.config.progress_interval as u64;
        if interval > 0 && stats.total_lines % interval == 0 {
            tracing::info!(lines = stats.total_lines, "processed {} lines", stats.total_lines);
        }
    }

    fn complete(&self, stats: RunningStats) -> Insights {
        tracing::info!(
            total_lines = stats.total_lines,
            errors = stats.errors,
            warnings = stats.warnings,
            "analysis complete"
        );
        stats.finish()
    }
}
