//! Shared test harness for E2E integration tests.
//!
//! Writes real fixtures to a temporary directory (plain and gzip) and drives
//! them through `FileLineSource`, the same path the binary uses.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

use ll_analyzer::cli::Cli;
use ll_log_tools::{AnalyzerConfig, FileLineSource, Insights, LogAnalyzer};

/// End-to-end harness owning a scratch directory for fixtures.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write newline-terminated lines to a plain file; returns its path.
    pub fn write_plain(&self, name: &str, lines: &[String]) -> String {
        let path = self.path(name);
        let mut content = lines.join("\n");
        content.push('\n');
        std::fs::write(&path, content).expect("write fixture");
        path.to_string_lossy().into_owned()
    }

    /// Write raw bytes to a file; returns its path.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> String {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("write fixture");
        path.to_string_lossy().into_owned()
    }

    /// Write lines gzip-compressed; `name` should end in `.gz`.
    pub fn write_gzip(&self, name: &str, lines: &[String]) -> String {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        for line in lines {
            encoder.write_all(line.as_bytes()).expect("compress");
            encoder.write_all(b"\n").expect("compress");
        }
        let bytes = encoder.finish().expect("finish gzip");
        self.write_bytes(name, &bytes)
    }

    /// Analyze a fixture from disk with default settings.
    pub fn analyze(&self, path: &str) -> Insights {
        self.analyze_with(AnalyzerConfig::default(), path)
    }

    pub fn analyze_with(&self, config: AnalyzerConfig, path: &str) -> Insights {
        LogAnalyzer::new(config)
            .analyze_source(&FileLineSource, path)
            .expect("analysis succeeds")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse CLI arguments (program name is prepended).
pub fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("loglens").chain(args.iter().copied()))
        .expect("valid arguments")
}

/// Nginx combined line at the given hour.
pub fn nginx_line(ip: &str, path: &str, status: u16, hour: u8) -> String {
    format!(
        r#"{ip} - - [04/Feb/2026:{hour:02}:15:30 +0800] "GET {path} HTTP/1.1" {status} 512 "-" "Mozilla/5.0""#
    )
}

/// Apache common-log line (no referrer/user agent).
pub fn apache_line(ip: &str, path: &str, status: u16, hour: u8) -> String {
    format!(r#"{ip} - - [04/Feb/2026:{hour:02}:15:30 +0800] "GET {path} HTTP/1.0" {status} 2326"#)
}

/// Syslog line at the given hour.
pub fn syslog_line(hour: u8, service: &str, message: &str) -> String {
    format!("Feb  4 {hour:02}:10:00 web01 {service}: {message}")
}
