//! Streaming log analysis for LogLens.
//!
//! Detects the format of every line (JSON, BSD syslog, nginx/apache combined
//! access logs), extracts structured fields, classifies error and warning
//! lines, and folds everything into bounded running statistics in a single
//! pass. At end of stream the statistics become an `Insights` report with
//! web-server metrics, an hourly histogram and recommendations.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod insights;
pub mod mock;
pub mod parsers;
pub mod source;
pub mod types;

// Re-export key types for convenience
pub use aggregate::{LogAnalyzer, RunningStats};
pub use config::AnalyzerConfig;
pub use error::{LogError, LogResult};
pub use insights::Insights;
pub use mock::MockLineSource;
pub use source::{FileLineSource, LineSource, STDIN_PATH};
pub use types::{LogFormat, LogLine, ParsedRecord, Sample};
