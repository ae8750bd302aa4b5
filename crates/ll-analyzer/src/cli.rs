//! Command-line surface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use ll_log_tools::{LogFormat, STDIN_PATH};

#[derive(Debug, Parser)]
#[command(
    name = "loglens",
    version,
    about = "One-pass log analysis: format detection, error triage, web metrics"
)]
pub struct Cli {
    /// Path to the log file ("-" for stdin; ".gz" files are decompressed).
    #[arg(default_value = STDIN_PATH)]
    pub logfile: String,

    /// Parse every line as this format instead of detecting it.
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    pub format: FormatArg,

    /// Report style written to stdout.
    #[arg(long, value_enum, default_value_t = OutputStyle::Json)]
    pub output: OutputStyle,

    /// TOML file with analyzer tunables.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit stderr logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// `tracing` filter used when `RUST_LOG` is unset. Progress notices from
    /// the analysis library stay visible at the default level.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn,ll_log_tools=info"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Auto,
    Syslog,
    Nginx,
    Apache,
    Json,
}

impl FormatArg {
    /// The format to force, or `None` for per-line detection.
    pub fn forced(self) -> Option<LogFormat> {
        match self {
            Self::Auto => None,
            Self::Syslog => Some(LogFormat::Syslog),
            Self::Nginx => Some(LogFormat::Nginx),
            Self::Apache => Some(LogFormat::Apache),
            Self::Json => Some(LogFormat::Json),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    Json,
    Text,
}
