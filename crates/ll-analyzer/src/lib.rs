//! LogLens analyzer: library crate behind the `loglens` binary.
//!
//! Exposes the CLI definition, configuration loading and report rendering
//! so the pipeline can be driven end to end from tests.

pub mod cli;
pub mod config;
pub mod render;

use anyhow::Context;

use ll_log_tools::{Insights, LineSource, LogAnalyzer};

use crate::cli::Cli;

/// Run one analysis: load config, open the input, analyze it.
///
/// No report is produced unless the whole input was read.
pub fn analyze(cli: &Cli, source: &dyn LineSource) -> anyhow::Result<Insights> {
    let config = config::load(cli.config.as_deref())?;
    let analyzer = LogAnalyzer::new(config).with_forced_format(cli.format.forced());

    tracing::info!(
        path = %cli.logfile,
        forced_format = ?cli.format.forced(),
        "analysis starting"
    );

    analyzer
        .analyze_source(source, &cli.logfile)
        .with_context(|| format!("failed to analyze {}", cli.logfile))
}

/// Analyze and render in the requested output style.
pub fn run(cli: &Cli, source: &dyn LineSource) -> anyhow::Result<String> {
    let insights = analyze(cli, source)?;
    render::render(&insights, cli.output)
}
