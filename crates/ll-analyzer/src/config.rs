//! Analyzer configuration, loadable from TOML.

use anyhow::Context;
use std::path::Path;

use ll_log_tools::AnalyzerConfig;

/// Parse and validate a TOML document. Missing keys take their defaults.
pub fn from_toml_str(contents: &str) -> anyhow::Result<AnalyzerConfig> {
    let config: AnalyzerConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML file path.
pub fn from_file(path: &Path) -> anyhow::Result<AnalyzerConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    from_toml_str(&contents).with_context(|| format!("invalid config {}", path.display()))
}

/// Load from `path` if given, otherwise use the defaults.
pub fn load(path: Option<&Path>) -> anyhow::Result<AnalyzerConfig> {
    match path {
        Some(p) => {
            let config = from_file(p)?;
            tracing::debug!(path = %p.display(), ?config, "config loaded");
            Ok(config)
        }
        None => Ok(AnalyzerConfig::default()),
    }
}
