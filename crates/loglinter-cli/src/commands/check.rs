//! Check command implementation.

use anyhow::{Context, Result};
use loglinter_core::{Analyzer, Config, LintResult, RustFrontend};
use loglinter_go::GoFrontend;
use loglinter_rules::{LogLinter, LogPolicy, CHECK_NAMES, NAME};
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Arguments of `loglinter check`.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Directory to analyze.
    pub path: PathBuf,
    /// Comma-separated subset of checks to run.
    pub checks: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
}

/// Runs the check command.
///
/// Returns `false` when violations reach the configured failure threshold.
pub fn run(options: &CheckOptions, format: OutputFormat, source: &ConfigSource) -> Result<bool> {
    let config = source.load()?;
    let threshold = config.fail_threshold();

    let result = analyze(options, config)?;
    super::output::print(&result, format, &options.path)?;

    Ok(!result.has_violations_at(threshold))
}

/// Builds the analyzer for `options` and runs it.
pub fn analyze(options: &CheckOptions, config: Config) -> Result<LintResult> {
    let mut policy = match config.rules.get(NAME) {
        Some(rule_config) => LogPolicy::from_config(rule_config)
            .with_context(|| format!("Invalid [rules.{NAME}] section"))?,
        None => LogPolicy::default(),
    };

    if let Some(filter) = &options.checks {
        let selected: Vec<&str> = filter.split(',').map(str::trim).collect();
        for name in &selected {
            if !CHECK_NAMES.contains(name) {
                tracing::warn!("Unknown check: {}", name);
            }
        }
        policy.disabled_checks.extend(
            CHECK_NAMES
                .iter()
                .filter(|name| !selected.contains(*name))
                .map(|name| (*name).to_string()),
        );
    }

    let analyzer = Analyzer::builder()
        .root(&options.path)
        .config(config)
        .excludes(options.exclude.iter().cloned())
        .frontend(RustFrontend::new())
        .frontend(GoFrontend::new())
        .rule(LogLinter::with_policy(policy))
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!("Analyzing {}", options.path.display());

    analyzer.analyze().context("Analysis failed")
}
