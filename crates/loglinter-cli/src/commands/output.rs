//! Shared output formatting for lint results.

use anyhow::Result;
use loglinter_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use miette::GraphicalReportHandler;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the analyzed directory; `pretty` output reads sources from it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    let rendered = render(result, format, root)?;
    print!("{rendered}");
    Ok(())
}

/// Renders lint results in the specified format.
pub fn render(result: &LintResult, format: OutputFormat, root: &Path) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)? + "\n",
        OutputFormat::Compact => render_compact(result),
        OutputFormat::Pretty => render_pretty(result, root)?,
    })
}

fn render_text(result: &LintResult) -> String {
    let mut out = String::new();

    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        let _ = writeln!(
            out,
            "{} at {}:{}:{}",
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        let _ = writeln!(out, "  {}: {}\n", severity_indicator, violation.message);
    }

    let _ = writeln!(out, "{}", summary_line(result, true));
    out
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|v| format!("{v}\n"))
        .collect()
}

fn render_pretty(result: &LintResult, root: &Path) -> Result<String> {
    let handler = GraphicalReportHandler::new();
    let mut sources: HashMap<&Path, Option<String>> = HashMap::new();
    let mut out = String::new();

    for violation in &result.violations {
        let contents = sources
            .entry(violation.location.file.as_path())
            .or_insert_with(|| read_source(root, &violation.location.file));

        match contents {
            Some(contents) => {
                let diagnostic = ViolationDiagnostic::new(violation, contents.clone());
                handler.render_report(&mut out, &diagnostic)?;
                out.push('\n');
            }
            None => out.push_str(&fallback_line(violation)),
        }
    }

    let _ = writeln!(out, "{}", summary_line(result, false));
    Ok(out)
}

fn read_source(root: &Path, file: &Path) -> Option<String> {
    let path: PathBuf = root.join(file);
    match std::fs::read_to_string(&path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::debug!("Cannot read {} for snippet: {}", path.display(), e);
            None
        }
    }
}

fn fallback_line(violation: &Violation) -> String {
    format!("{violation}\n")
}

fn summary_line(result: &LintResult, color: bool) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary = format!(
        "Found {} error(s), {} warning(s), {} info(s) in {} file(s)",
        errors, warnings, infos, result.files_checked
    );
    if !color {
        return summary;
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    format!("{summary_color}{summary}\x1b[0m")
}
