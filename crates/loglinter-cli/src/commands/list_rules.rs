//! List rules command implementation.

use loglinter_rules::{LogLinter, LogPolicy, Rule};
use std::fmt::Write as _;

/// Runs the list-rules command.
pub fn run() {
    print!("{}", render());
}

fn render() -> String {
    let linter = LogLinter::new();
    let policy = LogPolicy::default();
    let mut out = String::new();

    let _ = writeln!(out, "Rule `{}`: {}\n", linter.name(), linter.description());
    let _ = writeln!(out, "{:<25} Description", "Check");
    let _ = writeln!(out, "{}", "-".repeat(80));
    for check in linter.checks() {
        let _ = writeln!(out, "{:<25} {}", check.name(), check.description());
    }

    let _ = writeln!(out, "\nDefault tables:");
    let _ = writeln!(out, "  methods             {}", join(policy.log_methods.iter()));
    let _ = writeln!(
        out,
        "  excluded_receivers  {}",
        join(policy.excluded_receivers.iter())
    );
    let _ = writeln!(
        out,
        "  forbidden_chars     {}",
        policy.forbidden_chars.iter().collect::<String>()
    );
    let _ = writeln!(
        out,
        "  sensitive_keywords  {}",
        join(policy.sensitive_keywords.iter())
    );

    let _ = writeln!(out, "\nUse --checks to run a subset, e.g.:");
    let _ = writeln!(out, "  loglinter check --checks first-letter-case,sensitive-data");
    out
}

fn join<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.map(String::as_str).collect::<Vec<_>>().join(", ")
}
