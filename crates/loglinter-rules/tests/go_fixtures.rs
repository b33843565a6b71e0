//! Integration test: the loglinter rule over Go fixtures.
//!
//! `tests/fixtures/go/slog` exercises the standard `log/slog` package and
//! `tests/fixtures/go/zap` a zap logger held in locals and struct fields.

use loglinter_core::{Analyzer, LintResult, RustFrontend, Severity};
use loglinter_go::GoFrontend;
use loglinter_rules::LogLinter;
use std::path::PathBuf;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/go")
}

fn analyze() -> LintResult {
    Analyzer::builder()
        .root(fixture_root())
        .frontend(GoFrontend::new())
        .frontend(RustFrontend::new())
        .rule(LogLinter::new())
        .build()
        .expect("analyzer should build")
        .analyze()
        .expect("analysis should succeed")
}

fn report(result: &LintResult, file: &str) -> String {
    result
        .violations
        .iter()
        .filter(|v| v.location.file == PathBuf::from(file))
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn checks_both_packages() {
    let result = analyze();
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 12);
    assert!(result.violations.iter().all(|v| v.severity == Severity::Error));
    assert!(result.has_violations_at(Severity::Error));
}

#[test]
fn slog_scenarios() {
    let result = analyze();
    insta::assert_snapshot!(report(&result, "slog/main.go"), @r###"
    slog/main.go:11:13: error [loglinter] log message should start with lowercase letter: "Something failed"
    slog/main.go:12:12: error [loglinter] log message must be in English only: "началась обработка"
    slog/main.go:13:12: error [loglinter] log message must not contain emojis or special characters: "disk space low 🔥"
    slog/main.go:14:13: error [loglinter] log message must not contain sensitive data like passwords, tokens, or api keys: "user password is 12345"
    slog/main.go:18:12: error [loglinter] log message should start with lowercase letter: "Raw message"
    "###);
}

#[test]
fn zap_scenarios() {
    let result = analyze();
    insta::assert_snapshot!(report(&result, "zap/main.go"), @r###"
    zap/main.go:15:15: error [loglinter] log message should start with lowercase letter: "Connection refused"
    zap/main.go:16:16: error [loglinter] log message must not contain emojis or special characters: "retrying…"
    zap/main.go:17:16: error [loglinter] log message must not contain sensitive data like passwords, tokens, or api keys: "api_key rotated"
    zap/main.go:19:17: error [loglinter] log message should start with lowercase letter: "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6 issued"
    zap/main.go:19:17: error [loglinter] log message must not contain sensitive data like passwords, tokens, or api keys: "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6 issued"
    zap/main.go:20:41: error [loglinter] log message should start with lowercase letter: "Привет"
    zap/main.go:20:41: error [loglinter] log message must be in English only: "Привет"
    "###);
}

#[test]
fn excluded_receivers_are_configurable() {
    let config = loglinter_core::Config::parse(
        r#"
[rules.loglinter]
methods = ["Errorf"]
excluded_receivers = []
"#,
    )
    .unwrap();
    let linter = LogLinter::from_config(config.rules.get("loglinter")).unwrap();

    let result = Analyzer::builder()
        .root(fixture_root())
        .config(config)
        .frontend(GoFrontend::new())
        .rule(linter)
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    let lines: Vec<_> = result
        .violations
        .iter()
        .map(|v| (v.location.file.display().to_string(), v.location.line))
        .collect();
    let slog = |line| ("slog/main.go".to_string(), line);
    assert_eq!(
        lines,
        vec![slog(22), slog(22), slog(22), slog(22), slog(23)]
    );
}

#[test]
fn excluded_receiver_silences_every_check() {
    let result = analyze();
    assert!(!result
        .violations
        .iter()
        .any(|v| v.location.file == PathBuf::from("slog/main.go") && v.location.line >= 20));

    let reports = LogLinter::new().check_message("Пароль password 🔥!");
    assert_eq!(reports.len(), 4);
}
