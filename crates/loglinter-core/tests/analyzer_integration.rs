//! Integration test: file discovery, parsing, and rule dispatch via Analyzer.
//!
//! Uses fixture files under `tests/fixtures/project/`. A small test rule
//! reports every call whose first argument is a string literal, so the
//! assertions exercise the pipeline rather than any particular lint.

use loglinter_core::{
    Analyzer, AnalyzerError, Config, FileContext, Rule, RustFrontend, Severity, SourceUnit,
    Violation,
};
use std::path::{Path, PathBuf};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project")
}

struct LiteralCalls;

impl Rule for LiteralCalls {
    fn name(&self) -> &'static str {
        "literal-calls"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &FileContext, unit: &dyn SourceUnit) -> Vec<Violation> {
        let mut violations = Vec::new();
        unit.for_each_call(&mut |call| {
            if let Some(literal) = call.message_literal() {
                violations.push(Violation::new(
                    self.name(),
                    self.default_severity(),
                    ctx.location(literal.position),
                    format!("{}: {}", call.method, literal.as_str()),
                ));
            }
        });
        violations
    }
}

fn messages(violations: &[Violation]) -> Vec<String> {
    violations
        .iter()
        .map(|v| format!("{}:{} {}", v.location.file.display(), v.location.line, v.message))
        .collect()
}

// ── Discovery and dispatch ──

#[test]
fn lints_every_rust_file_and_skips_broken_ones() {
    let result = Analyzer::builder()
        .root(fixture_root())
        .frontend(RustFrontend::new())
        .rule(LiteralCalls)
        .build()
        .expect("analyzer should build")
        .analyze()
        .expect("analysis should succeed");

    // broken.rs fails to parse and is not counted
    assert_eq!(result.files_checked, 2);
    assert_eq!(
        messages(&result.violations),
        vec![
            "src/main.rs:4 info: service starting",
            "src/main.rs:6 info: Connected",
            "src/nested/worker.rs:2 info: worker ready",
            "src/nested/worker.rs:3 debug: tick",
        ]
    );
    assert!(result.has_warnings());
    assert!(!result.has_errors());
}

#[test]
fn fail_on_parse_error_surfaces_the_file() {
    let err = Analyzer::builder()
        .root(fixture_root())
        .frontend(RustFrontend::new())
        .rule(LiteralCalls)
        .fail_on_parse_error(true)
        .build()
        .unwrap()
        .analyze()
        .unwrap_err();

    match err {
        AnalyzerError::Parse { path, .. } => assert!(path.ends_with("src/broken.rs")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn no_frontend_means_no_files() {
    let result = Analyzer::builder()
        .root(fixture_root())
        .rule(LiteralCalls)
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(result.files_checked, 0);
    assert!(result.violations.is_empty());
}

// ── Configuration ──

#[test]
fn config_excludes_and_severity_override() {
    let config = Config::parse(
        r#"
[analyzer]
exclude = ["**/nested/**"]

[rules.literal-calls]
severity = "error"
"#,
    )
    .unwrap();

    let result = Analyzer::builder()
        .root(fixture_root())
        .config(config)
        .frontend(RustFrontend::new())
        .rule(LiteralCalls)
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 2);
    assert!(result
        .violations
        .iter()
        .all(|v| v.severity == Severity::Error));
}

#[test]
fn disabled_rule_reports_nothing() {
    let config = Config::parse("[rules.literal-calls]\nenabled = false\n").unwrap();

    let result = Analyzer::builder()
        .root(fixture_root())
        .config(config)
        .frontend(RustFrontend::new())
        .rule(LiteralCalls)
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(result.files_checked, 2);
    assert!(result.violations.is_empty());
}

#[test]
fn parallelism_does_not_change_results() {
    let config = Config::parse("[analyzer]\nparallelism = 1\n").unwrap();

    let sequential = Analyzer::builder()
        .root(fixture_root())
        .config(config)
        .frontend(RustFrontend::new())
        .rule(LiteralCalls)
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    let parallel = Analyzer::builder()
        .root(fixture_root())
        .frontend(RustFrontend::new())
        .rule_box(Box::new(LiteralCalls))
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(
        messages(&sequential.violations),
        messages(&parallel.violations)
    );
}

// ── Single-source analysis ──

#[test]
fn analyze_source_uses_relative_path() {
    let root = fixture_root();
    let analyzer = Analyzer::builder()
        .root(&root)
        .frontend(RustFrontend::new())
        .rule(LiteralCalls)
        .build()
        .unwrap();

    let path = root.join("src/inline.rs");
    let violations = analyzer
        .analyze_source(&path, "fn f() { log.warn(\"low disk\"); }")
        .unwrap();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].location.file, Path::new("src/inline.rs"));
    assert_eq!(violations[0].location.column, 19);
    assert_eq!(violations[0].message, "warn: low disk");
}

// ── Ignore files ──

fn ignored_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".ignore"), "skipped.rs\n").unwrap();
    std::fs::write(dir.path().join("kept.rs"), "fn f() { log.info(\"a\"); }\n").unwrap();
    std::fs::write(dir.path().join("skipped.rs"), "fn g() { log.info(\"b\"); }\n").unwrap();
    dir
}

#[test]
fn respects_ignore_files_by_default() {
    let dir = ignored_tree();
    let result = Analyzer::builder()
        .root(dir.path())
        .frontend(RustFrontend::new())
        .rule(LiteralCalls)
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(result.files_checked, 1);
    assert_eq!(messages(&result.violations), vec!["kept.rs:1 info: a"]);
}

#[test]
fn ignore_files_can_be_disregarded() {
    let dir = ignored_tree();
    let config = Config::parse("[analyzer]\nrespect_gitignore = false\n").unwrap();
    let result = Analyzer::builder()
        .root(dir.path())
        .config(config)
        .frontend(RustFrontend::new())
        .rule(LiteralCalls)
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(result.files_checked, 2);
    assert_eq!(
        messages(&result.violations),
        vec!["kept.rs:1 info: a", "skipped.rs:1 info: b"]
    );
}
