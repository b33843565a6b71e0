//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::frontend::{Frontend, FrontendBox, FrontendError};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Error walking the source tree.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Worker pool could not be created.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    frontends: Vec<FrontendBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a per-file rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-file rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers a front end for the extensions it declares.
    ///
    /// When two front ends claim the same extension the first one wins.
    #[must_use]
    pub fn frontend<F: Frontend + 'static>(mut self, frontend: F) -> Self {
        self.frontends.push(Box::new(frontend));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or an
    /// exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self.root.unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut patterns = self.exclude_patterns;
        patterns.extend(config.analyzer.exclude.iter().cloned());
        let exclude = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            root,
            rules: self.rules,
            frontends: self.frontends,
            exclude,
            config,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    frontends: Vec<FrontendBox>,
    exclude: Vec<glob::Pattern>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// Files are analyzed in parallel, bounded by `analyzer.parallelism` when
    /// it is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, or if a file fails
    /// to parse while `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let outcomes: Vec<Result<Vec<Violation>, AnalyzerError>> =
            match self.config.analyzer.parallelism {
                Some(threads) => rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?
                    .install(|| self.analyze_all(&files)),
                None => self.analyze_all(&files),
            };

        let mut result = LintResult::new();
        for outcome in outcomes {
            match outcome {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes source text as if it were read from `path`.
    ///
    /// # Errors
    ///
    /// Returns a parse error if no front end handles the extension of `path`
    /// or the text fails to parse.
    pub fn analyze_source(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Vec<Violation>, AnalyzerError> {
        let frontend = self
            .frontend_for(path)
            .ok_or_else(|| AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: "no front end registered for this file type".to_string(),
            })?;

        let unit = frontend
            .parse(content)
            .map_err(|e: FrontendError| AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let ctx = FileContext::new(path, content, &self.root);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_violations = rule.check(&ctx, &*unit);
            let rule_violations = self.apply_severity_override(rule.name(), rule_violations);
            violations.extend(rule_violations);
        }

        Ok(violations)
    }

    fn analyze_all(&self, files: &[PathBuf]) -> Vec<Result<Vec<Violation>, AnalyzerError>> {
        files
            .par_iter()
            .map(|path| self.analyze_file(path))
            .collect()
    }

    /// Analyzes a single file and returns violations.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.analyze_source(path, &content)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    /// Finds the front end that claims the extension of `path`.
    fn frontend_for(&self, path: &Path) -> Option<&dyn Frontend> {
        let ext = path.extension()?.to_str()?;
        self.frontends
            .iter()
            .find(|f| f.extensions().iter().any(|e| *e == ext))
            .map(|f| &**f)
    }

    /// Discovers all source files a registered front end can parse.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files = Vec::new();
        let walker = ignore::WalkBuilder::new(&self.root)
            .standard_filters(self.config.analyzer.respect_gitignore)
            .build();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if self.frontend_for(&path).is_none() {
                continue;
            }

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.exclude.iter().any(|pattern| {
            if pattern.matches(&path_str) {
                return true;
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized = pattern.as_str().replace("**", "");
            !normalized.is_empty() && normalized != "/" && path_str.contains(&normalized)
        })
    }
}
