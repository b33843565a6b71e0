//! Name lists and tables that drive classification and checking.
//!
//! # Configuration
//!
//! Every key is optional; an absent key keeps the built-in table.
//!
//! ```toml
//! [rules.loglinter]
//! methods = ["Info", "Error", "info", "error"]
//! excluded_receivers = ["fmt", "errors"]
//! forbidden_chars = "!?…"
//! sensitive_keywords = ["password", "token"]
//! sensitive_patterns = ['(?i)\bbearer\s+\S{16,}']
//! disabled_checks = ["latin-script"]
//! ```

use crate::checks::CHECK_NAMES;
use crate::tables;
use loglinter_core::RuleConfig;
use regex::Regex;
use std::collections::BTreeSet;
use thiserror::Error;

/// Logging methods recognized by default.
///
/// Covers Go's `log/slog`, zap (plain, sugared and context variants) and
/// zerolog, plus the Rust `log`/`tracing` level macros.
pub const DEFAULT_LOG_METHODS: &[&str] = &[
    // Go
    "Debug",
    "Info",
    "Warn",
    "Error",
    "Fatal",
    "Panic",
    "DPanic",
    "Debugf",
    "Infof",
    "Warnf",
    "Errorf",
    "Fatalf",
    "Panicf",
    "DPanicf",
    "Debugw",
    "Infow",
    "Warnw",
    "Errorw",
    "Fatalw",
    "Panicw",
    "DPanicw",
    "DebugContext",
    "InfoContext",
    "WarnContext",
    "ErrorContext",
    "Msg",
    "Msgf",
    // Rust
    "trace",
    "debug",
    "info",
    "warn",
    "error",
];

/// Receivers whose calls are never log calls: formatting and error
/// construction.
pub const DEFAULT_EXCLUDED_RECEIVERS: &[&str] = &["fmt", "errors"];

/// Errors raised while building a policy from configuration.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A `sensitive_patterns` entry is not a valid regex.
    #[error("invalid sensitive pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Regex compilation error.
        source: regex::Error,
    },

    /// A `disabled_checks` entry names no known check.
    #[error("unknown check {name:?} (expected one of: {})", CHECK_NAMES.join(", "))]
    UnknownCheck {
        /// The offending name.
        name: String,
    },
}

/// Immutable tables shared by the classifier and the checks.
#[derive(Debug, Clone)]
pub struct LogPolicy {
    /// Method names treated as logging calls.
    pub log_methods: BTreeSet<String>,
    /// Bare receiver identifiers whose calls are skipped.
    pub excluded_receivers: BTreeSet<String>,
    /// Punctuation rejected in messages, in addition to emoji.
    pub forbidden_chars: Vec<char>,
    /// Lowercase keywords marking sensitive data.
    pub sensitive_keywords: Vec<String>,
    /// Patterns marking sensitive data.
    pub sensitive_patterns: Vec<Regex>,
    /// Names of checks that are switched off.
    pub disabled_checks: BTreeSet<String>,
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self {
            log_methods: to_set(DEFAULT_LOG_METHODS),
            excluded_receivers: to_set(DEFAULT_EXCLUDED_RECEIVERS),
            forbidden_chars: tables::FORBIDDEN_PUNCTUATION.to_vec(),
            sensitive_keywords: tables::SENSITIVE_KEYWORDS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
            sensitive_patterns: vec![tables::key_like_pattern().clone()],
            disabled_checks: BTreeSet::new(),
        }
    }
}

impl LogPolicy {
    /// Builds a policy from `[rules.loglinter]` options.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid regex in `sensitive_patterns` or an
    /// unknown name in `disabled_checks`.
    pub fn from_config(config: &RuleConfig) -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Some(methods) = config.get_str_array("methods") {
            policy.log_methods = methods.into_iter().collect();
        }
        if let Some(receivers) = config.get_str_array("excluded_receivers") {
            policy.excluded_receivers = receivers.into_iter().collect();
        }
        if let Some(chars) = config.get_str("forbidden_chars") {
            policy.forbidden_chars = chars.chars().collect();
        }
        if let Some(keywords) = config.get_str_array("sensitive_keywords") {
            policy.sensitive_keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        }
        if let Some(patterns) = config.get_str_array("sensitive_patterns") {
            policy.sensitive_patterns = patterns
                .into_iter()
                .map(|pattern| {
                    Regex::new(&pattern)
                        .map_err(|source| PolicyError::InvalidPattern { pattern, source })
                })
                .collect::<Result<_, _>>()?;
        }
        if let Some(disabled) = config.get_str_array("disabled_checks") {
            for name in disabled {
                if !CHECK_NAMES.contains(&name.as_str()) {
                    return Err(PolicyError::UnknownCheck { name });
                }
                policy.disabled_checks.insert(name);
            }
        }

        Ok(policy)
    }

    /// Returns true unless the named check is disabled.
    #[must_use]
    pub fn is_check_enabled(&self, name: &str) -> bool {
        !self.disabled_checks.contains(name)
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
