//! The `loglinter` rule.
//!
//! # Detected Patterns
//!
//! For every logging call whose first argument is a non-empty string
//! literal, the message text must:
//!
//! - start with a lowercase letter
//! - be written in Latin script
//! - contain no emoji or decorative punctuation
//! - not mention passwords, tokens or keys
//!
//! # Good Patterns
//!
//! ```ignore
//! logger.Info("starting server on port 8080")
//! tracing::warn!(user = %id, "login attempt rejected");
//! ```
//!
//! Calls with a computed message (`logger.Info(msg)`) are never checked.

use crate::checks::{enabled_checks, CheckBox};
use crate::classifier::CallClassifier;
use crate::policy::{LogPolicy, PolicyError};
use loglinter_core::{FileContext, Rule, RuleConfig, Severity, SourceUnit, Violation};
use tracing::debug;

/// Rule name for loglinter.
pub const NAME: &str = "loglinter";

/// Checks log messages for style and safety.
pub struct LogLinter {
    policy: LogPolicy,
    checks: Vec<CheckBox>,
    severity: Severity,
}

impl Default for LogLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LogLinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogLinter")
            .field("policy", &self.policy)
            .field(
                "checks",
                &self.checks.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("severity", &self.severity)
            .finish()
    }
}

impl LogLinter {
    /// Creates the rule with the built-in tables.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(LogPolicy::default())
    }

    /// Creates the rule over a custom policy.
    #[must_use]
    pub fn with_policy(policy: LogPolicy) -> Self {
        let checks = enabled_checks(&policy);
        Self {
            policy,
            checks,
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.loglinter]` section, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the section holds an invalid option.
    pub fn from_config(config: Option<&RuleConfig>) -> Result<Self, PolicyError> {
        match config {
            Some(config) => Ok(Self::with_policy(LogPolicy::from_config(config)?)),
            None => Ok(Self::new()),
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the policy in effect.
    #[must_use]
    pub fn policy(&self) -> &LogPolicy {
        &self.policy
    }

    /// Returns the enabled checks, in reporting order.
    #[must_use]
    pub fn checks(&self) -> &[CheckBox] {
        &self.checks
    }

    /// Runs every enabled check over `message`.
    ///
    /// Returns one diagnostic message per failing check. The empty message
    /// never fails.
    #[must_use]
    pub fn check_message(&self, message: &str) -> Vec<String> {
        if message.is_empty() {
            return Vec::new();
        }
        self.checks
            .iter()
            .filter_map(|check| check.check(message))
            .collect()
    }
}

impl Rule for LogLinter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Log messages must start with a lowercase letter, be in English only, \
         and contain no emojis, special characters or sensitive data"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, unit: &dyn SourceUnit) -> Vec<Violation> {
        let classifier = CallClassifier::new(&self.policy);
        let mut violations = Vec::new();

        unit.for_each_call(&mut |call| {
            if !classifier.is_checkable(call) {
                return;
            }
            let Some(literal) = call.message_literal() else {
                debug!(
                    "{}:{}: skipping {} with computed message",
                    ctx.relative_path.display(),
                    call.position.line,
                    call.method
                );
                return;
            };

            for message in self.check_message(literal.as_str()) {
                violations.push(Violation::new(
                    NAME,
                    self.severity,
                    ctx.location(literal.position),
                    message,
                ));
            }
        });

        violations
    }
}
