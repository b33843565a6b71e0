//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::source::SourceUnit;
use crate::types::{Severity, Violation};

/// A per-file lint rule.
///
/// Rules receive a parsed [`SourceUnit`] rather than a concrete syntax tree,
/// so the same rule runs unchanged over every registered front end.
///
/// # Example
///
/// ```ignore
/// use loglinter_core::{FileContext, Location, Rule, SourceUnit, Violation};
///
/// pub struct NoPrintln;
///
/// impl Rule for NoPrintln {
///     fn name(&self) -> &'static str { "no-println" }
///
///     fn check(&self, ctx: &FileContext, unit: &dyn SourceUnit) -> Vec<Violation> {
///         let mut violations = Vec::new();
///         unit.for_each_call(&mut |call| {
///             if call.method == "println" {
///                 violations.push(Violation::new(
///                     self.name(),
///                     self.default_severity(),
///                     ctx.location(call.position),
///                     "println is not a logger",
///                 ));
///             }
///         });
///         violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "loglinter").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `unit` - The parsed compilation unit
    fn check(&self, ctx: &FileContext, unit: &dyn SourceUnit) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
