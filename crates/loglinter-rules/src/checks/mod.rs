//! The four message checks.
//!
//! Each check is a pure function from the unquoted message text to at most
//! one diagnostic message. Checks share no state and may run in any order.

mod first_letter;
mod forbidden_chars;
mod latin_script;
mod sensitive_data;

pub use first_letter::FirstLetterCase;
pub use forbidden_chars::ForbiddenCharacters;
pub use latin_script::LatinScript;
pub use sensitive_data::SensitiveData;

use crate::policy::LogPolicy;

/// Names of all checks, in reporting order.
pub const CHECK_NAMES: &[&str] = &[
    first_letter::NAME,
    latin_script::NAME,
    forbidden_chars::NAME,
    sensitive_data::NAME,
];

/// A validation applied to the text of a log message.
pub trait MessageCheck: Send + Sync {
    /// Returns the kebab-case name of this check.
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this check rejects.
    fn description(&self) -> &'static str;

    /// Returns the diagnostic message when `message` violates this check.
    fn check(&self, message: &str) -> Option<String>;
}

/// Type alias for boxed `MessageCheck` trait objects.
pub type CheckBox = Box<dyn MessageCheck>;

/// Builds every check enabled by `policy`, in reporting order.
#[must_use]
pub fn enabled_checks(policy: &LogPolicy) -> Vec<CheckBox> {
    let all: Vec<CheckBox> = vec![
        Box::new(FirstLetterCase),
        Box::new(LatinScript),
        Box::new(ForbiddenCharacters::new(policy.forbidden_chars.clone())),
        Box::new(SensitiveData::new(
            policy.sensitive_keywords.clone(),
            policy.sensitive_patterns.clone(),
        )),
    ];

    all.into_iter()
        .filter(|check| policy.is_check_enabled(check.name()))
        .collect()
}
