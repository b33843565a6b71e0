//! Messages must not start with an uppercase letter.

use super::MessageCheck;
use crate::tables;

pub(crate) const NAME: &str = "first-letter-case";

/// Rejects messages whose first code point is an uppercase letter.
///
/// Only the first code point is inspected. A leading digit, space, symbol or
/// letter-like numeral passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLetterCase;

impl MessageCheck for FirstLetterCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Log messages must start with a lowercase letter"
    }

    fn check(&self, message: &str) -> Option<String> {
        tables::uppercase_start()
            .is_match(message)
            .then(|| format!("log message should start with lowercase letter: {message:?}"))
    }
}
