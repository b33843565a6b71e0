//! Messages must be written in Latin script.

use super::MessageCheck;
use crate::tables;

pub(crate) const NAME: &str = "latin-script";

/// Rejects messages containing a letter outside the Latin script.
///
/// Digits, whitespace, punctuation, symbols and combining marks are ignored,
/// so a message without letters never reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinScript;

impl MessageCheck for LatinScript {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Log messages must be in English only"
    }

    fn check(&self, message: &str) -> Option<String> {
        tables::non_latin_letter()
            .is_match(message)
            .then(|| format!("log message must be in English only: {message:?}"))
    }
}
