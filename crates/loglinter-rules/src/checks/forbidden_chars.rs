//! Messages must not contain emoji or decorative punctuation.

use super::MessageCheck;
use crate::tables;

pub(crate) const NAME: &str = "forbidden-characters";

/// Rejects messages containing an emoji or a forbidden punctuation mark.
#[derive(Debug, Clone)]
pub struct ForbiddenCharacters {
    punctuation: Vec<char>,
}

impl Default for ForbiddenCharacters {
    fn default() -> Self {
        Self::new(tables::FORBIDDEN_PUNCTUATION.to_vec())
    }
}

impl ForbiddenCharacters {
    /// Creates the check with the given punctuation table; the emoji table is
    /// always applied.
    #[must_use]
    pub fn new(punctuation: Vec<char>) -> Self {
        Self { punctuation }
    }

    fn is_forbidden(&self, c: char) -> bool {
        tables::is_emoji(c) || self.punctuation.contains(&c)
    }
}

impl MessageCheck for ForbiddenCharacters {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Log messages must not contain emojis or special characters"
    }

    fn check(&self, message: &str) -> Option<String> {
        message.chars().any(|c| self.is_forbidden(c)).then(|| {
            format!("log message must not contain emojis or special characters: {message:?}")
        })
    }
}
