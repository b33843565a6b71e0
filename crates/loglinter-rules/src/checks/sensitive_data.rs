//! Messages must not mention credentials.

use super::MessageCheck;
use regex::Regex;

pub(crate) const NAME: &str = "sensitive-data";

/// Rejects messages that mention passwords, tokens or keys.
///
/// Keywords are matched as case-insensitive substrings anywhere in the
/// message. Patterns are matched as given.
#[derive(Debug, Clone)]
pub struct SensitiveData {
    keywords: Vec<String>,
    patterns: Vec<Regex>,
}

impl SensitiveData {
    /// Creates the check. Keywords are lowercased.
    #[must_use]
    pub fn new(keywords: Vec<String>, patterns: Vec<Regex>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            patterns,
        }
    }

    fn matches(&self, message: &str) -> bool {
        let lower = message.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
            || self.patterns.iter().any(|p| p.is_match(message))
    }
}

impl MessageCheck for SensitiveData {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Log messages must not contain sensitive data"
    }

    fn check(&self, message: &str) -> Option<String> {
        self.matches(message).then(|| {
            format!(
                "log message must not contain sensitive data like passwords, tokens, or api keys: {message:?}"
            )
        })
    }
}
