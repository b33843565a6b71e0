//! Parser front ends.
//!
//! A [`Frontend`] turns source text into a [`SourceUnit`]. The analyzer picks
//! the front end by file extension, so supporting a new language means
//! implementing this trait and registering it with the analyzer builder.

mod rust;

pub use rust::RustFrontend;

use crate::source::SourceUnit;
use thiserror::Error;

/// Errors a front end can report for a whole file.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// The parser could not be configured for its language.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Underlying error message.
        message: String,
    },

    /// The source text is not syntactically valid.
    #[error("{message}")]
    Syntax {
        /// Parser error message.
        message: String,
    },
}

/// Pluggable parser for one source language.
pub trait Frontend: Send + Sync {
    /// Language identifier (e.g., `"rust"`, `"go"`).
    fn language_id(&self) -> &'static str;

    /// File extensions handled by this front end, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Parses `source` into a unit whose call sites may borrow from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed as a whole.
    fn parse<'src>(&self, source: &'src str)
        -> Result<Box<dyn SourceUnit + 'src>, FrontendError>;
}

/// Type alias for boxed Frontend trait objects.
pub type FrontendBox = Box<dyn Frontend>;
