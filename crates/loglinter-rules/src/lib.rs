//! # loglinter-rules
//!
//! The `loglinter` rule and the message checks it runs.
//!
//! ## Checks
//!
//! | Name | Rejects |
//! |------|---------|
//! | `first-letter-case` | Messages starting with an uppercase letter |
//! | `latin-script` | Letters outside the Latin script |
//! | `forbidden-characters` | Emoji and decorative punctuation (`!`, `?`, `…`, ...) |
//! | `sensitive-data` | Passwords, tokens, API keys and key-like values |
//!
//! ## Usage
//!
//! ```ignore
//! use loglinter_core::{Analyzer, RustFrontend};
//! use loglinter_go::GoFrontend;
//! use loglinter_rules::LogLinter;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./")
//!     .frontend(RustFrontend::new())
//!     .frontend(GoFrontend::new())
//!     .rule(LogLinter::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod checks;
mod classifier;
mod linter;
mod policy;
pub mod tables;

pub use checks::{MessageCheck, CHECK_NAMES};
pub use classifier::CallClassifier;
pub use linter::{LogLinter, NAME};
pub use policy::{LogPolicy, PolicyError, DEFAULT_EXCLUDED_RECEIVERS, DEFAULT_LOG_METHODS};

/// Re-export core types for convenience.
pub use loglinter_core::{Rule, Severity, Violation};
