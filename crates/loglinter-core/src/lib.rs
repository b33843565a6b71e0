//! # loglinter-core
//!
//! Core framework for linting log messages found in source code.
//!
//! This crate provides the language-neutral pieces of the linter:
//!
//! - [`CallSite`] and [`MessageLiteral`], the view a rule gets of one call
//! - [`Frontend`] and [`SourceUnit`] for plugging in a parser
//! - [`RustFrontend`], the built-in `syn` based front end
//! - [`Rule`] trait for per-file rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use loglinter_core::{Analyzer, RustFrontend};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .frontend(RustFrontend::new())
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! for violation in &result.violations {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod frontend;
mod rule;
mod source;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use frontend::{Frontend, FrontendBox, FrontendError, RustFrontend};
pub use rule::{Rule, RuleBox};
pub use source::{Argument, CallSite, MessageLiteral, Receiver, SourcePos, SourceUnit};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
