//! Language-neutral model of the call expressions a front end exposes.
//!
//! Front ends translate their own syntax trees into [`CallSite`] values and
//! hand them out one at a time through [`SourceUnit::for_each_call`]. Rules
//! never see the underlying parser types.

use std::borrow::Cow;

/// Position of a syntax element in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourcePos {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length of the element in bytes.
    pub length: usize,
}

impl SourcePos {
    /// Creates a position with no span information.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length of the element.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// The expression a method is invoked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receiver<'a> {
    /// No receiver, e.g. an unqualified macro such as `info!(..)`.
    None,
    /// A bare identifier such as `logger` in `logger.info(..)` or `log` in
    /// `log::info!(..)`.
    Ident(Cow<'a, str>),
    /// Any other expression (field access, call chain, ...).
    Expr,
}

impl Receiver<'_> {
    /// Returns the identifier name when the receiver is a bare identifier.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match self {
            Self::Ident(name) => Some(name.as_ref()),
            Self::None | Self::Expr => None,
        }
    }
}

/// Unquoted text of a string literal argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLiteral<'a> {
    /// Literal content without its delimiters.
    pub text: Cow<'a, str>,
    /// Position of the literal token, including delimiters.
    pub position: SourcePos,
}

impl MessageLiteral<'_> {
    /// Returns the literal content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true for `""`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One argument of a call, as far as linting is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument<'a> {
    /// A plain string or raw-string literal.
    Str(MessageLiteral<'a>),
    /// Anything else: variables, concatenations, calls, format args.
    Other,
}

/// A single invocation expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Simple name of the invoked method, function or macro.
    pub method: Cow<'a, str>,
    /// What the method is invoked on.
    pub receiver: Receiver<'a>,
    /// Positional arguments in source order.
    pub args: Vec<Argument<'a>>,
    /// Position of the invocation.
    pub position: SourcePos,
}

impl<'a> CallSite<'a> {
    /// Returns the first argument when it is a string literal.
    ///
    /// Calls whose first argument is computed return `None`; they are never
    /// checked.
    #[must_use]
    pub fn message_literal(&self) -> Option<&MessageLiteral<'a>> {
        match self.args.first()? {
            Argument::Str(literal) => Some(literal),
            Argument::Other => None,
        }
    }
}

/// A parsed compilation unit that can enumerate its call expressions.
pub trait SourceUnit {
    /// Calls `visit` once for every call expression, in source order.
    fn for_each_call(&self, visit: &mut dyn FnMut(&CallSite<'_>));
}
