//! `syn` based front end for Rust sources.
//!
//! Three call shapes are exposed as call sites:
//!
//! - method calls: `logger.info("..")`
//! - qualified path calls: `log::info("..")`, where the segment before the
//!   function name is the receiver
//! - macro invocations: `info!("..")`, `tracing::warn!(target: "db", "..")`
//!
//! Macro bodies are split at top-level commas. Structured-logging fields
//! (`target: ..`, `user = %id`, `%value`, `?value`, and bare `user` or
//! `user.id` ahead of the format string) are dropped, so the first remaining
//! argument is the message.

use super::{Frontend, FrontendError};
use crate::source::{Argument, CallSite, MessageLiteral, Receiver, SourcePos, SourceUnit};
use proc_macro2::{Spacing, Span, TokenStream, TokenTree};
use std::borrow::Cow;
use syn::visit::Visit;
use syn::{Expr, ExprCall, ExprLit, ExprMethodCall, Lit, LitStr, Macro};

/// Front end for `.rs` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFrontend;

impl RustFrontend {
    /// Creates a new Rust front end.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for RustFrontend {
    fn language_id(&self) -> &'static str {
        "rust"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["rs"]
    }

    fn parse<'src>(
        &self,
        source: &'src str,
    ) -> Result<Box<dyn SourceUnit + 'src>, FrontendError> {
        let file = syn::parse_file(source).map_err(|e| FrontendError::Syntax {
            message: e.to_string(),
        })?;
        Ok(Box::new(RustUnit { file, source }))
    }
}

struct RustUnit<'src> {
    file: syn::File,
    source: &'src str,
}

impl SourceUnit for RustUnit<'_> {
    fn for_each_call(&self, visit: &mut dyn FnMut(&CallSite<'_>)) {
        let mut visitor = CallVisitor {
            source: self.source,
            visit,
        };
        visitor.visit_file(&self.file);
    }
}

struct CallVisitor<'v, 'src> {
    source: &'src str,
    visit: &'v mut dyn FnMut(&CallSite<'_>),
}

impl CallVisitor<'_, '_> {
    fn pos(&self, span: Span, length: usize) -> SourcePos {
        let start = span.start();
        SourcePos::new(start.line, start.column + 1)
            .with_span(byte_offset(self.source, start.line, start.column), length)
    }

    fn literal(&self, lit: &LitStr) -> MessageLiteral<'static> {
        let raw_len = lit.token().to_string().len();
        MessageLiteral {
            text: Cow::Owned(lit.value()),
            position: self.pos(lit.span(), raw_len),
        }
    }

    fn argument(&self, expr: &Expr) -> Argument<'static> {
        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => Argument::Str(self.literal(lit)),
            _ => Argument::Other,
        }
    }

    fn macro_arguments(&self, tokens: &TokenStream) -> Vec<Argument<'static>> {
        let exprs: Vec<Option<Expr>> = split_top_level(tokens.clone())
            .into_iter()
            .filter(|segment| !is_field(segment))
            .map(|segment| syn::parse2::<Expr>(segment.into_iter().collect()).ok())
            .collect();

        // Bare paths ahead of the first string literal are shorthand fields.
        let message_at = exprs.iter().position(|expr| {
            matches!(
                expr,
                Some(Expr::Lit(ExprLit {
                    lit: Lit::Str(_),
                    ..
                }))
            )
        });

        exprs
            .iter()
            .enumerate()
            .filter(|(i, expr)| {
                !(message_at.is_some_and(|at| *i < at) && expr.as_ref().is_some_and(is_field_path))
            })
            .map(|(_, expr)| expr.as_ref().map_or(Argument::Other, |expr| self.argument(expr)))
            .collect()
    }
}

impl<'ast> Visit<'ast> for CallVisitor<'_, '_> {
    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        let method = node.method.to_string();
        let site = CallSite {
            position: self.pos(node.method.span(), method.len()),
            method: Cow::Owned(method),
            receiver: receiver_of(&node.receiver),
            args: node.args.iter().map(|arg| self.argument(arg)).collect(),
        };
        (self.visit)(&site);

        syn::visit::visit_expr_method_call(self, node);
    }

    fn visit_expr_call(&mut self, node: &'ast ExprCall) {
        if let Expr::Path(func) = &*node.func {
            let segments = &func.path.segments;
            if func.qself.is_none() && segments.len() >= 2 {
                let last = &segments[segments.len() - 1].ident;
                let owner = &segments[segments.len() - 2].ident;
                let method = last.to_string();
                let site = CallSite {
                    position: self.pos(last.span(), method.len()),
                    method: Cow::Owned(method),
                    receiver: Receiver::Ident(Cow::Owned(owner.to_string())),
                    args: node.args.iter().map(|arg| self.argument(arg)).collect(),
                };
                (self.visit)(&site);
            }
        }

        syn::visit::visit_expr_call(self, node);
    }

    fn visit_macro(&mut self, node: &'ast Macro) {
        let segments = &node.path.segments;
        if let Some(last) = segments.last() {
            let receiver = if segments.len() >= 2 {
                Receiver::Ident(Cow::Owned(segments[segments.len() - 2].ident.to_string()))
            } else {
                Receiver::None
            };
            let method = last.ident.to_string();
            let site = CallSite {
                position: self.pos(last.ident.span(), method.len()),
                method: Cow::Owned(method),
                receiver,
                args: self.macro_arguments(&node.tokens),
            };
            (self.visit)(&site);
        }

        syn::visit::visit_macro(self, node);
    }
}

/// Classifies a receiver expression.
fn receiver_of(expr: &Expr) -> Receiver<'static> {
    match expr {
        Expr::Path(path) if path.qself.is_none() => path
            .path
            .get_ident()
            .map_or(Receiver::Expr, |ident| {
                Receiver::Ident(Cow::Owned(ident.to_string()))
            }),
        _ => Receiver::Expr,
    }
}

/// Splits a macro body at commas that are not nested in a delimiter group.
fn split_top_level(tokens: TokenStream) -> Vec<Vec<TokenTree>> {
    let mut segments = vec![Vec::new()];
    for tree in tokens {
        match &tree {
            TokenTree::Punct(p) if p.as_char() == ',' => segments.push(Vec::new()),
            _ => {
                if let Some(current) = segments.last_mut() {
                    current.push(tree);
                }
            }
        }
    }
    segments.retain(|segment| !segment.is_empty());
    segments
}

/// Recognizes structured-logging fields and named macro parameters.
fn is_field(segment: &[TokenTree]) -> bool {
    match segment {
        [TokenTree::Punct(sigil), ..] if matches!(sigil.as_char(), '%' | '?') => return true,
        [TokenTree::Ident(_), TokenTree::Punct(colon), ..]
            if colon.as_char() == ':' && colon.spacing() == Spacing::Alone =>
        {
            return true;
        }
        _ => {}
    }

    segment.iter().enumerate().any(|(i, tree)| match tree {
        TokenTree::Punct(eq) if eq.as_char() == '=' && eq.spacing() == Spacing::Alone => {
            // `==`, `<=`, `>=`, `!=` arrive as a joint punct followed by `=`.
            !matches!(
                i.checked_sub(1).map(|prev| &segment[prev]),
                Some(TokenTree::Punct(prev)) if prev.spacing() == Spacing::Joint
            )
        }
        _ => false,
    })
}

/// Matches `user`, `user.id` and `self.user.id`.
fn is_field_path(expr: &Expr) -> bool {
    match expr {
        Expr::Path(path) => path.qself.is_none(),
        Expr::Field(field) => is_field_path(&field.base),
        _ => false,
    }
}

/// Converts a 1-indexed line and 0-indexed character column to a byte offset.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            return offset
                + text
                    .char_indices()
                    .nth(column)
                    .map_or(text.len(), |(i, _)| i);
        }
        offset += text.len();
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Seen {
        method: String,
        receiver: Option<String>,
        message: Option<String>,
    }

    fn calls(code: &str) -> Vec<Seen> {
        let unit = RustFrontend::new().parse(code).expect("Failed to parse");
        let mut seen = Vec::new();
        unit.for_each_call(&mut |call| {
            seen.push(Seen {
                method: call.method.to_string(),
                receiver: call.receiver.ident().map(String::from),
                message: call.message_literal().map(|m| m.as_str().to_string()),
            });
        });
        seen
    }

    fn message_of(code: &str, method: &str) -> Option<String> {
        calls(code)
            .into_iter()
            .find(|c| c.method == method)
            .and_then(|c| c.message)
    }

    #[test]
    fn test_method_call() {
        let seen = calls(r#"fn f() { logger.info("server started"); }"#);
        assert_eq!(
            seen,
            vec![Seen {
                method: "info".into(),
                receiver: Some("logger".into()),
                message: Some("server started".into()),
            }]
        );
    }

    #[test]
    fn test_method_call_on_field_has_expr_receiver() {
        let unit = RustFrontend::new()
            .parse(r#"impl S { fn f(&self) { self.log.warn("slow"); } }"#)
            .unwrap();
        let mut receivers = Vec::new();
        unit.for_each_call(&mut |call| receivers.push(call.receiver == Receiver::Expr));
        assert_eq!(receivers, vec![true]);
    }

    #[test]
    fn test_path_call() {
        let seen = calls(r#"fn f() { fmt::format("Value"); }"#);
        assert_eq!(seen[0].method, "format");
        assert_eq!(seen[0].receiver.as_deref(), Some("fmt"));
        assert_eq!(seen[0].message.as_deref(), Some("Value"));
    }

    #[test]
    fn test_single_segment_call_is_not_a_call_site() {
        assert!(calls(r#"fn f() { info("x"); }"#).is_empty());
    }

    #[test]
    fn test_unqualified_macro() {
        let seen = calls(r#"fn f() { info!("request done"); }"#);
        assert_eq!(seen[0].method, "info");
        assert_eq!(seen[0].receiver, None);
        assert_eq!(seen[0].message.as_deref(), Some("request done"));
    }

    #[test]
    fn test_qualified_macro_receiver() {
        let seen = calls(r#"fn f() { tracing::error!("boom"); }"#);
        assert_eq!(seen[0].receiver.as_deref(), Some("tracing"));
    }

    #[test]
    fn test_macro_fields_are_skipped() {
        let code = r#"fn f() {
            tracing::info!(target: "db", user = %id, ?err, "Query failed {}", n);
        }"#;
        assert_eq!(message_of(code, "info").as_deref(), Some("Query failed {}"));
    }

    #[test]
    fn test_macro_shorthand_fields_are_skipped() {
        let code = r#"fn f() {
            tracing::info!(user, "Login Failed");
            tracing::warn!(user.id, self.conn.peer, "Peer reset {}", n);
        }"#;
        assert_eq!(message_of(code, "info").as_deref(), Some("Login Failed"));
        assert_eq!(message_of(code, "warn").as_deref(), Some("Peer reset {}"));
    }

    #[test]
    fn test_format_arguments_after_message_are_kept() {
        let seen = calls(r#"fn f() { error!("Failed {}", err); }"#);
        assert_eq!(seen[0].message.as_deref(), Some("Failed {}"));
    }

    #[test]
    fn test_macro_comparison_is_not_a_field() {
        let code = r#"fn f() { assert!(a == b, "Mismatch"); }"#;
        let seen = calls(code);
        assert_eq!(seen[0].message, None);
    }

    #[test]
    fn test_macro_with_variable_message() {
        assert_eq!(message_of(r#"fn f() { warn!(msg); }"#, "warn"), None);
    }

    #[test]
    fn test_raw_string_is_unquoted() {
        let code = r###"fn f() { debug!(r#"cache "hit""#); }"###;
        assert_eq!(message_of(code, "debug").as_deref(), Some(r#"cache "hit""#));
    }

    #[test]
    fn test_escapes_are_decoded() {
        let code = r#"fn f() { logger.info("disk \u{1F525}"); }"#;
        assert_eq!(message_of(code, "info").as_deref(), Some("disk \u{1F525}"));
    }

    #[test]
    fn test_nested_calls_are_visited() {
        let code = r#"fn f() { outer.run(|| { logger.info("inner"); }); }"#;
        let methods: Vec<String> = calls(code).into_iter().map(|c| c.method).collect();
        assert_eq!(methods, vec!["run", "info"]);
    }

    #[test]
    fn test_literal_position() {
        let code = "fn f() {\n    logger.info(\"ok\");\n}\n";
        let unit = RustFrontend::new().parse(code).unwrap();
        let mut positions = Vec::new();
        unit.for_each_call(&mut |call| {
            if let Some(lit) = call.message_literal() {
                positions.push(lit.position);
            }
        });
        let pos = positions[0];
        assert_eq!((pos.line, pos.column), (2, 17));
        assert_eq!(&code[pos.offset..pos.offset + pos.length], "\"ok\"");
    }

    #[test]
    fn test_byte_offset_counts_multibyte_chars() {
        let source = "// привет\nx";
        assert_eq!(byte_offset(source, 2, 0), source.len() - 1);
        assert_eq!(byte_offset(source, 1, 3), 3);
        assert_eq!(byte_offset(source, 1, 4), 5);
    }

    #[test]
    fn test_syntax_error() {
        let err = RustFrontend::new().parse("fn {").err().unwrap();
        assert!(matches!(err, FrontendError::Syntax { .. }));
    }
}
