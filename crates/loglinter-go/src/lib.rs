//! Go front end for loglinter using Tree-sitter.
//!
//! Only selector calls (`logger.Info(..)`, `slog.Warn(..)`) become call
//! sites. Plain function calls such as `Info("..")` have no receiver and are
//! not log invocations in Go code.
//!
//! String literal text is the literal token with its surrounding quote or
//! backtick characters stripped; escape sequences are left as written.

use std::borrow::Cow;

use loglinter_core::{
    Argument, CallSite, Frontend, FrontendError, MessageLiteral, Receiver, SourcePos, SourceUnit,
};
use tree_sitter::{Language, Node, Parser, Tree};
use tracing::debug;

/// Front end for `.go` files.
pub struct GoFrontend {
    language: Language,
}

impl GoFrontend {
    /// Creates a new Go front end.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }
}

impl Default for GoFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for GoFrontend {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn parse<'src>(
        &self,
        source: &'src str,
    ) -> Result<Box<dyn SourceUnit + 'src>, FrontendError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| FrontendError::Language {
                language: "go",
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| FrontendError::Syntax {
                message: "parser returned no tree".to_string(),
            })?;

        if let Some(node) = first_error(tree.root_node()) {
            let pos = node.start_position();
            return Err(FrontendError::Syntax {
                message: format!("syntax error at {}:{}", pos.row + 1, pos.column + 1),
            });
        }

        Ok(Box::new(GoUnit { tree, source }))
    }
}

struct GoUnit<'src> {
    tree: Tree,
    source: &'src str,
}

impl GoUnit<'_> {
    fn text(&self, node: Node<'_>) -> &str {
        self.source
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    fn call_site(&self, node: Node<'_>) -> Option<CallSite<'_>> {
        let function = node.child_by_field_name("function")?;
        if function.kind() != "selector_expression" {
            return None;
        }

        let field = function.child_by_field_name("field")?;
        let operand = function.child_by_field_name("operand")?;
        let receiver = if operand.kind() == "identifier" {
            Receiver::Ident(Cow::Borrowed(self.text(operand)))
        } else {
            Receiver::Expr
        };

        let args = node
            .child_by_field_name("arguments")
            .map(|list| self.arguments(list))
            .unwrap_or_default();

        Some(CallSite {
            method: Cow::Borrowed(self.text(field)),
            receiver,
            args,
            position: position(field),
        })
    }

    fn arguments(&self, list: Node<'_>) -> Vec<Argument<'_>> {
        let mut cursor = list.walk();
        list.named_children(&mut cursor)
            .filter(|arg| arg.kind() != "comment")
            .map(|arg| match arg.kind() {
                "interpreted_string_literal" | "raw_string_literal" => {
                    Argument::Str(MessageLiteral {
                        text: Cow::Borrowed(unquote(self.text(arg))),
                        position: position(arg),
                    })
                }
                _ => Argument::Other,
            })
            .collect()
    }
}

impl SourceUnit for GoUnit<'_> {
    fn for_each_call(&self, visit: &mut dyn FnMut(&CallSite<'_>)) {
        let mut cursor = self.tree.walk();
        let mut calls = 0usize;

        // Pre-order traversal so outer calls are visited before their arguments.
        loop {
            let node = cursor.node();
            if node.kind() == "call_expression" {
                if let Some(site) = self.call_site(node) {
                    calls += 1;
                    visit(&site);
                }
            }

            if cursor.goto_first_child() || cursor.goto_next_sibling() {
                continue;
            }

            loop {
                if !cursor.goto_parent() {
                    debug!("Visited {} selector calls", calls);
                    return;
                }
                if cursor.goto_next_sibling() {
                    break;
                }
            }
        }
    }
}

fn position(node: Node<'_>) -> SourcePos {
    let start = node.start_position();
    SourcePos::new(start.row + 1, start.column + 1)
        .with_span(node.start_byte(), node.end_byte() - node.start_byte())
}

fn unquote(raw: &str) -> &str {
    raw.trim_matches(|c| c == '"' || c == '`')
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error).or(Some(node))
}
