//! Parser infrastructure for UNQL.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder:
//!
//! - Zero-copy lexing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary expressions retroactively wrap their left operand
//! - Explicit recovery sets decide when to report and bail vs consume a token as an error
//!
//! # Recovery Strategy
//!
//! The parser is resilient and always produces a tree. Every violation adds one
//! diagnostic, so the diagnostics count is the error tally. Tokens that cannot start
//! anything are wrapped in `SyntaxKind::Error` nodes; missing tokens are reported
//! without consuming.
//!
//! Exhausting the recursion fuel is fatal and returns an actual error.

pub mod ast;
pub mod cst;
pub mod lexer;
pub mod tokens;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, UnqlLang};

pub use ast::{
    ArrayLit, BinaryExpr, Expr, LimitClause, Literal, LiteralKind, Member, ObjectLit,
    OffsetClause, OrderClause, ParenExpr, PrefixExpr, Property, Root, SelectClause, SelectStmt,
    SortDirection, SortTerm, WhereClause,
};

pub use core::{DEFAULT_RECURSION_FUEL, Parser};
pub use tokens::TokenBuffer;

use crate::Result;
use crate::diagnostics::Diagnostics;
use crate::input::InputStream;

/// Parse result: the green tree plus every syntax error found.
///
/// The tree is always complete. Error nodes in the tree mark recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    pub(crate) green: rowan::GreenNode,
    pub(crate) diagnostics: Diagnostics,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.green
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> Option<Root> {
        Root::cast(self.syntax())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// The error tally.
    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_parts(self) -> (SyntaxNode, Diagnostics) {
        (SyntaxNode::new_root(self.green), self.diagnostics)
    }
}

/// Main entry point. Returns `Err` only when recursion fuel runs out.
pub fn parse(input: &InputStream<'_>) -> Result<Parse> {
    let source = input.as_str();
    parse_with_parser(Parser::new(source, TokenBuffer::lex(source)))
}

/// Parse with a pre-configured parser (for custom fuel limits).
pub(crate) fn parse_with_parser(parser: Parser<'_>) -> Result<Parse> {
    tracing::debug!(tokens = parser.tokens.len(), "parsing");
    let parse = parser.parse()?;
    tracing::debug!(errors = parse.error_count(), "parsed");
    Ok(parse)
}
