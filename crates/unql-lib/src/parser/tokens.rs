//! Token buffer between the lexer and the parser.
//!
//! Holds the full token sequence of one input and a cursor. The parser looks ahead and
//! advances through it at its own pace; nothing is re-lexed.

use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;
use super::lexer::{Token, lex};

#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Lexes `source` and buffers the result.
    pub fn lex(source: &str) -> Self {
        Self::new(lex(source))
    }

    /// Total number of buffered tokens, trivia included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Raw token `lookahead` positions past the cursor, trivia included.
    pub fn nth(&self, lookahead: usize) -> Option<&Token> {
        self.tokens.get(self.pos + lookahead)
    }

    /// Kind at the cursor; `Error` past the end.
    pub fn peek_kind(&self) -> SyntaxKind {
        self.nth(0).map_or(SyntaxKind::Error, |t| t.kind)
    }

    /// Returns the token at the cursor and moves past it.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    /// Span of the token at the cursor, or an empty range at `eof` past the end.
    pub fn current_span(&self, eof: TextSize) -> TextRange {
        self.nth(0).map_or_else(|| TextRange::empty(eof), |t| t.span)
    }
}
