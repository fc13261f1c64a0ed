//! Grammar productions for UNQL.
//!
//! Statements are a fixed clause sequence; expressions use binding powers
//! (Pratt parsing) with operator precedence, from loosest to tightest:
//! `OR`, `AND`, prefix `NOT`, comparisons, `+ -`, `* / %`.

use super::core::Parser;
use super::cst::token_sets::{
    COMPARISON_OPS, EXPR_FIRST, EXPR_RECOVERY, LITERALS, SORT_DIRECTIONS,
};
use super::cst::{SyntaxKind, TokenSet};
use crate::diagnostics::DiagnosticKind;

use SyntaxKind::*;

/// Right binding power of prefix `NOT`: looser than comparisons, tighter than `AND`.
const NOT_BP: u8 = 5;

/// Left and right binding powers of an infix operator. Left-associative throughout.
fn infix_binding_power(kind: SyntaxKind) -> Option<(u8, u8)> {
    let bp = match kind {
        KwOr => (1, 2),
        KwAnd => (3, 4),
        Eq | Ne | Lt | Lte | Gt | Gte => (7, 8),
        Plus | Minus => (9, 10),
        Star | Slash | Percent => (11, 12),
        _ => return None,
    };
    Some(bp)
}

impl Parser<'_> {
    /// Entry production: `input := select_stmt EOF`.
    pub fn parse_root(&mut self) {
        self.trace("input");
        self.start_node(Root);

        if self.currently_is(KwSelect) {
            self.parse_select_stmt();
        } else if !self.has_fatal_error() {
            let found = self.found_description();
            self.error_msg(DiagnosticKind::ExpectedSelect, format!("found {found}"));
        }

        if !self.should_stop() {
            self.parse_trailing_input();
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Wraps everything after the statement in a single `Error` node.
    fn parse_trailing_input(&mut self) {
        self.start_node(Error);
        let text = self.current_text();
        if self.currently_is(Garbage) {
            self.error_msg(DiagnosticKind::UnrecognizedInput, text);
        } else {
            self.error_msg(DiagnosticKind::TrailingInput, format!("`{text}`"));
        }
        while !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    fn parse_select_stmt(&mut self) {
        self.trace("select_stmt");
        self.start_node(SelectStmt);

        self.parse_select_clause();
        if self.currently_is(KwWhere) {
            self.parse_where_clause();
        }
        if self.currently_is(KwOrder) {
            self.parse_order_clause();
        }
        if self.currently_is(KwLimit) {
            self.parse_limit_clause();
        }
        if self.currently_is(KwOffset) {
            self.parse_offset_clause();
        }

        self.finish_node();
    }

    /// `SELECT ( '*' | expr )`
    fn parse_select_clause(&mut self) {
        self.trace("select_clause");
        self.start_node(SelectClause);
        self.assert_current(KwSelect);
        self.bump();
        if !self.eat_token(Star) {
            self.parse_expr_or_error("after `SELECT`");
        }
        self.finish_node();
    }

    fn parse_where_clause(&mut self) {
        self.trace("where_clause");
        self.start_node(WhereClause);
        self.assert_current(KwWhere);
        self.bump();
        self.parse_expr_or_error("after `WHERE`");
        self.finish_node();
    }

    /// `ORDER BY sort_term (',' sort_term)*`
    fn parse_order_clause(&mut self) {
        self.trace("order_clause");
        self.start_node(OrderClause);
        self.assert_current(KwOrder);
        self.bump();
        self.expect(KwBy, DiagnosticKind::ExpectedBy);
        loop {
            self.parse_sort_term();
            if !self.eat_token(Comma) {
                break;
            }
        }
        self.finish_node();
    }

    fn parse_sort_term(&mut self) {
        self.trace("sort_term");
        self.start_node(SortTerm);
        self.parse_expr_or_error("in `ORDER BY`");
        if self.currently_is_one_of(SORT_DIRECTIONS) {
            self.bump();
        }
        self.finish_node();
    }

    fn parse_limit_clause(&mut self) {
        self.trace("limit_clause");
        self.start_node(LimitClause);
        self.assert_current(KwLimit);
        self.bump();
        self.parse_expr_or_error("after `LIMIT`");
        self.finish_node();
    }

    fn parse_offset_clause(&mut self) {
        self.trace("offset_clause");
        self.start_node(OffsetClause);
        self.assert_current(KwOffset);
        self.bump();
        self.parse_expr_or_error("after `OFFSET`");
        self.finish_node();
    }

    /// Parses an expression, or reports one as missing.
    ///
    /// At a synchronization point the diagnostic is emitted without consuming; any other
    /// token is consumed into an `Error` node so the caller sees progress.
    fn parse_expr_or_error(&mut self, context: &str) {
        if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr_bp(0);
            return;
        }
        self.error_expected_expr(context);
    }

    fn error_expected_expr(&mut self, context: &str) {
        if self.should_stop() || self.currently_is_one_of(EXPR_RECOVERY) {
            self.error_msg(DiagnosticKind::ExpectedExpression, context);
        } else if self.currently_is(Garbage) {
            let text = self.current_text();
            self.error_and_bump_msg(DiagnosticKind::UnrecognizedInput, text);
        } else {
            self.error_and_bump_msg(DiagnosticKind::ExpectedExpression, context);
        }
    }

    /// Pratt loop. Operands bind to operators whose left power is at least `min_bp`.
    fn parse_expr_bp(&mut self, min_bp: u8) {
        if !self.enter_recursion() {
            return;
        }
        self.trace("expr");

        let checkpoint = self.checkpoint();
        self.parse_lhs();

        let mut seen_comparison = false;
        loop {
            let op = self.current();
            let Some((l_bp, r_bp)) = infix_binding_power(op) else {
                break;
            };
            if l_bp < min_bp || self.has_fatal_error() {
                break;
            }

            let op_text = self.current_text();
            if COMPARISON_OPS.contains(op) {
                // Comparisons do not chain: `a < b < c` is reported but still parsed.
                if seen_comparison {
                    self.error_msg(
                        DiagnosticKind::UnexpectedToken,
                        format!("`{op_text}` cannot follow another comparison"),
                    );
                }
                seen_comparison = true;
            }

            self.start_node_at(checkpoint, BinaryExpr);
            self.bump();
            self.parse_operand(r_bp, op_text);
            self.finish_node();
        }

        self.exit_recursion();
    }

    fn parse_operand(&mut self, min_bp: u8, op_text: &str) {
        // Comparison and arithmetic operands bind tighter than `NOT`.
        if min_bp > NOT_BP && self.currently_is(KwNot) {
            self.error_msg(
                DiagnosticKind::UnexpectedToken,
                format!("`NOT` cannot be an operand of `{op_text}`; wrap it in parentheses"),
            );
        }
        if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr_bp(min_bp);
        } else {
            self.error_expected_expr(&format!("after `{op_text}`"));
        }
    }

    fn parse_lhs(&mut self) {
        match self.current() {
            KwNot => self.parse_not(),
            Minus => self.parse_negative_number(),
            ParenOpen => self.parse_paren(),
            BracketOpen => self.parse_array(),
            BraceOpen => self.parse_object(),
            Id => self.parse_property(),
            kind if LITERALS.contains(kind) => {
                self.start_node(Literal);
                self.bump();
                self.finish_node();
            }
            _ => self.error_expected_expr("here"),
        }
    }

    /// `NOT not_expr`
    fn parse_not(&mut self) {
        self.trace("not_expr");
        self.start_node(PrefixExpr);
        self.assert_current(KwNot);
        self.bump();
        self.parse_operand(NOT_BP, "NOT");
        self.finish_node();
    }

    /// `'-' (INT | REAL)`, kept as a single literal.
    fn parse_negative_number(&mut self) {
        self.start_node(Literal);
        self.assert_current(Minus);
        self.bump();
        if !self.eat_token(Int) && !self.eat_token(Real) {
            self.error_msg(DiagnosticKind::ExpectedExpression, "after `-`");
        }
        self.finish_node();
    }

    /// `IDENT ('.' IDENT)*`. Reserved words are accepted after a dot.
    fn parse_property(&mut self) {
        self.trace("property");
        self.start_node(Property);
        self.assert_current(Id);
        self.bump();
        while self.currently_is(Dot) {
            self.bump();
            let kind = self.current();
            if kind == Id || kind.is_keyword() {
                self.bump();
            } else {
                self.error_msg(DiagnosticKind::ExpectedPropertyName, ".");
                break;
            }
        }
        self.finish_node();
    }

    fn parse_paren(&mut self) {
        self.trace("paren_expr");
        self.start_node(ParenExpr);
        self.push_delimiter(ParenOpen);
        self.bump();
        self.parse_expr_or_error("inside `( )`");
        self.close_delimiter(ParenClose, DiagnosticKind::UnclosedParen);
        self.finish_node();
    }

    /// `'[' (expr (',' expr)*)? ']'`
    fn parse_array(&mut self) {
        self.trace("array");
        self.start_node(ArrayLit);
        self.push_delimiter(BracketOpen);
        self.bump();
        if !self.currently_is(BracketClose) {
            self.parse_comma_separated(|p| p.parse_expr_or_error("in array"));
        }
        self.close_delimiter(BracketClose, DiagnosticKind::UnclosedArray);
        self.finish_node();
    }

    /// `'{' (member (',' member)*)? '}'`
    fn parse_object(&mut self) {
        self.trace("object");
        self.start_node(ObjectLit);
        self.push_delimiter(BraceOpen);
        self.bump();
        if !self.currently_is(BraceClose) {
            self.parse_comma_separated(Self::parse_member);
        }
        self.close_delimiter(BraceClose, DiagnosticKind::UnclosedObject);
        self.finish_node();
    }

    /// `STRING ':' expr`
    fn parse_member(&mut self) {
        self.trace("member");
        self.start_node(Member);
        if !self.eat_token(Str) {
            let recovery = EXPR_RECOVERY.union(TokenSet::single(Colon));
            if self.should_stop() || self.currently_is_one_of(recovery) {
                self.error(DiagnosticKind::ExpectedMemberKey);
            } else {
                let text = self.current_text();
                self.error_and_bump_msg(
                    DiagnosticKind::ExpectedMemberKey,
                    format!("found `{text}`"),
                );
            }
        }
        self.expect(Colon, DiagnosticKind::ExpectedColon);
        self.parse_expr_or_error("after `:`");
        self.finish_node();
    }

    fn parse_comma_separated(&mut self, mut item: impl FnMut(&mut Self)) {
        loop {
            item(self);
            if self.has_fatal_error() || !self.eat_token(Comma) {
                break;
            }
        }
    }

    /// Consumes `close`, or reports the innermost open delimiter as unclosed.
    fn close_delimiter(&mut self, close: SyntaxKind, diagnostic: DiagnosticKind) {
        let open = self.pop_delimiter();
        if self.eat_token(close) {
            return;
        }
        let Some(open) = open else {
            return;
        };
        let found = self.found_description();
        let related = match open.kind {
            ParenOpen => "`(` opened here",
            BracketOpen => "`[` opened here",
            _ => "`{` opened here",
        };
        self.error_unclosed_delimiter(diagnostic, format!("found {found}"), related, open.span);
    }

    /// Describes the current token for messages: quoted text, or "end of input".
    fn found_description(&mut self) -> String {
        if self.currently_is(Error) && self.eof() {
            return "end of input".to_string();
        }
        format!("`{}`", self.current_text())
    }
}
