use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use crate::parser::{SyntaxNode, ast};

use super::SyntaxTree;

/// Indented dumps of a tree: the typed AST by default, or the raw CST.
pub struct TreePrinter<'t> {
    tree: &'t SyntaxTree,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Self {
            tree,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    /// Dump the CST, one line per node and token.
    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    /// Include whitespace tokens in the raw dump.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            return format_cst(self.tree.syntax(), 0, self.trivia, self.spans, w);
        }
        match self.tree.ast() {
            Some(root) => self.format_root(&root, w),
            None => Ok(()),
        }
    }

    fn span_str(&self, range: TextRange) -> String {
        if self.spans {
            format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
        } else {
            String::new()
        }
    }

    fn format_root(&self, root: &ast::Root, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "Root{}", self.span_str(root.as_cst().text_range()))?;
        let Some(stmt) = root.stmt() else {
            return Ok(());
        };
        writeln!(w, "  Select{}", self.span_str(stmt.as_cst().text_range()))?;

        if let Some(select) = stmt.select() {
            let span = self.span_str(select.as_cst().text_range());
            if select.is_star() {
                writeln!(w, "    Projection{} *", span)?;
            } else {
                writeln!(w, "    Projection{}", span)?;
            }
            if let Some(expr) = select.expr() {
                self.format_expr(&expr, 3, w)?;
            }
        }
        if let Some(clause) = stmt.where_clause() {
            writeln!(w, "    Where{}", self.span_str(clause.as_cst().text_range()))?;
            if let Some(expr) = clause.expr() {
                self.format_expr(&expr, 3, w)?;
            }
        }
        if let Some(order) = stmt.order() {
            writeln!(w, "    OrderBy{}", self.span_str(order.as_cst().text_range()))?;
            for term in order.terms() {
                let direction = if term.is_descending() { "DESC" } else { "ASC" };
                let span = self.span_str(term.as_cst().text_range());
                writeln!(w, "      SortTerm{} {}", span, direction)?;
                if let Some(expr) = term.expr() {
                    self.format_expr(&expr, 4, w)?;
                }
            }
        }
        if let Some(limit) = stmt.limit() {
            writeln!(w, "    Limit{}", self.span_str(limit.as_cst().text_range()))?;
            if let Some(expr) = limit.expr() {
                self.format_expr(&expr, 3, w)?;
            }
        }
        if let Some(offset) = stmt.offset() {
            writeln!(w, "    Offset{}", self.span_str(offset.as_cst().text_range()))?;
            if let Some(expr) = offset.expr() {
                self.format_expr(&expr, 3, w)?;
            }
        }
        Ok(())
    }

    fn format_expr(&self, expr: &ast::Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(expr.as_cst().text_range());

        match expr {
            ast::Expr::Binary(b) => {
                let op = b.op().map(|t| t.text().to_string()).unwrap_or_default();
                writeln!(w, "{}Binary{} {}", prefix, span, op)?;
                for operand in [b.lhs(), b.rhs()].into_iter().flatten() {
                    self.format_expr(&operand, indent + 1, w)?;
                }
            }
            ast::Expr::Prefix(p) => {
                writeln!(w, "{}Not{}", prefix, span)?;
                if let Some(operand) = p.operand() {
                    self.format_expr(&operand, indent + 1, w)?;
                }
            }
            ast::Expr::Paren(p) => {
                writeln!(w, "{}Paren{}", prefix, span)?;
                if let Some(inner) = p.inner() {
                    self.format_expr(&inner, indent + 1, w)?;
                }
            }
            ast::Expr::Literal(l) => {
                writeln!(w, "{}Literal{} {}", prefix, span, l.text())?;
            }
            ast::Expr::Property(p) => {
                writeln!(w, "{}Property{} {}", prefix, span, p.path())?;
            }
            ast::Expr::Array(a) => {
                writeln!(w, "{}Array{}", prefix, span)?;
                for item in a.items() {
                    self.format_expr(&item, indent + 1, w)?;
                }
            }
            ast::Expr::Object(o) => {
                writeln!(w, "{}Object{}", prefix, span)?;
                for member in o.members() {
                    let key = member.key_text().unwrap_or_default();
                    let member_span = self.span_str(member.as_cst().text_range());
                    writeln!(w, "{}  Member{} {}", prefix, member_span, key)?;
                    if let Some(value) = member.value() {
                        self.format_expr(&value, indent + 2, w)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn format_cst(
    node: &SyntaxNode,
    indent: usize,
    trivia: bool,
    spans: bool,
    w: &mut impl Write,
) -> std::fmt::Result {
    let prefix = "  ".repeat(indent);
    let span = |range: TextRange| {
        if spans {
            format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
        } else {
            String::new()
        }
    };

    writeln!(w, "{}{:?}{}", prefix, node.kind(), span(node.text_range()))?;

    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Node(n) => format_cst(&n, indent + 1, trivia, spans, w)?,
            NodeOrToken::Token(t) => {
                if trivia || !t.kind().is_trivia() {
                    let child_prefix = "  ".repeat(indent + 1);
                    writeln!(
                        w,
                        "{}{:?}{} {:?}",
                        child_prefix,
                        t.kind(),
                        span(t.text_range()),
                        t.text()
                    )?;
                }
            }
        }
    }
    Ok(())
}
