//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors. Accessors return
//! `Option` because a tree with syntax errors may lack any given part.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(SelectStmt, SelectStmt);
ast_node!(SelectClause, SelectClause);
ast_node!(WhereClause, WhereClause);
ast_node!(OrderClause, OrderClause);
ast_node!(SortTerm, SortTerm);
ast_node!(LimitClause, LimitClause);
ast_node!(OffsetClause, OffsetClause);
ast_node!(BinaryExpr, BinaryExpr);
ast_node!(PrefixExpr, PrefixExpr);
ast_node!(ParenExpr, ParenExpr);
ast_node!(Literal, Literal);
ast_node!(Property, Property);
ast_node!(ArrayLit, ArrayLit);
ast_node!(ObjectLit, ObjectLit);
ast_node!(Member, Member);

/// Any expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Paren(ParenExpr),
    Literal(Literal),
    Property(Property),
    Array(ArrayLit),
    Object(ObjectLit),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::BinaryExpr => BinaryExpr::cast(node).map(Expr::Binary),
            SyntaxKind::PrefixExpr => PrefixExpr::cast(node).map(Expr::Prefix),
            SyntaxKind::ParenExpr => ParenExpr::cast(node).map(Expr::Paren),
            SyntaxKind::Literal => Literal::cast(node).map(Expr::Literal),
            SyntaxKind::Property => Property::cast(node).map(Expr::Property),
            SyntaxKind::ArrayLit => ArrayLit::cast(node).map(Expr::Array),
            SyntaxKind::ObjectLit => ObjectLit::cast(node).map(Expr::Object),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Binary(n) => n.as_cst(),
            Expr::Prefix(n) => n.as_cst(),
            Expr::Paren(n) => n.as_cst(),
            Expr::Literal(n) => n.as_cst(),
            Expr::Property(n) => n.as_cst(),
            Expr::Array(n) => n.as_cst(),
            Expr::Object(n) => n.as_cst(),
        }
    }
}

/// Sort direction of an `ORDER BY` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// What a literal spells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Real,
    Str,
    True,
    False,
    Null,
    /// Positional parameter `?`
    Param,
}

fn first_token(node: &SyntaxNode, pred: impl Fn(SyntaxKind) -> bool) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| pred(t.kind()))
}

fn first_expr(node: &SyntaxNode) -> Option<Expr> {
    node.children().find_map(Expr::cast)
}

impl Root {
    pub fn stmt(&self) -> Option<SelectStmt> {
        self.0.children().find_map(SelectStmt::cast)
    }
}

impl SelectStmt {
    pub fn select(&self) -> Option<SelectClause> {
        self.0.children().find_map(SelectClause::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.0.children().find_map(WhereClause::cast)
    }

    pub fn order(&self) -> Option<OrderClause> {
        self.0.children().find_map(OrderClause::cast)
    }

    pub fn limit(&self) -> Option<LimitClause> {
        self.0.children().find_map(LimitClause::cast)
    }

    pub fn offset(&self) -> Option<OffsetClause> {
        self.0.children().find_map(OffsetClause::cast)
    }
}

impl SelectClause {
    /// `SELECT *`
    pub fn is_star(&self) -> bool {
        first_token(&self.0, |k| k == SyntaxKind::Star).is_some()
    }

    /// Projection expression; `None` for `SELECT *`.
    pub fn expr(&self) -> Option<Expr> {
        first_expr(&self.0)
    }
}

impl WhereClause {
    pub fn expr(&self) -> Option<Expr> {
        first_expr(&self.0)
    }
}

impl OrderClause {
    pub fn terms(&self) -> impl Iterator<Item = SortTerm> + '_ {
        self.0.children().filter_map(SortTerm::cast)
    }
}

impl SortTerm {
    pub fn expr(&self) -> Option<Expr> {
        first_expr(&self.0)
    }

    pub fn direction(&self) -> SortDirection {
        match first_token(&self.0, |k| k == SyntaxKind::KwDesc) {
            Some(_) => SortDirection::Descending,
            None => SortDirection::Ascending,
        }
    }

    pub fn is_descending(&self) -> bool {
        self.direction() == SortDirection::Descending
    }
}

impl LimitClause {
    pub fn expr(&self) -> Option<Expr> {
        first_expr(&self.0)
    }
}

impl OffsetClause {
    pub fn expr(&self) -> Option<Expr> {
        first_expr(&self.0)
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).next()
    }

    /// The operator token, the only non-trivia token child.
    pub fn op(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| !k.is_trivia())
    }

    pub fn rhs(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl PrefixExpr {
    pub fn op(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| k == SyntaxKind::KwNot)
    }

    pub fn operand(&self) -> Option<Expr> {
        first_expr(&self.0)
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        first_expr(&self.0)
    }
}

impl Literal {
    /// The value token (the number for negative literals).
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| !k.is_trivia() && k != SyntaxKind::Minus)
    }

    pub fn kind(&self) -> Option<LiteralKind> {
        let kind = match self.token()?.kind() {
            SyntaxKind::Int => LiteralKind::Int,
            SyntaxKind::Real => LiteralKind::Real,
            SyntaxKind::Str => LiteralKind::Str,
            SyntaxKind::KwTrue => LiteralKind::True,
            SyntaxKind::KwFalse => LiteralKind::False,
            SyntaxKind::KwNull => LiteralKind::Null,
            SyntaxKind::Question => LiteralKind::Param,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_negative(&self) -> bool {
        first_token(&self.0, |k| k == SyntaxKind::Minus).is_some()
    }

    /// Source spelling without trivia, e.g. `-4.5` or `"ale"`.
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl Property {
    /// Path segments: `beer.brewery.name` yields `beer`, `brewery`, `name`.
    pub fn segments(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Id || t.kind().is_keyword())
    }

    /// Dotted path without trivia.
    pub fn path(&self) -> String {
        self.segments()
            .map(|t| t.text().to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl ArrayLit {
    pub fn items(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl ObjectLit {
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

impl Member {
    /// Quoted key token.
    pub fn key(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| k == SyntaxKind::Str)
    }

    /// Key text with its quotes stripped. Escapes are left as written.
    pub fn key_text(&self) -> Option<String> {
        let key = self.key()?;
        let text = key.text();
        Some(text.get(1..text.len().saturating_sub(1))?.to_string())
    }

    pub fn value(&self) -> Option<Expr> {
        first_expr(&self.0)
    }
}
