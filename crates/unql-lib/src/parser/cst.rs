//! Syntax kinds for UNQL.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; keywords and node kinds lack token/regex attributes.
//! Keywords are case-insensitive, so the lexer recognises them as `Id` and remaps them
//! through [`SyntaxKind::keyword`].
//! `UnqlLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(".")]
    Dot,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    /// Positional parameter placeholder
    #[token("?")]
    Question,

    #[token("=")]
    #[token("==")]
    Eq,

    #[token("!=")]
    #[token("<>")]
    Ne,

    #[token("<")]
    Lt,

    #[token("<=")]
    Lte,

    #[token(">")]
    Gt,

    #[token(">=")]
    Gte,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Real,

    /// String literal including its quotes
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    Str,

    /// Identifier. Also produced for keywords before the lexer remaps them.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,

    KwSelect,
    KwWhere,
    KwOrder,
    KwBy,
    KwAsc,
    KwDesc,
    KwLimit,
    KwOffset,
    KwAnd,
    KwOr,
    KwNot,
    KwTrue,
    KwFalse,
    KwNull,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Root,
    SelectStmt,
    SelectClause,
    WhereClause,
    OrderClause,
    SortTerm,
    LimitClause,
    OffsetClause,
    BinaryExpr,
    PrefixExpr,
    ParenExpr,
    Literal,
    Property,
    ArrayLit,
    ObjectLit,
    Member,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

/// Reserved words, matched case-insensitively.
const KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("select", KwSelect),
    ("where", KwWhere),
    ("order", KwOrder),
    ("by", KwBy),
    ("asc", KwAsc),
    ("desc", KwDesc),
    ("limit", KwLimit),
    ("offset", KwOffset),
    ("and", KwAnd),
    ("or", KwOr),
    ("not", KwNot),
    ("true", KwTrue),
    ("false", KwFalse),
    ("null", KwNull),
];

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwSelect as u16..=KwNull as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self >= Root && self < __LAST
    }

    /// Keyword kind for an identifier's text, if it is a reserved word.
    pub fn keyword(text: &str) -> Option<SyntaxKind> {
        KEYWORDS
            .iter()
            .find(|(word, _)| word.eq_ignore_ascii_case(text))
            .map(|&(_, kind)| kind)
    }

    /// Stable name of the kind, used as the label of inner tree nodes.
    pub fn name(self) -> &'static str {
        match self {
            ParenOpen => "ParenOpen",
            ParenClose => "ParenClose",
            BracketOpen => "BracketOpen",
            BracketClose => "BracketClose",
            BraceOpen => "BraceOpen",
            BraceClose => "BraceClose",
            Comma => "Comma",
            Colon => "Colon",
            Dot => "Dot",
            Plus => "Plus",
            Minus => "Minus",
            Star => "Star",
            Slash => "Slash",
            Percent => "Percent",
            Question => "Question",
            Eq => "Eq",
            Ne => "Ne",
            Lt => "Lt",
            Lte => "Lte",
            Gt => "Gt",
            Gte => "Gte",
            Int => "Int",
            Real => "Real",
            Str => "Str",
            Id => "Id",
            KwSelect => "KwSelect",
            KwWhere => "KwWhere",
            KwOrder => "KwOrder",
            KwBy => "KwBy",
            KwAsc => "KwAsc",
            KwDesc => "KwDesc",
            KwLimit => "KwLimit",
            KwOffset => "KwOffset",
            KwAnd => "KwAnd",
            KwOr => "KwOr",
            KwNot => "KwNot",
            KwTrue => "KwTrue",
            KwFalse => "KwFalse",
            KwNull => "KwNull",
            Whitespace => "Whitespace",
            Garbage => "Garbage",
            Error => "Error",
            Root => "Root",
            SelectStmt => "SelectStmt",
            SelectClause => "SelectClause",
            WhereClause => "WhereClause",
            OrderClause => "OrderClause",
            SortTerm => "SortTerm",
            LimitClause => "LimitClause",
            OffsetClause => "OffsetClause",
            BinaryExpr => "BinaryExpr",
            PrefixExpr => "PrefixExpr",
            ParenExpr => "ParenExpr",
            Literal => "Literal",
            Property => "Property",
            ArrayLit => "ArrayLit",
            ObjectLit => "ObjectLit",
            Member => "Member",
            __LAST => "__LAST",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnqlLang {}

impl Language for UnqlLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<UnqlLang>;
pub type SyntaxToken = rowan::SyntaxToken<UnqlLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind = UnqlLang::kind_from_raw(rowan::SyntaxKind(i));
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const LITERALS: TokenSet =
        TokenSet::new(&[Int, Real, Str, KwTrue, KwFalse, KwNull, Question]);

    /// FIRST set of expr.
    pub const EXPR_FIRST: TokenSet = LITERALS.union(TokenSet::new(&[
        Id,
        ParenOpen,
        BracketOpen,
        BraceOpen,
        Minus,
        KwNot,
    ]));

    /// Tokens that start the next clause of a statement.
    pub const CLAUSE_KEYWORDS: TokenSet =
        TokenSet::new(&[KwSelect, KwWhere, KwOrder, KwLimit, KwOffset]);

    /// Synchronization points inside expressions: never consumed as error tokens.
    pub const EXPR_RECOVERY: TokenSet = CLAUSE_KEYWORDS.union(TokenSet::new(&[
        ParenClose,
        BracketClose,
        BraceClose,
        Comma,
        Colon,
        KwAsc,
        KwDesc,
    ]));

    pub const COMPARISON_OPS: TokenSet = TokenSet::new(&[Eq, Ne, Lt, Lte, Gt, Gte]);
    pub const ADDITIVE_OPS: TokenSet = TokenSet::new(&[Plus, Minus]);
    pub const MULTIPLICATIVE_OPS: TokenSet = TokenSet::new(&[Star, Slash, Percent]);

    pub const SORT_DIRECTIONS: TokenSet = TokenSet::new(&[KwAsc, KwDesc]);

    pub const TRIVIA: TokenSet = TokenSet::single(Whitespace);
}
