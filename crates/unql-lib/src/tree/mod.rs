//! Read-only accessor layer over a successfully parsed tree.
//!
//! Consumers walk the tree through [`Node`] handles: indexed child access, child
//! counts and labels. They never see rowan or the parser's node representation.
//! Children are the non-trivia elements of a node; tokens are leaves labelled by
//! their source text, inner nodes are labelled by their kind name.

mod printer;


use std::fmt::Write;
use std::marker::PhantomData;

use rowan::{NodeOrToken, TextRange};
use serde::Serialize;

use crate::parser::{Root, SyntaxElement, SyntaxKind, SyntaxNode};

pub use printer::TreePrinter;

/// The tree of one successful parse. Owns the root; node handles borrow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: SyntaxNode,
}

impl SyntaxTree {
    pub(crate) fn new(root: SyntaxNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Node<'_> {
        Node::new(NodeOrToken::Node(self.root.clone()))
    }

    /// Underlying lossless CST.
    pub fn syntax(&self) -> &SyntaxNode {
        &self.root
    }

    /// Typed view of the root.
    pub fn ast(&self) -> Option<Root> {
        Root::cast(self.root.clone())
    }

    /// Full source text, trivia included. Equal to the parsed input.
    pub fn text(&self) -> String {
        self.root.text().to_string()
    }

    /// Pre-order rendering: each node's label, children parenthesised after it.
    pub fn render(&self) -> String {
        self.root().render()
    }

    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonNode::from_node(&self.root()))
    }
}

/// Borrowed handle to one tree element.
///
/// Only obtainable from [`SyntaxTree::root`] or [`Node::child_at`], so a handle always
/// refers to a live element of its tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<'t> {
    element: SyntaxElement,
    _tree: PhantomData<&'t SyntaxTree>,
}

impl<'t> Node<'t> {
    fn new(element: SyntaxElement) -> Self {
        Self {
            element,
            _tree: PhantomData,
        }
    }

    /// Number of direct children; 0 for a leaf.
    pub fn child_count(&self) -> usize {
        self.child_elements().count()
    }

    /// Child at zero-based `index`, `None` when out of range.
    pub fn child_at(&self, index: usize) -> Option<Node<'t>> {
        self.child_elements().nth(index).map(Node::new)
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'t>> + '_ {
        self.child_elements().map(Node::new)
    }

    /// This node's own label: the kind name for inner nodes, source text for tokens.
    pub fn label(&self) -> &str {
        match &self.element {
            NodeOrToken::Node(node) => node.kind().name(),
            NodeOrToken::Token(token) => token.text(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.element.kind()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.element, NodeOrToken::Token(_))
    }

    pub fn text_range(&self) -> TextRange {
        self.element.text_range()
    }

    /// Pre-order rendering of this subtree, e.g. `(Literal 7)`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.is_leaf() {
            return w.write_str(self.label());
        }
        write!(w, "({}", self.label())?;
        for child in self.children() {
            w.write_char(' ')?;
            child.format(w)?;
        }
        w.write_char(')')
    }

    fn child_elements(&self) -> impl Iterator<Item = SyntaxElement> + '_ {
        let node = match &self.element {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        };
        node.into_iter()
            .flat_map(|node| node.children_with_tokens())
            .filter(|child| !child.kind().is_trivia())
    }
}

/// Entry point for an external tree walker.
///
/// Receives the root of a successful parse exactly once; the handle cannot outlive
/// the tree.
pub trait TreeConsumer {
    fn consume(&mut self, root: Node<'_>);
}

impl<F> TreeConsumer for F
where
    F: FnMut(Node<'_>),
{
    fn consume(&mut self, root: Node<'_>) {
        self(root)
    }
}

#[derive(Serialize)]
struct JsonNode {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    start: u32,
    end: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonNode>,
}

impl JsonNode {
    fn from_node(node: &Node<'_>) -> Self {
        let range = node.text_range();
        Self {
            kind: node.kind().name(),
            text: node.is_leaf().then(|| node.label().to_string()),
            start: range.start().into(),
            end: range.end().into(),
            children: node.children().map(|child| Self::from_node(&child)).collect(),
        }
    }
}
