/**
 * All of the regex syntax-tree (AST) data-structures.
 */

use xg_intervals::IntervalSet;

pub use regex_syntax::hir::Look;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Matches the empty string
    Empty,

    /// Matches nothing, produced by a character class with no members
    NoMatch,

    Literal(String),

    /// Never empty and never contains surrogates
    CharClass(IntervalSet<char>),

    AnyCharNotNewline,

    AnyChar,

    /// Zero-width assertions, like `^` or `\b`
    Look(Look),

    Capture{
        /// 1-based, in the order of the opening parentheses
        index: usize,
        name: Option<String>,
        node: Box<Node>,
    },

    Star(Box<Node>),

    Plus(Box<Node>),

    Quest(Box<Node>),

    Repeat{
        node: Box<Node>,
        min: u32,
        /// None means unbounded
        max: Option<u32>,
    },

    /// At least two elements
    Concat(Vec<Node>),

    /// At least two elements
    Alternate(Vec<Node>),
}

impl Node {
    pub fn literal<S>(s: S) -> Self where S : Into<String> {
        Node::Literal(s.into())
    }

    /// A class node from a set, falling back to `NoMatch` for the empty set.
    pub fn class(set: IntervalSet<char>) -> Self {
        if set.is_empty() {
            Node::NoMatch
        }
        else {
            Node::CharClass(set)
        }
    }

    /// Direct children of this node, in order.
    pub fn children(&self) -> &[Node] {
        match self {
              Node::Capture{ node, .. }
            | Node::Star(node)
            | Node::Plus(node)
            | Node::Quest(node)
            | Node::Repeat{ node, .. } => std::slice::from_ref(&**node),

              Node::Concat(nodes)
            | Node::Alternate(nodes) => nodes,

              Node::Empty
            | Node::NoMatch
            | Node::Literal(_)
            | Node::CharClass(_)
            | Node::AnyCharNotNewline
            | Node::AnyChar
            | Node::Look(_) => &[],
        }
    }

    /// Nesting depth of the tree, a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}
