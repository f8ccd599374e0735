//! Parent/child view of a sentence.
//!
//! A [`DependencyTree`] is built once per sentence from the head pointers of
//! its tokens. It is backed by a petgraph digraph with one node for the
//! virtual root, one per token, and one placeholder per head index that no
//! token carries. Edges go from a head to its dependents.
//!
//! ```rust
//! use dependency2tree::{Sentence, Token};
//!
//! let sentence = Sentence::new(vec![
//!     Token::new(1, "Le", "le", "DET", "", 2, "det"),
//!     Token::new(2, "chat", "chat", "NOUN", "", 0, "root"),
//! ]);
//! let tree = sentence.tree();
//!
//! assert_eq!(tree.roots()[0].form, "chat");
//! assert!(tree.has_children(2));
//! assert!(!tree.has_children(1));
//! ```

mod validation;

pub use validation::TreeWarning;

use crate::ast::{Sentence, Token, ROOT_INDEX};
use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// A node of the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeNode {
    /// The virtual root (index 0)
    Root,
    /// A token, by its position in the sentence
    Token(usize),
    /// A head index referenced by some token but carried by none
    Missing(usize),
}

/// Head-to-dependents adjacency of one sentence.
#[derive(Debug)]
pub struct DependencyTree<'a> {
    sentence: &'a Sentence,

    /// The underlying directed graph (head -> dependent)
    graph: DiGraph<TreeNode, ()>,

    /// Node of every known index: root, token indices, then missing heads
    nodes: IndexMap<usize, NodeIndex>,

    /// The virtual root node
    root: NodeIndex,
}

impl<'a> DependencyTree<'a> {
    /// Build the tree of a sentence.
    pub fn new(sentence: &'a Sentence) -> Self {
        let mut graph = DiGraph::with_capacity(sentence.len() + 1, sentence.len());
        let mut nodes = IndexMap::with_capacity(sentence.len() + 1);

        let root = graph.add_node(TreeNode::Root);
        nodes.insert(ROOT_INDEX, root);

        // Token nodes first, in appearance order, so node order is sibling order.
        for (position, token) in sentence.tokens().iter().enumerate() {
            let idx = graph.add_node(TreeNode::Token(position));
            nodes.insert(token.index, idx);
        }

        for token in sentence.tokens() {
            let parent = match nodes.get(&token.head) {
                Some(&idx) => idx,
                None => {
                    let idx = graph.add_node(TreeNode::Missing(token.head));
                    nodes.insert(token.head, idx);
                    idx
                }
            };
            graph.add_edge(parent, nodes[&token.index], ());
        }

        Self {
            sentence,
            graph,
            nodes,
            root,
        }
    }

    /// Tokens whose head is `index`, in appearance order.
    pub fn children_of(&self, index: usize) -> Vec<&'a Token> {
        let Some(&node) = self.nodes.get(&index) else {
            return Vec::new();
        };

        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        children.sort();

        children
            .into_iter()
            .filter_map(|idx| self.token_at(idx))
            .collect()
    }

    /// Check if any token has `index` as its head.
    pub fn has_children(&self, index: usize) -> bool {
        self.nodes.get(&index).is_some_and(|&node| {
            self.graph
                .neighbors_directed(node, Direction::Outgoing)
                .next()
                .is_some()
        })
    }

    /// Top-level tokens of the forest (`head == 0`), in appearance order.
    pub fn roots(&self) -> Vec<&'a Token> {
        self.children_of(ROOT_INDEX)
    }

    /// Check if the sentence has more than one root token.
    pub fn is_forest(&self) -> bool {
        self.roots().len() > 1
    }

    fn token_at(&self, idx: NodeIndex) -> Option<&'a Token> {
        match self.graph.node_weight(idx)? {
            TreeNode::Token(position) => self.sentence.tokens().get(*position),
            TreeNode::Root | TreeNode::Missing(_) => None,
        }
    }
}
