//! Structural checks on a dependency tree.
//!
//! Tokens are only rendered when they can be reached from the virtual root.
//! A head index that no token carries, or a loop of head pointers, cuts a
//! group of tokens off the root; those tokens silently drop out of the
//! output, so the checks here let callers report them.

use super::{DependencyTree, TreeNode};
use crate::ast::Token;
use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;
use std::collections::HashSet;

/// Something in a sentence that keeps tokens out of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeWarning {
    /// A token points at a head index that no token carries
    DanglingHead {
        /// The token index
        index: usize,
        /// The missing head index
        head: usize,
    },

    /// Head pointers form a loop
    Cycle {
        /// Token indices involved, ascending
        indices: Vec<usize>,
    },
}

impl TreeWarning {
    /// Get a human-readable message.
    pub fn message(&self) -> String {
        match self {
            TreeWarning::DanglingHead { index, head } => {
                format!("token {} has head {}, which is not in the sentence", index, head)
            }
            TreeWarning::Cycle { indices } => {
                let path: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
                format!("head pointers form a cycle: {}", path.join(" -> "))
            }
        }
    }
}

impl<'a> DependencyTree<'a> {
    /// Run all structural checks.
    pub fn validate(&self) -> Vec<TreeWarning> {
        let mut warnings = self.find_dangling_heads();
        warnings.extend(self.find_cycles());
        warnings
    }

    /// Tokens whose head index is carried by no token of the sentence.
    pub fn find_dangling_heads(&self) -> Vec<TreeWarning> {
        self.sentence
            .tokens()
            .iter()
            .filter(|t| {
                matches!(
                    self.nodes.get(&t.head).and_then(|&n| self.graph.node_weight(n)),
                    Some(TreeNode::Missing(_))
                )
            })
            .map(|t| TreeWarning::DanglingHead {
                index: t.index,
                head: t.head,
            })
            .collect()
    }

    /// Groups of tokens whose head pointers loop back on themselves.
    pub fn find_cycles(&self) -> Vec<TreeWarning> {
        let mut cycles: Vec<Vec<usize>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut indices: Vec<usize> = scc
                    .into_iter()
                    .filter_map(|idx| self.token_at(idx).map(|t| t.index))
                    .collect();
                indices.sort_unstable();
                indices
            })
            .collect();
        cycles.sort();

        cycles
            .into_iter()
            .map(|indices| TreeWarning::Cycle { indices })
            .collect()
    }

    /// Tokens that the renderers never reach, in appearance order.
    pub fn unreachable_tokens(&self) -> Vec<&'a Token> {
        let reachable = self.reachable_from_root();
        self.nodes
            .values()
            .filter(|idx| !reachable.contains(*idx))
            .filter_map(|&idx| self.token_at(idx))
            .collect()
    }

    fn reachable_from_root(&self) -> HashSet<NodeIndex> {
        let mut reachable = HashSet::new();
        let mut dfs = Dfs::new(&self.graph, self.root);
        while let Some(idx) = dfs.next(&self.graph) {
            reachable.insert(idx);
        }
        reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Sentence;

    fn token(index: usize, head: usize) -> Token {
        Token::new(index, format!("w{}", index), "_", "X", "", head, "dep")
    }

    fn indices(tokens: &[&Token]) -> Vec<usize> {
        tokens.iter().map(|t| t.index).collect()
    }

    #[test]
    fn test_well_formed_tree() {
        let sentence = Sentence::new(vec![token(1, 2), token(2, 0), token(3, 2)]);
        let tree = sentence.tree();
        assert!(tree.validate().is_empty());
        assert!(tree.unreachable_tokens().is_empty());
    }

    #[test]
    fn test_dangling_head() {
        let sentence = Sentence::new(vec![token(1, 0), token(2, 7), token(3, 2)]);
        let tree = sentence.tree();

        assert_eq!(
            tree.validate(),
            vec![TreeWarning::DanglingHead { index: 2, head: 7 }]
        );
        assert_eq!(indices(&tree.unreachable_tokens()), vec![2, 3]);
    }

    #[test]
    fn test_cycle_detected() {
        // 2 -> 3 -> 2, with 4 hanging from the loop.
        let sentence = Sentence::new(vec![
            token(1, 0),
            token(2, 3),
            token(3, 2),
            token(4, 3),
        ]);
        let tree = sentence.tree();

        assert_eq!(tree.find_cycles(), vec![TreeWarning::Cycle { indices: vec![2, 3] }]);
        assert_eq!(indices(&tree.unreachable_tokens()), vec![2, 3, 4]);
        assert_eq!(
            tree.find_cycles()[0].message(),
            "head pointers form a cycle: 2 -> 3"
        );
    }

    #[test]
    fn test_self_loop() {
        let sentence = Sentence::new(vec![token(1, 0), token(2, 2)]);
        let tree = sentence.tree();
        assert_eq!(tree.find_cycles(), vec![TreeWarning::Cycle { indices: vec![2] }]);
        assert_eq!(indices(&tree.unreachable_tokens()), vec![2]);
    }
}
