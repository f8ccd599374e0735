//! Graphviz DOT notation.
//!
//! Every token becomes a node named `n<index>`; a token with dependents gets
//! one edge statement pointing at all of them:
//!
//! ```text
//! digraph tree {
//! n2 [label="chat\nNOUN (root)"];
//! n2 -> {n1};
//! n1 [label="Le\nDET (det)"];
//! }
//! ```

use super::{RenderOptions, TreeRenderer};
use crate::ast::{Sentence, Token};
use crate::tree::DependencyTree;
use std::fmt::Write;

/// Renders a sentence as a DOT digraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphvizRenderer;

impl TreeRenderer for GraphvizRenderer {
    fn render(&self, sentence: &Sentence, options: &RenderOptions) -> String {
        let tree = sentence.tree();
        let mut output = String::from("digraph tree {\n");
        for root in tree.roots() {
            write_node(&tree, root, options, &mut output);
        }
        output.push('}');
        output
    }
}

fn write_node(tree: &DependencyTree<'_>, token: &Token, options: &RenderOptions, out: &mut String) {
    let feats = if options.include_features && token.has_feats() {
        format!("\\n{}", token.feats)
    } else {
        String::new()
    };

    let _ = writeln!(
        out,
        r#"n{} [label="{}\n{} ({}){}"];"#,
        token.index,
        escape_label(&token.form),
        escape_label(&token.pos),
        escape_label(&token.deplabel),
        escape_label(&feats)
    );

    let children = tree.children_of(token.index);
    if !children.is_empty() {
        let targets: Vec<String> = children.iter().map(|c| format!("n{}", c.index)).collect();
        let _ = writeln!(out, "n{} -> {{{}}};", token.index, targets.join(" "));
    }

    for child in children {
        write_node(tree, child, options, out);
    }
}

/// Escape double quotes inside a quoted DOT label.
fn escape_label(s: &str) -> String {
    s.replace('"', "&quot;")
}
