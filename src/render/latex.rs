//! LaTeX tree notation using tikz-qtree.
//!
//! Each sentence becomes one centered `\Tree` on its own page. A node shows
//! the dependency label on the first line and `form (pos)` on the second,
//! optionally followed by the features in a tiny font:
//!
//! ```text
//! \Tree [.{root\\chat (NOUN)} [.{det\\Le (DET)}  ] ]
//! ```
//!
//! When a sentence has several roots they are grouped under one anonymous
//! bracket so qtree still sees a single tree.

use super::{RenderOptions, TreeRenderer};
use crate::ast::{Sentence, Token};
use crate::tree::DependencyTree;
use std::fmt::Write;

/// Start of the whole document, up to `\begin{document}`.
pub const DOCUMENT_PREAMBLE: &str = "\\documentclass[10pt,landscape]{article}\n\
\\usepackage[a2paper,margin=1cm]{geometry}\n\
\\usepackage{fontspec}\n\
\\defaultfontfeatures{Ligatures=TeX}\n\
\\setmainfont[BoldFont={Gentium Basic-bold}, BoldItalicFont={Gentium Basic-bold-italic}, SmallCapsFont={Linux Libertine Capitals O}]{Gentium}\n\
\\usepackage{tikz}\n\
\\usepackage{tikz-qtree}\n\
\\pagestyle{empty}\n\
\\begin{document}\n\n";

/// End of the whole document.
pub const DOCUMENT_POSTAMBLE: &str = "\\end{document}\n";

const TREE_PREAMBLE: &str = r"\begin{center}\begin{tikzpicture}\tikzset{level distance=60pt}\tikzset{every tree node/.style={align=center,anchor=north}}\Tree ";

const TREE_POSTAMBLE: &str = "\\end{tikzpicture}\\end{center}\n\\clearpage";

/// Renders a sentence as a tikz-qtree block.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexRenderer;

impl TreeRenderer for LatexRenderer {
    fn render(&self, sentence: &Sentence, options: &RenderOptions) -> String {
        let tree = sentence.tree();
        let roots = tree.roots();
        let grouped = roots.len() > 1;

        let mut output = String::from(TREE_PREAMBLE);
        if grouped {
            output.push_str("[ ");
        }
        for root in roots {
            write_node(&tree, root, options, &mut output);
        }
        if grouped {
            output.push_str("] ");
        }
        output.push_str(TREE_POSTAMBLE);

        // qtree chokes on underscores (CoNLL uses them for empty fields).
        output.replace('_', "-")
    }
}

fn write_node(tree: &DependencyTree<'_>, token: &Token, options: &RenderOptions, out: &mut String) {
    let _ = write!(out, r"[.{{{}\\{} ({})", token.deplabel, token.form, token.pos);
    if options.include_features && token.has_feats() {
        let _ = write!(out, r"\\ {{\tiny {}}}", token.feats);
    }
    out.push_str("} ");

    for child in tree.children_of(token.index) {
        write_node(tree, child, options, out);
    }
    out.push_str(" ]");
}
