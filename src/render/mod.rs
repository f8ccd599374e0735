//! Tree renderers.
//!
//! This module turns a [`Sentence`] into textual tree code:
//! - [`LatexRenderer`]: a tikz-qtree `\Tree` block, one page per sentence
//! - [`GraphvizRenderer`]: a DOT `digraph`, one graph per sentence
//!
//! Both walk the dependency tree the same way: depth-first, pre-order,
//! starting from the roots of the forest, with siblings in the order they
//! appear in the input.

mod graphviz;
mod latex;

pub use graphviz::GraphvizRenderer;
pub use latex::{LatexRenderer, DOCUMENT_POSTAMBLE, DOCUMENT_PREAMBLE};

use crate::ast::Sentence;
use std::fmt;
use std::str::FromStr;

/// Formatting switches shared by the renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show the morphological features of each token
    pub include_features: bool,
}

/// Turns one sentence into tree code.
///
/// Implementations are pure: the same sentence and options always give the
/// same text, and sentences can be rendered in any order.
pub trait TreeRenderer {
    fn render(&self, sentence: &Sentence, options: &RenderOptions) -> String;
}

/// The output notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One LaTeX document, one page per sentence
    Latex,
    /// One DOT graph per sentence
    #[default]
    Graphviz,
}

impl Mode {
    /// The renderer for this notation.
    pub fn renderer(self) -> &'static dyn TreeRenderer {
        match self {
            Mode::Latex => &LatexRenderer,
            Mode::Graphviz => &GraphvizRenderer,
        }
    }

    /// Name of the external tool used when compiling without `--cmd`.
    pub fn default_command(self) -> &'static str {
        match self {
            Mode::Latex => "lualatex",
            Mode::Graphviz => "dot",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Latex => "latex",
            Mode::Graphviz => "graphviz",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latex" => Ok(Mode::Latex),
            "graphviz" => Ok(Mode::Graphviz),
            other => Err(format!(
                "unknown mode '{}', expected 'latex' or 'graphviz'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Token;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("latex".parse::<Mode>(), Ok(Mode::Latex));
        assert_eq!("graphviz".parse::<Mode>(), Ok(Mode::Graphviz));
        assert!("dot".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Graphviz);
    }

    #[test]
    fn test_mode_selects_renderer() {
        let sentence = Sentence::new(vec![Token::new(1, "Oui", "oui", "ADV", "", 0, "root")]);
        let options = RenderOptions::default();

        let dot = Mode::Graphviz.renderer().render(&sentence, &options);
        assert!(dot.starts_with("digraph tree {"));

        let tex = Mode::Latex.renderer().render(&sentence, &options);
        assert!(tex.starts_with(r"\begin{center}"));
    }

    #[test]
    fn test_default_commands() {
        assert_eq!(Mode::Latex.default_command(), "lualatex");
        assert_eq!(Mode::Graphviz.default_command(), "dot");
    }
}
