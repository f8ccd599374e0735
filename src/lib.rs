//! # dependency2tree
//!
//! Turn the output of a CoNLL dependency parser (CoreNLP, StanfordNLP,
//! Talismane, ...) into trees you can look at.
//!
//! ## Output Modes
//!
//! | Mode | Output | Compiled with |
//! |------|--------|---------------|
//! | `graphviz` (default) | one DOT graph per sentence, `out-001.gv`, `out-002.gv`, ... | `dot -Tsvg` |
//! | `latex` | one tikz-qtree document, one page per sentence | `lualatex` |
//!
//! ## Quick Start
//!
//! ```rust
//! use dependency2tree::{parse, GraphvizRenderer, ParseOptions, RenderOptions, TreeRenderer};
//!
//! let source = "1\tLe\tle\tDET\tDET\t_\t2\tdet\t_\t_\n\
//!               2\tchat\tchat\tNOUN\tNOUN\t_\t0\troot\t_\t_\n";
//!
//! let doc = parse(source, &ParseOptions::default()).unwrap();
//! let dot = GraphvizRenderer.render(&doc.sentences[0], &RenderOptions::default());
//! assert!(dot.contains("n2 -> {n1};"));
//! ```
//!
//! ## Module Overview
//!
//! - [`ast`] - Tokens, sentences and documents
//! - [`parser`] - CoNLL record parser
//! - [`tree`] - Parent/child navigation and structural checks
//! - [`render`] - LaTeX and Graphviz renderers
//! - [`document`] - Packaging rendered sentences into output units
//! - [`compiler`] - Running `dot` / `lualatex` on the generated code
//! - [`config`] - Run options
//! - [`runner`] - The whole pipeline
//! - [`error`] - Error types with pretty printing via ariadne

pub mod ast;
pub mod compiler;
pub mod config;
pub mod document;
pub mod error;
pub mod parser;
pub mod render;
pub mod runner;
pub mod tree;

// Re-export commonly used types
pub use ast::{Document, Sentence, Token, ROOT_INDEX};
pub use compiler::{Compiler, GraphvizCompiler, LatexCompiler};
pub use config::Config;
pub use document::{assemble, numbered_path, OutputUnit};
pub use error::{CompileError, ConfigError, Error, ErrorReporter, FormatError};
pub use parser::{parse, ParseOptions, PosColumn, RecordParser};
pub use render::{GraphvizRenderer, LatexRenderer, Mode, RenderOptions, TreeRenderer};
pub use runner::{RunSummary, Runner};
pub use tree::{DependencyTree, TreeWarning};
