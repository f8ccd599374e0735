//! Document assembly: from rendered sentences to output units.
//!
//! The two notations package their sentences differently:
//!
//! | Mode | Units | Naming |
//! |------|-------|--------|
//! | LaTeX | one document, one page per sentence | the output path as given |
//! | Graphviz | one graph per sentence | `<stem>-001<ext>`, `<stem>-002<ext>`, ... |
//!
//! Without an output path every unit is returned with `path: None` and the
//! caller prints it instead of writing it.

use crate::ast::Document;
use crate::render::{Mode, RenderOptions, DOCUMENT_POSTAMBLE, DOCUMENT_PREAMBLE};
use std::path::{Path, PathBuf};

/// Width of the zero-padded sentence number in Graphviz file names.
pub const SEQUENCE_WIDTH: usize = 3;

/// One piece of generated code and where it should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Destination, or `None` to print
    pub path: Option<PathBuf>,
    /// Generated LaTeX or DOT code
    pub code: String,
}

/// Render a document and split it into output units, in input order.
pub fn assemble(
    document: &Document,
    mode: Mode,
    options: &RenderOptions,
    output: Option<&Path>,
) -> Vec<OutputUnit> {
    report_tree_warnings(document);

    let renderer = mode.renderer();
    match mode {
        Mode::Latex => {
            let mut code = String::from(DOCUMENT_PREAMBLE);
            for sentence in &document.sentences {
                code.push_str(&renderer.render(sentence, options));
                code.push_str("\n\n");
            }
            code.push_str(DOCUMENT_POSTAMBLE);

            vec![OutputUnit {
                path: output.map(Path::to_path_buf),
                code,
            }]
        }
        Mode::Graphviz => document
            .sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| OutputUnit {
                path: output.map(|p| numbered_path(p, i + 1)),
                code: renderer.render(sentence, options),
            })
            .collect(),
    }
}

/// Insert a zero-padded sequence number before the extension of `path`.
///
/// `out.svg` becomes `out-001.svg`; a path without extension just gets the
/// suffix. Numbers wider than [`SEQUENCE_WIDTH`] are written in full.
pub fn numbered_path(path: &Path, number: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{}-{:0width$}", stem, number, width = SEQUENCE_WIDTH);
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

/// Log tokens that will be missing from the output.
fn report_tree_warnings(document: &Document) {
    for (i, sentence) in document.sentences.iter().enumerate() {
        for warning in sentence.tree().validate() {
            log::warn!("sentence {}: {}", i + 1, warning.message());
        }
    }
}
