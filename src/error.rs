//! Error types and error reporting for dependency2tree.
//!
//! Every error is fatal: the run stops at the first one and no partial output
//! is written for malformed input or an invalid configuration.
//!
//! # Error Types
//!
//! - [`FormatError`] - A malformed record in the CoNLL input
//! - [`ConfigError`] - An invalid combination of options
//! - [`CompileError`] - The external renderer could not be run or failed
//! - [`Error`] - Umbrella type returned by [`crate::runner`]
//!
//! # Pretty Printing
//!
//! Format errors carry the byte span of the offending line. Use
//! [`ErrorReporter`] to print them with the surrounding source:
//!
//! ```rust
//! use dependency2tree::{parse, ErrorReporter, ParseOptions};
//!
//! let source = "1\tchat\tchat\n";
//! let err = parse(source, &ParseOptions::default()).unwrap_err();
//! let reporter = ErrorReporter::new("input.conll", source);
//! // reporter.report_format_error(&err); // Prints colorful error
//! assert_eq!(err.line(), 1);
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::ops::Range;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// A malformed record in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The record has fewer than the eight mandatory columns
    #[error("line {line}: expected at least 8 tab-separated columns, found {found}")]
    MissingColumns {
        line: usize,
        found: usize,
        span: Range<usize>,
    },

    /// The index column is not an integer
    #[error("line {line}: invalid token index '{value}'")]
    InvalidIndex {
        line: usize,
        value: String,
        span: Range<usize>,
    },

    /// The head column is not an integer
    #[error("line {line}: invalid head index '{value}'")]
    InvalidHead {
        line: usize,
        value: String,
        span: Range<usize>,
    },

    /// A real token uses the index of the virtual root
    #[error("line {line}: token index 0 is reserved for the sentence root")]
    ReservedIndex { line: usize, span: Range<usize> },

    /// Two tokens of the same sentence share an index
    #[error("line {line}: duplicate token index {index} in sentence")]
    DuplicateIndex {
        line: usize,
        index: usize,
        span: Range<usize>,
    },
}

impl FormatError {
    /// 1-based line number of the offending record.
    pub fn line(&self) -> usize {
        match self {
            FormatError::MissingColumns { line, .. }
            | FormatError::InvalidIndex { line, .. }
            | FormatError::InvalidHead { line, .. }
            | FormatError::ReservedIndex { line, .. }
            | FormatError::DuplicateIndex { line, .. } => *line,
        }
    }

    /// Byte span of the offending record in the source.
    pub fn span(&self) -> Range<usize> {
        match self {
            FormatError::MissingColumns { span, .. }
            | FormatError::InvalidIndex { span, .. }
            | FormatError::InvalidHead { span, .. }
            | FormatError::ReservedIndex { span, .. }
            | FormatError::DuplicateIndex { span, .. } => span.clone(),
        }
    }

    /// Short description without the line prefix, used as the report label.
    pub fn label(&self) -> String {
        match self {
            FormatError::MissingColumns { found, .. } => {
                format!("only {} column(s) here", found)
            }
            FormatError::InvalidIndex { value, .. } => format!("'{}' is not an index", value),
            FormatError::InvalidHead { value, .. } => format!("'{}' is not a head index", value),
            FormatError::ReservedIndex { .. } => "index 0 is the virtual root".to_string(),
            FormatError::DuplicateIndex { index, .. } => {
                format!("index {} already used in this sentence", index)
            }
        }
    }
}

/// An invalid combination of options, detected before any I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("you need to specify an output file when compiling")]
    CompileWithoutOutput,
}

/// The external renderer could not produce its artifact.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The process could not be started (e.g. missing executable)
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },

    /// Reading from or writing to a file failed
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any error that stops a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Unreadable input or unwritable output
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for dependency2tree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error reporter that uses ariadne for pretty error output.
pub struct ErrorReporter<'src> {
    source_name: String,
    source: &'src str,
}

impl<'src> ErrorReporter<'src> {
    /// Create a new error reporter.
    pub fn new(source_name: impl Into<String>, source: &'src str) -> Self {
        Self {
            source_name: source_name.into(),
            source,
        }
    }

    /// Report a format error to stderr.
    pub fn report_format_error(&self, error: &FormatError) {
        let span = error.span();

        let report = Report::build(ReportKind::Error, &self.source_name, span.start)
            .with_message(error.to_string())
            .with_label(
                Label::new((&self.source_name, span))
                    .with_color(Color::Red)
                    .with_message(error.label()),
            )
            .with_note("records are: ID FORM LEMMA CPOSTAG POSTAG FEATS HEAD DEPREL PHEAD PDEPREL");

        // Nothing sensible to do if stderr itself is gone.
        let _ = report
            .finish()
            .eprint((&self.source_name, Source::from(self.source)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_accessors() {
        let err = FormatError::InvalidHead {
            line: 3,
            value: "x".to_string(),
            span: 10..20,
        };
        assert_eq!(err.line(), 3);
        assert_eq!(err.span(), 10..20);
        assert_eq!(err.to_string(), "line 3: invalid head index 'x'");
        assert_eq!(err.label(), "'x' is not a head index");
    }

    #[test]
    fn test_error_wraps_format_error() {
        let err: Error = FormatError::ReservedIndex { line: 1, span: 0..4 }.into();
        assert!(matches!(err, Error::Format(_)));
        assert_eq!(
            err.to_string(),
            "line 1: token index 0 is reserved for the sentence root"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err: Error = ConfigError::CompileWithoutOutput.into();
        assert_eq!(err.to_string(), "you need to specify an output file when compiling");
    }
}
