//! Record parser for CoNLL dependency files.
//!
//! The input is line oriented: one token per line, columns separated by tabs,
//! sentences separated by blank lines.
//!
//! ```text
//! ID  FORM  LEMMA  CPOSTAG  POSTAG  FEATS  HEAD  DEPREL  PHEAD  PDEPREL
//! ```
//!
//! Only the first eight columns are required; `PHEAD` and `PDEPREL` are
//! ignored when present.
//!
//! # Usage
//!
//! ```rust
//! use dependency2tree::parser::{parse, ParseOptions};
//!
//! let source = "1\tLe\tle\tDET\tDET\t_\t2\tdet\t_\t_\n\
//!               2\tchat\tchat\tNOUN\tNOUN\t_\t0\troot\t_\t_\n";
//!
//! let doc = parse(source, &ParseOptions::default()).unwrap();
//! assert_eq!(doc.len(), 1);
//! assert_eq!(doc.sentences[0].len(), 2);
//! ```
//!
//! # Multi-word tokens
//!
//! Some corpora add amalgam lines such as `4-5 du _ ...` before the words
//! they contract. With [`ParseOptions::ignore_double_indices`] set, every record
//! whose index contains a hyphen is dropped before it is looked at further.

use crate::ast::{Document, Sentence, Token, ROOT_INDEX};
use crate::error::FormatError;
use std::collections::HashSet;
use std::ops::Range;

const MIN_COLUMNS: usize = 8;

const COL_INDEX: usize = 0;
const COL_FORM: usize = 1;
const COL_LEMMA: usize = 2;
const COL_CPOS: usize = 3;
const COL_POS: usize = 4;
const COL_FEATS: usize = 5;
const COL_HEAD: usize = 6;
const COL_DEPREL: usize = 7;

/// Which part-of-speech column feeds [`Token::pos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosColumn {
    /// `CPOSTAG`, the fourth column
    Coarse,
    /// `POSTAG`, the fifth column
    #[default]
    Fine,
}

impl PosColumn {
    fn column(self) -> usize {
        match self {
            PosColumn::Coarse => COL_CPOS,
            PosColumn::Fine => COL_POS,
        }
    }
}

/// Options controlling how records are read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Skip records whose index contains a hyphen (multi-word tokens)
    pub ignore_double_indices: bool,
    /// Column used for the part-of-speech tag
    pub pos_column: PosColumn,
}

/// Turns CoNLL text into a [`Document`].
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    options: ParseOptions,
}

impl RecordParser {
    /// Create a new parser.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a whole source.
    ///
    /// Fails on the first malformed record; nothing is returned for the
    /// sentences read before it.
    pub fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let mut sentences = Vec::new();
        let mut current = SentenceBuilder::default();
        let mut skipped = 0;
        let mut offset = 0;

        for (i, raw) in source.split_inclusive('\n').enumerate() {
            let start = offset;
            offset += raw.len();

            let line = raw.trim();
            if line.is_empty() {
                if let Some(sentence) = current.finish() {
                    sentences.push(sentence);
                }
                continue;
            }

            let record = Record {
                line: i + 1,
                span: start..start + raw.trim_end_matches(['\n', '\r']).len(),
                columns: line.split('\t').collect(),
            };

            if self.options.ignore_double_indices && record.columns[COL_INDEX].contains('-') {
                skipped += 1;
                continue;
            }

            let token = self.token_from_record(&record)?;
            current.push(token, &record)?;
        }

        if let Some(sentence) = current.finish() {
            sentences.push(sentence);
        }

        let doc = Document::new(sentences);
        log::debug!(
            "parsed {} sentence(s), {} token(s), skipped {} multi-word record(s)",
            doc.len(),
            doc.token_count(),
            skipped
        );
        Ok(doc)
    }

    fn token_from_record(&self, record: &Record<'_>) -> Result<Token, FormatError> {
        let columns = &record.columns;
        if columns.len() < MIN_COLUMNS {
            return Err(FormatError::MissingColumns {
                line: record.line,
                found: columns.len(),
                span: record.span.clone(),
            });
        }

        let index = columns[COL_INDEX]
            .parse::<usize>()
            .map_err(|_| FormatError::InvalidIndex {
                line: record.line,
                value: columns[COL_INDEX].to_string(),
                span: record.span.clone(),
            })?;
        if index == ROOT_INDEX {
            return Err(FormatError::ReservedIndex {
                line: record.line,
                span: record.span.clone(),
            });
        }

        let head = columns[COL_HEAD]
            .parse::<usize>()
            .map_err(|_| FormatError::InvalidHead {
                line: record.line,
                value: columns[COL_HEAD].to_string(),
                span: record.span.clone(),
            })?;

        Ok(Token::new(
            index,
            columns[COL_FORM],
            columns[COL_LEMMA],
            columns[self.options.pos_column.column()],
            columns[COL_FEATS],
            head,
            columns[COL_DEPREL],
        ))
    }
}

/// Parse CoNLL source with the given options.
pub fn parse(source: &str, options: &ParseOptions) -> Result<Document, FormatError> {
    RecordParser::new(options.clone()).parse(source)
}

/// One non-blank input line split into columns.
struct Record<'src> {
    line: usize,
    span: Range<usize>,
    columns: Vec<&'src str>,
}

/// Tokens collected since the last sentence boundary.
#[derive(Default)]
struct SentenceBuilder {
    tokens: Vec<Token>,
    seen: HashSet<usize>,
}

impl SentenceBuilder {
    fn push(&mut self, token: Token, record: &Record<'_>) -> Result<(), FormatError> {
        if !self.seen.insert(token.index) {
            return Err(FormatError::DuplicateIndex {
                line: record.line,
                index: token.index,
                span: record.span.clone(),
            });
        }
        self.tokens.push(token);
        Ok(())
    }

    /// Close the current sentence, if it has any token.
    fn finish(&mut self) -> Option<Sentence> {
        if self.tokens.is_empty() {
            return None;
        }
        self.seen.clear();
        Some(Sentence::new(std::mem::take(&mut self.tokens)))
    }
}
