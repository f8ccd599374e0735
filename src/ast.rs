//! In-memory model of a parsed CoNLL file.
//!
//! The root type is [`Document`], an ordered list of [`Sentence`]s. Each
//! sentence owns its [`Token`]s in the order they appeared in the input:
//!
//! ```text
//! Document
//! └── sentences: Vec<Sentence>
//!     └── tokens: Vec<Token>   (linked to each other by `head` indices)
//! ```
//!
//! Head pointers are plain integers. Index `0` is the virtual root of the
//! sentence and is never carried by a real token, so every token with
//! `head == 0` starts its own tree and a sentence is in general a forest.
//! Parent/child queries live in [`crate::tree::DependencyTree`].
//!
//! # Serialization
//!
//! All types implement `Serialize` and `Deserialize` for JSON interop:
//!
//! ```rust
//! use dependency2tree::{parse, ParseOptions};
//!
//! let doc = parse("1\tHi\thi\tINTJ\tUH\t_\t0\troot\t_\t_\n", &ParseOptions::default()).unwrap();
//! let json = serde_json::to_string(&doc).unwrap();
//! assert!(json.contains("\"form\":\"Hi\""));
//! ```

use crate::tree::DependencyTree;
use serde::{Deserialize, Serialize};

/// Index of the virtual root every sentence hangs from.
pub const ROOT_INDEX: usize = 0;

/// One annotated word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Position of the token in its sentence (1-based, unique)
    pub index: usize,
    /// Surface form
    pub form: String,
    /// Lemma
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: String,
    /// Morphological features, `|` already replaced by `, `
    pub feats: String,
    /// Index of the governing token, [`ROOT_INDEX`] for a sentence root
    pub head: usize,
    /// Dependency relation to `head`
    pub deplabel: String,
}

impl Token {
    /// Build a token from raw column values.
    ///
    /// The feature column uses `|` as a separator in the input; it is turned
    /// into a `, `-joined list here so both renderers display the same text.
    pub fn new(
        index: usize,
        form: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        feats: &str,
        head: usize,
        deplabel: impl Into<String>,
    ) -> Self {
        Self {
            index,
            form: form.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            feats: feats.replace('|', ", "),
            head,
            deplabel: deplabel.into(),
        }
    }

    /// Check if this token hangs directly from the virtual root.
    pub fn is_root(&self) -> bool {
        self.head == ROOT_INDEX
    }

    /// Check if the token carries any features.
    pub fn has_feats(&self) -> bool {
        !self.feats.is_empty()
    }
}

/// A sentence: tokens in input order, forming a forest under [`ROOT_INDEX`].
///
/// Sentences are immutable once built; the renderers only borrow them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Tokens in appearance order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up a token by its index.
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.iter().find(|t| t.index == index)
    }

    /// Build the parent/child view of this sentence.
    pub fn tree(&self) -> DependencyTree<'_> {
        DependencyTree::new(self)
    }
}

/// All sentences read from one input source, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total number of tokens across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}
