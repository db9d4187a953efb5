//! Witnesses and their combined token stream.
//!
//! A witness is one source text taking part in a collation, identified by
//! its sigil. This layer only tokenizes and concatenates; everything
//! downstream works on the [`TokenStream`] and never sees the witnesses.

use crate::index::TokenStream;

/// One source text participating in a collation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    sigil: String,
    tokens: Vec<String>,
}

impl Witness {
    /// Build a witness by splitting `text` on whitespace.
    ///
    /// Tokens keep their exact spelling: no case folding, no punctuation
    /// stripping. Matching across witnesses is exact token equality, so any
    /// normalization has to happen before this point.
    pub fn plain(sigil: impl Into<String>, text: &str) -> Self {
        Self {
            sigil: sigil.into(),
            tokens: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Build a witness from already-tokenized content.
    pub fn from_tokens(sigil: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            sigil: sigil.into(),
            tokens,
        }
    }

    /// The witness identifier used in reports.
    pub fn sigil(&self) -> &str {
        &self.sigil
    }

    /// The witness tokens in text order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` for a witness with no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Concatenate witnesses into one stream, with a unique boundary marker
/// between consecutive witnesses and none after the last.
pub fn token_stream(witnesses: &[Witness]) -> TokenStream<String> {
    TokenStream::from_witness_tokens(witnesses.iter().map(|witness| witness.tokens.clone()))
}
