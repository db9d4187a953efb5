//! Token model for the combined stream the index is built over.
//!
//! All witnesses are concatenated into a single sequence with a boundary
//! marker between consecutive witnesses. Each boundary carries its occurrence
//! index, so no two boundary markers ever compare equal and every boundary
//! sorts below every content token. Suffixes that reach a boundary therefore
//! diverge immediately, which is what keeps repeats from extending across
//! witness edges.

/// A symbol in the combined token stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum StreamToken<T> {
    /// Witness separator, tagged with its occurrence index.
    ///
    /// Declared before [`StreamToken::Content`] so the derived order puts
    /// every boundary below every content token.
    Boundary(u32),
    /// A token contributed by some witness.
    Content(T),
}

impl<T> StreamToken<T> {
    /// Returns `true` for boundary markers.
    pub fn is_boundary(&self) -> bool {
        matches!(self, StreamToken::Boundary(_))
    }

    /// Content payload, or `None` for a boundary marker.
    pub fn content(&self) -> Option<&T> {
        match self {
            StreamToken::Boundary(_) => None,
            StreamToken::Content(token) => Some(token),
        }
    }
}

/// Immutable concatenation of all witness tokens, with one unique boundary
/// marker between consecutive witnesses and none after the last.
///
/// The stream is the single input to suffix-array construction, LCP
/// computation, and repeat detection; positions reported by those stages are
/// indices into this sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<T> {
    tokens: Vec<StreamToken<T>>,
}

impl<T> TokenStream<T> {
    /// Concatenate per-witness token lists into one stream.
    ///
    /// Empty witness lists contribute no content tokens but still take part
    /// in boundary placement, so the number of boundaries is always one less
    /// than the number of witnesses.
    pub fn from_witness_tokens<I>(witnesses: I) -> Self
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut tokens = Vec::new();
        for (index, witness) in witnesses.into_iter().enumerate() {
            if index > 0 {
                tokens.push(StreamToken::Boundary((index - 1) as u32));
            }
            tokens.extend(witness.into_iter().map(StreamToken::Content));
        }
        Self { tokens }
    }

    /// Number of symbols in the stream, boundaries included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when no witness contributed any token and no boundary
    /// was placed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Symbol at `position`, or `None` past the end.
    pub fn token(&self, position: usize) -> Option<&StreamToken<T>> {
        self.tokens.get(position)
    }

    /// The full symbol sequence.
    pub fn tokens(&self) -> &[StreamToken<T>] {
        &self.tokens
    }
}

impl<T: Eq> TokenStream<T> {
    /// Whether the symbols at `a` and `b` are equal content tokens.
    ///
    /// Boundary markers never match anything, themselves included, and
    /// positions past the end match nothing. Prefix comparisons built on
    /// this cannot run across a witness edge or off the stream.
    pub fn matches(&self, a: usize, b: usize) -> bool {
        match (self.tokens.get(a), self.tokens.get(b)) {
            (Some(StreamToken::Content(x)), Some(StreamToken::Content(y))) => x == y,
            _ => false,
        }
    }
}
