//! # Stemma
//!
//! Repeat detection across text witnesses via suffix arrays.
//!
//! Witnesses are concatenated into one token stream with a unique boundary
//! marker between consecutive witnesses, and every phrase that occurs more
//! than once in the stream is reported as a block of position ranges.
//! Witnesses sharing a phrase, a phrase repeated inside a single witness,
//! or both, all surface the same way.
//!
//! ## Pipeline
//!
//! 1. **Token stream**: concatenate witness tokens with unique boundary markers
//! 2. **Suffix array**: Manber–Myers prefix doubling over the token alphabet
//! 3. **LCP array**: Kasai's rank walk, linear after the suffix array
//! 4. **Repeat scan**: LCP-interval sweep, then a longest-first subsumption filter
//!
//! ## Usage Example
//!
//! ```
//! use stemma::Witness;
//!
//! let witnesses = [
//!     Witness::plain("A", "the quick brown fox"),
//!     Witness::plain("B", "the quick red fox"),
//! ];
//! let blocks = stemma::find_repeated_blocks(&witnesses);
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].to_string(), "[0, 2) [5, 7)");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod index;   // Suffix array, LCP array, range sets, repeat scan
pub mod render;  // Plain-text inspection tables
pub mod witness; // Witnesses and tokenization

// Re-exports for convenience
pub use index::{
    find_blocks, Block, LcpArray, RangeSet, RangeSetError, RepeatIndex, Span, StreamToken,
    SuffixArray, TokenStream,
};
pub use render::{render_index_table, write_index_table};
pub use witness::{token_stream, Witness};

/// Detect the repeated blocks across `witnesses` in one call.
///
/// Runs the whole pipeline and returns the blocks, longest first. Positions
/// inside the blocks refer to the combined token stream, including its
/// boundary markers; use [`token_stream`] to rebuild the same stream when
/// mapping positions back to witnesses.
pub fn find_repeated_blocks(witnesses: &[Witness]) -> Vec<Block> {
    let stream = witness::token_stream(witnesses);
    RepeatIndex::build(&stream).into_blocks()
}
