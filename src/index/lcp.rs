//! Longest-common-prefix array over a suffix array.

use tracing::debug;

use super::suffix_array::SuffixArray;
use super::token::TokenStream;

/// Per-rank longest-common-prefix lengths.
///
/// `values()[i]` is the number of leading tokens the suffix at rank `i`
/// shares with the suffix at rank `i - 1`. Rank 0 has no predecessor and
/// holds 0. Because boundary markers never match any token, no value here
/// counts past a witness edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcpArray {
    values: Vec<usize>,
}

impl LcpArray {
    /// Kasai construction, O(N) after the suffix array.
    ///
    /// Walks positions in stream order carrying `h`, the match length of the
    /// previous position: dropping the first token of a suffix shortens its
    /// common prefix with its rank predecessor by at most one, so `h` only
    /// decreases by one per step and total work is linear. Token equality
    /// goes through [`TokenStream::matches`], which rejects boundaries and
    /// out-of-range positions, bounding every scan.
    pub fn build<T: Eq>(stream: &TokenStream<T>, suffix_array: &SuffixArray) -> Self {
        let n = stream.len();
        let sa = suffix_array.positions();
        debug_assert_eq!(sa.len(), n);

        let mut rank = vec![0usize; n];
        for (i, &p) in sa.iter().enumerate() {
            rank[p] = i;
        }

        let mut values = vec![0usize; n];
        let mut h = 0usize;
        for position in 0..n {
            let r = rank[position];
            if r == 0 {
                h = 0;
                continue;
            }
            let predecessor = sa[r - 1];
            while stream.matches(position + h, predecessor + h) {
                h += 1;
            }
            values[r] = h;
            h = h.saturating_sub(1);
        }

        debug!(length = n, "lcp array built");
        Self { values }
    }

    /// LCP values, indexed by suffix-array rank.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Number of entries, equal to the stream length.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` for the LCP array of the empty stream.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
