//! Suffix-array construction by prefix doubling.

use tracing::debug;

use super::token::TokenStream;

/// Positions of all suffixes of a token stream, in lexicographic order of
/// the suffixes they start.
///
/// Comparisons use the token order directly, so the alphabet never needs to
/// be remapped to bytes. Boundary markers are pairwise distinct and sort
/// below all content tokens, which means no two suffixes compare equal
/// through a boundary and the order is total without a terminator symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    positions: Vec<usize>,
}

impl SuffixArray {
    /// Build the suffix array for `stream` in O(N log N).
    ///
    /// Manber–Myers doubling: ranks start from a sort of single tokens, and
    /// each round orders suffixes by the pair `(rank[p], rank[p + k])`,
    /// doubling `k`. Suffixes shorter than `p + k` take a minor key below
    /// every real rank, so shorter suffixes sort first on ties. Both sort
    /// passes are counting sorts over the dense rank space. The loop stops
    /// once all ranks are distinct or `k` reaches the stream length.
    pub fn build<T: Ord>(stream: &TokenStream<T>) -> Self {
        let n = stream.len();
        if n == 0 {
            return Self {
                positions: Vec::new(),
            };
        }
        let tokens = stream.tokens();

        // Round 0: dense ranks from single tokens. Equal content tokens
        // share a rank; boundaries are unique by construction.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_unstable_by(|&a, &b| tokens[a].cmp(&tokens[b]));
        let mut rank = vec![0usize; n];
        for i in 1..n {
            let bump = (tokens[order[i]] != tokens[order[i - 1]]) as usize;
            rank[order[i]] = rank[order[i - 1]] + bump;
        }

        let mut minor = vec![0usize; n];
        let mut scratch = vec![0usize; n];
        let mut next_rank = vec![0usize; n];
        // Minor keys range over 0..=n, major keys over 0..n.
        let mut buckets = vec![0usize; n + 1];

        let mut rounds = 0usize;
        let mut k = 1usize;
        while k < n && rank[order[n - 1]] < n - 1 {
            // Minor key: rank of the suffix k positions later, shifted by
            // one so that "past the end" sorts below every real rank.
            for (p, slot) in minor.iter_mut().enumerate() {
                *slot = if p + k < n { rank[p + k] + 1 } else { 0 };
            }

            // Counting sort by minor key into `scratch`.
            buckets.fill(0);
            for &key in &minor {
                buckets[key] += 1;
            }
            let mut sum = 0usize;
            for slot in buckets.iter_mut() {
                let count = *slot;
                *slot = sum;
                sum += count;
            }
            for p in 0..n {
                let key = minor[p];
                scratch[buckets[key]] = p;
                buckets[key] += 1;
            }

            // Stable counting sort of `scratch` by major key into `order`.
            buckets.fill(0);
            for &r in &rank {
                buckets[r] += 1;
            }
            let mut sum = 0usize;
            for slot in buckets.iter_mut() {
                let count = *slot;
                *slot = sum;
                sum += count;
            }
            for &p in &scratch {
                let key = rank[p];
                order[buckets[key]] = p;
                buckets[key] += 1;
            }

            // Re-rank by the (major, minor) pair.
            next_rank[order[0]] = 0;
            for i in 1..n {
                let (a, b) = (order[i - 1], order[i]);
                let differs = (rank[a] != rank[b] || minor[a] != minor[b]) as usize;
                next_rank[b] = next_rank[a] + differs;
            }
            std::mem::swap(&mut rank, &mut next_rank);

            rounds += 1;
            k *= 2;
        }

        debug!(length = n, rounds, "suffix array built");
        Self { positions: order }
    }

    /// Suffix start positions in lexicographic order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of suffixes, equal to the stream length.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` for the suffix array of the empty stream.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
