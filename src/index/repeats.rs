//! Repeat detection over the suffix and LCP arrays.
//!
//! A run of suffix-array ranks whose LCP values stay at or above some length
//! `L` identifies `K` suffixes sharing the same `L`-token prefix, so the
//! prefix occurs `K` times in the stream. One stack sweep over the LCP array
//! enumerates all such runs at their maximal widths, and a subsumption
//! filter keeps only those whose occurrences are not already accounted for
//! by longer repeats.

use tracing::debug;

use super::block::Block;
use super::lcp::LcpArray;
use super::range_set::{RangeSet, Span};
use super::suffix_array::SuffixArray;
use super::token::TokenStream;

/// Maximal run of suffix-array ranks sharing at least `length` prefix
/// tokens. `start..=end` are ranks, inclusive on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LcpInterval {
    start: usize,
    end: usize,
    length: usize,
}

impl LcpInterval {
    fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Enumerate all maximal LCP intervals in one pass.
///
/// Open intervals live on a stack ordered by strictly increasing length. A
/// rising LCP value opens an interval starting at the previous rank; a
/// falling value closes every open interval longer than the new value at the
/// previous rank, then extends the run at the new value from the start of
/// the last closed interval, unless an interval of that length is already
/// open. Whatever remains open at the end closes at the last rank. Every
/// reported interval spans at least two ranks and a length of at least one.
fn lcp_intervals(values: &[usize]) -> Vec<LcpInterval> {
    debug_assert!(values.first().map_or(true, |&v| v == 0));

    let mut closed = Vec::new();
    let mut open: Vec<(usize, usize)> = Vec::new();
    let mut previous = 0usize;
    for (idx, &value) in values.iter().enumerate() {
        if value > previous {
            open.push((idx - 1, value));
        } else if value < previous {
            let mut last_start = 0usize;
            while let Some(&(start, length)) = open.last() {
                if length <= value {
                    break;
                }
                open.pop();
                closed.push(LcpInterval {
                    start,
                    end: idx - 1,
                    length,
                });
                last_start = start;
            }
            if value > 0 && open.last().map_or(true, |&(_, length)| length < value) {
                open.push((last_start, value));
            }
        }
        previous = value;
    }
    for &(start, length) in &open {
        closed.push(LcpInterval {
            start,
            end: values.len() - 1,
            length,
        });
    }
    closed
}

/// A repeat candidate awaiting the subsumption filter.
#[derive(Debug, Clone)]
struct Candidate {
    length: usize,
    run_start: usize,
    ranges: RangeSet,
}

/// Detect the repeated blocks of `stream` from its suffix and LCP arrays.
///
/// Every maximal LCP interval becomes a candidate whose occurrence spans are
/// read straight off the suffix array. Candidates are visited longest
/// first, with ties broken by leftmost occurrence and then by suffix-array
/// rank, and a candidate is dropped when the positions it covers are already
/// covered by the blocks kept so far. That removes every repeat that exists
/// only as a substring of a longer kept repeat while letting partially
/// overlapping repeats through. Kept candidates are reported in visit
/// order, so longer blocks come first.
///
/// Blocks are maximal repeats: a repeat all of whose occurrences extend by
/// the same token is reported in the longer form. No block ever covers a
/// boundary position, because boundary markers are unique and never take
/// part in a common prefix.
pub fn find_blocks<T>(
    stream: &TokenStream<T>,
    suffix_array: &SuffixArray,
    lcp: &LcpArray,
) -> Vec<Block> {
    let sa = suffix_array.positions();
    debug_assert_eq!(sa.len(), stream.len());
    debug_assert_eq!(lcp.len(), stream.len());

    let intervals = lcp_intervals(lcp.values());
    let mut candidates: Vec<Candidate> = intervals
        .iter()
        .map(|interval| {
            debug_assert!(interval.width() >= 2);
            let spans = (interval.start..=interval.end)
                .map(|rank| {
                    let position = sa[rank];
                    Span {
                        start: position,
                        end: position + interval.length,
                    }
                })
                .collect();
            Candidate {
                length: interval.length,
                run_start: interval.start,
                ranges: RangeSet::from_occurrences(spans),
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.length
            .cmp(&a.length)
            .then_with(|| a.ranges.spans()[0].start.cmp(&b.ranges.spans()[0].start))
            .then_with(|| a.run_start.cmp(&b.run_start))
    });

    let mut covered = RangeSet::empty();
    let mut blocks = Vec::new();
    for candidate in candidates {
        if covered.encloses(&candidate.ranges) {
            continue;
        }
        covered = covered.union(&candidate.ranges);
        blocks.push(Block::new(candidate.ranges));
    }

    debug!(
        intervals = intervals.len(),
        blocks = blocks.len(),
        "repeat scan finished"
    );
    blocks
}

/// Fully built repeat index for one combined token stream.
///
/// Bundles the suffix array, the LCP array, the detected blocks, and a
/// per-position lookup table. The arrays stay available for inspection and
/// rendering; the stream itself is not retained.
#[derive(Debug)]
pub struct RepeatIndex {
    suffix_array: SuffixArray,
    lcp: LcpArray,
    blocks: Vec<Block>,
    block_by_position: Vec<Option<usize>>,
}

impl RepeatIndex {
    /// Run the full pipeline: suffix array, LCP array, repeat scan, and the
    /// position table.
    ///
    /// Where spans of two blocks overlap, the later block in report order
    /// owns the shared positions in the lookup table.
    pub fn build<T: Ord>(stream: &TokenStream<T>) -> Self {
        let suffix_array = SuffixArray::build(stream);
        let lcp = LcpArray::build(stream, &suffix_array);
        let blocks = find_blocks(stream, &suffix_array, &lcp);

        let mut block_by_position = vec![None; stream.len()];
        for (index, block) in blocks.iter().enumerate() {
            for span in block.spans() {
                for position in span.start..span.end {
                    block_by_position[position] = Some(index);
                }
            }
        }

        debug!(
            stream = stream.len(),
            blocks = blocks.len(),
            "repeat index built"
        );
        Self {
            suffix_array,
            lcp,
            blocks,
            block_by_position,
        }
    }

    /// Detected blocks, longest first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The block covering `position`, or `None` for boundaries and
    /// unrepeated positions.
    pub fn block_at(&self, position: usize) -> Option<&Block> {
        self.block_by_position
            .get(position)
            .copied()
            .flatten()
            .map(|index| &self.blocks[index])
    }

    /// The underlying suffix array.
    pub fn suffix_array(&self) -> &SuffixArray {
        &self.suffix_array
    }

    /// The underlying LCP array.
    pub fn lcp_array(&self) -> &LcpArray {
        &self.lcp
    }

    /// Consume the index, keeping only the blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(witnesses: Vec<Vec<&'static str>>) -> (TokenStream<&'static str>, Vec<Block>) {
        let stream = TokenStream::from_witness_tokens(witnesses);
        let sa = SuffixArray::build(&stream);
        let lcp = LcpArray::build(&stream, &sa);
        let blocks = find_blocks(&stream, &sa, &lcp);
        (stream, blocks)
    }

    fn ranges(parts: &[(usize, usize)]) -> RangeSet {
        parts
            .iter()
            .fold(RangeSet::empty(), |acc, &(start, end)| {
                acc.union(&RangeSet::new(start, end).unwrap())
            })
    }

    #[test]
    fn flat_lcp_has_no_intervals() {
        assert!(lcp_intervals(&[0, 0, 0, 0]).is_empty());
        assert!(lcp_intervals(&[]).is_empty());
    }

    #[test]
    fn single_run_closes_at_the_end() {
        let intervals = lcp_intervals(&[0, 2, 2]);
        assert_eq!(
            intervals,
            vec![LcpInterval {
                start: 0,
                end: 2,
                length: 2
            }]
        );
        assert_eq!(intervals[0].width(), 3);
    }

    #[test]
    fn nested_runs_close_inner_first() {
        let intervals = lcp_intervals(&[0, 1, 3, 3, 1]);
        assert_eq!(
            intervals,
            vec![
                LcpInterval {
                    start: 1,
                    end: 3,
                    length: 3
                },
                LcpInterval {
                    start: 0,
                    end: 4,
                    length: 1
                },
            ]
        );
    }

    #[test]
    fn falling_lcp_reopens_the_wider_run() {
        let intervals = lcp_intervals(&[0, 2, 1]);
        assert_eq!(
            intervals,
            vec![
                LcpInterval {
                    start: 0,
                    end: 1,
                    length: 2
                },
                LcpInterval {
                    start: 0,
                    end: 2,
                    length: 1
                },
            ]
        );
    }

    #[test]
    fn falling_onto_an_open_length_does_not_duplicate_it() {
        let intervals = lcp_intervals(&[0, 1, 2, 1]);
        assert_eq!(
            intervals,
            vec![
                LcpInterval {
                    start: 1,
                    end: 2,
                    length: 2
                },
                LcpInterval {
                    start: 0,
                    end: 3,
                    length: 1
                },
            ]
        );
    }

    #[test]
    fn identical_witnesses_collapse_to_one_block() {
        let (_, blocks) = pipeline(vec![vec!["a", "b"], vec!["a", "b"]]);
        assert_eq!(blocks, vec![Block::new(ranges(&[(0, 2), (3, 5)]))]);
    }

    #[test]
    fn overlapping_occurrences_coalesce() {
        // x y x y x repeats "x y x" at 0 and 2; the occurrences overlap and
        // merge into a single span.
        let (_, blocks) = pipeline(vec![vec!["x", "y", "x", "y", "x"]]);
        assert_eq!(blocks, vec![Block::new(ranges(&[(0, 5)]))]);
    }

    #[test]
    fn shorter_repeat_outside_the_longer_one_survives() {
        let (_, blocks) = pipeline(vec![
            vec!["the", "quick", "brown", "fox"],
            vec!["the", "quick", "red", "fox"],
        ]);
        assert_eq!(
            blocks,
            vec![
                Block::new(ranges(&[(0, 2), (5, 7)])),
                Block::new(ranges(&[(3, 4), (8, 9)])),
            ]
        );
    }

    #[test]
    fn distinct_streams_have_no_blocks() {
        let (_, blocks) = pipeline(vec![vec!["p", "q"], vec!["r", "s"]]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn degenerate_streams_have_no_blocks() {
        let (_, blocks) = pipeline(Vec::new());
        assert!(blocks.is_empty());
        let (_, blocks) = pipeline(vec![vec!["only"]]);
        assert!(blocks.is_empty());
    }

    #[test]
    fn index_lookup_matches_block_spans() {
        let stream = TokenStream::from_witness_tokens(vec![vec!["a", "b"], vec!["a", "b"]]);
        let index = RepeatIndex::build(&stream);
        assert_eq!(index.blocks().len(), 1);
        let block = &index.blocks()[0];
        assert_eq!(index.block_at(0), Some(block));
        assert_eq!(index.block_at(4), Some(block));
        assert_eq!(index.block_at(2), None, "boundary is never covered");
        assert_eq!(index.block_at(99), None);
    }

    #[test]
    fn index_retains_both_arrays() {
        let stream = TokenStream::from_witness_tokens(vec![vec!["a", "b"], vec!["a", "b"]]);
        let index = RepeatIndex::build(&stream);
        assert_eq!(index.suffix_array().positions(), &[2, 3, 0, 4, 1]);
        assert_eq!(index.lcp_array().values(), &[0, 0, 2, 0, 1]);
        assert_eq!(index.into_blocks().len(), 1);
    }
}
