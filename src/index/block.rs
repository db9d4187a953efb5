//! Repeated blocks reported by the index.

use std::fmt;

use super::range_set::{RangeSet, Span};

/// One repeated block: the set of stream positions its occurrences cover.
///
/// Occurrences of a self-overlapping repeat coalesce inside the underlying
/// [`RangeSet`], so a block records covered positions rather than an
/// occurrence count. Equality is structural equality of the normalized
/// range set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Block {
    ranges: RangeSet,
}

impl Block {
    /// Wrap an occurrence range set as a block.
    pub fn new(ranges: RangeSet) -> Self {
        Self { ranges }
    }

    /// The positions covered by all occurrences.
    pub fn ranges(&self) -> &RangeSet {
        &self.ranges
    }

    /// The covered spans in normal form.
    pub fn spans(&self) -> &[Span] {
        self.ranges.spans()
    }

    /// Total number of covered token positions.
    pub fn cardinality(&self) -> usize {
        self.ranges.cardinality()
    }

    /// Number of disjoint occurrence spans. Occurrences of a
    /// self-overlapping repeat count once after coalescing.
    pub fn span_count(&self) -> usize {
        self.ranges.spans().len()
    }

    /// Whether `position` lies inside one of the block's spans.
    pub fn covers(&self, position: usize) -> bool {
        self.ranges.contains(position)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ranges)
    }
}
