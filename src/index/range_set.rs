//! Normalized sets of half-open position ranges.

use std::fmt;

use thiserror::Error;

/// Errors from range-set constructors.
#[derive(Debug, Error)]
pub enum RangeSetError {
    /// A range's start must lie strictly below its end.
    #[error("invalid range: start {start} is not below end {end}")]
    InvalidRange {
        /// Offending start position.
        start: usize,
        /// Offending end position.
        end: usize,
    },
}

/// Half-open interval `[start, end)` of token positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Span {
    /// First position covered.
    pub start: usize,
    /// First position past the covered range.
    pub end: usize,
}

impl Span {
    /// Number of positions covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` when the span covers nothing. Spans held by a
    /// [`RangeSet`] are never empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `other` lies entirely within this span.
    pub fn encloses(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether `position` falls inside the span.
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// A set of token positions, stored as sorted, disjoint, non-adjacent spans.
///
/// Construction and every operation re-establish the normal form: spans are
/// ordered by start, never overlap, and never touch, with overlapping or
/// exactly adjacent inputs coalesced into one span. Each set of covered
/// positions therefore has exactly one representation, and the derived
/// structural equality is equality of covered positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct RangeSet {
    spans: Vec<Span>,
}

impl RangeSet {
    /// The empty set, the identity for [`RangeSet::union`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single-range set covering `[start, end)`.
    ///
    /// Fails with [`RangeSetError::InvalidRange`] when `start >= end`; empty
    /// sets are built with [`RangeSet::empty`], never through a degenerate
    /// range.
    pub fn new(start: usize, end: usize) -> Result<Self, RangeSetError> {
        if start >= end {
            return Err(RangeSetError::InvalidRange { start, end });
        }
        Ok(Self {
            spans: vec![Span { start, end }],
        })
    }

    /// Build from arbitrary spans, validating each and normalizing the set.
    pub fn from_spans<I>(spans: I) -> Result<Self, RangeSetError>
    where
        I: IntoIterator<Item = Span>,
    {
        let mut collected = Vec::new();
        for span in spans {
            if span.is_empty() {
                return Err(RangeSetError::InvalidRange {
                    start: span.start,
                    end: span.end,
                });
            }
            collected.push(span);
        }
        collected.sort_unstable();
        Ok(Self {
            spans: coalesce(collected),
        })
    }

    /// Normalize spans already known to be non-empty.
    pub(crate) fn from_occurrences(mut spans: Vec<Span>) -> Self {
        debug_assert!(spans.iter().all(|span| !span.is_empty()));
        spans.sort_unstable();
        Self {
            spans: coalesce(spans),
        }
    }

    /// Union of covered positions.
    ///
    /// Merges the two normalized span lists in one pass; overlapping or
    /// exactly adjacent spans from the two sides coalesce, spans separated
    /// by a gap stay separate.
    pub fn union(&self, other: &RangeSet) -> RangeSet {
        let mut merged = Vec::with_capacity(self.spans.len() + other.spans.len());
        let mut left = self.spans.iter().copied().peekable();
        let mut right = other.spans.iter().copied().peekable();
        loop {
            match (left.peek(), right.peek()) {
                (Some(&a), Some(&b)) => {
                    if a <= b {
                        merged.push(a);
                        left.next();
                    } else {
                        merged.push(b);
                        right.next();
                    }
                }
                (Some(_), None) => {
                    merged.extend(left);
                    break;
                }
                (None, _) => {
                    merged.extend(right);
                    break;
                }
            }
        }
        RangeSet {
            spans: coalesce(merged),
        }
    }

    /// Whether every position of `other` is also covered by `self`.
    ///
    /// The empty set is enclosed by everything. Both span lists are in
    /// normal form, so an enclosing span is unique when it exists and a
    /// single forward walk decides the question.
    pub fn encloses(&self, other: &RangeSet) -> bool {
        let mut mine = self.spans.iter();
        let mut current = mine.next();
        for span in &other.spans {
            while let Some(candidate) = current {
                if candidate.end >= span.end {
                    break;
                }
                current = mine.next();
            }
            match current {
                Some(candidate) if candidate.encloses(span) => {}
                _ => return false,
            }
        }
        true
    }

    /// Whether `position` is covered.
    pub fn contains(&self, position: usize) -> bool {
        self.spans
            .binary_search_by(|span| {
                use std::cmp::Ordering;
                if span.end <= position {
                    Ordering::Less
                } else if span.start > position {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// The spans in normal form.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns `true` when no position is covered.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total number of covered positions.
    pub fn cardinality(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.spans.is_empty() {
            return write!(f, "{{}}");
        }
        for (i, span) in self.spans.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{span}")?;
        }
        Ok(())
    }
}

/// Coalesce a start-sorted span list into normal form.
fn coalesce(sorted: Vec<Span>) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match spans.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => spans.push(span),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn set(start: usize, end: usize) -> RangeSet {
        RangeSet::new(start, end).unwrap()
    }

    #[test]
    fn rejects_degenerate_ranges() {
        assert!(matches!(
            RangeSet::new(5, 5),
            Err(RangeSetError::InvalidRange { start: 5, end: 5 })
        ));
        assert!(matches!(
            RangeSet::new(8, 3),
            Err(RangeSetError::InvalidRange { start: 8, end: 3 })
        ));
    }

    #[test]
    fn from_spans_rejects_any_degenerate_member() {
        let spans = vec![Span { start: 0, end: 4 }, Span { start: 6, end: 6 }];
        assert!(RangeSet::from_spans(spans).is_err());
    }

    #[test_case(0, 8, 8, 16 => 1; "exactly adjacent spans coalesce")]
    #[test_case(0, 8, 9, 16 => 2; "a one position gap keeps spans apart")]
    #[test_case(0, 8, 4, 12 => 1; "overlapping spans coalesce")]
    #[test_case(0, 16, 4, 8 => 1; "an enclosed span disappears")]
    #[test_case(10, 15, 0, 5 => 2; "order of arguments does not matter")]
    fn union_span_count(a0: usize, a1: usize, b0: usize, b1: usize) -> usize {
        set(a0, a1).union(&set(b0, b1)).spans().len()
    }

    #[test]
    fn adjacent_union_equals_direct_construction() {
        assert_eq!(set(0, 8).union(&set(8, 16)), set(0, 16));
    }

    #[test]
    fn union_is_commutative() {
        let a = set(0, 5).union(&set(20, 25));
        let b = set(3, 9);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let a = set(2, 7);
        assert_eq!(a.union(&RangeSet::empty()), a);
        assert_eq!(RangeSet::empty().union(&a), a);
    }

    #[test]
    fn encloses_respects_gaps() {
        let outer = set(0, 10).union(&set(20, 30));
        assert!(outer.encloses(&set(2, 8)));
        assert!(outer.encloses(&set(0, 10).union(&set(25, 30))));
        assert!(!outer.encloses(&set(8, 12)));
        assert!(!outer.encloses(&set(12, 15)));
        assert!(outer.encloses(&RangeSet::empty()));
        assert!(!RangeSet::empty().encloses(&set(0, 1)));
    }

    #[test]
    fn contains_covers_span_interior_only() {
        let ranges = set(2, 5).union(&set(9, 11));
        assert!(ranges.contains(2));
        assert!(ranges.contains(4));
        assert!(!ranges.contains(5));
        assert!(!ranges.contains(8));
        assert!(ranges.contains(9));
        assert!(!ranges.contains(11));
    }

    #[test]
    fn cardinality_sums_covered_positions() {
        assert_eq!(RangeSet::empty().cardinality(), 0);
        assert_eq!(set(0, 9).union(&set(16, 25)).cardinality(), 18);
    }

    #[test]
    fn display_renders_normal_form() {
        let ranges = set(10, 15).union(&set(24, 29));
        assert_eq!(ranges.to_string(), "[10, 15) [24, 29)");
        assert_eq!(RangeSet::empty().to_string(), "{}");
    }
}
