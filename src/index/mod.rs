//! Suffix-array based repeat index over a combined witness token stream.
//!
//! The pipeline runs in fixed stages: build the [`TokenStream`], sort its
//! suffixes into a [`SuffixArray`], derive the [`LcpArray`], then scan LCP
//! intervals into repeated [`Block`]s. Each stage only reads the output of
//! the previous one.

mod block;
mod lcp;
mod range_set;
mod repeats;
mod suffix_array;
mod token;

pub use block::Block;
pub use lcp::LcpArray;
pub use range_set::{RangeSet, RangeSetError, Span};
pub use repeats::{find_blocks, RepeatIndex};
pub use suffix_array::SuffixArray;
pub use token::{StreamToken, TokenStream};
