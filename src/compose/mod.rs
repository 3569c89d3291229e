//! Combining sequences together
//!
//! This module provides the combinators that derive a new sequence from one or
//! two inner sequences. Every combinator is lazy: it does no work until it is
//! advanced, and it owns the sequences it wraps.

mod bound;
mod chain;
mod map;
mod zip;

// Re-export composition operations
pub use bound::{skip, skip_while, take, Skip, SkipWhile, Take};
pub use chain::{chain, Chain};
pub use map::{filter, filter_map, map, Filter, FilterMap, Map};
pub use zip::{zip, Zip};
