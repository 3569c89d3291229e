//! Building sequences from scratch
//!
//! This module provides the sources every pipeline starts from: collections,
//! maps, generator closures and std iterators.

mod collection;
mod func;

// Re-export building blocks
pub use collection::{from_iter, from_map, from_slice, from_vec, FromMap, FromSlice, FromVec};
pub use func::{empty, from_fn, once, repeat, Empty, FromFn, Once, Repeat};
