//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Maybe, Seq, just, nothing};

// Most common constructors
pub use crate::build::{empty, from_fn, from_iter, from_map, from_slice, from_vec, once, repeat};

// Composition
pub use crate::compose::{chain, filter, filter_map, map, skip, skip_while, take, zip};

// Threading
pub use crate::concurrent::{Cancel, Stream, StreamBuilder, StreamState, to_stream};
