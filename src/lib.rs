//! # lazyseq: Optional Values and Lazy Sequences
//!
//! Build lazy, pull-driven pipelines over collections, maps and generators, and
//! hand them to a background thread when the consumer lives elsewhere.
//!
//! ## Core Types
//!
//! - **[`Maybe<T>`]**: A value that is present (`Just`) or absent (`Nothing`), with
//!   the full combinator algebra
//! - **[`Seq`]**: Sequences that produce their next value on demand
//!
//! ## Key Features
//!
//! - **Lazy**: Nothing is computed until a value is pulled
//! - **Composable**: Chain `.map()`, `.filter()`, `.take()`, `.skip_while()`, `.zip()`, ...
//! - **Infinite-friendly**: Generators never need to end; bound them with `.take()`
//! - **Threaded**: [`to_stream`] runs a sequence on a worker with a cancellable handoff
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let mut n = 0;
//! let evens = from_fn(move || {
//!     n += 1;
//!     just(n)
//! })
//! .filter(|x| x % 2 == 0)
//! .take(5);
//!
//! assert_eq!(evens.collect_vec(), vec![2, 4, 6, 8, 10]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`from_slice(s)`](from_slice) / [`from_vec(v)`](from_vec) - Ordered collections
//! - [`from_map(m)`](from_map) - Map entries, in unspecified order
//! - [`from_fn(f)`](from_fn) - Call a generator on every advance
//!
//! **Consuming:**
//! - [`Seq::count`], [`Seq::for_each`], [`Seq::fold`]
//! - [`Seq::collect_vec`], [`Seq::collect_map`]
//! - [`to_stream(seq)`](to_stream) - Read from another thread, with cancellation

pub mod build;
pub mod compose;
pub mod concurrent;
pub mod iter;
mod maybe;
pub mod prelude;
mod seq;

pub use build::*;
pub use concurrent::{to_stream, Cancel, Stream, StreamBuilder, StreamError, StreamState};
pub use maybe::*;
pub use seq::*;
