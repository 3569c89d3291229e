//! Consume a sequence from another thread
//!
//! This module provides the bridge from a pull-based [`Seq`](crate::Seq) to a
//! stream that a background worker fills while the caller reads.

mod stream;

// Re-export the stream bridge
pub use stream::{to_stream, Cancel, Stream, StreamBuilder, StreamError, StreamState};
