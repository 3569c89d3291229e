//! Bridges between [`Seq`] and [`std::iter::Iterator`].
//!
//! [`SeqIter`] lets any sequence drive a `for` loop or a std adapter chain, and
//! [`FromStd`] lets any std iterator feed this crate's combinators.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut total = 0;
//! for x in from_slice(&[1, 2, 3]).map(|x| x * 10).into_std() {
//!     total += x;
//! }
//! assert_eq!(total, 60);
//!
//! let evens = from_iter(0..10).filter(|x| x % 2 == 0).collect_vec();
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//! ```

use std::iter::FusedIterator;

use crate::{Maybe, Seq};

/// Iterator adapter for a [`Seq`].
///
/// Repeatedly calls [`Seq::next`] and yields values until the sequence reports
/// `Nothing`. The inner sequence is dropped at that point and never polled again,
/// so the adapter is fused even over a generator that is not.
///
/// Both `SeqIter` and `&mut SeqIter` implement `Iterator`, so a loop can stop early
/// and [`is_complete`](SeqIter::is_complete) can be checked afterwards.
pub struct SeqIter<S> {
    state: SeqIterState<S>,
}

enum SeqIterState<S> {
    Active(S),
    Complete,
}

impl<S> SeqIter<S>
where
    S: Seq,
{
    /// Wrap a sequence.
    pub fn new(seq: S) -> Self {
        Self {
            state: SeqIterState::Active(seq),
        }
    }

    /// Check whether the wrapped sequence has been exhausted.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SeqIterState::Complete)
    }

    /// Recover the wrapped sequence, if it has not been exhausted.
    pub fn into_inner(self) -> Option<S> {
        match self.state {
            SeqIterState::Active(seq) => Some(seq),
            SeqIterState::Complete => None,
        }
    }
}

impl<S> Iterator for SeqIter<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let SeqIterState::Active(seq) = &mut self.state else {
            return None;
        };
        match seq.next() {
            Maybe::Just(item) => Some(item),
            Maybe::Nothing => {
                self.state = SeqIterState::Complete;
                None
            }
        }
    }
}

impl<S> FusedIterator for SeqIter<S> where S: Seq {}

/// A [`Seq`] over a std iterator.
///
/// Created by [`from_iter`](crate::build::from_iter).
#[derive(Debug, Clone)]
pub struct FromStd<I> {
    inner: std::iter::Fuse<I>,
}

impl<I> FromStd<I>
where
    I: Iterator,
{
    pub(crate) fn new(inner: I) -> Self {
        Self {
            inner: inner.fuse(),
        }
    }
}

impl<I> Seq for FromStd<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Maybe<Self::Item> {
        self.inner.next().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_iter, from_vec};
    use crate::maybe::{just, nothing};

    #[test]
    fn test_seq_iter_collects() {
        let values: Vec<_> = from_vec(vec![1, 2, 3]).into_std().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_seq_iter_with_mut_ref() {
        let mut iter = from_vec(vec![1, 2, 3, 4]).into_std();
        let head: Vec<_> = (&mut iter).take(2).collect();
        assert_eq!(head, vec![1, 2]);
        assert!(!iter.is_complete());

        let rest: Vec<_> = iter.by_ref().collect();
        assert_eq!(rest, vec![3, 4]);
        assert!(iter.is_complete());
        assert!(iter.into_inner().is_none());
    }

    #[test]
    fn test_seq_iter_fuses_a_flickering_generator() {
        let mut calls = 0;
        let flicker = from_fn(move || {
            calls += 1;
            if calls % 2 == 0 { nothing() } else { just(calls) }
        });

        let mut iter = flicker.into_std();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_from_iter_round_trip() {
        let doubled: Vec<_> = from_iter(vec!["a", "bb", "ccc"])
            .map(str::len)
            .into_std()
            .map(|n| n * 2)
            .collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }
}
