//! Transforming and filtering sequence elements.
//!
//! This module provides [`Map`], [`Filter`] and [`FilterMap`]. All three pull from
//! their inner sequence only when advanced.

use crate::{Maybe, Seq};

/// Applies a function to every element of the wrapped sequence.
///
/// Created by [`Seq::map`].
pub struct Map<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence that transforms each element of `seq` with `f`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut lens = map(from_vec(vec!["a", "bcd"]), str::len);
/// assert_eq!(lens.next(), Maybe::Just(1));
/// assert_eq!(lens.next(), Maybe::Just(3));
/// assert_eq!(lens.next(), Maybe::Nothing);
/// ```
pub fn map<S, U, F>(seq: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
{
    Map { seq, f }
}

impl<S, U, F> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> U,
{
    type Item = U;
    fn next(&mut self) -> Maybe<Self::Item> {
        self.seq.next().map(&mut self.f)
    }
}

/// Yields only the elements that satisfy a predicate.
///
/// Created by [`Seq::filter`].
pub struct Filter<S, P> {
    seq: S,
    predicate: P,
}

/// Create a sequence that keeps the elements of `seq` for which `predicate` holds.
///
/// Advancing pulls from `seq` until an element matches or `seq` is exhausted. An
/// infinite `seq` with no further matches makes that advance loop forever.
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    Filter { seq, predicate }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    fn next(&mut self) -> Maybe<Self::Item> {
        loop {
            match self.seq.next() {
                Maybe::Just(item) if (self.predicate)(&item) => return Maybe::Just(item),
                Maybe::Just(_) => continue,
                Maybe::Nothing => return Maybe::Nothing,
            }
        }
    }
}

/// Transforms elements and drops those the transform rejects.
///
/// Created by [`Seq::filter_map`].
pub struct FilterMap<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence that yields `f(x)` for each element `x` of `seq` where
/// `f(x)` is `Just`.
///
/// Same liveness caveat as [`filter`]: an infinite `seq` on which `f` never
/// returns `Just` again makes the next advance loop forever.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let parsed = from_vec(vec!["1", "two", "3"])
///     .filter_map(|s| Maybe::from(s.parse::<i32>().ok()))
///     .collect_vec();
/// assert_eq!(parsed, vec![1, 3]);
/// ```
pub fn filter_map<S, U, F>(seq: S, f: F) -> FilterMap<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Maybe<U>,
{
    FilterMap { seq, f }
}

impl<S, U, F> Seq for FilterMap<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> Maybe<U>,
{
    type Item = U;
    fn next(&mut self) -> Maybe<Self::Item> {
        loop {
            match self.seq.next() {
                Maybe::Just(item) => {
                    if let Maybe::Just(out) = (self.f)(item) {
                        return Maybe::Just(out);
                    }
                }
                Maybe::Nothing => return Maybe::Nothing,
            }
        }
    }
}
