//! Core trait for pull-based lazy sequences.
//!
//! This module defines the [`Seq`] trait, the single capability every source and
//! combinator in this library implements. A [`Seq`] produces its elements one at a
//! time on demand and reports exhaustion with [`Maybe::Nothing`].
//!
//! # The Seq Trait
//!
//! A [`Seq`]:
//! - Produces values of type `Item` from [`next`](Seq::next)
//! - May be finite or infinite
//! - Is not restartable: once it reports `Nothing`, every source and combinator in
//!   this crate keeps reporting `Nothing`
//!
//! Combinators are provided methods that wrap `self` and return a new [`Seq`];
//! consumers are provided methods that drive `self` to exhaustion.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let doubled = from_slice(&[1, 2, 3, 4, 5]).map(|x| x * 2).map(|x| x * 2);
//! assert_eq!(doubled.collect_vec(), vec![4, 8, 12, 16, 20]);
//! ```

use std::{collections::HashMap, hash::Hash};

use crate::{
    compose::{Chain, Filter, FilterMap, Map, Skip, SkipWhile, Take, Zip},
    iter::SeqIter,
    maybe::Maybe,
};

/// A lazy sequence of values pulled one at a time.
///
/// Only [`next`](Seq::next) is required. Concurrent calls to `next` on one
/// instance are not synchronized; callers sharing a sequence across threads must
/// serialize access themselves or hand it to [`to_stream`](crate::to_stream).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut evens = from_fn(move || {
///     n += 1;
///     just(n)
/// })
/// .filter(|x| x % 2 == 0)
/// .take(5);
///
/// assert_eq!(evens.next(), Maybe::Just(2));
/// assert_eq!(evens.collect_vec(), vec![4, 6, 8, 10]);
/// ```
pub trait Seq {
    /// Type of the produced elements.
    type Item;

    /// Advance the sequence, returning `Just` the next element or `Nothing` once exhausted.
    fn next(&mut self) -> Maybe<Self::Item>;

    /// Apply `f` to every element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        crate::compose::map(self, f)
    }

    /// Keep only the elements for which `predicate` holds.
    ///
    /// Each call pulls from the inner sequence until a match or exhaustion. Over an
    /// infinite sequence in which nothing ever matches, the call does not return;
    /// bound the input with [`take`](Seq::take) first when termination matters.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::compose::filter(self, predicate)
    }

    /// Transform and filter in one pass: elements for which `f` returns `Nothing`
    /// are dropped.
    ///
    /// Shares the liveness caveat of [`filter`](Seq::filter).
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Maybe<U>,
    {
        crate::compose::filter_map(self, f)
    }

    /// Yield at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::compose::take(self, n)
    }

    /// Discard the first `n` elements, lazily on the first advance.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        crate::compose::skip(self, n)
    }

    /// Discard elements while `predicate` holds, then yield everything after.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::compose::skip_while(self, predicate)
    }

    /// Pair elements positionally with `other`, stopping at the shorter sequence.
    fn zip<R>(self, other: R) -> Zip<Self, R>
    where
        Self: Sized,
        R: Seq,
    {
        crate::compose::zip(self, other)
    }

    /// Yield everything from `self`, then everything from `other`.
    fn chain<R>(self, other: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Seq<Item = Self::Item>,
    {
        crate::compose::chain(self, other)
    }

    /// Borrow the sequence so an adapter can consume part of it.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut seq = from_vec(vec![1, 2, 3, 4]);
    /// assert_eq!(seq.by_ref().take(2).collect_vec(), vec![1, 2]);
    /// assert_eq!(seq.collect_vec(), vec![3, 4]);
    /// ```
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    fn boxed<'a>(self) -> Box<dyn Seq<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Adapt into a [`std::iter::Iterator`].
    fn into_std(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }

    /// Consume the sequence, returning the number of elements.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |n, _| n + 1)
    }

    /// Call `f` on every element in order.
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), item| f(item));
    }

    /// Combine every element into an accumulator, starting from `init`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let sum = from_slice(&[1, 2, 3]).fold(10, |acc, x| acc + x);
    /// assert_eq!(sum, 16);
    /// ```
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Maybe::Just(item) = self.next() {
            acc = f(acc, item);
        }
        acc
    }

    /// Collect every element, in order, into a `Vec`.
    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Vec::new(), |mut out, item| {
            out.push(item);
            out
        })
    }

    /// Collect key/value pairs into a `HashMap`. A repeated key keeps its last value.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let map = from_vec(vec![("a", 1), ("b", 2), ("a", 3)]).collect_map();
    /// assert_eq!(map["a"], 3);
    /// assert_eq!(map.len(), 2);
    /// ```
    fn collect_map<K, V>(self) -> HashMap<K, V>
    where
        Self: Sized + Seq<Item = (K, V)>,
        K: Eq + Hash,
    {
        self.fold(HashMap::new(), |mut out, (k, v)| {
            out.insert(k, v);
            out
        })
    }

    /// Advance past up to `n` elements, returning how many were actually skipped.
    fn advance_by(&mut self, n: usize) -> usize {
        for advanced in 0..n {
            if self.next().is_nothing() {
                return advanced;
            }
        }
        n
    }

    /// Return the element at index `n`, consuming everything before it.
    fn nth(&mut self, n: usize) -> Maybe<Self::Item> {
        if self.advance_by(n) < n {
            return Maybe::Nothing;
        }
        self.next()
    }

    /// Consume the sequence, returning its final element.
    fn last(self) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Maybe::Nothing, |_, item| Maybe::Just(item))
    }
}

impl<S> Seq for &'_ mut S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Maybe<Self::Item> {
        (**self).next()
    }
}

impl<T> Seq for Box<dyn Seq<Item = T> + '_> {
    type Item = T;

    fn next(&mut self) -> Maybe<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Seq for either::Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Maybe<Self::Item> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}
