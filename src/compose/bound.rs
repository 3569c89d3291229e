//! Bounding a sequence from the front or the back.
//!
//! [`Take`] caps how many elements come out; [`Skip`] and [`SkipWhile`] drop a
//! prefix. All three keep the state they need to resume: a remaining count, a
//! pending discard count, or the predicate that has not failed yet.

use crate::{Maybe, Seq};

/// Yields at most a fixed number of elements.
///
/// Created by [`Seq::take`]. Once the count reaches zero, or the inner sequence
/// reports `Nothing`, the inner sequence is never advanced again.
pub struct Take<S> {
    seq: S,
    remaining: usize,
}

/// Create a sequence of the first `n` elements of `seq`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let mut seq = take(repeat(1), 2);
/// assert_eq!(seq.next(), Maybe::Just(1));
/// assert_eq!(seq.next(), Maybe::Just(1));
/// assert_eq!(seq.next(), Maybe::Nothing);
/// ```
pub fn take<S: Seq>(seq: S, n: usize) -> Take<S> {
    Take { seq, remaining: n }
}

impl<S: Seq> Take<S> {
    /// How many more elements this may yield.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;
    fn next(&mut self) -> Maybe<Self::Item> {
        if self.remaining == 0 {
            return Maybe::Nothing;
        }
        match self.seq.next() {
            Maybe::Just(item) => {
                self.remaining -= 1;
                Maybe::Just(item)
            }
            Maybe::Nothing => {
                self.remaining = 0;
                Maybe::Nothing
            }
        }
    }
}

/// Discards a fixed number of elements, then yields the rest.
///
/// Created by [`Seq::skip`].
pub struct Skip<S> {
    seq: S,
    pending: usize,
}

/// Create a sequence that drops the first `n` elements of `seq`.
///
/// Nothing is pulled until the first advance. That advance pulls exactly `n`
/// elements and discards them, even if `seq` runs out partway, and then
/// delegates to `seq` from then on.
pub fn skip<S: Seq>(seq: S, n: usize) -> Skip<S> {
    Skip { seq, pending: n }
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;
    fn next(&mut self) -> Maybe<Self::Item> {
        for _ in 0..std::mem::take(&mut self.pending) {
            let _ = self.seq.next();
        }
        self.seq.next()
    }
}

/// Discards elements while a predicate holds.
///
/// Created by [`Seq::skip_while`]. The predicate is dropped at its first failure,
/// so it is never called again afterwards.
pub struct SkipWhile<S, P> {
    seq: S,
    predicate: Option<P>,
}

/// Create a sequence that drops the leading elements of `seq` that satisfy
/// `predicate`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let rest = skip_while(from_vec(vec![1, 2, 5, 1]), |x| *x < 3).collect_vec();
/// assert_eq!(rest, vec![5, 1]);
/// ```
pub fn skip_while<S, P>(seq: S, predicate: P) -> SkipWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    SkipWhile {
        seq,
        predicate: Some(predicate),
    }
}

impl<S, P> Seq for SkipWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;
    fn next(&mut self) -> Maybe<Self::Item> {
        let Some(predicate) = self.predicate.as_mut() else {
            return self.seq.next();
        };
        loop {
            match self.seq.next() {
                Maybe::Just(item) if predicate(&item) => continue,
                Maybe::Just(item) => {
                    self.predicate = None;
                    return Maybe::Just(item);
                }
                Maybe::Nothing => return Maybe::Nothing,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_vec, repeat};
    use crate::maybe::{just, nothing};
    use quickcheck::quickcheck;
    use std::cell::Cell;

    #[test]
    fn test_take_zero_never_touches_inner() {
        let pulled = Cell::new(0);
        let mut seq = from_fn(|| {
            pulled.set(pulled.get() + 1);
            just(())
        })
        .take(0);

        assert_eq!(seq.next(), nothing());
        assert_eq!(pulled.get(), 0);
    }

    #[test]
    fn test_take_stops_after_limit_on_infinite() {
        let mut seq = repeat('a').take(2);
        assert_eq!(seq.remaining(), 2);
        assert_eq!(seq.next(), just('a'));
        assert_eq!(seq.next(), just('a'));
        assert_eq!(seq.remaining(), 0);
        assert_eq!(seq.next(), nothing());
        assert_eq!(seq.next(), nothing());
    }

    #[test]
    fn test_take_stays_done_after_early_end() {
        let pulled = Cell::new(0);
        let mut seq = from_fn(|| {
            pulled.set(pulled.get() + 1);
            if pulled.get() == 2 { nothing() } else { just(pulled.get()) }
        })
        .take(5);

        assert_eq!(seq.next(), just(1));
        assert_eq!(seq.next(), nothing());
        assert_eq!(seq.remaining(), 0);
        assert_eq!(seq.next(), nothing());
        assert_eq!(seq.next(), nothing());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_skip_is_deferred_to_first_advance() {
        let pulled = Cell::new(0);
        let mut seq = from_fn(|| {
            pulled.set(pulled.get() + 1);
            just(pulled.get())
        })
        .skip(3);

        assert_eq!(pulled.get(), 0);
        assert_eq!(seq.next(), just(4));
        assert_eq!(pulled.get(), 4);
        assert_eq!(seq.next(), just(5));
    }

    #[test]
    fn test_skip_past_the_end() {
        let mut seq = from_vec(vec![1, 2]).skip(5);
        assert_eq!(seq.next(), nothing());
        assert_eq!(seq.next(), nothing());
    }

    #[test]
    fn test_skip_while_stops_consulting_predicate() {
        let calls = Cell::new(0);
        let out = from_vec(vec![1, 2, 10, 1, 2, 3])
            .skip_while(|x| {
                calls.set(calls.get() + 1);
                *x < 5
            })
            .collect_vec();

        assert_eq!(out, vec![10, 1, 2, 3]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_skip_while_everything_matches() {
        let mut seq = from_vec(vec![1, 2, 3]).skip_while(|_| true);
        assert_eq!(seq.next(), nothing());
    }

    #[test]
    fn prop_take_yields_min_of_n_and_len() {
        fn p(items: Vec<u8>, n: u8) -> bool {
            let n = n as usize;
            let mut seq = from_vec(items.clone()).take(n);
            let got = seq.by_ref().collect_vec();
            got.len() == n.min(items.len()) && got[..] == items[..got.len()] && seq.next().is_nothing()
        }
        quickcheck(p as fn(Vec<u8>, u8) -> bool);
    }

    #[test]
    fn prop_skip_while_yields_suffix_from_first_failure() {
        fn p(items: Vec<u8>, pivot: u8) -> bool {
            let split = items.iter().position(|x| *x >= pivot).unwrap_or(items.len());
            let got = from_vec(items.clone()).skip_while(|x| *x < pivot).collect_vec();
            got == items[split..]
        }
        quickcheck(p as fn(Vec<u8>, u8) -> bool);
    }

    #[test]
    fn prop_skip_drops_prefix() {
        fn p(items: Vec<u8>, n: u8) -> bool {
            let n = (n as usize).min(items.len());
            from_vec(items.clone()).skip(n).collect_vec() == items[n..]
        }
        quickcheck(p as fn(Vec<u8>, u8) -> bool);
    }
}
