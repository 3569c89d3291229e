use crate::{Maybe, Seq};

/// Calls a generator on every advance.
///
/// Created by [`from_fn`].
pub struct FromFn<F>(F);

impl<T, F> Seq for FromFn<F>
where
    F: FnMut() -> Maybe<T>,
{
    type Item = T;
    fn next(&mut self) -> Maybe<Self::Item> {
        (self.0)()
    }
}

/// Create a sequence from a generator closure.
///
/// The generator runs once per advance and decides on its own when to stop, if
/// ever. Nothing here bounds it: use [`take`](Seq::take) or [`skip`](Seq::skip) to
/// cut an infinite generator down. A generator that returns `Just` again after
/// `Nothing` is passed through as is.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut counter = from_fn(move || {
///     n += 1;
///     just(n)
/// });
/// assert_eq!(counter.next(), Maybe::Just(1));
/// assert_eq!(counter.next(), Maybe::Just(2));
/// // Continues forever...
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Maybe<T>,
{
    FromFn(f)
}

/// Yields a clone of one value forever.
///
/// Never completes on its own.
#[derive(Debug, Clone)]
pub struct Repeat<T>(T);

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;
    fn next(&mut self) -> Maybe<Self::Item> {
        Maybe::Just(self.0.clone())
    }
}

/// Create a sequence that repeats `value` indefinitely.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat('x').take(3).collect_vec(), vec!['x', 'x', 'x']);
/// ```
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat(value)
}

/// Yields one value, then completes.
#[derive(Debug, Clone)]
pub struct Once<T>(Maybe<T>);

impl<T> Once<T> {
    pub(crate) fn from_maybe(value: Maybe<T>) -> Self {
        Once(value)
    }
}

impl<T> Seq for Once<T> {
    type Item = T;
    fn next(&mut self) -> Maybe<Self::Item> {
        self.0.take()
    }
}

/// Create a sequence that yields `value` exactly once.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = once(5);
/// assert_eq!(seq.next(), Maybe::Just(5));
/// assert_eq!(seq.next(), Maybe::Nothing);
/// ```
pub fn once<T>(value: T) -> Once<T> {
    Once(Maybe::Just(value))
}

/// A sequence with no elements.
#[derive(Debug, Clone, Copy)]
pub struct Empty<T>(std::marker::PhantomData<fn() -> T>);

impl<T> Seq for Empty<T> {
    type Item = T;
    fn next(&mut self) -> Maybe<Self::Item> {
        Maybe::Nothing
    }
}

/// Create a sequence that is exhausted from the start.
pub fn empty<T>() -> Empty<T> {
    Empty(std::marker::PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{just, nothing};

    #[test]
    fn test_from_fn_counts_up() {
        let mut n = 0_u64;
        let mut counter = from_fn(move || {
            n += 1;
            just(n)
        });

        for expected in 1..=100 {
            assert_eq!(counter.next(), just(expected));
        }
    }

    #[test]
    fn test_from_fn_stops_when_generator_does() {
        let mut left = 2;
        let mut countdown = from_fn(move || {
            if left == 0 {
                return nothing();
            }
            left -= 1;
            just(left)
        });

        assert_eq!(countdown.next(), just(1));
        assert_eq!(countdown.next(), just(0));
        assert_eq!(countdown.next(), nothing());
        assert_eq!(countdown.next(), nothing());
    }

    #[test]
    fn test_once_is_one_shot() {
        let mut seq = once("only");
        assert_eq!(seq.next(), just("only"));
        assert_eq!(seq.next(), nothing());
        assert_eq!(seq.next(), nothing());
    }

    #[test]
    fn test_repeat_never_completes() {
        let mut seq = repeat(7);
        for _ in 0..1000 {
            assert_eq!(seq.next(), just(7));
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(empty::<String>().next(), nothing());
    }
}
