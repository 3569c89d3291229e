use crate::{Maybe, Seq};

/// Pairs elements from two sequences positionally.
///
/// Created by [`Seq::zip`]. Both sides are advanced on every call. If either one
/// reports `Nothing`, the zip reports `Nothing` from then on; an element pulled
/// from the other side in that same call is discarded.
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

/// Create a sequence of `(a, b)` pairs, as long as the shorter input.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let pairs = zip(from_vec(vec![1, 2, 3]), from_vec(vec!['a', 'b'])).collect_vec();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Seq,
    B: Seq,
{
    Zip { a, b, done: false }
}

impl<A, B> Seq for Zip<A, B>
where
    A: Seq,
    B: Seq,
{
    type Item = (A::Item, B::Item);
    fn next(&mut self) -> Maybe<Self::Item> {
        if self.done {
            return Maybe::Nothing;
        }
        let pair = self.a.next().zip(self.b.next());
        self.done = pair.is_nothing();
        pair
    }
}
