use crate::{Maybe, Seq};

/// Run the first sequence to exhaustion, then continue with the second.
///
/// Both sequences must yield the same type.
///
/// ```
/// use lazyseq::prelude::*;
///
/// let all = chain(from_vec(vec![1, 2]), once(3)).collect_vec();
/// assert_eq!(all, vec![1, 2, 3]);
/// ```
pub fn chain<L, R>(l: L, r: R) -> Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    Chain(Some(l), r)
}

/// Chains two sequences back to back.
///
/// Created via [`chain()`] or [`Seq::chain`]. The first sequence is dropped from
/// memory once it is exhausted.
pub struct Chain<L, R>(Option<L>, R);

impl<L, R> Seq for Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;
    fn next(&mut self) -> Maybe<Self::Item> {
        if let Some(ref mut l) = self.0 {
            match l.next() {
                Maybe::Just(item) => return Maybe::Just(item),
                Maybe::Nothing => self.0 = None, // we drop the old sequence when it's done
            }
        }
        self.1.next()
    }
}
