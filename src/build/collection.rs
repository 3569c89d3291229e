use std::collections::{HashMap, hash_map};

use crate::{Maybe, Seq, iter::FromStd};

/// Walks a borrowed slice with a cursor, yielding clones of its elements.
///
/// Created by [`from_slice`].
#[derive(Debug, Clone)]
pub struct FromSlice<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<T: Clone> Seq for FromSlice<'_, T> {
    type Item = T;

    fn next(&mut self) -> Maybe<Self::Item> {
        match self.slice.get(self.index) {
            Some(item) => {
                self.index += 1;
                Maybe::Just(item.clone())
            }
            None => Maybe::Nothing,
        }
    }
}

impl<T> FromSlice<'_, T> {
    /// Number of elements not yet yielded.
    pub fn remaining(&self) -> usize {
        self.slice.len() - self.index
    }
}

/// Create a sequence over the elements of a slice, in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = from_slice(&[1, 2]);
/// assert_eq!(seq.next(), Maybe::Just(1));
/// assert_eq!(seq.next(), Maybe::Just(2));
/// assert_eq!(seq.next(), Maybe::Nothing);
/// ```
pub fn from_slice<T: Clone>(slice: &[T]) -> FromSlice<'_, T> {
    FromSlice { slice, index: 0 }
}

/// Owns an ordered collection and yields its elements by value.
///
/// Created by [`from_vec`].
#[derive(Debug, Clone)]
pub struct FromVec<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Seq for FromVec<T> {
    type Item = T;

    fn next(&mut self) -> Maybe<Self::Item> {
        self.items.next().into()
    }
}

impl<T> FromVec<T> {
    /// Number of elements not yet yielded.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

/// Create a sequence that takes ownership of `items` and yields them in order.
pub fn from_vec<T>(items: Vec<T>) -> FromVec<T> {
    FromVec {
        items: items.into_iter(),
    }
}

/// Yields the entries of a `HashMap` as `(key, value)` pairs.
///
/// Created by [`from_map`]. The order is whatever the map's own iteration
/// produces; it is not stable across runs and must not be relied upon.
#[derive(Debug)]
pub struct FromMap<K, V> {
    entries: hash_map::IntoIter<K, V>,
}

impl<K, V> Seq for FromMap<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Maybe<Self::Item> {
        self.entries.next().into()
    }
}

/// Create a sequence over the entries of a map, in unspecified order.
///
/// ```rust
/// use std::collections::HashMap;
/// use lazyseq::prelude::*;
///
/// let map = HashMap::from([("a", 1), ("b", 2)]);
/// let mut entries = from_map(map).collect_vec();
/// entries.sort();
/// assert_eq!(entries, vec![("a", 1), ("b", 2)]);
/// ```
pub fn from_map<K, V, S>(map: HashMap<K, V, S>) -> FromMap<K, V> {
    FromMap {
        entries: map.into_iter(),
    }
}

/// Create a sequence from anything that can be iterated with `std`.
pub fn from_iter<I>(iter: I) -> FromStd<I::IntoIter>
where
    I: IntoIterator,
{
    FromStd::new(iter.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{just, nothing};

    #[test]
    fn test_from_slice_yields_each_then_stays_exhausted() {
        let slice = [1, 2, 3, 4, 5];
        let mut seq = from_slice(&slice);

        for expected in slice {
            assert_eq!(seq.next(), just(expected));
        }
        assert_eq!(seq.remaining(), 0);
        assert_eq!(seq.next(), nothing());
        assert_eq!(seq.next(), nothing());
    }

    #[test]
    fn test_from_vec_moves_values_out() {
        let mut seq = from_vec(vec![String::from("a"), String::from("b")]);
        assert_eq!(seq.remaining(), 2);
        assert_eq!(seq.next(), just(String::from("a")));
        assert_eq!(seq.next(), just(String::from("b")));
        assert_eq!(seq.next(), nothing());
    }

    #[test]
    fn test_from_map_visits_every_entry_once() {
        let map: HashMap<u32, char> = (0..26).map(|i| (i, (b'a' + i as u8) as char)).collect();
        let mut entries = from_map(map.clone()).collect_vec();
        entries.sort();

        let mut expected: Vec<_> = map.into_iter().collect();
        expected.sort();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_from_map_empty() {
        let mut seq = from_map(HashMap::<u8, u8>::new());
        assert_eq!(seq.next(), nothing());
    }

    #[test]
    fn test_from_iter_is_fused() {
        let mut seq = from_iter(Some(1));
        assert_eq!(seq.next(), just(1));
        assert_eq!(seq.next(), nothing());
        assert_eq!(seq.next(), nothing());
    }
}
