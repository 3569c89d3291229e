use std::collections::HashMap;

use lazyseq::prelude::*;

fn counter() -> impl Seq<Item = u32> {
    let mut n = 0;
    from_fn(move || {
        n += 1;
        just(n)
    })
}

#[test]
fn test_double_map_over_slice() {
    let slice = [1, 2, 3, 4, 5];
    let expected = [4, 8, 12, 16, 20];
    let mut seq = from_slice(&slice).map(|i| i * 2).map(|i| i * 2);

    for want in expected {
        assert_eq!(seq.next(), Maybe::Just(want));
    }
    assert_eq!(seq.next(), Maybe::Nothing);
}

#[test]
fn test_even_counter_prefix() {
    let evens = counter().filter(|x| x % 2 == 0).take(5).collect_vec();
    assert_eq!(evens, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_skip_while_then_take() {
    let tail = counter().skip_while(|x| *x < 10).take(5).collect_vec();
    assert_eq!(tail, vec![10, 11, 12, 13, 14]);
}

#[test]
fn test_zip_and_sum_pairwise() {
    let sums = from_vec(vec![1, 2, 3, 4, 5])
        .zip(from_vec(vec![6, 7, 8, 9, 10]))
        .map(|(a, b)| a + b)
        .collect_vec();
    assert_eq!(sums, vec![7, 9, 11, 13, 15]);
}

#[test]
fn test_map_source_round_trip() {
    let original: HashMap<String, usize> = ["one", "three", "five"]
        .into_iter()
        .map(|w| (w.to_string(), w.len()))
        .collect();

    let rebuilt = from_map(original.clone())
        .map(|(k, v)| (k.to_uppercase(), v))
        .collect_map();

    assert_eq!(rebuilt.len(), 3);
    assert_eq!(rebuilt["THREE"], 5);
    assert_eq!(
        from_map(original).fold(0, |acc, (_, v)| acc + v),
        3 + 5 + 4
    );
}

#[test]
fn test_collect_map_last_write_wins() {
    let map = from_vec(vec![(1, "a"), (2, "b"), (1, "c")]).collect_map();
    assert_eq!(map[&1], "c");
    assert_eq!(map[&2], "b");
}

#[test]
fn test_filter_map_over_generator() {
    let squares_of_threes = counter()
        .filter_map(|x| if x % 3 == 0 { just(x * x) } else { nothing() })
        .take(3)
        .collect_vec();
    assert_eq!(squares_of_threes, vec![9, 36, 81]);
}

#[test]
fn test_skip_then_chain() {
    let seq = from_vec(vec![1, 2, 3]).skip(1).chain(once(99));
    assert_eq!(seq.collect_vec(), vec![2, 3, 99]);
}

#[test]
fn test_for_each_and_count() {
    let mut total = 0;
    counter().take(4).for_each(|x| total += x);
    assert_eq!(total, 10);
    assert_eq!(counter().take(7).count(), 7);
}

#[test]
fn test_exhausted_pipeline_stays_exhausted() {
    let mut seq = from_slice(&[1, 2, 3]).map(|x| x + 1).filter(|x| x % 2 == 0).take(10);
    assert_eq!(seq.by_ref().collect_vec(), vec![2, 4]);
    for _ in 0..3 {
        assert_eq!(seq.next(), Maybe::Nothing);
    }
}

#[test]
fn test_maybe_feeds_pipeline() {
    let found = from_slice(&[3, 5, 8, 13]).filter(|x| x % 2 == 0).next();
    let doubled = found.map(|x| x * 2).filter(|x| *x > 10);
    assert_eq!(doubled, just(16));
    assert_eq!(doubled.iter().chain(empty()).collect_vec(), vec![16]);
}
