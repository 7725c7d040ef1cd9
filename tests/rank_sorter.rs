mod common;

use wordrank_core::ranking::{RankSorter, DEFAULT_INSERTION_THRESHOLD, MIN_PARTITION_LEN};
use wordrank_core::types::{ConfigError, RankEntry};

use common::{as_multiset, assert_non_increasing, entry, init_logging, Lcg};

fn random_entries(rng: &mut Lcg, len: usize, max_count: u64) -> Vec<RankEntry> {
    (0..len)
        .map(|i| entry(&format!("w{i}"), rng.below(max_count)))
        .collect()
}

fn check_sort(sorter: &RankSorter, entries: Vec<RankEntry>) {
    let before = as_multiset(&entries);
    let mut sorted = entries;
    sorter.sort(&mut sorted);
    assert_non_increasing(&sorted);
    assert_eq!(as_multiset(&sorted), before, "sort must preserve the multiset");
}

#[test]
fn sorts_mixed_counts_with_ties() {
    let mut entries = vec![
        entry("a", 3),
        entry("b", 9),
        entry("c", 1),
        entry("d", 9),
        entry("e", 5),
    ];
    RankSorter::default().sort(&mut entries);

    let counts: Vec<u64> = entries.iter().map(|e| e.count).collect();
    assert_eq!(counts, vec![9, 9, 5, 3, 1]);
    let top: Vec<&str> = entries[..2].iter().map(|e| e.word.as_str()).collect();
    assert!(top.contains(&"b") && top.contains(&"d"));
}

#[test]
fn same_input_through_the_partition_path() {
    let sorter = RankSorter::new(MIN_PARTITION_LEN).unwrap();
    let mut entries = vec![
        entry("a", 3),
        entry("b", 9),
        entry("c", 1),
        entry("d", 9),
        entry("e", 5),
    ];
    sorter.sort(&mut entries);

    let counts: Vec<u64> = entries.iter().map(|e| e.count).collect();
    assert_eq!(counts, vec![9, 9, 5, 3, 1]);
}

#[test]
fn empty_and_single_inputs() {
    let sorter = RankSorter::default();

    let mut empty: Vec<RankEntry> = Vec::new();
    sorter.sort(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![entry("only", 4)];
    sorter.sort(&mut single);
    assert_eq!(single, vec![entry("only", 4)]);
}

#[test]
fn spans_shorter_than_three_sort_at_the_minimum_threshold() {
    let sorter = RankSorter::new(MIN_PARTITION_LEN).unwrap();
    for len in 0..=6 {
        let entries: Vec<RankEntry> = (0..len as u64).map(|i| entry(&format!("w{i}"), i)).collect();
        check_sort(&sorter, entries);
    }

    let mut pair = vec![entry("low", 1), entry("high", 2)];
    sorter.sort(&mut pair);
    assert_eq!(pair, vec![entry("high", 2), entry("low", 1)]);
}

#[test]
fn random_inputs_across_thresholds() {
    init_logging();
    let mut rng = Lcg::new(2024);

    for threshold in [MIN_PARTITION_LEN, 4, DEFAULT_INSERTION_THRESHOLD, 32] {
        let sorter = RankSorter::new(threshold).unwrap();
        for len in [0, 1, 2, 3, 5, 9, 10, 11, 31, 100, 513] {
            // Narrow count ranges force many ties.
            for max_count in [1, 3, 1000] {
                check_sort(&sorter, random_entries(&mut rng, len, max_count));
            }
        }
    }
}

#[test]
fn ordered_and_patterned_inputs() {
    let sorter = RankSorter::new(MIN_PARTITION_LEN).unwrap();
    let n = 2000u64;

    let ascending: Vec<RankEntry> = (0..n).map(|i| entry(&format!("w{i}"), i)).collect();
    let descending: Vec<RankEntry> = (0..n).rev().map(|i| entry(&format!("w{i}"), i)).collect();
    let organ_pipe: Vec<RankEntry> = (0..n)
        .map(|i| entry(&format!("w{i}"), i.min(n - i)))
        .collect();
    let sawtooth: Vec<RankEntry> = (0..n).map(|i| entry(&format!("w{i}"), i % 7)).collect();
    let constant: Vec<RankEntry> = (0..n).map(|i| entry(&format!("w{i}"), 5)).collect();

    for entries in [ascending, descending, organ_pipe, sawtooth, constant] {
        check_sort(&sorter, entries);
    }
}

#[test]
fn sorts_plain_pairs() {
    let mut pairs = vec![("x", 1u64), ("y", 4), ("z", 2)];
    RankSorter::default().sort(&mut pairs);
    assert_eq!(pairs, vec![("y", 4), ("z", 2), ("x", 1)]);
}

#[test]
fn rejects_thresholds_below_partition_minimum() {
    for threshold in 0..MIN_PARTITION_LEN {
        assert_eq!(
            RankSorter::new(threshold).unwrap_err(),
            ConfigError::ThresholdTooSmall {
                threshold,
                minimum: MIN_PARTITION_LEN,
            }
        );
    }
    assert_eq!(RankSorter::default().threshold(), DEFAULT_INSERTION_THRESHOLD);
}
