use smoothsort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<i64> = (0..count).map(|_| rng.random_range(0..100)).collect();
    assert!(!is_sorted(&input), "random generator produced sorted output");

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    smoothsort(&mut input);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(input.len(), count);
    assert!(is_sorted(&input), "sort didn't sort 1M ints");
}

#[test]
fn test_sort_1m_strings() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let mut input: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(0..12);
            (0..len).map(|_| rng.random_range('a'..='z')).collect()
        })
        .collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    smoothsort(&mut input);
    assert_eq!(input, expected);
}

#[test]
#[ignore]
fn test_sort_100m() {
    // WARNING: This test needs ~800MB of RAM and runs for a while in debug builds.
    let count = 100_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    smoothsort(&mut input);
    let duration = start.elapsed();
    println!("Sorted 100M elements in {:?}", duration);

    // Verify sample
    for i in (0..count - 1).step_by(10_000) {
        assert!(input[i] <= input[i + 1], "Sort failed at index {}", i);
    }
    assert!(is_sorted(&input));
}
