use sortscope::prelude::*;
use std::time::Instant;

#[test]
fn test_measure_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);
    let input = generate(DatasetSpec::new(count, DatasetShape::Random));

    for algo in [Algorithm::Heap, Algorithm::Merge, Algorithm::Radix] {
        println!("Sorting {} elements with {}...", count, algo);
        let result = measure(algo, &input).unwrap();
        println!("{} sorted 1M elements in {} ms", algo, result.elapsed_ms);

        assert_eq!(result.sorted.len(), count);
        // limited verification to save time
        for i in (0..count - 1).step_by(97) {
            assert!(result.sorted[i] <= result.sorted[i + 1], "{} failed at index {}", algo, i);
        }
    }
}

#[test]
fn test_quicksort_deep_reverse_input() {
    // Lomuto with a last-element pivot degrades to O(n^2) here; the stack
    // must still stay shallow.
    let count = 20_000;
    let mut data = generate(DatasetSpec::new(count, DatasetShape::Reverse));
    Algorithm::Quick.sort(&mut data, &mut Silent).unwrap();
    assert!(data.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(data[0], 1);
}

#[test]
#[ignore]
fn test_sort_100m() {
    // WARNING: needs roughly 2GB of RAM (input, sorted copy and buffers).
    let count = 100_000_000;
    println!("Generating {} partially sorted elements...", count);
    let input = generate(DatasetSpec::new(count, DatasetShape::PartiallySorted));

    for algo in [Algorithm::Radix, Algorithm::Heap] {
        let start = Instant::now();
        let result = measure(algo, &input).unwrap();
        println!(
            "{} sorted 100M elements in {} ms ({:?} overall)",
            algo,
            result.elapsed_ms,
            start.elapsed()
        );

        for i in (0..count - 1).step_by(10_000) {
            assert!(result.sorted[i] <= result.sorted[i + 1], "Sort failed at index {}", i);
        }
    }
}
