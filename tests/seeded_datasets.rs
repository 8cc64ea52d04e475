use rand::SeedableRng;
use rand::rngs::StdRng;
use sortscope::prelude::*;
use sortscope::generate_with;

const SIZES: [usize; 5] = [0, 1, 2, 100, 1000];

fn sorted_copy(data: &[u64]) -> Vec<u64> {
    let mut expected = data.to_vec();
    expected.sort();
    expected
}

#[test]
fn test_every_shape_and_size() {
    let mut rng = StdRng::seed_from_u64(42);

    for shape in DatasetShape::ALL {
        for size in SIZES {
            let input = generate_with(DatasetSpec::new(size, shape), &mut rng);
            assert_eq!(input.len(), size);
            let expected = sorted_copy(&input);

            for algo in Algorithm::ALL {
                let mut data = input.clone();
                algo.sort(&mut data, &mut Silent).unwrap();

                if data != expected {
                    // Find first mismatch
                    for (i, (a, b)) in data.iter().zip(expected.iter()).enumerate() {
                        if a != b {
                            panic!("{algo} on {shape} x{size}: mismatch at {i}, got {a}, expected {b}");
                        }
                    }
                    panic!("{algo} on {shape} x{size}: lengths differ");
                }
            }
        }
    }
}

#[test]
fn test_sorting_twice_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(7);

    for shape in DatasetShape::ALL {
        let input = generate_with(DatasetSpec::new(1000, shape), &mut rng);
        for algo in Algorithm::ALL {
            let mut once = input.clone();
            algo.sort(&mut once, &mut Silent).unwrap();
            let mut twice = once.clone();
            algo.sort(&mut twice, &mut Silent).unwrap();
            assert_eq!(once, twice, "{algo} on {shape}");
        }
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    for shape in DatasetShape::ALL {
        let spec = DatasetSpec::new(256, shape);
        let a = generate_with(spec, &mut StdRng::seed_from_u64(1357));
        let b = generate_with(spec, &mut StdRng::seed_from_u64(1357));
        assert_eq!(a, b);
    }
}

#[test]
fn test_shape_value_ranges() {
    let random = generate(DatasetSpec::new(100, DatasetShape::Random));
    assert!(random.iter().all(|&v| v < 1000));

    let reverse = generate(DatasetSpec::new(100, DatasetShape::Reverse));
    assert_eq!(reverse.first(), Some(&100));
    assert_eq!(reverse.last(), Some(&1));

    let mut partial = generate(DatasetSpec::new(100, DatasetShape::PartiallySorted));
    partial.sort();
    assert_eq!(partial, (0..100).collect::<Vec<u64>>());
}
