use sortscope::perf::{Harness, NoMemoryProbe};
use sortscope::prelude::*;
use sortscope::{AnalysisConfig, Error, PerformanceResult, RunRecord, Session, VirtualPacer};
use std::time::Duration;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_measure_heap_small() {
    init_logger();
    let input = vec![3u64, 1, 2];
    let result = measure(Algorithm::Heap, &input).unwrap();

    assert_eq!(result.sorted, vec![1, 2, 3]);
    assert!(result.elapsed_ms >= 0.0);
    // No tracking allocator in this test binary.
    assert_eq!(result.memory_delta_bytes, 0);
    assert_eq!(input, vec![3, 1, 2]);
}

#[test]
fn test_measure_uses_the_selected_algorithm() {
    // Radix is the only algorithm that rejects negative keys, so an error
    // proves the requested algorithm ran.
    let input = vec![4i32, -1, 3];
    assert_eq!(
        measure(Algorithm::Radix, &input),
        Err(Error::NegativeKey { index: 1 })
    );
    assert_eq!(measure(Algorithm::Quick, &input).unwrap().sorted, vec![-1, 3, 4]);
}

#[test]
fn test_measure_every_algorithm_on_every_shape() {
    init_logger();
    let harness = Harness::new(NoMemoryProbe);
    for shape in DatasetShape::ALL {
        let input = generate(DatasetSpec::new(1000, shape));
        let mut expected = input.clone();
        expected.sort();

        for algo in Algorithm::ALL {
            let result = harness.measure(algo, &input).unwrap();
            assert_eq!(result.sorted, expected, "{algo} on {shape}");
            assert_eq!(result.memory_delta_bytes, 0);
        }
    }
}

#[test]
fn test_result_field_names() {
    let result = PerformanceResult {
        elapsed_ms: 1.5,
        memory_delta_bytes: 0,
        sorted: vec![1u64, 2],
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "elapsedMs": 1.5, "memoryDeltaBytes": 0, "sorted": [1, 2] })
    );
}

#[test]
fn test_spec_and_record_serialization() {
    let spec: DatasetSpec = serde_json::from_str(r#"{"size": 10, "shape": "partiallySorted"}"#).unwrap();
    assert_eq!(spec, DatasetSpec::new(10, DatasetShape::PartiallySorted));

    let record = RunRecord {
        algorithm: Algorithm::Shell,
        size: 10,
        shape: DatasetShape::Reverse,
        elapsed_ms: 0.25,
        memory_delta_bytes: 2048,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["algorithm"], "shell");
    assert_eq!(json["shape"], "reverse");
    assert_eq!(json["memoryDeltaBytes"], 2048);
    assert_eq!(record.memory_kib(), 2.0);
}

#[test]
fn test_session_run_flow() {
    init_logger();
    let config = AnalysisConfig {
        visualize_max_size: 200,
        step_delay_ms: 30,
    };
    let mut session = Session::with_parts(config, VirtualPacer::default(), Harness::new(NoMemoryProbe));

    let data = generate(DatasetSpec::new(50, DatasetShape::Random));
    let mut frames = 0usize;
    let result = session
        .run(Algorithm::Merge, DatasetShape::Random, &data, |_| frames += 1)
        .unwrap()
        .unwrap();

    let mut expected = data.clone();
    expected.sort();
    assert_eq!(result.sorted, expected);
    assert!(frames > 0);
    assert_eq!(session.pacer().pauses, frames);
    assert_eq!(session.pacer().elapsed, Duration::from_millis(30) * frames as u32);

    let big = generate(DatasetSpec::new(500, DatasetShape::Reverse));
    session
        .run(Algorithm::Merge, DatasetShape::Reverse, &big, |_| panic!("no animation above the threshold"))
        .unwrap();

    assert_eq!(session.history().len(), 2);
    assert_eq!(session.latest(Algorithm::Merge, 500).map(|r| r.shape), Some(DatasetShape::Reverse));
}
