//! # Sortscope
//!
//! `sortscope` runs classical sorting algorithms over synthetic datasets,
//! exposes every intermediate state for visualization, and measures running
//! time and heap growth for comparison.
//!
//! ## Key Features
//!
//! - **Five algorithms**: quicksort, heapsort, mergesort, shellsort and LSD
//!   radix sort, all sorting an inclusive `[left, right]` window of a slice
//!   and selectable through [`Algorithm`].
//! - **Step instrumentation**: each swap, overwrite or copy-back is reported
//!   to a [`StepSink`] as a [`Step`] (a snapshot plus the touched indices).
//!   [`Instrumented`] forwards steps to a closure and can pause between them
//!   to drive an animation; [`Silent`] compiles away to nothing.
//! - **Dataset generation**: random, reverse and partially sorted inputs via
//!   [`generate`].
//! - **Performance harness**: [`measure`] sorts an isolated copy with
//!   instrumentation off and reports a [`PerformanceResult`].
//!
//! ## Usage
//!
//! ### Watching a sort
//!
//! ```rust
//! use sortscope::{generate, Algorithm, DatasetShape, DatasetSpec, Instrumented, Step};
//!
//! let mut data = generate(DatasetSpec::new(5, DatasetShape::Reverse));
//! assert_eq!(data, vec![5, 4, 3, 2, 1]);
//!
//! let mut frames = Vec::new();
//! let mut sink = Instrumented::new(|step: Step<u64>| frames.push(step));
//! Algorithm::Quick.sort(&mut data, &mut sink).unwrap();
//! drop(sink);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! assert_eq!(frames.last().unwrap().snapshot, data);
//! ```
//!
//! ### Measuring
//!
//! ```rust
//! use sortscope::{measure, Algorithm};
//!
//! let input = vec![170u64, 45, 75, 90, 802, 24, 2, 66];
//! let result = measure(Algorithm::Radix, &input).unwrap();
//!
//! assert_eq!(result.sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//! assert_eq!(input[0], 170); // the caller's data is untouched
//! ```
//!
//! ## Characteristics
//!
//! | Algorithm | Time (worst) | Extra space | Stable |
//! |-----------|--------------|-------------|--------|
//! | Quick     | O(n²)        | O(log n)    | no     |
//! | Heap      | O(n log n)   | O(1)        | no     |
//! | Merge     | O(n log n)   | O(n)        | yes    |
//! | Shell     | O(n²)        | O(1)        | no     |
//! | Radix     | O((n+10)·d)  | O(n)        | yes    |

pub mod algo;
pub mod analysis;
pub mod core;
pub mod dataset;
pub mod error;
pub mod perf;

pub use crate::algo::Algorithm;
pub use crate::analysis::{AnalysisConfig, RunRecord, Session};
pub use crate::core::{Instrumented, Pacer, RadixKey, Silent, SleepPacer, Step, StepSink, Touched, VirtualPacer};
pub use crate::dataset::{generate, generate_with, DatasetShape, DatasetSpec};
pub use crate::error::{Error, Result};
pub use crate::perf::{measure, Harness, PerformanceResult};

pub mod prelude {
    pub use crate::algo::Algorithm;
    pub use crate::core::{Instrumented, RadixKey, Silent, Step, StepSink};
    pub use crate::dataset::{generate, DatasetShape, DatasetSpec};
    pub use crate::perf::measure;
}
