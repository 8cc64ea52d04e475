//! Analysis runs: an optional animated pass followed by a measured pass,
//! with a history of results for comparison.

use crate::algo::Algorithm;
use crate::core::{Instrumented, Pacer, SleepPacer, Step};
use crate::dataset::DatasetShape;
use crate::error::Result;
use crate::perf::{AllocatorProbe, Harness, MemoryProbe, PerformanceResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for [`Session`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest input that still gets an animated pass.
    pub visualize_max_size: usize,
    /// Pause after each animated step, in milliseconds.
    pub step_delay_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            visualize_max_size: 200,
            step_delay_ms: 30,
        }
    }
}

impl AnalysisConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

/// One measured run, as kept in the session history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub algorithm: Algorithm,
    pub size: usize,
    pub shape: DatasetShape,
    pub elapsed_ms: f64,
    pub memory_delta_bytes: u64,
}

impl RunRecord {
    pub fn memory_kib(&self) -> f64 {
        self.memory_delta_bytes as f64 / 1024.0
    }
}

/// Drives analysis runs and keeps their history.
pub struct Session<P = SleepPacer, M = AllocatorProbe> {
    config: AnalysisConfig,
    pacer: P,
    harness: Harness<M>,
    history: Vec<RunRecord>,
}

impl Session {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_parts(config, SleepPacer, Harness::new(AllocatorProbe))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl<P: Pacer, M: MemoryProbe> Session<P, M> {
    pub fn with_parts(config: AnalysisConfig, pacer: P, harness: Harness<M>) -> Self {
        Self {
            config,
            pacer,
            harness,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Analyzes `algorithm` on `data`.
    ///
    /// Inputs no larger than `visualize_max_size` are first sorted on a
    /// private copy with every step forwarded to `observer`, pausing
    /// `step_delay_ms` after each. Then the algorithm is measured on its own
    /// copy and the result is appended to the history. `data` is left as is.
    ///
    /// Empty input is skipped and returns `Ok(None)`.
    pub fn run<F>(
        &mut self,
        algorithm: Algorithm,
        shape: DatasetShape,
        data: &[u64],
        observer: F,
    ) -> Result<Option<PerformanceResult<u64>>>
    where
        F: FnMut(Step<u64>),
    {
        if data.is_empty() {
            return Ok(None);
        }

        if data.len() <= self.config.visualize_max_size {
            let mut animated = data.to_vec();
            let mut sink = Instrumented::with_pacer(observer, self.config.step_delay(), &mut self.pacer);
            algorithm.sort(&mut animated, &mut sink)?;
            info!("{} animated {} steps", algorithm, sink.emitted());
        }

        let result = self.harness.measure(algorithm, data)?;
        info!(
            "{} on {} {} values: {} ms, {} bytes",
            algorithm,
            data.len(),
            shape,
            result.elapsed_ms,
            result.memory_delta_bytes
        );

        self.history.push(RunRecord {
            algorithm,
            size: data.len(),
            shape,
            elapsed_ms: result.elapsed_ms,
            memory_delta_bytes: result.memory_delta_bytes,
        });

        Ok(Some(result))
    }

    pub fn history(&self) -> &[RunRecord] {
        &self.history
    }

    /// The most recent run of `algorithm` on an input of `size` values.
    pub fn latest(&self, algorithm: Algorithm, size: usize) -> Option<&RunRecord> {
        self.history
            .iter()
            .rev()
            .find(|r| r.algorithm == algorithm && r.size == size)
    }

    /// The most recent run of every algorithm at `size`, in
    /// [`Algorithm::ALL`] order.
    pub fn comparison(&self, size: usize) -> [(Algorithm, Option<&RunRecord>); 5] {
        Algorithm::ALL.map(|a| (a, self.latest(a, size)))
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
