//! Performance measurement.
//!
//! [`measure`] sorts a private copy of its input with instrumentation off and
//! reports elapsed time plus the heap bytes allocated while sorting.
//!
//! Heap usage is only observable when the process installs
//! [`TrackingAllocator`] as its global allocator:
//!
//! ```
//! use sortscope::perf::TrackingAllocator;
//!
//! #[global_allocator]
//! static ALLOC: TrackingAllocator = TrackingAllocator;
//! # fn main() {}
//! ```
//!
//! Without it the memory delta is reported as `0`.

use crate::algo::Algorithm;
use crate::core::{RadixKey, Silent};
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Bytes allocated since startup; never decreases.
static ALLOC_BYTES: AtomicU64 = AtomicU64::new(0);
/// Bytes currently allocated.
static LIVE_BYTES: AtomicU64 = AtomicU64::new(0);
static TRACKING: AtomicBool = AtomicBool::new(false);

#[inline(always)]
fn record_alloc(size: usize) {
    ALLOC_BYTES.fetch_add(size as u64, Ordering::Relaxed);
    LIVE_BYTES.fetch_add(size as u64, Ordering::Relaxed);
    if !TRACKING.load(Ordering::Relaxed) {
        TRACKING.store(true, Ordering::Relaxed);
    }
}

/// A [`System`] allocator that counts allocated and live heap bytes.
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// Total bytes allocated so far, freed or not.
    pub fn allocated_bytes() -> u64 {
        ALLOC_BYTES.load(Ordering::Relaxed)
    }

    /// Bytes allocated and not yet freed.
    pub fn live_bytes() -> u64 {
        LIVE_BYTES.load(Ordering::Relaxed)
    }
}

// SAFETY: every method delegates to `System` with the caller's pointer and
// layout unchanged and only updates counters, so the `GlobalAlloc` layout and
// size contracts are those of `System`.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        LIVE_BYTES.fetch_sub(layout.size() as u64, Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            // Only growth counts as newly allocated.
            record_alloc(new_size.saturating_sub(layout.size()));
            LIVE_BYTES.fetch_sub(layout.size().saturating_sub(new_size) as u64, Ordering::Relaxed);
        }
        new_ptr
    }
}

/// Reports a heap usage counter, if the host can tell.
///
/// The harness reports the difference between two readings taken around a
/// sort, clamped at zero.
pub trait MemoryProbe {
    fn heap_bytes(&self) -> Option<u64>;
}

/// Reads the allocated-bytes counter of [`TrackingAllocator`], so buffers a
/// sort frees before finishing still show up in its delta. Returns `None`
/// when the tracking allocator is not the global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllocatorProbe;

impl MemoryProbe for AllocatorProbe {
    fn heap_bytes(&self) -> Option<u64> {
        TRACKING
            .load(Ordering::Relaxed)
            .then(TrackingAllocator::allocated_bytes)
    }
}

/// A probe for hosts without heap introspection.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMemoryProbe;

impl MemoryProbe for NoMemoryProbe {
    fn heap_bytes(&self) -> Option<u64> {
        None
    }
}

/// The outcome of one measured sort.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResult<T> {
    /// Wall-clock time of the sort in milliseconds, rounded to 4 decimals.
    pub elapsed_ms: f64,
    /// Heap bytes allocated during the sort, clamped at zero. Exactly
    /// zero when no memory probe is available.
    pub memory_delta_bytes: u64,
    /// The sorted copy of the input.
    pub sorted: Vec<T>,
}

/// Runs algorithms without instrumentation and records their cost.
#[derive(Clone, Debug, Default)]
pub struct Harness<M = AllocatorProbe> {
    probe: M,
}

impl<M: MemoryProbe> Harness<M> {
    pub fn new(probe: M) -> Self {
        Self { probe }
    }

    /// Sorts a copy of `sequence` with `algorithm`; `sequence` itself is
    /// never modified. A sort error is returned as is, with no partial result.
    pub fn measure<T: RadixKey>(&self, algorithm: Algorithm, sequence: &[T]) -> Result<PerformanceResult<T>> {
        let mut sorted = sequence.to_vec();

        let start_memory = self.probe.heap_bytes();
        let start = Instant::now();

        algorithm.sort(&mut sorted, &mut Silent)?;

        let elapsed = start.elapsed();
        let end_memory = self.probe.heap_bytes();

        let memory_delta_bytes = match (start_memory, end_memory) {
            (Some(before), Some(after)) => after.saturating_sub(before),
            _ => 0,
        };
        let elapsed_ms = round_ms(elapsed.as_secs_f64() * 1000.0);

        debug!(
            "{} sorted {} values in {} ms, heap delta {} bytes{}",
            algorithm,
            sorted.len(),
            elapsed_ms,
            memory_delta_bytes,
            if start_memory.is_some() { "" } else { " (no memory probe)" }
        );

        Ok(PerformanceResult {
            elapsed_ms,
            memory_delta_bytes,
            sorted,
        })
    }
}

/// Measures `algorithm` on a copy of `sequence` with the default probe.
///
/// # Examples
///
/// ```
/// use sortscope::{measure, Algorithm};
///
/// let input = vec![3u64, 1, 2];
/// let result = measure(Algorithm::Heap, &input).unwrap();
/// assert_eq!(result.sorted, vec![1, 2, 3]);
/// assert_eq!(input, vec![3, 1, 2]);
/// assert!(result.elapsed_ms >= 0.0);
/// ```
pub fn measure<T: RadixKey>(algorithm: Algorithm, sequence: &[T]) -> Result<PerformanceResult<T>> {
    Harness::new(AllocatorProbe).measure(algorithm, sequence)
}

fn round_ms(ms: f64) -> f64 {
    (ms * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeProbe(std::cell::Cell<u64>, i64);

    impl MemoryProbe for FakeProbe {
        fn heap_bytes(&self) -> Option<u64> {
            let now = self.0.get();
            self.0.set(now.saturating_add_signed(self.1));
            Some(now)
        }
    }

    #[test]
    fn shrinking_heap_clamps_to_zero() {
        let harness = Harness::new(FakeProbe(std::cell::Cell::new(4096), -1024));
        let result = harness.measure(Algorithm::Merge, &[2u8, 1]).unwrap();
        assert_eq!(result.memory_delta_bytes, 0);
    }

    #[test]
    fn growing_heap_is_reported() {
        let harness = Harness::new(FakeProbe(std::cell::Cell::new(0), 512));
        let result = harness.measure(Algorithm::Radix, &[2u8, 1]).unwrap();
        assert_eq!(result.memory_delta_bytes, 512);
    }

    #[test]
    fn rounds_to_four_decimals() {
        assert_eq!(round_ms(1.234_567), 1.2346);
        assert_eq!(round_ms(0.0), 0.0);
    }
}
