//! Heapsort over a window.
//!
//! Heap positions are relative to `left`, so the window behaves like a
//! standalone slice. Every swap, in both the build and the extraction phase,
//! emits one step.

use super::window;
use crate::core::{StepSink, Touched};
use crate::error::Result;

/// Sorts `data[left..=right]` in place. Not stable.
pub fn sort<T, S>(data: &mut [T], left: usize, right: usize, sink: &mut S) -> Result<()>
where
    T: Ord + Copy,
    S: StepSink<T> + ?Sized,
{
    if !window(data.len(), left, right)? {
        return Ok(());
    }

    let n = right - left + 1;

    // Build the max-heap from the last internal node down to the root.
    for i in (0..n / 2).rev() {
        sift_down(data, left, n, i, sink);
    }

    // Move the current maximum behind the shrinking heap.
    for end in (1..n).rev() {
        data.swap(left, left + end);
        sink.step(data, Touched::pair(left, left + end));
        sift_down(data, left, end, 0, sink);
    }

    Ok(())
}

/// Restores the heap property below `root` for a heap of `heap_len`
/// elements starting at `offset`.
fn sift_down<T, S>(data: &mut [T], offset: usize, heap_len: usize, mut root: usize, sink: &mut S)
where
    T: Ord + Copy,
    S: StepSink<T> + ?Sized,
{
    loop {
        let l = 2 * root + 1;
        let r = l + 1;
        let mut largest = root;

        if l < heap_len && data[offset + l] > data[offset + largest] {
            largest = l;
        }
        if r < heap_len && data[offset + r] > data[offset + largest] {
            largest = r;
        }
        if largest == root {
            return;
        }

        data.swap(offset + root, offset + largest);
        sink.step(data, Touched::pair(offset + root, offset + largest));
        root = largest;
    }
}
