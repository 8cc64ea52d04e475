//! Top-down mergesort.
//!
//! Each merge copies its two sorted halves into fresh buffers and writes the
//! result back one element at a time, one step per write. Ties take the left
//! element first, which makes the sort stable.

use super::window;
use crate::core::{StepSink, Touched};
use crate::error::Result;

/// Sorts `data[left..=right]`. Stable; uses O(n) auxiliary space.
pub fn sort<T, S>(data: &mut [T], left: usize, right: usize, sink: &mut S) -> Result<()>
where
    T: Ord + Copy,
    S: StepSink<T> + ?Sized,
{
    if window(data.len(), left, right)? {
        mergesort(data, left, right, sink);
    }
    Ok(())
}

fn mergesort<T, S>(data: &mut [T], left: usize, right: usize, sink: &mut S)
where
    T: Ord + Copy,
    S: StepSink<T> + ?Sized,
{
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    mergesort(data, left, mid, sink);
    mergesort(data, mid + 1, right, sink);
    merge(data, left, mid, right, sink);
}

fn merge<T, S>(data: &mut [T], left: usize, mid: usize, right: usize, sink: &mut S)
where
    T: Ord + Copy,
    S: StepSink<T> + ?Sized,
{
    let lo = data[left..=mid].to_vec();
    let hi = data[mid + 1..=right].to_vec();

    let (mut i, mut j) = (0, 0);
    for k in left..=right {
        // Take from the left run on ties, or once the right run is drained.
        let take_lo = j >= hi.len() || (i < lo.len() && lo[i] <= hi[j]);
        if take_lo {
            data[k] = lo[i];
            i += 1;
        } else {
            data[k] = hi[j];
            j += 1;
        }
        sink.step(data, Touched::one(k));
    }
}
