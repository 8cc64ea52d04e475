//! Shellsort with the gap sequence n/2, n/4, ..., 1.
//!
//! Each gap runs an insertion sort over elements `gap` apart. A shift emits
//! a step touching both positions; the final placement of the carried value
//! emits a step touching its slot, even when it did not move.

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
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let carried = data[left + i];
            let mut j = i;
            while j >= gap && data[left + j - gap] > carried {
                data[left + j] = data[left + j - gap];
                sink.step(data, Touched::pair(left + j, left + j - gap));
                j -= gap;
            }
            data[left + j] = carried;
            sink.step(data, Touched::one(left + j));
        }
        gap /= 2;
    }

    Ok(())
}
