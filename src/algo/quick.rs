//! Quicksort with the Lomuto partition scheme.
//!
//! The pivot is the last element of the window. Every element smaller than
//! the pivot is swapped into the growing low partition (one step per swap,
//! self-swaps included), then the pivot is swapped into place (always one
//! step, even when it is already there).

use super::window;
use crate::core::{StepSink, Touched};
use crate::error::Result;

/// Sorts `data[left..=right]` in place.
///
/// # Examples
///
/// ```
/// use sortscope::algo::quick;
/// use sortscope::Silent;
///
/// let mut data = vec![5, 4, 3, 2, 1];
/// quick::sort(&mut data, 0, 4, &mut Silent).unwrap();
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn sort<T, S>(data: &mut [T], left: usize, right: usize, sink: &mut S) -> Result<()>
where
    T: Ord + Copy,
    S: StepSink<T> + ?Sized,
{
    if window(data.len(), left, right)? {
        quicksort(data, left, right, sink);
    }
    Ok(())
}

/// The two sub-windows left by a partition are independent. The smaller one
/// is recursed into and the larger one is handled by the loop, which keeps
/// the stack O(log n) deep on sorted and reversed input.
fn quicksort<T, S>(data: &mut [T], mut left: usize, mut right: usize, sink: &mut S)
where
    T: Ord + Copy,
    S: StepSink<T> + ?Sized,
{
    while left < right {
        let p = partition(data, left, right, sink);
        if p - left < right - p {
            if p > left {
                quicksort(data, left, p - 1, sink);
            }
            left = p + 1;
        } else {
            quicksort(data, p + 1, right, sink);
            // p > left here: p == left would force right - p > 0 = p - left.
            right = p - 1;
        }
    }
}

fn partition<T, S>(data: &mut [T], left: usize, right: usize, sink: &mut S) -> usize
where
    T: Ord + Copy,
    S: StepSink<T> + ?Sized,
{
    let pivot = data[right];
    let mut store = left;

    for i in left..right {
        if data[i] < pivot {
            data.swap(i, store);
            sink.step(data, Touched::pair(i, store));
            store += 1;
        }
    }

    data.swap(store, right);
    sink.step(data, Touched::pair(store, right));
    store
}
