//! The instrumented sorting algorithms.
//!
//! Every algorithm sorts the inclusive window `[left, right]` of a slice and
//! reports its progress through a [`StepSink`]:
//! - [`quick`]: Lomuto-partition quicksort, in place.
//! - [`heap`]: max-heap sort, in place.
//! - [`merge`]: top-down mergesort with per-merge buffers, stable.
//! - [`shell`]: shellsort with the halving gap sequence, in place.
//! - [`radix`]: LSD base-10 radix sort with an output buffer, stable.
//!
//! [`Algorithm`] selects one of them by its symbolic key.

pub mod heap;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod shell;

use crate::core::{RadixKey, StepSink};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Checks a window against a slice of length `len`.
///
/// Returns `Ok(false)` for the base case (`left >= right`), which needs no
/// work and emits no step, and `Ok(true)` when the window must be sorted.
#[inline]
pub(crate) fn window(len: usize, left: usize, right: usize) -> Result<bool> {
    if left >= right {
        return Ok(false);
    }
    if right >= len {
        return Err(Error::WindowOutOfBounds { left, right, len });
    }
    Ok(true)
}

/// The five sorting algorithms, selectable by key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Quick,
    Heap,
    Merge,
    Shell,
    Radix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Shell,
        Algorithm::Radix,
    ];

    /// The symbolic key: `quick`, `heap`, `merge`, `shell` or `radix`.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
            Algorithm::Shell => "shell",
            Algorithm::Radix => "radix",
        }
    }

    /// The display label, e.g. `"Quick Sort"`.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Radix => "Radix Sort",
        }
    }

    /// Whether equal values keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge | Algorithm::Radix)
    }

    /// Whether the algorithm works without an auxiliary buffer.
    pub fn is_in_place(self) -> bool {
        !matches!(self, Algorithm::Merge | Algorithm::Radix)
    }

    /// Sorts the inclusive window `[left, right]` of `data`.
    ///
    /// `left >= right` is a no-op that emits nothing. A non-trivial window
    /// must lie inside `data`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortscope::{Algorithm, Silent};
    ///
    /// let mut data = vec![5u32, 4, 3, 2, 1];
    /// Algorithm::Quick.sort_window(&mut data, 1, 3, &mut Silent).unwrap();
    /// assert_eq!(data, vec![5, 2, 3, 4, 1]);
    /// ```
    pub fn sort_window<T, S>(self, data: &mut [T], left: usize, right: usize, sink: &mut S) -> Result<()>
    where
        T: RadixKey,
        S: StepSink<T> + ?Sized,
    {
        match self {
            Algorithm::Quick => quick::sort(data, left, right, sink),
            Algorithm::Heap => heap::sort(data, left, right, sink),
            Algorithm::Merge => merge::sort(data, left, right, sink),
            Algorithm::Shell => shell::sort(data, left, right, sink),
            Algorithm::Radix => radix::sort(data, left, right, sink),
        }
    }

    /// Sorts the whole of `data`. Empty and single-element slices are
    /// already sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortscope::{Algorithm, Silent};
    ///
    /// let mut data = vec![170u64, 45, 75, 90, 802, 24, 2, 66];
    /// Algorithm::Radix.sort(&mut data, &mut Silent).unwrap();
    /// assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    /// ```
    pub fn sort<T, S>(self, data: &mut [T], sink: &mut S) -> Result<()>
    where
        T: RadixKey,
        S: StepSink<T> + ?Sized,
    {
        match data.len() {
            0 | 1 => Ok(()),
            len => self.sort_window(data, 0, len - 1, sink),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
