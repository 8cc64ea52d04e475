//! LSD radix sort in base 10.
//!
//! Each digit pass is a stable counting sort:
//! 1. Counts how many keys carry each digit at the current place value.
//! 2. Turns the counts into cumulative end positions.
//! 3. Places keys into an output buffer walking the window back to front,
//!    which keeps equal digits in their previous order.
//! 4. Copies the buffer back into the window, one step per element.
//!
//! Passes continue while the window maximum still has digits left. At least
//! one pass always runs, so an all-zero window still reports its progress.

use super::window;
use crate::core::{RadixKey, StepSink, Touched};
use crate::error::{Error, Result};
use cuneiform::cuneiform;

/// Number of buckets per digit pass.
const RADIX: usize = 10;

// Cache-aligned digit counts.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX],
}

/// Sorts `data[left..=right]` by decimal digits. Stable.
///
/// Every key in the window must have a non-negative [`RadixKey`]; otherwise
/// [`Error::NegativeKey`] is returned before anything is moved.
///
/// # Examples
///
/// ```
/// use sortscope::algo::radix;
/// use sortscope::Silent;
///
/// let mut data = vec![170u32, 45, 75, 90, 802, 24, 2, 66];
/// radix::sort(&mut data, 0, 7, &mut Silent).unwrap();
/// assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn sort<T, S>(data: &mut [T], left: usize, right: usize, sink: &mut S) -> Result<()>
where
    T: RadixKey,
    S: StepSink<T> + ?Sized,
{
    if !window(data.len(), left, right)? {
        return Ok(());
    }

    let max = max_key(&data[left..=right], left)?;

    let mut exp: u64 = 1;
    loop {
        counting_pass(data, left, right, exp, sink);
        if max / exp < RADIX as u64 {
            break;
        }
        match exp.checked_mul(RADIX as u64) {
            Some(next) => exp = next,
            None => break,
        }
    }

    Ok(())
}

/// Largest key in `window`; `offset` maps window positions back to indices
/// of the full slice for error reporting.
fn max_key<T: RadixKey>(window: &[T], offset: usize) -> Result<u64> {
    window.iter().enumerate().try_fold(0u64, |max, (i, v)| {
        v.radix_key()
            .map(|k| max.max(k))
            .ok_or(Error::NegativeKey { index: offset + i })
    })
}

#[inline(always)]
fn digit<T: RadixKey>(value: &T, exp: u64) -> usize {
    // Keys were validated by `max_key` before the first pass.
    let key = value.radix_key().unwrap_or(0);
    ((key / exp) % RADIX as u64) as usize
}

fn counting_pass<T, S>(data: &mut [T], left: usize, right: usize, exp: u64, sink: &mut S)
where
    T: RadixKey,
    S: StepSink<T> + ?Sized,
{
    let mut counts = DigitCounts { data: [0; RADIX] };
    let counts = &mut counts.data;

    data[left..=right]
        .iter()
        .for_each(|v| counts[digit(v, exp)] += 1);

    for d in 1..RADIX {
        counts[d] += counts[d - 1];
    }

    let mut output = data[left..=right].to_vec();
    for v in data[left..=right].iter().rev() {
        let d = digit(v, exp);
        counts[d] -= 1;
        output[counts[d]] = *v;
    }

    for (i, v) in output.into_iter().enumerate() {
        data[left + i] = v;
        sink.step(data, Touched::one(left + i));
    }
}
