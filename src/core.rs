//! Core traits and types for sortscope.
//!
//! This module defines:
//! - [`Step`] and [`Touched`]: one observable unit of sorting progress.
//! - [`StepSink`]: the channel every algorithm reports progress through,
//!   with the [`Silent`] and [`Instrumented`] implementations.
//! - [`Pacer`]: the suspension point used between animated steps.
//! - [`RadixKey`]: digit access for radix sort.

use log::trace;
use std::time::Duration;

/// The positions written to produce a [`Step`] snapshot.
///
/// A swap touches two positions, a single overwrite touches one. A swap of a
/// position with itself is reported as a single position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Touched {
    indices: [usize; 2],
    len: u8,
}

impl Touched {
    /// A single overwritten position.
    #[inline]
    pub fn one(index: usize) -> Self {
        Self {
            indices: [index, index],
            len: 1,
        }
    }

    /// Two exchanged positions, collapsed to one if they coincide.
    #[inline]
    pub fn pair(a: usize, b: usize) -> Self {
        if a == b {
            Self::one(a)
        } else {
            Self {
                indices: [a, b],
                len: 2,
            }
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `false`: a `Touched` holds one or two indices.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }
}

/// A point-in-time observation of a running sort.
///
/// `snapshot` is an owned copy of the entire slice handed to the sort, taken
/// right after the write described by `touched`. The algorithm keeps
/// mutating its own storage, never the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step<T> {
    pub snapshot: Vec<T>,
    pub touched: Touched,
}

/// Receives progress from a sorting algorithm.
///
/// Algorithms call [`StepSink::step`] synchronously, in program order, right
/// after each swap, overwrite or copy-back. A sink must not influence the
/// result of the sort.
pub trait StepSink<T> {
    fn step(&mut self, data: &[T], touched: Touched);
}

impl<T, S: StepSink<T> + ?Sized> StepSink<T> for &mut S {
    #[inline(always)]
    fn step(&mut self, data: &[T], touched: Touched) {
        (**self).step(data, touched)
    }
}

/// A sink that drops every step without copying anything.
///
/// This is what the performance harness runs with, so measurements contain
/// no instrumentation cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<T> StepSink<T> for Silent {
    #[inline(always)]
    fn step(&mut self, _data: &[T], _touched: Touched) {}
}

/// Suspends the running sort between animated steps.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, delay: Duration) {
        (**self).pause(delay)
    }
}

/// Blocks the calling thread for the requested delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Records pauses on a virtual clock instead of sleeping.
///
/// Useful for deterministic tests of animated runs at zero wall-clock cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VirtualPacer {
    pub elapsed: Duration,
    pub pauses: usize,
}

impl Pacer for VirtualPacer {
    fn pause(&mut self, delay: Duration) {
        self.elapsed += delay;
        self.pauses += 1;
    }
}

/// A sink that forwards an owned [`Step`] to an observer closure and then
/// pauses for `delay` when it is non-zero.
pub struct Instrumented<F, P = SleepPacer> {
    observer: F,
    delay: Duration,
    pacer: P,
    emitted: usize,
}

impl<F> Instrumented<F, SleepPacer> {
    /// Observes every step without pausing.
    pub fn new(observer: F) -> Self {
        Self::with_pacer(observer, Duration::ZERO, SleepPacer)
    }

    /// Observes every step and sleeps for `delay` after each one.
    pub fn animated(observer: F, delay: Duration) -> Self {
        Self::with_pacer(observer, delay, SleepPacer)
    }
}

impl<F, P> Instrumented<F, P> {
    pub fn with_pacer(observer: F, delay: Duration, pacer: P) -> Self {
        Self {
            observer,
            delay,
            pacer,
            emitted: 0,
        }
    }

    /// Number of steps forwarded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn into_pacer(self) -> P {
        self.pacer
    }
}

impl<T, F, P> StepSink<T> for Instrumented<F, P>
where
    T: Clone,
    F: FnMut(Step<T>),
    P: Pacer,
{
    fn step(&mut self, data: &[T], touched: Touched) {
        self.emitted += 1;
        trace!("step {}: touched {:?}", self.emitted, touched.as_slice());
        (self.observer)(Step {
            snapshot: data.to_vec(),
            touched,
        });
        if !self.delay.is_zero() {
            self.pacer.pause(self.delay);
        }
    }
}

/// A value radix sort can split into decimal digits.
///
/// Returns `None` for values that have no non-negative key (negative signed
/// integers); radix sort rejects those instead of guessing at their digits.
///
/// # Examples
///
/// Implementing for a custom record keyed by a score:
///
/// ```
/// use sortscope::core::RadixKey;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u32);
///
/// impl RadixKey for Score {
///     fn radix_key(&self) -> Option<u64> {
///         Some(u64::from(self.0))
///     }
/// }
/// ```
pub trait RadixKey: Ord + Copy {
    fn radix_key(&self) -> Option<u64>;
}

macro_rules! impl_unsigned_key {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline(always)]
                fn radix_key(&self) -> Option<u64> {
                    Some(*self as u64)
                }
            }
        )*
    };
}

macro_rules! impl_signed_key {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline(always)]
                fn radix_key(&self) -> Option<u64> {
                    u64::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_unsigned_key!(u8, u16, u32, u64, usize);
impl_signed_key!(i8, i16, i32, i64, isize);
