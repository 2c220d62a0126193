use std::fmt;
use std::ops::Mul;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::{CombinatorError, Result};

// =============================================================================
// Milestone 1: Counter owns its state, exposes one call
// =============================================================================

/// Stateful counter: each `call` returns the current value, then advances it
/// by `step`. The value is private; callers only ever see what `call` returns.
///
/// Arithmetic saturates at the `i64` bounds, so the sequence stays monotonic
/// and never wraps. Neither `Clone` nor `Debug` exposes the current value.
pub struct Counter {
    current: i64,
    step: i64,
}

impl Counter {
    fn new(start: i64, step: i64) -> Self {
        log::debug!("counter created: start={start}, step={step}");
        Counter {
            current: start,
            step,
        }
    }

    pub fn call(&mut self) -> i64 {
        let value = self.current;
        self.current = self.current.saturating_add(self.step);
        value
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}

/// Never returns `None`; bound it with `take` or similar.
impl Iterator for Counter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.call())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

pub fn make_counter(start: i64, step: i64) -> Counter {
    Counter::new(start, step)
}

/// Closure form of [`make_counter`]: the counter is moved into the closure.
pub fn make_counter_fn(start: i64, step: i64) -> impl FnMut() -> i64 {
    let mut counter = Counter::new(start, step);
    move || counter.call()
}

// =============================================================================
// Milestone 2: Validated construction
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterPolicy {
    pub allow_negative_step: bool,
    pub allow_zero_step: bool,
}

impl Default for CounterPolicy {
    fn default() -> Self {
        CounterPolicy {
            allow_negative_step: true,
            allow_zero_step: false,
        }
    }
}

impl CounterPolicy {
    pub fn build(&self, start: i64, step: i64) -> Result<Counter> {
        if step == 0 && !self.allow_zero_step {
            return Err(CombinatorError::invalid_argument(
                "step",
                "a zero step never advances the counter",
            ));
        }
        if step < 0 && !self.allow_negative_step {
            return Err(CombinatorError::invalid_argument(
                "step",
                format!("negative step {step} is not allowed"),
            ));
        }
        Ok(Counter::new(start, step))
    }
}

// =============================================================================
// Milestone 3: One counter, many threads
// =============================================================================

/// Cloneable handle to a single mutex-guarded [`Counter`]. Every clone draws
/// from the same sequence; the read-then-advance happens under the lock.
#[derive(Clone)]
pub struct SharedCounter {
    inner: Arc<Mutex<Counter>>,
}

impl SharedCounter {
    pub fn new(start: i64, step: i64) -> Self {
        Counter::new(start, step).into()
    }

    pub fn call(&self) -> i64 {
        let mut counter = self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("shared counter lock was poisoned, recovering");
            poisoned.into_inner()
        });
        counter.call()
    }
}

impl fmt::Debug for SharedCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCounter")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

impl From<Counter> for SharedCounter {
    fn from(counter: Counter) -> Self {
        SharedCounter {
            inner: Arc::new(Mutex::new(counter)),
        }
    }
}

// =============================================================================
// Milestone 4: Capturing an immutable value
// =============================================================================

pub fn make_multiplier<T>(multiplier: T) -> impl Fn(T) -> T
where
    T: Mul<Output = T> + Copy,
{
    move |input| input * multiplier
}
