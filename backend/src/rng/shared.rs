//! Process-wide shared generator
//!
//! One [`Generator`] serves every free-function entry point. It is created
//! and seeded exactly once, on first use, and lives for the rest of the
//! process. Draws lock a `Mutex`, so concurrent callers are serialized and
//! always see one coherent stream.
//!
//! Code that wants lock-free draws should own a [`Generator`] instead.

use std::sync::{Mutex, OnceLock};

use super::Generator;

static SHARED: OnceLock<Mutex<Generator>> = OnceLock::new();

/// Run `f` with exclusive access to the shared generator.
///
/// Seeds the generator on the first call in the process.
///
/// # Example
/// ```
/// use xorshift_random_core_rs::rng::shared;
///
/// let (a, b) = shared::with_shared(|rng| (rng.uniform_float(), rng.uniform_float()));
/// assert!(a < 1.0 && b < 1.0);
/// ```
pub fn with_shared<R>(f: impl FnOnce(&mut Generator) -> R) -> R {
    let lock = SHARED.get_or_init(|| Mutex::new(Generator::new()));
    // A panic inside `f` cannot leave the state half-stepped
    let mut guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut *guard)
}

/// Uniform `f32` in [0, 1) from the shared generator
pub fn uniform_float() -> f32 {
    with_shared(|rng| rng.uniform_float())
}

/// Normal deviate from the shared generator
///
/// The spare Box-Muller deviate is process-wide: it may be consumed by any
/// caller's next `normal` call.
pub fn normal(mean: f32, stddev: f32) -> f32 {
    with_shared(|rng| rng.normal(mean, stddev))
}

/// Integer in [min, max] from the shared generator (fast, biased)
pub fn int_range_fast(min: i64, max: i64) -> i64 {
    with_shared(|rng| rng.int_range_fast(min, max))
}

/// Integer in [min, max] from the shared generator (unbiased)
pub fn int_range_precise(min: i64, max: i64) -> i64 {
    with_shared(|rng| rng.int_range_precise(min, max))
}
