//! Generator: the xorshift128+ core plus the distribution transforms
//!
//! One `Generator` owns one 128-bit state and one normal-sample cache.
//! Every transform draws from the same core step, so uniform floats, normals
//! and both integer strategies share a single stream.

use super::normal::NormalSampler;
use super::xorshift::{GeneratorState, Xorshift128Plus};

/// 2^-53, the weight of the lowest bit of a 53-bit mantissa draw
const F64_UNIT: f64 = 1.0 / ((1u64 << 53) as f64);

/// Largest `f32` strictly below one (1 - 2^-24)
const F32_BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Pseudo-random generator with uniform, normal and integer-range draws
///
/// # Example
/// ```
/// use xorshift_random_core_rs::Generator;
///
/// let mut rng = Generator::new();
/// let u = rng.uniform_float();
/// assert!(u >= 0.0 && u < 1.0);
///
/// let roll = rng.int_range_precise(1, 6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    core: Xorshift128Plus,
    normal: NormalSampler,
}

impl Generator {
    /// Create a generator seeded once from the environment.
    ///
    /// There is no re-seed operation; create a new `Generator` instead.
    pub fn new() -> Self {
        Self {
            core: Xorshift128Plus::from_entropy(),
            normal: NormalSampler::new(),
        }
    }

    /// Create a generator positioned at a fixed state.
    ///
    /// Two generators built from the same state produce the same sequence
    /// of draws.
    pub fn from_state(state: GeneratorState) -> Self {
        Self {
            core: Xorshift128Plus::from_state(state),
            normal: NormalSampler::new(),
        }
    }

    /// Current core state (the normal cache is not part of it)
    pub fn state(&self) -> GeneratorState {
        self.core.get_state()
    }

    /// Raw 64-bit output of the core step
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.core.next()
    }

    /// Uniform `f64` in [0, 1) with 53 random bits
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.core.next() >> 11) as f64 * F64_UNIT
    }

    /// Uniform `f32` in [0, 1). Never returns 1.0.
    ///
    /// The 53-bit draw is narrowed to `f32`; values close enough to one to
    /// round up are pinned to the largest `f32` below one.
    pub fn uniform_float(&mut self) -> f32 {
        Self::uniform_from(&mut self.core)
    }

    pub(crate) fn uniform_from(core: &mut Xorshift128Plus) -> f32 {
        let wide = (core.next() >> 11) as f64 * F64_UNIT;
        let narrow = wide as f32;
        if narrow >= 1.0 {
            F32_BELOW_ONE
        } else {
            narrow
        }
    }

    /// Normal deviate with the given mean and standard deviation.
    ///
    /// Uses the polar Box-Muller transform; every other call is served from
    /// a cached standard deviate, rescaled with that call's own parameters.
    /// `stddev == 0.0` always returns `mean`.
    pub fn normal(&mut self, mean: f32, stddev: f32) -> f32 {
        self.normal.sample(&mut self.core, mean, stddev)
    }

    /// True if the next `normal` call will be served from the cache
    pub fn has_cached_normal(&self) -> bool {
        self.normal.has_spare()
    }

    /// Integer in [min, max] via float scaling. Arguments may be in either order.
    ///
    /// Fast but biased: the `f32` draw carries only 24 bits, so ranges that
    /// do not divide its granularity evenly are slightly skewed, and ranges
    /// wider than 2^24 cannot reach every value. Use
    /// [`int_range_precise`](Self::int_range_precise) when uniformity matters.
    pub fn int_range_fast(&mut self, min: i64, max: i64) -> i64 {
        let (min, max) = ordered(min, max);
        let range = max as i128 - min as i128 + 1;

        let offset = (self.uniform_float() as f64 * range as f64).floor() as i128;
        (min as i128 + offset).min(max as i128) as i64
    }

    /// Integer in [min, max] with no modulo bias. Arguments may be in either order.
    ///
    /// Rejection-samples raw 64-bit draws below the largest multiple of the
    /// range. The full `i64` span wraps the range to zero and returns `min`.
    pub fn int_range_precise(&mut self, min: i64, max: i64) -> i64 {
        let (min, max) = ordered(min, max);
        let range = (max as u64).wrapping_sub(min as u64).wrapping_add(1);
        if range == 0 {
            return min;
        }

        let limit = u64::MAX - (u64::MAX % range);
        let accepted = loop {
            let r = self.core.next();
            if r < limit {
                break r;
            }
        };
        min.wrapping_add((accepted % range) as i64)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}
