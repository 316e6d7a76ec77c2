//! xorshift128+ bit generator
//!
//! Fast shift/XOR generator over two 64-bit words with a final additive mix.
//! The addition is what separates xorshift128+ from plain xorshift128 and
//! gives it noticeably better statistical quality in the low bits.
//!
//! # Algorithm
//!
//! ```text
//! s1 = state[0]; s0 = state[1]
//! s1 ^= s1 << 23
//! state[1] = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26)
//! state[0] = s0
//! output   = state[1] + s0
//! ```
//!
//! Period is 2^128 - 1 for any nonzero state. The all-zero state is a fixed
//! point and is never allowed to exist.
//!
//! Not cryptographically secure.

use serde::{Deserialize, Serialize};

/// Second seeding constant (fractional bits of sqrt(2)).
///
/// XORed into the seed to derive the second state word, so the two words
/// never start equal and never both zero.
pub const DECORRELATION_CONSTANT: u64 = 0x6A09_E667_F3BC_C909;

/// 128 bits of generator state.
///
/// The two words have no meaning outside the step function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorState(pub [u64; 2]);

impl GeneratorState {
    /// Derive a full state from one 64-bit seed.
    ///
    /// # Example
    /// ```
    /// use xorshift_random_core_rs::rng::{GeneratorState, DECORRELATION_CONSTANT};
    ///
    /// let state = GeneratorState::from_seed(7);
    /// assert_eq!(state.0, [7, 7 ^ DECORRELATION_CONSTANT]);
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self([seed, seed ^ DECORRELATION_CONSTANT])
    }

    /// True for the degenerate all-zero state.
    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0]
    }
}

/// xorshift128+ generator
///
/// # Example
/// ```
/// use xorshift_random_core_rs::rng::{GeneratorState, Xorshift128Plus};
///
/// let mut a = Xorshift128Plus::from_state(GeneratorState([1, 2]));
/// let mut b = Xorshift128Plus::from_state(GeneratorState([1, 2]));
/// assert_eq!(a.next(), b.next());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift128Plus {
    state: GeneratorState,
}

impl Xorshift128Plus {
    /// Create a generator positioned at an explicit state.
    ///
    /// An all-zero state is replaced by `GeneratorState::from_seed(0)`
    /// (xorshift requirement).
    pub fn from_state(state: GeneratorState) -> Self {
        let state = if state.is_zero() {
            GeneratorState::from_seed(0)
        } else {
            state
        };
        Self { state }
    }

    /// Create a generator from the process environment.
    ///
    /// See [`crate::rng::seed`] for the entropy sources.
    pub fn from_entropy() -> Self {
        Self::from_state(super::seed::entropy_state())
    }

    /// Advance the state and return the next 64-bit output.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let [mut s1, s0] = self.state.0;
        s1 ^= s1 << 23;
        let high = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state = GeneratorState([s0, high]);
        high.wrapping_add(s0)
    }

    /// Current state (for inspection and replay in tests)
    pub fn get_state(&self) -> GeneratorState {
        self.state
    }
}
