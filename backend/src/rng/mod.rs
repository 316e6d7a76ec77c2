//! Pseudo-random number generation
//!
//! Uses the xorshift128+ algorithm for fast, non-cryptographic generation.
//! All randomness in the crate flows through [`Generator`]; the free
//! functions in [`shared`] draw from one process-wide instance.

mod generator;
mod normal;
pub mod seed;
pub mod shared;
mod xorshift;

pub use generator::Generator;
pub use normal::NormalSampler;
pub use xorshift::{GeneratorState, Xorshift128Plus, DECORRELATION_CONSTANT};
