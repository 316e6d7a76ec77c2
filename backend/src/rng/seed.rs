//! Environment seeding
//!
//! Mixes three entropy sources into one 64-bit seed:
//!
//! 1. Coarse wall-clock time (seconds since the Unix epoch)
//! 2. A high-resolution counter (wall-clock nanoseconds folded with monotonic
//!    nanoseconds since a process anchor)
//! 3. The address of a stack local (layout and ASLR dependent)
//!
//! The output is NOT reproducible and is meant to be read once per generator.

use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use super::xorshift::GeneratorState;

/// Golden-ratio mixing constant (2^64 / phi, odd).
pub const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

static MONOTONIC_ANCHOR: OnceLock<Instant> = OnceLock::new();

/// Produce a fresh 64-bit seed from the environment.
pub fn entropy_seed() -> u64 {
    let wall = SystemTime::now().duration_since(UNIX_EPOCH).ok();

    let mut seed = wall.map(|d| d.as_secs()).unwrap_or(0);
    seed ^= high_resolution_counter(wall.map(|d| d.as_nanos() as u64))
        .wrapping_mul(GOLDEN_GAMMA)
        >> 32;

    let probe = 0u8;
    let address = std::hint::black_box(&probe) as *const u8 as usize as u64;
    seed ^= address.wrapping_mul(GOLDEN_GAMMA);

    seed
}

/// Produce a fresh generator state from the environment.
///
/// Never all-zero: the second word is the seed XOR a nonzero constant.
pub fn entropy_state() -> GeneratorState {
    GeneratorState::from_seed(entropy_seed())
}

fn high_resolution_counter(wall_nanos: Option<u64>) -> u64 {
    let anchor = MONOTONIC_ANCHOR.get_or_init(Instant::now);
    let monotonic = anchor.elapsed().as_nanos() as u64;
    wall_nanos.unwrap_or(0) ^ monotonic.rotate_left(32)
}
