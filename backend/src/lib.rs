//! Xorshift Random Core - Rust Engine
//!
//! Small pseudo-random number utility built on xorshift128+.
//!
//! # Architecture
//!
//! - **rng**: xorshift128+ core, seeding, and the `Generator` transforms
//!   (uniform float, cached Box-Muller normal, fast and precise integer ranges)
//! - **rng::shared**: one process-wide generator behind a mutex
//! - **distributions**: serde-loadable draw descriptions
//!
//! # Critical Invariants
//!
//! 1. Generator state is never all-zero
//! 2. Uniform floats lie in [0, 1) and never equal 1.0
//! 3. Integer draws lie in [min, max] for any argument order
//! 4. Not cryptographically secure

// Module declarations
pub mod distributions;
pub mod rng;

// Re-exports for convenience
pub use distributions::{Distribution, DistributionError, RangeStrategy, Sample};
pub use rng::{Generator, GeneratorState, Xorshift128Plus};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn xorshift_random_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyGenerator>()?;
    m.add_function(wrap_pyfunction!(ffi::py_uniform_float, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py_normal, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py_int_range_fast, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py_int_range_precise, m)?)?;
    Ok(())
}
