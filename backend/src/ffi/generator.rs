//! PyO3 wrapper for Generator

use pyo3::prelude::*;

use crate::distributions::Distribution;
use crate::rng::{shared, Generator as RustGenerator, GeneratorState};

/// Python wrapper for Rust Generator
///
/// # Example (from Python)
///
/// ```python
/// from xorshift_random_core_rs import Generator
///
/// rng = Generator()
/// u = rng.uniform_float()
/// roll = rng.int_range_precise(1, 6)
/// heights = rng.sample('{"type": "Normal", "mean": 170.0, "std_dev": 8.0}', 100)
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: RustGenerator,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator seeded from the environment
    #[new]
    fn new() -> Self {
        PyGenerator {
            inner: RustGenerator::new(),
        }
    }

    /// Create a generator positioned at an explicit 128-bit state
    #[staticmethod]
    fn from_state(low: u64, high: u64) -> Self {
        PyGenerator {
            inner: RustGenerator::from_state(GeneratorState([low, high])),
        }
    }

    /// Current state as a `(low, high)` tuple
    fn state(&self) -> (u64, u64) {
        let GeneratorState([low, high]) = self.inner.state();
        (low, high)
    }

    fn uniform_float(&mut self) -> f32 {
        self.inner.uniform_float()
    }

    fn normal(&mut self, mean: f32, stddev: f32) -> f32 {
        self.inner.normal(mean, stddev)
    }

    fn int_range_fast(&mut self, min: i64, max: i64) -> i64 {
        self.inner.int_range_fast(min, max)
    }

    fn int_range_precise(&mut self, min: i64, max: i64) -> i64 {
        self.inner.int_range_precise(min, max)
    }

    /// Draw `count` values from a JSON distribution description
    ///
    /// # Errors
    ///
    /// Raises ValueError if the JSON is malformed or parameters are invalid.
    fn sample(&mut self, config: &str, count: usize) -> PyResult<Vec<f64>> {
        let distribution = Distribution::from_json(config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid distribution: {}",
                e
            ))
        })?;

        Ok(distribution
            .sample_n(&mut self.inner, count)
            .iter()
            .map(|s| s.as_f64())
            .collect())
    }
}

/// Uniform float in [0, 1) from the shared generator
#[pyfunction(name = "uniform_float")]
pub fn py_uniform_float() -> f32 {
    shared::uniform_float()
}

/// Normal deviate from the shared generator
#[pyfunction(name = "normal")]
pub fn py_normal(mean: f32, stddev: f32) -> f32 {
    shared::normal(mean, stddev)
}

/// Integer in [min, max] from the shared generator (fast)
#[pyfunction(name = "int_range_fast")]
pub fn py_int_range_fast(min: i64, max: i64) -> i64 {
    shared::int_range_fast(min, max)
}

/// Integer in [min, max] from the shared generator (unbiased)
#[pyfunction(name = "int_range_precise")]
pub fn py_int_range_precise(min: i64, max: i64) -> i64 {
    shared::int_range_precise(min, max)
}
