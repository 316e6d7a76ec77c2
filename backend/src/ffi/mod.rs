//! Python bindings (feature `pyo3`)
//!
//! Exposes the `Generator` class and module-level functions backed by the
//! process-wide shared generator.

pub mod generator;

pub use generator::{
    py_int_range_fast, py_int_range_precise, py_normal, py_uniform_float, PyGenerator,
};
