//! Declarative draw descriptions
//!
//! A [`Distribution`] describes one kind of draw (uniform float, normal
//! float, or integer range) as plain data, so callers can load sampling
//! setups from JSON and sample them against any [`Generator`].
//!
//! # Example
//!
//! ```
//! use xorshift_random_core_rs::distributions::{Distribution, Sample};
//! use xorshift_random_core_rs::Generator;
//!
//! let dice = Distribution::from_json(
//!     r#"{"type": "IntRange", "min": 1, "max": 6, "strategy": "precise"}"#,
//! ).unwrap();
//!
//! let mut rng = Generator::new();
//! match dice.sample(&mut rng) {
//!     Sample::Int(roll) => assert!((1..=6).contains(&roll)),
//!     Sample::Float(_) => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::Generator;

/// Errors raised while loading or validating a distribution
#[derive(Debug, Error, PartialEq)]
pub enum DistributionError {
    #[error("Invalid distribution JSON: {0}")]
    InvalidJson(String),

    #[error("Parameter '{name}' must be finite")]
    NonFiniteParameter { name: &'static str },

    #[error("Standard deviation must be non-negative, got {std_dev}")]
    NegativeStdDev { std_dev: f32 },
}

/// Integer-range strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStrategy {
    /// Float scaling; fast, slightly biased on large ranges
    #[default]
    Fast,

    /// Rejection sampling on raw 64-bit draws; unbiased
    Precise,
}

/// One kind of draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Distribution {
    /// Uniform float in [0, 1)
    Uniform,

    /// Normal float with mean and standard deviation
    Normal { mean: f32, std_dev: f32 },

    /// Integer in [min, max] (inclusive, either order)
    IntRange {
        min: i64,
        max: i64,
        #[serde(default)]
        strategy: RangeStrategy,
    },
}

/// Value produced by sampling a [`Distribution`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sample {
    Int(i64),
    Float(f32),
}

impl Sample {
    /// Numeric value as `f64` (integers beyond 2^53 lose precision)
    pub fn as_f64(&self) -> f64 {
        match *self {
            Sample::Int(v) => v as f64,
            Sample::Float(v) => v as f64,
        }
    }
}

impl Distribution {
    /// Parse and validate a distribution from JSON.
    pub fn from_json(json: &str) -> Result<Self, DistributionError> {
        let distribution: Distribution = serde_json::from_str(json)
            .map_err(|e| DistributionError::InvalidJson(e.to_string()))?;
        distribution.validate()?;
        Ok(distribution)
    }

    /// Check parameters.
    ///
    /// Normal parameters must be finite and `std_dev` non-negative.
    /// Uniform and integer ranges are always valid.
    pub fn validate(&self) -> Result<(), DistributionError> {
        if let Distribution::Normal { mean, std_dev } = *self {
            if !mean.is_finite() {
                return Err(DistributionError::NonFiniteParameter { name: "mean" });
            }
            if !std_dev.is_finite() {
                return Err(DistributionError::NonFiniteParameter { name: "std_dev" });
            }
            if std_dev < 0.0 {
                return Err(DistributionError::NegativeStdDev { std_dev });
            }
        }
        Ok(())
    }

    /// Draw one value.
    pub fn sample(&self, rng: &mut Generator) -> Sample {
        match *self {
            Distribution::Uniform => Sample::Float(rng.uniform_float()),
            Distribution::Normal { mean, std_dev } => Sample::Float(rng.normal(mean, std_dev)),
            Distribution::IntRange { min, max, strategy } => Sample::Int(match strategy {
                RangeStrategy::Fast => rng.int_range_fast(min, max),
                RangeStrategy::Precise => rng.int_range_precise(min, max),
            }),
        }
    }

    /// Draw `count` values in sequence.
    pub fn sample_n(&self, rng: &mut Generator, count: usize) -> Vec<Sample> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GeneratorState;

    #[test]
    fn test_strategy_defaults_to_fast() {
        let d: Distribution = serde_json::from_str(r#"{"type":"IntRange","min":0,"max":3}"#).unwrap();
        assert_eq!(
            d,
            Distribution::IntRange {
                min: 0,
                max: 3,
                strategy: RangeStrategy::Fast
            }
        );
    }

    #[test]
    fn test_sample_matches_direct_call() {
        let d = Distribution::IntRange {
            min: -5,
            max: 5,
            strategy: RangeStrategy::Precise,
        };
        let mut a = Generator::from_state(GeneratorState([9, 10]));
        let mut b = Generator::from_state(GeneratorState([9, 10]));

        for _ in 0..50 {
            assert_eq!(d.sample(&mut a), Sample::Int(b.int_range_precise(-5, 5)));
        }
    }

    #[test]
    fn test_sample_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Sample::Int(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Sample::Float(0.5)).unwrap(), "0.5");
    }
}
