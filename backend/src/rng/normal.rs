//! Polar Box-Muller normal sampling with a one-sample cache
//!
//! Each accepted point in the unit disk yields two independent standard
//! normal deviates. The first is returned; the second is kept as a spare
//! and served by the next call.
//!
//! The spare is stored UNSCALED. `mean` and `stddev` are applied when a
//! deviate is returned, so a spare produced under one `(mean, stddev)` pair
//! is correctly rescaled under whatever pair the next call passes.

use super::xorshift::Xorshift128Plus;
use super::Generator;

/// Spare-deviate cache for the polar Box-Muller transform
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalSampler {
    /// Unused standard normal deviate, if any
    spare: Option<f32>,
}

impl NormalSampler {
    pub fn new() -> Self {
        Self { spare: None }
    }

    /// True if the next draw will be served from the cache
    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    /// Draw `mean + stddev * z` with `z` standard normal.
    pub fn sample(&mut self, core: &mut Xorshift128Plus, mean: f32, stddev: f32) -> f32 {
        if let Some(spare) = self.spare.take() {
            return spare * stddev + mean;
        }

        let (x, y, r) = loop {
            let x = 2.0 * Generator::uniform_from(core) - 1.0;
            let y = 2.0 * Generator::uniform_from(core) - 1.0;
            let r = x * x + y * y;
            if r < 1.0 && r != 0.0 {
                break (x, y, r);
            }
        };

        let d = (-2.0 * r.ln() / r).sqrt();
        self.spare = Some(y * d);
        x * d * stddev + mean
    }
}
