use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::{GridError, Result};

/// Standard deviation of the cosmetic offset applied to in-flight points.
pub const JITTER_STD_DEV: f32 = 0.03;

/// Source of the random offset added to in-flight trajectory points.
///
/// The offset only affects rendering; exact trajectory points and the agent
/// position never depend on it.
pub trait TrajectoryJitter {
    /// Offset `(dx, dy)` for the next in-flight point.
    fn offset(&mut self) -> (f32, f32);
}

/// Independent zero-mean Gaussian noise on each axis.
#[derive(Clone, Debug)]
pub struct GaussianJitter<R: Rng = StdRng> {
    rng: R,
    std_dev: f32,
}

impl GaussianJitter<StdRng> {
    pub fn from_entropy() -> Self {
        GaussianJitter {
            rng: StdRng::from_entropy(),
            std_dev: JITTER_STD_DEV,
        }
    }

    /// Reproducible jitter for tests and recorded runs.
    pub fn seeded(seed: u64) -> Self {
        GaussianJitter {
            rng: StdRng::seed_from_u64(seed),
            std_dev: JITTER_STD_DEV,
        }
    }
}

impl<R: Rng> GaussianJitter<R> {
    pub fn with_rng(rng: R, std_dev: f32) -> Result<Self> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(GridError::invalid_parameter(
                "std_dev".to_string(),
                format!("must be finite and non-negative, got {}", std_dev),
            ));
        }
        Ok(GaussianJitter { rng, std_dev })
    }

    pub fn std_dev(&self) -> f32 {
        self.std_dev
    }
}

impl<R: Rng> TrajectoryJitter for GaussianJitter<R> {
    fn offset(&mut self) -> (f32, f32) {
        let dx: f32 = self.rng.sample(StandardNormal);
        let dy: f32 = self.rng.sample(StandardNormal);
        (dx * self.std_dev, dy * self.std_dev)
    }
}

/// Zero offset; in-flight points become fully deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl TrajectoryJitter for NoJitter {
    fn offset(&mut self) -> (f32, f32) {
        (0.0, 0.0)
    }
}
