//! Noise models applied to clean forward-model values.

use crate::error::{ensure_finite, DomainError};
use crate::rng::Lcg;

/// How a clean model value becomes a synthetic observation.
///
/// Each variant consumes a fixed number of draws per call, so series built
/// point by point from one stream stay prefix-stable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoiseModel {
    /// value · f with f ~ U[lower, upper).
    MultiplicativeUniform { lower: f64, upper: f64 },
    /// value + e with e ~ N(0, std_dev²).
    AdditiveNormal { std_dev: f64 },
}

impl NoiseModel {
    /// The pumping-test exercise default: factors in [0.8, 1.2).
    pub fn default_multiplicative() -> Self {
        Self::MultiplicativeUniform { lower: 0.8, upper: 1.2 }
    }

    /// The dewatering exercise default: ±2 cm measurement scatter.
    pub fn default_additive() -> Self {
        Self::AdditiveNormal { std_dev: 0.02 }
    }

    /// Check the noise parameters themselves, before any point is drawn.
    pub fn validate(&self) -> Result<(), DomainError> {
        match *self {
            Self::MultiplicativeUniform { lower, upper } => {
                ensure_finite("lower noise bound", lower)?;
                ensure_finite("upper noise bound", upper)?;
                if lower > upper {
                    return Err(DomainError::InvertedBounds { lower, upper });
                }
                Ok(())
            }
            Self::AdditiveNormal { std_dev } => {
                let sd = ensure_finite("noise std dev", std_dev)?;
                if sd < 0.0 {
                    return Err(DomainError::Negative { name: "noise std dev", value: sd });
                }
                Ok(())
            }
        }
    }

    /// One perturbed observation.
    pub fn perturb(&self, value: f64, rng: &mut Lcg) -> f64 {
        match *self {
            Self::MultiplicativeUniform { lower, upper } => value * rng.next_in(lower, upper),
            Self::AdditiveNormal { std_dev } => value + rng.next_normal(0.0, std_dev),
        }
    }
}
