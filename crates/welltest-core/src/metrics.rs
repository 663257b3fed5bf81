//! Fit metrics for comparing modeled curves against observations.
//!
//! All metrics take observed and simulated slices and return a scalar score.

use crate::error::{ensure_finite, ensure_positive, DomainError};

/// Nash-Sutcliffe Efficiency. Range: (-inf, 1], 1 = perfect.
pub fn nse(observed: &[f64], simulated: &[f64]) -> f64 {
    let n = observed.len();
    let mean_obs: f64 = observed.iter().sum::<f64>() / n as f64;
    let numerator: f64 = observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).powi(2))
        .sum();
    let denominator: f64 = observed.iter().map(|o| (o - mean_obs).powi(2)).sum();
    if denominator == 0.0 {
        return f64::NEG_INFINITY;
    }
    1.0 - numerator / denominator
}

/// Root Mean Square Error. Range: [0, inf), 0 = perfect.
pub fn rmse(observed: &[f64], simulated: &[f64]) -> f64 {
    let n = observed.len() as f64;
    let mse: f64 = observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).powi(2))
        .sum::<f64>()
        / n;
    mse.sqrt()
}

/// Mean Absolute Error. Range: [0, inf), 0 = perfect.
pub fn mae(observed: &[f64], simulated: &[f64]) -> f64 {
    let n = observed.len() as f64;
    observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).abs())
        .sum::<f64>()
        / n
}

/// Estimated parameter as a percentage of the hidden true value, the
/// "fitting success" readout of the estimation exercises. 100 = exact.
pub fn fit_success_percent(estimate: f64, truth: f64) -> Result<f64, DomainError> {
    let estimate = ensure_finite("estimate", estimate)?;
    let truth = ensure_positive("true value", truth)?;
    Ok(100.0 * estimate / truth)
}
