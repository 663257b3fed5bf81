//! The seam between the solver layer and a presentation layer.

use crate::error::DomainError;

/// A closed-form model of head response to a single perturbation.
///
/// Reactive front ends rebuild an implementor from the current widget values
/// on every interaction, evaluate, and plot — the model itself holds no
/// session state.
pub trait AnalyticalModel {
    /// Response at elapsed time `t` (seconds) since the perturbation began.
    fn evaluate(&self, t: f64) -> Result<f64, DomainError>;

    /// Elementwise evaluation; ordering and length follow `times`.
    fn evaluate_series(&self, times: &[f64]) -> Result<Vec<f64>, DomainError> {
        times.iter().map(|&t| self.evaluate(t)).collect()
    }
}
