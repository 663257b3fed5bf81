//! Type-curve generation and measured-data overlay for manual curve fitting.
//!
//! The matching workflow plots the canonical (1/u, W(u)) curve, lifts the
//! measured drawdowns into the same coordinates, and lets the student slide
//! T and S until the clouds agree.

use super::params::AquiferParameters;
use super::processes;
use super::run::{DrawdownSample, DrawdownSeries};
use crate::error::{ensure_finite, DomainError};
use crate::wellfn;

/// Default decade range of the matching plots: u ∈ [1e-5, 1e4].
pub const LOG_U_MIN: f64 = -5.0;

/// See [`LOG_U_MIN`].
pub const LOG_U_MAX: f64 = 4.0;

/// Default number of points on the curve.
pub const CURVE_POINTS: usize = 50;

/// A curve (or point cloud) in type-curve coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCurve {
    /// 1/u, the customary abscissa of the matching plot.
    pub inverse_u: Vec<f64>,
    /// W(u).
    pub well_function: Vec<f64>,
}

/// `n` log-spaced points from 10^lo to 10^hi inclusive.
pub fn logspace(lo_log10: f64, hi_log10: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![10f64.powf(lo_log10)];
    }
    let step = (hi_log10 - lo_log10) / (n - 1) as f64;
    (0..n).map(|i| 10f64.powf(lo_log10 + step * i as f64)).collect()
}

/// The canonical Theis type curve over a log-spaced u grid.
pub fn well_function_curve(
    lo_log10: f64,
    hi_log10: f64,
    n: usize,
) -> Result<TypeCurve, DomainError> {
    ensure_finite("log10 u lower bound", lo_log10)?;
    ensure_finite("log10 u upper bound", hi_log10)?;
    let us = logspace(lo_log10, hi_log10, n);
    let well_function = wellfn::well_function_series(&us)?;
    Ok(TypeCurve {
        inverse_u: us.iter().map(|u| 1.0 / u).collect(),
        well_function,
    })
}

/// The type curve scaled into (t, s) axes for the current parameter guess:
/// t = (1/u)·r²S/(4T), s = W(u)·Q/(4πT). Sliding T and S moves this curve
/// over the measured cloud.
pub fn time_drawdown_curve(
    aquifer: &AquiferParameters,
    pumping_rate: f64,
    distance: f64,
    lo_log10: f64,
    hi_log10: f64,
    n: usize,
) -> Result<DrawdownSeries, DomainError> {
    let curve = well_function_curve(lo_log10, hi_log10, n)?;
    // r²S/(4T) with the time factored out, so t = (1/u)·time_scale.
    let time_scale = processes::dimensionless_time(
        aquifer.transmissivity,
        aquifer.storativity,
        distance,
        1.0,
    )?;
    let q = ensure_finite("pumping rate", pumping_rate)?;
    let head_scale = q / (4.0 * std::f64::consts::PI * aquifer.transmissivity);
    let mut out = DrawdownSeries::with_capacity(curve.inverse_u.len());
    for (inv_u, w) in curve.inverse_u.iter().zip(&curve.well_function) {
        out.push(&DrawdownSample {
            time_s: inv_u * time_scale,
            drawdown: w * head_scale,
        });
    }
    Ok(out)
}

/// Measured drawdowns lifted onto type-curve coordinates
/// (1/u(t), 4πTs/Q) for overlay against [`well_function_curve`].
pub fn measurement_overlay(
    aquifer: &AquiferParameters,
    pumping_rate: f64,
    distance: f64,
    times: &[f64],
    drawdowns: &[f64],
) -> Result<TypeCurve, DomainError> {
    if times.len() != drawdowns.len() {
        return Err(DomainError::ColumnLengthMismatch {
            times: times.len(),
            values: drawdowns.len(),
        });
    }
    let mut inverse_u = Vec::with_capacity(times.len());
    let mut well_function = Vec::with_capacity(times.len());
    for (&t, &s) in times.iter().zip(drawdowns) {
        let u = processes::dimensionless_time(
            aquifer.transmissivity,
            aquifer.storativity,
            distance,
            t,
        )?;
        inverse_u.push(1.0 / u);
        well_function.push(processes::well_function_from_drawdown(
            pumping_rate,
            aquifer.transmissivity,
            s,
        )?);
    }
    Ok(TypeCurve { inverse_u, well_function })
}
