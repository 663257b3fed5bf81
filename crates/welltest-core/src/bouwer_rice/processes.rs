//! Pure pieces of the exponential head-decay model.

use std::f64::consts::PI;

use super::params::{EffectiveRadiusPolicy, SlugWellGeometry};
use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, DomainError};

/// Field sheets record slug volumes in cm³.
pub const CM3_TO_M3: f64 = 1e-6;

/// Initial head displacement H0 = V/(π·rc²) for slug volume V [m³].
pub fn initial_displacement(slug_volume: f64, casing_radius: f64) -> Result<f64, DomainError> {
    let v = ensure_positive("slug volume", slug_volume)?;
    let rc = ensure_positive("casing radius", casing_radius)?;
    Ok(v / (PI * rc * rc))
}

/// [`initial_displacement`] with the slug volume given in cm³.
pub fn initial_displacement_cm3(
    slug_volume_cm3: f64,
    casing_radius: f64,
) -> Result<f64, DomainError> {
    initial_displacement(slug_volume_cm3 * CM3_TO_M3, casing_radius)
}

/// Shape factor F = 2πL/ln(Re/rw) [m].
///
/// Re at or below rw leaves the logarithm zero or negative, which is
/// reported rather than propagated as ±∞.
pub fn shape_factor(
    geometry: &SlugWellGeometry,
    policy: EffectiveRadiusPolicy,
) -> Result<f64, DomainError> {
    let re = policy.effective_radius(geometry)?;
    if re <= geometry.screen_radius {
        return Err(DomainError::DegenerateRadiusRatio {
            effective_radius: re,
            screen_radius: geometry.screen_radius,
        });
    }
    Ok(2.0 * PI * geometry.screen_length / (re / geometry.screen_radius).ln())
}

/// Normalized head h(t)/H0 = exp(−F·K·t/(π·rc²)).
///
/// K = 0 means no recovery: the ratio holds exactly at 1 for every t. The
/// decay denominator π·rc² never depends on K, so nothing divides by zero.
pub fn normalized_head(
    conductivity: f64,
    shape_factor: f64,
    casing_radius: f64,
    time: f64,
) -> Result<f64, DomainError> {
    let k = ensure_non_negative("hydraulic conductivity", conductivity)?;
    let f = ensure_positive("shape factor", shape_factor)?;
    let rc = ensure_positive("casing radius", casing_radius)?;
    let t = ensure_non_negative("time", time)?;
    Ok((-f * k * t / (PI * rc * rc)).exp())
}

/// Hydraulic conductivity from one observed recovery point:
/// K = π·rc²·ln(H0/h)/(F·t) — the quantity the slug test is run to find.
pub fn conductivity_from_recovery(
    shape_factor: f64,
    casing_radius: f64,
    time: f64,
    head_ratio: f64,
) -> Result<f64, DomainError> {
    let f = ensure_positive("shape factor", shape_factor)?;
    let rc = ensure_positive("casing radius", casing_radius)?;
    let t = ensure_positive("time", time)?;
    let ratio = ensure_finite("head ratio", head_ratio)?;
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(DomainError::HeadRatioOutOfRange(ratio));
    }
    Ok(PI * rc * rc * (1.0 / ratio).ln() / (f * t))
}
