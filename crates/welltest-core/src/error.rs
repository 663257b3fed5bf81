//! Error taxonomy for the solver layer.
//!
//! Every precondition is checked eagerly at the boundary of a pure function
//! and reported through [`DomainError`]; nothing is clamped or coerced to a
//! default. Extreme-but-valid arguments are surfaced as returned flags (see
//! `wellfn::PrecisionWarning`), never as errors.

use thiserror::Error;

/// An input violated a mathematical precondition of a solver function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A quantity that must be strictly positive (T, S, t, radii, ...).
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A quantity that must not be negative (distance, conductivity, ...).
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    /// NaN or infinite input where a finite value is required.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Inverting drawdown for W(u) divides by the pumping rate.
    #[error("pumping rate must be non-zero to invert drawdown for W(u)")]
    ZeroPumpingRate,

    /// `ln(Re/rw)` vanishes or turns negative, leaving the Bouwer-Rice shape
    /// factor undefined.
    #[error(
        "effective radius {effective_radius} must exceed screen radius {screen_radius}"
    )]
    DegenerateRadiusRatio { effective_radius: f64, screen_radius: f64 },

    /// Paired columns of different lengths.
    #[error("column lengths differ: {times} times vs {values} values")]
    ColumnLengthMismatch { times: usize, values: usize },

    /// Noise bounds out of order.
    #[error("noise bounds inverted: lower {lower} > upper {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    /// A normalized head outside (0, 1] cannot be inverted for conductivity.
    #[error("head ratio must lie in (0, 1], got {0}")]
    HeadRatioOutOfRange(f64),

    /// Applying the time offset placed the evaluation before the slug event.
    #[error("shifted time {0} s precedes the slug event")]
    TimeBeforeSlug(f64),
}

/// Pass `value` through if it is finite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { name, value })
    }
}

/// Pass `value` through if it is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64, DomainError> {
    let value = ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositive { name, value })
    }
}

/// Pass `value` through if it is finite and not negative.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, DomainError> {
    let value = ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::Negative { name, value })
    }
}
