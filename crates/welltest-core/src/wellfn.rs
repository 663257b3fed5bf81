//! The Theis well function W(u), i.e. the exponential integral
//! E1(u) = ∫_u^∞ e^(−x)/x dx.
//!
//! Two complementary expansions cover the whole domain: the convergent power
//! series for u ≤ 1 (where the alternating terms shrink fast and nothing
//! cancels) and a modified-Lentz continued fraction for u > 1. Both run to
//! machine precision, comfortably inside the accuracy the type-curve and
//! drawdown workflows need over u ∈ [1e-7, 1e4].

use crate::error::{ensure_finite, DomainError};

/// Euler-Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Below this argument the logarithmic divergence dominates and the last few
/// digits of the series result are no longer trustworthy.
pub const RELIABLE_MIN: f64 = 1e-12;

/// Above this argument the result underflows toward zero and relative
/// accuracy degrades.
pub const RELIABLE_MAX: f64 = 1e6;

/// Non-fatal flag raised for arguments outside the reliable range.
///
/// The value is still returned best-effort; callers that care (tests,
/// diagnostics panes) inspect the flag instead of catching an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionWarning {
    /// u < [`RELIABLE_MIN`].
    TinyArgument,
    /// u > [`RELIABLE_MAX`].
    HugeArgument,
}

/// W(u) for a single argument. Fails for u ≤ 0, NaN, or ±∞.
pub fn well_function(u: f64) -> Result<f64, DomainError> {
    well_function_checked(u).map(|(value, _)| value)
}

/// W(u) plus an accuracy flag for extreme arguments.
pub fn well_function_checked(u: f64) -> Result<(f64, Option<PrecisionWarning>), DomainError> {
    let u = ensure_finite("u", u)?;
    if u <= 0.0 {
        return Err(DomainError::NonPositive { name: "u", value: u });
    }

    let warning = if u < RELIABLE_MIN {
        Some(PrecisionWarning::TinyArgument)
    } else if u > RELIABLE_MAX {
        Some(PrecisionWarning::HugeArgument)
    } else {
        None
    };

    let value = if u <= 1.0 {
        e1_series(u)
    } else {
        e1_continued_fraction(u)
    };
    Ok((value, warning))
}

/// Elementwise W(u) over a sequence, ordering preserved.
pub fn well_function_series(us: &[f64]) -> Result<Vec<f64>, DomainError> {
    us.iter().map(|&u| well_function(u)).collect()
}

/// Power series E1(u) = −γ − ln u + Σ_{k≥1} (−1)^(k+1) u^k / (k·k!).
fn e1_series(u: f64) -> f64 {
    let mut factorial_term = 1.0; // u^k / k!
    let mut sum = 0.0;
    for k in 1..=60 {
        factorial_term *= u / k as f64;
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let contribution = sign * factorial_term / k as f64;
        sum += contribution;
        if contribution.abs() < f64::EPSILON * sum.abs().max(1.0) {
            break;
        }
    }
    -EULER_GAMMA - u.ln() + sum
}

/// Continued fraction E1(u) = e^(−u)·(1/(u+1− 1²/(u+3− 2²/(u+5−…)))),
/// evaluated with the modified Lentz scheme.
fn e1_continued_fraction(u: f64) -> f64 {
    const MAX_ITER: usize = 200;
    const TINY: f64 = 1e-300;

    let mut b = u + 1.0;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=MAX_ITER {
        let a = -((i * i) as f64);
        b += 2.0;
        d = 1.0 / (a * d + b);
        c = b + a / c;
        let delta = c * d;
        h *= delta;
        if (delta - 1.0).abs() < f64::EPSILON {
            break;
        }
    }
    h * (-u).exp()
}
