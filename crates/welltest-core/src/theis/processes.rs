//! Pure transforms of the Theis solution.
//!
//! Each function validates its own scalar inputs eagerly; composition lives
//! in `run`.

use std::f64::consts::PI;

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, DomainError};
use crate::wellfn;

/// Dimensionless time u = r²S/(4Tt).
///
/// u grows without bound as t → 0 and collapses toward 0 as t → ∞.
pub fn dimensionless_time(
    transmissivity: f64,
    storativity: f64,
    distance: f64,
    time: f64,
) -> Result<f64, DomainError> {
    let t = ensure_positive("transmissivity", transmissivity)?;
    let s = ensure_positive("storativity", storativity)?;
    let r = ensure_non_negative("distance", distance)?;
    let time = ensure_positive("time", time)?;
    Ok(r * r * s / (4.0 * t * time))
}

/// Drawdown for a known well-function value: s = Q·W(u)/(4πT).
///
/// Q may carry either sign; a negative rate (injection) yields a head rise,
/// which the caller interprets.
pub fn drawdown_from_u(
    pumping_rate: f64,
    transmissivity: f64,
    u: f64,
) -> Result<f64, DomainError> {
    let q = ensure_finite("pumping rate", pumping_rate)?;
    let t = ensure_positive("transmissivity", transmissivity)?;
    Ok(q / (4.0 * PI * t) * wellfn::well_function(u)?)
}

/// Inverse of [`drawdown_from_u`]: W(u) = 4πTs/Q.
///
/// Lifts a measured drawdown onto type-curve coordinates so it can be
/// overlaid on the canonical curve.
pub fn well_function_from_drawdown(
    pumping_rate: f64,
    transmissivity: f64,
    drawdown: f64,
) -> Result<f64, DomainError> {
    let q = ensure_finite("pumping rate", pumping_rate)?;
    if q == 0.0 {
        return Err(DomainError::ZeroPumpingRate);
    }
    let t = ensure_positive("transmissivity", transmissivity)?;
    let s = ensure_finite("drawdown", drawdown)?;
    Ok(4.0 * PI * t * s / q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- Dimensionless time --

    #[test]
    fn symple_scenario_gives_unit_u() {
        // T = 1e-4 m²/s, S = 1e-4, r = 120 m, t = 1 h: r²S = 1.44, 4Tt = 1.44.
        let u = dimensionless_time(1e-4, 1e-4, 120.0, 3600.0).unwrap();
        assert_relative_eq!(u, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn u_shrinks_with_time() {
        let early = dimensionless_time(1e-4, 1e-4, 120.0, 60.0).unwrap();
        let late = dimensionless_time(1e-4, 1e-4, 120.0, 86400.0).unwrap();
        assert!(early > late);
    }

    #[test]
    fn rejects_non_positive_time_and_parameters() {
        assert!(dimensionless_time(0.0, 1e-4, 120.0, 60.0).is_err());
        assert!(dimensionless_time(1e-4, 0.0, 120.0, 60.0).is_err());
        assert!(dimensionless_time(1e-4, 1e-4, 120.0, 0.0).is_err());
        assert!(dimensionless_time(1e-4, 1e-4, 120.0, -5.0).is_err());
    }

    #[test]
    fn rejects_negative_distance_only() {
        assert!(dimensionless_time(1e-4, 1e-4, -1.0, 60.0).is_err());
        // r = 0 is representable here; the well function rejects u = 0 later.
        assert_eq!(dimensionless_time(1e-4, 1e-4, 0.0, 60.0).unwrap(), 0.0);
    }

    // -- Drawdown --

    #[test]
    fn drawdown_at_unit_u() {
        // s = Q/(4πT)·W(1) = 3.9789·0.21938 ≈ 0.8729 m.
        let s = drawdown_from_u(0.005, 1e-4, 1.0).unwrap();
        assert_relative_eq!(s, 0.8729, max_relative = 1e-3);
    }

    #[test]
    fn injection_raises_head() {
        let s = drawdown_from_u(-0.005, 1e-4, 1.0).unwrap();
        assert!(s < 0.0);
    }

    #[test]
    fn drawdown_rejects_non_positive_transmissivity() {
        assert!(drawdown_from_u(0.005, 0.0, 1.0).is_err());
    }

    #[test]
    fn drawdown_propagates_well_function_domain() {
        assert!(drawdown_from_u(0.005, 1e-4, 0.0).is_err());
    }

    // -- Inversion --

    #[test]
    fn inversion_recovers_well_function() {
        let q = 0.005;
        let t = 1e-4;
        let u = 0.37;
        let s = drawdown_from_u(q, t, u).unwrap();
        let w = well_function_from_drawdown(q, t, s).unwrap();
        assert_relative_eq!(w, crate::wellfn::well_function(u).unwrap(), max_relative = 1e-12);
    }

    #[test]
    fn inversion_rejects_zero_rate() {
        assert_eq!(
            well_function_from_drawdown(0.0, 1e-4, 0.5).unwrap_err(),
            DomainError::ZeroPumpingRate
        );
    }

    #[test]
    fn inversion_handles_negative_rate() {
        // Injection data invert cleanly; sign cancels.
        let w = well_function_from_drawdown(-0.005, 1e-4, -0.8729).unwrap();
        assert!(w > 0.0);
    }
}
