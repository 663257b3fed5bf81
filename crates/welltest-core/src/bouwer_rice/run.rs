//! Recovery-curve orchestration for slug tests.

use welltest_macros::Record;

use super::params::{EffectiveRadiusPolicy, SlugWellGeometry};
use super::processes;
use crate::error::{ensure_finite, ensure_non_negative, DomainError};
use crate::traits::AnalyticalModel;

/// Modeled head ratio at one elapsed time.
#[derive(Debug, Clone, Copy, Record)]
#[record(series_name = "RecoverySeries")]
pub struct RecoverySample {
    pub time_s: f64,
    pub head_ratio: f64,
}

/// Shift a recorded time onto the model clock, whose zero is the slug event.
fn shifted_time(time: f64, offset: f64) -> Result<f64, DomainError> {
    let shifted = time + offset;
    if shifted < 0.0 {
        return Err(DomainError::TimeBeforeSlug(shifted));
    }
    Ok(shifted)
}

/// Modeled recovery over `times`, with `time_offset` added to every entry
/// before evaluation (aligning a logger clock against the slug event).
/// Ordering and length follow `times`; the stored `time_s` are the caller's
/// unshifted values.
pub fn recovery_curve(
    conductivity: f64,
    geometry: &SlugWellGeometry,
    policy: EffectiveRadiusPolicy,
    times: &[f64],
    time_offset: f64,
) -> Result<RecoverySeries, DomainError> {
    let offset = ensure_finite("time offset", time_offset)?;
    let f = processes::shape_factor(geometry, policy)?;
    let mut out = RecoverySeries::with_capacity(times.len());
    for &t in times {
        out.push(&RecoverySample {
            time_s: t,
            head_ratio: processes::normalized_head(
                conductivity,
                f,
                geometry.casing_radius,
                shifted_time(t, offset)?,
            )?,
        });
    }
    Ok(out)
}

/// One configured slug-test model: conductivity guess, well geometry, the
/// effective-radius policy, and the clock offset.
#[derive(Debug, Clone, Copy)]
pub struct SlugTestModel {
    pub conductivity: f64,
    pub geometry: SlugWellGeometry,
    pub policy: EffectiveRadiusPolicy,
    pub time_offset: f64,
}

impl SlugTestModel {
    /// Create a validated model; the shape factor is checked up front so a
    /// degenerate geometry/policy pair fails here, not mid-curve.
    pub fn new(
        conductivity: f64,
        geometry: SlugWellGeometry,
        policy: EffectiveRadiusPolicy,
        time_offset: f64,
    ) -> Result<Self, DomainError> {
        ensure_non_negative("hydraulic conductivity", conductivity)?;
        ensure_finite("time offset", time_offset)?;
        processes::shape_factor(&geometry, policy)?;
        Ok(Self { conductivity, geometry, policy, time_offset })
    }
}

impl AnalyticalModel for SlugTestModel {
    fn evaluate(&self, t: f64) -> Result<f64, DomainError> {
        let f = processes::shape_factor(&self.geometry, self.policy)?;
        processes::normalized_head(
            self.conductivity,
            f,
            self.geometry.casing_radius,
            shifted_time(t, self.time_offset)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn varnum_well() -> SlugWellGeometry {
        SlugWellGeometry::new(0.03, 0.085, 2.1).unwrap()
    }

    #[test]
    fn curve_starts_at_one_and_decays() {
        let times: Vec<f64> = (0..300).map(f64::from).collect();
        let curve = recovery_curve(
            1e-3,
            &varnum_well(),
            EffectiveRadiusPolicy::ScreenLength,
            &times,
            0.0,
        )
        .unwrap();
        assert_eq!(curve.len(), 300);
        assert_eq!(curve.head_ratio[0], 1.0);
        for pair in curve.head_ratio.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert!(curve.head_ratio[299] < 1e-6);
    }

    #[test]
    fn offset_shifts_the_model_clock() {
        let g = varnum_well();
        let plain = recovery_curve(1e-3, &g, EffectiveRadiusPolicy::ScreenLength, &[10.0], 0.0)
            .unwrap();
        let shifted = recovery_curve(1e-3, &g, EffectiveRadiusPolicy::ScreenLength, &[4.0], 6.0)
            .unwrap();
        assert_relative_eq!(
            plain.head_ratio[0],
            shifted.head_ratio[0],
            max_relative = 1e-12
        );
        // Reported times stay on the caller's clock.
        assert_eq!(shifted.time_s[0], 4.0);
    }

    #[test]
    fn time_before_the_slug_event_is_rejected() {
        let g = varnum_well();
        let err = recovery_curve(
            1e-3,
            &g,
            EffectiveRadiusPolicy::ScreenLength,
            &[2.0],
            -5.0,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::TimeBeforeSlug(_)));
    }

    #[test]
    fn zero_conductivity_curve_is_flat_one() {
        let times = [0.0, 60.0, 300.0];
        let curve = recovery_curve(
            0.0,
            &varnum_well(),
            EffectiveRadiusPolicy::ScreenLength,
            &times,
            0.0,
        )
        .unwrap();
        assert_eq!(curve.head_ratio, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn model_new_rejects_degenerate_geometry_up_front() {
        let g = SlugWellGeometry::new(0.03, 0.085, 0.085).unwrap();
        assert!(SlugTestModel::new(1e-3, g, EffectiveRadiusPolicy::ScreenLength, 0.0).is_err());
    }

    #[test]
    fn model_matches_free_function() {
        let model = SlugTestModel::new(
            1e-3,
            varnum_well(),
            EffectiveRadiusPolicy::ScreenLength,
            0.0,
        )
        .unwrap();
        let curve = recovery_curve(
            1e-3,
            &varnum_well(),
            EffectiveRadiusPolicy::ScreenLength,
            &[0.0, 1.0, 2.0],
            0.0,
        )
        .unwrap();
        let series = model.evaluate_series(&[0.0, 1.0, 2.0]).unwrap();
        assert_eq!(series, curve.head_ratio);
    }
}
