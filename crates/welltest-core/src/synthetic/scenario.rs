//! Hidden-truth scenarios for the estimation exercises.
//!
//! Each exercise round draws a "true" aquifer the student has to recover,
//! hands out a fixed observation grid, and decides how many of those
//! observations a short or long pumping test reveals.

use crate::error::{ensure_positive, DomainError};
use crate::rng::Lcg;
use crate::theis::params::AquiferParameters;

// Draw ranges scale with formation thickness b: T in 1.23e-4·b·[0.01, 100)
// m²/s, S in 1e-5·b·[0.01, 100).
const T_SCALE: f64 = 1.23e-4;
const S_SCALE: f64 = 1e-5;
const FACTOR_MIN: f64 = 0.01;
const FACTOR_MAX: f64 = 100.0;

/// Observation counts revealed by a short and a long pumping test.
pub const SHORT_COUNT_RANGE: (usize, usize) = (16, 25);

/// See [`SHORT_COUNT_RANGE`].
pub const LONG_COUNT_RANGE: (usize, usize) = (35, 49);

/// Draw the hidden "true" aquifer for an exercise round, scaled by
/// formation thickness `b` [m].
pub fn generate_true_parameters(
    thickness: f64,
    rng: &mut Lcg,
) -> Result<AquiferParameters, DomainError> {
    let b = ensure_positive("thickness", thickness)?;
    let transmissivity = T_SCALE * b * rng.next_in(FACTOR_MIN, FACTOR_MAX);
    let storativity = S_SCALE * b * rng.next_in(FACTOR_MIN, FACTOR_MAX);
    AquiferParameters::new(transmissivity, storativity)
}

/// The pumping-test observation grid: 1 min to 25 h since pumping started,
/// coarsening with age, in seconds.
pub fn standard_observation_times() -> Vec<f64> {
    const MINUTES: [f64; 60] = [
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 25.0,
        30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0, 130.0,
        140.0, 150.0, 160.0, 170.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 360.0, 420.0,
        480.0, 540.0, 600.0, 660.0, 720.0, 780.0, 840.0, 900.0, 960.0, 1020.0, 1080.0, 1140.0,
        1200.0, 1260.0, 1320.0, 1380.0, 1440.0, 1500.0,
    ];
    MINUTES.iter().map(|m| m * 60.0).collect()
}

/// How many observations this round's short and long tests reveal.
pub fn sample_counts(rng: &mut Lcg) -> (usize, usize) {
    let short = rng.next_index(SHORT_COUNT_RANGE.0, SHORT_COUNT_RANGE.1);
    let long = rng.next_index(LONG_COUNT_RANGE.0, LONG_COUNT_RANGE.1);
    (short, long)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_parameters_are_reproducible() {
        let a = generate_true_parameters(10.0, &mut Lcg::new(77)).unwrap();
        let b = generate_true_parameters(10.0, &mut Lcg::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_truths() {
        let a = generate_true_parameters(10.0, &mut Lcg::new(1)).unwrap();
        let b = generate_true_parameters(10.0, &mut Lcg::new(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn draws_stay_inside_scaled_ranges() {
        let mut rng = Lcg::new(13);
        for _ in 0..1000 {
            let p = generate_true_parameters(10.0, &mut rng).unwrap();
            assert!(p.transmissivity >= T_SCALE * 10.0 * FACTOR_MIN);
            assert!(p.transmissivity < T_SCALE * 10.0 * FACTOR_MAX);
            assert!(p.storativity >= S_SCALE * 10.0 * FACTOR_MIN);
            assert!(p.storativity < S_SCALE * 10.0 * FACTOR_MAX);
        }
    }

    #[test]
    fn rejects_non_positive_thickness() {
        assert!(generate_true_parameters(0.0, &mut Lcg::new(1)).is_err());
    }

    #[test]
    fn observation_grid_is_increasing_seconds() {
        let times = standard_observation_times();
        assert_eq!(times.len(), 60);
        assert_eq!(times[0], 60.0);
        assert_eq!(times[59], 90_000.0);
        for pair in times.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn sample_counts_stay_in_range() {
        let mut rng = Lcg::new(21);
        for _ in 0..1000 {
            let (short, long) = sample_counts(&mut rng);
            assert!((SHORT_COUNT_RANGE.0..SHORT_COUNT_RANGE.1).contains(&short));
            assert!((LONG_COUNT_RANGE.0..LONG_COUNT_RANGE.1).contains(&long));
            assert!(short < long);
        }
    }
}
