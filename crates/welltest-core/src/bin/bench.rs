/// Timing harness for the solver entry points.
///
/// Uses std::time::Instant for timing, the crate's deterministic LCG for
/// input generation, and std::hint::black_box to prevent dead-code
/// elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use welltest_core::bouwer_rice::params::{EffectiveRadiusPolicy, SlugWellGeometry};
use welltest_core::bouwer_rice::run::recovery_curve;
use welltest_core::rng::Lcg;
use welltest_core::synthetic::generate_series;
use welltest_core::synthetic::noise::NoiseModel;
use welltest_core::theis::params::AquiferParameters;
use welltest_core::theis::run::drawdown_series;
use welltest_core::theis::typecurve;
use welltest_core::wellfn::well_function_series;

const REPEATS: usize = 7;

/// Strictly increasing time grid of `n` points with jittered spacing.
fn make_times(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    let mut t = 0.0;
    (0..n)
        .map(|_| {
            t += 1.0 + rng.next_f64() * 60.0;
            t
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_well_function(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();
    for &n in sizes {
        let us = typecurve::logspace(-5.0, 4.0, n);

        // Warmup
        black_box(well_function_series(&us).unwrap());

        let dur = median_time(|| {
            black_box(well_function_series(&us).unwrap());
        });
        results.push(("well_function", n, dur));
    }
    results
}

fn bench_theis(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let aquifer = AquiferParameters::new(3.2e-4, 2.1e-3).unwrap();
    let mut results = Vec::new();
    for &n in sizes {
        let times = make_times(n, 42);

        // Warmup
        black_box(drawdown_series(&aquifer, 0.005, 120.0, &times).unwrap());

        let dur = median_time(|| {
            black_box(drawdown_series(&aquifer, 0.005, 120.0, &times).unwrap());
        });
        results.push(("theis_series", n, dur));
    }
    results
}

fn bench_bouwer_rice(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let geometry = SlugWellGeometry::new(0.03, 0.085, 2.1).unwrap();
    let mut results = Vec::new();
    for &n in sizes {
        let times = make_times(n, 42);

        // Warmup
        black_box(
            recovery_curve(1e-3, &geometry, EffectiveRadiusPolicy::ScreenLength, &times, 0.0)
                .unwrap(),
        );

        let dur = median_time(|| {
            black_box(
                recovery_curve(1e-3, &geometry, EffectiveRadiusPolicy::ScreenLength, &times, 0.0)
                    .unwrap(),
            );
        });
        results.push(("bouwer_rice_curve", n, dur));
    }
    results
}

fn bench_synthetic(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let aquifer = AquiferParameters::new(3.2e-4, 2.1e-3).unwrap();
    let noise = NoiseModel::default_multiplicative();
    let mut results = Vec::new();
    for &n in sizes {
        let times = make_times(n, 42);

        // Warmup
        black_box(generate_series(&aquifer, 0.005, 120.0, &times, &noise, 7).unwrap());

        let dur = median_time(|| {
            black_box(generate_series(&aquifer, 0.005, 120.0, &times, &noise, 7).unwrap());
        });
        results.push(("synthetic_series", n, dur));
    }
    results
}

fn main() {
    println!("welltest core benchmarks");
    println!("============================================================");
    println!("{:<20} {:>8}   {:>12}", "Entry point", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_well_function(&[50, 1000, 100_000]));
    all_results.extend(bench_theis(&[60, 1000, 100_000]));
    all_results.extend(bench_bouwer_rice(&[300, 10_000]));
    all_results.extend(bench_synthetic(&[60, 10_000]));

    for (name, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<20} {:>8}      {:>8.3}", name, n, ms);
    }

    println!("============================================================");
}
