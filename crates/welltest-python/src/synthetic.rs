use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{contiguous_slice, domain_err};

use welltest_core::rng::Lcg;
use welltest_core::synthetic::noise::NoiseModel;
use welltest_core::synthetic::{generate_series, scenario};
use welltest_core::theis::params::AquiferParameters;

fn noise_model(kind: &str, lower: f64, upper: f64, std_dev: f64) -> PyResult<NoiseModel> {
    match kind {
        "multiplicative" => Ok(NoiseModel::MultiplicativeUniform { lower, upper }),
        "additive" => Ok(NoiseModel::AdditiveNormal { std_dev }),
        _ => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "unknown noise model '{kind}'"
        ))),
    }
}

/// Draw the hidden true (T, S) pair for an exercise round.
#[pyfunction]
fn generate_true_parameters(thickness: f64, seed: u64) -> PyResult<(f64, f64)> {
    let mut rng = Lcg::new(seed);
    let truth = scenario::generate_true_parameters(thickness, &mut rng).map_err(domain_err)?;
    Ok((truth.transmissivity, truth.storativity))
}

#[pyfunction]
#[pyo3(signature = (
    transmissivity,
    storativity,
    pumping_rate,
    distance,
    times,
    seed,
    noise = "multiplicative",
    lower = 0.8,
    upper = 1.2,
    std_dev = 0.02,
))]
#[allow(clippy::too_many_arguments)]
fn generate_synthetic_series<'py>(
    py: Python<'py>,
    transmissivity: f64,
    storativity: f64,
    pumping_rate: f64,
    distance: f64,
    times: PyReadonlyArray1<'py, f64>,
    seed: u64,
    noise: &str,
    lower: f64,
    upper: f64,
    std_dev: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let aquifer =
        AquiferParameters::new(transmissivity, storativity).map_err(domain_err)?;
    let model = noise_model(noise, lower, upper, std_dev)?;
    let times = contiguous_slice(&times)?;
    let series = generate_series(&aquifer, pumping_rate, distance, times, &model, seed)
        .map_err(domain_err)?;
    Ok(series_to_dict!(py, series, time_s, value))
}

/// The standard pumping-test observation grid in seconds.
#[pyfunction]
fn standard_observation_times(py: Python<'_>) -> Bound<'_, PyArray1<f64>> {
    PyArray1::from_vec(py, scenario::standard_observation_times())
}

/// Observation counts for this round's (short, long) pumping tests.
#[pyfunction]
fn sample_counts(seed: u64) -> (usize, usize) {
    scenario::sample_counts(&mut Lcg::new(seed))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "synthetic")?;
    m.add_function(wrap_pyfunction!(generate_true_parameters, &m)?)?;
    m.add_function(wrap_pyfunction!(generate_synthetic_series, &m)?)?;
    m.add_function(wrap_pyfunction!(standard_observation_times, &m)?)?;
    m.add_function(wrap_pyfunction!(sample_counts, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
