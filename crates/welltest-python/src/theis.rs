use numpy::PyReadonlyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{contiguous_slice, domain_err};

use welltest_core::theis::params::AquiferParameters;
use welltest_core::theis::{processes, run, typecurve};

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_series_result! {
    /// Drawdown-versus-time results with typed numpy array attributes.
    pub struct DrawdownCurve from welltest_core::theis::run::DrawdownSeries {
        time_s, drawdown,
    }
}

fn aquifer(transmissivity: f64, storativity: f64) -> PyResult<AquiferParameters> {
    AquiferParameters::new(transmissivity, storativity).map_err(domain_err)
}

// ---------------------------------------------------------------------------
// Scalar transforms
// ---------------------------------------------------------------------------

#[pyfunction]
fn dimensionless_time(
    transmissivity: f64,
    storativity: f64,
    distance: f64,
    time: f64,
) -> PyResult<f64> {
    processes::dimensionless_time(transmissivity, storativity, distance, time)
        .map_err(domain_err)
}

#[pyfunction]
fn drawdown(
    transmissivity: f64,
    storativity: f64,
    pumping_rate: f64,
    distance: f64,
    time: f64,
) -> PyResult<f64> {
    let a = aquifer(transmissivity, storativity)?;
    run::drawdown(&a, pumping_rate, distance, time).map_err(domain_err)
}

#[pyfunction]
fn well_function_from_drawdown(
    pumping_rate: f64,
    transmissivity: f64,
    drawdown: f64,
) -> PyResult<f64> {
    processes::well_function_from_drawdown(pumping_rate, transmissivity, drawdown)
        .map_err(domain_err)
}

// ---------------------------------------------------------------------------
// Series forms
// ---------------------------------------------------------------------------

#[pyfunction]
fn drawdown_series<'py>(
    py: Python<'py>,
    transmissivity: f64,
    storativity: f64,
    pumping_rate: f64,
    distance: f64,
    times: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let a = aquifer(transmissivity, storativity)?;
    let times = contiguous_slice(&times)?;
    let series = run::drawdown_series(&a, pumping_rate, distance, times).map_err(domain_err)?;
    Ok(series_to_dict!(py, series, time_s, drawdown))
}

#[pyfunction]
fn drawdown_series_typed<'py>(
    py: Python<'py>,
    transmissivity: f64,
    storativity: f64,
    pumping_rate: f64,
    distance: f64,
    times: PyReadonlyArray1<'py, f64>,
) -> PyResult<DrawdownCurve> {
    let a = aquifer(transmissivity, storativity)?;
    let times = contiguous_slice(&times)?;
    let series = run::drawdown_series(&a, pumping_rate, distance, times).map_err(domain_err)?;
    Ok(DrawdownCurve::from_series(py, series))
}

#[pyfunction]
fn drawdown_profile<'py>(
    py: Python<'py>,
    transmissivity: f64,
    storativity: f64,
    pumping_rate: f64,
    distances: PyReadonlyArray1<'py, f64>,
    time: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let a = aquifer(transmissivity, storativity)?;
    let distances = contiguous_slice(&distances)?;
    let profile =
        run::drawdown_profile(&a, pumping_rate, distances, time).map_err(domain_err)?;
    Ok(series_to_dict!(py, profile, distance_m, drawdown))
}

// ---------------------------------------------------------------------------
// Type-curve workflow
// ---------------------------------------------------------------------------

#[pyfunction]
#[pyo3(signature = (
    lo_log10 = typecurve::LOG_U_MIN,
    hi_log10 = typecurve::LOG_U_MAX,
    n = typecurve::CURVE_POINTS,
))]
fn type_curve<'py>(
    py: Python<'py>,
    lo_log10: f64,
    hi_log10: f64,
    n: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let curve = typecurve::well_function_curve(lo_log10, hi_log10, n).map_err(domain_err)?;
    Ok(series_to_dict!(py, curve, inverse_u, well_function))
}

#[pyfunction]
#[pyo3(signature = (
    transmissivity,
    storativity,
    pumping_rate,
    distance,
    lo_log10 = typecurve::LOG_U_MIN,
    hi_log10 = typecurve::LOG_U_MAX,
    n = typecurve::CURVE_POINTS,
))]
#[allow(clippy::too_many_arguments)]
fn time_drawdown_curve<'py>(
    py: Python<'py>,
    transmissivity: f64,
    storativity: f64,
    pumping_rate: f64,
    distance: f64,
    lo_log10: f64,
    hi_log10: f64,
    n: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let a = aquifer(transmissivity, storativity)?;
    let series = typecurve::time_drawdown_curve(&a, pumping_rate, distance, lo_log10, hi_log10, n)
        .map_err(domain_err)?;
    Ok(series_to_dict!(py, series, time_s, drawdown))
}

#[pyfunction]
fn measurement_overlay<'py>(
    py: Python<'py>,
    transmissivity: f64,
    storativity: f64,
    pumping_rate: f64,
    distance: f64,
    times: PyReadonlyArray1<'py, f64>,
    drawdowns: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let a = aquifer(transmissivity, storativity)?;
    let times = contiguous_slice(&times)?;
    let drawdowns = contiguous_slice(&drawdowns)?;
    let overlay = typecurve::measurement_overlay(&a, pumping_rate, distance, times, drawdowns)
        .map_err(domain_err)?;
    Ok(series_to_dict!(py, overlay, inverse_u, well_function))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "theis")?;
    m.add_function(wrap_pyfunction!(dimensionless_time, &m)?)?;
    m.add_function(wrap_pyfunction!(drawdown, &m)?)?;
    m.add_function(wrap_pyfunction!(well_function_from_drawdown, &m)?)?;
    m.add_function(wrap_pyfunction!(drawdown_series, &m)?)?;
    m.add_function(wrap_pyfunction!(drawdown_series_typed, &m)?)?;
    m.add_function(wrap_pyfunction!(drawdown_profile, &m)?)?;
    m.add_function(wrap_pyfunction!(type_curve, &m)?)?;
    m.add_function(wrap_pyfunction!(time_drawdown_curve, &m)?)?;
    m.add_function(wrap_pyfunction!(measurement_overlay, &m)?)?;
    m.add_class::<DrawdownCurve>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
