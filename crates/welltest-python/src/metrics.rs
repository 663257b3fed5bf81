use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::{contiguous_slice, domain_err};

use welltest_core::metrics;

#[pyfunction]
fn nse(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
) -> PyResult<f64> {
    Ok(metrics::nse(contiguous_slice(&observed)?, contiguous_slice(&simulated)?))
}

#[pyfunction]
fn rmse(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
) -> PyResult<f64> {
    Ok(metrics::rmse(contiguous_slice(&observed)?, contiguous_slice(&simulated)?))
}

#[pyfunction]
fn mae(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
) -> PyResult<f64> {
    Ok(metrics::mae(contiguous_slice(&observed)?, contiguous_slice(&simulated)?))
}

#[pyfunction]
fn fit_success_percent(estimate: f64, truth: f64) -> PyResult<f64> {
    metrics::fit_success_percent(estimate, truth).map_err(domain_err)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "metrics")?;
    m.add_function(wrap_pyfunction!(nse, &m)?)?;
    m.add_function(wrap_pyfunction!(rmse, &m)?)?;
    m.add_function(wrap_pyfunction!(mae, &m)?)?;
    m.add_function(wrap_pyfunction!(fit_success_percent, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
