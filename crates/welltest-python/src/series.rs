use numpy::PyReadonlyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{contiguous_slice, domain_err};

use welltest_core::TimeSeries;

/// Validate the two-column (seconds, meters) shape the CSV loaders hand
/// over and return it as clean arrays.
#[pyfunction]
fn from_columns<'py>(
    py: Python<'py>,
    times: PyReadonlyArray1<'py, f64>,
    values: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let series =
        TimeSeries::from_columns(contiguous_slice(&times)?, contiguous_slice(&values)?)
            .map_err(domain_err)?;
    Ok(series_to_dict!(py, series, time_s, value))
}

/// The first `n` rows of a validated series, for truncated-test exercises.
#[pyfunction]
fn truncated<'py>(
    py: Python<'py>,
    times: PyReadonlyArray1<'py, f64>,
    values: PyReadonlyArray1<'py, f64>,
    n: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let series =
        TimeSeries::from_columns(contiguous_slice(&times)?, contiguous_slice(&values)?)
            .map_err(domain_err)?
            .truncated(n);
    Ok(series_to_dict!(py, series, time_s, value))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "series")?;
    m.add_function(wrap_pyfunction!(from_columns, &m)?)?;
    m.add_function(wrap_pyfunction!(truncated, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
