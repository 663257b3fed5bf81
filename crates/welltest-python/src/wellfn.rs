use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::{contiguous_slice, domain_err};

use welltest_core::wellfn;

#[pyfunction]
fn well_function(u: f64) -> PyResult<f64> {
    wellfn::well_function(u).map_err(domain_err)
}

/// W(u) plus an accuracy flag (`"tiny_argument"` / `"huge_argument"`) for
/// arguments outside the reliable range.
#[pyfunction]
fn well_function_checked(u: f64) -> PyResult<(f64, Option<&'static str>)> {
    let (value, warning) = wellfn::well_function_checked(u).map_err(domain_err)?;
    let flag = warning.map(|w| match w {
        wellfn::PrecisionWarning::TinyArgument => "tiny_argument",
        wellfn::PrecisionWarning::HugeArgument => "huge_argument",
    });
    Ok((value, flag))
}

#[pyfunction]
fn well_function_series<'py>(
    py: Python<'py>,
    u: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let u = contiguous_slice(&u)?;
    let values = wellfn::well_function_series(u).map_err(domain_err)?;
    Ok(PyArray1::from_vec(py, values))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "wellfn")?;
    m.add_function(wrap_pyfunction!(well_function, &m)?)?;
    m.add_function(wrap_pyfunction!(well_function_checked, &m)?)?;
    m.add_function(wrap_pyfunction!(well_function_series, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
