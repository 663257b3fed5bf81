use numpy::PyReadonlyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{contiguous_slice, domain_err};

use welltest_core::bouwer_rice::params::{EffectiveRadiusPolicy, SlugWellGeometry};
use welltest_core::bouwer_rice::{processes, run};

define_series_result! {
    /// Recovery-curve results with typed numpy array attributes.
    pub struct RecoveryCurve from welltest_core::bouwer_rice::run::RecoverySeries {
        time_s, head_ratio,
    }
}

fn geometry(
    casing_radius: f64,
    screen_radius: f64,
    screen_length: f64,
) -> PyResult<SlugWellGeometry> {
    SlugWellGeometry::new(casing_radius, screen_radius, screen_length).map_err(domain_err)
}

fn policy(name: &str, saturated_thickness: Option<f64>) -> PyResult<EffectiveRadiusPolicy> {
    match (name, saturated_thickness) {
        ("screen_length", _) => Ok(EffectiveRadiusPolicy::ScreenLength),
        ("partially_penetrating", _) => Ok(EffectiveRadiusPolicy::PartiallyPenetrating),
        ("fully_penetrating", Some(d)) => {
            Ok(EffectiveRadiusPolicy::FullyPenetrating { saturated_thickness: d })
        }
        ("fully_penetrating", None) => Err(pyo3::exceptions::PyValueError::new_err(
            "fully_penetrating policy requires saturated_thickness",
        )),
        _ => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "unknown effective-radius policy '{name}'"
        ))),
    }
}

#[pyfunction]
fn initial_head(slug_volume_m3: f64, casing_radius: f64) -> PyResult<f64> {
    processes::initial_displacement(slug_volume_m3, casing_radius).map_err(domain_err)
}

#[pyfunction]
fn initial_head_cm3(slug_volume_cm3: f64, casing_radius: f64) -> PyResult<f64> {
    processes::initial_displacement_cm3(slug_volume_cm3, casing_radius).map_err(domain_err)
}

#[pyfunction]
#[pyo3(signature = (
    casing_radius,
    screen_radius,
    screen_length,
    policy_name = "screen_length",
    saturated_thickness = None,
))]
fn shape_factor(
    casing_radius: f64,
    screen_radius: f64,
    screen_length: f64,
    policy_name: &str,
    saturated_thickness: Option<f64>,
) -> PyResult<f64> {
    let g = geometry(casing_radius, screen_radius, screen_length)?;
    let p = policy(policy_name, saturated_thickness)?;
    processes::shape_factor(&g, p).map_err(domain_err)
}

#[pyfunction]
#[pyo3(signature = (
    conductivity,
    casing_radius,
    screen_radius,
    screen_length,
    time,
    time_offset = 0.0,
    policy_name = "screen_length",
    saturated_thickness = None,
))]
#[allow(clippy::too_many_arguments)]
fn normalized_head(
    conductivity: f64,
    casing_radius: f64,
    screen_radius: f64,
    screen_length: f64,
    time: f64,
    time_offset: f64,
    policy_name: &str,
    saturated_thickness: Option<f64>,
) -> PyResult<f64> {
    let g = geometry(casing_radius, screen_radius, screen_length)?;
    let p = policy(policy_name, saturated_thickness)?;
    let curve =
        run::recovery_curve(conductivity, &g, p, &[time], time_offset).map_err(domain_err)?;
    Ok(curve.head_ratio[0])
}

#[pyfunction]
#[pyo3(signature = (
    conductivity,
    casing_radius,
    screen_radius,
    screen_length,
    times,
    time_offset = 0.0,
    policy_name = "screen_length",
    saturated_thickness = None,
))]
#[allow(clippy::too_many_arguments)]
fn recovery_curve<'py>(
    py: Python<'py>,
    conductivity: f64,
    casing_radius: f64,
    screen_radius: f64,
    screen_length: f64,
    times: PyReadonlyArray1<'py, f64>,
    time_offset: f64,
    policy_name: &str,
    saturated_thickness: Option<f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let g = geometry(casing_radius, screen_radius, screen_length)?;
    let p = policy(policy_name, saturated_thickness)?;
    let times = contiguous_slice(&times)?;
    let curve =
        run::recovery_curve(conductivity, &g, p, times, time_offset).map_err(domain_err)?;
    Ok(series_to_dict!(py, curve, time_s, head_ratio))
}

#[pyfunction]
#[pyo3(signature = (
    conductivity,
    casing_radius,
    screen_radius,
    screen_length,
    times,
    time_offset = 0.0,
    policy_name = "screen_length",
    saturated_thickness = None,
))]
#[allow(clippy::too_many_arguments)]
fn recovery_curve_typed<'py>(
    py: Python<'py>,
    conductivity: f64,
    casing_radius: f64,
    screen_radius: f64,
    screen_length: f64,
    times: PyReadonlyArray1<'py, f64>,
    time_offset: f64,
    policy_name: &str,
    saturated_thickness: Option<f64>,
) -> PyResult<RecoveryCurve> {
    let g = geometry(casing_radius, screen_radius, screen_length)?;
    let p = policy(policy_name, saturated_thickness)?;
    let times = contiguous_slice(&times)?;
    let curve =
        run::recovery_curve(conductivity, &g, p, times, time_offset).map_err(domain_err)?;
    Ok(RecoveryCurve::from_series(py, curve))
}

#[pyfunction]
#[pyo3(signature = (
    casing_radius,
    screen_radius,
    screen_length,
    time,
    head_ratio,
    policy_name = "screen_length",
    saturated_thickness = None,
))]
#[allow(clippy::too_many_arguments)]
fn conductivity_from_recovery(
    casing_radius: f64,
    screen_radius: f64,
    screen_length: f64,
    time: f64,
    head_ratio: f64,
    policy_name: &str,
    saturated_thickness: Option<f64>,
) -> PyResult<f64> {
    let g = geometry(casing_radius, screen_radius, screen_length)?;
    let p = policy(policy_name, saturated_thickness)?;
    let f = processes::shape_factor(&g, p).map_err(domain_err)?;
    processes::conductivity_from_recovery(f, casing_radius, time, head_ratio)
        .map_err(domain_err)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "bouwer_rice")?;
    m.add_function(wrap_pyfunction!(initial_head, &m)?)?;
    m.add_function(wrap_pyfunction!(initial_head_cm3, &m)?)?;
    m.add_function(wrap_pyfunction!(shape_factor, &m)?)?;
    m.add_function(wrap_pyfunction!(normalized_head, &m)?)?;
    m.add_function(wrap_pyfunction!(recovery_curve, &m)?)?;
    m.add_function(wrap_pyfunction!(recovery_curve_typed, &m)?)?;
    m.add_function(wrap_pyfunction!(conductivity_from_recovery, &m)?)?;
    m.add_class::<RecoveryCurve>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
