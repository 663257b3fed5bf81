//! Forward drawdown orchestration: scalar, time series, distance profile.

use welltest_macros::Record;

use super::params::AquiferParameters;
use super::processes;
use crate::error::DomainError;
use crate::traits::AnalyticalModel;

/// Predicted drawdown at one elapsed time.
#[derive(Debug, Clone, Copy, Record)]
#[record(series_name = "DrawdownSeries")]
pub struct DrawdownSample {
    pub time_s: f64,
    pub drawdown: f64,
}

/// Predicted drawdown at one radial distance.
#[derive(Debug, Clone, Copy, Record)]
#[record(series_name = "DrawdownProfile")]
pub struct ProfileSample {
    pub distance_m: f64,
    pub drawdown: f64,
}

/// Drawdown at `distance` after pumping for `time` seconds at
/// `pumping_rate`: the composition u = r²S/(4Tt), s = Q·W(u)/(4πT).
///
/// The unbounded growth of s as t → ∞ is the Theis model's own behavior
/// under the infinite-aquifer assumption and is returned as-is.
pub fn drawdown(
    aquifer: &AquiferParameters,
    pumping_rate: f64,
    distance: f64,
    time: f64,
) -> Result<f64, DomainError> {
    let u = processes::dimensionless_time(
        aquifer.transmissivity,
        aquifer.storativity,
        distance,
        time,
    )?;
    processes::drawdown_from_u(pumping_rate, aquifer.transmissivity, u)
}

/// Drawdown history at a fixed distance over `times`, ordering preserved.
pub fn drawdown_series(
    aquifer: &AquiferParameters,
    pumping_rate: f64,
    distance: f64,
    times: &[f64],
) -> Result<DrawdownSeries, DomainError> {
    let mut out = DrawdownSeries::with_capacity(times.len());
    for &t in times {
        out.push(&DrawdownSample {
            time_s: t,
            drawdown: drawdown(aquifer, pumping_rate, distance, t)?,
        });
    }
    Ok(out)
}

/// Drawdown at a fixed time across several distances — the cone of
/// depression sampled where the stakeholders sit.
pub fn drawdown_profile(
    aquifer: &AquiferParameters,
    pumping_rate: f64,
    distances: &[f64],
    time: f64,
) -> Result<DrawdownProfile, DomainError> {
    let mut out = DrawdownProfile::with_capacity(distances.len());
    for &r in distances {
        out.push(&ProfileSample {
            distance_m: r,
            drawdown: drawdown(aquifer, pumping_rate, r, time)?,
        });
    }
    Ok(out)
}

/// Drawdown at one place and time for several candidate pumping rates.
///
/// W(u) does not depend on Q, so it is evaluated once and scaled.
pub fn drawdown_per_rate(
    aquifer: &AquiferParameters,
    pumping_rates: &[f64],
    distance: f64,
    time: f64,
) -> Result<Vec<f64>, DomainError> {
    let u = processes::dimensionless_time(
        aquifer.transmissivity,
        aquifer.storativity,
        distance,
        time,
    )?;
    pumping_rates
        .iter()
        .map(|&q| processes::drawdown_from_u(q, aquifer.transmissivity, u))
        .collect()
}

/// One configured prediction: aquifer estimate, pumping rate, and the
/// distance of the observation point.
#[derive(Debug, Clone, Copy)]
pub struct TheisPrediction {
    pub aquifer: AquiferParameters,
    pub pumping_rate: f64,
    pub distance: f64,
}

impl AnalyticalModel for TheisPrediction {
    fn evaluate(&self, t: f64) -> Result<f64, DomainError> {
        drawdown(&self.aquifer, self.pumping_rate, self.distance, t)
    }
}
