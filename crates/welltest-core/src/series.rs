//! Ordered time series of field or synthetic observations.

use welltest_macros::Record;

use crate::error::{ensure_finite, DomainError};

/// One observation: elapsed seconds since the perturbation began, paired
/// with the observed value (drawdown in meters, or a normalized head ratio).
#[derive(Debug, Clone, Copy, Record)]
#[record(series_name = "TimeSeries")]
pub struct Sample {
    pub time_s: f64,
    pub value: f64,
}

impl TimeSeries {
    /// Build a series from the two-column tabular shape the data loaders
    /// hand over (column 0: elapsed seconds, column 1: value in meters).
    /// Header resolution is the loader's job; this only sees numbers.
    ///
    /// Ordering is the measuring device's: it is kept exactly, with no
    /// reordering or deduplication.
    pub fn from_columns(times: &[f64], values: &[f64]) -> Result<Self, DomainError> {
        if times.len() != values.len() {
            return Err(DomainError::ColumnLengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        let mut series = TimeSeries::with_capacity(times.len());
        for (&t, &v) in times.iter().zip(values) {
            let t = ensure_finite("time", t)?;
            if t < 0.0 {
                return Err(DomainError::Negative { name: "time", value: t });
            }
            let v = ensure_finite("value", v)?;
            series.push(&Sample { time_s: t, value: v });
        }
        Ok(series)
    }
}
