//! Bulk hydraulic properties of the pumped formation.

use crate::error::{ensure_positive, DomainError};

/// Transmissivity and storativity of a confined aquifer.
///
/// Immutable once constructed; a revised estimate is a new value, never an
/// in-place update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AquiferParameters {
    /// Transmissivity T [m²/s].
    pub transmissivity: f64,
    /// Storativity S [-], typically well below 1 for confined conditions.
    pub storativity: f64,
}

impl AquiferParameters {
    /// Create validated parameters. Both must be finite and positive.
    pub fn new(transmissivity: f64, storativity: f64) -> Result<Self, DomainError> {
        Ok(Self {
            transmissivity: ensure_positive("transmissivity", transmissivity)?,
            storativity: ensure_positive("storativity", storativity)?,
        })
    }

    /// Hydraulic conductivity K = T/b [m/s] for formation thickness `b` [m].
    ///
    /// Shown next to fitted values as a plausibility check.
    pub fn hydraulic_conductivity(&self, thickness: f64) -> Result<f64, DomainError> {
        Ok(self.transmissivity / ensure_positive("thickness", thickness)?)
    }

    /// Specific storage Ss = S/b [1/m] for formation thickness `b` [m].
    pub fn specific_storage(&self, thickness: f64) -> Result<f64, DomainError> {
        Ok(self.storativity / ensure_positive("thickness", thickness)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn valid_parameters() {
        let p = AquiferParameters::new(1e-4, 1e-4).unwrap();
        assert_eq!(p.transmissivity, 1e-4);
        assert_eq!(p.storativity, 1e-4);
    }

    #[test]
    fn rejects_non_positive_transmissivity() {
        assert!(AquiferParameters::new(0.0, 1e-4).is_err());
        assert!(AquiferParameters::new(-1e-4, 1e-4).is_err());
    }

    #[test]
    fn rejects_non_positive_storativity() {
        assert!(AquiferParameters::new(1e-4, 0.0).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(AquiferParameters::new(f64::NAN, 1e-4).is_err());
    }

    #[test]
    fn derived_conductivity_and_storage() {
        // SYMPLE exercise formation: b = 8.5 m.
        let p = AquiferParameters::new(1e-4, 1e-4).unwrap();
        assert_relative_eq!(p.hydraulic_conductivity(8.5).unwrap(), 1e-4 / 8.5);
        assert_relative_eq!(p.specific_storage(8.5).unwrap(), 1e-4 / 8.5);
    }

    #[test]
    fn derived_values_reject_bad_thickness() {
        let p = AquiferParameters::new(1e-4, 1e-4).unwrap();
        assert!(p.hydraulic_conductivity(0.0).is_err());
        assert!(p.specific_storage(-2.0).is_err());
    }
}
