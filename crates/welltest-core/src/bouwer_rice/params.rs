//! Well geometry and the effective-radius estimate for slug tests.

use crate::error::{ensure_positive, DomainError};

/// Geometry of a slugged observation well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlugWellGeometry {
    /// Casing radius rc [m] — the water column the slug displaces.
    pub casing_radius: f64,
    /// Screen radius rw [m].
    pub screen_radius: f64,
    /// Screen length L [m] intersecting the aquifer.
    pub screen_length: f64,
}

impl SlugWellGeometry {
    /// Create validated geometry; all three lengths must be positive.
    pub fn new(
        casing_radius: f64,
        screen_radius: f64,
        screen_length: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            casing_radius: ensure_positive("casing radius", casing_radius)?,
            screen_radius: ensure_positive("screen radius", screen_radius)?,
            screen_length: ensure_positive("screen length", screen_length)?,
        })
    }
}

/// How the effective radius of influence Re is estimated.
///
/// `ScreenLength` (Re = L) is the classroom simplification the recovery
/// curves default to; the other two are the Bouwer & Rice estimates for the
/// limiting penetration cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectiveRadiusPolicy {
    /// Re = L.
    ScreenLength,
    /// Re = D/2 for a fully penetrating well in saturated thickness D [m].
    FullyPenetrating { saturated_thickness: f64 },
    /// Re = 1.1·L + rw for a partially penetrating well.
    PartiallyPenetrating,
}

impl Default for EffectiveRadiusPolicy {
    fn default() -> Self {
        Self::ScreenLength
    }
}

impl EffectiveRadiusPolicy {
    /// Effective radius [m] for the given geometry.
    pub fn effective_radius(&self, geometry: &SlugWellGeometry) -> Result<f64, DomainError> {
        match *self {
            Self::ScreenLength => Ok(geometry.screen_length),
            Self::FullyPenetrating { saturated_thickness } => {
                Ok(ensure_positive("saturated thickness", saturated_thickness)? / 2.0)
            }
            Self::PartiallyPenetrating => {
                Ok(1.1 * geometry.screen_length + geometry.screen_radius)
            }
        }
    }
}
