use std::fmt::Display;

use crate::error::RegionError;
use crate::polar_sector::Sector;

/// Largest boundary tolerance accepted, in radians.
pub const MAX_EPSILON: f64 = 1e-6;

pub const DEFAULT_PARAMS: Params = Params {
    // Boundary tolerance, in radians
    epsilon: 1e-9,
    // Snap bearings that fall just outside [0, 2pi] into the end sectors
    clamp_out_of_range: true,
};

/// Classification parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Tolerance applied to bearings before they are matched against sector
    /// bounds. A bearing within `epsilon` below an interior boundary belongs
    /// to the higher-index sector.
    pub epsilon: f64,
    /// Whether a finite bearing below the first sector or above the last one
    /// is clamped to the nearest sector instead of failing.
    pub clamp_out_of_range: bool,
}

impl Params {
    /// Checks that `epsilon` is usable against `regions`: finite, non-negative, at most
    /// [`MAX_EPSILON`] and below half the narrowest sector.
    pub fn check(&self, regions: &[Sector]) -> Result<(), RegionError> {
        let half_width = regions.iter().map(Sector::width).fold(f64::INFINITY, f64::min) / 2.;
        let limit = half_width.min(MAX_EPSILON);
        let within = self.epsilon <= MAX_EPSILON && self.epsilon < half_width;
        if !self.epsilon.is_finite() || self.epsilon < 0. || !within {
            return Err(RegionError::InvalidEpsilon { epsilon: self.epsilon, limit });
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== Region Classification Parameters =====")?;
        writeln!(f, "\t - epsilon (boundary tolerance, rad): {:e}", self.epsilon)?;
        writeln!(
            f,
            "\t - clamp_out_of_range (snap stray bearings to end sectors): {}",
            self.clamp_out_of_range
        )
    }
}
