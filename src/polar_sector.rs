use std::f64::consts::PI;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Represent a sector of a polar graph (min / max angle, in radians within [0, 2pi]).
///
/// `min` is inclusive. `max` is exclusive, except for the last sector of a table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sector {
  pub min: f64,
  pub max: f64,
}

impl Sector {
  pub fn new(min: f64, max: f64) -> Sector {
    Sector { min, max }
  }

  /// Angular width of the sector.
  pub fn width(&self) -> f64 {
    self.max - self.min
  }

  /// Bearing that bisects the sector.
  pub fn midpoint(&self) -> f64 {
    self.min + self.width() / 2.
  }

  /// Checks if a bearing falls within this sector. `inclusive_max` closes the upper bound, which
  /// only the final sector of a table does.
  pub fn contains(&self, theta: f64, inclusive_max: bool) -> bool {
    theta >= self.min && (theta < self.max || (inclusive_max && theta <= self.max))
  }

  /// Bounds in degrees, for display.
  pub fn to_degrees(&self) -> (f64, f64) {
    (self.min.to_degrees(), self.max.to_degrees())
  }
}

impl Display for Sector {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{:.4}, {:.4})", self.min, self.max)
  }
}

/// Maps a raw `atan2` result in (-pi, pi] onto [0, 2pi).
pub fn normalize_bearing(theta_raw: f64) -> f64 {
  if theta_raw < 0. {
    theta_raw + 2. * PI
  } else {
    theta_raw
  }
}
