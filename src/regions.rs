use std::f64::consts::PI;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::classifier::{determine_region, Point};
use crate::error::RegionError;
use crate::polar_sector::Sector;

/// Largest side count accepted by [`build_regions`]. Sectors stay well over a microradian wide,
/// far above the classification tolerance.
pub const MAX_SIDES: i64 = 1 << 20;

/// Splits the full circle into `number_of_sides` equal sectors, one per side of a regular polygon.
///
/// Sector `i` spans `[i * 2pi/n, (i + 1) * 2pi/n)`. Each bound is computed from its index rather
/// than accumulated, so neighbouring sectors share bit-identical boundaries.
pub fn build_regions(number_of_sides: i64) -> Result<Vec<Sector>, RegionError> {
  let n = usize::try_from(number_of_sides)
    .ok()
    .filter(|&n| (1..=MAX_SIDES as usize).contains(&n))
    .ok_or(RegionError::InvalidArgument { value: number_of_sides as f64 })?;

  let step = (2. * PI) / n as f64;
  Ok((0..n).map(|i| Sector::new(i as f64 * step, (i + 1) as f64 * step)).collect())
}

/// Same as [`build_regions`], for side counts that arrive as floats. NaN, infinities and
/// fractional values are rejected.
pub fn build_regions_f64(number_of_sides: f64) -> Result<Vec<Sector>, RegionError> {
  if !number_of_sides.is_finite() || number_of_sides.fract() != 0. || number_of_sides < 1. {
    return Err(RegionError::InvalidArgument { value: number_of_sides });
  }
  build_regions(number_of_sides as i64)
}

/// A region table built once per side count and shared read-only between callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
  sectors: Vec<Sector>,
}

impl RegionTable {
  pub fn new(number_of_sides: i64) -> Result<RegionTable, RegionError> {
    Ok(RegionTable { sectors: build_regions(number_of_sides)? })
  }

  /// Number of polygon sides, i.e. number of regions.
  pub fn sides(&self) -> usize {
    self.sectors.len()
  }

  pub fn sectors(&self) -> &[Sector] {
    &self.sectors
  }

  /// Region of `target` as seen from `origin`.
  pub fn classify(&self, origin: Point, target: Point) -> Result<usize, RegionError> {
    determine_region(origin, target, &self.sectors)
  }
}

impl Deref for RegionTable {
  type Target = [Sector];

  fn deref(&self) -> &Self::Target {
    &self.sectors
  }
}
