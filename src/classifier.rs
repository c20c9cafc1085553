use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::RegionError;
use crate::params::{Params, DEFAULT_PARAMS};
use crate::polar_sector::{normalize_bearing, Sector};

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bearing from `origin` to `target`, in radians within [0, 2pi).
pub fn bearing(origin: Point, target: Point) -> Result<f64, RegionError> {
    if origin == target {
        return Err(RegionError::UndefinedBearing { x: origin.x, y: origin.y });
    }
    Ok(normalize_bearing((target.y - origin.y).atan2(target.x - origin.x)))
}

/// Index of the sector of `regions` that contains the bearing from `origin` to `target`.
///
/// `regions` must be a contiguous table covering [0, 2pi), as built by
/// [`build_regions`](crate::regions::build_regions).
pub fn determine_region(
    origin: Point,
    target: Point,
    regions: &[Sector],
) -> Result<usize, RegionError> {
    determine_region_with(origin, target, regions, &DEFAULT_PARAMS)
}

/// [`determine_region`] with explicit parameters.
pub fn determine_region_with(
    origin: Point,
    target: Point,
    regions: &[Sector],
    params: &Params,
) -> Result<usize, RegionError> {
    region_of_bearing(bearing(origin, target)?, regions, params)
}

/// Index of the sector of `regions` that contains an already normalised bearing.
///
/// The bearing is shifted up by `params.epsilon` before matching, so one that lands a rounding
/// error short of an interior boundary still goes to the higher-index sector. The last sector
/// is closed at the top.
pub fn region_of_bearing(
    theta: f64,
    regions: &[Sector],
    params: &Params,
) -> Result<usize, RegionError> {
    params.check(regions)?;
    let not_found = RegionError::RegionNotFound { bearing: theta };
    let last = match regions.len().checked_sub(1) {
        Some(last) => last,
        None => return Err(not_found),
    };

    let probe = theta + params.epsilon;
    for (i, sector) in regions.iter().enumerate() {
        if sector.contains(probe, false) || (i == last && sector.contains(theta, true)) {
            return Ok(i);
        }
    }

    // Only finite bearings a hair outside the table are clamped; NaN falls through
    if params.clamp_out_of_range && theta.is_finite() {
        if probe < regions[0].min {
            log::trace!("Clamping bearing {} up to region 0", theta);
            return Ok(0);
        }
        if theta > regions[last].max {
            log::trace!("Clamping bearing {} down to region {}", theta, last);
            return Ok(last);
        }
    }
    Err(not_found)
}
