//! Partition the full turn around a point into the equal sectors of a regular polygon, and
//! classify the direction between two points into one of them.

pub mod classifier;
pub mod error;
pub mod params;
pub mod polar_sector;
pub mod regions;

pub use classifier::{bearing, determine_region, determine_region_with, region_of_bearing, Point};
pub use error::RegionError;
pub use params::{Params, DEFAULT_PARAMS, MAX_EPSILON};
pub use polar_sector::Sector;
pub use regions::{build_regions, build_regions_f64, RegionTable, MAX_SIDES};
