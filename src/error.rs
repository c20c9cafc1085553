use thiserror::Error;

/// Errors returned by region construction and classification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// The side count is zero, negative, fractional, not finite, or above
    /// [`MAX_SIDES`](crate::regions::MAX_SIDES).
    #[error("invalid number of sides: {value} (expected an integer in 1..={max})", max = crate::regions::MAX_SIDES)]
    InvalidArgument { value: f64 },

    /// The boundary tolerance is negative, not finite, or at least half as wide as the
    /// narrowest sector.
    #[error("invalid boundary tolerance: {epsilon} (expected 0 <= epsilon < {limit})")]
    InvalidEpsilon { epsilon: f64, limit: f64 },

    /// Origin and target coincide, so there is no direction between them.
    #[error("bearing is undefined: origin and target coincide at ({x}, {y})")]
    UndefinedBearing { x: f64, y: f64 },

    /// No sector contains the bearing. Only reachable with a malformed
    /// table or a non-finite bearing.
    #[error("no region contains bearing {bearing}")]
    RegionNotFound { bearing: f64 },
}
