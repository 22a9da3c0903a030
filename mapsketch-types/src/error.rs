//! Error types used by the crate.

use thiserror::Error;

use crate::kind::GeometryKind;

/// Input data cannot be turned into a valid [`GeometryVariant`](crate::GeometryVariant).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidGeometryError {
    /// A path has fewer points than the kind requires (or a multi-shape has no paths at all).
    #[error("{kind} requires at least {required} points, got {actual}")]
    TooFewPoints {
        /// Kind being constructed.
        kind: GeometryKind,
        /// Minimum number of points.
        required: usize,
        /// Number of points given.
        actual: usize,
    },
    /// A single-coordinate kind got more than one coordinate.
    #[error("{kind} accepts at most {max} points, got {actual}")]
    TooManyPoints {
        /// Kind being constructed.
        kind: GeometryKind,
        /// Maximum number of points.
        max: usize,
        /// Number of points given.
        actual: usize,
    },
    /// Circle radius is missing, not finite or not positive.
    #[error("invalid circle radius: {0:?}")]
    InvalidRadius(Option<f64>),
    /// Geodesic flag contradicts the geometry kind.
    #[error("geodesic flag {is_geodesic} is not valid for {kind}")]
    GeodesicFlagMismatch {
        /// Kind being constructed.
        kind: GeometryKind,
        /// Requested value of the flag.
        is_geodesic: bool,
    },
    /// Number of paths does not fit the kind.
    #[error("{kind} takes a single path, got {actual}")]
    PathCountMismatch {
        /// Kind being constructed.
        kind: GeometryKind,
        /// Number of paths given.
        actual: usize,
    },
    /// Coordinate lies outside of geographic range or is not finite.
    #[error("coordinate out of range: lat {lat}, lon {lon}")]
    CoordinateOutOfRange {
        /// Latitude value.
        lat: f64,
        /// Longitude value.
        lon: f64,
    },
    /// GeoJSON position has less than two values.
    #[cfg(feature = "geojson")]
    #[error("position must have at least 2 values, got {0}")]
    MalformedPosition(usize),
}

/// Index is beyond the end of a [`CoordinateSequence`](crate::CoordinateSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for a sequence of {len} coordinates")]
pub struct IndexOutOfRange {
    /// Requested index.
    pub index: usize,
    /// Length of the sequence.
    pub len: usize,
}

/// String is not a known geometry kind label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown geometry kind: {0}")]
pub struct UnknownGeometryKind(pub String);
