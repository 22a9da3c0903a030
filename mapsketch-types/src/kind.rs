use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownGeometryKind;

/// Kind of a [`GeometryVariant`](crate::GeometryVariant).
///
/// The set is closed: styling and conversion dispatch on this tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// Single point.
    Point,
    /// Set of points.
    MultiPoint,
    /// Open line.
    Polyline,
    /// Line following great circle arcs between its vertices.
    GeodesicPolyline,
    /// Area bounded by a single ring.
    Polygon,
    /// Set of independent lines.
    MultiPolyline,
    /// Set of independent polygons.
    MultiPolygon,
    /// Circle given by center and radius in meters.
    Circle,
    /// Path-like overlay shape that does not fit any of the other kinds.
    GenericOverlayPath,
}

impl GeometryKind {
    /// All kinds in declaration order.
    pub const ALL: [GeometryKind; 9] = [
        GeometryKind::Point,
        GeometryKind::MultiPoint,
        GeometryKind::Polyline,
        GeometryKind::GeodesicPolyline,
        GeometryKind::Polygon,
        GeometryKind::MultiPolyline,
        GeometryKind::MultiPolygon,
        GeometryKind::Circle,
        GeometryKind::GenericOverlayPath,
    ];

    /// Stable label of the kind.
    pub fn label(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::Polyline => "Polyline",
            GeometryKind::GeodesicPolyline => "GeodesicPolyline",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolyline => "MultiPolyline",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::Circle => "Circle",
            GeometryKind::GenericOverlayPath => "GenericOverlayPath",
        }
    }

    /// Minimum number of points in a path of this kind. For multi kinds the minimum applies to every path.
    pub fn min_points(&self) -> usize {
        match self {
            GeometryKind::Point | GeometryKind::MultiPoint | GeometryKind::Circle => 1,
            GeometryKind::Polyline
            | GeometryKind::GeodesicPolyline
            | GeometryKind::MultiPolyline
            | GeometryKind::GenericOverlayPath => 2,
            GeometryKind::Polygon | GeometryKind::MultiPolygon => 3,
        }
    }

    /// Maximum number of points, if the kind is limited.
    pub fn max_points(&self) -> Option<usize> {
        match self {
            GeometryKind::Point | GeometryKind::Circle => Some(1),
            _ => None,
        }
    }

    /// Returns true if the kind consists of several independent paths.
    pub fn is_multi(&self) -> bool {
        matches!(self, GeometryKind::MultiPolyline | GeometryKind::MultiPolygon)
    }

    /// Returns true for kinds whose paths are polygon rings.
    pub fn is_polygon(&self) -> bool {
        matches!(self, GeometryKind::Polygon | GeometryKind::MultiPolygon)
    }

    /// Returns true if geometries of this kind are always geodesic.
    pub fn is_geodesic(&self) -> bool {
        *self == GeometryKind::GeodesicPolyline
    }

    /// Returns true if geometries of this kind can take part in overlay composition. Points are drawn as markers
    /// and never become overlays.
    pub fn is_overlay(&self) -> bool {
        !matches!(self, GeometryKind::Point | GeometryKind::MultiPoint)
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GeometryKind {
    type Err = UnknownGeometryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| UnknownGeometryKind(s.to_string()))
    }
}
