use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::kind::GeometryKind;
use crate::variant::{Geometry, GeometryVariant};

/// Record form of a [`GeometryVariant`], as it is handed to and received from a storage layer.
///
/// The record is not validated by itself. [`GeometryVariant`] is (de)serialized through this type, and
/// deserialization runs the same validation as construction, so a stored geodesic line with `is_geodesic: false`
/// or a polygon with two points is rejected. A record without `is_geodesic` takes the flag from its kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoredGeometry {
    /// Kind of the geometry.
    pub kind: GeometryKind,
    /// Ordered coordinate lists. Points and circles store a single list with one coordinate.
    #[serde(default)]
    pub paths: Vec<Vec<Coordinate>>,
    /// Circle radius in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Representative coordinate.
    pub base_coordinate: Coordinate,
    /// Geodesic flag. Only written for geodesic lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_geodesic: Option<bool>,
}

impl From<&GeometryVariant> for StoredGeometry {
    fn from(value: &GeometryVariant) -> Self {
        let paths = match value.geometry() {
            Geometry::Point => vec![vec![value.base_coordinate()]],
            Geometry::Circle { center, .. } => vec![vec![*center]],
            _ => value.paths().map(|path| path.to_vec()).collect(),
        };

        Self {
            kind: value.kind(),
            paths,
            radius: value.radius(),
            base_coordinate: value.base_coordinate(),
            is_geodesic: value.is_geodesic().then_some(true),
        }
    }
}

impl From<GeometryVariant> for StoredGeometry {
    fn from(value: GeometryVariant) -> Self {
        Self::from(&value)
    }
}
