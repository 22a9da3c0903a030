//! Conversion between stored [`GeometryVariant`]s and [`RenderableShape`]s exchanged with a rendering toolkit.
//!
//! [`reconstruct`] turns a validated geometry into coordinate lists ready to be drawn and never fails.
//! [`capture`] goes the other way for shapes drawn by a user or received from outside, and runs the same
//! validation as geometry construction.

use mapsketch_types::{
    Coordinate, Geometry, GeometryBuilder, GeometryKind, GeometryVariant, InvalidGeometryError,
};

/// Coordinates of a renderable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePaths {
    /// Single ordered list of coordinates.
    Path(Vec<Coordinate>),
    /// Several independent lists (lines or rings).
    Multi(Vec<Vec<Coordinate>>),
}

impl ShapePaths {
    /// Number of coordinate lists.
    pub fn path_count(&self) -> usize {
        match self {
            ShapePaths::Path(_) => 1,
            ShapePaths::Multi(paths) => paths.len(),
        }
    }

    fn to_paths(&self) -> Vec<Vec<Coordinate>> {
        match self {
            ShapePaths::Path(path) => vec![path.clone()],
            ShapePaths::Multi(paths) => paths.clone(),
        }
    }
}

/// Platform neutral description of a shape to be drawn, or of a shape drawn by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableShape {
    /// Kind tag of the shape. For captured shapes this is the kind reported by the drawing toolkit.
    pub kind: GeometryKind,
    /// Coordinates of the shape.
    pub paths: ShapePaths,
    /// Circle radius in meters.
    pub radius: Option<f64>,
    /// Representative coordinate. If not set, capture uses the first coordinate of the shape.
    pub base_coordinate: Option<Coordinate>,
}

impl RenderableShape {
    /// Creates a shape with a single coordinate list.
    pub fn path(kind: GeometryKind, coordinates: Vec<Coordinate>) -> Self {
        Self {
            kind,
            paths: ShapePaths::Path(coordinates),
            radius: None,
            base_coordinate: None,
        }
    }

    /// Creates a shape with several coordinate lists.
    pub fn multi(kind: GeometryKind, paths: Vec<Vec<Coordinate>>) -> Self {
        Self {
            kind,
            paths: ShapePaths::Multi(paths),
            radius: None,
            base_coordinate: None,
        }
    }

    /// Creates a circle shape.
    pub fn circle(center: Coordinate, radius: f64) -> Self {
        Self {
            kind: GeometryKind::Circle,
            paths: ShapePaths::Path(vec![center]),
            radius: Some(radius),
            base_coordinate: None,
        }
    }
}

impl From<&GeometryVariant> for RenderableShape {
    fn from(value: &GeometryVariant) -> Self {
        reconstruct(value)
    }
}

/// Converts a stored geometry into a shape that can be drawn.
///
/// Single-path kinds produce [`ShapePaths::Path`] (a point gives a list with one coordinate, a circle gives its
/// center and radius), multi kinds produce [`ShapePaths::Multi`]. Coordinate order is preserved.
pub fn reconstruct(variant: &GeometryVariant) -> RenderableShape {
    let paths = match variant.geometry() {
        Geometry::Point => ShapePaths::Path(vec![variant.base_coordinate()]),
        Geometry::Circle { center, .. } => ShapePaths::Path(vec![*center]),
        Geometry::MultiPoint(path)
        | Geometry::Polyline(path)
        | Geometry::GeodesicPolyline(path)
        | Geometry::Polygon(path)
        | Geometry::GenericOverlayPath(path) => ShapePaths::Path(path.to_vec()),
        Geometry::MultiPolyline(paths) | Geometry::MultiPolygon(paths) => {
            ShapePaths::Multi(paths.iter().map(|path| path.to_vec()).collect())
        }
    };

    RenderableShape {
        kind: variant.kind(),
        paths,
        radius: variant.radius(),
        base_coordinate: Some(variant.base_coordinate()),
    }
}

/// Converts an externally drawn shape into a geometry of the `target` kind.
///
/// The shape's own kind tag is informational, the geometry is built for `target`. A single coordinate list is
/// accepted for multi kinds, and a multi shape with exactly one list is accepted for single-path kinds. Capturing
/// into [`GeometryKind::GeodesicPolyline`] produces a geodesic geometry; every non-point geometry is marked as an
/// overlay.
///
/// The capture either succeeds as a whole or fails: if any path of a multi shape is invalid, no geometry is
/// produced.
pub fn capture(
    target: GeometryKind,
    shape: &RenderableShape,
) -> Result<GeometryVariant, InvalidGeometryError> {
    let result = build_captured(target, shape);
    match &result {
        Ok(variant) => log::trace!(
            "Captured {} shape as {} with {} points",
            shape.kind,
            target,
            variant.point_count()
        ),
        Err(err) => log::debug!("Rejected {} shape captured as {}: {err}", shape.kind, target),
    }

    result
}

fn build_captured(
    target: GeometryKind,
    shape: &RenderableShape,
) -> Result<GeometryVariant, InvalidGeometryError> {
    let path_count = shape.paths.path_count();
    if !target.is_multi() && path_count > 1 {
        return Err(InvalidGeometryError::PathCountMismatch {
            kind: target,
            actual: path_count,
        });
    }

    let mut builder = GeometryBuilder::new(target)
        .paths(shape.paths.to_paths())
        .geodesic(target.is_geodesic());

    if let Some(radius) = shape.radius {
        builder = builder.radius(radius);
    }
    if let Some(base) = shape.base_coordinate {
        builder = builder.base_coordinate(base);
    }

    builder.build()
}
