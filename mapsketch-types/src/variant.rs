use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, GeoPoint};
use crate::error::InvalidGeometryError;
use crate::kind::GeometryKind;
use crate::sequence::CoordinateSequence;
use crate::stored::StoredGeometry;

/// Kind-specific payload of a [`GeometryVariant`].
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Point. Its location is the base coordinate of the variant.
    Point,
    /// Set of points.
    MultiPoint(CoordinateSequence),
    /// Open line.
    Polyline(CoordinateSequence),
    /// Great circle line.
    GeodesicPolyline(CoordinateSequence),
    /// Polygon ring. The ring is stored open: a closing point equal to the first one is dropped on construction.
    Polygon(CoordinateSequence),
    /// Independent lines.
    MultiPolyline(Vec<CoordinateSequence>),
    /// Independent polygon rings, stored open like [`Geometry::Polygon`].
    MultiPolygon(Vec<CoordinateSequence>),
    /// Circle.
    Circle {
        /// Center of the circle.
        center: Coordinate,
        /// Radius in meters.
        radius: f64,
    },
    /// Path-like overlay of unspecified kind.
    GenericOverlayPath(CoordinateSequence),
}

impl Geometry {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point => GeometryKind::Point,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::Polyline(_) => GeometryKind::Polyline,
            Geometry::GeodesicPolyline(_) => GeometryKind::GeodesicPolyline,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolyline(_) => GeometryKind::MultiPolyline,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::Circle { .. } => GeometryKind::Circle,
            Geometry::GenericOverlayPath(_) => GeometryKind::GenericOverlayPath,
        }
    }
}

/// Validated geometry of one of the [`GeometryKind`]s together with its representative (base) coordinate.
///
/// Instances can only be obtained through validation ([`GeometryVariant::construct`],
/// [`GeometryVariant::construct_multi`], [`GeometryBuilder`] or deserialization of a [`StoredGeometry`]), so
/// every variant satisfies the point minimums of its kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "StoredGeometry", into = "StoredGeometry")]
pub struct GeometryVariant {
    base_coordinate: Coordinate,
    geometry: Geometry,
}

impl GeometryVariant {
    /// Creates a geometry of the given kind from a single list of coordinates.
    ///
    /// For multi kinds the list is used as the only path of the geometry. The `radius` is required for
    /// [`GeometryKind::Circle`] and ignored for other kinds.
    pub fn construct(
        kind: GeometryKind,
        coordinates: Vec<Coordinate>,
        radius: Option<f64>,
    ) -> Result<Self, InvalidGeometryError> {
        let mut builder = GeometryBuilder::new(kind).path(coordinates);
        if let Some(radius) = radius {
            builder = builder.radius(radius);
        }

        builder.build()
    }

    /// Creates a geometry from several paths. Either all paths are valid, or an error is returned.
    pub fn construct_multi(
        kind: GeometryKind,
        paths: Vec<Vec<Coordinate>>,
    ) -> Result<Self, InvalidGeometryError> {
        GeometryBuilder::new(kind).paths(paths).build()
    }

    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    /// Label of the geometry kind.
    pub fn kind_label(&self) -> &'static str {
        self.kind().label()
    }

    /// Representative coordinate of the geometry.
    pub fn base_coordinate(&self) -> Coordinate {
        self.base_coordinate
    }

    /// Returns true if the line follows great circle arcs.
    pub fn is_geodesic(&self) -> bool {
        self.kind().is_geodesic()
    }

    /// Returns true if the geometry can be a part of overlay composition.
    pub fn is_overlay(&self) -> bool {
        self.kind().is_overlay()
    }

    /// Kind-specific payload.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Radius of a circle, `None` for other kinds.
    pub fn radius(&self) -> Option<f64> {
        match self.geometry {
            Geometry::Circle { radius, .. } => Some(radius),
            _ => None,
        }
    }

    /// Iterates over all coordinate sequences of the geometry. Points and circles don't have any.
    pub fn paths(&self) -> impl Iterator<Item = &CoordinateSequence> {
        let paths: &[CoordinateSequence] = match &self.geometry {
            Geometry::Point | Geometry::Circle { .. } => &[],
            Geometry::MultiPoint(path)
            | Geometry::Polyline(path)
            | Geometry::GeodesicPolyline(path)
            | Geometry::Polygon(path)
            | Geometry::GenericOverlayPath(path) => std::slice::from_ref(path),
            Geometry::MultiPolyline(paths) | Geometry::MultiPolygon(paths) => paths,
        };

        paths.iter()
    }

    /// Total number of coordinates in the geometry.
    pub fn point_count(&self) -> usize {
        match &self.geometry {
            Geometry::Point => 1,
            Geometry::Circle { .. } => 1,
            _ => self.paths().map(CoordinateSequence::len).sum(),
        }
    }
}

impl Display for GeometryVariant {
    /// Writes `<kind> at lat: <lat>, lng: <lat>`. The `lng` field repeats the latitude.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let base = self.base_coordinate;
        write!(
            f,
            "{} at lat: {}, lng: {}",
            self.kind_label(),
            base.lat(),
            base.lat()
        )
    }
}

impl TryFrom<StoredGeometry> for GeometryVariant {
    type Error = InvalidGeometryError;

    fn try_from(value: StoredGeometry) -> Result<Self, Self::Error> {
        let mut builder = GeometryBuilder::new(value.kind)
            .paths(value.paths)
            .base_coordinate(value.base_coordinate);
        if let Some(is_geodesic) = value.is_geodesic {
            builder = builder.geodesic(is_geodesic);
        }
        if let Some(radius) = value.radius {
            builder = builder.radius(radius);
        }

        builder.build()
    }
}

/// Builder for [`GeometryVariant`] that validates the input in [`GeometryBuilder::build`].
///
/// ```
/// use mapsketch_types::{latlon, GeometryBuilder, GeometryKind};
///
/// let line = GeometryBuilder::new(GeometryKind::GeodesicPolyline)
///     .path(vec![latlon!(55.75, 37.61), latlon!(40.71, -74.0)])
///     .geodesic(true)
///     .build()
///     .expect("valid line");
/// assert!(line.is_geodesic());
/// ```
#[derive(Debug, Clone)]
pub struct GeometryBuilder {
    kind: GeometryKind,
    paths: Vec<Vec<Coordinate>>,
    radius: Option<f64>,
    geodesic: Option<bool>,
    base_coordinate: Option<Coordinate>,
}

impl GeometryBuilder {
    /// Starts building a geometry of the given kind.
    pub fn new(kind: GeometryKind) -> Self {
        Self {
            kind,
            paths: vec![],
            radius: None,
            geodesic: None,
            base_coordinate: None,
        }
    }

    /// Adds a path.
    pub fn path(mut self, coordinates: Vec<Coordinate>) -> Self {
        self.paths.push(coordinates);
        self
    }

    /// Adds several paths.
    pub fn paths(mut self, paths: impl IntoIterator<Item = Vec<Coordinate>>) -> Self {
        self.paths.extend(paths);
        self
    }

    /// Sets the radius of a circle in meters.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Requests the geodesic flag. Only [`GeometryKind::GeodesicPolyline`] accepts `true`, and it does not accept
    /// `false`.
    pub fn geodesic(mut self, is_geodesic: bool) -> Self {
        self.geodesic = Some(is_geodesic);
        self
    }

    /// Sets the representative coordinate. If not set, the first coordinate of the geometry (or the circle
    /// center) is used. A point is always represented by itself; the base coordinate is taken as the point
    /// location only when no path is given.
    pub fn base_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.base_coordinate = Some(coordinate);
        self
    }

    /// Validates the input and creates the geometry.
    pub fn build(self) -> Result<GeometryVariant, InvalidGeometryError> {
        let kind = self.kind;

        if let Some(is_geodesic) = self.geodesic {
            if is_geodesic != kind.is_geodesic() {
                return Err(InvalidGeometryError::GeodesicFlagMismatch { kind, is_geodesic });
            }
        }

        if let Some(base) = &self.base_coordinate {
            base.validate()?;
        }

        if kind.is_multi() {
            return self.build_multi();
        }

        let path_count = self.paths.len();
        if path_count > 1 {
            return Err(InvalidGeometryError::PathCountMismatch {
                kind,
                actual: path_count,
            });
        }

        let mut coordinates = self.paths.into_iter().next().unwrap_or_default();
        if kind == GeometryKind::Point && coordinates.is_empty() {
            if let Some(base) = self.base_coordinate {
                coordinates.push(base);
            }
        }

        let sequence = validate_path(kind, coordinates)?;
        let first = sequence
            .first()
            .ok_or(InvalidGeometryError::TooFewPoints {
                kind,
                required: kind.min_points(),
                actual: 0,
            })?;

        let geometry = match kind {
            GeometryKind::Point => {
                return Ok(GeometryVariant {
                    base_coordinate: first,
                    geometry: Geometry::Point,
                })
            }
            GeometryKind::Circle => {
                let radius = match self.radius {
                    Some(radius) if radius.is_finite() && radius > 0.0 => radius,
                    other => return Err(InvalidGeometryError::InvalidRadius(other)),
                };
                Geometry::Circle {
                    center: first,
                    radius,
                }
            }
            GeometryKind::MultiPoint => Geometry::MultiPoint(sequence),
            GeometryKind::Polyline => Geometry::Polyline(sequence),
            GeometryKind::GeodesicPolyline => Geometry::GeodesicPolyline(sequence),
            GeometryKind::Polygon => Geometry::Polygon(sequence),
            GeometryKind::GenericOverlayPath => Geometry::GenericOverlayPath(sequence),
            GeometryKind::MultiPolyline => Geometry::MultiPolyline(vec![sequence]),
            GeometryKind::MultiPolygon => Geometry::MultiPolygon(vec![sequence]),
        };

        Ok(GeometryVariant {
            base_coordinate: self.base_coordinate.unwrap_or(first),
            geometry,
        })
    }

    fn build_multi(self) -> Result<GeometryVariant, InvalidGeometryError> {
        let kind = self.kind;
        let paths = self
            .paths
            .into_iter()
            .map(|path| validate_path(kind, path))
            .collect::<Result<Vec<_>, _>>()?;

        // An empty multi geometry lacks paths, not points.
        let first = paths
            .first()
            .and_then(CoordinateSequence::first)
            .ok_or(InvalidGeometryError::TooFewPoints {
                kind,
                required: 1,
                actual: 0,
            })?;

        let geometry = match kind {
            GeometryKind::MultiPolygon => Geometry::MultiPolygon(paths),
            _ => Geometry::MultiPolyline(paths),
        };

        Ok(GeometryVariant {
            base_coordinate: self.base_coordinate.unwrap_or(first),
            geometry,
        })
    }
}

fn validate_path(
    kind: GeometryKind,
    mut coordinates: Vec<Coordinate>,
) -> Result<CoordinateSequence, InvalidGeometryError> {
    if kind.is_polygon() {
        while coordinates.len() > 1 && coordinates.first() == coordinates.last() {
            coordinates.pop();
        }
    }

    let actual = coordinates.len();
    let required = kind.min_points();
    if actual < required {
        return Err(InvalidGeometryError::TooFewPoints {
            kind,
            required,
            actual,
        });
    }

    if let Some(max) = kind.max_points() {
        if actual > max {
            return Err(InvalidGeometryError::TooManyPoints { kind, max, actual });
        }
    }

    for coordinate in &coordinates {
        coordinate.validate()?;
    }

    Ok(CoordinateSequence::new(coordinates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon;
    use assert_matches::assert_matches;

    fn square() -> Vec<Coordinate> {
        vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
            latlon!(1.0, 0.0),
        ]
    }

    #[test]
    fn minimum_point_counts() {
        for kind in GeometryKind::ALL {
            if kind.is_multi() {
                continue;
            }

            let min = kind.min_points();
            let coordinates = square()[..min].to_vec();
            let variant = GeometryVariant::construct(kind, coordinates, Some(100.0))
                .unwrap_or_else(|err| panic!("{kind} with {min} points: {err}"));
            assert_eq!(variant.kind(), kind);
            assert_eq!(variant.point_count(), min);

            let too_few = square()[..min - 1].to_vec();
            assert_matches!(
                GeometryVariant::construct(kind, too_few, Some(100.0)),
                Err(InvalidGeometryError::TooFewPoints { required, actual, .. })
                    if required == min && actual == min - 1
            );
        }
    }

    #[test]
    fn polygon_needs_three_points() {
        assert_matches!(
            GeometryVariant::construct(GeometryKind::Polygon, square()[..2].to_vec(), None),
            Err(InvalidGeometryError::TooFewPoints {
                kind: GeometryKind::Polygon,
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn closed_rings_are_stored_open() {
        let mut closed = square()[..3].to_vec();
        closed.push(latlon!(0.0, 0.0));

        let polygon = GeometryVariant::construct(GeometryKind::Polygon, closed.clone(), None)
            .expect("valid polygon");
        assert_eq!(polygon.point_count(), 3);
        assert_eq!(
            polygon,
            GeometryVariant::construct(GeometryKind::Polygon, square()[..3].to_vec(), None)
                .expect("valid polygon")
        );

        let multi = GeometryVariant::construct_multi(GeometryKind::MultiPolygon, vec![closed])
            .expect("valid multi polygon");
        assert_eq!(multi.point_count(), 3);

        let degenerate = vec![latlon!(0.0, 0.0), latlon!(0.0, 1.0), latlon!(0.0, 0.0)];
        assert_matches!(
            GeometryVariant::construct(GeometryKind::Polygon, degenerate, None),
            Err(InvalidGeometryError::TooFewPoints { required: 3, actual: 2, .. })
        );

        let closed_line = vec![latlon!(0.0, 0.0), latlon!(0.0, 1.0), latlon!(0.0, 0.0)];
        let line = GeometryVariant::construct(GeometryKind::Polyline, closed_line, None)
            .expect("valid line");
        assert_eq!(line.point_count(), 3);
    }

    #[test]
    fn point_takes_one_coordinate() {
        assert_matches!(
            GeometryVariant::construct(GeometryKind::Point, square()[..2].to_vec(), None),
            Err(InvalidGeometryError::TooManyPoints { max: 1, actual: 2, .. })
        );

        let point = GeometryBuilder::new(GeometryKind::Point)
            .base_coordinate(latlon!(12.5, -71.0))
            .build()
            .expect("point from base coordinate");
        assert_eq!(point.base_coordinate(), latlon!(12.5, -71.0));
        assert_eq!(point.geometry(), &Geometry::Point);
    }

    #[test]
    fn circle_radius() {
        let center = vec![latlon!(10.0, 10.0)];
        assert_matches!(
            GeometryVariant::construct(GeometryKind::Circle, center.clone(), None),
            Err(InvalidGeometryError::InvalidRadius(None))
        );
        assert_matches!(
            GeometryVariant::construct(GeometryKind::Circle, center.clone(), Some(0.0)),
            Err(InvalidGeometryError::InvalidRadius(Some(_)))
        );
        assert_matches!(
            GeometryVariant::construct(GeometryKind::Circle, center.clone(), Some(f64::NAN)),
            Err(InvalidGeometryError::InvalidRadius(Some(_)))
        );

        let circle = GeometryVariant::construct(GeometryKind::Circle, center, Some(250.0))
            .expect("valid circle");
        assert_eq!(circle.radius(), Some(250.0));
        assert_eq!(circle.base_coordinate(), latlon!(10.0, 10.0));
    }

    #[test]
    fn geodesic_flag() {
        let line = GeometryVariant::construct(
            GeometryKind::GeodesicPolyline,
            square()[..2].to_vec(),
            None,
        )
        .expect("valid line");
        assert!(line.is_geodesic());

        assert_matches!(
            GeometryBuilder::new(GeometryKind::Polyline)
                .path(square())
                .geodesic(true)
                .build(),
            Err(InvalidGeometryError::GeodesicFlagMismatch {
                kind: GeometryKind::Polyline,
                is_geodesic: true
            })
        );
        assert_matches!(
            GeometryBuilder::new(GeometryKind::GeodesicPolyline)
                .path(square())
                .geodesic(false)
                .build(),
            Err(InvalidGeometryError::GeodesicFlagMismatch { .. })
        );
    }

    #[test]
    fn multi_validation_is_atomic() {
        let paths = vec![square(), vec![latlon!(5.0, 5.0)], square()];
        assert_matches!(
            GeometryVariant::construct_multi(GeometryKind::MultiPolygon, paths),
            Err(InvalidGeometryError::TooFewPoints { actual: 1, .. })
        );

        assert_matches!(
            GeometryVariant::construct_multi(GeometryKind::MultiPolyline, vec![]),
            Err(InvalidGeometryError::TooFewPoints {
                kind: GeometryKind::MultiPolyline,
                required: 1,
                actual: 0
            })
        );
        assert_matches!(
            GeometryVariant::construct_multi(GeometryKind::MultiPolygon, vec![]),
            Err(InvalidGeometryError::TooFewPoints {
                kind: GeometryKind::MultiPolygon,
                required: 1,
                actual: 0
            })
        );

        let multi = GeometryVariant::construct_multi(
            GeometryKind::MultiPolyline,
            vec![square(), square()[..2].to_vec()],
        )
        .expect("valid multi line");
        assert_eq!(multi.paths().count(), 2);
        assert_eq!(multi.point_count(), 6);
    }

    #[test]
    fn single_kinds_reject_several_paths() {
        assert_matches!(
            GeometryVariant::construct_multi(GeometryKind::Polyline, vec![square(), square()]),
            Err(InvalidGeometryError::PathCountMismatch { actual: 2, .. })
        );
    }

    #[test]
    fn out_of_range_coordinates() {
        let mut coordinates = square();
        coordinates.push(latlon!(95.0, 0.0));
        assert_matches!(
            GeometryVariant::construct(GeometryKind::Polygon, coordinates, None),
            Err(InvalidGeometryError::CoordinateOutOfRange { lat, .. }) if lat == 95.0
        );

        assert_matches!(
            GeometryBuilder::new(GeometryKind::Polygon)
                .path(square())
                .base_coordinate(latlon!(0.0, 200.0))
                .build(),
            Err(InvalidGeometryError::CoordinateOutOfRange { .. })
        );
    }

    #[test]
    fn base_coordinate_is_not_recomputed() {
        let polygon = GeometryBuilder::new(GeometryKind::Polygon)
            .path(square())
            .base_coordinate(latlon!(0.5, 0.5))
            .build()
            .expect("valid polygon");
        assert_eq!(polygon.base_coordinate(), latlon!(0.5, 0.5));

        let default_base = GeometryVariant::construct(GeometryKind::Polygon, square(), None)
            .expect("valid polygon");
        assert_eq!(default_base.base_coordinate(), latlon!(0.0, 0.0));
    }

    #[test]
    fn label() {
        let point =
            GeometryVariant::construct(GeometryKind::Point, vec![latlon!(12.5, -71.0)], None)
                .expect("valid point");
        assert_eq!(point.to_string(), "Point at lat: 12.5, lng: 12.5");
    }
}
