//! Conversions between [`GeometryVariant`] and `geo-types` geometries. `geo-types` use `x` for longitude and `y`
//! for latitude.

use geo_types::{Coord, LineString};

use crate::coordinate::{Coordinate, GeoPoint, NewGeoPoint};
use crate::error::InvalidGeometryError;
use crate::kind::GeometryKind;
use crate::sequence::CoordinateSequence;
use crate::variant::{Geometry, GeometryVariant};

fn to_coord(coordinate: &Coordinate) -> Coord<f64> {
    Coord {
        x: coordinate.lon(),
        y: coordinate.lat(),
    }
}

fn to_line_string(sequence: &CoordinateSequence) -> LineString<f64> {
    LineString::new(sequence.iter().map(to_coord).collect())
}

fn to_polygon(sequence: &CoordinateSequence) -> geo_types::Polygon<f64> {
    geo_types::Polygon::new(to_line_string(sequence), vec![])
}

fn from_coords<'a>(coords: impl Iterator<Item = &'a Coord<f64>>) -> Vec<Coordinate> {
    coords.map(|c| Coordinate::latlon(c.y, c.x)).collect()
}

impl From<&GeometryVariant> for geo_types::Geometry<f64> {
    /// Converts the variant into a `geo-types` geometry. Circles are represented by their center point, polygon
    /// rings are closed.
    fn from(value: &GeometryVariant) -> Self {
        match value.geometry() {
            Geometry::Point => geo_types::Point(to_coord(&value.base_coordinate())).into(),
            Geometry::Circle { center, .. } => geo_types::Point(to_coord(center)).into(),
            Geometry::MultiPoint(points) => geo_types::MultiPoint(
                points
                    .iter()
                    .map(|p| geo_types::Point(to_coord(p)))
                    .collect(),
            )
            .into(),
            Geometry::Polyline(line)
            | Geometry::GeodesicPolyline(line)
            | Geometry::GenericOverlayPath(line) => to_line_string(line).into(),
            Geometry::Polygon(ring) => to_polygon(ring).into(),
            Geometry::MultiPolyline(lines) => {
                geo_types::MultiLineString(lines.iter().map(to_line_string).collect()).into()
            }
            Geometry::MultiPolygon(rings) => {
                geo_types::MultiPolygon(rings.iter().map(to_polygon).collect()).into()
            }
        }
    }
}

impl GeometryVariant {
    /// Creates a variant from a `geo-types` geometry.
    ///
    /// Line strings become [`GeometryKind::Polyline`]s. Only exterior rings of polygons are used. Returns
    /// `Ok(None)` for geometry types that have no corresponding kind (lines, rectangles, triangles and
    /// collections).
    pub fn from_geo_types(
        geometry: &geo_types::Geometry<f64>,
    ) -> Result<Option<Self>, InvalidGeometryError> {
        let variant = match geometry {
            geo_types::Geometry::Point(point) => GeometryVariant::construct(
                GeometryKind::Point,
                vec![Coordinate::latlon(point.y(), point.x())],
                None,
            )?,
            geo_types::Geometry::MultiPoint(points) => GeometryVariant::construct(
                GeometryKind::MultiPoint,
                points
                    .iter()
                    .map(|p| Coordinate::latlon(p.y(), p.x()))
                    .collect(),
                None,
            )?,
            geo_types::Geometry::LineString(line) => GeometryVariant::construct(
                GeometryKind::Polyline,
                from_coords(line.0.iter()),
                None,
            )?,
            geo_types::Geometry::Polygon(polygon) => GeometryVariant::construct(
                GeometryKind::Polygon,
                from_coords(polygon.exterior().0.iter()),
                None,
            )?,
            geo_types::Geometry::MultiLineString(lines) => GeometryVariant::construct_multi(
                GeometryKind::MultiPolyline,
                lines.iter().map(|line| from_coords(line.0.iter())).collect(),
            )?,
            geo_types::Geometry::MultiPolygon(polygons) => GeometryVariant::construct_multi(
                GeometryKind::MultiPolygon,
                polygons
                    .iter()
                    .map(|polygon| from_coords(polygon.exterior().0.iter()))
                    .collect(),
            )?,
            geo_types::Geometry::Line(_)
            | geo_types::Geometry::Rect(_)
            | geo_types::Geometry::Triangle(_)
            | geo_types::Geometry::GeometryCollection(_) => return Ok(None),
        };

        Ok(Some(variant))
    }
}
