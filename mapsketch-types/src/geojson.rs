//! GeoJSON interop. Positions are `[longitude, latitude]`, polygon rings are closed.

use geojson::{PolygonType, Position, Value};

use crate::coordinate::{Coordinate, GeoPoint, NewGeoPoint};
use crate::error::InvalidGeometryError;
use crate::kind::GeometryKind;
use crate::sequence::CoordinateSequence;
use crate::variant::{Geometry, GeometryVariant};

fn to_position(coordinate: &Coordinate) -> Position {
    vec![coordinate.lon(), coordinate.lat()]
}

fn to_positions(sequence: &CoordinateSequence) -> Vec<Position> {
    sequence.iter().map(to_position).collect()
}

fn to_ring(sequence: &CoordinateSequence) -> PolygonType {
    let mut ring = to_positions(sequence);
    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }

    vec![ring]
}

fn from_position(position: &Position) -> Result<Coordinate, InvalidGeometryError> {
    match position.as_slice() {
        [lon, lat, ..] => Ok(Coordinate::latlon(*lat, *lon)),
        _ => Err(InvalidGeometryError::MalformedPosition(position.len())),
    }
}

fn from_positions(positions: &[Position]) -> Result<Vec<Coordinate>, InvalidGeometryError> {
    positions.iter().map(from_position).collect()
}

fn from_ring(polygon: &PolygonType) -> Result<Vec<Coordinate>, InvalidGeometryError> {
    let Some(exterior) = polygon.first() else {
        return Ok(vec![]);
    };

    from_positions(exterior)
}

impl From<&GeometryVariant> for Value {
    fn from(value: &GeometryVariant) -> Self {
        match value.geometry() {
            Geometry::Point => Value::Point(to_position(&value.base_coordinate())),
            Geometry::Circle { center, .. } => Value::Point(to_position(center)),
            Geometry::MultiPoint(points) => Value::MultiPoint(to_positions(points)),
            Geometry::Polyline(line)
            | Geometry::GeodesicPolyline(line)
            | Geometry::GenericOverlayPath(line) => Value::LineString(to_positions(line)),
            Geometry::Polygon(ring) => Value::Polygon(to_ring(ring)),
            Geometry::MultiPolyline(lines) => {
                Value::MultiLineString(lines.iter().map(to_positions).collect())
            }
            Geometry::MultiPolygon(rings) => {
                Value::MultiPolygon(rings.iter().map(to_ring).collect())
            }
        }
    }
}

impl GeometryVariant {
    /// Creates a variant from a GeoJSON geometry value.
    ///
    /// Only exterior rings of polygons are used. Returns `Ok(None)` for geometry collections.
    pub fn from_geojson(value: &Value) -> Result<Option<Self>, InvalidGeometryError> {
        let variant = match value {
            Value::Point(position) => GeometryVariant::construct(
                GeometryKind::Point,
                vec![from_position(position)?],
                None,
            )?,
            Value::MultiPoint(positions) => GeometryVariant::construct(
                GeometryKind::MultiPoint,
                from_positions(positions)?,
                None,
            )?,
            Value::LineString(positions) => GeometryVariant::construct(
                GeometryKind::Polyline,
                from_positions(positions)?,
                None,
            )?,
            Value::Polygon(polygon) => {
                GeometryVariant::construct(GeometryKind::Polygon, from_ring(polygon)?, None)?
            }
            Value::MultiLineString(lines) => GeometryVariant::construct_multi(
                GeometryKind::MultiPolyline,
                lines
                    .iter()
                    .map(|line| from_positions(line))
                    .collect::<Result<_, _>>()?,
            )?,
            Value::MultiPolygon(polygons) => GeometryVariant::construct_multi(
                GeometryKind::MultiPolygon,
                polygons.iter().map(from_ring).collect::<Result<_, _>>()?,
            )?,
            Value::GeometryCollection(_) => return Ok(None),
        };

        Ok(Some(variant))
    }
}
