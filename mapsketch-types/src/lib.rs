//! Geometry representation for map sketches: geographic [`Coordinate`]s, ordered
//! [`CoordinateSequence`]s and the closed set of [`GeometryVariant`] kinds built from them.
//!
//! Every variant is validated when it is constructed, so code that receives a [`GeometryVariant`] can rely on
//! the per-kind point minimums, a positive circle radius and a geodesic flag consistent with the kind.
//!
//! ```
//! use mapsketch_types::{latlon, GeometryKind, GeometryVariant};
//!
//! let line = GeometryVariant::construct(
//!     GeometryKind::Polyline,
//!     vec![latlon!(52.0, 13.0), latlon!(52.5, 13.4)],
//!     None,
//! )
//! .expect("valid polyline");
//!
//! assert_eq!(line.point_count(), 2);
//! assert!(!line.is_geodesic());
//! ```

mod coordinate;
pub mod error;
mod kind;
mod sequence;
mod stored;
mod variant;

#[cfg(feature = "geo-types")]
mod geo_types;
#[cfg(feature = "geojson")]
mod geojson;

pub use coordinate::{Coordinate, GeoPoint, NewGeoPoint};
pub use error::{IndexOutOfRange, InvalidGeometryError};
pub use kind::GeometryKind;
pub use sequence::CoordinateSequence;
pub use stored::StoredGeometry;
pub use variant::{Geometry, GeometryBuilder, GeometryVariant};
