//! Mapsketch resolves how geographic geometries are drawn and converts them between their stored form and the
//! shapes a rendering toolkit works with.
//!
//! The crate works on [`GeometryVariant`](mapsketch_types::GeometryVariant)s from [`mapsketch_types`] and provides
//!
//! * [`resolve_style`] and [`StyleSheet`] to get fill, stroke and line width of a geometry;
//! * [`reconstruct`] and [`capture`] to convert between stored geometries and [`RenderableShape`]s;
//! * [`format_label`] to get a one-line description of a geometry.
//!
//! ```
//! use mapsketch::{capture, format_label, resolve_variant_style, Color, RenderableShape};
//! use mapsketch::mapsketch_types::{latlon, GeometryKind};
//!
//! let drawn = RenderableShape::path(
//!     GeometryKind::Polyline,
//!     vec![latlon!(52.52, 13.40), latlon!(48.85, 2.35)],
//! );
//! let route = capture(GeometryKind::GeodesicPolyline, &drawn).expect("valid route");
//!
//! let style = resolve_variant_style(&route, false).expect("lines are styled");
//! assert_eq!(style.stroke_color, Color::BLUE);
//! assert_eq!(format_label(&route), "GeodesicPolyline at lat: 52.52, lng: 52.52");
//! ```
//!
//! All functions are pure and every type is immutable, so geometries can be styled and converted from any number
//! of threads.

mod color;
pub mod error;
mod label;
pub mod shape;
pub mod style;

pub use color::Color;
pub use label::format_label;
pub use mapsketch_types;
pub use shape::{capture, reconstruct, RenderableShape, ShapePaths};
pub use style::{resolve_style, resolve_variant_style, KindStyle, StyleDescriptor, StyleSheet};
