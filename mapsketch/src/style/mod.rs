//! Style resolution. A geometry kind, together with geodesic and selection flags, maps to a [`StyleDescriptor`]
//! that a renderer uses to draw the geometry.
//!
//! The mapping is a static table over [`GeometryKind`], configured by a [`StyleSheet`]. Point kinds have no style:
//! they are drawn as markers by the renderer, so resolution returns `None` for them and the caller decides whether to
//! skip the geometry.

mod sheet;

pub use sheet::{KindStyle, StyleSheet};

use mapsketch_types::{GeometryKind, GeometryVariant};

use crate::Color;

/// Fill, stroke and line width used to draw a geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleDescriptor {
    /// Color of the area inside the geometry.
    pub fill_color: Color,
    /// Color of the outline.
    pub stroke_color: Color,
    /// Width of the outline in points.
    pub line_width: f64,
}

/// Resolves the style for the given kind with the default [`StyleSheet`].
///
/// ```
/// use mapsketch::{resolve_style, Color};
/// use mapsketch::mapsketch_types::GeometryKind;
///
/// let style = resolve_style(GeometryKind::Polygon, false, true).expect("polygons are styled");
/// assert_eq!(style.fill_color, Color::BLACK);
/// assert_eq!(style.stroke_color, Color::BLACK);
///
/// assert!(resolve_style(GeometryKind::Point, false, false).is_none());
/// ```
pub fn resolve_style(
    kind: GeometryKind,
    is_geodesic: bool,
    selected: bool,
) -> Option<StyleDescriptor> {
    StyleSheet::default().resolve(kind, is_geodesic, selected)
}

/// Resolves the style for a geometry with the default [`StyleSheet`].
pub fn resolve_variant_style(variant: &GeometryVariant, selected: bool) -> Option<StyleDescriptor> {
    resolve_style(variant.kind(), variant.is_geodesic(), selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn polyline_styles() {
        let geodesic = resolve_style(GeometryKind::Polyline, true, false).expect("styled");
        assert_eq!(geodesic.fill_color, Color::BLUE);
        assert_eq!(geodesic.stroke_color, Color::BLUE);
        assert_relative_eq!(geodesic.line_width, 4.0);

        let plain = resolve_style(GeometryKind::Polyline, false, false).expect("styled");
        assert_eq!(plain.fill_color, Color::GREEN);
        assert_eq!(plain.stroke_color, Color::GREEN);
        assert_relative_eq!(plain.line_width, 4.0);

        assert_eq!(
            resolve_style(GeometryKind::GeodesicPolyline, true, false),
            Some(geodesic)
        );
        assert_eq!(
            resolve_style(GeometryKind::GeodesicPolyline, false, false),
            Some(plain)
        );
    }

    #[test]
    fn selection_changes_stroke_only() {
        for kind in [
            GeometryKind::Polyline,
            GeometryKind::GeodesicPolyline,
            GeometryKind::MultiPolyline,
            GeometryKind::MultiPolygon,
            GeometryKind::Circle,
            GeometryKind::GenericOverlayPath,
        ] {
            for is_geodesic in [false, true] {
                let normal = resolve_style(kind, is_geodesic, false).expect("styled");
                let selected = resolve_style(kind, is_geodesic, true).expect("styled");

                assert_eq!(selected.stroke_color, Color::BLACK, "{kind}");
                assert_eq!(selected.fill_color, normal.fill_color, "{kind}");
                assert_relative_eq!(selected.line_width, normal.line_width);
            }
        }
    }

    #[test]
    fn selected_polygon_is_filled_with_selection_color() {
        let normal = resolve_style(GeometryKind::Polygon, false, false).expect("styled");
        assert_eq!(normal.fill_color, Color::YELLOW);
        assert_eq!(normal.stroke_color, Color::YELLOW);

        for is_geodesic in [false, true] {
            let selected = resolve_style(GeometryKind::Polygon, is_geodesic, true).expect("styled");
            assert_eq!(selected.fill_color, Color::BLACK);
            assert_eq!(selected.stroke_color, Color::BLACK);
            assert_relative_eq!(selected.line_width, 4.0);
        }
    }

    #[test]
    fn kind_table() {
        let expected = [
            (GeometryKind::MultiPolyline, Color::RED, 4.0),
            (GeometryKind::MultiPolygon, Color::ORANGE, 4.0),
            (GeometryKind::Circle, Color::PURPLE, 4.0),
            (GeometryKind::GenericOverlayPath, Color::GRAY, 3.0),
        ];

        for (kind, color, width) in expected {
            let style = resolve_style(kind, false, false).expect("styled");
            assert_eq!(style.fill_color, color, "{kind}");
            assert_eq!(style.stroke_color, color, "{kind}");
            assert_relative_eq!(style.line_width, width);
        }
    }

    #[test]
    fn points_have_no_style() {
        for selected in [false, true] {
            assert_eq!(resolve_style(GeometryKind::Point, false, selected), None);
            assert_eq!(resolve_style(GeometryKind::MultiPoint, false, selected), None);
        }
    }

    #[test]
    fn variant_style() {
        let line = GeometryVariant::construct(
            GeometryKind::GeodesicPolyline,
            vec![
                mapsketch_types::latlon!(10.0, 10.0),
                mapsketch_types::latlon!(20.0, 20.0),
            ],
            None,
        )
        .expect("valid line");

        let style = resolve_variant_style(&line, false).expect("styled");
        assert_eq!(style.stroke_color, Color::BLUE);
    }
}
