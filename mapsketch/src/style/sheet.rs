use mapsketch_types::GeometryKind;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::StyleSheetError;
use crate::style::StyleDescriptor;
use crate::Color;

/// Colors and width for one row of a [`StyleSheet`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KindStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color when the geometry is not selected.
    pub stroke: Color,
    /// Line width in points.
    pub width: f64,
}

impl KindStyle {
    /// Style with the same fill and stroke color.
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            fill: color,
            stroke: color,
            width,
        }
    }

    fn has_valid_width(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }
}

/// Style table used to resolve [`StyleDescriptor`]s.
///
/// The default table is:
///
/// | Kind | fill / stroke | width |
/// |---|---|---|
/// | geodesic line | blue | 4 |
/// | non-geodesic line | green | 4 |
/// | polygon | yellow | 4 |
/// | multi polyline | red | 4 |
/// | multi polygon | orange | 4 |
/// | circle | purple | 4 |
/// | generic overlay path | gray | 3 |
///
/// A selected geometry is stroked with `selected_color`. A selected polygon is also filled with it.
///
/// When deserialized, missing entries are taken from the default table:
///
/// ```
/// use mapsketch::{Color, StyleSheet};
///
/// let sheet = StyleSheet::from_json(r##"{ "selected_color": "#FF00FF" }"##)
///     .expect("valid style sheet");
/// assert_eq!(sheet.selected_color, Color::rgba(255, 0, 255, 255));
/// assert_eq!(sheet.polygon, StyleSheet::default().polygon);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleSheet {
    /// Polylines with the geodesic flag.
    pub geodesic_line: KindStyle,
    /// Polylines without the geodesic flag.
    pub line: KindStyle,
    /// Polygons.
    pub polygon: KindStyle,
    /// Multi polylines.
    pub multi_line: KindStyle,
    /// Multi polygons.
    pub multi_polygon: KindStyle,
    /// Circles.
    pub circle: KindStyle,
    /// Generic overlay paths.
    pub overlay_path: KindStyle,
    /// Stroke color of selected geometries.
    pub selected_color: Color,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            geodesic_line: KindStyle::solid(Color::BLUE, 4.0),
            line: KindStyle::solid(Color::GREEN, 4.0),
            polygon: KindStyle::solid(Color::YELLOW, 4.0),
            multi_line: KindStyle::solid(Color::RED, 4.0),
            multi_polygon: KindStyle::solid(Color::ORANGE, 4.0),
            circle: KindStyle::solid(Color::PURPLE, 4.0),
            overlay_path: KindStyle::solid(Color::GRAY, 3.0),
            selected_color: Color::BLACK,
        }
    }
}

impl StyleSheet {
    /// Resolves the style of a geometry. Returns `None` for point kinds, which are not styled.
    ///
    /// Sheets loaded with [`StyleSheet::from_json`] are validated. A sheet built in code is not, so an entry with a
    /// width that is not positive resolves to `None` as well.
    pub fn resolve(
        &self,
        kind: GeometryKind,
        is_geodesic: bool,
        selected: bool,
    ) -> Option<StyleDescriptor> {
        let style = match kind {
            GeometryKind::Polyline | GeometryKind::GeodesicPolyline if is_geodesic => {
                &self.geodesic_line
            }
            GeometryKind::Polyline | GeometryKind::GeodesicPolyline => &self.line,
            GeometryKind::Polygon => &self.polygon,
            GeometryKind::MultiPolyline => &self.multi_line,
            GeometryKind::MultiPolygon => &self.multi_polygon,
            GeometryKind::Circle => &self.circle,
            GeometryKind::GenericOverlayPath => &self.overlay_path,
            GeometryKind::Point | GeometryKind::MultiPoint => return None,
        };

        if !style.has_valid_width() {
            log::warn!("Style for {kind} has invalid line width {}", style.width);
            return None;
        }

        let mut descriptor = StyleDescriptor {
            fill_color: style.fill,
            stroke_color: style.stroke,
            line_width: style.width,
        };

        if selected {
            descriptor.stroke_color = self.selected_color;
            // Polygons are the only kind that also changes fill on selection.
            if kind == GeometryKind::Polygon {
                descriptor.fill_color = self.selected_color;
            }
        }

        Some(descriptor)
    }

    /// Checks that every line width is a positive number.
    pub fn validate(&self) -> Result<(), StyleSheetError> {
        let entries = [
            ("geodesic_line", &self.geodesic_line),
            ("line", &self.line),
            ("polygon", &self.polygon),
            ("multi_line", &self.multi_line),
            ("multi_polygon", &self.multi_polygon),
            ("circle", &self.circle),
            ("overlay_path", &self.overlay_path),
        ];

        for (entry, style) in entries {
            if !style.has_valid_width() {
                return Err(StyleSheetError::InvalidWidth {
                    entry,
                    width: style.width,
                });
            }
        }

        Ok(())
    }

    /// Loads a style sheet from a JSON string and validates it.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, StyleSheetError> {
        let sheet: Self = serde_json::from_str(json)?;
        sheet.validate()?;
        log::debug!("Loaded style sheet: {sheet:?}");

        Ok(sheet)
    }
}
