use mapsketch_types::GeometryVariant;

/// One-line summary of a geometry: `<kind> at lat: <lat>, lng: <lat>`.
///
/// The `lng` field repeats the latitude of the base coordinate; the longitude is not printed.
///
/// ```
/// use mapsketch::format_label;
/// use mapsketch::mapsketch_types::{latlon, GeometryKind, GeometryVariant};
///
/// let point = GeometryVariant::construct(GeometryKind::Point, vec![latlon!(12.5, -71.0)], None)
///     .expect("valid point");
/// assert_eq!(format_label(&point), "Point at lat: 12.5, lng: 12.5");
/// ```
pub fn format_label(variant: &GeometryVariant) -> String {
    variant.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapsketch_types::{latlon, GeometryBuilder, GeometryKind};

    #[test]
    fn uses_kind_label_and_base_coordinate() {
        let polygon = GeometryBuilder::new(GeometryKind::Polygon)
            .path(vec![latlon!(0.0, 0.0), latlon!(0.0, 2.0), latlon!(2.0, 2.0)])
            .base_coordinate(latlon!(1.25, 1.0))
            .build()
            .expect("valid polygon");

        assert_eq!(format_label(&polygon), "Polygon at lat: 1.25, lng: 1.25");
    }

    #[test]
    fn whole_numbers() {
        let circle = GeometryVariant::construct(
            GeometryKind::Circle,
            vec![latlon!(-33.0, 151.0)],
            Some(10.0),
        )
        .expect("valid circle");

        assert_eq!(format_label(&circle), "Circle at lat: -33, lng: -33");
    }

    #[test]
    fn multi_kind_label() {
        let lines = GeometryVariant::construct_multi(
            GeometryKind::MultiPolyline,
            vec![vec![latlon!(48.5, 2.0), latlon!(48.6, 2.1)]],
        )
        .expect("valid lines");

        assert_eq!(
            format_label(&lines),
            "MultiPolyline at lat: 48.5, lng: 48.5"
        );
    }
}
