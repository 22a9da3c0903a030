use num_traits::{Float, NumCast};
use serde::{Deserialize, Serialize};

use crate::error::InvalidGeometryError;

/// Point on the surface of the Earth given in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Returns true if both values are finite and lie within `[-90, 90]` for latitude and `[-180, 180]` for
    /// longitude.
    fn is_in_range(&self) -> bool {
        let lat = self.lat();
        let lon = self.lon();
        let lat_limit =
            <Self::Num as NumCast>::from(90.0).unwrap_or_else(<Self::Num as Float>::max_value);
        let lon_limit =
            <Self::Num as NumCast>::from(180.0).unwrap_or_else(<Self::Num as Float>::max_value);

        lat.is_finite() && lon.is_finite() && lat.abs() <= lat_limit && lon.abs() <= lon_limit
    }
}

/// Geo point that can be created from latitude and longitude.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// Geographic coordinate (latitude and longitude in degrees).
///
/// A coordinate is immutable once created. Creating it with [`NewGeoPoint::latlon`] does not check the value range,
/// the check is done when the coordinate becomes a part of a [`GeometryVariant`](crate::GeometryVariant). Use
/// [`Coordinate::try_latlon`] to check it eagerly.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl GeoPoint for Coordinate {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for Coordinate {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Coordinate {
    /// Creates a coordinate, failing with [`InvalidGeometryError::CoordinateOutOfRange`] if the values are out of
    /// the geographic range.
    pub fn try_latlon(lat: f64, lon: f64) -> Result<Self, InvalidGeometryError> {
        let coordinate = Self { lat, lon };
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidGeometryError> {
        if self.is_in_range() {
            Ok(())
        } else {
            Err(InvalidGeometryError::CoordinateOutOfRange {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Converts `(lat, lon)` tuple into a coordinate.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Creates a new [`Coordinate`] from latitude and longitude values (in degrees).
///
/// ```
/// use mapsketch_types::{latlon, GeoPoint};
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// assert_eq!(point.lon(), 52.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::Coordinate as $crate::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}
