//! Bare WGS84 coordinate pairs.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use valhalla_core::Point;
///
/// let point = Point::new(48.390394, -4.486076);
/// let json = serde_json::to_string(&point).unwrap();
/// assert_eq!(json, r#"{"lat":48.390394,"lon":-4.486076}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Point {
    /// Construct a point from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// `geo` coordinates use `x = longitude`, `y = latitude`.
#[cfg(feature = "geo")]
impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

#[cfg(feature = "geo")]
impl From<Point> for geo::Coord<f64> {
    fn from(point: Point) -> Self {
        Self {
            x: point.lon,
            y: point.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialises_lat_lon_object() {
        let point: Point =
            serde_json::from_str(r#"{"lon": 0.137267, "lat": 42.913581}"#).expect("valid point");
        assert_eq!(point, Point::new(42.913581, 0.137267));
    }

    #[cfg(feature = "geo")]
    #[rstest]
    fn converts_to_and_from_geo_coords() {
        let coord = geo::Coord { x: -4.486076, y: 48.390394 };
        let point = Point::from(coord);
        assert_eq!(point.lat, 48.390394);
        assert_eq!(point.lon, -4.486076);
        assert_eq!(geo::Coord::from(point), coord);
    }
}
