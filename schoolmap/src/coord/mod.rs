//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude,
//! WGS84 degrees) and the Web Mercator plane used by the map engine, plus
//! the bounding-box and screen-space types shared by the controllers.

use std::f64::consts::PI;

/// Mean equatorial radius of the WGS84 spheroid in meters.
///
/// Web Mercator (EPSG:3857) projects onto a sphere of this radius.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Maximum latitude representable in Web Mercator.
pub const MAX_LAT: f64 = 85.051_128_78;

/// Minimum latitude representable in Web Mercator.
pub const MIN_LAT: f64 = -85.051_128_78;

/// Minimum longitude in degrees.
pub const MIN_LON: f64 = -180.0;

/// Maximum longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// A point on the Web Mercator plane (EPSG:3857), in meters.
///
/// This is the coordinate space the map engine renders in. X grows east,
/// Y grows north; (0, 0) is the intersection of the equator and the prime
/// meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorPoint {
    /// Easting in meters.
    pub x: f64,
    /// Northing in meters.
    pub y: f64,
}

/// A screen-space pixel coordinate.
///
/// Used for selection anchors and hit-test queries. The origin and axis
/// directions are owned by the engine; the controllers only pass these
/// values through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal pixel offset.
    pub x: f64,
    /// Vertical pixel offset.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Converts geographic coordinates to a point on the Web Mercator plane.
///
/// The transform is deterministic and total: latitudes outside the Web
/// Mercator range are clamped to [`MIN_LAT`, `MAX_LAT`] rather than
/// rejected, so records with out-of-range coordinates still project to a
/// renderable position.
///
/// # Arguments
///
/// * `lon` - Longitude in degrees
/// * `lat` - Latitude in degrees
#[inline]
pub fn lon_lat_to_mercator(lon: f64, lat: f64) -> MercatorPoint {
    let lat = lat.clamp(MIN_LAT, MAX_LAT);

    let x = EARTH_RADIUS_M * lon.to_radians();
    let lat_rad = lat.to_radians();
    let y = EARTH_RADIUS_M * ((PI / 4.0 + lat_rad / 2.0).tan()).ln();

    MercatorPoint { x, y }
}

/// Geographic bounding box in WGS84 degrees.
///
/// Represents the minimum bounding rectangle containing a set of points.
/// The view-fit operation takes one of these as the target extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Minimum (southernmost) latitude
    pub min_lat: f64,
    /// Maximum (northernmost) latitude
    pub max_lat: f64,
    /// Minimum (westernmost) longitude
    pub min_lon: f64,
    /// Maximum (easternmost) longitude
    pub max_lon: f64,
}

impl GeoBounds {
    /// Create a new bounding box.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Create a bounding box from a single point.
    pub fn from_point(lat: f64, lon: f64) -> Self {
        Self {
            min_lat: lat,
            max_lat: lat,
            min_lon: lon,
            max_lon: lon,
        }
    }

    /// Expand this bounding box to include a point.
    pub fn expand(&mut self, lat: f64, lon: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
    }

    /// Get the center point of the bounds as (latitude, longitude).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Get the width of the bounds in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Get the height of the bounds in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mercator_origin() {
        let p = lon_lat_to_mercator(0.0, 0.0);
        assert!(p.x.abs() < 1e-6, "Equator/meridian should map to x=0");
        assert!(p.y.abs() < 1e-6, "Equator/meridian should map to y=0");
    }

    #[test]
    fn test_mercator_new_york_city() {
        // New York City: 40.7128°N, 74.0060°W
        let p = lon_lat_to_mercator(-74.0060, 40.7128);

        // Reference values from EPSG:3857
        assert!((p.x - (-8_238_310.2)).abs() < 100.0, "x was {}", p.x);
        assert!((p.y - 4_970_071.6).abs() < 100.0, "y was {}", p.y);
    }

    #[test]
    fn test_mercator_x_proportional_to_longitude() {
        let quarter = lon_lat_to_mercator(90.0, 0.0);
        let half = lon_lat_to_mercator(180.0, 0.0);
        assert!((half.x - 2.0 * quarter.x).abs() < 1e-3);
    }

    #[test]
    fn test_mercator_clamps_polar_latitude() {
        // Total transform: out-of-range latitudes clamp instead of erroring
        let pole = lon_lat_to_mercator(0.0, 90.0);
        let max = lon_lat_to_mercator(0.0, MAX_LAT);
        assert!((pole.y - max.y).abs() < 1e-6);
        assert!(pole.y.is_finite());
    }

    #[test]
    fn test_geo_bounds_from_point() {
        let bounds = GeoBounds::from_point(53.5, 9.7);
        assert!((bounds.center().0 - 53.5).abs() < 0.0001);
        assert!((bounds.center().1 - 9.7).abs() < 0.0001);
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
    }

    #[test]
    fn test_geo_bounds_expand() {
        let mut bounds = GeoBounds::from_point(53.5, 9.7);
        bounds.expand(54.0, 10.5);

        assert!((bounds.min_lat - 53.5).abs() < 0.0001);
        assert!((bounds.max_lat - 54.0).abs() < 0.0001);
        assert!((bounds.min_lon - 9.7).abs() < 0.0001);
        assert!((bounds.max_lon - 10.5).abs() < 0.0001);
    }

    #[test]
    fn test_geo_bounds_width_and_height() {
        let bounds = GeoBounds::new(53.0, 54.0, 9.0, 11.0);
        assert!((bounds.width() - 2.0).abs() < 0.0001);
        assert!((bounds.height() - 1.0).abs() < 0.0001);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_mercator_monotonic_in_longitude(
                lat in -80.0..80.0_f64,
                lon1 in -180.0..0.0_f64,
                lon2 in 0.0..180.0_f64
            ) {
                let p1 = lon_lat_to_mercator(lon1, lat);
                let p2 = lon_lat_to_mercator(lon2, lat);
                prop_assert!(p1.x < p2.x, "x not monotonic: {} >= {}", p1.x, p2.x);
            }

            #[test]
            fn test_mercator_monotonic_in_latitude(
                lon in -180.0..180.0_f64,
                lat1 in -80.0..0.0_f64,
                lat2 in 0.0..80.0_f64
            ) {
                let p1 = lon_lat_to_mercator(lon, lat1);
                let p2 = lon_lat_to_mercator(lon, lat2);
                prop_assert!(p1.y < p2.y, "y not monotonic: {} >= {}", p1.y, p2.y);
            }

            #[test]
            fn test_mercator_always_finite(
                lon in -360.0..360.0_f64,
                lat in -90.0..90.0_f64
            ) {
                let p = lon_lat_to_mercator(lon, lat);
                prop_assert!(p.x.is_finite());
                prop_assert!(p.y.is_finite());
            }

            #[test]
            fn test_bounds_expand_contains_point(
                lat0 in -85.0..85.0_f64,
                lon0 in -180.0..180.0_f64,
                lat1 in -85.0..85.0_f64,
                lon1 in -180.0..180.0_f64
            ) {
                let mut bounds = GeoBounds::from_point(lat0, lon0);
                bounds.expand(lat1, lon1);

                prop_assert!(bounds.min_lat <= lat0 && lat0 <= bounds.max_lat);
                prop_assert!(bounds.min_lat <= lat1 && lat1 <= bounds.max_lat);
                prop_assert!(bounds.min_lon <= lon0 && lon0 <= bounds.max_lon);
                prop_assert!(bounds.min_lon <= lon1 && lon1 <= bounds.max_lon);
            }
        }
    }
}
