//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Distance between two points in kilometers, by the haversine formula over
/// the mean earth radius.
pub fn haversine_km(p1: GeoPoint, p2: GeoPoint) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let lat1 = p1.latitude.to_radians();
    let lon1 = p1.longitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let lon2 = p2.longitude.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoPoint::new(13.7563, 100.5018);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn bangkok_to_nonthaburi_is_about_twelve_km() {
        // City-hall-to-city-hall, roughly 12km as the crow flies.
        let bangkok = GeoPoint::new(13.7563, 100.5018);
        let nonthaburi = GeoPoint::new(13.8622, 100.5140);
        let d = haversine_km(bangkok, nonthaburi);
        assert!((11.0..13.0).contains(&d), "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(51.5074, -0.1278);
        let b = GeoPoint::new(48.8566, 2.3522);
        let d1 = haversine_km(a, b);
        let d2 = haversine_km(b, a);
        assert!((d1 - d2).abs() < 1e-9);
        // London to Paris is ~344km.
        assert!((340.0..350.0).contains(&d1), "got {d1}");
    }
}
