//! Great-circle distance and coordinate helpers.
//!
//! [`haversine_km`] is the single distance metric used throughout the crate:
//! it drives the A* heuristic, the per-step distances reported in driving
//! instructions, and nothing else. Straight-line distance on the sphere never
//! exceeds a road distance between the same two points, which keeps the
//! heuristic admissible as long as edge weights are expressed in kilometres
//! (or any unit at least as large).

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in decimal degrees.
///
/// Serialises as a `[lat, lon]` array so display geometry can be handed to
/// map renderers without reshaping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another coordinate in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        haversine_km(*self, *other)
    }

    /// Linear interpolation towards `other`; `t = 0` yields `self`, `t = 1`
    /// yields `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            lat: self.lat + t * (other.lat - self.lat),
            lon: self.lon + t * (other.lon - self.lon),
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.lat, value.lon]
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(value: [f64; 2]) -> Self {
        Self {
            lat: value[0],
            lon: value[1],
        }
    }
}

/// Haversine distance between two coordinates, in kilometres.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_have_zero_distance() {
        let phoenix = Coordinate::new(33.4484, -112.0740);
        assert_eq!(haversine_km(phoenix, phoenix), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let phoenix = Coordinate::new(33.4484, -112.0740);
        let tucson = Coordinate::new(32.2226, -110.9747);
        let there = phoenix.distance_to(&tucson);
        let back = tucson.distance_to(&phoenix);
        assert!((there - back).abs() < 1e-9);
        assert!(there > 160.0 && there < 175.0, "got {there}");
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(12.0, 16.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Coordinate::new(11.0, 18.0));
    }

    #[test]
    fn coordinate_serialises_as_lat_lon_pair() {
        let json = serde_json::to_string(&Coordinate::new(1.5, -2.25)).unwrap();
        assert_eq!(json, "[1.5,-2.25]");
    }
}
