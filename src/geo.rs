//! Great-circle distances between city locations

use geo::HaversineDistance;
use geo::Point;
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn distance_km(&self, other: &Location) -> f64 {
        haversine_km(self, other)
    }
}

/// Great-circle distance in kilometres
pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    let p1 = Point::new(a.lon, a.lat);
    let p2 = Point::new(b.lon, b.lat);
    p1.haversine_distance(&p2) / 1000.0
}
