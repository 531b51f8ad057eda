//! Great-circle distance between place coordinates

use haversine::{Location as HaversineLocation, Units, distance};

use crate::models::Coordinates;

/// Great-circle distance in kilometers between two coordinates
///
/// Used only as a comparison key during route sequencing; no display
/// precision is guaranteed.
#[must_use]
pub fn distance_km(from: &Coordinates, to: &Coordinates) -> f64 {
    let from_haversine = HaversineLocation {
        latitude: from.latitude,
        longitude: from.longitude,
    };
    let to_haversine = HaversineLocation {
        latitude: to.latitude,
        longitude: to.longitude,
    };
    distance(from_haversine, to_haversine, Units::Kilometers)
}
