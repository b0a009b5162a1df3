//! Great-circle distance on the backend's sphere model.
//!
//! Distances use the haversine formula with the same Earth radius the
//! backend scoring uses (6 371 000 m), so "nearest spot" here always
//! agrees with what the server would compute.

use geo::Point;

/// Earth radius shared with the backend's distance model, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points in meters.
pub fn haversine_distance(from: Point, to: Point) -> f64 {
    let d_lat = (to.y() - from.y()).to_radians();
    let d_lng = (to.x() - from.x()).to_radians();
    let lat1 = from.y().to_radians();
    let lat2 = to.y().to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}
