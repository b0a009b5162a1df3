//! Campus play-area geometry.
//!
//! The boundary polygon traces the campus perimeter; the rectangular
//! bounds are what the map view is clamped to. The default center is the
//! library spot and doubles as the fallback coordinate when device
//! location is unavailable.

use geo::{Contains, LineString, Point, Polygon};

/// Map-view rectangle around campus.
#[derive(Clone, Copy, Debug)]
pub struct CampusBounds {
    pub sw: Point,
    pub ne: Point,
}

impl CampusBounds {
    pub fn kaist() -> Self {
        Self {
            sw: Point::new(127.3465, 36.3605),
            ne: Point::new(127.3742, 36.3798),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x() >= self.sw.x() && p.x() <= self.ne.x() && p.y() >= self.sw.y() && p.y() <= self.ne.y()
    }
}

/// Fallback coordinate for degraded location: the library spot.
pub fn default_center() -> Point {
    Point::new(127.36253254114752, 36.369644848295096)
}

/// The campus perimeter as surveyed for the map mask.
pub fn campus_boundary() -> Polygon {
    Polygon::new(
        LineString::from(vec![
            (127.3563062, 36.3722536),
            (127.3555366, 36.3718705),
            (127.3551775, 36.3714004),
            (127.3551755, 36.3707423),
            (127.3551416, 36.3701119),
            (127.35529, 36.3695194),
            (127.3558462, 36.3686589),
            (127.356276, 36.3680371),
            (127.3566346, 36.3675306),
            (127.3575073, 36.3662289),
            (127.3583128, 36.364998),
            (127.3588286, 36.3641914),
            (127.3594513, 36.3632396),
            (127.3604723, 36.3638636),
            (127.3617012, 36.3645115),
            (127.3635305, 36.3654039),
            (127.365721, 36.3664143),
            (127.3669117, 36.3671878),
            (127.3692388, 36.3687475),
            (127.3700431, 36.3692864),
            (127.369642, 36.3698521),
            (127.3685031, 36.3705725),
            (127.3679213, 36.3711543),
            (127.3676982, 36.3721754),
            (127.3672858, 36.3734474),
            (127.36667, 36.3745723),
            (127.3660923, 36.3751044),
            (127.36471, 36.3755371),
            (127.3635489, 36.3757704),
            (127.362135, 36.3761623),
            (127.3611065, 36.3766876),
            (127.3602607, 36.3771518),
            (127.3592843, 36.3777336),
            (127.3579868, 36.3785319),
            (127.3565453, 36.3780782),
            (127.356274, 36.3772436),
            (127.3562815, 36.3760248),
            (127.3562711, 36.3746533),
            (127.3562032, 36.3730736),
            (127.3563062, 36.3722536),
        ]),
        vec![],
    )
}

/// Whether a point lies inside the campus perimeter.
pub fn in_campus(p: Point) -> bool {
    campus_boundary().contains(&p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spot::campus_spots;

    #[test]
    fn test_default_center_inside_play_area() {
        let center = default_center();
        assert!(CampusBounds::kaist().contains(center));
        assert!(in_campus(center));
    }

    #[test]
    fn test_all_spots_inside_bounds() {
        let bounds = CampusBounds::kaist();
        for spot in campus_spots() {
            assert!(bounds.contains(spot.location), "{} outside bounds", spot.id);
        }
    }

    #[test]
    fn test_far_point_outside() {
        // Seoul City Hall
        let seoul = Point::new(126.9780, 37.5665);
        assert!(!CampusBounds::kaist().contains(seoul));
        assert!(!in_campus(seoul));
    }
}
