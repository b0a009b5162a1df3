//! Spot model and the builtin campus registry.
//!
//! The registry is static: spots are loaded once at startup and never
//! mutated. Remaining collectible counts live in the core crate's active
//! set, not here.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::SpotIdentifier;

/// A named capture point pinned to a real-world coordinate.
#[derive(Clone, Debug)]
pub struct Spot {
    pub id: SpotIdentifier,
    pub name: Arc<str>,
    /// `geo` convention: x = longitude, y = latitude.
    pub location: Point,
}

impl Spot {
    pub fn new(id: impl Into<SpotIdentifier>, name: impl Into<Arc<str>>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: Point::new(lng, lat),
        }
    }
}

/// The six campus capture points.
pub fn campus_spots() -> Vec<Spot> {
    vec![
        Spot::new("kaimaru", "카이마루", 36.3739, 127.3592),
        Spot::new("library", "카이스트 도서관", 36.369644848295096, 127.36253254114752),
        Spot::new("duckpond", "오리연못", 36.3678157769514, 127.36290511376632),
        Spot::new("sports-complex", "스포츠 컴플렉스", 36.37248232970725, 127.36152667140567),
        Spot::new("krafton", "크래프톤 건물", 36.36828661090938, 127.36489400888212),
        Spot::new("natural-science", "자연과학동", 36.37081865447142, 127.36497647525277),
    ]
}

/// Legacy and alternate display names, mapped to the canonical name they
/// should resolve to.
pub fn campus_aliases() -> Vec<(&'static str, &'static str)> {
    vec![("KRAFTON", "크래프톤 건물"), ("문화관", "카이스트 도서관")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_spots_have_unique_ids() {
        let spots = campus_spots();
        let mut ids: Vec<_> = spots.iter().map(|s| s.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), spots.len());
    }

    #[test]
    fn test_alias_targets_exist() {
        let spots = campus_spots();
        for (_, target) in campus_aliases() {
            assert!(spots.iter().any(|s| s.name.as_ref() == target));
        }
    }
}
