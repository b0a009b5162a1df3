//! Nearest active spot selection.
//!
//! The engine is pure: it holds no timers and no mutable state, so the
//! host recomputes by simply calling [`ProximityEngine::nearest`] again
//! whenever the position or the active set changes. Redundant calls are
//! safe and return the same answer.

use std::collections::HashMap;
use std::sync::Arc;

use geo::Point;
use tracing::warn;

use crate::campus::directory::SpotDirectory;
use crate::campus::identifiers::SpotIdentifier;
use crate::campus::spatial::haversine_distance;
use crate::campus::spot::Spot;

/// Remaining collectible counts per spot, refreshed periodically from
/// the backend's active-counts snapshot.
#[derive(Clone, Debug, Default)]
pub struct ActiveSpotSet {
    remaining: HashMap<SpotIdentifier, u32>,
}

impl ActiveSpotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a raw backend snapshot keyed by display name. Names go
    /// through directory resolution; entries for unknown names are
    /// dropped, not errors.
    pub fn from_snapshot(directory: &SpotDirectory, counts: &HashMap<String, u32>) -> Self {
        let mut remaining = HashMap::new();
        for (raw_name, count) in counts {
            match directory.resolve(raw_name) {
                Some(spot) => {
                    remaining.insert(spot.id.clone(), *count);
                }
                None => warn!(name = %raw_name, "ignoring active count for unknown spot"),
            }
        }
        Self { remaining }
    }

    pub fn remaining(&self, id: &SpotIdentifier) -> u32 {
        self.remaining.get(id).copied().unwrap_or(0)
    }

    pub fn set_remaining(&mut self, id: SpotIdentifier, count: u32) {
        self.remaining.insert(id, count);
    }

    /// Post-capture bookkeeping: one collectible claimed, floored at 0.
    pub fn decrement(&mut self, id: &SpotIdentifier) {
        if let Some(count) = self.remaining.get_mut(id) {
            *count = count.saturating_sub(1);
        }
    }

    /// True when no spot has a collectible left.
    pub fn is_depleted(&self) -> bool {
        self.remaining.values().all(|&count| count == 0)
    }
}

/// The closest active spot to the player's last known position.
#[derive(Clone, Debug)]
pub struct NearestSpot {
    pub spot: Arc<Spot>,
    pub distance_meters: f64,
}

impl NearestSpot {
    /// UI gate only; capture is never range-enforced by the core.
    pub fn within(&self, radius_m: f64) -> bool {
        self.distance_meters <= radius_m
    }
}

pub struct ProximityEngine {
    directory: Arc<SpotDirectory>,
}

impl ProximityEngine {
    pub fn new(directory: Arc<SpotDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &SpotDirectory {
        &self.directory
    }

    /// The nearest spot with collectibles remaining, or `None` when the
    /// active set is empty or fully depleted.
    ///
    /// Exact distance ties go to the first spot in directory order.
    pub fn nearest(&self, position: Point, active: &ActiveSpotSet) -> Option<NearestSpot> {
        let mut nearest: Option<NearestSpot> = None;
        for spot in self.directory.spots() {
            if active.remaining(&spot.id) == 0 {
                continue;
            }
            let distance_meters = haversine_distance(position, spot.location);
            if nearest
                .as_ref()
                .is_none_or(|n| distance_meters < n.distance_meters)
            {
                nearest = Some(NearestSpot { spot: spot.clone(), distance_meters });
            }
        }
        nearest
    }
}
