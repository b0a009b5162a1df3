//! Game logic for the campus eyeball hunt: nearest-spot selection over a
//! live position feed, the capture state machine, and leaderboard gap
//! computation. The UI shell feeds positions and backend snapshots in
//! and renders whatever comes back; all remote I/O goes through the
//! injected [`capture::CaptureBackend`] and
//! [`campus::sample::LocationSource`] seams.

pub mod capture;
pub mod clock;
pub mod leaderboard;
pub mod proximity;

// Re-export the campus data layer
pub use eye_hunt_campus as campus;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;

    use approx::assert_relative_eq;
    use geo::Point;

    use crate::campus::directory::SpotDirectory;
    use crate::campus::identifiers::{SpotIdentifier, TargetIdentifier};
    use crate::campus::spot::Spot;
    use crate::capture::{
        AttemptState, CaptureAttempt, CaptureBackend, ResolveError, ResolvedTarget, SubmitError,
    };
    use crate::proximity::{ActiveSpotSet, ProximityEngine};

    /// Backend whose only known code belongs to the gate spot's eyeball.
    struct GateBackend;

    impl CaptureBackend for GateBackend {
        fn resolve_code<'a>(
            &'a self,
            code: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<ResolvedTarget, ResolveError>> + Send + 'a>>
        {
            Box::pin(async move {
                if code == "EYE-GATE-01" {
                    Ok(ResolvedTarget {
                        target_id: TargetIdentifier::new("eyeball-gate"),
                        point_value: 10,
                    })
                } else {
                    Err(ResolveError::NotFound)
                }
            })
        }

        fn submit_capture<'a>(
            &'a self,
            _target: &'a TargetIdentifier,
        ) -> Pin<Box<dyn Future<Output = Result<u32, SubmitError>> + Send + 'a>> {
            Box::pin(async move { Ok(10) })
        }
    }

    #[tokio::test]
    async fn test_capture_flow_updates_nearest() {
        let directory = Arc::new(SpotDirectory::new(
            vec![
                Spot::new("gate", "정문", 36.3696, 127.3625),
                // About 500 m north of the gate
                Spot::new("hill", "언덕", 36.3741, 127.3625),
            ],
            &[],
        ));
        let engine = ProximityEngine::new(directory.clone());

        let counts = HashMap::from([("정문".to_string(), 1u32), ("언덕".to_string(), 1u32)]);
        let mut active = ActiveSpotSet::from_snapshot(&directory, &counts);

        // Standing at the gate, the gate spot is nearest at zero distance
        let position = Point::new(127.3625, 36.3696);
        let nearest = engine.nearest(position, &active).unwrap();
        assert_eq!(nearest.spot.id, SpotIdentifier::new("gate"));
        assert_eq!(nearest.distance_meters, 0.0);

        // Scan the gate eyeball and capture it
        let attempt = CaptureAttempt::new("EYE-GATE-01").run(&GateBackend).await;
        assert_eq!(attempt.state(), AttemptState::Succeeded);
        assert_eq!(attempt.awarded_points(), Some(10));
        assert!(attempt.resolved_target().is_some());

        // Points were awarded: the gate spot loses its collectible
        active.decrement(&nearest.spot.id);

        // Recompute: the hill spot is nearest now, about 500 m away
        let nearest = engine.nearest(position, &active).unwrap();
        assert_eq!(nearest.spot.id, SpotIdentifier::new("hill"));
        assert_relative_eq!(nearest.distance_meters, 500.0, max_relative = 1e-2);
    }
}
