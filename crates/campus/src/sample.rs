//! Device location readings and the fallback policy.
//!
//! A failed or denied location read is not an error to the rest of the
//! game: play continues from a configured default coordinate. Nothing in
//! this module propagates a failure past `normalize_sample`.

use geo::Point;
use serde::Deserialize;

use crate::bounds::default_center;

/// A raw, unvalidated reading from the device location bridge.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RawFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why a location read produced no usable fix. Always absorbed by
/// [`normalize_sample`], never surfaced to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location read timed out")]
    Timeout,

    #[error("location unavailable")]
    Unavailable,
}

/// A validated coordinate: finite, latitude in [-90, 90], longitude in
/// [-180, 180]. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoSample(Point);

impl GeoSample {
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then(|| Self(Point::new(longitude, latitude)))
    }

    /// The campus fallback coordinate.
    pub fn campus_default() -> Self {
        Self(default_center())
    }

    pub fn point(&self) -> Point {
        self.0
    }

    pub fn latitude(&self) -> f64 {
        self.0.y()
    }

    pub fn longitude(&self) -> f64 {
        self.0.x()
    }
}

/// Host-injected source of device fixes.
pub trait LocationSource: Send + Sync {
    fn current_fix(&self) -> Result<RawFix, LocationError>;
}

/// Read the current position from a source, degrading to `fallback`.
pub fn sample_from(source: &dyn LocationSource, fallback: GeoSample) -> GeoSample {
    normalize_sample(source.current_fix(), fallback)
}

/// Turn a raw reading (or its absence) into a usable coordinate.
///
/// Valid readings pass through unchanged; everything else, including
/// non-finite or out-of-range values, yields `fallback`.
pub fn normalize_sample(reading: Result<RawFix, LocationError>, fallback: GeoSample) -> GeoSample {
    match reading {
        Ok(fix) => GeoSample::new(fix.latitude, fix.longitude).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reading_passes_through() {
        let fix = RawFix { latitude: 36.3739, longitude: 127.3592 };
        let sample = normalize_sample(Ok(fix), GeoSample::campus_default());
        assert_eq!(sample.latitude(), 36.3739);
        assert_eq!(sample.longitude(), 127.3592);
    }

    #[test]
    fn test_error_yields_fallback() {
        for err in [
            LocationError::PermissionDenied,
            LocationError::Timeout,
            LocationError::Unavailable,
        ] {
            let sample = normalize_sample(Err(err), GeoSample::campus_default());
            assert_eq!(sample, GeoSample::campus_default());
        }
    }

    #[test]
    fn test_bad_values_yield_fallback() {
        let fallback = GeoSample::campus_default();
        for fix in [
            RawFix { latitude: f64::NAN, longitude: 127.0 },
            RawFix { latitude: 36.0, longitude: f64::INFINITY },
            RawFix { latitude: 91.0, longitude: 127.0 },
            RawFix { latitude: 36.0, longitude: -181.0 },
        ] {
            assert_eq!(normalize_sample(Ok(fix), fallback), fallback);
        }
    }

    #[test]
    fn test_range_edges_are_valid() {
        assert!(GeoSample::new(90.0, 180.0).is_some());
        assert!(GeoSample::new(-90.0, -180.0).is_some());
    }

    #[test]
    fn test_sample_from_source() {
        struct Denied;
        impl LocationSource for Denied {
            fn current_fix(&self) -> Result<RawFix, LocationError> {
                Err(LocationError::PermissionDenied)
            }
        }

        struct AtGate;
        impl LocationSource for AtGate {
            fn current_fix(&self) -> Result<RawFix, LocationError> {
                Ok(RawFix { latitude: 36.3696, longitude: 127.3625 })
            }
        }

        let fallback = GeoSample::campus_default();
        assert_eq!(sample_from(&Denied, fallback), fallback);
        assert_eq!(sample_from(&AtGate, fallback).latitude(), 36.3696);
    }

    #[test]
    fn test_raw_fix_deserializes_from_bridge_payload() {
        let fix: RawFix =
            serde_json::from_str(r#"{"latitude": 36.3696, "longitude": 127.3625}"#).unwrap();
        assert_eq!(fix.latitude, 36.3696);
    }
}
