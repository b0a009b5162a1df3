//! # eye-hunt-campus
//!
//! Campus spot data for the eyeball hunt.
//!
//! ## Features
//!
//! - **Spot directory**: canonical-name lookup with load-time alias expansion
//! - **Spatial queries**: great-circle distances on the backend's sphere model
//! - **Play area**: campus boundary polygon and map bounds
//! - **Location samples**: validated device fixes with a fallback default
//!
//! ## Example
//!
//! ```
//! use eye_hunt_campus::prelude::*;
//!
//! let directory = SpotDirectory::campus();
//!
//! // Legacy alias and canonical name resolve to the same spot
//! let spot = directory.resolve("KRAFTON").expect("alias known");
//! assert_eq!(spot.name.as_ref(), "크래프톤 건물");
//!
//! // The spot sits a few hundred meters from the campus default center
//! let distance = haversine_distance(default_center(), spot.location);
//! assert!(distance < 1_000.0);
//! ```

pub mod bounds;
pub mod directory;
pub mod identifiers;
pub mod name;
pub mod sample;
pub mod spatial;
pub mod spot;

// Re-exports for convenience
pub mod prelude {
    pub use crate::bounds::{campus_boundary, default_center, CampusBounds};
    pub use crate::directory::SpotDirectory;
    pub use crate::identifiers::*;
    pub use crate::name::normalize_name;
    pub use crate::sample::{
        normalize_sample, sample_from, GeoSample, LocationError, LocationSource, RawFix,
    };
    pub use crate::spatial::haversine_distance;
    pub use crate::spot::Spot;
}

pub use prelude::*;
