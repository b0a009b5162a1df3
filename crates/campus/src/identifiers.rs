//! Type-safe identifiers for game entities.
//!
//! Identifiers wrap `Arc<str>` so cloning them into derived values
//! (nearest results, capture attempts, leaderboard rows) stays cheap.

use std::fmt;
use std::sync::Arc;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(value: impl AsRef<str>) -> Self {
                Self(value.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

identifier! {
    /// A named capture point on campus.
    SpotIdentifier
}

identifier! {
    /// A collectible instance claimed via a scanned code.
    TargetIdentifier
}

identifier! {
    /// A leaderboard entrant: a player or a group.
    EntrantIdentifier
}
