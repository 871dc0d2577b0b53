//! ID types for Cricbuzz entities.
//!
//! Every entity is keyed by the identifier the upstream API assigns it.

use crate::error::{CricError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = CricError;

            fn from_str(s: &str) -> Result<Self> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

entity_id!(
    /// Type-safe wrapper for series IDs.
    ///
    /// ```rust
    /// use cricbuzz_stats::SeriesId;
    ///
    /// let id: SeriesId = "7607".parse().unwrap();
    /// assert_eq!(id.as_i64(), 7607);
    /// assert_eq!(id.to_string(), "7607");
    /// ```
    SeriesId
);
entity_id!(
    /// Type-safe wrapper for team IDs.
    TeamId
);
entity_id!(
    /// Type-safe wrapper for venue IDs.
    VenueId
);
entity_id!(
    /// Type-safe wrapper for match IDs.
    MatchId
);
entity_id!(
    /// Type-safe wrapper for player IDs.
    PlayerId
);
