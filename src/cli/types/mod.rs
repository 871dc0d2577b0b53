//! Type-safe wrappers and enums for cricket data.

pub mod format;
pub mod ids;
pub mod role;

pub use format::{MatchFormat, TossDecision};
pub use ids::{MatchId, PlayerId, SeriesId, TeamId, VenueId};
pub use role::PlayerRole;
