//! Cricbuzz API endpoint catalog.

use crate::cli::types::{MatchId, PlayerId, SeriesId, TeamId, VenueId};
use crate::error::{CricError, Result};

/// Venue list fetched by the venues stage.
pub const DEFAULT_VENUE_LIST: i64 = 45;

/// A GET endpoint of the Cricbuzz API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    LiveMatches,
    RecentMatches,
    MatchDetails(MatchId),
    Scorecard(MatchId),
    Commentary(MatchId),
    Overs(MatchId),
    PlayerInfo(PlayerId),
    PlayerStats(PlayerId),
    PlayerSearch(String),
    Venues(i64),
    VenueMatches(VenueId),
    VenueStats(VenueId),
    SeriesList,
    SeriesSquads(SeriesId),
    SeriesStats(SeriesId),
    Teams,
    TeamStats(TeamId),
    TeamResults(TeamId),
}

impl Endpoint {
    /// Names accepted by [`Endpoint::from_name`].
    pub const NAMES: [&'static str; 18] = [
        "live-matches",
        "recent-matches",
        "match-details",
        "scorecard",
        "commentary",
        "overs",
        "player-info",
        "player-stats",
        "player-search",
        "venues",
        "venue-matches",
        "venue-stats",
        "series-list",
        "series-squads",
        "series-stats",
        "teams",
        "team-stats",
        "team-results",
    ];

    /// Build an endpoint from its name, the id it is keyed by and, for
    /// `player-search`, the search text. `venues` defaults to
    /// [`DEFAULT_VENUE_LIST`] when no id is given.
    pub fn from_name(name: &str, id: Option<i64>, search: Option<&str>) -> Result<Self> {
        let invalid = |reason: &str| CricError::InvalidEndpoint {
            endpoint: name.to_string(),
            reason: reason.to_string(),
        };
        let require_id = || id.ok_or_else(|| invalid("needs an id"));

        let endpoint = match name.trim().to_lowercase().replace('_', "-").as_str() {
            "live-matches" => Endpoint::LiveMatches,
            "recent-matches" => Endpoint::RecentMatches,
            "match-details" => Endpoint::MatchDetails(MatchId::new(require_id()?)),
            "scorecard" => Endpoint::Scorecard(MatchId::new(require_id()?)),
            "commentary" => Endpoint::Commentary(MatchId::new(require_id()?)),
            "overs" => Endpoint::Overs(MatchId::new(require_id()?)),
            "player-info" => Endpoint::PlayerInfo(PlayerId::new(require_id()?)),
            "player-stats" => Endpoint::PlayerStats(PlayerId::new(require_id()?)),
            "player-search" => {
                let text = search
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| invalid("needs --search text"))?;
                Endpoint::PlayerSearch(text.to_string())
            }
            "venues" => Endpoint::Venues(id.unwrap_or(DEFAULT_VENUE_LIST)),
            "venue-matches" => Endpoint::VenueMatches(VenueId::new(require_id()?)),
            "venue-stats" => Endpoint::VenueStats(VenueId::new(require_id()?)),
            "series-list" => Endpoint::SeriesList,
            "series-squads" => Endpoint::SeriesSquads(SeriesId::new(require_id()?)),
            "series-stats" => Endpoint::SeriesStats(SeriesId::new(require_id()?)),
            "teams" => Endpoint::Teams,
            "team-stats" => Endpoint::TeamStats(TeamId::new(require_id()?)),
            "team-results" => Endpoint::TeamResults(TeamId::new(require_id()?)),
            _ => {
                return Err(invalid(&format!(
                    "expected one of {}",
                    Self::NAMES.join(", ")
                )))
            }
        };
        Ok(endpoint)
    }

    /// Path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::LiveMatches => "/matches/v1/live".to_string(),
            Endpoint::RecentMatches => "/matches/v1/recent".to_string(),
            Endpoint::MatchDetails(id) => format!("/mcenter/v1/{}", id),
            Endpoint::Scorecard(id) => format!("/mcenter/v1/{}/scard", id),
            Endpoint::Commentary(id) => format!("/mcenter/v1/{}/comm", id),
            Endpoint::Overs(id) => format!("/mcenter/v1/{}/overs", id),
            Endpoint::PlayerInfo(id) => format!("/stats/v1/player/{}", id),
            Endpoint::PlayerStats(id) => format!("/stats/v1/player/{}/stats", id),
            Endpoint::PlayerSearch(_) => "/stats/v1/player/search".to_string(),
            Endpoint::Venues(list) => format!("/venues/v1/{}", list),
            Endpoint::VenueMatches(id) => format!("/venues/v1/{}/matches", id),
            Endpoint::VenueStats(id) => format!("/stats/v1/venue/{}", id),
            Endpoint::SeriesList => "/series/v1/international".to_string(),
            Endpoint::SeriesSquads(id) => format!("/series/v1/{}/squads", id),
            Endpoint::SeriesStats(id) => format!("/stats/v1/series/{}", id),
            Endpoint::Teams => "/teams/v1/international".to_string(),
            Endpoint::TeamStats(id) => format!("/stats/v1/team/{}", id),
            Endpoint::TeamResults(id) => format!("/teams/v1/{}/results", id),
        }
    }

    /// Query-string parameters sent with the request.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::PlayerSearch(text) => vec![("search", text.clone())],
            _ => Vec::new(),
        }
    }

    /// Human-readable label used in log lines and errors.
    pub fn label(&self) -> String {
        match self {
            Endpoint::LiveMatches => "live matches".to_string(),
            Endpoint::RecentMatches => "recent matches".to_string(),
            Endpoint::MatchDetails(id) => format!("match info {}", id),
            Endpoint::Scorecard(id) => format!("scorecard {}", id),
            Endpoint::Commentary(id) => format!("commentary {}", id),
            Endpoint::Overs(id) => format!("overs {}", id),
            Endpoint::PlayerInfo(id) => format!("player info {}", id),
            Endpoint::PlayerStats(id) => format!("player stats {}", id),
            Endpoint::PlayerSearch(_) => "browse players".to_string(),
            Endpoint::Venues(_) => "venues list".to_string(),
            Endpoint::VenueMatches(id) => format!("venue matches {}", id),
            Endpoint::VenueStats(id) => format!("venue stats {}", id),
            Endpoint::SeriesList => "series list".to_string(),
            Endpoint::SeriesSquads(id) => format!("series squads {}", id),
            Endpoint::SeriesStats(id) => format!("series stats {}", id),
            Endpoint::Teams => "teams list".to_string(),
            Endpoint::TeamStats(id) => format!("team stats {}", id),
            Endpoint::TeamResults(id) => format!("team results {}", id),
        }
    }
}
