//! Data models for the storage layer

use crate::cli::types::{MatchId, PlayerId, SeriesId, TeamId, VenueId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub series_id: SeriesId,
    pub series_name: String,
    pub host_country: Option<String>,
    pub match_type: Option<String>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    pub total_matches: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub capacity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub match_id: MatchId,
    pub series_id: Option<SeriesId>,
    pub match_description: Option<String>,
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    /// `YYYY-MM-DD`
    pub match_date: Option<String>,
    pub venue_id: VenueId,
    pub winning_team_id: Option<TeamId>,
    pub victory_margin_type: Option<String>,
    pub victory_margin: Option<i64>,
    pub toss_winner_team_id: Option<TeamId>,
    pub toss_decision: Option<String>,
}

impl Match {
    /// The team playing against `team`, if `team` is one of the two sides.
    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        if team == self.team_a_id {
            Some(self.team_b_id)
        } else if team == self.team_b_id {
            Some(self.team_a_id)
        } else {
            None
        }
    }
}

/// A player row. `player_id` is `None` only for manually added players that
/// have not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: Option<PlayerId>,
    pub player_name: String,
    pub team_id: Option<TeamId>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
}

/// Column changes for an existing player; `None` leaves a column alone.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub player_name: Option<String>,
    pub team_id: Option<TeamId>,
    pub role: Option<String>,
    pub batting_style: Option<String>,
    pub bowling_style: Option<String>,
}

impl PlayerUpdate {
    pub fn is_empty(&self) -> bool {
        self.player_name.is_none()
            && self.team_id.is_none()
            && self.role.is_none()
            && self.batting_style.is_none()
            && self.bowling_style.is_none()
    }
}

/// A player joined with their team name, for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerListing {
    pub player_id: PlayerId,
    pub player_name: String,
    pub role: Option<String>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingStat {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub innings_number: i64,
    pub runs_scored: i64,
    pub balls_faced: i64,
    pub batting_position: i64,
    pub is_out: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlingStat {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub overs_bowled: f64,
    pub runs_conceded: i64,
    pub wickets_taken: i64,
    pub maidens: i64,
}

/// Rows derived from one match scorecard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScorecardRows {
    pub players: Vec<Player>,
    pub batting: Vec<BattingStat>,
    pub bowling: Vec<BowlingStat>,
}

impl ScorecardRows {
    pub fn is_empty(&self) -> bool {
        self.batting.is_empty() && self.bowling.is_empty()
    }
}
