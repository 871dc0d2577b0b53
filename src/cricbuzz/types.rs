//! Typed views of Cricbuzz API payloads.
//!
//! Identifier and name fields are mandatory: a payload missing one fails to
//! deserialize, which aborts the batch it belongs to. Everything else is
//! optional and defaults to absent.

use crate::cli::types::{MatchId, PlayerId, SeriesId, TeamId, VenueId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Parse an API date into `YYYY-MM-DD`.
///
/// Accepts epoch milliseconds (as a number or a digit string) and ISO dates
/// with an optional time suffix.
pub fn parse_api_date(raw: &Value) -> Result<Option<String>, String> {
    let millis = match raw {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_i64().ok_or_else(|| format!("invalid timestamp {}", n))?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            if s.chars().all(|c| c.is_ascii_digit()) {
                s.parse::<i64>().map_err(|e| e.to_string())?
            } else {
                let day = s.get(..10).unwrap_or(s);
                let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
                    .map_err(|e| format!("invalid date {:?}: {}", s, e))?;
                return Ok(Some(date.format("%Y-%m-%d").to_string()));
            }
        }
        other => return Err(format!("unexpected date value {}", other)),
    };

    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| Some(dt.date_naive().format("%Y-%m-%d").to_string()))
        .ok_or_else(|| format!("timestamp out of range: {}", millis))
}

fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    parse_api_date(&raw).map_err(D::Error::custom)
}

/// Integers that sometimes arrive as strings ("45000", "45,000").
fn de_opt_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid integer {}", n))),
        Value::String(s) => {
            let cleaned: String = s.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
            if cleaned.is_empty() {
                return Ok(None);
            }
            cleaned.parse().map(Some).map_err(D::Error::custom)
        }
        other => Err(D::Error::custom(format!("invalid integer {}", other))),
    }
}

// ---------------------------------------------------------------------------
// Series / teams / venues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesListResponse {
    #[serde(rename = "seriesList", default)]
    pub series_list: Vec<SeriesEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesEntry {
    #[serde(rename = "seriesId")]
    pub series_id: SeriesId,
    #[serde(rename = "seriesName")]
    pub series_name: String,
    #[serde(rename = "hostCountry", default)]
    pub host_country: Option<String>,
    #[serde(rename = "matchType", default)]
    pub match_type: Option<String>,
    #[serde(rename = "startDate", default, deserialize_with = "de_opt_date")]
    pub start_date: Option<String>,
    #[serde(rename = "matchCount", default, deserialize_with = "de_opt_lenient_i64")]
    pub match_count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenuesResponse {
    #[serde(default)]
    pub venues: Vec<VenueEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueEntry {
    #[serde(rename = "venueId")]
    pub venue_id: VenueId,
    #[serde(rename = "venueName")]
    pub venue_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de_opt_lenient_i64")]
    pub capacity: Option<i64>,
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

/// Match list envelope.
///
/// The flat `matchList` shape and the live feed's
/// `typeMatches[].seriesMatches[].seriesAdWrapper.matches[]` nesting are both
/// accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchListResponse {
    #[serde(rename = "matchList", default)]
    pub match_list: Vec<MatchEntry>,
    #[serde(rename = "typeMatches", default)]
    pub type_matches: Vec<TypeMatches>,
}

impl MatchListResponse {
    /// Every match in the payload, flat list first.
    pub fn entries(&self) -> Vec<&MatchEntry> {
        let nested = self
            .type_matches
            .iter()
            .flat_map(|t| t.series_matches.iter())
            .filter_map(|s| s.series_ad_wrapper.as_ref())
            .flat_map(|w| w.matches.iter());
        self.match_list.iter().chain(nested).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeMatches {
    #[serde(rename = "seriesMatches", default)]
    pub series_matches: Vec<SeriesMatches>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesMatches {
    #[serde(rename = "seriesAdWrapper", default)]
    pub series_ad_wrapper: Option<SeriesAdWrapper>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesAdWrapper {
    #[serde(default)]
    pub matches: Vec<MatchEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchEntry {
    #[serde(rename = "matchInfo")]
    pub match_info: MatchInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueRef {
    pub id: VenueId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WinnerInfo {
    #[serde(rename = "teamId", default)]
    pub team_id: Option<TeamId>,
    #[serde(rename = "marginType", default)]
    pub margin_type: Option<String>,
    #[serde(rename = "marginValue", default, deserialize_with = "de_opt_lenient_i64")]
    pub margin_value: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TossInfo {
    #[serde(rename = "winnerTeamId", default)]
    pub winner_team_id: Option<TeamId>,
    #[serde(default)]
    pub decision: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchInfo {
    #[serde(rename = "matchId")]
    pub match_id: MatchId,
    #[serde(rename = "seriesId", default)]
    pub series_id: Option<SeriesId>,
    #[serde(rename = "seriesName", default)]
    pub series_name: Option<String>,
    #[serde(rename = "matchDesc", default)]
    pub match_desc: Option<String>,
    pub team1: TeamRef,
    pub team2: TeamRef,
    #[serde(rename = "startDate", default, deserialize_with = "de_opt_date")]
    pub start_date: Option<String>,
    #[serde(rename = "venueId", default)]
    pub venue_id: Option<VenueId>,
    #[serde(rename = "venueInfo", default)]
    pub venue_info: Option<VenueRef>,
    #[serde(default)]
    pub winner: Option<WinnerInfo>,
    #[serde(default)]
    pub toss: Option<TossInfo>,
    #[serde(default)]
    pub status: Option<String>,
}

impl MatchInfo {
    /// `venueId`, falling back to the nested `venueInfo.id`.
    pub fn venue(&self) -> Option<VenueId> {
        self.venue_id.or_else(|| self.venue_info.as_ref().map(|v| v.id))
    }
}

// ---------------------------------------------------------------------------
// Scorecards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ScorecardResponse {
    #[serde(default)]
    pub innings: Vec<Innings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Innings {
    #[serde(rename = "inningsNumber")]
    pub innings_number: i64,
    pub team: TeamRef,
    #[serde(default)]
    pub batting: Vec<BattingEntry>,
    #[serde(default)]
    pub bowling: Vec<BowlingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BattingEntry {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "battingStyle", default)]
    pub batting_style: Option<String>,
    #[serde(rename = "bowlingStyle", default)]
    pub bowling_style: Option<String>,
    #[serde(default)]
    pub runs: i64,
    #[serde(rename = "ballsFaced", default)]
    pub balls_faced: i64,
    #[serde(rename = "battingPosition", default)]
    pub batting_position: i64,
    #[serde(rename = "isOut", default = "default_is_out")]
    pub is_out: bool,
}

fn default_is_out() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct BowlingEntry {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "battingStyle", default)]
    pub batting_style: Option<String>,
    #[serde(rename = "bowlingStyle", default)]
    pub bowling_style: Option<String>,
    #[serde(default)]
    pub overs: f64,
    #[serde(rename = "runsConceded", default)]
    pub runs_conceded: i64,
    #[serde(default)]
    pub wickets: i64,
    #[serde(default)]
    pub maidens: i64,
}
