//! Projection of typed API payloads into store rows.

use crate::cli::types::{MatchFormat, PlayerRole, TeamId, TossDecision};
use crate::cricbuzz::types::{
    BattingEntry, BowlingEntry, MatchListResponse, ScorecardResponse, SeriesListResponse, TeamsResponse,
    VenuesResponse,
};
use crate::error::{CricError, Result};
use crate::storage::functions::balls_from_overs;
use crate::storage::{BattingStat, BowlingStat, Match, Player, ScorecardRows, Series, Team, Venue};
use std::collections::{BTreeMap, HashSet};

pub fn project_series(payload: SeriesListResponse) -> Vec<Series> {
    payload
        .series_list
        .into_iter()
        .map(|s| Series {
            series_id: s.series_id,
            series_name: s.series_name,
            host_country: s.host_country,
            match_type: s.match_type.as_deref().map(MatchFormat::normalize),
            start_date: s.start_date,
            total_matches: s.match_count,
        })
        .collect()
}

pub fn project_teams(payload: TeamsResponse) -> Vec<Team> {
    payload
        .teams
        .into_iter()
        .map(|t| Team {
            team_id: t.team_id,
            team_name: t.team_name,
            country: t.country,
        })
        .collect()
}

pub fn project_venues(payload: VenuesResponse) -> Vec<Venue> {
    payload
        .venues
        .into_iter()
        .map(|v| Venue {
            venue_id: v.venue_id,
            venue_name: v.venue_name,
            city: v.city,
            country: v.country,
            capacity: v.capacity.unwrap_or(0),
        })
        .collect()
}

/// Flatten match info, toss and winner into one row per match.
///
/// Every match is validated before any row is returned: it needs a venue and
/// two distinct teams. A match id seen twice keeps its last occurrence.
pub fn project_matches(payload: &MatchListResponse) -> Result<Vec<Match>> {
    let mut rows: BTreeMap<i64, Match> = BTreeMap::new();

    for entry in payload.entries() {
        let info = &entry.match_info;
        let context = format!("match {}", info.match_id);

        let venue_id = info
            .venue()
            .ok_or_else(|| CricError::payload(&context, "missing venue id"))?;
        if info.team1.team_id == info.team2.team_id {
            return Err(CricError::payload(
                &context,
                format!("team {} listed on both sides", info.team1.team_id),
            ));
        }

        let winner = info.winner.as_ref();
        let toss = info.toss.as_ref();

        rows.insert(
            info.match_id.as_i64(),
            Match {
                match_id: info.match_id,
                series_id: info.series_id,
                match_description: info.match_desc.clone(),
                team_a_id: info.team1.team_id,
                team_b_id: info.team2.team_id,
                match_date: info.start_date.clone(),
                venue_id,
                winning_team_id: winner.and_then(|w| w.team_id),
                victory_margin_type: winner.and_then(|w| w.margin_type.clone()),
                victory_margin: winner.and_then(|w| w.margin_value),
                toss_winner_team_id: toss.and_then(|t| t.winner_team_id),
                toss_decision: toss
                    .and_then(|t| t.decision.as_deref())
                    .map(TossDecision::normalize),
            },
        );
    }

    Ok(rows.into_values().collect())
}

/// Rows for one match scorecard.
///
/// Batters belong to the innings' team and bowlers to the side opposing it.
/// A bowler who bowls in two innings gets one row with the spells combined.
pub fn project_scorecard(m: &Match, payload: ScorecardResponse) -> Result<ScorecardRows> {
    let mut rows = ScorecardRows::default();
    let mut seen = HashSet::new();

    for innings in payload.innings {
        let batting_team = innings.team.team_id;
        let bowling_team = m.opponent_of(batting_team).ok_or_else(|| {
            CricError::payload(
                format!("scorecard {}", m.match_id),
                format!(
                    "innings {} batting team {} did not play this match",
                    innings.innings_number, batting_team
                ),
            )
        })?;

        for b in innings.batting {
            if seen.insert(b.player_id) {
                rows.players.push(batter_player(&b, batting_team));
            }
            rows.batting.push(BattingStat {
                match_id: m.match_id,
                player_id: b.player_id,
                team_id: batting_team,
                innings_number: innings.innings_number,
                runs_scored: b.runs,
                balls_faced: b.balls_faced,
                batting_position: b.batting_position,
                is_out: b.is_out,
            });
        }

        for b in innings.bowling {
            if seen.insert(b.player_id) {
                rows.players.push(bowler_player(&b, bowling_team));
            }
            match rows.bowling.iter_mut().find(|s| s.player_id == b.player_id) {
                Some(spell) => {
                    spell.overs_bowled = add_overs(spell.overs_bowled, b.overs);
                    spell.runs_conceded += b.runs_conceded;
                    spell.wickets_taken += b.wickets;
                    spell.maidens += b.maidens;
                }
                None => rows.bowling.push(BowlingStat {
                    match_id: m.match_id,
                    player_id: b.player_id,
                    team_id: bowling_team,
                    overs_bowled: b.overs,
                    runs_conceded: b.runs_conceded,
                    wickets_taken: b.wickets,
                    maidens: b.maidens,
                }),
            }
        }
    }

    Ok(rows)
}

/// Sum two figures in overs notation: `3.4 + 2.3` is `6.1`.
pub fn add_overs(a: f64, b: f64) -> f64 {
    let balls = balls_from_overs(a) + balls_from_overs(b);
    (balls / 6) as f64 + (balls % 6) as f64 / 10.0
}

fn batter_player(b: &BattingEntry, team: TeamId) -> Player {
    Player {
        player_id: Some(b.player_id),
        player_name: b.player_name.clone(),
        team_id: Some(team),
        role: b.role.as_deref().map(PlayerRole::normalize),
        batting_style: b.batting_style.clone(),
        bowling_style: b.bowling_style.clone(),
    }
}

fn bowler_player(b: &BowlingEntry, team: TeamId) -> Player {
    Player {
        player_id: Some(b.player_id),
        player_name: b.player_name.clone(),
        team_id: Some(team),
        role: b.role.as_deref().map(PlayerRole::normalize),
        batting_style: b.batting_style.clone(),
        bowling_style: b.bowling_style.clone(),
    }
}
