//! Ingestion pipeline: API payloads into the store.
//!
//! Stages run in dependency order and each one checks that the tables it
//! references are already populated before fetching anything.

pub mod project;


use crate::cli::types::MatchId;
use crate::cricbuzz::endpoints::DEFAULT_VENUE_LIST;
use crate::cricbuzz::types::{
    MatchListResponse, ScorecardResponse, SeriesListResponse, TeamsResponse, VenuesResponse,
};
use crate::cricbuzz::{ApiClient, Endpoint};
use crate::error::{CricError, Result};
use crate::storage::{CricketDatabase, Match, Table};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One step of the pipeline, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Series,
    Teams,
    Venues,
    Matches,
    PlayerStats,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Series,
        Stage::Teams,
        Stage::Venues,
        Stage::Matches,
        Stage::PlayerStats,
    ];

    /// Tables that must hold rows before this stage can run.
    pub fn prerequisites(&self) -> &'static [Table] {
        match self {
            Stage::Series | Stage::Teams | Stage::Venues => &[],
            Stage::Matches => &[Table::Teams, Table::Venues],
            Stage::PlayerStats => &[Table::Matches],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Series => "series",
            Stage::Teams => "teams",
            Stage::Venues => "venues",
            Stage::Matches => "matches",
            Stage::PlayerStats => "player-stats",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Stage {
    type Err = CricError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "series" => Ok(Stage::Series),
            "teams" => Ok(Stage::Teams),
            "venues" => Ok(Stage::Venues),
            "matches" => Ok(Stage::Matches),
            "player-stats" | "stats" | "scorecards" => Ok(Stage::PlayerStats),
            _ => Err(CricError::InvalidStage {
                stage: s.to_string(),
            }),
        }
    }
}

/// Rows written by one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    pub rows: usize,
}

/// Runs ingestion stages against one client and one store.
pub struct Pipeline<'a> {
    client: &'a ApiClient,
    db: &'a mut CricketDatabase,
}

impl<'a> Pipeline<'a> {
    pub fn new(client: &'a ApiClient, db: &'a mut CricketDatabase) -> Self {
        Self { client, db }
    }

    pub async fn run_all(&mut self) -> Result<Vec<StageReport>> {
        self.run(&Stage::ALL).await
    }

    /// Run the given stages in dependency order, each at most once. Stops at
    /// the first failing stage; stages already finished stay committed.
    pub async fn run(&mut self, stages: &[Stage]) -> Result<Vec<StageReport>> {
        let mut ordered = stages.to_vec();
        ordered.sort();
        ordered.dedup();

        let mut reports = Vec::with_capacity(ordered.len());
        for stage in ordered {
            reports.push(self.run_stage(stage).await?);
        }
        Ok(reports)
    }

    pub async fn run_stage(&mut self, stage: Stage) -> Result<StageReport> {
        self.check_prerequisites(stage)?;

        let rows = match stage {
            Stage::Series => self.ingest_series().await?,
            Stage::Teams => self.ingest_teams().await?,
            Stage::Venues => self.ingest_venues().await?,
            Stage::Matches => self.ingest_matches().await?,
            Stage::PlayerStats => self.ingest_player_stats().await?,
        };

        info!("Upserted {} {} rows", rows, stage);
        Ok(StageReport { stage, rows })
    }

    fn check_prerequisites(&self, stage: Stage) -> Result<()> {
        for table in stage.prerequisites() {
            if self.db.count(*table)? == 0 {
                return Err(CricError::StageOutOfOrder {
                    stage: stage.to_string(),
                    missing: table.to_string(),
                });
            }
        }
        Ok(())
    }

    async fn fetch(&self, endpoint: Endpoint) -> Result<Value> {
        self.client.fetch(&endpoint).await.into_result()
    }

    pub async fn ingest_series(&mut self) -> Result<usize> {
        let body = self.fetch(Endpoint::SeriesList).await?;
        let payload: SeriesListResponse = decode("series list", body)?;
        self.db.upsert_series(&project::project_series(payload))
    }

    pub async fn ingest_teams(&mut self) -> Result<usize> {
        let body = self.fetch(Endpoint::Teams).await?;
        let payload: TeamsResponse = decode("teams list", body)?;
        self.db.upsert_teams(&project::project_teams(payload))
    }

    pub async fn ingest_venues(&mut self) -> Result<usize> {
        let body = self.fetch(Endpoint::Venues(DEFAULT_VENUE_LIST)).await?;
        let payload: VenuesResponse = decode("venues list", body)?;
        self.db.upsert_venues(&project::project_venues(payload))
    }

    pub async fn ingest_matches(&mut self) -> Result<usize> {
        let body = self.fetch(Endpoint::LiveMatches).await?;
        let payload: MatchListResponse = decode("live matches", body)?;
        let rows = project::project_matches(&payload)?;

        for m in &rows {
            self.check_references(m)?;
        }
        self.db.upsert_matches(&rows)
    }

    /// Every team and venue a match points at must already be stored.
    fn check_references(&self, m: &Match) -> Result<()> {
        let teams = [
            Some(m.team_a_id),
            Some(m.team_b_id),
            m.winning_team_id,
            m.toss_winner_team_id,
        ];
        for team in teams.into_iter().flatten() {
            if !self.db.team_exists(team)? {
                return Err(dangling("team", team.as_i64(), m.match_id));
            }
        }
        if !self.db.venue_exists(m.venue_id)? {
            return Err(dangling("venue", m.venue_id.as_i64(), m.match_id));
        }
        Ok(())
    }

    /// Fetch and record the scorecard of every stored match, one transaction
    /// per match.
    pub async fn ingest_player_stats(&mut self) -> Result<usize> {
        let mut total = 0;
        for match_id in self.db.match_ids()? {
            total += self.ingest_scorecard(match_id).await?;
        }
        Ok(total)
    }

    async fn ingest_scorecard(&mut self, match_id: MatchId) -> Result<usize> {
        let m = self
            .db
            .get_match(match_id)?
            .ok_or_else(|| dangling("match", match_id.as_i64(), match_id))?;

        let endpoint = Endpoint::Scorecard(match_id);
        let label = endpoint.label();
        let body = self.fetch(endpoint).await?;
        let payload: ScorecardResponse = decode(&label, body)?;
        let rows = project::project_scorecard(&m, payload)?;

        if rows.is_empty() {
            debug!("No scorecard rows for match {}", match_id);
            return Ok(0);
        }

        let written = self.db.record_scorecard(&rows)?;
        debug!(
            "Match {}: {} batting, {} bowling rows",
            match_id,
            rows.batting.len(),
            rows.bowling.len()
        );
        Ok(written)
    }
}

fn dangling(entity: &str, id: i64, match_id: MatchId) -> CricError {
    CricError::DanglingReference {
        entity: entity.to_string(),
        id,
        referenced_by: format!("match {}", match_id),
    }
}

/// Deserialize a response body, reporting failures against its label.
fn decode<T: DeserializeOwned>(label: &str, body: Value) -> Result<T> {
    serde_json::from_value(body).map_err(|e| CricError::payload(label, e))
}
