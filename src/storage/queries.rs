//! Upserts and basic CRUD operations
//!
//! Each write method takes a batch of rows and applies it inside a single
//! transaction. The transaction rolls back when dropped, so an error part way
//! through a batch leaves the store as it was before the call.

use super::{models::*, schema::CricketDatabase, schema::Table};
use crate::cli::types::{MatchId, PlayerId, SeriesId, TeamId, VenueId};
use crate::error::Result;
use rusqlite::{params, OptionalExtension, Row, ToSql};

const UPSERT_SERIES: &str = "
    INSERT INTO series
        (series_id, series_name, host_country, match_type, start_date, total_matches)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(series_id) DO UPDATE SET
        host_country  = excluded.host_country,
        match_type    = excluded.match_type,
        start_date    = excluded.start_date,
        total_matches = excluded.total_matches";

const UPSERT_TEAM: &str = "
    INSERT INTO teams (team_id, team_name, country)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(team_id) DO UPDATE SET
        team_name = excluded.team_name,
        country   = excluded.country";

const UPSERT_VENUE: &str = "
    INSERT INTO venues (venue_id, venue_name, city, country, capacity)
    VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(venue_id) DO UPDATE SET
        city     = excluded.city,
        country  = excluded.country,
        capacity = excluded.capacity";

const UPSERT_MATCH: &str = "
    INSERT INTO matches
        (match_id, series_id, match_description, team_a_id, team_b_id, match_date,
         venue_id, winning_team_id, victory_margin_type, victory_margin,
         toss_winner_team_id, toss_decision)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
    ON CONFLICT(match_id) DO UPDATE SET
        winning_team_id     = excluded.winning_team_id,
        victory_margin_type = excluded.victory_margin_type,
        victory_margin      = excluded.victory_margin,
        toss_winner_team_id = excluded.toss_winner_team_id,
        toss_decision       = excluded.toss_decision";

const INSERT_PLAYER_IF_ABSENT: &str = "
    INSERT OR IGNORE INTO players
        (player_id, player_name, team_id, role, batting_style, bowling_style)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

const UPSERT_BATTING: &str = "
    INSERT INTO batting_stats
        (match_id, player_id, team_id, innings_number, runs_scored, balls_faced,
         batting_position, is_out)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    ON CONFLICT(match_id, player_id, innings_number) DO UPDATE SET
        runs_scored      = excluded.runs_scored,
        balls_faced      = excluded.balls_faced,
        batting_position = excluded.batting_position,
        is_out           = excluded.is_out";

const UPSERT_BOWLING: &str = "
    INSERT INTO bowling_stats
        (match_id, player_id, team_id, overs_bowled, runs_conceded, wickets_taken, maidens)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(match_id, player_id) DO UPDATE SET
        overs_bowled  = excluded.overs_bowled,
        runs_conceded = excluded.runs_conceded,
        wickets_taken = excluded.wickets_taken,
        maidens       = excluded.maidens";

const MATCH_COLUMNS: &str = "match_id, series_id, match_description, team_a_id, team_b_id,
    match_date, venue_id, winning_team_id, victory_margin_type, victory_margin,
    toss_winner_team_id, toss_decision";

impl CricketDatabase {
    /// Insert or refresh series rows. The series name of an existing row is kept.
    pub fn upsert_series(&mut self, rows: &[Series]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(UPSERT_SERIES)?;
            for s in rows {
                stmt.execute(params![
                    s.series_id.as_i64(),
                    s.series_name,
                    s.host_country,
                    s.match_type,
                    s.start_date,
                    s.total_matches
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    pub fn upsert_teams(&mut self, rows: &[Team]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(UPSERT_TEAM)?;
            for t in rows {
                stmt.execute(params![t.team_id.as_i64(), t.team_name, t.country])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    pub fn upsert_venues(&mut self, rows: &[Venue]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(UPSERT_VENUE)?;
            for v in rows {
                stmt.execute(params![
                    v.venue_id.as_i64(),
                    v.venue_name,
                    v.city,
                    v.country,
                    v.capacity
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    /// Insert matches or refresh their result and toss columns.
    pub fn upsert_matches(&mut self, rows: &[Match]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(UPSERT_MATCH)?;
            for m in rows {
                stmt.execute(params![
                    m.match_id.as_i64(),
                    m.series_id.map(|s| s.as_i64()),
                    m.match_description,
                    m.team_a_id.as_i64(),
                    m.team_b_id.as_i64(),
                    m.match_date,
                    m.venue_id.as_i64(),
                    m.winning_team_id.map(|t| t.as_i64()),
                    m.victory_margin_type,
                    m.victory_margin,
                    m.toss_winner_team_id.map(|t| t.as_i64()),
                    m.toss_decision
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    /// Write one match's scorecard: players first (insert-if-absent), then
    /// batting and bowling rows. Returns the number of stat rows written.
    pub fn record_scorecard(&mut self, rows: &ScorecardRows) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut player_stmt = tx.prepare_cached(INSERT_PLAYER_IF_ABSENT)?;
            for p in &rows.players {
                player_stmt.execute(params![
                    p.player_id.map(|id| id.as_i64()),
                    p.player_name,
                    p.team_id.map(|t| t.as_i64()),
                    p.role,
                    p.batting_style,
                    p.bowling_style
                ])?;
            }

            let mut bat_stmt = tx.prepare_cached(UPSERT_BATTING)?;
            for b in &rows.batting {
                bat_stmt.execute(params![
                    b.match_id.as_i64(),
                    b.player_id.as_i64(),
                    b.team_id.as_i64(),
                    b.innings_number,
                    b.runs_scored,
                    b.balls_faced,
                    b.batting_position,
                    b.is_out
                ])?;
            }

            let mut bowl_stmt = tx.prepare_cached(UPSERT_BOWLING)?;
            for b in &rows.bowling {
                bowl_stmt.execute(params![
                    b.match_id.as_i64(),
                    b.player_id.as_i64(),
                    b.team_id.as_i64(),
                    b.overs_bowled,
                    b.runs_conceded,
                    b.wickets_taken,
                    b.maidens
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.batting.len() + rows.bowling.len())
    }

    /// Number of rows in a table
    pub fn count(&self, table: Table) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }

    pub fn team_exists(&self, team_id: TeamId) -> Result<bool> {
        self.exists("SELECT 1 FROM teams WHERE team_id = ?", team_id.as_i64())
    }

    pub fn venue_exists(&self, venue_id: VenueId) -> Result<bool> {
        self.exists("SELECT 1 FROM venues WHERE venue_id = ?", venue_id.as_i64())
    }

    fn exists(&self, sql: &str, id: i64) -> Result<bool> {
        let found = self
            .conn
            .query_row(sql, params![id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// Every match id in the store, ascending
    pub fn match_ids(&self) -> Result<Vec<MatchId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT match_id FROM matches ORDER BY match_id")?;
        let rows = stmt.query_map([], |row| Ok(MatchId::new(row.get(0)?)))?;

        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids)
    }

    pub fn get_series(&self, series_id: SeriesId) -> Result<Option<Series>> {
        let series = self
            .conn
            .query_row(
                "SELECT series_id, series_name, host_country, match_type, start_date, total_matches
                 FROM series WHERE series_id = ?",
                params![series_id.as_i64()],
                |row| {
                    Ok(Series {
                        series_id: SeriesId::new(row.get(0)?),
                        series_name: row.get(1)?,
                        host_country: row.get(2)?,
                        match_type: row.get(3)?,
                        start_date: row.get(4)?,
                        total_matches: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(series)
    }

    pub fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT team_id, team_name, country FROM teams WHERE team_id = ?",
                params![team_id.as_i64()],
                |row| {
                    Ok(Team {
                        team_id: TeamId::new(row.get(0)?),
                        team_name: row.get(1)?,
                        country: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(team)
    }

    pub fn get_venue(&self, venue_id: VenueId) -> Result<Option<Venue>> {
        let venue = self
            .conn
            .query_row(
                "SELECT venue_id, venue_name, city, country, capacity FROM venues WHERE venue_id = ?",
                params![venue_id.as_i64()],
                |row| {
                    Ok(Venue {
                        venue_id: VenueId::new(row.get(0)?),
                        venue_name: row.get(1)?,
                        city: row.get(2)?,
                        country: row.get(3)?,
                        capacity: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(venue)
    }

    pub fn get_match(&self, match_id: MatchId) -> Result<Option<Match>> {
        let sql = format!("SELECT {} FROM matches WHERE match_id = ?", MATCH_COLUMNS);
        let found = self
            .conn
            .query_row(&sql, params![match_id.as_i64()], row_to_match)
            .optional()?;
        Ok(found)
    }

    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT player_id, player_name, team_id, role, batting_style, bowling_style
                 FROM players WHERE player_id = ?",
                params![player_id.as_i64()],
                |row| {
                    Ok(Player {
                        player_id: row.get::<_, Option<i64>>(0)?.map(PlayerId::new),
                        player_name: row.get(1)?,
                        team_id: row.get::<_, Option<i64>>(2)?.map(TeamId::new),
                        role: row.get(3)?,
                        batting_style: row.get(4)?,
                        bowling_style: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(player)
    }

    /// Batting rows for a match, ordered by innings then batting position
    pub fn get_batting_stats(&self, match_id: MatchId) -> Result<Vec<BattingStat>> {
        let mut stmt = self.conn.prepare(
            "SELECT match_id, player_id, team_id, innings_number, runs_scored, balls_faced,
                    batting_position, is_out
             FROM batting_stats WHERE match_id = ?
             ORDER BY innings_number, batting_position",
        )?;
        let rows = stmt.query_map(params![match_id.as_i64()], |row| {
            Ok(BattingStat {
                match_id: MatchId::new(row.get(0)?),
                player_id: PlayerId::new(row.get(1)?),
                team_id: TeamId::new(row.get(2)?),
                innings_number: row.get(3)?,
                runs_scored: row.get(4)?,
                balls_faced: row.get(5)?,
                batting_position: row.get(6)?,
                is_out: row.get(7)?,
            })
        })?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }

    pub fn get_bowling_stats(&self, match_id: MatchId) -> Result<Vec<BowlingStat>> {
        let mut stmt = self.conn.prepare(
            "SELECT match_id, player_id, team_id, overs_bowled, runs_conceded, wickets_taken, maidens
             FROM bowling_stats WHERE match_id = ?
             ORDER BY player_id",
        )?;
        let rows = stmt.query_map(params![match_id.as_i64()], |row| {
            Ok(BowlingStat {
                match_id: MatchId::new(row.get(0)?),
                player_id: PlayerId::new(row.get(1)?),
                team_id: TeamId::new(row.get(2)?),
                overs_bowled: row.get(3)?,
                runs_conceded: row.get(4)?,
                wickets_taken: row.get(5)?,
                maidens: row.get(6)?,
            })
        })?;

        let mut stats = Vec::new();
        for row in rows {
            stats.push(row?);
        }
        Ok(stats)
    }

    /// Add a player by hand. SQLite assigns an id when `player_id` is `None`.
    pub fn add_player(&mut self, player: &Player) -> Result<PlayerId> {
        self.conn.execute(
            "INSERT INTO players (player_id, player_name, team_id, role, batting_style, bowling_style)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                player.player_id.map(|id| id.as_i64()),
                player.player_name,
                player.team_id.map(|t| t.as_i64()),
                player.role,
                player.batting_style,
                player.bowling_style
            ],
        )?;
        Ok(PlayerId::new(self.conn.last_insert_rowid()))
    }

    /// Apply the non-empty fields of `update`. Returns false when no player has that id.
    pub fn update_player(&mut self, player_id: PlayerId, update: &PlayerUpdate) -> Result<bool> {
        if update.is_empty() {
            return Ok(self.get_player(player_id)?.is_some());
        }

        let mut assignments: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(name) = &update.player_name {
            assignments.push("player_name = ?");
            params.push(Box::new(name.clone()));
        }
        if let Some(team_id) = update.team_id {
            assignments.push("team_id = ?");
            params.push(Box::new(team_id.as_i64()));
        }
        if let Some(role) = &update.role {
            assignments.push("role = ?");
            params.push(Box::new(role.clone()));
        }
        if let Some(style) = &update.batting_style {
            assignments.push("batting_style = ?");
            params.push(Box::new(style.clone()));
        }
        if let Some(style) = &update.bowling_style {
            assignments.push("bowling_style = ?");
            params.push(Box::new(style.clone()));
        }
        params.push(Box::new(player_id.as_i64()));

        let sql = format!(
            "UPDATE players SET {} WHERE player_id = ?",
            assignments.join(", ")
        );
        let changed = self.conn.execute(
            &sql,
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
        )?;
        Ok(changed > 0)
    }

    /// Delete a player. Fails with a foreign key error while stats reference them.
    pub fn delete_player(&mut self, player_id: PlayerId) -> Result<bool> {
        let changed = self.conn.execute(
            "DELETE FROM players WHERE player_id = ?",
            params![player_id.as_i64()],
        )?;
        Ok(changed > 0)
    }

    /// Players with their team names, ordered by name
    pub fn list_players(&self, limit: Option<u32>) -> Result<Vec<PlayerListing>> {
        let mut sql = String::from(
            "SELECT p.player_id, p.player_name, p.role, t.team_name
             FROM players p
             LEFT JOIN teams t ON t.team_id = p.team_id
             ORDER BY p.player_name, p.player_id",
        );
        if let Some(l) = limit {
            sql.push_str(&format!(" LIMIT {}", l));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(PlayerListing {
                player_id: PlayerId::new(row.get(0)?),
                player_name: row.get(1)?,
                role: row.get(2)?,
                team_name: row.get(3)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Clear all data from the database, children first
    pub fn clear_all_data(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        for table in Table::ALL.iter().rev() {
            tx.execute(&format!("DELETE FROM {}", table.name()), [])?;
        }
        tx.commit()?;
        Ok(())
    }
}

fn row_to_match(row: &Row) -> rusqlite::Result<Match> {
    Ok(Match {
        match_id: MatchId::new(row.get(0)?),
        series_id: row.get::<_, Option<i64>>(1)?.map(SeriesId::new),
        match_description: row.get(2)?,
        team_a_id: TeamId::new(row.get(3)?),
        team_b_id: TeamId::new(row.get(4)?),
        match_date: row.get(5)?,
        venue_id: VenueId::new(row.get(6)?),
        winning_team_id: row.get::<_, Option<i64>>(7)?.map(TeamId::new),
        victory_margin_type: row.get(8)?,
        victory_margin: row.get(9)?,
        toss_winner_team_id: row.get::<_, Option<i64>>(10)?.map(TeamId::new),
        toss_decision: row.get(11)?,
    })
}
