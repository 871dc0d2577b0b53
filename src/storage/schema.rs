//! Database schema and connection management

use super::functions::register_functions;
use crate::error::Result;
use rusqlite::Connection;
use std::fmt;
use std::path::Path;

/// Tables owned by the store, in the order ingestion fills them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Series,
    Teams,
    Venues,
    Matches,
    Players,
    BattingStats,
    BowlingStats,
}

impl Table {
    pub const ALL: [Table; 7] = [
        Table::Series,
        Table::Teams,
        Table::Venues,
        Table::Matches,
        Table::Players,
        Table::BattingStats,
        Table::BowlingStats,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Series => "series",
            Table::Teams => "teams",
            Table::Venues => "venues",
            Table::Matches => "matches",
            Table::Players => "players",
            Table::BattingStats => "batting_stats",
            Table::BowlingStats => "bowling_stats",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS series (
    series_id INTEGER PRIMARY KEY,
    series_name TEXT NOT NULL,
    host_country TEXT,
    match_type TEXT,
    start_date TEXT,
    total_matches INTEGER
);

CREATE TABLE IF NOT EXISTS teams (
    team_id INTEGER PRIMARY KEY,
    team_name TEXT NOT NULL,
    country TEXT
);

CREATE TABLE IF NOT EXISTS venues (
    venue_id INTEGER PRIMARY KEY,
    venue_name TEXT NOT NULL,
    city TEXT,
    country TEXT,
    capacity INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS matches (
    match_id INTEGER PRIMARY KEY,
    series_id INTEGER,
    match_description TEXT,
    team_a_id INTEGER NOT NULL REFERENCES teams(team_id),
    team_b_id INTEGER NOT NULL REFERENCES teams(team_id),
    match_date TEXT,
    venue_id INTEGER NOT NULL REFERENCES venues(venue_id),
    winning_team_id INTEGER REFERENCES teams(team_id),
    victory_margin_type TEXT,
    victory_margin INTEGER,
    toss_winner_team_id INTEGER REFERENCES teams(team_id),
    toss_decision TEXT,
    CHECK (team_a_id <> team_b_id)
);

CREATE TABLE IF NOT EXISTS players (
    player_id INTEGER PRIMARY KEY,
    player_name TEXT NOT NULL,
    team_id INTEGER REFERENCES teams(team_id),
    role TEXT,
    batting_style TEXT,
    bowling_style TEXT
);

CREATE TABLE IF NOT EXISTS batting_stats (
    match_id INTEGER NOT NULL REFERENCES matches(match_id),
    player_id INTEGER NOT NULL REFERENCES players(player_id),
    team_id INTEGER REFERENCES teams(team_id),
    innings_number INTEGER NOT NULL,
    runs_scored INTEGER NOT NULL DEFAULT 0,
    balls_faced INTEGER NOT NULL DEFAULT 0,
    batting_position INTEGER NOT NULL DEFAULT 0,
    is_out INTEGER NOT NULL DEFAULT 1,
    PRIMARY KEY (match_id, player_id, innings_number)
);

CREATE TABLE IF NOT EXISTS bowling_stats (
    match_id INTEGER NOT NULL REFERENCES matches(match_id),
    player_id INTEGER NOT NULL REFERENCES players(player_id),
    team_id INTEGER REFERENCES teams(team_id),
    overs_bowled REAL NOT NULL DEFAULT 0,
    runs_conceded INTEGER NOT NULL DEFAULT 0,
    wickets_taken INTEGER NOT NULL DEFAULT 0,
    maidens INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (match_id, player_id)
);

CREATE INDEX IF NOT EXISTS idx_matches_date ON matches(match_date);
CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id);
CREATE INDEX IF NOT EXISTS idx_batting_player ON batting_stats(player_id);
CREATE INDEX IF NOT EXISTS idx_bowling_player ON bowling_stats(player_id);
";

/// Connection to the cricket analytics database.
///
/// Every write batch runs in its own transaction; see `queries`.
pub struct CricketDatabase {
    pub(crate) conn: Connection,
}

impl CricketDatabase {
    /// Open (or create) the database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Self::from_connection(Connection::open(path)?)
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        register_functions(&conn)?;

        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}
