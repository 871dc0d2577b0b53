//! CLI argument definitions and parsing structures.

use super::types::{MatchId, PlayerId, PlayerRole, TeamId};
use crate::ingest::Stage;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "cricbuzz-stats", about = "Cricket analytics over the Cricbuzz API", version)]
pub struct Cli {
    /// SQLite database path. Defaults to `CRICBUZZ_DB_PATH`, then the data directory.
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pull series, teams, venues, matches and scorecards into the database.
    ///
    /// Stages run in dependency order; a stage whose prerequisites are not in
    /// the database yet fails without fetching anything.
    Ingest {
        /// Run only these stages (repeatable): `--stage teams --stage venues`.
        #[clap(long = "stage")]
        stages: Vec<Stage>,
    },

    /// Canned SQL analytics over the local database.
    Analytics {
        #[clap(subcommand)]
        cmd: AnalyticsCmd,
    },

    /// Add, list, update or delete players.
    Players {
        #[clap(subcommand)]
        cmd: PlayersCmd,
    },

    /// Show live matches, or one match's scorecard with `--match-id`.
    Live {
        #[clap(long)]
        match_id: Option<MatchId>,
    },

    /// Overview of the local database.
    Home,

    /// Fetch one API endpoint and print the raw JSON.
    Fetch {
        /// Endpoint name: live-matches, recent-matches, match-details,
        /// scorecard, commentary, overs, player-info, player-stats,
        /// player-search, venues, venue-matches, venue-stats, series-list,
        /// series-squads, series-stats, teams, team-stats, team-results.
        endpoint: String,

        /// Match, player, venue, series or team id the endpoint is keyed by.
        id: Option<i64>,

        /// Search text for `player-search`.
        #[clap(long)]
        search: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AnalyticsCmd {
    /// List the available queries.
    List,

    /// Run one query by number (`5`, `Q5`).
    Run {
        query: String,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayersCmd {
    /// List stored players with their team names.
    List,

    /// Add a player by hand.
    Add {
        #[clap(long)]
        name: String,

        #[clap(long)]
        team_id: TeamId,

        /// Batsman | Bowler | All-rounder | Wicket-keeper
        #[clap(long)]
        role: PlayerRole,

        #[clap(long)]
        batting_style: Option<String>,

        #[clap(long)]
        bowling_style: Option<String>,

        /// Use this id instead of letting the database assign one.
        #[clap(long)]
        id: Option<PlayerId>,
    },

    /// Change fields of an existing player.
    Update {
        id: PlayerId,

        #[clap(long)]
        name: Option<String>,

        #[clap(long)]
        team_id: Option<TeamId>,

        #[clap(long)]
        role: Option<PlayerRole>,

        #[clap(long)]
        batting_style: Option<String>,

        #[clap(long)]
        bowling_style: Option<String>,
    },

    /// Delete a player without recorded stats.
    Delete { id: PlayerId },
}
