//! `players`: manual player maintenance.
//!
//! Database failures (an unknown team, a duplicate id, a player that still
//! has stats) are reported on the output and do not fail the command.

use crate::{
    cli::types::PlayerId,
    error::CricError,
    output::render_table,
    storage::{CricketDatabase, Player, PlayerUpdate},
    Result,
};
use std::io::Write;

pub fn handle_players_list(db: &CricketDatabase, out: &mut impl Write) -> Result<()> {
    let players = db.list_players(None)?;
    if players.is_empty() {
        writeln!(out, "No players in DB yet.")?;
        return Ok(());
    }

    let columns = ["player_id", "player_name", "role", "team_name"].map(String::from);
    let rows: Vec<Vec<String>> = players
        .into_iter()
        .map(|p| {
            vec![
                p.player_id.to_string(),
                p.player_name,
                p.role.unwrap_or_default(),
                p.team_name.unwrap_or_default(),
            ]
        })
        .collect();
    write!(out, "{}", render_table(&columns, &rows))?;
    Ok(())
}

/// Returns the new id, or `None` when the store refused the row.
pub fn handle_players_add(
    db: &mut CricketDatabase,
    player: &Player,
    out: &mut impl Write,
) -> Result<Option<PlayerId>> {
    match db.add_player(player) {
        Ok(id) => {
            writeln!(out, "Added player: {} (id {})", player.player_name, id)?;
            Ok(Some(id))
        }
        Err(CricError::Database(e)) => {
            writeln!(out, "Failed to add: {}", e)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub fn handle_players_update(
    db: &mut CricketDatabase,
    player_id: PlayerId,
    update: &PlayerUpdate,
    out: &mut impl Write,
) -> Result<bool> {
    if update.is_empty() {
        writeln!(out, "Nothing to update for player {}", player_id)?;
        return Ok(false);
    }

    match db.update_player(player_id, update) {
        Ok(true) => {
            writeln!(out, "Updated player {}", player_id)?;
            Ok(true)
        }
        Ok(false) => {
            writeln!(out, "No player with id {}", player_id)?;
            Ok(false)
        }
        Err(CricError::Database(e)) => {
            writeln!(out, "Failed to update: {}", e)?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

pub fn handle_players_delete(
    db: &mut CricketDatabase,
    player_id: PlayerId,
    out: &mut impl Write,
) -> Result<bool> {
    match db.delete_player(player_id) {
        Ok(true) => {
            writeln!(out, "Deleted player {}", player_id)?;
            Ok(true)
        }
        Ok(false) => {
            writeln!(out, "No player with id {}", player_id)?;
            Ok(false)
        }
        Err(CricError::Database(e)) => {
            writeln!(out, "Failed to delete: {}", e)?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
