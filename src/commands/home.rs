//! `home`: a short overview of the store.

use crate::{output::render_table, storage::CricketDatabase, Result};
use std::io::Write;

const SAMPLE_SIZE: u32 = 5;

pub fn handle_home(db: &CricketDatabase, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Welcome to the Cricket Analytics Dashboard")?;
    writeln!(out, "Your one-stop solution for cricket data analysis.")?;
    writeln!(out, "---")?;

    let players = db.list_players(Some(SAMPLE_SIZE))?;
    if players.is_empty() {
        writeln!(out, "No players in DB yet.")?;
        return Ok(());
    }

    let columns = ["player_name", "role", "team_name"].map(String::from);
    let rows: Vec<Vec<String>> = players
        .into_iter()
        .map(|p| {
            vec![
                p.player_name,
                p.role.unwrap_or_default(),
                p.team_name.unwrap_or_default(),
            ]
        })
        .collect();
    write!(out, "{}", render_table(&columns, &rows))?;
    Ok(())
}
