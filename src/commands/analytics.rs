//! `analytics`: list and run catalog queries.

use crate::{
    catalog::{find_query, run_query, QUERIES},
    output::render_result,
    storage::CricketDatabase,
    Result,
};
use log::warn;
use std::io::Write;

pub fn handle_analytics_list(out: &mut impl Write) -> Result<()> {
    for query in QUERIES.iter() {
        writeln!(out, "{}", query.title())?;
    }
    Ok(())
}

/// Run one query. An unknown query id is an error; a failure while executing
/// the query is printed and the command still succeeds.
pub fn handle_analytics_run(
    db: &CricketDatabase,
    query: &str,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let def = find_query(query)?;

    let table = match run_query(db, def) {
        Ok(t) => t,
        Err(e) => {
            warn!("{} failed: {}", def.title(), e);
            writeln!(out, "Query error: {}", e)?;
            return Ok(());
        }
    };

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
        return Ok(());
    }

    writeln!(out, "{}", def.title())?;
    if table.is_empty() {
        writeln!(out, "No rows.")?;
    } else {
        write!(out, "{}", render_result(&table))?;
    }
    Ok(())
}
